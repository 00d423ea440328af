//! Minimal read-only client for the PostgREST surface of a Supabase project.

mod client;
mod config;
mod error;
mod models;

pub use client::{SupabaseClient, TableQuery};
pub use config::SupabaseConfig;
pub use error::{SupabaseError, SupabaseResult};
pub use models::{GameId, GameRecord, QueryResult};
