//! Library crate for games-smoke, exposing modules for the binary and integration tests.

pub mod runner;
pub mod supabase;
