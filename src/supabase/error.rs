//! Error types shared by the Supabase client.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`SupabaseError`] failures.
pub type SupabaseResult<T> = Result<T, SupabaseError>;

/// Failures that can occur while querying the hosted project.
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build Supabase client")]
    ClientBuilder {
        #[source]
        source: reqwest::Error,
    },
    /// A request to a table endpoint could not be sent.
    #[error("failed to send request to table `{table}`")]
    RequestSend {
        /// Table the request targeted.
        table: String,
        #[source]
        source: reqwest::Error,
    },
    /// The service returned a non-success status code for a table query.
    #[error("unexpected response status {status} for table `{table}`")]
    RequestStatus {
        /// Table the request targeted.
        table: String,
        /// Status code the service answered with.
        status: StatusCode,
    },
    /// Response payload could not be decoded into the expected records.
    #[error("failed to decode response for table `{table}`")]
    DecodeResponse {
        /// Table the request targeted.
        table: String,
        #[source]
        source: reqwest::Error,
    },
}
