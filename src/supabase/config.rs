use std::env;

/// Project URL the probe targets when no override is provided.
const DEFAULT_BASE_URL: &str = "https://gdiaotelevhqmesamrnx.supabase.co";
/// Publishable API key paired with [`DEFAULT_BASE_URL`].
const DEFAULT_API_KEY: &str = "sb_publishable_GmMBanAw-lgoZkJBFDK2NA_zX6CLwZ0";
/// Environment variable overriding [`DEFAULT_BASE_URL`].
const BASE_URL_ENV: &str = "SUPABASE_URL";
/// Environment variable overriding [`DEFAULT_API_KEY`].
const API_KEY_ENV: &str = "SUPABASE_KEY";

/// Runtime configuration describing how to reach the Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Base URL of the project, without the REST path prefix.
    pub base_url: String,
    /// API key sent as both the `apikey` header and the bearer token.
    pub api_key: String,
}

impl SupabaseConfig {
    /// Construct a configuration from an explicit base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a configuration from the environment, falling back to the
    /// baked-in project credentials when the variables are unset or empty.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_KEY.to_string());
        Self::new(base_url, api_key)
    }
}
