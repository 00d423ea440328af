use std::sync::Arc;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{
    config::SupabaseConfig,
    error::{SupabaseError, SupabaseResult},
    models::QueryResult,
};

/// Path prefix of the PostgREST surface behind a Supabase project.
const REST_PREFIX: &str = "rest/v1";

/// Read-only handle to the hosted project, cheap to clone.
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    base_url: Arc<str>,
    api_key: Arc<str>,
}

impl SupabaseClient {
    /// Build the HTTP client for the configured project.
    ///
    /// No request is issued here; connectivity problems surface on the first
    /// [`TableQuery::execute`].
    pub fn connect(config: SupabaseConfig) -> SupabaseResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| SupabaseError::ClientBuilder { source })?;

        Ok(Self {
            client,
            base_url: Arc::from(config.base_url.trim_end_matches('/')),
            api_key: Arc::from(config.api_key),
        })
    }

    /// Start a read query against the named table.
    pub fn table(&self, name: impl Into<String>) -> TableQuery {
        TableQuery {
            client: self.clone(),
            table: name.into(),
            columns: "*".to_string(),
            filters: Vec::new(),
        }
    }
}

/// Builder for a single read query against one table.
pub struct TableQuery {
    client: SupabaseClient,
    table: String,
    columns: String,
    filters: Vec<(String, String)>,
}

impl TableQuery {
    /// Restrict the returned columns; defaults to `*`.
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    /// Keep only rows where `column` equals `value`. Filters accumulate.
    pub fn eq(mut self, column: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.filters
            .push((column.into(), format!("eq.{}", value.as_ref())));
        self
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.columns.clone())];
        pairs.extend(self.filters.iter().cloned());
        pairs
    }

    /// Send the query and decode the JSON array the service answers with.
    pub async fn execute<T>(self) -> SupabaseResult<QueryResult<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}/{}", self.client.base_url, REST_PREFIX, self.table);
        debug!(table = %self.table, %url, "executing read query");

        let response = self
            .client
            .client
            .request(Method::GET, url)
            .query(&self.query_pairs())
            .header("apikey", self.client.api_key.as_ref())
            .bearer_auth(self.client.api_key.as_ref())
            .send()
            .await
            .map_err(|source| SupabaseError::RequestSend {
                table: self.table.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SupabaseError::RequestStatus {
                table: self.table,
                status,
            });
        }

        let data = response
            .json::<Vec<T>>()
            .await
            .map_err(|source| SupabaseError::DecodeResponse {
                table: self.table,
                source,
            })?;

        Ok(QueryResult { data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SupabaseClient {
        SupabaseClient::connect(SupabaseConfig::new("http://localhost:9", "test-key"))
            .expect("build client")
    }

    #[test]
    fn select_defaults_to_star() {
        let query = client().table("games");
        assert_eq!(
            query.query_pairs(),
            vec![("select".to_string(), "*".to_string())]
        );
    }

    #[test]
    fn eq_filters_accumulate_in_postgrest_form() {
        let query = client()
            .table("games")
            .select("id,status")
            .eq("status", "in_progress")
            .eq("winner", "white");
        assert_eq!(
            query.query_pairs(),
            vec![
                ("select".to_string(), "id,status".to_string()),
                ("status".to_string(), "eq.in_progress".to_string()),
                ("winner".to_string(), "eq.white".to_string()),
            ]
        );
    }

    #[test]
    fn trailing_slash_on_base_url_is_trimmed() {
        let client =
            SupabaseClient::connect(SupabaseConfig::new("http://localhost:9/", "test-key"))
                .expect("build client");
        assert_eq!(client.base_url.as_ref(), "http://localhost:9");
    }
}
