//! Drives the two smoke queries and assembles the printable report.

use tracing::warn;

use crate::supabase::{GameRecord, SupabaseClient, SupabaseResult};

/// Remote table exercised by the probe.
const GAMES_TABLE: &str = "games";
/// Status value used by the filtered query.
const ONGOING_STATUS: &str = "in_progress";

/// Runs the smoke queries against an established client.
pub struct QueryRunner {
    client: SupabaseClient,
}

impl QueryRunner {
    /// Wrap an established client.
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// Run both smoke queries and return the report lines in print order.
    ///
    /// Both queries share one failure boundary: if the first fails, the
    /// second is skipped entirely and a single `Error:` line closes the
    /// report. The caller decides what to do with the lines; the runner
    /// itself never terminates the process.
    pub async fn run(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Err(err) = self.run_queries(&mut lines).await {
            warn!(error = %err, "smoke query failed");
            lines.push(format!("Error: {err}"));
        }
        lines
    }

    async fn run_queries(&self, lines: &mut Vec<String>) -> SupabaseResult<()> {
        lines.push(format!("Testing '{GAMES_TABLE}' table..."));
        let all = self
            .client
            .table(GAMES_TABLE)
            .select("*")
            .execute::<GameRecord>()
            .await?;
        lines.push(format!("Total games found: {}", all.data.len()));
        for game in &all.data {
            lines.push(format!(
                "ID: {}, Title: {}, Status: {}",
                game.id, game.title, game.status
            ));
        }

        lines.push(format!("Testing '{ONGOING_STATUS}' filter..."));
        let ongoing = self
            .client
            .table(GAMES_TABLE)
            .select("*")
            .eq("status", ONGOING_STATUS)
            .execute::<GameRecord>()
            .await?;
        lines.push(format!("Ongoing games found: {}", ongoing.data.len()));

        Ok(())
    }
}
