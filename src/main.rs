//! games-smoke binary entrypoint: connect to the hosted project, run both
//! read queries, print the report. Exits 0 even when a query fails.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use games_smoke::runner::QueryRunner;
use games_smoke::supabase::{SupabaseClient, SupabaseConfig};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = SupabaseConfig::from_env();
    let report = match SupabaseClient::connect(config) {
        Ok(client) => QueryRunner::new(client).run().await,
        Err(err) => vec![format!("Error: {err}")],
    };

    for line in report {
        println!("{line}");
    }
}

/// Configure tracing subscribers so diagnostics stay apart from the report.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
