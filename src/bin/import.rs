//! Bulk CSV import entry point
//!
//! Usage: `import [data_dir]` — defaults to `./data`. Expects the CSV
//! dumps described in the import module, inserts in dependency order.

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medialog::{config::CONFIG, db, import};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./data"));

    tracing::info!(dir = %data_dir.display(), "Importing CSV data");

    let db_pool = db::create_pool(&CONFIG.database).await?;

    db::run_migrations(&db_pool).await?;

    import::import_all(&db_pool, &data_dir).await?;

    tracing::info!("Data imported successfully");

    Ok(())
}
