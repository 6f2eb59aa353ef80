use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use social_graph::config::AppConfig;
use social_graph::shared::db;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    info!(environment = %config.environment, "Starting schema bootstrap...");

    let conn = Database::connect(config.connect_options()).await?;
    db::ping(&conn).await?;

    Migrator::up(&conn, None).await?;
    info!("Migrations applied");

    conn.close().await?;
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
