//! Database migration utilities

use std::path::Path;

use crate::Config;

/// Run all database migrations
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Migrating database");

    let pool = greenloop_db::create_pool(&config.database.url, 1).await?;
    greenloop_db::migrate(&pool).await?;
    pool.close().await;

    Ok(())
}

/// Drop the database if it exists and recreate it with migrations
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    let path = config.database.url.trim_start_matches("sqlite:");

    if Path::new(path).exists() {
        std::fs::remove_file(path)?;
        tracing::info!("Dropped database: {path}");
    }

    migrate(config).await
}
