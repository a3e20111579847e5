use anyhow::Context;
use figment::providers::{Format, Serialized, Toml};
use insights_config::{DatabaseConfig, InsightsConfig};
use insights_db::InsightsDb;

use crate::cli::Cli;

/// Resolve configuration: `.env`, the standard figment chain, then the
/// `--config` file and individual flag overrides on top.
pub fn load_config(cli: &Cli) -> anyhow::Result<InsightsConfig> {
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            tracing::warn!(%error, "failed to read .env; continuing without it");
        }
    }

    let mut figment = InsightsConfig::figment();

    if let Some(path) = &cli.config {
        anyhow::ensure!(
            path.is_file(),
            "config file '{}' does not exist",
            path.display()
        );
        figment = figment.merge(Toml::file(path));
    }
    if let Some(port) = cli.port {
        figment = figment.merge(Serialized::default("server.port", port));
    }
    if let Some(db) = &cli.db {
        figment = figment.merge(Serialized::default("database.path", db));
    }

    InsightsConfig::from_figment(&figment).context("failed to load configuration")
}

/// Open the store, creating its parent directory and the schema if needed.
pub async fn open_database(config: &DatabaseConfig) -> anyhow::Result<InsightsDb> {
    if let Some(dir) = config.parent_dir() {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("failed to create database directory {}", dir.display()))?;
    }

    tracing::info!(path = %config.path.display(), "opening database");
    InsightsDb::open_local(&config.path)
        .await
        .with_context(|| format!("failed to open database at {}", config.path.display()))
}
