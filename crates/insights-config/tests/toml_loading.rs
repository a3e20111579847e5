//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use insights_config::{InsightsConfig, PROJECT_CONFIG_FILE};
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
host = "127.0.0.1"
port = 3000

[database]
path = "data/insights.sqlite3"
"#,
        )?;

        let config: InsightsConfig = Figment::from(Serialized::defaults(InsightsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.socket_addr(), "127.0.0.1:3000");
        assert_eq!(config.database.path.to_str(), Some("data/insights.sqlite3"));
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[server]\nport = 4000\n")?;

        let config: InsightsConfig = Figment::from(Serialized::defaults(InsightsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.path.to_str(), Some("tmp/db.sqlite3"));
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_and_env_wins() {
    Jail::expect_with(|jail| {
        jail.create_file(PROJECT_CONFIG_FILE, "[server]\nport = 5000\nhost = \"localhost\"\n")?;

        let config = InsightsConfig::load().expect("config loads");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "localhost");

        jail.set_env("INSIGHTS_SERVER__PORT", "5001");
        let config = InsightsConfig::load().expect("config loads");
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.server.host, "localhost");
        Ok(())
    });
}
