use figment::Jail;
use insights_config::{ConfigError, InsightsConfig};

#[test]
fn prefixed_env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("INSIGHTS_SERVER__PORT", "9191");
        jail.set_env("INSIGHTS_DATABASE__PATH", "/var/lib/insights/db.sqlite3");

        let config = InsightsConfig::load().expect("config loads");
        assert_eq!(config.server.port, 9191);
        assert_eq!(
            config.database.path.to_str(),
            Some("/var/lib/insights/db.sqlite3")
        );
        Ok(())
    });
}

#[test]
fn legacy_server_port_is_honoured() {
    Jail::expect_with(|jail| {
        jail.set_env("SERVER_PORT", "8000");

        let config = InsightsConfig::load().expect("config loads");
        assert_eq!(config.server.port, 8000);
        Ok(())
    });
}

#[test]
fn prefixed_port_beats_legacy_port() {
    Jail::expect_with(|jail| {
        jail.set_env("SERVER_PORT", "8000");
        jail.set_env("INSIGHTS_SERVER__PORT", "8001");

        let config = InsightsConfig::load().expect("config loads");
        assert_eq!(config.server.port, 8001);
        Ok(())
    });
}

#[test]
fn zero_port_from_env_is_invalid() {
    Jail::expect_with(|jail| {
        jail.set_env("INSIGHTS_SERVER__PORT", "0");

        let err = InsightsConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }), "{err}");
        Ok(())
    });
}

#[test]
fn non_numeric_port_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.set_env("SERVER_PORT", "eighty");

        let err = InsightsConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)), "{err}");
        Ok(())
    });
}
