//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use desk_config::{ConfigError, DeskConfig};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

fn figment_with(file: &str) -> Figment {
    Figment::from(Serialized::defaults(DeskConfig::default())).merge(Toml::file(file))
}

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.deskhub.example"
timeout_secs = 3
user_agent = "deskhub-test/1.0"
"#,
        )?;

        let config: DeskConfig = figment_with("config.toml").extract()?;

        assert_eq!(config.api.base_url, "https://api.deskhub.example");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.api.user_agent, "deskhub-test/1.0");
        Ok(())
    });
}

#[test]
fn loads_configurator_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[configurator]
generation_delay_ms = 10
generation_timeout_ms = 500
purchase_min_score = 80
",
        )?;

        let config: DeskConfig = figment_with("config.toml").extract()?;

        assert_eq!(config.configurator.generation_delay_ms, 10);
        assert_eq!(config.configurator.generation_timeout_ms, 500);
        assert_eq!(config.configurator.purchase_min_score, 80);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[general]
default_limit = 5
",
        )?;

        let config: DeskConfig = figment_with("config.toml").extract()?;

        assert_eq!(config.general.default_limit, 5);
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.configurator.generation_delay_ms, 2500);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".deskhub"))
            .map_err(|e| e.to_string())?;
        jail.create_file(
            ".deskhub/config.toml",
            r"
[configurator]
purchase_min_score = 90
",
        )?;

        let config = DeskConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.configurator.purchase_min_score, 90);
        Ok(())
    });
}

#[test]
fn out_of_range_score_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[configurator]
purchase_min_score = 150
",
        )?;

        let result = DeskConfig::from_figment(&figment_with("config.toml"));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
