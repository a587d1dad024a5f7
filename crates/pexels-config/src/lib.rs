// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::Path;

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = ".apiConfig";

/// Key name used by existing `.apiConfig` files. Read when `api_key` is unset.
pub const LEGACY_API_KEY: &str = "pexelApiKey";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    /// Log file, opened in append mode.
    pub log_file: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: "pexels_client.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub api_key: String,
    pub photo_base_url: Option<String>,
    pub video_base_url: Option<String>,
    pub collection_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            warn!(target: "config", "API key is missing in the config file");
            bail!("api key is missing in the config file");
        }
        Ok(())
    }
}

/// Load configuration from defaults, a required JSON file, and environment
/// overrides (prefix: PEXELS_, nested keys split on `__`).
pub fn load(config_path: &Path) -> Result<AppConfig> {
    info!(target: "config", path = %config_path.display(), "loading configuration");

    if !config_path.is_file() {
        bail!("failed to open config file: {}", config_path.display());
    }

    let figment = Figment::from(Serialized::defaults(AppConfig::default()))
        .merge(Json::file(config_path))
        .merge(Env::prefixed("PEXELS_").split("__"));

    from_figment(figment)
}

fn from_figment(figment: Figment) -> Result<AppConfig> {
    let mut config: AppConfig = figment
        .extract()
        .context("failed to decode config JSON")?;

    if config.api_key.trim().is_empty() {
        if let Ok(key) = figment.extract_inner::<String>(LEGACY_API_KEY) {
            info!(target: "config", "using API key from {}", LEGACY_API_KEY);
            config.api_key = key;
        }
    }
    config.validate()?;

    info!(target: "config", "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn loads_api_key_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.json", r#"{"api_key": "file-key"}"#)?;

            let config = load(Path::new("config.json")).expect("config should load");
            assert_eq!(config.api_key, "file-key");
            assert_eq!(config.telemetry.log_level, "info");
            assert_eq!(config.telemetry.log_file, "pexels_client.log");
            assert_eq!(config.timeout_secs, None);
            Ok(())
        });
    }

    #[test]
    fn loads_legacy_api_key_name() {
        Jail::expect_with(|jail| {
            jail.create_file(".apiConfig", r#"{"pexelApiKey": "real-key"}"#)?;

            let config = load(Path::new(DEFAULT_CONFIG_PATH)).expect("config should load");
            assert_eq!(config.api_key, "real-key");
            Ok(())
        });
    }

    #[test]
    fn api_key_takes_precedence_over_legacy_name() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.json",
                r#"{"api_key": "new-key", "pexelApiKey": "old-key"}"#,
            )?;

            let config = load(Path::new("config.json")).expect("config should load");
            assert_eq!(config.api_key, "new-key");
            Ok(())
        });
    }

    #[test]
    fn environment_key_overrides_legacy_name() {
        Jail::expect_with(|jail| {
            jail.create_file("config.json", r#"{"pexelApiKey": "old-key"}"#)?;
            jail.set_env("PEXELS_API_KEY", "env-key");

            let config = load(Path::new("config.json")).expect("config should load");
            assert_eq!(config.api_key, "env-key");
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.json", r#"{"api_key": "file-key"}"#)?;
            jail.set_env("PEXELS_API_KEY", "env-key");
            jail.set_env("PEXELS_TELEMETRY__LOG_LEVEL", "debug");

            let config = load(Path::new("config.json")).expect("config should load");
            assert_eq!(config.api_key, "env-key");
            assert_eq!(config.telemetry.log_level, "debug");
            Ok(())
        });
    }

    #[test]
    fn reads_optional_overrides() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.json",
                r#"{
                    "api_key": "file-key",
                    "photo_base_url": "http://localhost:9000/v1/",
                    "timeout_secs": 5,
                    "telemetry": {"log_file": "custom.log"}
                }"#,
            )?;

            let config = load(Path::new("config.json")).expect("config should load");
            assert_eq!(
                config.photo_base_url.as_deref(),
                Some("http://localhost:9000/v1/")
            );
            assert_eq!(config.video_base_url, None);
            assert_eq!(config.timeout_secs, Some(5));
            assert_eq!(config.telemetry.log_file, "custom.log");
            assert_eq!(config.telemetry.log_level, "info");
            Ok(())
        });
    }

    #[test]
    fn missing_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let err = load(Path::new("does-not-exist.json")).unwrap_err();
            assert!(err.to_string().contains("failed to open config file"));
            Ok(())
        });
    }

    #[test]
    fn malformed_json_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("config.json", "{ not json")?;
            assert!(load(Path::new("config.json")).is_err());
            Ok(())
        });
    }

    #[test]
    fn empty_api_key_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("config.json", r#"{"api_key": "   "}"#)?;
            let err = load(Path::new("config.json")).unwrap_err();
            assert!(err.to_string().contains("api key is missing"));
            Ok(())
        });
    }

    #[test]
    fn absent_api_key_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("config.json", r#"{"telemetry": {"log_level": "warn"}}"#)?;
            assert!(load(Path::new("config.json")).is_err());
            Ok(())
        });
    }
}
