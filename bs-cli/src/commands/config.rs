//! Configuration commands.

use std::path::Path;

use clap::Subcommand;
use console::style;

use bs_core::config::AppConfig;
use bs_core::error::{BsError, BsResult};

use super::{or_dash, print_json};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration (secrets masked).
    Show,
    /// Print the configuration file path.
    Path,
    /// Set a value by key path and save the file.
    Set {
        /// Key path (e.g., "server.url", "server.rate_limit").
        key: String,
        /// New value.
        value: String,
    },
}

const MASK: &str = "********";

/// Resolve a dot-separated key path to a displayable value.
fn get_value(cfg: &AppConfig, key: &str) -> Option<String> {
    match key {
        "server.url" => Some(cfg.server.url.clone()),
        "server.token_id" => Some(cfg.server.token_id.clone()),
        "server.token_secret" => Some(if cfg.server.token_secret.is_empty() {
            String::new()
        } else {
            MASK.to_string()
        }),
        "server.rate_limit" => Some(cfg.server.rate_limit.to_string()),
        "server.insecure" => Some(cfg.server.insecure.to_string()),
        "server.timeout_ms" => Some(cfg.server.timeout_ms.to_string()),
        "logging.level" => Some(cfg.logging.level.clone()),
        "logging.directory" => Some(cfg.logging.directory.clone()),
        "logging.json_output" => Some(cfg.logging.json_output.to_string()),
        _ => None,
    }
}

const KEYS: &[&str] = &[
    "server.url",
    "server.token_id",
    "server.token_secret",
    "server.rate_limit",
    "server.insecure",
    "server.timeout_ms",
    "logging.level",
    "logging.directory",
    "logging.json_output",
];

/// Apply a value to a dot-separated key path on the config.
fn set_value(cfg: &mut AppConfig, key: &str, value: &str) -> Result<(), String> {
    match key {
        "server.url" => cfg.server.url = AppConfig::sanitize_url(value),
        "server.token_id" => cfg.server.token_id = value.trim().to_string(),
        "server.token_secret" => cfg.server.token_secret = value.trim().to_string(),
        "server.rate_limit" => {
            let rate: u32 = value.parse().map_err(|_| "invalid integer".to_string())?;
            if rate == 0 {
                return Err("rate_limit must be greater than zero".to_string());
            }
            cfg.server.rate_limit = rate;
        }
        "server.insecure" => {
            cfg.server.insecure = value.parse().map_err(|_| "expected true/false".to_string())?;
        }
        "server.timeout_ms" => {
            cfg.server.timeout_ms = value.parse().map_err(|_| "invalid integer".to_string())?;
        }
        "logging.level" => {
            let v = value.to_lowercase();
            if !["trace", "debug", "info", "warn", "error"].contains(&v.as_str()) {
                return Err("expected one of: trace, debug, info, warn, error".to_string());
            }
            cfg.logging.level = v;
        }
        "logging.directory" => cfg.logging.directory = value.to_string(),
        "logging.json_output" => {
            cfg.logging.json_output = value.parse().map_err(|_| "expected true/false".to_string())?;
        }
        _ => return Err(format!("unknown setting key: {key}")),
    }
    Ok(())
}

pub fn run(mut config: AppConfig, path: &Path, action: ConfigAction, format: OutputFormat) -> BsResult<()> {
    match action {
        ConfigAction::Show => match format {
            OutputFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> = KEYS
                    .iter()
                    .filter_map(|k| get_value(&config, k).map(|v| (k.to_string(), v.into())))
                    .collect();
                print_json(&map);
            }
            OutputFormat::Text => {
                println!("{}", style(path.display()).dim());
                for key in KEYS {
                    let value = get_value(&config, key).unwrap_or_default();
                    println!("  {:<22} {}", key, or_dash(&value));
                }
            }
        },

        ConfigAction::Path => println!("{}", path.display()),

        ConfigAction::Set { key, value } => {
            set_value(&mut config, &key, &value).map_err(BsError::Config)?;
            config.save_to_file(path)?;
            let shown = get_value(&config, &key).unwrap_or_default();
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({ "key": key, "value": shown })),
                OutputFormat::Text => println!("{} {} = {}", style("✓").green().bold(), key, shown),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut cfg = AppConfig::default();
        set_value(&mut cfg, "server.url", "docs.example.com").unwrap();
        assert_eq!(get_value(&cfg, "server.url").unwrap(), "https://docs.example.com");

        set_value(&mut cfg, "server.token_secret", "s3cret").unwrap();
        assert_eq!(get_value(&cfg, "server.token_secret").unwrap(), MASK);

        set_value(&mut cfg, "server.rate_limit", "60").unwrap();
        assert_eq!(cfg.server.rate_limit, 60);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut cfg = AppConfig::default();
        assert!(set_value(&mut cfg, "server.rate_limit", "0").is_err());
        assert!(set_value(&mut cfg, "server.insecure", "maybe").is_err());
        assert!(set_value(&mut cfg, "logging.level", "loud").is_err());
        assert!(set_value(&mut cfg, "server.nope", "1").is_err());
    }

    #[test]
    fn test_every_key_resolves() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(get_value(&cfg, key).is_some(), "{key}");
        }
    }

    #[test]
    fn test_set_saves_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        run(
            AppConfig::default(),
            &path,
            ConfigAction::Set { key: "server.url".into(), value: "localhost:6875".into() },
            OutputFormat::Json,
        )
        .unwrap();
        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.server.url, "http://localhost:6875");
    }
}
