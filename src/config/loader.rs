//! Configuration loading from disk.
//!
//! Loading only reads and parses. Validation runs once, in
//! [`resolve_config`], after command-line overrides are applied.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values given on the command line that replace file settings.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub feed: Option<PathBuf>,
    pub watch: bool,
    pub bind: Option<String>,
}

/// Load configuration from a TOML file without validating it.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse configuration from TOML text without validating it.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Apply overrides, then validate the final configuration.
pub fn resolve_config(
    mut config: ServiceConfig,
    overrides: ConfigOverrides,
) -> Result<ServiceConfig, ConfigError> {
    if let Some(feed) = overrides.feed {
        config.feed.path = Some(feed);
    }
    if overrides.watch {
        config.feed.watch = true;
    }
    if let Some(bind) = overrides.bind {
        config.listener.bind_address = bind;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("placement.toml");
        fs::write(
            &path,
            "[listener]\nbind_address = \"127.0.0.1:9000\"\n[timeouts]\nrequest_secs = 5\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.timeouts.request_secs, 5);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_config("[listener\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation_error_message() {
        let config = parse_config("[timeouts]\nrequest_secs = 0\n").unwrap();
        let err = resolve_config(config, ConfigOverrides::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: timeouts.request_secs: must be greater than 0"
        );
    }

    #[test]
    fn test_watch_without_path_resolved_by_feed_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("placement.toml");
        fs::write(&path, "[feed]\nwatch = true\n").unwrap();

        let config = load_config(&path).unwrap();
        assert!(matches!(
            resolve_config(config.clone(), ConfigOverrides::default()),
            Err(ConfigError::Validation(_))
        ));

        let feed = dir.path().join("feed.txt");
        let resolved = resolve_config(
            config,
            ConfigOverrides {
                feed: Some(feed.clone()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(resolved.feed.path, Some(feed));
        assert!(resolved.feed.watch);
    }

    #[test]
    fn test_bind_override_replaces_invalid_address() {
        let config = parse_config("[listener]\nbind_address = \"nowhere\"\n").unwrap();
        let resolved = resolve_config(
            config,
            ConfigOverrides {
                bind: Some("127.0.0.1:9100".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(resolved.listener.bind_address, "127.0.0.1:9100");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_config(&dir.path().join("absent.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
