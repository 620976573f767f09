//! Loading [`Config`] from JSON files.

use pallet_layout_core::Config;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] pallet_layout_core::Error),
}

/// Reads and validates a configuration file. Missing fields take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigFileError> {
    let json = fs::read_to_string(path)?;
    parse_config(&json)
}

/// Parses and validates a configuration document.
pub fn parse_config(json: &str) -> Result<Config, ConfigFileError> {
    let config: Config = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(r#"{ "pallet_count": 20, "pallet_width": 1.0 }"#).unwrap();
        assert_eq!(config.pallet_count, 20);
        assert_eq!(config.pallet_width, 1.0);
        assert_eq!(config.trailer_length, 13.6);
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let err = parse_config(r#"{ "trailer_width": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigFileError::Invalid(_)));

        let err = parse_config("{ not json").unwrap_err();
        assert!(matches!(err, ConfigFileError::JsonError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join("pallet_layout_test_load_config");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, r#"{ "trailer_width": 2.45, "spacing": 0.02 }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.trailer_width, 2.45);
        assert_eq!(config.spacing, 0.02);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/pallet-layout.json").unwrap_err();
        assert!(matches!(err, ConfigFileError::IoError(_)));
    }
}
