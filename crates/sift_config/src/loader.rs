//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::SiftConfig;
use std::path::Path;

/// The configuration file name looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "sift.toml";

/// Loads the configuration from a project directory.
///
/// Reads `<dir>/sift.toml` if it exists; a missing file yields the defaults.
pub fn load_config(dir: &Path) -> Result<SiftConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Ok(SiftConfig::default());
    }
    load_config_file(&config_path)
}

/// Loads the configuration from an explicit file path, which must exist.
pub fn load_config_file(path: &Path) -> Result<SiftConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `sift.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<SiftConfig, ConfigError> {
    let config: SiftConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that glob lists contain no blank patterns.
fn validate_config(config: &SiftConfig) -> Result<(), ConfigError> {
    for (field, patterns) in [
        ("filter.include", &config.filter.include),
        ("filter.exclude", &config.filter.exclude),
    ] {
        if patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "{field} contains an empty pattern"
            )));
        }
    }
    Ok(())
}
