use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::SinkConfig;

/// File name looked up when no explicit config path is given
pub const CONFIG_FILE: &str = "sink.toml";

/// Error type for loading sink.toml
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse sink.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid sink.toml: {0}")]
    Invalid(String),
}

/// Find sink.toml by walking up from `start`.
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load the configuration.
///
/// An explicit path must exist. Otherwise the nearest sink.toml above
/// `start` is used, and defaults apply when there is none.
pub fn load_config(explicit: Option<&Path>, start: &Path) -> Result<SinkConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match discover_config(start) {
            Some(path) => path,
            None => return Ok(SinkConfig::default()),
        },
    };
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<SinkConfig, ConfigError> {
    let config: SinkConfig = toml::from_str(text)?;
    validate(&config)?;
    Ok(config)
}

/// A re-nested placeholder has to read back as a nested line, or it would be
/// moved again on every pass.
fn validate(config: &SinkConfig) -> Result<(), ConfigError> {
    let indent = &config.sort.nest_indent;
    if indent.is_empty() || !indent.chars().all(char::is_whitespace) {
        return Err(ConfigError::Invalid(format!(
            "sort.nest_indent must be one or more whitespace characters, got {:?}",
            indent
        )));
    }
    Ok(())
}
