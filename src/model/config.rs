use serde::{Deserialize, Serialize};

/// Configuration from sink.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkConfig {
    #[serde(default)]
    pub sort: SortConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Prefix added to each line of an empty placeholder when it is moved
    /// under the checked task above it.
    #[serde(default = "default_nest_indent")]
    pub nest_indent: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            nest_indent: default_nest_indent(),
        }
    }
}

fn default_nest_indent() -> String {
    "  ".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive used when RUST_LOG is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}
