//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the config file.
//! They are deserialized directly; the CLI maps them onto its own flags.

use serde::{Deserialize, Serialize};

/// Raw roster configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRosterConfig {
    /// Path to the roster TOML file
    pub path: Option<String>,
}

impl Default for FileRosterConfig {
    fn default() -> Self {
        Self {
            path: Some("roster.toml".to_string()),
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format name ("text" or "json")
    pub format: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw log configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Path to the JSONL query log; query logging is off when unset
    pub queries: Option<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Roster file settings
    pub roster: FileRosterConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Query log settings
    pub log: FileLogConfig,
}
