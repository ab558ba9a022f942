//! Configuration
//!
//! Layered settings for the CLI: defaults, then the global config file (or an
//! explicit `--config` file), then `DESKFS__*` environment variables.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the initial tree comes from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Seed file (.json, .toml, .yaml); None means the built-in desktop tree
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Terminal session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Name printed by `whoami`
    #[serde(default = "default_user")]
    pub user: String,

    /// Highlight directories in listings
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_user() -> String {
    "guest".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            color: default_true(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub seed: SeedConfig,

    #[serde(default)]
    pub shell: ShellConfig,
}
