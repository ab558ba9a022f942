//! Defaults every configuration build starts from.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder preloaded with the defaults that the serde defaults cannot express
/// across sources.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("logging.level", "warn")?
        .set_default("logging.output", "stderr")?
        .set_default("shell.user", "guest")?
        .set_default("shell.color", true)
}
