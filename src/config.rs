//! Configuration: Optional TOML file, overridden by command-line flags.
//!
//! ```toml
//! variant = "naive"
//! log_file = "/tmp/memoscope.log"
//! log_filter = "memoscope=debug"
//! ```

use crate::app::Variant;
use crate::error::{ConfigParseSnafu, ConfigReadSnafu, InvalidSnafu, Result};
use serde::{Deserialize, Serialize};
use snafu::{ensure, ResultExt};
use std::path::{Path, PathBuf};

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "memoscope.log";
/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings for the demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Which optimization stage to run.
    pub variant: Variant,
    /// Where the TUI writes its log (the terminal itself is busy).
    pub log_file: PathBuf,
    /// `tracing` filter directive; `RUST_LOG` wins when set.
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_filter: String::from(DEFAULT_LOG_FILTER),
        }
    }
}

impl DemoConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).context(ConfigReadSnafu { path })?;
        let config = Self::from_toml(&text).context(ConfigParseSnafu { path })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Reject settings that cannot work.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.log_file.as_os_str().is_empty(),
            InvalidSnafu {
                message: "log_file must not be empty"
            }
        );
        ensure!(
            !self.log_filter.trim().is_empty(),
            InvalidSnafu {
                message: "log_filter must not be empty"
            }
        );
        Ok(())
    }
}
