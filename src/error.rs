//! Error types for memoscope.
//!
//! Component logic cannot fail; everything here comes from the shell around
//! it: the terminal, the config file and the log sink.

use snafu::Snafu;
use std::path::PathBuf;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Terminal setup, input or output failed.
    #[snafu(display("Terminal error: {source}"))]
    Terminal { source: std::io::Error },

    /// Writing replay output failed.
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// The config file could not be read.
    #[snafu(display("Failed to read config {}: {source}", path.display()))]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`DemoConfig`](crate::config::DemoConfig).
    #[snafu(display("Failed to parse config {}: {source}", path.display()))]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The log file could not be opened.
    #[snafu(display("Failed to open log file {}: {source}", path.display()))]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The log filter directive is malformed.
    #[snafu(display("Invalid log filter {filter:?}: {source}"))]
    LogFilter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
