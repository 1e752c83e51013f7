//! Error types for `ninzaco-landing`.
//!
//! Rendering itself is infallible; only config loading and writing the built
//! site touch the filesystem. Every variant carries the path it failed on.

use std::path::PathBuf;

/// Errors from loading configuration or writing site output.
#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    /// The config file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`SiteConfig`](crate::config::SiteConfig).
    #[error("failed to parse config {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A build output file or directory could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result alias for fallible landing operations.
pub type Result<T> = std::result::Result<T, LandingError>;
