//! Configuration file support.
//!
//! Loads optional `ninzaco.toml` from the site root. Every field has a
//! default, so an empty file (or no file) yields the stock landing page.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LandingError, Result};
use crate::types::{PageMetadata, Stylesheet};

/// Config file name looked up by [`SiteConfig::load`].
pub const CONFIG_FILE: &str = "ninzaco.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `<html lang>` value
    pub lang: String,
    pub metadata: PageMetadata,
    pub output: OutputConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            metadata: PageMetadata::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Where and how `build` writes the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory, relative to the working directory
    pub dir: PathBuf,
    pub stylesheet: StylesheetMode,
    /// File name of the external stylesheet, relative to `dir`
    pub stylesheet_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
            stylesheet: StylesheetMode::Inline,
            stylesheet_file: "styles.css".to_string(),
        }
    }
}

/// Stylesheet delivery as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylesheetMode {
    /// `<style>` in `<head>`
    #[default]
    Inline,
    /// Separate CSS file plus `<link>`
    External,
}

impl SiteConfig {
    /// Load config from `ninzaco.toml` in the given root directory.
    /// Returns the default config if the file doesn't exist.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LandingError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| LandingError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Stylesheet the document head should reference.
    pub fn stylesheet(&self) -> Stylesheet {
        match self.output.stylesheet {
            StylesheetMode::Inline => Stylesheet::Inline,
            StylesheetMode::External => Stylesheet::Linked(self.output.stylesheet_file.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.lang, "en");
        assert_eq!(config.metadata, PageMetadata::default());
        assert_eq!(config.output.dir, PathBuf::from("dist"));
        assert_eq!(config.stylesheet(), Stylesheet::Inline);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(temp.path()).expect("defaults");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let temp = TempDir::new().expect("temp dir");
        let err = SiteConfig::load_from_path(&temp.path().join("nope.toml"))
            .expect_err("missing file");
        assert!(matches!(err, LandingError::ReadConfig { .. }));
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let mut file = std::fs::File::create(temp.path().join(CONFIG_FILE)).expect("create config");
        writeln!(
            file,
            r#"
lang = "pl"

[metadata]
title = "Ninzaco - Promo"

[output]
dir = "public"
stylesheet = "external"
"#
        )
        .expect("write config");

        let config = SiteConfig::load(temp.path()).expect("load");
        assert_eq!(config.lang, "pl");
        assert_eq!(config.metadata.title, "Ninzaco - Promo");
        // Missing keys fall back to defaults
        assert_eq!(config.metadata.description, "Pixel-perfect implementation of Ninzaco design");
        assert_eq!(config.output.dir, PathBuf::from("public"));
        assert_eq!(config.stylesheet(), Stylesheet::Linked("styles.css".into()));
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "[output]\nstylesheet = \"sideways\"\n")
            .expect("write config");

        let err = SiteConfig::load(temp.path()).expect_err("invalid mode");
        assert!(matches!(err, LandingError::ParseConfig { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }
}
