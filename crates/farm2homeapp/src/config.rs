//! # Configuration
//!
//! Farm2Home configuration is loaded with [`confique`], layering environment
//! variables over an optional TOML file over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `FARM2HOME_DATA`, `FARM2HOME_LOG`.
//! 2. **Config file**: `farm2home.toml` in the OS config directory (via `directories`).
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data directory | Where the cart and registry are persisted |
//! | `log_filter` | `warn` | `tracing` filter used when `RUST_LOG` is unset |

use crate::error::Result;
use confique::{Builder, Config};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "farm2home.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Farm2HomeConfig {
    /// Directory holding the persisted collections.
    #[config(env = "FARM2HOME_DATA")]
    pub data_dir: Option<PathBuf>,

    /// Log filter directive (e.g. "warn", "farm2homeapp=debug").
    #[config(env = "FARM2HOME_LOG")]
    #[config(default = "warn")]
    pub log_filter: String,
}

impl Default for Farm2HomeConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl Farm2HomeConfig {
    /// Load from the environment and, if present, `file`. A missing file is
    /// not an error.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_layers(Self::builder().env(), file)
    }

    fn load_layers(builder: Builder<Self>, file: Option<&Path>) -> Result<Self> {
        let builder = match file {
            Some(path) => builder.file(path),
            None => builder,
        };
        Ok(builder.load()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = Farm2HomeConfig::default();
        assert_eq!(config.data_dir, None);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "data_dir = \"/srv/farm2home\"\nlog_filter = \"debug\"\n").unwrap();

        let config = Farm2HomeConfig::load_layers(Farm2HomeConfig::builder(), Some(&path)).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/farm2home")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let config =
            Farm2HomeConfig::load_layers(Farm2HomeConfig::builder(), Some(&missing)).unwrap();
        assert_eq!(config, Farm2HomeConfig::default());
    }

    #[test]
    fn test_no_file_layer_uses_defaults() {
        let config = Farm2HomeConfig::load_layers(Farm2HomeConfig::builder(), None).unwrap();
        assert_eq!(config.data_dir, None);
        assert_eq!(config.log_filter, "warn");
    }
}
