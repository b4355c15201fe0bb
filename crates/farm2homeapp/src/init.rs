//! # Session Setup
//!
//! A session is one [`Farm2HomeApi`] constructed at startup and threaded
//! through the presentation layer. There is no teardown: storage already holds
//! the durable copy after every mutation.
//!
//! ## Data Directory Resolution
//!
//! 1. An explicit override (the CLI's `--data-dir`).
//! 2. `data_dir` from [`Farm2HomeConfig`] (file or `FARM2HOME_DATA`).
//! 3. The OS data directory for the application (via `directories`).

use crate::api::Farm2HomeApi;
use crate::config::{Farm2HomeConfig, CONFIG_FILE_NAME};
use crate::error::{Farm2HomeError, Result};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::PathBuf;

pub struct Farm2HomeContext {
    pub api: Farm2HomeApi<FsBackend>,
    pub data_dir: PathBuf,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("in", "farm2home", "farm2home")
}

/// Location of `farm2home.toml`, if the platform has a config directory.
pub fn config_file_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load configuration from the environment and the default config file.
pub fn load_config() -> Result<Farm2HomeConfig> {
    Farm2HomeConfig::load(config_file_path().as_deref())
}

pub fn resolve_data_dir(
    config: &Farm2HomeConfig,
    data_override: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = data_override.or_else(|| config.data_dir.clone()) {
        return Ok(path);
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| Farm2HomeError::Store("Could not determine data directory".to_string()))
}

/// Build the session: resolve the data directory and hydrate both stores.
pub fn initialize(
    config: &Farm2HomeConfig,
    data_override: Option<PathBuf>,
) -> Result<Farm2HomeContext> {
    let data_dir = resolve_data_dir(config, data_override)?;
    tracing::debug!(data_dir = %data_dir.display(), "initializing session");

    let api = Farm2HomeApi::new(FsBackend::new(data_dir.clone()));
    Ok(Farm2HomeContext { api, data_dir })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_beats_config() {
        let config = Farm2HomeConfig {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        let dir = resolve_data_dir(&config, Some(PathBuf::from("/from/flag"))).unwrap();
        assert_eq!(dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn test_config_beats_os_default() {
        let config = Farm2HomeConfig {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        let dir = resolve_data_dir(&config, None).unwrap();
        assert_eq!(dir, PathBuf::from("/from/config"));
    }

    #[test]
    fn test_initialize_hydrates_from_data_dir() {
        let env = crate::test_utils::TestEnv::new();
        {
            let mut ctx =
                initialize(&Farm2HomeConfig::default(), Some(env.root.clone())).unwrap();
            ctx.api.add_to_cart(3).unwrap();
        }

        let ctx = initialize(&Farm2HomeConfig::default(), Some(env.root.clone())).unwrap();
        assert_eq!(ctx.data_dir, env.root);
        assert_eq!(ctx.api.cart().total_item_count(), 1);
    }
}
