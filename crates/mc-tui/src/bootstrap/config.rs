//! # Configuration Resolution / 配置解析
//!
//! Decides which config file to read and layers command-line overrides on
//! top of it. Precedence: `--config`, then `MULTICLIP_CONFIG`, then
//! `<config_dir>/multiclip/config.toml`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use mc_app::AppPaths;
use mc_core::AppConfig;

pub const CONFIG_ENV: &str = "MULTICLIP_CONFIG";

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub slots_file: Option<PathBuf>,
    pub show: bool,
}

pub fn resolve_config_path(
    cli: Option<&Path>,
    env_value: Option<OsString>,
    default_path: &Path,
) -> PathBuf {
    if let Some(path) = cli {
        return path.to_path_buf();
    }
    match env_value {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => default_path.to_path_buf(),
    }
}

pub fn apply_overrides(config: &mut AppConfig, overrides: &ConfigOverrides) {
    if let Some(path) = &overrides.slots_file {
        config.storage.slots_file = Some(path.clone());
    }
    if overrides.show {
        config.viewer.start_visible = true;
    }
}

/// Loads the config file chosen by [`resolve_config_path`] and applies
/// `overrides`. Returns the path that was read alongside the config.
pub fn load_app_config(
    overrides: &ConfigOverrides,
    paths: &AppPaths,
) -> anyhow::Result<(AppConfig, PathBuf)> {
    let path = resolve_config_path(
        overrides.config_path.as_deref(),
        std::env::var_os(CONFIG_ENV),
        &paths.config_file,
    );
    let mut config = mc_infra::load_config(&path)?;
    apply_overrides(&mut config, overrides);
    Ok((config, path))
}

/// Where the slots live: the configured file or the platform default.
pub fn slots_file(config: &AppConfig, paths: &AppPaths) -> PathBuf {
    config
        .storage
        .slots_file
        .clone()
        .unwrap_or_else(|| paths.slots_file.clone())
}
