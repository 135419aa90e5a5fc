//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - Read the TOML configuration file / 读取 TOML 配置文件
//! - Map it onto [`AppConfig`] / 映射为 AppConfig
//! - Report I/O and parsing errors with context / 报告带上下文的错误
//!
//! Defaults live on the model itself (`#[serde(default)]`), so a missing file
//! or a missing key simply keeps them. Path resolution (CLI flag, environment,
//! platform directory) happens in the bootstrap layer.

use std::io;
use std::path::Path;

use anyhow::Context;
use mc_core::AppConfig;
use tracing::debug;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// A file that does not exist yields [`AppConfig::default`].
///
/// # Errors / 错误
///
/// - File exists but cannot be read (I/O error)
/// - Content is not valid TOML or has the wrong types (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = match std::fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %config_path.display(), "config file not found, using defaults");
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })
        }
    };

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}
