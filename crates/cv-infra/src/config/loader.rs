//! # Configuration Loader / 配置加载器
//!
//! Reads a TOML file and maps it onto [`AppConfig`]. Defaults for missing
//! keys live in the DTO, not here.
//!
//! 读取 TOML 文件并映射为 [`AppConfig`]。

use std::path::Path;

use anyhow::Context;
use cv_core::AppConfig;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
/// - A known key has the wrong type (mapping error)
pub fn load_config(config_path: impl AsRef<Path>) -> anyhow::Result<AppConfig> {
    let config_path = config_path.as_ref();
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))
}
