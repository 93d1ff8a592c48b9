//! # Config resolution / 配置解析
//!
//! Picks the config file to load. Parsing lives in `cv_infra::config`.

use std::path::{Path, PathBuf};

use cv_core::AppConfig;
use cv_infra::config::load_config;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "clipview.toml";

/// Where the effective config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Resolve the effective configuration.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in the
/// working directory is used if present, otherwise built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<(AppConfig, ConfigSource)> {
    resolve_in(explicit, Path::new("."))
}

fn resolve_in(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<(AppConfig, ConfigSource)> {
    if let Some(path) = explicit {
        let config = load_config(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    let fallback = cwd.join(DEFAULT_CONFIG_FILE);
    if fallback.is_file() {
        let config = load_config(&fallback)?;
        return Ok((config, ConfigSource::File(fallback)));
    }
    Ok((AppConfig::default(), ConfigSource::Defaults))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(resolve_in(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn falls_back_to_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let (config, source) = resolve_in(None, dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(source, ConfigSource::Defaults);
    }

    #[test]
    fn picks_up_file_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "[session]\nhistory_limit = 3\n").unwrap();

        let (config, source) = resolve_in(None, dir.path()).unwrap();
        assert_eq!(config.session.history_limit, 3);
        assert_eq!(source, ConfigSource::File(path));
    }
}
