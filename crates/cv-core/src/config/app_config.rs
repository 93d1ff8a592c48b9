use serde::{Deserialize, Serialize};

use crate::editing::DEFAULT_IDLE_TIMEOUT_MS;

/// Application configuration DTO
/// 应用配置 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub editing: EditingConfig,
    pub log: LogConfig,
}

/// Session behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of history records requested from the host at startup
    pub history_limit: usize,

    /// Validate JSON-shaped entries automatically on selection and edit
    pub auto_validate: bool,
}

/// Editing lock behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditingConfig {
    /// Inactivity window after which the editing lock releases
    pub idle_timeout_ms: u64,
}

/// Logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset (empty = build default)
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig {
                history_limit: 20,
                auto_validate: true,
            },
            editing: EditingConfig {
                idle_timeout_ms: DEFAULT_IDLE_TIMEOUT_MS,
            },
            log: LogConfig {
                level: String::new(),
            },
        }
    }
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys fall back to [`AppConfig::default`]; keys of the wrong type
    /// are an error.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let history_limit = match lookup(toml_value, "session", "history_limit") {
            Some(v) => {
                let n = v
                    .as_integer()
                    .ok_or_else(|| anyhow::anyhow!("session.history_limit must be an integer"))?;
                usize::try_from(n)
                    .map_err(|_| anyhow::anyhow!("session.history_limit must not be negative"))?
            }
            None => defaults.session.history_limit,
        };

        let auto_validate = match lookup(toml_value, "session", "auto_validate") {
            Some(v) => v
                .as_bool()
                .ok_or_else(|| anyhow::anyhow!("session.auto_validate must be a boolean"))?,
            None => defaults.session.auto_validate,
        };

        let idle_timeout_ms = match lookup(toml_value, "editing", "idle_timeout_ms") {
            Some(v) => {
                let n = v
                    .as_integer()
                    .ok_or_else(|| anyhow::anyhow!("editing.idle_timeout_ms must be an integer"))?;
                u64::try_from(n)
                    .map_err(|_| anyhow::anyhow!("editing.idle_timeout_ms must not be negative"))?
            }
            None => defaults.editing.idle_timeout_ms,
        };

        let level = match lookup(toml_value, "log", "level") {
            Some(v) => v
                .as_str()
                .ok_or_else(|| anyhow::anyhow!("log.level must be a string"))?
                .to_string(),
            None => defaults.log.level,
        };

        Ok(Self {
            session: SessionConfig {
                history_limit,
                auto_validate,
            },
            editing: EditingConfig { idle_timeout_ms },
            log: LogConfig { level },
        })
    }
}

fn lookup<'a>(root: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    root.get(section).and_then(|s| s.get(key))
}
