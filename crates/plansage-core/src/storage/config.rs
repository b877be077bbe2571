//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Recommendation tunables (shortlist length, base score)
//! - Booking behaviour (overwrite or strict, fallback label)
//!
//! Configuration is stored at `~/.config/plansage/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::calendar::BookingPolicy;
use crate::error::{ConfigError, Result};
use crate::recommend::{RecommendConfig, DEFAULT_BASE_SCORE, DEFAULT_TOP_N};

/// Accepted range for `recommend.base_score`.
pub const BASE_SCORE_RANGE: std::ops::RangeInclusive<i32> = -1000..=1000;

/// Label used when booking by latest task and no task exists yet.
pub const DEFAULT_FALLBACK_LABEL: &str = "AI recommended slot";

/// Recommendation-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendSection {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_base_score")]
    pub base_score: i32,
}

/// Booking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSection {
    #[serde(default)]
    pub policy: BookingPolicy,
    #[serde(default = "default_fallback_label")]
    pub fallback_label: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/plansage/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub recommend: RecommendSection,
    #[serde(default)]
    pub booking: BookingSection,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}
fn default_base_score() -> i32 {
    DEFAULT_BASE_SCORE
}
fn default_fallback_label() -> String {
    DEFAULT_FALLBACK_LABEL.into()
}

impl Default for RecommendSection {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            base_score: default_base_score(),
        }
    }
}

impl Default for BookingSection {
    fn default() -> Self {
        Self {
            policy: BookingPolicy::default(),
            fallback_label: default_fallback_label(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<i64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as integer")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("cannot set a whole section".into()));
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Default location of the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there when the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a value by dot-separated key, in memory only.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit the
    /// field. The config is unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.recommend.top_n == 0 {
            return Err(ConfigError::InvalidValue {
                key: "recommend.top_n".into(),
                message: "must be at least 1".into(),
            });
        }
        if !BASE_SCORE_RANGE.contains(&self.recommend.base_score) {
            return Err(ConfigError::InvalidValue {
                key: "recommend.base_score".into(),
                message: format!(
                    "must be between {} and {}",
                    BASE_SCORE_RANGE.start(),
                    BASE_SCORE_RANGE.end()
                ),
            });
        }
        if self.booking.fallback_label.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "booking.fallback_label".into(),
                message: "must not be empty".into(),
            });
        }
        Ok(())
    }

    pub fn recommend_config(&self) -> RecommendConfig {
        RecommendConfig {
            top_n: self.recommend.top_n,
            base_score: self.recommend.base_score,
        }
    }
}
