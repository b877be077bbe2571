mod config;

pub use config::{BookingSection, Config, RecommendSection, DEFAULT_FALLBACK_LABEL};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/plansage[-dev]/` based on PLANSAGE_ENV.
///
/// Set PLANSAGE_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("PLANSAGE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("plansage-dev")
    } else {
        base_dir.join("plansage")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::NoConfigDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
