pub mod config;
pub mod fatigue;
pub mod recommend;
pub mod session;

use std::path::Path;

use plansage_core::Config;

/// Config from `path` when given, otherwise from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
