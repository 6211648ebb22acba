use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};

use crate::error::{AppError, Context, Result};
use crate::utils::resource_path;

use super::{validator, AppConfig};

pub const CONFIG_FILE_NAME: &str = "quote_builder.json";

/// Load the configuration bundled next to the executable, falling back to defaults.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&resource_path(CONFIG_FILE_NAME))
}

/// Load and validate the configuration at `path`; a missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let config = match fs::read_to_string(path) {
        Ok(json) => {
            let config: AppConfig = serde_json::from_str(&json)
                .with_context(|| format!("failed to parse config JSON at {}", path.display()))?;
            info!("loaded configuration from {}", path.display());
            config
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("no config at {}, using defaults", path.display());
            AppConfig::default()
        }
        Err(err) => {
            return Err(AppError::message(format!(
                "failed to read config file {}: {}",
                path.display(),
                err
            )))
        }
    };

    validator::validate_config(&config)?;
    Ok(config)
}
