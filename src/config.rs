// Configuration module for osc52
// Host programs hand in TOML text; nothing is read from disk here.

mod types;

pub use types::{ClipboardConfig, Config, ModeSetting};

use crate::error::{Osc52Error, Result};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str::<Config>(contents).map_err(|e| Osc52Error::InvalidConfig(e.to_string()))
}

/// Loads configuration from TOML text
/// Returns default configuration plus a warning on parse errors
pub fn load_config(contents: &str) -> ConfigResult {
    match parse_config(contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!("Config parsed successfully: {:?}", config.clipboard);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse osc52 config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}
