//! Run configuration.
//!
//! Read from a JSON file (camelCase keys), then path options can be
//! overridden from the environment or a `.env` file.

use crate::models::STANZA_OPEN_TOKEN;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "gn_audit.json";

/// Env var overriding [`Config::data_directory`].
pub const ENV_DATA_DIR: &str = "GN_DATA_DIR";
/// Env var overriding [`Config::register_path`]. An empty value disables the comparison.
pub const ENV_REGISTER_PATH: &str = "GN_REGISTER_PATH";
/// Env var overriding [`Config::register_sheet_name`].
pub const ENV_REGISTER_SHEET: &str = "GN_REGISTER_SHEET";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Directory scanned for `.txt` router dumps; outputs are written next to them.
    pub data_directory: PathBuf,
    /// Register spreadsheet. `None` runs extraction and rewriting only.
    pub register_path: Option<PathBuf>,
    /// Sheet holding the carrier / GN net columns.
    pub register_sheet_name: String,
    /// Line prefix opening an address-set stanza.
    pub stanza_open_token: String,
    /// Keep the intermediate `*_Extract.txt` file.
    pub keep_extract: bool,
    /// Wait for Enter before the binary exits.
    pub pause_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_directory: PathBuf::from("data"),
            register_path: Some(PathBuf::from("data").join("internationalgn.xls")),
            register_sheet_name: "国际Gn简表".to_string(),
            stanza_open_token: STANZA_OPEN_TOKEN.to_string(),
            keep_extract: false,
            pause_on_exit: false,
        }
    }
}

impl Config {
    /// Load the config file, then apply environment overrides.
    ///
    /// # Arguments
    /// * `config_file` - Optional path to a config file, which must exist.
    ///   If None, [`DEFAULT_CONFIG_FILE`] is used when present, else defaults.
    pub fn load(config_file: Option<&str>) -> Result<Config, Box<dyn Error>> {
        let mut config = match config_file {
            Some(file) => {
                if !Path::new(file).exists() {
                    return Err(format!("Config file does not exist: {file}").into());
                }
                log::info!("Using provided config file: {file}");
                Config::from_file(Path::new(file))?
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                log::info!("Using config file: {DEFAULT_CONFIG_FILE}");
                Config::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => {
                log::debug!("No config file, using defaults");
                Config::default()
            }
        };

        dotenv::dotenv().ok();
        config.apply_overrides(|key| std::env::var(key).ok());
        log::debug!("{config:?}");
        Ok(config)
    }

    /// Parse a JSON config file. Missing keys take their default.
    pub fn from_file(path: &Path) -> Result<Config, Box<dyn Error>> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading config {}: {e}", path.display()))?;
        Config::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Config, Box<dyn Error>> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let config = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|e| format!("Error parsing config at '{}': {}", e.path(), e.inner()))?;
        Ok(config)
    }

    /// Override path options from `lookup` (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.data_directory = PathBuf::from(dir);
        }
        if let Some(register) = lookup(ENV_REGISTER_PATH) {
            self.register_path = if register.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(register))
            };
        }
        if let Some(sheet) = lookup(ENV_REGISTER_SHEET) {
            self.register_sheet_name = sheet;
        }
    }
}
