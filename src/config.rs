use crate::localization::default_locales;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Export settings
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Directory the Markdown files are written to
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Key appended to image URLs so the CDN serves them
    #[serde(default)]
    pub api_key: String,
    /// Locale preference for titles, comments and ingredient names
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: default_root(),
            api_key: String::new(),
            locales: default_locales(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with KPTNCOOK_ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: KPTNCOOK_API_KEY, KPTNCOOK_LOCALES=de,en
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("KPTNCOOK")
                    .prefix_separator("_")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("locales"),
            )
            .build()?;

        settings.try_deserialize()
    }
}
