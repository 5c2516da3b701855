use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base: String,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

const CONFIG_FILE_PATH: &str = "config.toml";
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8787";

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            model: None,
        };

        // Try to read from config.toml first
        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        // Override with environment variables if they exist
        if let Ok(api_base) = std::env::var("ASSISTANT_API_BASE") {
            config.api_base = api_base;
        }
        if let Ok(api_key) = std::env::var("ASSISTANT_API_KEY") {
            config.api_key = Some(api_key);
        }
        if let Ok(model) = std::env::var("ASSISTANT_MODEL") {
            config.model = Some(model);
        }
        config
    }

    /// Config pointing at a given base URL, with no credentials. Used by
    /// tests and local development.
    pub fn for_base(api_base: impl Into<String>) -> Self {
        Config {
            api_base: api_base.into(),
            api_key: None,
            model: None,
        }
    }
}
