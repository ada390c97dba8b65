use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

const DEFAULT_TOP_N: usize = 3;
const DEFAULT_PROMPT: &str = "Enter movie name:";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Number of recommendations per query
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Print similarity scores next to recommended names
    #[serde(default)]
    pub show_scores: bool,

    /// CSV catalog to load instead of the built-in movie list
    #[serde(default)]
    pub catalog: Option<String>,

    /// Shell prompt
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            show_scores: false,
            catalog: None,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::invalid("top_n", "must be greater than 0"));
        }

        if let Some(catalog) = &self.catalog {
            if catalog.trim().is_empty() {
                return Err(ConfigError::invalid("catalog", "path is empty"));
            }
        }

        Ok(())
    }

    pub fn parse(config_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_with(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(path.as_ref())?;
        let config = Self::parse(&config_str)?;

        log::debug!("loaded config from {}", path.as_ref().display());

        Ok(config)
    }
}
