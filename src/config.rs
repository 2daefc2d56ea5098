use crate::constants::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::errors::{JurisError, JurisResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub log_spec: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            log_spec: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads configuration from the environment. A missing `GEMINI_API_KEY` is a
/// valid state: the generator answers with a diagnostic string instead of
/// failing startup.
pub fn initialize_config() -> JurisResult<()> {
    let mut config = Config::default();

    if let Ok(key) = env::var("GEMINI_API_KEY") {
        if !key.trim().is_empty() {
            config.api_key = Some(key);
        }
    }
    if let Ok(model) = env::var("JURISPRO_MODEL") {
        if !model.trim().is_empty() {
            config.model = model;
        }
    }
    if let Ok(spec) = env::var("JURISPRO_LOG") {
        if !spec.trim().is_empty() {
            config.log_spec = spec;
        }
    }

    validate_config(&config)?;

    *CONFIG.write().unwrap() = config;
    Ok(())
}

fn validate_config(config: &Config) -> JurisResult<()> {
    if config.model.is_empty() {
        return Err(JurisError::config_error("Model name is required"));
    }

    if !(0.0..=1.0).contains(&config.temperature) {
        return Err(JurisError::config_error(
            "Temperature must be between 0.0 and 1.0",
        ));
    }

    if config.max_output_tokens == 0 {
        return Err(JurisError::config_error(
            "max_output_tokens must be greater than 0",
        ));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub fn update_config(updated_config: Config) -> JurisResult<()> {
    validate_config(&updated_config)?;
    *CONFIG.write().unwrap() = updated_config;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_missing_key_is_allowed() {
        let config = Config {
            api_key: None,
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_invalid_temperature() {
        let mut config = Config::default();
        config.temperature = 1.5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_empty_model() {
        let mut config = Config::default();
        config.model = String::new();
        assert!(validate_config(&config).is_err());
    }
}
