// src/errors.rs

use thiserror::Error;

pub type JurisResult<T> = Result<T, JurisError>;

#[derive(Debug, Error)]
pub enum JurisError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),
}

impl JurisError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        JurisError::Api(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        JurisError::Config(msg.into())
    }

    pub fn session_error(msg: impl Into<String>) -> Self {
        JurisError::Session(msg.into())
    }
}
