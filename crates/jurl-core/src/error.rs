//! Error types for jurl

use crate::UrlDialect;
use thiserror::Error;

/// Core error type for jurl operations
#[derive(Error, Debug)]
pub enum JurlError {
    /// No parsing stage could extract a non-empty host and a numeric port
    #[error("Invalid {dialect} URL: {url}")]
    InvalidUrl {
        /// The URL as it was handed to the parser
        url: String,
        /// The dialect the parser was attempting when it gave up
        dialect: UrlDialect,
    },

    #[error("Invalid host/port pair: {0}")]
    InvalidHostPort(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl JurlError {
    pub(crate) fn invalid_url(url: &str, dialect: UrlDialect) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            dialect,
        }
    }
}

/// Result type alias for jurl operations
pub type Result<T> = std::result::Result<T, JurlError>;
