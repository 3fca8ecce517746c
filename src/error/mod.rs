use thiserror::Error;

use crate::config::Environment;
use crate::endpoints::Operation;

#[derive(Error, Debug)]
pub enum PixError {
    // Validation errors
    #[error("Required field not informed: {field}")]
    Validation { field: &'static str },

    // Configuration errors
    #[error("No endpoint configured for operation {operation} in the {environment} environment")]
    Configuration {
        environment: Environment,
        operation: Operation,
    },

    // API errors
    #[error("OpenPix API error: {0}")]
    Api(String),

    // HTTP errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PixError {
    pub(crate) fn missing_field(field: &'static str) -> Self {
        PixError::Validation { field }
    }
}

pub type PixResult<T> = Result<T, PixError>;
