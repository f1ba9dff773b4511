use thiserror::Error;

use crate::api::error_dto::ApiErrorBody;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse API response JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("HTTP transport failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("API rejected the request with status {status}")]
    ApiRejection { status: u16, body: ApiErrorBody },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid client configuration: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
