//! Error types for the secret-echo Lambda functions.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching a secret and building a response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Secrets Manager request failed
    #[error("Secret store error: {0}")]
    SecretStore(String),

    /// Secret string was not a JSON object
    #[error("Failed to decode secret: {0}")]
    Decode(#[from] serde_json::Error),

    /// Secret was stored in a form we don't handle (binary, or no value at all)
    #[error("Unsupported secret payload: {0}")]
    UnsupportedPayload(String),

    /// Expected field missing from the decoded secret
    #[error("Extraction error: {0}")]
    Extraction(String),
}
