//! Configuration management for Lambda functions.

use std::env;

use crate::{Error, Result};

/// Environment variable holding the ARN (or name) of the secret to read.
pub const SECRET_ARN_VAR: &str = "SECRET_ARN";

/// Application configuration loaded from environment variables.
///
/// Loading never fails; required values are checked when they are used so
/// that a missing variable fails the invocation that needs it rather than the
/// cold start.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// ARN of the secret to fetch
    pub secret_arn: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            secret_arn: env::var(SECRET_ARN_VAR).ok(),
        }
    }

    /// Create a configuration pointing at the given secret.
    pub fn with_secret_arn(secret_arn: impl Into<String>) -> Self {
        Self {
            secret_arn: Some(secret_arn.into()),
        }
    }

    /// The configured secret identifier. Empty values count as unset.
    pub fn secret_arn(&self) -> Result<&str> {
        self.secret_arn
            .as_deref()
            .filter(|arn| !arn.trim().is_empty())
            .ok_or_else(|| {
                Error::Config(format!("{} environment variable not set", SECRET_ARN_VAR))
            })
    }
}
