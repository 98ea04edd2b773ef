//! Shared library for the secret-echo Lambda functions.
//!
//! This crate provides configuration, error types, the Secrets Manager client
//! with its per-context cache, and the response envelope used by the Lambdas.

pub mod config;
pub mod error;
pub mod http;
pub mod secrets;

pub use config::Config;
pub use error::{Error, Result};
pub use http::Response;
pub use secrets::{SecretFetcher, SecretPayload, SecretStore, SecretValue, SecretsManagerStore};
