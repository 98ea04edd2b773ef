//! AWS Secrets Manager integration.

use async_trait::async_trait;
use aws_sdk_secretsmanager::Client as SecretsClient;
use serde_json::{Map, Value};
use std::fmt;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use crate::{Config, Error, Result};

/// Raw secret value as returned by the store.
#[derive(Clone)]
pub enum SecretPayload {
    /// `SecretString`
    Text(String),
    /// `SecretBinary`
    Binary(Vec<u8>),
    /// Neither form was present on the response.
    Empty,
}

/// A key-value secret store.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the current value of the secret identified by `secret_id`.
    async fn get_secret_value(&self, secret_id: &str) -> Result<SecretPayload>;
}

/// [`SecretStore`] backed by AWS Secrets Manager.
pub struct SecretsManagerStore {
    client: SecretsClient,
}

impl SecretsManagerStore {
    pub fn new(client: SecretsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretStore for SecretsManagerStore {
    async fn get_secret_value(&self, secret_id: &str) -> Result<SecretPayload> {
        let response = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| Error::SecretStore(format!("Failed to get secret: {}", e)))?;

        if let Some(secret_string) = response.secret_string() {
            return Ok(SecretPayload::Text(secret_string.to_string()));
        }

        Ok(match response.secret_binary() {
            Some(blob) => SecretPayload::Binary(blob.as_ref().to_vec()),
            None => SecretPayload::Empty,
        })
    }
}

/// A decoded JSON secret: field name to value.
#[derive(Clone, PartialEq)]
pub struct SecretValue {
    fields: Map<String, Value>,
}

impl SecretValue {
    /// Decode a `SecretString`. Anything other than a JSON object is rejected.
    pub fn from_json(secret_string: &str) -> Result<Self> {
        let fields: Map<String, Value> = serde_json::from_str(secret_string)?;
        Ok(Self { fields })
    }

    /// Get a scalar field as text.
    ///
    /// Numbers and booleans are rendered in their JSON form so that secrets
    /// like `{"port": 5432}` can still be read.
    pub fn field(&self, name: &str) -> Result<String> {
        match self.fields.get(name) {
            Some(Value::String(value)) => Ok(value.clone()),
            Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(value.to_string()),
            Some(_) => Err(Error::Extraction(format!(
                "Field {} is not a scalar value",
                name
            ))),
            None => Err(Error::Extraction(format!("Secret has no field {}", name))),
        }
    }

    /// Field names present in the secret.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

// Never print secret material.
impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretValue")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Fetches a single secret once and memoizes it for the life of the fetcher.
///
/// Build one per warm execution context and share it between invocations.
/// Concurrent callers on a cold fetcher wait on the same store request, so
/// the store is hit at most once per successful population. Failures are not
/// cached; the next call tries again.
pub struct SecretFetcher {
    store: Box<dyn SecretStore>,
    cached: OnceCell<SecretValue>,
}

impl SecretFetcher {
    /// Create a fetcher with an empty cache slot.
    pub fn new(store: impl SecretStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            cached: OnceCell::new(),
        }
    }

    /// Whether a secret has already been fetched.
    pub fn is_cached(&self) -> bool {
        self.cached.initialized()
    }

    /// Get the secret, fetching it from the store on first use.
    ///
    /// Once cached, `config` is not consulted again.
    pub async fn get_secret(&self, config: &Config) -> Result<&SecretValue> {
        if let Some(secret) = self.cached.get() {
            debug!("Using cached secret");
            return Ok(secret);
        }

        self.cached.get_or_try_init(|| self.fetch(config)).await
    }

    async fn fetch(&self, config: &Config) -> Result<SecretValue> {
        let secret_arn = config.secret_arn()?;
        info!(secret_arn, "Fetching secret from Secrets Manager");

        let payload = match self.store.get_secret_value(secret_arn).await {
            Ok(payload) => payload,
            Err(e) => {
                error!(secret_arn, "Error retrieving secret: {}", e);
                return Err(e);
            }
        };

        match payload {
            SecretPayload::Text(secret_string) => SecretValue::from_json(&secret_string),
            SecretPayload::Binary(bytes) => Err(Error::UnsupportedPayload(format!(
                "binary secrets are not supported ({} bytes)",
                bytes.len()
            ))),
            SecretPayload::Empty => Err(Error::UnsupportedPayload(
                "secret has no value".to_string(),
            )),
        }
    }
}
