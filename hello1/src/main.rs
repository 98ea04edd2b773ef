//! Hello1 Lambda - Reads the database password from Secrets Manager and echoes it back.
//!
//! The secret is fetched on the first invocation of a warm context and reused
//! for every invocation after that.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use shared::{Config, Response, SecretFetcher, SecretsManagerStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Field read from the secret.
const PASSWORD_FIELD: &str = "DATABASE_PASSWORD";

const FUNCTION_NAME: &str = "hello1";

/// Application state shared across invocations.
struct AppState {
    secrets: SecretFetcher,
}

impl AppState {
    async fn new() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = aws_sdk_secretsmanager::Client::new(&config);

        Self {
            secrets: SecretFetcher::new(SecretsManagerStore::new(client)),
        }
    }
}

/// Build the response for one invocation. Every failure becomes a generic 500.
async fn respond(secrets: &SecretFetcher, config: &Config) -> Response {
    let password = match secrets.get_secret(config).await {
        Ok(secret) => secret.field(PASSWORD_FIELD),
        Err(e) => Err(e),
    };

    match password {
        Ok(password) => {
            info!("Secret retrieved");
            Response::ok(&format!(
                "Successfully used secret! {} from {}",
                password, FUNCTION_NAME
            ))
        }
        Err(e) => {
            error!("Failed to process request: {}", e);
            Response::internal_error()
        }
    }
}

async fn handler(state: Arc<AppState>, _event: LambdaEvent<Value>) -> Result<Response, Error> {
    let config = Config::from_env();
    Ok(respond(&state.secrets, &config).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new().await);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
