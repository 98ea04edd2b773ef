//! Response envelope returned to the Lambda runtime.

use serde::{Deserialize, Serialize};

/// Message returned to callers for any failure. Details only go to the logs.
pub const GENERIC_ERROR_MESSAGE: &str = "Error processing request";

/// Proxy-style response: a status code and a JSON-encoded body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl Response {
    /// Create a response whose body is `message` encoded as a JSON string.
    pub fn json_message(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: json_string(message),
        }
    }

    /// 200 response carrying `message`.
    pub fn ok(message: &str) -> Self {
        Self::json_message(200, message)
    }

    /// 500 response with the generic error message.
    pub fn internal_error() -> Self {
        Self::json_message(500, GENERIC_ERROR_MESSAGE)
    }
}

fn json_string(message: &str) -> String {
    // Serializing a &str cannot fail.
    serde_json::Value::from(message).to_string()
}
