//! Ответы REST API сервера: либо данные, либо `{ "error": "..." }`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiEnvelope<T> {
    Error { error: String },
    Data(T),
}

impl<T> ApiEnvelope<T> {
    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiEnvelope::Error { error } => Err(error),
            ApiEnvelope::Data(data) => Ok(data),
        }
    }
}

/// Parses a response body; an error-flagged or malformed body is an `Err`
/// carrying a human-readable message.
pub fn parse_api_response<T: DeserializeOwned>(body: &str) -> Result<T, String> {
    serde_json::from_str::<ApiEnvelope<T>>(body)
        .map_err(|e| format!("Malformed response: {}", e))?
        .into_result()
}
