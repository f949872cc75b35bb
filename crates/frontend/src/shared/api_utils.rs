//! API utilities for frontend-backend communication
//!
//! Every helper returns an `ApiError` that already knows which notification
//! it should become: transport failures are `Network`, bodies that are
//! malformed or carry an `error` field are `ErrorResponse`.

use crate::shared::config::AppConfig;
use contracts::shared::api::parse_api_response;
use contracts::shared::database::DatabaseInfo;
use contracts::shared::notification::{ErrorSource, Notification};
use contracts::shared::stats::ServerStats;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub source: ErrorSource,
    pub message: String,
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            source: ErrorSource::Network,
            message: message.into(),
        }
    }

    pub fn response(message: impl Into<String>) -> Self {
        Self {
            source: ErrorSource::ErrorResponse,
            message: message.into(),
        }
    }

    pub fn to_notification(&self) -> Notification {
        Notification::from_error(self.source, &self.message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source.message(&self.message))
    }
}

/// GET a JSON resource. The body is read as text first so an error-flagged
/// body is recognised regardless of the HTTP status.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;

    log::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
    parse_api_response(&body).map_err(ApiError::response)
}

/// Fetch server statistics (`GET /api/v1/stats`)
pub async fn fetch_stats(config: &AppConfig) -> Result<ServerStats, ApiError> {
    get_json(&config.stats_url()).await
}

/// List database names (`GET /api/v1/databases`)
pub async fn fetch_database_names(config: &AppConfig) -> Result<Vec<String>, ApiError> {
    get_json(&config.databases_url()).await
}

/// Get one database with its collections and stats (`GET /api/v1/databases/{name}`)
pub async fn fetch_database_info(config: &AppConfig, name: &str) -> Result<DatabaseInfo, ApiError> {
    get_json(&config.database_url(name)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        let err = ApiError::network("Failed to fetch");
        assert_eq!(err.to_string(), "Request failed: Failed to fetch");
        assert!(err.to_notification().is_error());

        let err = ApiError::response("not authorized");
        assert_eq!(err.to_notification().message, "not authorized");
    }
}
