//! HTTP client for the Supabase REST (PostgREST) endpoint.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication headers, the
//! request timeout, and mapping of datastore errors into [`StorageError`].

mod async_wrapper;
pub use async_wrapper::{AsyncStorageClient, AsyncSupabaseClient};

use crate::config::Config;
use crate::error::{StorageError, StorageResult};
use crate::metrics::Metrics;
use crate::models::ContactRecord;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// HTTP client for inserting rows into Supabase tables.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct SupabaseClient {
    /// Project base URL
    base_url: String,

    /// Anon key, sent both as `apikey` and as bearer token
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl SupabaseClient {
    /// Create a new SupabaseClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.supabase_url.clone(),
            api_key: config.supabase_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a SupabaseClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build the REST URL for a table.
    fn table_url(&self, table: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/rest/v1/{}", base, urlencoding::encode(table))
    }

    /// Insert rows into a table.
    ///
    /// Sends the rows as a JSON array with `Prefer: return=minimal`, so a
    /// successful insert has an empty body.
    pub fn insert(&self, table: &str, rows: &[ContactRecord]) -> StorageResult<()> {
        let start = Instant::now();
        let url = self.table_url(table);
        let body = serde_json::to_value(rows)?;

        tracing::debug!("POST {} ({} rows)", url, rows.len());

        let result = self
            .agent
            .post(&url)
            .set("apikey", &self.api_key)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .set("Prefer", "return=minimal")
            .send_json(&body)
            .map_err(map_error);

        let duration = start.elapsed();
        self.metrics.record_insert_request(duration);
        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
            }
            Err(e) => {
                tracing::warn!("POST {} - Error: {:?}", url, e);
                self.metrics.record_insert_error();
            }
        }

        result.map(|_| ())
    }
}

/// Map a ureq error to a StorageError.
fn map_error(error: ureq::Error) -> StorageError {
    match error {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            let message = error_message(code, &body);

            match code {
                401 | 403 => StorageError::Unauthorized(message),
                404 => StorageError::NotFound(message),
                429 => StorageError::RateLimitExceeded,
                _ => StorageError::ApiError {
                    status: code,
                    message,
                },
            }
        }
        ureq::Error::Transport(transport) => match transport.kind() {
            ureq::ErrorKind::ConnectionFailed => {
                StorageError::HttpError("Connection failed".to_string())
            }
            ureq::ErrorKind::Io if is_timeout(&transport) => StorageError::Timeout,
            _ => StorageError::HttpError(transport.to_string()),
        },
    }
}

/// True only when the transport failed because a socket read or write timed out.
fn is_timeout(transport: &ureq::Transport) -> bool {
    std::error::Error::source(transport)
        .and_then(|source| source.downcast_ref::<std::io::Error>())
        .map(|io| {
            matches!(
                io.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            )
        })
        .unwrap_or(false)
}

/// Pull the human-readable message out of an error response body.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<PostgrestErrorBody>(body) {
        if let Some(message) = parsed.message.filter(|m| !m.is_empty()) {
            tracing::debug!(
                "datastore error code={:?} details={:?}",
                parsed.code,
                parsed.details
            );
            return message;
        }
    }

    let body = body.trim();
    if body.is_empty() {
        format!("Request failed with status {}", status)
    } else {
        body.to_string()
    }
}
