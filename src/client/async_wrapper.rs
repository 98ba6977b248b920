//! Async wrapper around the synchronous SupabaseClient.
//!
//! This module provides an async interface to the synchronous client by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::SupabaseClient;
use crate::error::{StorageError, StorageResult};
use crate::models::ContactRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// The storage client seen by the submission controller.
///
/// A single operation: insert rows into a table, succeeding or failing with
/// an error that carries message text.
#[async_trait]
pub trait AsyncStorageClient: Send + Sync {
    async fn insert(&self, table: &str, rows: &[ContactRecord]) -> StorageResult<()>;
}

/// Async wrapper around the synchronous SupabaseClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncSupabaseClient {
    client: Arc<SupabaseClient>,
}

impl AsyncSupabaseClient {
    pub fn new(client: SupabaseClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncStorageClient for AsyncSupabaseClient {
    async fn insert(&self, table: &str, rows: &[ContactRecord]) -> StorageResult<()> {
        let client = self.client.clone();
        let table = table.to_string();
        let rows = rows.to_vec();

        tokio::task::spawn_blocking(move || client.insert(&table, &rows))
            .await
            .map_err(|e| StorageError::Other(format!("Task join error: {}", e)))?
    }
}
