use async_trait::async_trait;
use contactos_form::client::AsyncStorageClient;
use contactos_form::error::{StorageError, StorageResult};
use contactos_form::models::ContactRecord;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock storage client for testing.
///
/// Records every insert, can be told to fail, and can hold each insert
/// pending until `release` is called.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockStorageClient {
    inserts: Arc<Mutex<Vec<(String, Vec<ContactRecord>)>>>,
    failure: Arc<Mutex<Option<StorageError>>>,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl MockStorageClient {
    /// A client whose inserts succeed immediately.
    pub fn new() -> Self {
        Self {
            inserts: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            gate: None,
        }
    }

    /// A client whose inserts wait for `release` before answering.
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::new()
        }
    }

    /// Make subsequent inserts fail with `error`.
    pub fn fail_with(&self, error: StorageError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Make subsequent inserts succeed again.
    pub fn succeed(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Let one held insert answer.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Number of insert calls made so far.
    pub fn call_count(&self) -> usize {
        self.inserts.lock().unwrap().len()
    }

    /// All inserts in call order.
    pub fn inserts(&self) -> Vec<(String, Vec<ContactRecord>)> {
        self.inserts.lock().unwrap().clone()
    }
}

impl Default for MockStorageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncStorageClient for MockStorageClient {
    async fn insert(&self, table: &str, rows: &[ContactRecord]) -> StorageResult<()> {
        self.inserts
            .lock()
            .unwrap()
            .push((table.to_string(), rows.to_vec()));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let failure = self.failure.lock().unwrap().clone();
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
