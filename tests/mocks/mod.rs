mod mock_storage_client;

pub use mock_storage_client::MockStorageClient;
