//! Contactos Form - Main entry point
//!
//! Runs the contact form as a Model Context Protocol (MCP) server over stdio,
//! storing submitted contacts in a Supabase table.

use anyhow::Result;
use contactos_form::client::{AsyncStorageClient, AsyncSupabaseClient};
use contactos_form::{Config, ContactFormServer, SubmissionController, SupabaseClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact form server with Supabase URL: {} (table '{}')",
        config.supabase_url, config.table
    );

    let sync_client = SupabaseClient::new(&config);
    let metrics = sync_client.metrics().clone();
    let client = Arc::new(AsyncSupabaseClient::new(sync_client)) as Arc<dyn AsyncStorageClient>;

    let controller = SubmissionController::new(client)
        .with_table(config.table.clone())
        .with_metrics(metrics);
    let server = ContactFormServer::new(Arc::new(controller));

    info!("Starting MCP server with stdio transport");
    contactos_form::server::run_server(server).await?;

    info!("Contact form server shutdown complete");
    Ok(())
}
