//! MCP server for the contact form.
//!
//! Exposes one form instance to an assistant through the Model Context
//! Protocol over stdio.

pub mod handlers;

pub use handlers::ContactFormServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact form server with stdio transport.
///
/// Runs until the client disconnects.
pub async fn run_server(server: ContactFormServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
