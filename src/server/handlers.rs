//! MCP tool handlers for the contact form server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::domain::Field;
use crate::services::{SubmissionController, SubmitOutcome};
use crate::view::FormView;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server exposing one contact form instance.
#[derive(Clone)]
pub struct ContactFormServer {
    controller: Arc<SubmissionController>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactFormServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contactos-form".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Contact capture form - fill in nombre, correo and teléfono, then submit to store the contact in the 'contactos' table.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SetFieldParams {
    field: Field,
    value: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SubmitContactParams {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

#[derive(Debug, Serialize)]
struct SubmitResponse {
    outcome: SubmitOutcome,
    form: FormView,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl ContactFormServer {
    /// Create a server around a controller.
    pub fn new(controller: Arc<SubmissionController>) -> Self {
        Self {
            controller,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Show the contact form: field values, inline field errors, submit button state and the status banner."
    )]
    async fn get_form(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.controller.view())
    }

    #[tool(description = "Type a value into one form field (name, email or phone).")]
    async fn set_field(
        &self,
        params: Parameters<SetFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::debug!("set_field: field={}", params.field);

        self.controller.set_field(params.field, params.value);
        json_result(&self.controller.view())
    }

    #[tool(
        description = "Submit the contact form. Any provided name/email/phone values are typed in first. Invalid input returns field errors without saving; valid input is stored in the 'contactos' table."
    )]
    async fn submit_contact(
        &self,
        params: Parameters<SubmitContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        for (field, value) in [
            (Field::Name, params.name),
            (Field::Email, params.email),
            (Field::Phone, params.phone),
        ] {
            if let Some(value) = value {
                self.controller.set_field(field, value);
            }
        }

        let outcome = self.controller.submit().await;
        tracing::info!("submit_contact: outcome={:?}", outcome);

        json_result(&SubmitResponse {
            outcome,
            form: self.controller.view(),
        })
    }
}
