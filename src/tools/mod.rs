pub mod abuse_tickets;
pub mod binder;
pub mod http_tool;
pub mod params;
pub mod registry;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::ToolError;

pub use http_tool::{ApiClient, Endpoint, HttpTool, PreparedCall};
pub use params::{Param, ParamKind, ParamLocation};
pub use registry::ToolRegistry;

/// What a caller sees in `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Per-invocation context handed to every tool.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    /// JSON-RPC id of the `tools/call` request, rendered as text
    pub request_id: Option<String>,
}

/// Text payload of a finished invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl From<Result<String, ToolError>> for ToolOutput {
    fn from(result: Result<String, ToolError>) -> Self {
        match result {
            Ok(text) => ToolOutput::text(text),
            Err(error) => ToolOutput::error(error.to_string()),
        }
    }
}

/// A named operation callable through the agent protocol.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name, description and input schema
    fn definition(&self) -> ToolDefinition;

    async fn call(&self, ctx: &CallContext, arguments: Value) -> Result<String, ToolError>;
}
