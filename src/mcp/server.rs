use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use super::protocol::{
    CallToolParams, CallToolResult, ErrorCode, InitializeParams, JSONRPC_VERSION,
    JsonRpcRequest, JsonRpcResponse, ListToolsResult, PROTOCOL_VERSION,
};
use crate::tools::{CallContext, ToolRegistry};

pub const SERVER_NAME: &str = env!("CARGO_PKG_NAME");
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Transport-independent MCP request handling.
/// Holds no per-session state; every message is handled on its own.
pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handles one raw JSON-RPC message and returns the serialized reply, if any.
    pub async fn handle_message(&self, raw: &str) -> Option<String> {
        let response = match serde_json::from_str::<Value>(raw) {
            Ok(value) => self.handle_value(value).await?,
            Err(error) => {
                warn!(%error, "unparsable JSON-RPC message");
                JsonRpcResponse::failure(Value::Null, ErrorCode::ParseError, "Parse error")
            }
        };

        match serde_json::to_string(&response) {
            Ok(text) => Some(text),
            Err(error) => {
                warn!(%error, "failed to serialize JSON-RPC response");
                None
            }
        }
    }

    pub async fn handle_value(&self, value: Value) -> Option<JsonRpcResponse> {
        let id = value.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle(request).await,
            Err(error) => Some(JsonRpcResponse::failure(
                id,
                ErrorCode::InvalidRequest,
                format!("Invalid request: {error}"),
            )),
        }
    }

    #[tracing::instrument(skip_all, fields(method = %request.method))]
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.jsonrpc.as_deref().is_some_and(|v| v != JSONRPC_VERSION) {
            debug!("client sent jsonrpc {:?}", request.jsonrpc);
        }

        let Some(id) = request.id.clone() else {
            debug!("notification {}", request.method);
            return None;
        };

        let response = match request.method.as_str() {
            "initialize" => self.initialize(id, request.params),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => to_response(
                id,
                &ListToolsResult {
                    tools: self.registry.definitions(),
                },
            ),
            "tools/call" => self.call_tool(id, request.params).await,
            method => JsonRpcResponse::failure(
                id,
                ErrorCode::MethodNotFound,
                format!("Method not found: {method}"),
            ),
        };
        Some(response)
    }

    fn initialize(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: InitializeParams = params
            .and_then(|params| serde_json::from_value(params).ok())
            .unwrap_or_default();
        let protocol_version = params
            .protocol_version
            .unwrap_or_else(|| PROTOCOL_VERSION.to_string());

        info!("client initialized with protocol {}", protocol_version);
        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": protocol_version,
                "capabilities": { "tools": { "listChanged": false } },
                "serverInfo": { "name": SERVER_NAME, "version": SERVER_VERSION },
            }),
        )
    }

    async fn call_tool(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match parse_params(params) {
            Ok(params) => params,
            Err(message) => return JsonRpcResponse::failure(id, ErrorCode::InvalidParams, message),
        };

        let ctx = CallContext {
            request_id: Some(render_id(&id)),
        };
        match self.registry.call(&params.name, &ctx, params.arguments).await {
            Some(output) => to_response(id, &CallToolResult::from(output)),
            None => JsonRpcResponse::failure(
                id,
                ErrorCode::InvalidParams,
                format!("Unknown tool: {}", params.name),
            ),
        }
    }
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, String> {
    let params = params.ok_or_else(|| "params must be an object".to_string())?;
    serde_json::from_value(params).map_err(|e| format!("Invalid params: {e}"))
}

fn to_response<T: Serialize>(id: Value, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(error) => JsonRpcResponse::failure(id, ErrorCode::InternalError, error.to_string()),
    }
}

fn render_id(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
