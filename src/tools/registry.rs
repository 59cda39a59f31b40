use std::collections::HashMap;

use serde_json::Value;
use tracing::{error, info};

use super::{ApiClient, CallContext, Tool, ToolDefinition, ToolOutput, abuse_tickets};

/// Tools exposed to callers, keyed by name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All abuse ticket operations, bound to one API client.
    pub fn abuse_tickets(api: ApiClient) -> Self {
        let mut registry = Self::new();
        registry.register(abuse_tickets::create_ticket(api.clone()));
        registry.register(abuse_tickets::list_tickets(api.clone()));
        registry.register(abuse_tickets::get_ticket(api));
        registry
    }

    /// Adds `tool`, replacing any tool registered under the same name.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        let name = tool.definition().name;
        info!("registering tool {}", name);
        self.tools.insert(name, Box::new(tool));
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Definitions sorted by name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<ToolDefinition> =
            self.tools.values().map(|tool| tool.definition()).collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Runs the named tool. `None` if no such tool is registered.
    pub async fn call(&self, name: &str, ctx: &CallContext, arguments: Value) -> Option<ToolOutput> {
        let tool = self.tools.get(name)?;
        let result = tool.call(ctx, arguments).await;
        if let Err(error) = &result {
            error!(%error, "tool {} failed", name);
        }
        Some(result.into())
    }
}
