//! MCP tool server for the abuse ticket API.
//!
//! Each tool binds its arguments to a typed request, performs exactly one HTTP
//! call against the configured API and returns the response as pretty JSON.

pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod tools;

pub use error::ToolError;
