pub mod http;
pub mod protocol;
pub mod server;
pub mod stdio;

pub use server::McpServer;
