use std::{path::PathBuf, sync::Arc};

use abuse_ticket_mcp::{
    config::{self, Config, Transport},
    mcp::{self, McpServer},
    tools::{ApiClient, ToolRegistry},
};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// ----------------------------------------------------------------------
/// 1  Command line
/// ----------------------------------------------------------------------
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// YAML config file
    #[arg(short, long, env = "ABUSE_MCP_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the abuse API (overrides api.base_url)
    #[arg(long, env = "ABUSE_API_BASE_URL")]
    base_url: Option<String>,

    /// How MCP clients reach us (overrides server.transport)
    #[arg(short, long, value_enum)]
    transport: Option<Transport>,

    /// HTTP port (overrides server.port)
    #[arg(short, long)]
    port: Option<u16>,
}

impl Cli {
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => config::load(path)?,
            None => Config::default(),
        };
        if let Some(base_url) = self.base_url {
            config.api.base_url = Some(base_url);
        }
        if let Some(transport) = self.transport {
            config.server.transport = transport;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        Ok(config)
    }
}

/// ----------------------------------------------------------------------
/// 2  Startup
/// ----------------------------------------------------------------------
#[tokio::main]
async fn main() {
    // a) Logging (stderr, stdout belongs to the stdio transport)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run(Cli::parse()).await {
        error!("{:#}", error);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // b) Config
    let config = cli.into_config()?;
    let base_url = config.base_url()?;

    // c) Tools
    let api = ApiClient::new(&base_url)
        .with_context(|| format!("invalid API base URL {base_url}"))?;
    let registry = ToolRegistry::abuse_tickets(api);
    info!("{} tools ready against {}", registry.len(), base_url);

    // d) Transport
    let server = Arc::new(McpServer::new(registry));
    match config.server.transport {
        Transport::Stdio => mcp::stdio::serve(server).await,
        Transport::Http => mcp::http::serve(server, config.server.port).await,
    }
}
