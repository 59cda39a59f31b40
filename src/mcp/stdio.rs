use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use super::{
    McpServer,
    protocol::{ErrorCode, JsonRpcResponse},
};

/// Serves newline-delimited JSON-RPC on stdin/stdout until stdin closes.
pub async fn serve(server: Arc<McpServer>) -> Result<()> {
    info!("serving MCP on stdio");
    serve_io(&server, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// One message per line in, one reply per line out. Blank lines are skipped.
/// A line that isn't UTF-8 gets a parse error reply; only EOF ends the loop.
pub async fn serve_io<R, W>(server: &McpServer, mut reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .context("failed to read from stdin")?;
        if read == 0 {
            break;
        }

        let reply = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => server.handle_message(line.trim_end()).await,
            Err(error) => {
                warn!(%error, "input line is not UTF-8");
                serde_json::to_string(&JsonRpcResponse::failure(
                    Value::Null,
                    ErrorCode::ParseError,
                    "Parse error",
                ))
                .ok()
            }
        };

        if let Some(reply) = reply {
            writer
                .write_all(reply.as_bytes())
                .await
                .context("failed to write reply")?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}
