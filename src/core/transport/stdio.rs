//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and recommended mode.
//! Stdout carries protocol frames only; all diagnostics go to stderr.

use rmcp::ServiceExt;
use tracing::{debug, info};

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let name = server.name().to_string();

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        // Written regardless of the log filter; clients and wrappers wait for it.
        eprintln!("{}", ready_line(&name));
        debug!("STDIO service started");

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}

/// Readiness line announced on stderr once the service is up.
fn ready_line(name: &str) -> String {
    format!("{} running on stdio", name)
}
