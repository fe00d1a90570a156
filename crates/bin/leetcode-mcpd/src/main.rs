//! Daemon entry point for the LeetCode MCP server.
//!
//! Loads configuration from the environment, builds the GraphQL control plane,
//! and serves the MCP protocol over stdio and/or streamable HTTP.

mod config;

use std::sync::Arc;

use leetcode_core::control::LeetcodeControlPlane;
use leetcode_core::graphql::GraphqlClient;
use leetcode_mcp::server::{serve_stdio, serve_streamable_http};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::LeetcodeConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // stdout carries the stdio transport, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = LeetcodeConfig::from_args()?;
    let client = GraphqlClient::new(&config.client_config())?;
    let control = Arc::new(LeetcodeControlPlane::new(client, config.control_config()));
    info!(
        endpoint = %control.client().endpoint(),
        language = %control.language(),
        authors = control.authors().len(),
        "leetcode-mcpd starting"
    );

    match (config.enable_stdio, config.mcp_http) {
        (true, true) => {
            let http_control = control.clone();
            let http_config = config.http_config();
            tokio::spawn(async move {
                if let Err(err) = serve_streamable_http(http_control, http_config).await {
                    error!(error = %err, "streamable HTTP server stopped");
                }
            });
            serve_stdio(control).await
        }
        (true, false) => serve_stdio(control).await,
        (false, _) => serve_streamable_http(control, config.http_config()).await,
    }
}
