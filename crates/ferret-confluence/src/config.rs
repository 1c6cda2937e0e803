//! Confluence agent configuration
//!
//! The agent connects only to the MCP server; Confluence base URL and
//! credentials are the MCP server's concern, not configured here.

use std::time::Duration;

use ferret_core::config::{FileConfig, env_or};
use ferret_mcp::McpClientConfig;

#[derive(Debug, Clone)]
pub struct ConfluenceConfig {
    /// URL of the Confluence MCP server
    pub mcp_server_url: String,
    /// Optional bearer token for the MCP server
    pub mcp_api_token: Option<String>,
    pub mcp_timeout: Duration,
    pub max_search_results: usize,
    pub citation_required: bool,
    pub use_reasoning: bool,
}

impl ConfluenceConfig {
    /// Load from environment with file-config fallback
    pub fn load(file: &FileConfig) -> Self {
        let mcp_server_url = env_or(
            "CONFLUENCE_MCP_SERVER_URL",
            file.mcp.server_url.as_deref(),
            "http://localhost:3000",
        );
        let token = env_or(
            "CONFLUENCE_MCP_API_TOKEN",
            file.mcp.api_token.as_deref(),
            "",
        );
        let timeout_secs = env_or(
            "MCP_TIMEOUT_SECS",
            file.mcp.timeout_secs.map(|t| t.to_string()).as_deref(),
            "30",
        )
        .parse()
        .unwrap_or(30);
        let max_search_results = env_or("MAX_SEARCH_RESULTS", None, "5").parse().unwrap_or(5);
        let citation_required = env_or("CITATION_REQUIRED", None, "true") == "true";
        let use_reasoning = env_or("USE_REASONING", None, "true") == "true";

        Self {
            mcp_server_url,
            mcp_api_token: if token.is_empty() { None } else { Some(token) },
            mcp_timeout: Duration::from_secs(timeout_secs),
            max_search_results,
            citation_required,
            use_reasoning,
        }
    }

    /// Connection settings for the MCP client
    pub fn mcp_client_config(&self) -> McpClientConfig {
        let mut config =
            McpClientConfig::new(&self.mcp_server_url).with_timeout(self.mcp_timeout);
        if let Some(token) = &self.mcp_api_token {
            config = config.with_token(token.clone());
        }
        config
    }
}
