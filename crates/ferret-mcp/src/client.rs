//! MCP client — posts tool calls to an MCP server over HTTP
//!
//! The client is constructed once and shared (`Arc`) by whoever needs it;
//! there is no hidden global instance. Concurrent calls against the same
//! client are independent and share only the underlying connection pool.

use reqwest::Client;
use serde_json::{Map, Value};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::McpError;
use crate::protocol::{ToolCallRequest, ToolCallResponse, ToolCallResult};

/// Fixed tool-call endpoint on the MCP server
const MCP_CALL_PATH: &str = "/mcp/v1/call";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for an MCP server
#[derive(Clone)]
pub struct McpClientConfig {
    pub server_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for McpClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpClientConfig")
            .field("server_url", &self.server_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl McpClientConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.api_token = if token.is_empty() { None } else { Some(token) };
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for a single MCP server
///
/// All tool invocations go through [`McpClient::call_tool`]; the Confluence
/// wrappers only map typed parameters onto tool arguments.
pub struct McpClient {
    endpoint: Url,
    api_token: Option<String>,
    /// Taken out on close(); calls fail fast with `Closed` afterwards
    http: Mutex<Option<Client>>,
}

impl McpClient {
    /// Build a client for the configured server
    ///
    /// Validates the server URL up front; no connection is opened until the
    /// first call.
    pub fn new(config: McpClientConfig) -> Result<Self, McpError> {
        let base = config.server_url.trim_end_matches('/');
        let endpoint =
            Url::parse(&format!("{}{}", base, MCP_CALL_PATH)).map_err(|e| McpError::InvalidUrl {
                url: config.server_url.clone(),
                reason: e.to_string(),
            })?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| McpError::Transport(format!("failed to build HTTP client: {e}")))?;

        debug!(endpoint = %endpoint, "MCP client created");

        Ok(Self {
            endpoint,
            api_token: config.api_token,
            http: Mutex::new(Some(http)),
        })
    }

    /// Invoke a named tool on the MCP server
    ///
    /// A fresh request id is generated per call. A JSON-RPC `error` in the
    /// response maps to [`McpError::Protocol`]; any network-level failure or
    /// non-2xx status without a parseable error body maps to
    /// [`McpError::Transport`]. Neither is retried here.
    pub async fn call_tool(
        &self,
        tool_name: &str,
        arguments: Map<String, Value>,
    ) -> Result<ToolCallResult, McpError> {
        let http = self.http_client()?;
        let request = ToolCallRequest::new(tool_name, arguments);

        debug!(tool = tool_name, id = %request.id, "MCP tool call");

        let mut req = http.post(self.endpoint.clone()).json(&request);
        if let Some(token) = &self.api_token {
            req = req.bearer_auth(token);
        }

        let response = req
            .send()
            .await
            .map_err(|e| McpError::Transport(format!("request to {} failed: {e}", self.endpoint)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| McpError::Transport(format!("failed to read response body: {e}")))?;

        let decoded: ToolCallResponse = match serde_json::from_slice(&body) {
            Ok(decoded) => decoded,
            Err(_) if !status.is_success() => {
                return Err(McpError::Transport(format!(
                    "HTTP {status} from MCP server"
                )));
            }
            Err(e) => {
                return Err(McpError::Transport(format!(
                    "invalid JSON in MCP response: {e}"
                )));
            }
        };

        if let Some(error) = decoded.error {
            warn!(
                tool = tool_name,
                code = error.code,
                message = %error.message,
                "MCP server rejected tool call"
            );
            return Err(McpError::Protocol {
                code: error.code,
                message: error.message,
            });
        }

        if !status.is_success() {
            return Err(McpError::Transport(format!(
                "HTTP {status} from MCP server"
            )));
        }

        Ok(decoded.result.unwrap_or_default())
    }

    /// Search Confluence content, optionally scoped to a space
    pub async fn search_content(
        &self,
        query: &str,
        space_key: Option<&str>,
        max_results: usize,
    ) -> Result<ToolCallResult, McpError> {
        let mut arguments = Map::new();
        arguments.insert("query".to_string(), Value::from(query));
        arguments.insert("limit".to_string(), Value::from(max_results));
        // Omitted entirely when unset, never sent as null
        if let Some(space) = space_key {
            arguments.insert("spaceKey".to_string(), Value::from(space));
        }
        self.call_tool("confluence_search", arguments).await
    }

    /// Get page content by id
    pub async fn get_page(&self, page_id: &str) -> Result<ToolCallResult, McpError> {
        let mut arguments = Map::new();
        arguments.insert("pageId".to_string(), Value::from(page_id));
        self.call_tool("confluence_get_page", arguments).await
    }

    /// Get a page by its exact title
    pub async fn get_page_by_title(
        &self,
        title: &str,
        space_key: Option<&str>,
    ) -> Result<ToolCallResult, McpError> {
        let mut arguments = Map::new();
        arguments.insert("title".to_string(), Value::from(title));
        if let Some(space) = space_key {
            arguments.insert("spaceKey".to_string(), Value::from(space));
        }
        self.call_tool("confluence_get_page_by_title", arguments)
            .await
    }

    /// List available Confluence spaces
    pub async fn list_spaces(&self) -> Result<ToolCallResult, McpError> {
        self.call_tool("confluence_list_spaces", Map::new()).await
    }

    /// Release the underlying connection pool
    ///
    /// Safe to call more than once. Any call issued afterwards fails with
    /// [`McpError::Closed`] before performing network I/O.
    pub fn close(&self) {
        if let Ok(mut guard) = self.http.lock() {
            if guard.take().is_some() {
                debug!(endpoint = %self.endpoint, "MCP client closed");
            }
        }
    }

    fn http_client(&self) -> Result<Client, McpError> {
        let guard = self.http.lock().map_err(|_| McpError::Closed)?;
        guard.as_ref().cloned().ok_or(McpError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_construction() {
        let client = McpClient::new(McpClientConfig::new("http://localhost:3000")).unwrap();
        assert_eq!(client.endpoint.as_str(), "http://localhost:3000/mcp/v1/call");

        // Trailing slash must not produce a double slash
        let client = McpClient::new(McpClientConfig::new("http://localhost:3000/")).unwrap();
        assert_eq!(client.endpoint.as_str(), "http://localhost:3000/mcp/v1/call");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = McpClient::new(McpClientConfig::new("not a url"));
        assert!(matches!(result, Err(McpError::InvalidUrl { .. })));
    }

    #[test]
    fn test_empty_token_treated_as_absent() {
        let config = McpClientConfig::new("http://localhost:3000").with_token("");
        assert!(config.api_token.is_none());

        let config = McpClientConfig::new("http://localhost:3000").with_token("secret");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_config_debug_redacts_token() {
        let config = McpClientConfig::new("http://localhost:3000").with_token("secret");
        let debug = format!("{:?}", config);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret"));
    }

    #[tokio::test]
    async fn test_call_after_close_fails_fast() {
        let client = McpClient::new(McpClientConfig::new("http://localhost:3000")).unwrap();
        client.close();
        client.close(); // idempotent

        let result = client.call_tool("confluence_search", Map::new()).await;
        assert!(matches!(result, Err(McpError::Closed)));

        let result = client.list_spaces().await;
        assert!(matches!(result, Err(McpError::Closed)));
    }
}
