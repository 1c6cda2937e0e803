//! Confluence tools backed by the MCP client
//!
//! Each handler maps its tool input onto an MCP tool call and returns the
//! server's result as pretty-printed JSON for the model to read. The client
//! is injected; there is no module-level singleton.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use ferret_core::tools::{ToolHandler, ToolRegistry, json_schema};
use ferret_mcp::{McpClient, ToolCallResult};

use crate::config::ConfluenceConfig;

/// Names of the Confluence tools, in the order they are registered
pub fn tool_names() -> Vec<String> {
    vec![
        "confluence_search".to_string(),
        "confluence_get_page".to_string(),
        "confluence_get_page_by_title".to_string(),
        "confluence_list_spaces".to_string(),
    ]
}

/// Register all Confluence tools against a shared MCP client
pub fn register_tools(
    registry: &mut ToolRegistry,
    client: Arc<McpClient>,
    config: &ConfluenceConfig,
) {
    registry.register(Arc::new(SearchTool {
        client: client.clone(),
        max_results: config.max_search_results,
    }));
    registry.register(Arc::new(GetPageTool {
        client: client.clone(),
    }));
    registry.register(Arc::new(GetPageByTitleTool {
        client: client.clone(),
    }));
    registry.register(Arc::new(ListSpacesTool { client }));
}

fn render(result: ToolCallResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Value::Object(result))?)
}

fn required_str<'a>(input: &'a Value, key: &str) -> Result<&'a str> {
    input
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow!("Missing '{}' parameter", key))
}

fn optional_str<'a>(input: &'a Value, key: &str) -> Option<&'a str> {
    input.get(key).and_then(|v| v.as_str()).filter(|s| !s.is_empty())
}

/// Search Confluence content
pub struct SearchTool {
    client: Arc<McpClient>,
    max_results: usize,
}

#[async_trait]
impl ToolHandler for SearchTool {
    fn name(&self) -> &str {
        "confluence_search"
    }

    fn description(&self) -> &str {
        "Search for content in Confluence. Returns matching pages with title, \
         URL, space, excerpt, and last-modified metadata."
    }

    fn input_schema(&self) -> Value {
        json_schema(
            serde_json::json!({
                "query": {
                    "type": "string",
                    "description": "Search query string"
                },
                "space_key": {
                    "type": "string",
                    "description": "Optional Confluence space key to limit search scope"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of results to return"
                }
            }),
            vec!["query"],
        )
    }

    async fn execute(&self, input: Value) -> Result<String> {
        let query = required_str(&input, "query")?;
        let space_key = optional_str(&input, "space_key");
        let max_results = input
            .get("max_results")
            .and_then(|v| v.as_u64())
            .map(|n| n as usize)
            .unwrap_or(self.max_results);

        debug!(query, ?space_key, max_results, "Confluence search");
        let result = self
            .client
            .search_content(query, space_key, max_results)
            .await?;
        render(result)
    }
}

/// Retrieve full page content by id
pub struct GetPageTool {
    client: Arc<McpClient>,
}

#[async_trait]
impl ToolHandler for GetPageTool {
    fn name(&self) -> &str {
        "confluence_get_page"
    }

    fn description(&self) -> &str {
        "Retrieve the full content of a Confluence page by its page id."
    }

    fn input_schema(&self) -> Value {
        json_schema(
            serde_json::json!({
                "page_id": {
                    "type": "string",
                    "description": "Confluence page id"
                }
            }),
            vec!["page_id"],
        )
    }

    async fn execute(&self, input: Value) -> Result<String> {
        let page_id = required_str(&input, "page_id")?;
        render(self.client.get_page(page_id).await?)
    }
}

/// Find a page by its exact title
pub struct GetPageByTitleTool {
    client: Arc<McpClient>,
}

#[async_trait]
impl ToolHandler for GetPageByTitleTool {
    fn name(&self) -> &str {
        "confluence_get_page_by_title"
    }

    fn description(&self) -> &str {
        "Find a Confluence page by its exact title, optionally within a space."
    }

    fn input_schema(&self) -> Value {
        json_schema(
            serde_json::json!({
                "title": {
                    "type": "string",
                    "description": "Exact page title"
                },
                "space_key": {
                    "type": "string",
                    "description": "Optional space key to narrow the search"
                }
            }),
            vec!["title"],
        )
    }

    async fn execute(&self, input: Value) -> Result<String> {
        let title = required_str(&input, "title")?;
        let space_key = optional_str(&input, "space_key");
        render(self.client.get_page_by_title(title, space_key).await?)
    }
}

/// List available Confluence spaces
pub struct ListSpacesTool {
    client: Arc<McpClient>,
}

#[async_trait]
impl ToolHandler for ListSpacesTool {
    fn name(&self) -> &str {
        "confluence_list_spaces"
    }

    fn description(&self) -> &str {
        "List the Confluence spaces available through the MCP server."
    }

    fn input_schema(&self) -> Value {
        json_schema(serde_json::json!({}), vec![])
    }

    async fn execute(&self, _input: Value) -> Result<String> {
        render(self.client.list_spaces().await?)
    }
}
