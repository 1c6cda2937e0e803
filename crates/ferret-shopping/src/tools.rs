//! Webshop demo tools
//!
//! Deterministic stand-ins for a real webshop backend, kept so the agent can
//! be demonstrated end to end without a product database. Their output is
//! clearly labelled as demo content.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use ferret_core::tools::{ToolHandler, ToolRegistry, json_schema};

/// Register the webshop tools
pub fn register_tools(registry: &mut ToolRegistry) {
    registry.register(Arc::new(SearchTool));
    registry.register(Arc::new(ClickTool));
}

/// Names of the webshop tools
pub fn tool_names() -> Vec<String> {
    vec!["search".to_string(), "click".to_string()]
}

/// Search the webshop for keywords
pub struct SearchTool;

#[async_trait]
impl ToolHandler for SearchTool {
    fn name(&self) -> &str {
        "search"
    }

    fn description(&self) -> &str {
        "Search for keywords in the webshop. Returns the search results page."
    }

    fn input_schema(&self) -> Value {
        json_schema(
            serde_json::json!({
                "keywords": {
                    "type": "string",
                    "description": "The keywords to search for"
                }
            }),
            vec!["keywords"],
        )
    }

    async fn execute(&self, input: Value) -> Result<String> {
        let keywords = input
            .get("keywords")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow!("Missing 'keywords' parameter"))?;

        debug!(keywords, "webshop search");
        Ok(format!(
            "Search results for '{keywords}':\n\n\
             1. Product A - Matching your search\n\
             2. Product B - Similar item\n\
             3. Product C - Alternative option\n\n\
             [This is a demo agent - full product database not loaded]"
        ))
    }
}

/// Click a button on the current webshop page
pub struct ClickTool;

#[async_trait]
impl ToolHandler for ClickTool {
    fn name(&self) -> &str {
        "click"
    }

    fn description(&self) -> &str {
        "Click the button with the given name. Returns the webpage after clicking."
    }

    fn input_schema(&self) -> Value {
        json_schema(
            serde_json::json!({
                "button_name": {
                    "type": "string",
                    "description": "The name of the button to click"
                }
            }),
            vec!["button_name"],
        )
    }

    async fn execute(&self, input: Value) -> Result<String> {
        let button_name = input
            .get("button_name")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow!("Missing 'button_name' parameter"))?;

        debug!(button_name, "webshop click");
        if button_name.eq_ignore_ascii_case("back to search") {
            return Ok("Returned to search page.".to_string());
        }

        Ok(format!(
            "Clicked '{button_name}'.\n\n\
             Product Details:\n\
             - Name: Sample Product\n\
             - Price: $29.99\n\
             - Description: A great product matching your needs\n\n\
             [This is a demo agent - full navigation not available]"
        ))
    }
}
