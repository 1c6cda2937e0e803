//! Shared API types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool advertised to the model: name, description, and JSON input schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition_serialization() {
        let def = ToolDefinition {
            name: "confluence_search".to_string(),
            description: "Search Confluence content".to_string(),
            input_schema: serde_json::json!({"type": "object"}),
        };
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["name"], "confluence_search");
        assert_eq!(json["inputSchema"]["type"], "object");
    }
}
