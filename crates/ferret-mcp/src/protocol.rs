//! MCP JSON-RPC wire types
//!
//! Tool calls travel as JSON-RPC 2.0 requests over HTTP POST. The shapes are
//! typed and validated at the boundary rather than passed around as loose
//! JSON maps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// The contents of a successful tool call's `result` field
pub type ToolCallResult = Map<String, Value>;

/// JSON-RPC 2.0 tool call request envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    pub jsonrpc: String,
    pub id: String,
    pub method: String,
    pub params: ToolCallParams,
}

/// `tools/call` parameters: tool name plus its arguments object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Map<String, Value>,
}

impl ToolCallRequest {
    /// Build an envelope with a fresh unique request id
    pub fn new(tool_name: &str, arguments: Map<String, Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: Uuid::new_v4().to_string(),
            method: "tools/call".to_string(),
            params: ToolCallParams {
                name: tool_name.to_string(),
                arguments,
            },
        }
    }
}

/// JSON-RPC 2.0 tool call response: either `result` or `error`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallResponse {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub result: Option<ToolCallResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}
