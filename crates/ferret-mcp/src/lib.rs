//! MCP (Model Context Protocol) tool-call client
//!
//! A thin asynchronous HTTP wrapper that serializes tool invocations into
//! JSON-RPC 2.0 requests, posts them to a configured MCP server, and unwraps
//! the response into a result map or a typed error. The client performs no
//! retries; retry policy belongs to the caller.

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{McpClient, McpClientConfig};
pub use error::McpError;
pub use protocol::{RpcError, ToolCallParams, ToolCallRequest, ToolCallResponse, ToolCallResult};
