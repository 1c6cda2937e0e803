//! MCP client error taxonomy

use thiserror::Error;

/// Errors surfaced by [`crate::McpClient`]
///
/// The client never retries on its own: `Transport` may be transient but is
/// surfaced as-is, and `Protocol` reflects a semantic rejection by the remote
/// tool, so retrying it is never appropriate.
#[derive(Debug, Error)]
pub enum McpError {
    /// Network-level failure: connection refused, DNS, timeout, or a
    /// malformed HTTP response without a parseable JSON-RPC error body
    #[error("MCP transport error: {0}")]
    Transport(String),

    /// The server answered with a JSON-RPC `error` object; code and message
    /// are carried verbatim
    #[error("MCP error {code}: {message}")]
    Protocol { code: i64, message: String },

    /// The configured server URL did not parse
    #[error("invalid MCP server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Operation attempted after [`crate::McpClient::close`]
    #[error("MCP client is closed")]
    Closed,
}

impl McpError {
    /// The remote error code, if this is a protocol-level rejection
    pub fn protocol_code(&self) -> Option<i64> {
        match self {
            Self::Protocol { code, .. } => Some(*code),
            _ => None,
        }
    }
}
