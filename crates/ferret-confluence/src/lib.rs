//! Confluence documentation search agent
//!
//! A hierarchical multi-agent definition (coordinator delegating to query
//! analyzer, document searcher, and answer synthesizer) plus the MCP-backed
//! tools the searcher uses. The agent connects only to the MCP server; all
//! Confluence credentials live on the MCP server side.

pub mod agent;
pub mod config;
pub mod prompt;
pub mod tools;

pub use agent::root_agent;
pub use config::ConfluenceConfig;
pub use tools::register_tools;
