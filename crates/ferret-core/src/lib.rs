//! ferret-core — shared abstractions for Ferret demo agents
//!
//! Agents are declarative graphs (a coordinator delegating to sub-agents)
//! paired with named tools. The LLM runtime that drives them is an external
//! collaborator; this crate only models the configuration and the tool
//! dispatch layer.

pub mod agent;
pub mod api;
pub mod config;
pub mod tools;

pub use agent::AgentDefinition;
pub use api::ToolDefinition;
pub use tools::{ToolExecutor, ToolHandler, ToolRegistry};
