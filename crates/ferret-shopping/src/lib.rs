//! Personalized shopping demo agent
//!
//! A single-agent definition with two webshop tools (`search` and `click`).
//! The tools are demonstration stubs: they render plausible webshop pages
//! without a product database behind them, and say so in their output.

pub mod agent;
pub mod prompt;
pub mod tools;

pub use agent::root_agent;
pub use tools::register_tools;
