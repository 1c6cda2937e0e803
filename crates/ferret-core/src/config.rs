//! Configuration loading
//!
//! Settings come from an optional TOML file (`~/.config/ferret/config.toml`)
//! with environment variables taking precedence. Everything is read once at
//! startup; nothing here is consulted again on the hot path.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Model settings for the hosting LLM runtime (an external collaborator)
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub model: String,
    pub api_key: String,
    /// OpenAI-compatible endpoint base, always ending in `/v1`
    pub api_base: String,
}

impl ModelConfig {
    /// Load from environment with file-config fallback
    pub fn load(file: &FileConfig) -> Self {
        let model = env_or("AGENT_MODEL", file.model.as_deref(), "gemini/gemini-2.5-flash-lite");
        let api_key = env_or("AGENT_API_KEY", file.api_key.as_deref(), "sk-4444");
        let api_base = env_or("AGENT_API_BASE", file.api_base.as_deref(), "http://localhost:4444");

        Self {
            model,
            api_key,
            api_base: normalize_api_base(&api_base),
        }
    }
}

/// Optional file-based configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    #[serde(default)]
    pub mcp: McpFileConfig,
}

/// MCP server connection settings from the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct McpFileConfig {
    pub server_url: Option<String>,
    pub api_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load from the default location; missing file yields defaults
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ferret").join("config.toml"))
}

/// Read an env var, falling back to a file value, then a default
pub fn env_or(key: &str, file_value: Option<&str>, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| file_value.map(str::to_string))
        .unwrap_or_else(|| default.to_string())
}

/// Ensure an OpenAI-compatible base URL ends with `/v1`
pub fn normalize_api_base(base: &str) -> String {
    let trimmed = base.trim_end_matches('/');
    if trimmed.ends_with("/v1") {
        trimmed.to_string()
    } else {
        format!("{}/v1", trimmed)
    }
}
