//! ferret — inspect the demo agents and call MCP tools from the shell

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ferret_core::config::{FileConfig, ModelConfig};
use ferret_core::tools::ToolRegistry;
use ferret_core::AgentDefinition;
use ferret_mcp::{McpClient, McpClientConfig};
use ferret_confluence::ConfluenceConfig;

#[derive(Parser)]
#[command(name = "ferret", version, about = "Demo AI agents with MCP-backed tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print an agent's definition graph as JSON
    Card {
        #[arg(value_enum)]
        agent: AgentKind,
    },
    /// List the tool definitions an agent can call
    Tools {
        #[arg(value_enum)]
        agent: AgentKind,
    },
    /// Call a tool on the Confluence MCP server directly
    Call {
        /// Tool name, e.g. confluence_search
        tool: String,
        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
        /// MCP server URL (overrides config)
        #[arg(long)]
        url: Option<String>,
        /// Bearer token for the MCP server (overrides config)
        #[arg(long)]
        token: Option<String>,
        /// Request timeout in seconds (overrides config)
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Show the effective configuration
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AgentKind {
    Confluence,
    Shopping,
}

fn agent_graph(kind: AgentKind) -> AgentDefinition {
    match kind {
        AgentKind::Confluence => ferret_confluence::root_agent(),
        AgentKind::Shopping => ferret_shopping::root_agent(),
    }
}

fn agent_registry(kind: AgentKind, file: &FileConfig) -> Result<ToolRegistry> {
    let mut registry = ToolRegistry::new();
    match kind {
        AgentKind::Confluence => {
            let config = ConfluenceConfig::load(file);
            let client = Arc::new(McpClient::new(config.mcp_client_config())?);
            ferret_confluence::register_tools(&mut registry, client, &config);
        }
        AgentKind::Shopping => {
            ferret_shopping::register_tools(&mut registry);
        }
    }
    Ok(registry)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let file = FileConfig::load()?;

    match cli.command {
        Command::Card { agent } => {
            let graph = agent_graph(agent);
            println!("{}", serde_json::to_string_pretty(&graph)?);
        }
        Command::Tools { agent } => {
            let graph = agent_graph(agent);
            let registry = agent_registry(agent, &file)?;
            let definitions = registry.filter_tools(&graph.tool_names());
            println!("{}", serde_json::to_string_pretty(&definitions)?);
        }
        Command::Call {
            tool,
            args,
            url,
            token,
            timeout,
        } => {
            let parsed: serde_json::Value =
                serde_json::from_str(&args).context("--args must be a JSON object")?;
            let serde_json::Value::Object(arguments) = parsed else {
                bail!("--args must be a JSON object, got: {args}");
            };

            let confluence = ConfluenceConfig::load(&file);
            let mut config =
                McpClientConfig::new(url.unwrap_or(confluence.mcp_server_url))
                    .with_timeout(timeout.map(Duration::from_secs).unwrap_or(confluence.mcp_timeout));
            if let Some(token) = token.or(confluence.mcp_api_token) {
                config = config.with_token(token);
            }

            info!(tool = %tool, "calling MCP tool");
            let client = McpClient::new(config)?;
            let result = client.call_tool(&tool, arguments).await?;
            client.close();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::Value::Object(result))?
            );
        }
        Command::Config => {
            let model = ModelConfig::load(&file);
            let confluence = ConfluenceConfig::load(&file);
            println!("model: {}", model.model);
            println!("api_base: {}", model.api_base);
            println!("api_key: [REDACTED]");
            println!("mcp_server_url: {}", confluence.mcp_server_url);
            println!(
                "mcp_api_token: {}",
                if confluence.mcp_api_token.is_some() {
                    "[REDACTED]"
                } else {
                    "(none)"
                }
            );
            println!("mcp_timeout_secs: {}", confluence.mcp_timeout.as_secs());
            println!("max_search_results: {}", confluence.max_search_results);
        }
    }

    Ok(())
}
