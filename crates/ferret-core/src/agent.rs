//! Declarative agent definitions
//!
//! An agent is an instruction prompt plus the tools it may call and the
//! sub-agents it may delegate to. The graph is static configuration: the
//! hosting LLM runtime owns execution, tool routing, and delegation.

use serde::Serialize;

/// One node in an agent graph
#[derive(Debug, Clone, Serialize)]
pub struct AgentDefinition {
    pub name: String,
    pub description: String,
    pub instruction: String,
    /// Names of tools in the hosting registry this agent may call
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_agents: Vec<AgentDefinition>,
}

impl AgentDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            instruction: instruction.into(),
            tools: Vec::new(),
            sub_agents: Vec::new(),
        }
    }

    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_sub_agents(mut self, sub_agents: Vec<AgentDefinition>) -> Self {
        self.sub_agents = sub_agents;
        self
    }

    /// Find an agent by name in this graph (including the root itself)
    pub fn find(&self, name: &str) -> Option<&AgentDefinition> {
        if self.name == name {
            return Some(self);
        }
        self.sub_agents.iter().find_map(|a| a.find(name))
    }

    /// All tool names reachable from this agent, in definition order, deduplicated
    pub fn tool_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_tool_names(&mut names);
        names
    }

    fn collect_tool_names(&self, out: &mut Vec<String>) {
        for tool in &self.tools {
            if !out.contains(tool) {
                out.push(tool.clone());
            }
        }
        for sub in &self.sub_agents {
            sub.collect_tool_names(out);
        }
    }
}
