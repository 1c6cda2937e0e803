//! The personalized shopping agent definition

use ferret_core::AgentDefinition;

use crate::prompt;
use crate::tools;

/// Build the shopping agent: a single root with the two webshop tools
pub fn root_agent() -> AgentDefinition {
    AgentDefinition::new(
        "personalized_shopping_agent",
        "A personal shopping assistant that searches a webshop, inspects \
         product pages, and recommends items matching the user's preferences.",
        prompt::SHOPPING_AGENT_INSTRUCTION,
    )
    .with_tools(tools::tool_names())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_shape() {
        let agent = root_agent();
        assert_eq!(agent.name, "personalized_shopping_agent");
        assert!(agent.sub_agents.is_empty());
        assert_eq!(agent.tools, vec!["search".to_string(), "click".to_string()]);
    }
}
