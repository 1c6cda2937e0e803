//! The Confluence search agent graph
//!
//! Root coordinator delegating to three leaf roles: query analyzer (pure
//! reasoning), document searcher (MCP tools), answer synthesizer (pure
//! reasoning).

use ferret_core::AgentDefinition;

use crate::prompt;
use crate::tools;

fn query_analyzer() -> AgentDefinition {
    AgentDefinition::new(
        "query_analyzer",
        "Analyzes user questions to extract search intent, keywords, and strategy",
        prompt::QUERY_ANALYZER_INSTRUCTION,
    )
}

fn document_searcher() -> AgentDefinition {
    AgentDefinition::new(
        "document_searcher",
        "Searches Confluence documentation using MCP tools and retrieves relevant pages",
        prompt::DOCUMENT_SEARCHER_INSTRUCTION,
    )
    .with_tools(tools::tool_names())
}

fn answer_synthesizer() -> AgentDefinition {
    AgentDefinition::new(
        "answer_synthesizer",
        "Synthesizes accurate answers with proper citations from Confluence documents",
        prompt::ANSWER_SYNTHESIZER_INSTRUCTION,
    )
}

/// Build the root coordinator with its three sub-agents
pub fn root_agent() -> AgentDefinition {
    AgentDefinition::new(
        "confluence_documentation_assistant",
        "Expert assistant for searching and understanding company Confluence \
         documentation. Provides accurate, well-cited answers by coordinating \
         specialized sub-agents. Always cites sources and quotes exact text \
         from documents.",
        prompt::ROOT_COORDINATOR_INSTRUCTION,
    )
    .with_sub_agents(vec![
        query_analyzer(),
        document_searcher(),
        answer_synthesizer(),
    ])
}
