//! Search agent: runs one planned web search and summarizes the results.

use crate::agents::{Agent, OutputFormat};

const INSTRUCTIONS: &str = "You are a research assistant specializing in fitness topics. \
Given a search term, use web search to retrieve up-to-date context and produce a short \
summary of at most 300 words. Focus on key findings or tips that will be useful to a \
fitness enthusiast.";

/// Build the search agent. Output is a freeform text summary.
pub fn search_agent(model: &str) -> Agent {
    Agent {
        name: "search".to_string(),
        instructions: INSTRUCTIONS.to_string(),
        model: model.to_string(),
        tools: vec!["web_search".to_string()],
        output: OutputFormat::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_agent_uses_web_search() {
        let agent = search_agent("gpt-4o-mini");
        assert!(agent.has_tools());
        assert_eq!(agent.tools, vec!["web_search".to_string()]);
        assert!(matches!(agent.output, OutputFormat::Text));
    }
}
