//! The fixed set of agents this service dispatches work to.

use std::path::Path;

use super::agent::Agent;
use super::tools::ToolSpec;

/// The three agents built at startup and shared across all requests.
#[derive(Debug, Clone)]
pub struct AgentRoster {
    pub researcher: Agent,
    pub writer: Agent,
    pub designer: Agent,
}

impl AgentRoster {
    /// Build the roster. `content_dir` is where the writer's directory-read
    /// tool looks for existing posts.
    pub fn new(content_dir: &Path) -> Self {
        let researcher = Agent::new(
            "Market Research Analyst",
            "Provide up-to-date market analysis of the AI industry",
            "An expert analyst with a keen eye for market trends.",
            vec![ToolSpec::WebSearch, ToolSpec::WebsiteRag],
        );

        let writer = Agent::new(
            "Content Writer",
            "Craft engaging blog posts about the AI industry",
            "A skilled writer with a passion for technology.",
            vec![
                ToolSpec::DirectoryRead {
                    directory: content_dir.to_path_buf(),
                },
                ToolSpec::FileRead,
            ],
        );

        let designer = Agent::new(
            "Graphic Designer",
            "Create visually appealing and innovative designs for digital and print media",
            "An innovative designer with a strong aesthetic sense.",
            vec![ToolSpec::ImageGeneration, ToolSpec::WebSearch],
        );

        Self {
            researcher,
            writer,
            designer,
        }
    }
}
