//! Descriptors for the externally supplied tools agents can use.
//!
//! The tools themselves (web search, website RAG, image generation, file
//! and directory reading) live behind the crew execution layer; this crate
//! only names them and carries their configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An opaque tool capability handed to an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolSpec {
    /// Read files under a fixed directory.
    DirectoryRead { directory: PathBuf },
    /// Read a single file.
    FileRead,
    /// Web search through the configured search provider.
    WebSearch,
    /// Retrieval-augmented search over a website's content.
    WebsiteRag,
    /// Image generation through the configured model provider.
    ImageGeneration,
}

impl ToolSpec {
    /// Tool name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ToolSpec::DirectoryRead { .. } => "directory_read",
            ToolSpec::FileRead => "file_read",
            ToolSpec::WebSearch => "web_search",
            ToolSpec::WebsiteRag => "website_rag",
            ToolSpec::ImageGeneration => "image_generation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_spec_serialization() {
        let tool = ToolSpec::DirectoryRead {
            directory: PathBuf::from("./blog-posts"),
        };
        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(value["kind"], "directory_read");
        assert_eq!(value["directory"], "./blog-posts");

        let value = serde_json::to_value(ToolSpec::WebSearch).unwrap();
        assert_eq!(value["kind"], "web_search");
    }

    #[test]
    fn test_tool_names() {
        assert_eq!(ToolSpec::FileRead.name(), "file_read");
        assert_eq!(ToolSpec::ImageGeneration.name(), "image_generation");
    }
}
