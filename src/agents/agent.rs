use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tools::ToolSpec;

/// A named capability bundle the crew execution layer can put to work.
///
/// Agents are built once at startup and reused across requests; nothing in
/// this service mutates them after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: Uuid,
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub tools: Vec<ToolSpec>,
    pub verbose: bool,
}

impl Agent {
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
        tools: Vec<ToolSpec>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
            tools,
            verbose: true,
        }
    }
}
