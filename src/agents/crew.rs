use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::agent::Agent;
use super::roster::AgentRoster;
use crate::status::TaskKind;

/// A concrete work item a crew could be asked to perform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    pub description: String,
    pub expected_output: String,
}

/// An ephemeral grouping of agents assembled for one request and discarded
/// after kickoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crew {
    pub id: Uuid,
    pub agents: Vec<Agent>,
    pub tasks: Vec<TaskSpec>,
    pub verbose: bool,
    pub planning: bool,
}

impl Crew {
    /// Assemble the crew for a task category.
    ///
    /// No tasks are queued up front; the execution layer works from the
    /// agent lineup and the planning flag.
    pub fn for_task(kind: TaskKind, roster: &AgentRoster) -> Self {
        let agents = match kind {
            TaskKind::Research => vec![roster.researcher.clone()],
            TaskKind::Write => vec![roster.writer.clone()],
            TaskKind::Design => vec![roster.designer.clone()],
            TaskKind::All => vec![
                roster.researcher.clone(),
                roster.writer.clone(),
                roster.designer.clone(),
            ],
        };

        Self {
            id: Uuid::new_v4(),
            agents,
            tasks: Vec::new(),
            verbose: true,
            planning: true,
        }
    }
}

/// Summary returned by the execution layer after a kickoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewReport {
    pub crew_id: Uuid,
    pub agent_count: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}
