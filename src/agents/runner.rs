//! The seam to the external crew-orchestration layer.

use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info};

use super::crew::{Crew, CrewReport};
use super::errors::AgentResult;

/// Runs a crew to completion.
///
/// The orchestrator behind this trait is a black box: hand it a crew, get a
/// report or an error back. There is no timeout or cancellation; a kickoff
/// holds its caller until it returns.
#[async_trait]
pub trait CrewRunner: Send + Sync {
    async fn kickoff(&self, crew: &Crew) -> AgentResult<CrewReport>;
}

/// Default runner standing in for the real orchestrator: a fixed delay in
/// place of actual execution time.
#[derive(Debug, Clone)]
pub struct SimulatedCrewRunner {
    delay: Duration,
}

impl SimulatedCrewRunner {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(3),
        }
    }

    /// Override the simulated execution time. Tests use zero.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedCrewRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrewRunner for SimulatedCrewRunner {
    async fn kickoff(&self, crew: &Crew) -> AgentResult<CrewReport> {
        let started_at = Utc::now();
        info!(crew_id = %crew.id, agents = crew.agents.len(), "Kicking off crew");

        tokio::time::sleep(self.delay).await;

        if crew.tasks.is_empty() {
            debug!(crew_id = %crew.id, "No tasks queued; kickoff ran the agent lineup only");
        }

        Ok(CrewReport {
            crew_id: crew.id,
            agent_count: crew.agents.len(),
            started_at,
            finished_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::roster::AgentRoster;
    use crate::status::TaskKind;
    use std::path::Path;

    #[tokio::test]
    async fn test_simulated_kickoff_reports_crew() {
        let roster = AgentRoster::new(Path::new("./blog-posts"));
        let crew = Crew::for_task(TaskKind::All, &roster);
        let runner = SimulatedCrewRunner::with_delay(Duration::ZERO);

        let report = runner.kickoff(&crew).await.unwrap();

        assert_eq!(report.crew_id, crew.id);
        assert_eq!(report.agent_count, 3);
        assert!(report.finished_at >= report.started_at);
    }
}
