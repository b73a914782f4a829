//! Shared application state handed to the router.

use std::sync::Arc;

use crate::agents::{AgentRoster, CrewRunner, SimulatedCrewRunner};
use crate::config::Config;
use crate::status::TaskBoard;

/// Everything a request handler needs: the fixed agent roster, the task
/// status board, and the crew execution seam.
pub struct AppState {
    pub roster: AgentRoster,
    pub board: TaskBoard,
    pub runner: Arc<dyn CrewRunner>,
}

impl AppState {
    /// State with the default simulated runner.
    pub fn new(config: &Config) -> Self {
        Self::with_runner(config, Arc::new(SimulatedCrewRunner::new()))
    }

    /// State with a custom runner. Tests inject zero-delay or failing
    /// runners here; a real orchestrator binding plugs in the same way.
    pub fn with_runner(config: &Config, runner: Arc<dyn CrewRunner>) -> Self {
        Self {
            roster: AgentRoster::new(&config.content_dir),
            board: TaskBoard::new(),
            runner,
        }
    }
}
