use thiserror::Error;

/// Errors surfaced by the crew execution layer.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Crew execution failed: {0}")]
    ExecutionFailed(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
