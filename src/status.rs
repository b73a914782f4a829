//! Task identifiers and the shared execution status board.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Task categories a caller can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Research,
    Write,
    Design,
    All,
}

impl TaskKind {
    /// Parse a caller-supplied identifier, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "research" => Some(TaskKind::Research),
            "write" => Some(TaskKind::Write),
            "design" => Some(TaskKind::Design),
            "all" => Some(TaskKind::All),
            _ => None,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Research => write!(f, "research"),
            TaskKind::Write => write!(f, "write"),
            TaskKind::Design => write!(f, "design"),
            TaskKind::All => write!(f, "all"),
        }
    }
}

/// Execution status of a submitted task.
///
/// Absent from the board means the task was never submitted. There is no
/// failure state: a crew that errors out leaves its task at `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskState {
    #[serde(rename = "Running...")]
    Running,
    #[serde(rename = "Completed")]
    Completed,
}

/// Shared task → status map, owned by [`crate::state::AppState`] and handed
/// to whoever needs to observe it.
///
/// Cloning is cheap and clones observe the same underlying map. The lock
/// serializes individual reads and writes; concurrent submissions of the
/// same task still last-write-win on the entry.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    inner: Arc<RwLock<HashMap<TaskKind, TaskState>>>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a task has been submitted and is executing.
    pub async fn mark_running(&self, task: TaskKind) {
        self.inner.write().await.insert(task, TaskState::Running);
    }

    /// Record that a task's crew finished.
    pub async fn mark_completed(&self, task: TaskKind) {
        self.inner.write().await.insert(task, TaskState::Completed);
    }

    /// Current status of one task, if it was ever submitted.
    pub async fn get(&self, task: TaskKind) -> Option<TaskState> {
        self.inner.read().await.get(&task).copied()
    }

    /// Copy of the whole board.
    pub async fn snapshot(&self) -> HashMap<TaskKind, TaskState> {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(TaskKind::parse("research"), Some(TaskKind::Research));
        assert_eq!(TaskKind::parse("WRITE"), Some(TaskKind::Write));
        assert_eq!(TaskKind::parse("Design"), Some(TaskKind::Design));
        assert_eq!(TaskKind::parse("aLl"), Some(TaskKind::All));
        assert_eq!(TaskKind::parse("bogus"), None);
        assert_eq!(TaskKind::parse(""), None);
    }

    #[test]
    fn test_display_matches_wire_names() {
        assert_eq!(TaskKind::Research.to_string(), "research");
        assert_eq!(TaskKind::All.to_string(), "all");
    }

    #[test]
    fn test_state_serializes_to_wire_strings() {
        assert_eq!(
            serde_json::to_string(&TaskState::Running).unwrap(),
            "\"Running...\""
        );
        assert_eq!(
            serde_json::to_string(&TaskState::Completed).unwrap(),
            "\"Completed\""
        );
    }

    #[test]
    fn test_board_serializes_as_json_object() {
        let mut map = HashMap::new();
        map.insert(TaskKind::Design, TaskState::Completed);

        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(value, serde_json::json!({"design": "Completed"}));
    }

    #[tokio::test]
    async fn test_board_lifecycle() {
        let board = TaskBoard::new();
        assert_eq!(board.get(TaskKind::Write).await, None);
        assert!(board.snapshot().await.is_empty());

        board.mark_running(TaskKind::Write).await;
        assert_eq!(board.get(TaskKind::Write).await, Some(TaskState::Running));

        board.mark_completed(TaskKind::Write).await;
        assert_eq!(
            board.get(TaskKind::Write).await,
            Some(TaskState::Completed)
        );

        // Untouched tasks stay absent.
        assert_eq!(board.get(TaskKind::Research).await, None);
        assert_eq!(board.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn test_board_clones_share_state() {
        let board = TaskBoard::new();
        let observer = board.clone();

        board.mark_running(TaskKind::All).await;
        assert_eq!(observer.get(TaskKind::All).await, Some(TaskState::Running));
    }
}
