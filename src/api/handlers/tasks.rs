use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::agents::Crew;
use crate::api::errors::ApiError;
use crate::state::AppState;
use crate::status::{TaskKind, TaskState};

/// Liveness payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint
///
/// GET /health-check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Axum is running!",
    })
}

/// Request body for triggering a task
#[derive(Debug, Deserialize)]
pub struct RunTaskRequest {
    pub task: String,
}

/// Response from a completed task run
#[derive(Debug, Serialize)]
pub struct RunTaskResponse {
    pub message: String,
}

/// Trigger a task category and run its crew to completion
///
/// POST /run-tasks
pub async fn run_tasks(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RunTaskRequest>,
) -> Result<Json<RunTaskResponse>, ApiError> {
    let task = TaskKind::parse(&req.task)
        .ok_or_else(|| ApiError::bad_request("Invalid task type"))?;

    state.board.mark_running(task).await;

    let crew = Crew::for_task(task, &state.roster);
    info!(%task, crew_id = %crew.id, agents = crew.agents.len(), "Dispatching crew");

    // A kickoff failure leaves the task at "Running..."; the board records
    // no error state.
    state.runner.kickoff(&crew).await?;

    state.board.mark_completed(task).await;

    Ok(Json(RunTaskResponse {
        message: format!("Task {} executed successfully!", task),
    }))
}

/// Return the status of every task submitted since startup
///
/// GET /task-status
pub async fn task_status(
    State(state): State<Arc<AppState>>,
) -> Json<HashMap<TaskKind, TaskState>> {
    Json(state.board.snapshot().await)
}

/// Response for a single task's status lookup
#[derive(Debug, Serialize)]
pub struct TaskResultResponse {
    pub task: TaskKind,
    pub status: TaskState,
}

/// Look up one task's current status
///
/// GET /task-result/:task
pub async fn task_result(
    State(state): State<Arc<AppState>>,
    Path(task): Path<String>,
) -> Result<Json<TaskResultResponse>, ApiError> {
    let kind =
        TaskKind::parse(&task).ok_or_else(|| ApiError::not_found("Task not found"))?;

    let status = state
        .board
        .get(kind)
        .await
        .ok_or_else(|| ApiError::not_found("Task not found"))?;

    Ok(Json(TaskResultResponse { task: kind, status }))
}
