// HTTP adapter layer: routes, handlers, and the API error type

pub mod errors;
pub mod handlers;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use self::handlers::tasks;

/// Build the application router.
///
/// `cors_origins`: `None` allows any origin without credentials; an
/// explicit origin list enables credentialed requests from exactly those
/// origins (tower-http rejects wildcard-plus-credentials).
pub fn router(state: Arc<AppState>, cors_origins: Option<&[String]>) -> Router {
    let cors = match cors_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Router::new()
        .route("/health-check", get(tasks::health_check))
        .route("/run-tasks", post(tasks::run_tasks))
        .route("/task-status", get(tasks::task_status))
        .route("/task-result/:task", get(tasks::task_result))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
