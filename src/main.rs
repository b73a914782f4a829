use std::net::SocketAddr;
use std::sync::Arc;

use crewdeck_api::api;
use crewdeck_api::config::Config;
use crewdeck_api::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Both provider keys are required; refuse to start without them
    let config = Config::from_env().expect("Invalid configuration");

    let state = Arc::new(AppState::new(&config));
    let app = api::router(state, config.cors_origins.as_deref());

    let addr: SocketAddr = format!("{}:{}", config.bind_addr, config.port)
        .parse()
        .expect("Invalid bind address");
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
