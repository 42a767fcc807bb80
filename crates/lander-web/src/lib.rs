//! Lander Web Server
//!
//! Axum-based REST API and WebSocket feed over a single editing session.

pub mod routes;
pub mod state;
pub mod websocket;

use axum::{
    routing::{get, post, put},
    Router,
};
use lander_core::generator::CampaignGenerator;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/state", get(routes::session::get_state))
        .route("/view-mode", put(routes::session::set_view_mode))
        .route("/view-mode/toggle", post(routes::session::toggle_view_mode))
        .route(
            "/content",
            get(routes::content::get_content).patch(routes::content::update_content),
        )
        .route(
            "/design",
            get(routes::design::get_design).patch(routes::design::update_design),
        )
        .route("/generate", post(routes::generate::generate))
        .with_state(state.clone());

    Router::new()
        .nest("/api", api_routes)
        .route("/ws", get(websocket::ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(
    generator: Arc<dyn CampaignGenerator>,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let state = AppState::new(generator);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
