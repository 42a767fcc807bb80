//! Session snapshot and view mode handlers.

use axum::{extract::State, Json};
use lander_core::session::model::{SessionSnapshot, ViewMode};
use serde::Deserialize;

use crate::state::{AppState, WebSocketMessage};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetViewModeRequest {
    pub view_mode: ViewMode,
}

pub async fn get_state(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.read().await.snapshot())
}

pub async fn set_view_mode(
    State(state): State<AppState>,
    Json(req): Json<SetViewModeRequest>,
) -> Json<SessionSnapshot> {
    let snapshot = {
        let mut session = state.session.write().await;
        session.set_view_mode(req.view_mode);
        session.snapshot()
    };

    state.broadcast(WebSocketMessage::ViewModeChanged {
        view_mode: req.view_mode,
    });

    Json(snapshot)
}

/// POST /api/view-mode/toggle - switch between desktop and mobile.
pub async fn toggle_view_mode(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let (view_mode, snapshot) = {
        let mut session = state.session.write().await;
        let mode = session.toggle_view_mode();
        (mode, session.snapshot())
    };

    state.broadcast(WebSocketMessage::ViewModeChanged { view_mode });

    Json(snapshot)
}
