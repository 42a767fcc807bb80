//! Design route handlers.

use axum::{extract::State, Json};
use lander_core::design::model::{DesignConfig, DesignPatch};

use crate::state::{AppState, WebSocketMessage};

pub async fn get_design(State(state): State<AppState>) -> Json<DesignConfig> {
    Json(state.session.read().await.design().clone())
}

pub async fn update_design(
    State(state): State<AppState>,
    Json(patch): Json<DesignPatch>,
) -> Json<DesignConfig> {
    let changed = !patch.is_empty();
    let design = {
        let mut session = state.session.write().await;
        session.update_design(patch);
        session.design().clone()
    };

    if changed {
        state.broadcast(WebSocketMessage::DesignUpdated {
            design: design.clone(),
        });
    }

    Json(design)
}
