//! Content route handlers.

use axum::{extract::State, Json};
use lander_core::content::model::{CampaignContent, ContentPatch};

use crate::state::{AppState, WebSocketMessage};

pub async fn get_content(State(state): State<AppState>) -> Json<CampaignContent> {
    Json(state.session.read().await.content().clone())
}

/// PATCH /api/content - replace each field present in the body.
pub async fn update_content(
    State(state): State<AppState>,
    Json(patch): Json<ContentPatch>,
) -> Json<CampaignContent> {
    let changed = !patch.is_empty();
    let content = {
        let mut session = state.session.write().await;
        session.update_content(patch);
        session.content().clone()
    };

    if changed {
        state.broadcast(WebSocketMessage::ContentUpdated {
            content: content.clone(),
        });
    }

    Json(content)
}
