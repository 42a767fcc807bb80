//! Campaign generation trigger.

use axum::{extract::State, http::StatusCode, Json};
use lander_core::session::flow::{self, GenerationOutcome};
use lander_core::session::model::SessionSnapshot;
use lander_core::LanderError;
use serde::Serialize;
use tracing::{info, warn};

use crate::state::{AppState, WebSocketMessage};

#[derive(Serialize)]
pub struct GenerateResponse {
    pub outcome: GenerationOutcome,
    pub state: SessionSnapshot,
}

/// POST /api/generate - run the generation flow on the current headline.
///
/// Responds once the generator settles. A failed generation is still a
/// 200 with `outcome: "failed"`; only an overlapping trigger is an error.
pub async fn generate(
    State(state): State<AppState>,
) -> Result<Json<GenerateResponse>, (StatusCode, String)> {
    let seed = flow::start(&state.session).await.map_err(|e| match e {
        LanderError::GenerationInProgress => {
            warn!("Generate requested while already generating");
            (StatusCode::CONFLICT, e.to_string())
        }
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    })?;

    state.broadcast(WebSocketMessage::GenerationStarted {
        seed_headline: seed.clone(),
    });

    // Settled in its own task: a dropped request must not leave the session busy
    let task_state = state.clone();
    let outcome = tokio::spawn(async move {
        let outcome =
            flow::settle(&task_state.session, task_state.generator.as_ref(), &seed).await;
        task_state.broadcast(WebSocketMessage::GenerationFinished { outcome });
        if outcome.is_applied() {
            let content = task_state.session.read().await.content().clone();
            task_state.broadcast(WebSocketMessage::ContentUpdated { content });
        }
        outcome
    })
    .await
    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let snapshot = state.session.read().await.snapshot();
    info!(?outcome, generator = state.generator.name(), "Generate request settled");

    Ok(Json(GenerateResponse {
        outcome,
        state: snapshot,
    }))
}
