//! Application state.

use lander_core::content::model::CampaignContent;
use lander_core::design::model::DesignConfig;
use lander_core::generator::CampaignGenerator;
use lander_core::session::flow::GenerationOutcome;
use lander_core::session::model::{SessionSnapshot, ViewMode};
use lander_core::session::{Session, SharedSession};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

/// WebSocket message types.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(tag = "type", content = "data")]
pub enum WebSocketMessage {
    /// Full state, sent once when a client connects.
    Snapshot { state: SessionSnapshot },
    ContentUpdated { content: CampaignContent },
    DesignUpdated { design: DesignConfig },
    ViewModeChanged { view_mode: ViewMode },
    GenerationStarted { seed_headline: String },
    GenerationFinished { outcome: GenerationOutcome },
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: SharedSession,
    pub generator: Arc<dyn CampaignGenerator>,
    pub tx: broadcast::Sender<WebSocketMessage>,
}

impl AppState {
    /// State with a fresh default session.
    pub fn new(generator: Arc<dyn CampaignGenerator>) -> Self {
        Self::with_session(Session::new(), generator)
    }

    pub fn with_session(session: Session, generator: Arc<dyn CampaignGenerator>) -> Self {
        let (tx, _rx) = broadcast::channel(100);
        Self {
            session: session.into_shared(),
            generator,
            tx,
        }
    }

    /// Broadcast a message to all WebSocket clients.
    pub fn broadcast(&self, msg: WebSocketMessage) {
        let _ = self.tx.send(msg);
    }
}
