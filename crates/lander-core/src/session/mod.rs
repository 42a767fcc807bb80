//! Editing session.
//!
//! One [`Session`] per editor holds the campaign content, design, view
//! mode and the generation busy flag. All mutation goes through its
//! methods; content and design are only ever changed by whole-field
//! replacement.

pub mod flow;
pub mod model;

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::content::{self, model::{CampaignContent, ContentPatch}};
use crate::design::{self, model::{DesignConfig, DesignPatch}};
use crate::error::{LanderError, LanderResult};
use crate::generator::GeneratedCampaign;
use model::{GenerationState, SessionSnapshot, ViewMode};

/// Session handle shared between request handlers.
pub type SharedSession = Arc<RwLock<Session>>;

/// Editor state container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    content: CampaignContent,
    design: DesignConfig,
    generation: GenerationState,
    view_mode: ViewMode,
}

impl Session {
    /// New session with the default content and design.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap this session in a shared handle.
    pub fn into_shared(self) -> SharedSession {
        Arc::new(RwLock::new(self))
    }

    pub fn content(&self) -> &CampaignContent {
        &self.content
    }

    pub fn design(&self) -> &DesignConfig {
        &self.design
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn generation_state(&self) -> GenerationState {
        self.generation
    }

    pub fn is_generating(&self) -> bool {
        self.generation == GenerationState::Generating
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            content: self.content.clone(),
            design: self.design.clone(),
            is_generating: self.is_generating(),
            view_mode: self.view_mode,
        }
    }

    /// Replace each content field present in `patch`.
    pub fn update_content(&mut self, patch: ContentPatch) {
        content::merge_content(&mut self.content, patch);
    }

    /// Replace each design color present in `patch`.
    pub fn update_design(&mut self, patch: DesignPatch) {
        design::merge_design(&mut self.design, patch);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        debug!(from = %self.view_mode, to = %mode, "View mode changed");
        self.view_mode = mode;
    }

    /// Switch between desktop and mobile, returning the new mode.
    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.set_view_mode(self.view_mode.toggled());
        self.view_mode
    }

    /// Enter `Generating` and return the seed headline.
    ///
    /// Fails without touching state if a generation is already running.
    pub fn begin_generation(&mut self) -> LanderResult<String> {
        if self.is_generating() {
            return Err(LanderError::GenerationInProgress);
        }
        self.generation = GenerationState::Generating;
        info!(seed = %self.content.headline, "Generation started");
        Ok(self.content.headline.clone())
    }

    /// Leave `Generating`, merging the generated copy if there is any.
    ///
    /// Returns whether content was replaced.
    pub fn finish_generation(&mut self, result: Option<GeneratedCampaign>) -> bool {
        self.generation = GenerationState::Idle;
        match result {
            Some(generated) => {
                self.update_content(generated.into());
                info!(headline = %self.content.headline, "Generated content applied");
                true
            }
            None => {
                info!("Generation finished without changes");
                false
            }
        }
    }
}
