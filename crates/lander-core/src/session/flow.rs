//! Generation flow: set busy, call the generator, merge or discard, clear busy.
//!
//! The session lock is never held across the generator call, so readers
//! observe `Generating` while the request is outstanding.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::SharedSession;
use crate::error::LanderResult;
use crate::generator::CampaignGenerator;

/// How a generation settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationOutcome {
    /// Generated copy replaced the content fields.
    Applied,
    /// The generator failed; content is unchanged.
    Failed,
}

impl GenerationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, GenerationOutcome::Applied)
    }
}

/// Move the session to `Generating` and return the seed headline.
///
/// Errors with `GenerationInProgress` if another generation is running.
pub async fn start(session: &SharedSession) -> LanderResult<String> {
    session.write().await.begin_generation()
}

/// Run the generator for a started session and settle it.
///
/// Generator errors are logged and reduced to [`GenerationOutcome::Failed`];
/// the busy flag is cleared on both paths.
pub async fn settle(
    session: &SharedSession,
    generator: &dyn CampaignGenerator,
    seed_headline: &str,
) -> GenerationOutcome {
    let result = match generator.generate(seed_headline).await {
        Ok(generated) => Some(generated),
        Err(e) => {
            error!(generator = generator.name(), error = %e, "Campaign generation failed");
            None
        }
    };

    if session.write().await.finish_generation(result) {
        GenerationOutcome::Applied
    } else {
        GenerationOutcome::Failed
    }
}

/// Full generation flow seeded with the current headline.
pub async fn run_generation(
    session: &SharedSession,
    generator: &dyn CampaignGenerator,
) -> LanderResult<GenerationOutcome> {
    let seed = start(session).await?;
    let outcome = settle(session, generator, &seed).await;
    info!(?outcome, "Generation settled");
    Ok(outcome)
}
