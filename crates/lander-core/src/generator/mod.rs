//! Campaign generation.
//!
//! A [`CampaignGenerator`] turns a seed headline into fresh landing page
//! copy. The production implementation is [`gemini::GeminiClient`].

pub mod gemini;
pub mod prompt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::model::{ContentPatch, SocialProof};

/// Copy produced by a generator. Mirrors the campaign content minus the
/// button link, which is never generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCampaign {
    pub headline: String,
    pub subheadline: String,
    pub button_text: String,
    pub benefits: Vec<String>,
    pub social_proof: Vec<SocialProof>,
}

impl From<GeneratedCampaign> for ContentPatch {
    fn from(generated: GeneratedCampaign) -> Self {
        ContentPatch {
            headline: Some(generated.headline),
            subheadline: Some(generated.subheadline),
            button_text: Some(generated.button_text),
            button_link: None,
            benefits: Some(generated.benefits),
            social_proof: Some(generated.social_proof),
        }
    }
}

/// Why a generation attempt failed. Only used for diagnostics: callers of
/// the generation flow see a single "failed" outcome.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("API key not set (checked API_KEY, GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("Request to generation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Generation service error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Generation service returned no text")]
    EmptyResponse,

    #[error("Response is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("Response does not match the campaign schema: {0}")]
    SchemaViolation(String),
}

impl GeneratorError {
    /// Classify a serde error from parsing the model output.
    pub fn from_parse(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => Self::SchemaViolation(err.to_string()),
            _ => Self::MalformedJson(err.to_string()),
        }
    }
}

/// Source of generated campaign copy.
#[async_trait]
pub trait CampaignGenerator: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Produce new copy from the seed headline. One attempt, no retry.
    async fn generate(&self, seed_headline: &str) -> Result<GeneratedCampaign, GeneratorError>;
}

/// Parse trimmed model output into a [`GeneratedCampaign`].
pub fn parse_campaign(text: &str) -> Result<GeneratedCampaign, GeneratorError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GeneratorError::EmptyResponse);
    }
    serde_json::from_str(trimmed).map_err(GeneratorError::from_parse)
}
