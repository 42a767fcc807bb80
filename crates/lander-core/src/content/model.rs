//! Campaign content domain model.
//!
//! The editable marketing copy of a landing page, and the partial
//! record used to update it.

use serde::{Deserialize, Serialize};

/// Editable marketing copy shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignContent {
    pub headline: String,
    pub subheadline: String,
    pub button_text: String,
    pub button_link: String,
    pub benefits: Vec<String>,
    pub social_proof: Vec<SocialProof>,
}

/// A testimonial quote with its attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProof {
    pub quote: String,
    pub author: String,
}

impl SocialProof {
    pub fn new(quote: &str, author: &str) -> Self {
        Self {
            quote: quote.to_string(),
            author: author.to_string(),
        }
    }
}

impl Default for CampaignContent {
    fn default() -> Self {
        Self {
            headline: "Stop Wasting Money on Facebook Ads".to_string(),
            subheadline: "Unlock the secret to high-converting campaigns with our proven AI-driven framework.".to_string(),
            button_text: "Launch Your Ad Campaign".to_string(),
            button_link: "https://facebook.com/ads/manager".to_string(),
            benefits: vec![
                "Reduce Cost Per Acquisition by 40%".to_string(),
                "Scalable targeting strategies".to_string(),
                "Auto-optimized copy that converts".to_string(),
            ],
            social_proof: vec![SocialProof::new(
                "Lander Pro tripled our ROI in just 2 weeks.",
                "Alex Rivers, SaaS Founder",
            )],
        }
    }
}

/// Partial content update. Present fields replace the current value whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_proof: Option<Vec<SocialProof>>,
}

impl ContentPatch {
    /// Patch that replaces only the headline.
    pub fn headline(headline: impl Into<String>) -> Self {
        Self {
            headline: Some(headline.into()),
            ..Default::default()
        }
    }

    /// True when the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        self.headline.is_none()
            && self.subheadline.is_none()
            && self.button_text.is_none()
            && self.button_link.is_none()
            && self.benefits.is_none()
            && self.social_proof.is_none()
    }

    /// Names of the fields carried by this patch, in wire form.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.headline.is_some() {
            names.push("headline");
        }
        if self.subheadline.is_some() {
            names.push("subheadline");
        }
        if self.button_text.is_some() {
            names.push("buttonText");
        }
        if self.button_link.is_some() {
            names.push("buttonLink");
        }
        if self.benefits.is_some() {
            names.push("benefits");
        }
        if self.social_proof.is_some() {
            names.push("socialProof");
        }
        names
    }
}
