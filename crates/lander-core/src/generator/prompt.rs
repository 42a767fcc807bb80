//! Prompt and response schema for campaign generation.

use serde_json::{json, Value};

/// Number of benefit bullets requested from the model. Advisory only: the
/// schema does not constrain the array length and responses are not
/// rejected for a different count.
pub const EXPECTED_BENEFITS: usize = 3;

/// Build the copywriting instruction for a seed headline.
pub fn build_prompt(seed_headline: &str) -> String {
    format!(
        "You are an expert Facebook Ads direct response copywriter.\n\
         Based on the core message: \"{}\", generate highly converting landing page copy.\n\
         Focus on psychology, scarcity, and clear value propositions.",
        seed_headline
    )
}

/// Field order shared by `required` and `propertyOrdering`.
pub const CAMPAIGN_FIELDS: [&str; 5] = [
    "headline",
    "subheadline",
    "buttonText",
    "benefits",
    "socialProof",
];

/// Response schema constraining the model output.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "headline": {
                "type": "STRING",
                "description": "A catchy, urgent headline."
            },
            "subheadline": {
                "type": "STRING",
                "description": "A supportive subheadline explaining the benefit."
            },
            "buttonText": {
                "type": "STRING",
                "description": "Action-oriented CTA button text."
            },
            "benefits": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": format!("{} compelling benefit bullet points.", EXPECTED_BENEFITS)
            },
            "socialProof": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "quote": { "type": "STRING" },
                        "author": { "type": "STRING" }
                    },
                    "required": ["quote", "author"]
                }
            }
        },
        "required": CAMPAIGN_FIELDS,
        "propertyOrdering": CAMPAIGN_FIELDS
    })
}
