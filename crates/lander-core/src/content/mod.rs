//! Campaign content module.
//!
//! Shallow, replace-present-keys merging of content patches.

pub mod model;

use tracing::debug;

use model::{CampaignContent, ContentPatch};

/// Merge a patch into the current content.
///
/// Each field present in `patch` replaces the current value whole; lists
/// are never merged element-wise. Absent fields are left untouched.
pub fn merge_content(content: &mut CampaignContent, patch: ContentPatch) {
    if patch.is_empty() {
        return;
    }
    debug!(fields = ?patch.field_names(), "Merging content patch");

    let ContentPatch {
        headline,
        subheadline,
        button_text,
        button_link,
        benefits,
        social_proof,
    } = patch;

    if let Some(v) = headline {
        content.headline = v;
    }
    if let Some(v) = subheadline {
        content.subheadline = v;
    }
    if let Some(v) = button_text {
        content.button_text = v;
    }
    if let Some(v) = button_link {
        content.button_link = v;
    }
    if let Some(v) = benefits {
        content.benefits = v;
    }
    if let Some(v) = social_proof {
        content.social_proof = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::SocialProof;

    #[test]
    fn test_headline_patch_changes_only_headline() {
        let mut content = CampaignContent::default();
        let before = content.clone();

        merge_content(&mut content, ContentPatch::headline("X"));

        assert_eq!(content.headline, "X");
        assert_eq!(content.subheadline, before.subheadline);
        assert_eq!(content.button_text, before.button_text);
        assert_eq!(content.button_link, before.button_link);
        assert_eq!(content.benefits, before.benefits);
        assert_eq!(content.social_proof, before.social_proof);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut content = CampaignContent::default();
        merge_content(&mut content, ContentPatch::default());
        assert_eq!(content, CampaignContent::default());
    }

    #[test]
    fn test_list_fields_replaced_whole() {
        let mut content = CampaignContent::default();
        let patch = ContentPatch {
            benefits: Some(vec!["Only one".to_string()]),
            social_proof: Some(vec![]),
            ..Default::default()
        };

        merge_content(&mut content, patch);

        assert_eq!(content.benefits, vec!["Only one".to_string()]);
        assert!(content.social_proof.is_empty());
    }

    #[test]
    fn test_repeated_patch_is_idempotent() {
        let patch = ContentPatch {
            subheadline: Some("Sub".to_string()),
            social_proof: Some(vec![SocialProof::new("Great", "Sam")]),
            ..Default::default()
        };

        let mut once = CampaignContent::default();
        merge_content(&mut once, patch.clone());

        let mut twice = CampaignContent::default();
        merge_content(&mut twice, patch.clone());
        merge_content(&mut twice, patch);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_strings_accepted() {
        let mut content = CampaignContent::default();
        let patch = ContentPatch {
            button_link: Some(String::new()),
            ..Default::default()
        };
        merge_content(&mut content, patch);
        assert_eq!(content.button_link, "");
    }

    #[test]
    fn test_patch_deserializes_camel_case_partial() {
        let patch: ContentPatch =
            serde_json::from_str(r#"{"buttonText":"Go","benefits":["a","b"]}"#).unwrap();
        assert_eq!(patch.button_text.as_deref(), Some("Go"));
        assert_eq!(patch.benefits, Some(vec!["a".to_string(), "b".to_string()]));
        assert!(patch.headline.is_none());
        assert_eq!(patch.field_names(), vec!["buttonText", "benefits"]);
    }

    #[test]
    fn test_default_content_serializes_camel_case() {
        let json = serde_json::to_value(CampaignContent::default()).unwrap();
        assert_eq!(json["buttonLink"], "https://facebook.com/ads/manager");
        assert_eq!(json["socialProof"][0]["author"], "Alex Rivers, SaaS Founder");
        assert_eq!(json["benefits"].as_array().unwrap().len(), 3);
    }
}
