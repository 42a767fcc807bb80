//! Design configuration module.

pub mod model;

use tracing::debug;

use model::{DesignConfig, DesignPatch};

/// Merge a patch into the current design, replacing each present color.
pub fn merge_design(design: &mut DesignConfig, patch: DesignPatch) {
    if patch.is_empty() {
        return;
    }
    debug!(?patch, "Merging design patch");

    if let Some(v) = patch.bg_color {
        design.bg_color = v;
    }
    if let Some(v) = patch.button_color {
        design.button_color = v;
    }
    if let Some(v) = patch.text_color {
        design.text_color = v;
    }
    if let Some(v) = patch.button_text_color {
        design.button_text_color = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bg_color_patch_changes_only_bg_color() {
        let mut design = DesignConfig::default();
        let patch = DesignPatch {
            bg_color: Some("#000000".to_string()),
            ..Default::default()
        };

        merge_design(&mut design, patch);

        assert_eq!(
            design,
            DesignConfig {
                bg_color: "#000000".to_string(),
                ..DesignConfig::default()
            }
        );
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut design = DesignConfig::default();
        merge_design(&mut design, DesignPatch::default());
        assert_eq!(design, DesignConfig::default());
    }

    #[test]
    fn test_malformed_color_accepted() {
        let mut design = DesignConfig::default();
        let patch: DesignPatch = serde_json::from_str(r#"{"textColor":"not-a-color"}"#).unwrap();
        merge_design(&mut design, patch);
        assert_eq!(design.text_color, "not-a-color");
        assert_eq!(design.button_text_color, "#ffffff");
    }
}
