//! Session state model.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::model::CampaignContent;
use crate::design::model::DesignConfig;

/// Preview viewport selected by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Desktop,
    Mobile,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Desktop => ViewMode::Mobile,
            ViewMode::Mobile => ViewMode::Desktop,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Desktop => "desktop",
            ViewMode::Mobile => "mobile",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Busy state around a generation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationState {
    #[default]
    Idle,
    Generating,
}

/// Serializable copy of the whole session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub content: CampaignContent,
    pub design: DesignConfig,
    pub is_generating: bool,
    pub view_mode: ViewMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_toggled() {
        assert_eq!(ViewMode::Desktop.toggled(), ViewMode::Mobile);
        assert_eq!(ViewMode::Mobile.toggled(), ViewMode::Desktop);
    }

    #[test]
    fn test_view_mode_wire_form() {
        assert_eq!(serde_json::to_string(&ViewMode::Mobile).unwrap(), "\"mobile\"");
        assert_eq!(ViewMode::default().to_string(), "desktop");
    }
}
