//! Identity-source toggles for field matching.

use serde::{Deserialize, Serialize};

/// Which attributes of a control contribute to its identity string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchSettings {
    pub match_name: bool,
    pub match_id: bool,
    pub match_class: bool,
    pub match_placeholder: bool,
    pub match_label: bool,
    pub match_aria_label: bool,
    pub match_aria_labelled_by: bool,
    /// Additional attributes to read off the control and match against.
    pub custom_attributes: Vec<String>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            match_name: true,
            match_id: true,
            match_class: true,
            match_placeholder: true,
            match_label: false,
            match_aria_label: false,
            match_aria_labelled_by: false,
            custom_attributes: Vec::new(),
        }
    }
}
