//! Profiles: site-scoped rule lists that take precedence over the defaults.

use serde::{Deserialize, Serialize};

use crate::rules::FieldRule;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Regex tested against the page URL when selecting a profile
    /// automatically. A profile can also be selected by explicit index.
    #[serde(rename = "urlMatch", default, skip_serializing_if = "Option::is_none")]
    pub url_match: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldRule>,
}
