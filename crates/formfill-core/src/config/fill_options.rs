//! Top-level fill options with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults::built_in_rules;
use super::{MatchSettings, PasswordMode, PasswordSettings, Profile};
use crate::errors::ConfigError;
use crate::rules::FieldRule;

/// Everything the engine needs for one fill pass.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FORMFILL_*`)
/// 2. Project config (`formfill.toml` in the project root)
/// 3. User config (`~/.formfill/config.toml`)
/// 4. Compiled defaults
///
/// Hosts that receive the options as a stored JSON blob use
/// [`FillOptions::from_json`]; missing keys fall back to the compiled
/// defaults the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FillOptions {
    pub version: u32,
    /// Checkbox identities that must always end up checked.
    pub agree_terms_fields: Vec<String>,
    /// Identities that repeat the previous value of their kind.
    pub confirm_fields: Vec<String>,
    /// Fallback maximum length for generated free text.
    pub default_max_length: u32,
    #[serde(rename = "fieldMatchSettings")]
    pub field_match: MatchSettings,
    /// Default rule list; profile rules are scanned first.
    pub fields: Vec<FieldRule>,
    /// Identities that are never filled.
    pub ignored_fields: Vec<String>,
    pub ignore_fields_with_content: bool,
    pub ignore_hidden_fields: bool,
    #[serde(rename = "passwordSettings")]
    pub password: PasswordSettings,
    pub profiles: Vec<Profile>,
    #[serde(rename = "triggerClickEvents")]
    pub trigger_events: bool,
    pub upload_files: bool,
    /// URL patterns on which filling is disabled entirely.
    pub url_matches_to_block: Vec<String>,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            version: 1,
            agree_terms_fields: strings(&["agree", "terms", "conditions"]),
            confirm_fields: strings(&["confirm", "reenter", "retype", "repeat", "secondary"]),
            default_max_length: 20,
            field_match: MatchSettings::default(),
            fields: built_in_rules(),
            ignored_fields: strings(&["captcha", "hipinputtext"]),
            ignore_fields_with_content: true,
            ignore_hidden_fields: true,
            password: PasswordSettings::default(),
            profiles: Vec::new(),
            trigger_events: true,
            upload_files: true,
            url_matches_to_block: strings(&["trello"]),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Partial options as they appear in a TOML layer. `None` means "keep the
/// lower layer's value"; unknown keys are ignored (forward-compatible).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct OptionsPatch {
    agree_terms_fields: Option<Vec<String>>,
    confirm_fields: Option<Vec<String>>,
    default_max_length: Option<u32>,
    #[serde(rename = "fieldMatchSettings")]
    field_match: Option<MatchSettings>,
    fields: Option<Vec<FieldRule>>,
    ignored_fields: Option<Vec<String>>,
    ignore_fields_with_content: Option<bool>,
    ignore_hidden_fields: Option<bool>,
    #[serde(rename = "passwordSettings")]
    password: Option<PasswordSettings>,
    profiles: Option<Vec<Profile>>,
    #[serde(rename = "triggerClickEvents")]
    trigger_events: Option<bool>,
    upload_files: Option<bool>,
    url_matches_to_block: Option<Vec<String>>,
}

impl FillOptions {
    /// Load options with layered resolution (env > project > user >
    /// compiled defaults).
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut options = Self::default();

        // Lowest priority file layer: user config. An unreadable file is a
        // warning, not fatal; invalid TOML is.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut options, &user_config_path) {
                    Ok(()) => {}
                    Err(error @ ConfigError::ParseError { .. }) => return Err(error),
                    Err(error) => {
                        tracing::warn!(%error, "skipping unreadable user config");
                    }
                }
            }
        }

        // Project config.
        let project_config_path = root.join("formfill.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut options, &project_config_path)?;
        }

        // Highest priority: environment variables.
        Self::apply_env_overrides(&mut options);

        Self::validate(&options)?;
        Ok(options)
    }

    /// Parse the stored options blob the boundary hands over. Missing keys
    /// take the compiled defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
                path: "<json>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&options)?;
        Ok(options)
    }

    /// Parse options from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the options back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the resolved options.
    pub fn validate(options: &FillOptions) -> Result<(), ConfigError> {
        if options.default_max_length == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "defaultMaxLength".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if options.password.mode == PasswordMode::Defined
            && options.password.password.is_empty()
        {
            return Err(ConfigError::ValidationFailed {
                field: "passwordSettings.password".to_string(),
                message: "must not be empty in defined mode".to_string(),
            });
        }
        for rule in options
            .fields
            .iter()
            .chain(options.profiles.iter().flat_map(|p| p.fields.iter()))
        {
            if rule.match_patterns.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("fields[{}].match", rule.name),
                    message: "must contain at least one pattern".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.formfill/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        home_dir().map(|h| h.join(".formfill").join("config.toml"))
    }

    /// Merge a TOML file into the existing options.
    fn merge_toml_file(options: &mut FillOptions, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let patch: OptionsPatch =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(options, patch);
        Ok(())
    }

    /// Merge `patch` into `base`; `Some` values win.
    fn merge(base: &mut FillOptions, patch: OptionsPatch) {
        if let Some(v) = patch.agree_terms_fields {
            base.agree_terms_fields = v;
        }
        if let Some(v) = patch.confirm_fields {
            base.confirm_fields = v;
        }
        if let Some(v) = patch.default_max_length {
            base.default_max_length = v;
        }
        if let Some(v) = patch.field_match {
            base.field_match = v;
        }
        if let Some(v) = patch.fields {
            base.fields = v;
        }
        if let Some(v) = patch.ignored_fields {
            base.ignored_fields = v;
        }
        if let Some(v) = patch.ignore_fields_with_content {
            base.ignore_fields_with_content = v;
        }
        if let Some(v) = patch.ignore_hidden_fields {
            base.ignore_hidden_fields = v;
        }
        if let Some(v) = patch.password {
            base.password = v;
        }
        if let Some(v) = patch.profiles {
            base.profiles = v;
        }
        if let Some(v) = patch.trigger_events {
            base.trigger_events = v;
        }
        if let Some(v) = patch.upload_files {
            base.upload_files = v;
        }
        if let Some(v) = patch.url_matches_to_block {
            base.url_matches_to_block = v;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `FORMFILL_DEFAULT_MAX_LENGTH`, `FORMFILL_PASSWORD_MODE`, etc.
    fn apply_env_overrides(options: &mut FillOptions) {
        if let Ok(val) = std::env::var("FORMFILL_DEFAULT_MAX_LENGTH") {
            if let Ok(v) = val.parse::<u32>() {
                options.default_max_length = v;
            }
        }
        if let Ok(val) = std::env::var("FORMFILL_TRIGGER_EVENTS") {
            if let Ok(v) = val.parse::<bool>() {
                options.trigger_events = v;
            }
        }
        if let Ok(val) = std::env::var("FORMFILL_UPLOAD_FILES") {
            if let Ok(v) = val.parse::<bool>() {
                options.upload_files = v;
            }
        }
        if let Ok(val) = std::env::var("FORMFILL_IGNORE_HIDDEN_FIELDS") {
            if let Ok(v) = val.parse::<bool>() {
                options.ignore_hidden_fields = v;
            }
        }
        if let Ok(val) = std::env::var("FORMFILL_IGNORE_FILLED_FIELDS") {
            if let Ok(v) = val.parse::<bool>() {
                options.ignore_fields_with_content = v;
            }
        }
        if let Ok(val) = std::env::var("FORMFILL_PASSWORD_MODE") {
            match val.as_str() {
                "defined" => options.password.mode = PasswordMode::Defined,
                "random" => options.password.mode = PasswordMode::Random,
                _ => {}
            }
        }
        if let Ok(val) = std::env::var("FORMFILL_PASSWORD") {
            options.password.password = val;
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
