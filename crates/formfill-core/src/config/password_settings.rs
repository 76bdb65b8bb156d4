//! Password generation settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordMode {
    /// Use the configured literal for every password field.
    #[default]
    Defined,
    /// Generate a fresh random password per pass (logged at info level so
    /// the value is recoverable).
    Random,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordSettings {
    pub mode: PasswordMode,
    pub password: String,
}

impl Default for PasswordSettings {
    fn default() -> Self {
        Self { mode: PasswordMode::Defined, password: "Pa$$w0rd!".to_string() }
    }
}
