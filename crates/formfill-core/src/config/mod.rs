//! Configuration for formfill.
//! TOML-based, layered resolution: env > project > user > compiled defaults,
//! plus `from_json` for the options blob the boundary stores.

pub mod defaults;
pub mod fill_options;
pub mod lists;
pub mod match_settings;
pub mod password_settings;
pub mod profile;

pub use defaults::{built_in_rules, default_email_rule, DEFAULT_TELEPHONE_TEMPLATE};
pub use fill_options::FillOptions;
pub use match_settings::MatchSettings;
pub use password_settings::{PasswordMode, PasswordSettings};
pub use profile::Profile;
