//! formfill-core: shared types for the formfill engine
//!
//! This crate carries everything the value-generation engine and its host
//! boundary agree on:
//! - Rules: the `FieldRule` data model (closed kind enumeration, match patterns)
//! - Controls: the host-independent `ControlDescriptor` view of a form control
//! - Config: layered `FillOptions` resolution and the compiled default rules
//! - Traits: the `FormHost` capability interface and `FillAction` vocabulary
//! - Errors: one `thiserror` enum per subsystem

pub mod config;
pub mod controls;
pub mod errors;
pub mod rules;
pub mod text;
pub mod traits;

// Re-exports for convenience
pub use config::{
    FillOptions, MatchSettings, PasswordMode, PasswordSettings, Profile,
    DEFAULT_TELEPHONE_TEMPLATE,
};
pub use controls::{
    ControlDescriptor, ControlId, ControlKind, NativeConstraints, SelectOption,
};
pub use errors::{ConfigError, GenerateError};
pub use rules::{
    EmailSettings, FieldKind, FieldRule, HostnameStrategy, KindTag, UsernameStrategy,
};
pub use traits::{FillAction, FileKind, FormHost};
