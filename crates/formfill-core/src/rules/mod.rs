//! The FieldRule data model: a closed kind enumeration plus match patterns.

pub mod types;

pub use types::{
    EmailSettings, FieldKind, FieldRule, HostnameStrategy, KindTag, UsernameStrategy,
};
