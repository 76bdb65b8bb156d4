//! Capability traits for the host boundary.

pub mod form_host;

pub use form_host::{FillAction, FileKind, FormHost};
