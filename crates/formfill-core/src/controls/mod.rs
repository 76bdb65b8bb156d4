//! Control descriptor types.

pub mod types;

pub use types::{ControlDescriptor, ControlId, ControlKind, NativeConstraints, SelectOption};
