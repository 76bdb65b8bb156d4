//! formfill-engine: the decision logic of formfill
//!
//! This crate turns a stream of form controls into plausible values:
//! - Provider: primitive randomness (numbers, words, patterns, regexes, dates)
//! - Builders: composite values (telephone templates, email assembly)
//! - Matcher: identity strings and first-match rule scanning
//! - Resolver: kind dispatch, native-constraint fallbacks, confirmation reuse
//! - Consistency: per-pass carried state for dependent fields
//! - Fill: the sequential pass orchestration against a `FormHost`

pub mod builders;
pub mod consistency;
pub mod fill;
pub mod matcher;
pub mod provider;
pub mod resolver;

// Re-exports for convenience
pub use consistency::ConsistencyState;
pub use fill::files::classify_file;
pub use fill::ignore::IgnorePolicy;
pub use fill::FillEngine;
pub use matcher::{identity_for, CompiledPatternList, FieldMatcher};
pub use provider::RandomValueProvider;
pub use resolver::FieldValueResolver;
