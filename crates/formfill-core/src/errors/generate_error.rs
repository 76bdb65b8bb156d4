//! Value-generation errors.

/// Errors that can occur while generating a value for a single control.
///
/// None of these abort a fill pass: the resolver catches them, logs, and
/// degrades the one control's value.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A numeric generator was given inverted bounds. Deliberately fail-fast
    /// instead of swapping; a rule configured this way is broken.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// A date generator was given inverted bounds.
    #[error("invalid date range: {min} is after {max}")]
    InvalidDateRange { min: String, max: String },

    /// A regex or alphanumeric template failed to expand.
    #[error("pattern expansion failed: {message}")]
    PatternExpansion { message: String },
}
