//! List parsing for the options boundary (comma- and line-separated inputs).

use crate::text::sanitize_text;

/// Split a comma-separated string into trimmed, non-empty entries,
/// optionally sanitizing each one.
pub fn csv_to_array(csv: &str, sanitize: bool) -> Vec<String> {
    csv.split(',')
        .map(|part| {
            let trimmed = part.trim();
            if sanitize {
                sanitize_text(trimmed)
            } else {
                trimmed.to_string()
            }
        })
        .filter(|part| !part.is_empty())
        .collect()
}

/// Split a multi-line string into trimmed, non-empty lines.
pub fn multiple_lines_to_array(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
