//! Text normalization shared by matching and email assembly.

/// Strip every non-alphanumeric character and lowercase the rest.
///
/// Both the identity string builder and the email username assembly run
/// free-form text through this before matching or concatenating.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// True when the value is missing or whitespace-only.
pub fn blank(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(s) => s.trim().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_and_lowercases() {
        assert_eq!(sanitize_text("First Name!"), "firstname");
        assert_eq!(sanitize_text("jack.smith"), "jacksmith");
        assert_eq!(sanitize_text("user_42"), "user42");
        assert_eq!(sanitize_text(""), "");
    }

    #[test]
    fn test_blank() {
        assert!(blank(None));
        assert!(blank(Some("")));
        assert!(blank(Some("   ")));
        assert!(!blank(Some("x")));
    }
}
