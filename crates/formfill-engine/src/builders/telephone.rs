//! Telephone numbers from digit templates.

use crate::provider::RandomValueProvider;

/// Expand a telephone template: `X` becomes a digit 1-9, `x` a digit 0-9,
/// everything else is literal.
pub fn telephone(provider: &mut RandomValueProvider, template: &str) -> String {
    let mut out = String::with_capacity(template.len());

    for c in template.chars() {
        match c {
            'X' => out.push(provider.digit(1)),
            'x' => out.push(provider.digit(0)),
            other => out.push(other),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_shape() {
        let mut provider = RandomValueProvider::with_seed(21);
        let checker = regex::Regex::new(
            r"^\+1 \([1-9]\d[1-9]\) [1-9]\d[1-9]-[1-9]\d\d[1-9]$",
        )
        .unwrap();

        for _ in 0..200 {
            let value = telephone(&mut provider, "+1 (XxX) XxX-XxxX");
            assert!(checker.is_match(&value), "unexpected phone {value:?}");
        }
    }

    #[test]
    fn test_literals_survive() {
        let mut provider = RandomValueProvider::with_seed(22);
        let value = telephone(&mut provider, "+61 400 XXX XXX");
        assert!(value.starts_with("+61 400 "));
        assert_eq!(value.len(), "+61 400 XXX XXX".len());
    }
}
