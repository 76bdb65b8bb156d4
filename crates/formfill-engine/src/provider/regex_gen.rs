//! Regex-constrained string synthesis.
//!
//! Parses the pattern with `regex-syntax` and walks the HIR, making a
//! random choice at every class, repetition, and alternation. Unconstrained
//! classes are bounded to code points at or below U+FFFF; unbounded
//! repetitions are capped.

use regex_syntax::hir::{Class, Hir, HirKind};
use regex_syntax::ParserBuilder;

use formfill_core::errors::GenerateError;

use super::RandomValueProvider;

/// Upper bound for unconstrained character classes (`.`, negated classes).
const MAX_CODE_POINT: u32 = 0xFFFF;

/// Extra iterations granted to `*`, `+`, and `{n,}` repetitions.
const MAX_EXTRA_REPEATS: u32 = 10;

impl RandomValueProvider {
    /// Generate a string matching `pattern`.
    ///
    /// On a malformed pattern the error's display text is returned as the
    /// value; downstream code treats the result as an opaque string either
    /// way. Callers that want the failure channel use
    /// [`RandomValueProvider::try_regex_string`].
    pub fn regex_string(&mut self, pattern: &str) -> String {
        if pattern.is_empty() {
            return String::new();
        }

        match self.try_regex_string(pattern) {
            Ok(value) => value,
            Err(error) => error.to_string(),
        }
    }

    /// Generate a string matching `pattern`, failing on parse errors.
    pub fn try_regex_string(&mut self, pattern: &str) -> Result<String, GenerateError> {
        let hir = ParserBuilder::new()
            .build()
            .parse(pattern)
            .map_err(|e| GenerateError::PatternExpansion { message: e.to_string() })?;

        let mut out = String::new();
        self.walk(&hir, &mut out);
        Ok(out)
    }

    fn walk(&mut self, hir: &Hir, out: &mut String) {
        match hir.kind() {
            HirKind::Empty => {}
            // Anchors and boundaries generate nothing.
            HirKind::Look(_) => {}
            HirKind::Literal(literal) => {
                if let Ok(text) = std::str::from_utf8(&literal.0) {
                    out.push_str(text);
                }
            }
            HirKind::Class(class) => {
                if let Some(c) = self.pick_from_class(class) {
                    out.push(c);
                }
            }
            HirKind::Repetition(rep) => {
                let min = rep.min;
                let max = rep.max.unwrap_or(rep.min + MAX_EXTRA_REPEATS);
                let times = self.uniform(min as i64, max.max(min) as i64);
                for _ in 0..times {
                    self.walk(&rep.sub, out);
                }
            }
            HirKind::Capture(capture) => self.walk(&capture.sub, out),
            HirKind::Concat(parts) => {
                for part in parts {
                    self.walk(part, out);
                }
            }
            HirKind::Alternation(branches) => {
                if let Some(index) = self.index(branches.len()) {
                    self.walk(&branches[index], out);
                }
            }
        }
    }

    fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.uniform(0, len as i64 - 1) as usize)
        }
    }

    fn pick_from_class(&mut self, class: &Class) -> Option<char> {
        match class {
            Class::Unicode(unicode) => {
                // Clip to the bounded expansion range; fall back to the raw
                // ranges when clipping would leave nothing.
                let mut spans: Vec<(u32, u32)> = unicode
                    .ranges()
                    .iter()
                    .filter_map(|r| {
                        let start = r.start() as u32;
                        let end = (r.end() as u32).min(MAX_CODE_POINT);
                        (start <= end).then_some((start, end))
                    })
                    .collect();
                if spans.is_empty() {
                    spans = unicode
                        .ranges()
                        .iter()
                        .map(|r| (r.start() as u32, r.end() as u32))
                        .collect();
                }
                self.pick_from_spans(&spans)
            }
            Class::Bytes(bytes) => {
                let spans: Vec<(u32, u32)> = bytes
                    .ranges()
                    .iter()
                    .map(|r| (r.start() as u32, r.end() as u32))
                    .collect();
                self.pick_from_spans(&spans)
            }
        }
    }

    fn pick_from_spans(&mut self, spans: &[(u32, u32)]) -> Option<char> {
        let total: u64 = spans.iter().map(|(s, e)| u64::from(e - s) + 1).sum();
        if total == 0 {
            return None;
        }

        let mut index = self.uniform(0, total as i64 - 1) as u64;
        for (start, end) in spans {
            let size = u64::from(end - start) + 1;
            if index < size {
                return char::from_u32(start + index as u32);
            }
            index -= size;
        }

        None
    }
}
