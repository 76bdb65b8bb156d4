//! FieldMatcher - identity strings and first-match rule scanning
//!
//! A control's identity string is the concatenation of its configured
//! name sources, each normalized to `sanitized + " " + raw` (so both the
//! squashed and the original spellings are searchable). Rules are scanned
//! profile list first, then defaults; within a list the first rule with
//! any matching pattern wins. Matching is deterministic: same identity,
//! same rules, same filter, same result.

use regex::{Regex, RegexBuilder};
use tracing::warn;

use formfill_core::config::{FillOptions, MatchSettings};
use formfill_core::controls::ControlDescriptor;
use formfill_core::rules::{FieldRule, KindTag};
use formfill_core::text::sanitize_text;

/// A pattern list compiled once per pass (confirm/ignore/agree lists).
pub struct CompiledPatternList {
    regexes: Vec<Regex>,
}

impl CompiledPatternList {
    /// Compile case-insensitive Unicode regexes; invalid patterns are
    /// skipped with a warning rather than poisoning the whole list.
    pub fn compile(patterns: &[String]) -> Self {
        let regexes = patterns
            .iter()
            .filter_map(|pattern| compile_pattern(pattern))
            .collect();
        Self { regexes }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regexes.iter().any(|r| r.is_match(haystack))
    }

    pub fn is_empty(&self) -> bool {
        self.regexes.is_empty()
    }
}

fn compile_pattern(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(error) => {
            warn!(pattern, %error, "skipping unparseable match pattern");
            None
        }
    }
}

struct CompiledRule<'a> {
    rule: &'a FieldRule,
    patterns: Vec<Regex>,
}

/// Rules compiled for one fill pass, profile list ahead of the defaults.
pub struct FieldMatcher<'a> {
    profile_rules: Vec<CompiledRule<'a>>,
    default_rules: Vec<CompiledRule<'a>>,
}

impl<'a> FieldMatcher<'a> {
    pub fn new(options: &'a FillOptions, profile_index: Option<usize>) -> Self {
        let profile_rules = profile_index
            .and_then(|index| options.profiles.get(index))
            .map(|profile| compile_rules(&profile.fields))
            .unwrap_or_default();

        Self {
            profile_rules,
            default_rules: compile_rules(&options.fields),
        }
    }

    /// First rule whose patterns hit the identity. When `allowed_kinds` is
    /// non-empty, rules of other kinds are skipped entirely, not merely
    /// deprioritized.
    pub fn find(&self, identity: &str, allowed_kinds: &[KindTag]) -> Option<&'a FieldRule> {
        self.find_in(&self.profile_rules, identity, allowed_kinds)
            .or_else(|| self.find_in(&self.default_rules, identity, allowed_kinds))
    }

    fn find_in(
        &self,
        rules: &[CompiledRule<'a>],
        identity: &str,
        allowed_kinds: &[KindTag],
    ) -> Option<&'a FieldRule> {
        for compiled in rules {
            if !compiled.patterns.iter().any(|p| p.is_match(identity)) {
                continue;
            }
            if allowed_kinds.is_empty() || allowed_kinds.contains(&compiled.rule.tag()) {
                return Some(compiled.rule);
            }
        }
        None
    }
}

fn compile_rules(rules: &[FieldRule]) -> Vec<CompiledRule<'_>> {
    rules
        .iter()
        .map(|rule| CompiledRule {
            rule,
            patterns: rule
                .match_patterns
                .iter()
                .filter_map(|p| compile_pattern(p))
                .collect(),
        })
        .collect()
}

/// Normalize one identity source: the sanitized form, and when it differs,
/// the raw text appended after it.
fn normalize(text: &str) -> String {
    let sanitized = sanitize_text(text);
    if sanitized == text {
        sanitized
    } else {
        format!("{sanitized} {text}")
    }
}

/// Build the matching subject for a control from its configured sources.
pub fn identity_for(control: &ControlDescriptor, settings: &MatchSettings) -> String {
    let mut identity = String::new();
    let mut append = |text: &str| {
        identity.push(' ');
        identity.push_str(&normalize(text));
    };

    if settings.match_name {
        append(&control.name);
    }
    if settings.match_id {
        append(&control.dom_id);
    }
    if settings.match_class {
        append(&control.class_name);
    }
    if settings.match_placeholder {
        append(control.placeholder.as_deref().unwrap_or(""));
    }
    for attribute in &settings.custom_attributes {
        append(
            control
                .custom_attributes
                .get(attribute)
                .map(String::as_str)
                .unwrap_or(""),
        );
    }
    if settings.match_label {
        for label in &control.label_texts {
            append(label);
        }
    }
    if settings.match_aria_label {
        append(control.aria_label.as_deref().unwrap_or(""));
    }
    if settings.match_aria_labelled_by {
        for text in &control.aria_labelledby_texts {
            append(text);
        }
    }

    identity
}
