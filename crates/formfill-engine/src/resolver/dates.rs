//! Date resolution: rule bounds, native bounds, and the start/end pair.
//!
//! A control whose name or id suggests a *start* role stores its generated
//! date in the consistency state; an *end* role control uses that stored
//! date as its lower bound and then closes the pair. Correctness of a pair
//! depends on the controls being visited in document order, which the fill
//! pass guarantees.

use chrono::{Duration, Months, NaiveDate};
use tracing::warn;

use formfill_core::controls::{ControlDescriptor, ControlKind};

use crate::consistency::ConsistencyState;
use crate::provider::dates::{format_date, parse_iso_date, today};
use crate::provider::RandomValueProvider;

const NATIVE_DATE_FORMAT: &str = "YYYY-MM-DD";
const DEFAULT_DATE_FORMAT: &str = "DD-MM-YYYY";

const START_WORDS: &[&str] = &["start", "from"];
const END_WORDS: &[&str] = &["end", "to"];

/// The date parameters of a rule, borrowed for one resolution.
pub(crate) struct DateRule<'a> {
    pub template: Option<&'a str>,
    pub min_offset: Option<i64>,
    pub max_offset: Option<i64>,
    pub min_date: Option<&'a str>,
    pub max_date: Option<&'a str>,
}

/// Generate a date value for a rule-matched control, updating the
/// start/end pair state.
pub(crate) fn resolve_date(
    rule: DateRule<'_>,
    control: Option<&ControlDescriptor>,
    provider: &mut RandomValueProvider,
    state: &mut ConsistencyState,
) -> String {
    let is_start = control.map_or(false, |c| mentions_any(c, START_WORDS));
    let is_end = control.map_or(false, |c| mentions_any(c, END_WORDS));
    let is_native_date = control.map_or(false, |c| c.kind == ControlKind::Date);

    // Rule bounds: absolute dates win over day offsets from today.
    let mut min: Option<NaiveDate> = rule
        .min_date
        .and_then(parse_iso_date)
        .or_else(|| rule.min_offset.map(|days| today() + Duration::days(days)));
    let mut max: Option<NaiveDate> = rule
        .max_date
        .and_then(parse_iso_date)
        .or_else(|| rule.max_offset.map(|days| today() + Duration::days(days)));

    // An end date never lands before the pair's start date; push the upper
    // bound out a month when the inherited minimum overtakes it.
    if is_end {
        if let Some(previous) = state.previous_date {
            min = Some(previous);
            if let Some(current_max) = max {
                if current_max < previous {
                    max = previous.checked_add_months(Months::new(1)).or(max);
                }
            }
        }
    }

    // A native date input's own parseable attributes override everything.
    if is_native_date {
        if let Some(c) = control {
            if let Some(native_min) = c.constraints.min.as_deref().and_then(parse_iso_date) {
                min = Some(native_min);
            }
            if let Some(native_max) = c.constraints.max.as_deref().and_then(parse_iso_date) {
                max = Some(native_max);
            }
        }
    }

    let format = if is_native_date {
        NATIVE_DATE_FORMAT
    } else {
        rule.template.unwrap_or(DEFAULT_DATE_FORMAT)
    };

    let date = match provider.date_between(min, max) {
        Ok(date) => date,
        Err(error) => {
            warn!(%error, "date generation failed");
            return String::new();
        }
    };

    if is_start {
        state.previous_date = Some(date);
    }
    if is_end {
        state.previous_date = None;
    }

    format_date(date, format)
}

/// Native date input with no matching rule: its own min/max attributes
/// bound the value, rendered ISO.
pub(crate) fn native_date_value(
    control: &ControlDescriptor,
    provider: &mut RandomValueProvider,
) -> String {
    let min = control.constraints.min.as_deref().and_then(parse_iso_date);
    let max = control.constraints.max.as_deref().and_then(parse_iso_date);

    match provider.date_between(min, max) {
        Ok(date) => format_date(date, NATIVE_DATE_FORMAT),
        Err(error) => {
            warn!(%error, "date generation failed");
            String::new()
        }
    }
}

/// Fallback for datetime controls with no matching rule.
pub(crate) fn naive_datetime_value(provider: &mut RandomValueProvider, utc_suffix: bool) -> String {
    let date = provider
        .date_between(None, None)
        .unwrap_or_else(|_| today());
    let time = provider.time();
    let suffix = if utc_suffix { "Z" } else { "" };
    format!("{}T{}{}", format_date(date, NATIVE_DATE_FORMAT), time, suffix)
}

/// Substring role check against the control's raw name and id.
fn mentions_any(control: &ControlDescriptor, words: &[&str]) -> bool {
    let name = control.name.to_lowercase();
    let dom_id = control.dom_id.to_lowercase();
    words
        .iter()
        .any(|word| name.contains(word) || dom_id.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use formfill_core::controls::ControlId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rule_between(min: &'static str, max: &'static str) -> DateRule<'static> {
        DateRule {
            template: None,
            min_offset: None,
            max_offset: None,
            min_date: Some(min),
            max_date: Some(max),
        }
    }

    fn control(kind: ControlKind, name: &str) -> ControlDescriptor {
        ControlDescriptor::new(ControlId(1), kind).with_name(name)
    }

    #[test]
    fn test_rule_bounds_respected() {
        let mut provider = RandomValueProvider::with_seed(61);
        let mut state = ConsistencyState::new();

        for _ in 0..50 {
            let value = resolve_date(
                rule_between("1970-01-01", "2000-01-01"),
                Some(&control(ControlKind::Date, "birthdate")),
                &mut provider,
                &mut state,
            );
            let parsed = parse_iso_date(&value).unwrap();
            assert!(parsed >= date(1970, 1, 1) && parsed <= date(2000, 1, 1));
        }
    }

    #[test]
    fn test_start_stores_and_end_clears() {
        let mut provider = RandomValueProvider::with_seed(62);
        let mut state = ConsistencyState::new();

        let start_value = resolve_date(
            rule_between("2024-01-01", "2024-06-30"),
            Some(&control(ControlKind::Date, "start_date")),
            &mut provider,
            &mut state,
        );
        let start = parse_iso_date(&start_value).unwrap();
        assert_eq!(state.previous_date, Some(start));

        let end_value = resolve_date(
            rule_between("2024-01-01", "2024-06-30"),
            Some(&control(ControlKind::Date, "end_date")),
            &mut provider,
            &mut state,
        );
        let end = parse_iso_date(&end_value).unwrap();
        assert!(end >= start, "end {end} before start {start}");
        assert_eq!(state.previous_date, None, "pair must close after the end date");
    }

    #[test]
    fn test_end_pushes_max_one_month_past_inherited_min() {
        let mut provider = RandomValueProvider::with_seed(63);
        let mut state = ConsistencyState::new();
        state.previous_date = Some(date(2024, 8, 20));

        // Rule max precedes the inherited minimum.
        for _ in 0..30 {
            state.previous_date = Some(date(2024, 8, 20));
            let value = resolve_date(
                rule_between("2024-01-01", "2024-03-31"),
                Some(&control(ControlKind::Date, "end_date")),
                &mut provider,
                &mut state,
            );
            let end = parse_iso_date(&value).unwrap();
            assert!(end >= date(2024, 8, 20));
            assert!(end <= date(2024, 9, 20));
        }
    }

    #[test]
    fn test_native_attributes_override_rule_bounds() {
        let mut provider = RandomValueProvider::with_seed(64);
        let mut state = ConsistencyState::new();

        let mut c = control(ControlKind::Date, "appointment");
        c.constraints.min = Some("2030-01-01".to_string());
        c.constraints.max = Some("2030-01-31".to_string());

        for _ in 0..30 {
            let value = resolve_date(
                rule_between("1990-01-01", "1990-12-31"),
                Some(&c),
                &mut provider,
                &mut state,
            );
            let parsed = parse_iso_date(&value).unwrap();
            assert!(parsed >= date(2030, 1, 1) && parsed <= date(2030, 1, 31));
        }
    }

    #[test]
    fn test_non_native_control_uses_rule_template() {
        let mut provider = RandomValueProvider::with_seed(65);
        let mut state = ConsistencyState::new();

        let value = resolve_date(
            DateRule {
                template: Some("DD-MM-YYYY"),
                min_offset: None,
                max_offset: None,
                min_date: Some("1999-12-31"),
                max_date: Some("1999-12-31"),
            },
            Some(&control(ControlKind::Text, "expiry")),
            &mut provider,
            &mut state,
        );
        assert_eq!(value, "31-12-1999");
    }

    #[test]
    fn test_day_offsets_resolve_relative_to_today() {
        let mut provider = RandomValueProvider::with_seed(66);
        let mut state = ConsistencyState::new();

        let value = resolve_date(
            DateRule {
                template: Some("YYYY-MM-DD"),
                min_offset: Some(10),
                max_offset: Some(20),
                min_date: None,
                max_date: None,
            },
            Some(&control(ControlKind::Text, "delivery")),
            &mut provider,
            &mut state,
        );
        let parsed = parse_iso_date(&value).unwrap();
        assert!(parsed >= today() + Duration::days(10));
        assert!(parsed <= today() + Duration::days(20));
    }

    #[test]
    fn test_inverted_bounds_degrade_to_empty() {
        let mut provider = RandomValueProvider::with_seed(67);
        let mut state = ConsistencyState::new();

        let value = resolve_date(
            rule_between("2024-12-31", "2024-01-01"),
            Some(&control(ControlKind::Text, "window")),
            &mut provider,
            &mut state,
        );
        assert_eq!(value, "");
    }

    #[test]
    fn test_native_fallback_uses_attributes() {
        let mut provider = RandomValueProvider::with_seed(68);
        let mut c = control(ControlKind::Date, "anything");
        c.constraints.min = Some("2022-05-01".to_string());
        c.constraints.max = Some("2022-05-31".to_string());

        for _ in 0..20 {
            let value = native_date_value(&c, &mut provider);
            let parsed = parse_iso_date(&value).unwrap();
            assert!(parsed >= date(2022, 5, 1) && parsed <= date(2022, 5, 31));
        }
    }

    #[test]
    fn test_unparseable_native_attribute_is_ignored() {
        let mut provider = RandomValueProvider::with_seed(69);
        let mut c = control(ControlKind::Date, "anything");
        c.constraints.min = Some("yesterday".to_string());

        let value = native_date_value(&c, &mut provider);
        assert!(parse_iso_date(&value).is_some());
    }
}
