//! FieldValueResolver - kind dispatch and native-constraint fallbacks
//!
//! Given a control, its identity string, and the pass's consistency state,
//! the resolver picks an eligible rule (native control types constrain
//! which rule kinds apply), generates a value, and reports the write-back
//! as a `FillAction`. Generation failures never abort a pass: the resolver
//! logs and degrades the one control's value.

pub mod dates;

use tracing::{info, warn};

use formfill_core::config::{
    default_email_rule, FillOptions, PasswordMode, DEFAULT_TELEPHONE_TEMPLATE,
};
use formfill_core::controls::{ControlDescriptor, ControlKind};
use formfill_core::rules::{FieldKind, FieldRule, KindTag};
use formfill_core::traits::FillAction;

use crate::builders;
use crate::consistency::ConsistencyState;
use crate::fill::files::classify_file;
use crate::matcher::{CompiledPatternList, FieldMatcher};
use crate::provider::RandomValueProvider;

/// Rule kinds eligible for controls that carry an opaque formatted value
/// (datetime, time, month, week, color).
const TEMPLATE_KINDS: &[KindTag] = &[KindTag::Alphanumeric, KindTag::Regex, KindTag::RandomizedList];

pub struct FieldValueResolver<'a> {
    options: &'a FillOptions,
    matcher: FieldMatcher<'a>,
    confirm: CompiledPatternList,
    agree: CompiledPatternList,
    email_fallback: FieldRule,
    page_hostname: Option<String>,
}

impl<'a> FieldValueResolver<'a> {
    pub fn new(
        options: &'a FillOptions,
        profile_index: Option<usize>,
        page_hostname: Option<String>,
    ) -> Self {
        Self {
            options,
            matcher: FieldMatcher::new(options, profile_index),
            confirm: CompiledPatternList::compile(&options.confirm_fields),
            agree: CompiledPatternList::compile(&options.agree_terms_fields),
            email_fallback: default_email_rule(),
            page_hostname,
        }
    }

    /// Resolve one control to a write-back action. `None` means the control
    /// gets nothing (no options to pick, unsupported type, file uploads
    /// disabled).
    pub fn resolve(
        &self,
        control: &ControlDescriptor,
        identity: &str,
        provider: &mut RandomValueProvider,
        state: &mut ConsistencyState,
    ) -> Option<FillAction> {
        match control.kind {
            ControlKind::Select { .. } => self.resolve_select(control, identity, provider, state),
            ControlKind::TextArea => Some(self.resolve_textarea(control, identity, provider, state)),
            ControlKind::ContentEditable => Some(self.resolve_content_editable(provider)),
            _ => self.resolve_input(control, identity, provider, state),
        }
    }

    fn resolve_input(
        &self,
        control: &ControlDescriptor,
        identity: &str,
        provider: &mut RandomValueProvider,
        state: &mut ConsistencyState,
    ) -> Option<FillAction> {
        match control.kind {
            ControlKind::Checkbox => {
                let checked = self.agree.is_match(identity) || provider.chance();
                Some(FillAction::SetChecked(checked))
            }

            ControlKind::Date => {
                let rule = self.matcher.find(identity, &[KindTag::Date]);
                let value = match rule {
                    Some(rule) => self.generate(Some(rule), Some(control), provider, state),
                    None => dates::native_date_value(control, provider),
                };
                Some(FillAction::SetValue(value))
            }

            ControlKind::Datetime => {
                let value = self
                    .template_rule_value(control, identity, provider, state)
                    .unwrap_or_else(|| dates::naive_datetime_value(provider, true));
                Some(FillAction::SetValue(value))
            }

            ControlKind::DatetimeLocal => {
                let value = self
                    .template_rule_value(control, identity, provider, state)
                    .unwrap_or_else(|| dates::naive_datetime_value(provider, false));
                Some(FillAction::SetValue(value))
            }

            ControlKind::Time => {
                let value = self
                    .template_rule_value(control, identity, provider, state)
                    .unwrap_or_else(|| provider.time());
                Some(FillAction::SetValue(value))
            }

            ControlKind::Month => {
                let value = self
                    .template_rule_value(control, identity, provider, state)
                    .unwrap_or_else(|| format!("{}-{}", provider.year(), provider.month_value()));
                Some(FillAction::SetValue(value))
            }

            ControlKind::Week => {
                let value = self
                    .template_rule_value(control, identity, provider, state)
                    .unwrap_or_else(|| format!("{}-W{}", provider.year(), provider.week_number()));
                Some(FillAction::SetValue(value))
            }

            ControlKind::Email => {
                if self.confirm.is_match(identity) {
                    if let Some(previous) = state.previous_value.clone() {
                        return Some(FillAction::SetValue(previous));
                    }
                }

                let rule = self
                    .matcher
                    .find(identity, &[KindTag::Email])
                    .unwrap_or(&self.email_fallback);
                let value = self.generate(Some(rule), Some(control), provider, state);
                state.previous_value = Some(value.clone());
                Some(FillAction::SetValue(value))
            }

            ControlKind::Number | ControlKind::Range => {
                let value = self.resolve_number(control, identity, provider);
                Some(FillAction::SetValue(value))
            }

            ControlKind::Password => {
                if self.confirm.is_match(identity) {
                    if let Some(previous) = state.previous_password.clone() {
                        return Some(FillAction::SetValue(previous));
                    }
                }

                let password = match self.options.password.mode {
                    PasswordMode::Defined => self.options.password.password.clone(),
                    PasswordMode::Random => {
                        let generated = provider.word(8, 8);
                        info!(password = %generated, "generated random password");
                        generated
                    }
                };
                state.previous_password = Some(password.clone());
                Some(FillAction::SetValue(password))
            }

            ControlKind::Radio => {
                if control.name.is_empty() {
                    return None;
                }

                let allowed_values = match self.matcher.find(identity, &[KindTag::RandomizedList]) {
                    Some(FieldRule { kind: FieldKind::RandomizedList { list }, .. }) => {
                        list.clone()
                    }
                    _ => Vec::new(),
                };

                let candidates: Vec<&str> = control
                    .options
                    .iter()
                    .filter(|o| !o.disabled)
                    .filter(|o| allowed_values.is_empty() || allowed_values.contains(&o.value))
                    .map(|o| o.value.as_str())
                    .collect();

                let value = provider.element(&candidates)?;
                Some(FillAction::CheckRadio {
                    name: control.name.clone(),
                    value: value.to_string(),
                })
            }

            ControlKind::Tel => {
                let rule = self.matcher.find(
                    identity,
                    &[KindTag::Telephone, KindTag::Regex, KindTag::RandomizedList],
                );
                let value = match rule {
                    Some(rule) => self.generate(Some(rule), Some(control), provider, state),
                    None => builders::telephone(provider, DEFAULT_TELEPHONE_TEMPLATE),
                };
                Some(FillAction::SetValue(value))
            }

            ControlKind::Url => {
                let rule = self.matcher.find(
                    identity,
                    &[KindTag::Alphanumeric, KindTag::Url, KindTag::Regex, KindTag::RandomizedList],
                );
                let value = match rule {
                    Some(rule) => self.generate(Some(rule), Some(control), provider, state),
                    None => provider.website(),
                };
                Some(FillAction::SetValue(value))
            }

            ControlKind::Color => {
                let value = self
                    .template_rule_value(control, identity, provider, state)
                    .unwrap_or_else(|| provider.color());
                Some(FillAction::SetValue(value))
            }

            ControlKind::Search => {
                let rule = self.matcher.find(
                    identity,
                    &[KindTag::Alphanumeric, KindTag::Regex, KindTag::RandomizedList, KindTag::Text],
                );
                let value = match rule {
                    Some(rule) => self.generate(Some(rule), Some(control), provider, state),
                    None => provider.words(1, 0, 0),
                };
                Some(FillAction::SetValue(value))
            }

            ControlKind::File => {
                if self.options.upload_files {
                    Some(FillAction::AttachFile(classify_file(control)))
                } else {
                    None
                }
            }

            ControlKind::Hidden | ControlKind::Button => None,

            // Plain text and anything else: confirm reuse, then any rule.
            _ => {
                if self.confirm.is_match(identity) {
                    if let Some(previous) = state.previous_value.clone() {
                        return Some(FillAction::SetValue(previous));
                    }
                }

                let rule = self.matcher.find(identity, &[]);
                let value = self.generate(rule, Some(control), provider, state);
                state.previous_value = Some(value.clone());
                Some(FillAction::SetValue(value))
            }
        }
    }

    fn resolve_textarea(
        &self,
        control: &ControlDescriptor,
        identity: &str,
        provider: &mut RandomValueProvider,
        state: &mut ConsistencyState,
    ) -> FillAction {
        let rule = self.matcher.find(
            identity,
            &[KindTag::Text, KindTag::Alphanumeric, KindTag::Regex, KindTag::RandomizedList],
        );
        FillAction::SetValue(self.generate(rule, Some(control), provider, state))
    }

    fn resolve_content_editable(&self, provider: &mut RandomValueProvider) -> FillAction {
        let text = provider
            .paragraph(5, 100, 0, self.options.default_max_length)
            .unwrap_or_default();
        FillAction::SetText(text)
    }

    /// Select resolution: a rule-generated value is honored only when it is
    /// present in the option list; otherwise a random enabled option (or a
    /// random subset for multiple selects).
    fn resolve_select(
        &self,
        control: &ControlDescriptor,
        identity: &str,
        provider: &mut RandomValueProvider,
        state: &mut ConsistencyState,
    ) -> Option<FillAction> {
        let multiple = matches!(control.kind, ControlKind::Select { multiple: true });

        let values: Vec<&str> = control
            .options
            .iter()
            .filter(|o| !o.disabled)
            .map(|o| o.value.as_str())
            .filter(|v| !v.is_empty())
            .collect();

        if values.is_empty() {
            return None;
        }

        if let Some(rule) = self.matcher.find(identity, &[]) {
            let value = self.generate(Some(rule), None, provider, state);
            if values.contains(&value.as_str()) {
                return Some(FillAction::SelectOne(value));
            }
        }

        if !multiple {
            let value = provider.element(&values)?;
            return Some(FillAction::SelectOne(value.to_string()));
        }

        let count = provider.uniform(1, values.len() as i64) as usize;
        let mut selected: Vec<String> = Vec::new();
        for _ in 0..count {
            if let Some(value) = provider.element(&values) {
                if !selected.iter().any(|s| s == value) {
                    selected.push(value.to_string());
                }
            }
        }
        Some(FillAction::SelectMany(selected))
    }

    fn resolve_number(
        &self,
        control: &ControlDescriptor,
        identity: &str,
        provider: &mut RandomValueProvider,
    ) -> String {
        let native_min = parse_number(control.constraints.min.as_deref());
        let native_max = parse_number(control.constraints.max.as_deref());

        let rule = self.matcher.find(identity, &[KindTag::Number]);
        let (rule_min, rule_max, rule_decimals) = match rule {
            Some(FieldRule { kind: FieldKind::Number { min, max, decimal_places }, .. }) => {
                (*min, *max, *decimal_places)
            }
            _ => (None, None, None),
        };

        // The tighter bound wins on each side.
        let min = match (rule_min, native_min) {
            (Some(r), Some(n)) => r.max(n),
            (Some(r), None) => r,
            (None, Some(n)) => n,
            (None, None) => 1.0,
        };
        let max = match (rule_max, native_max) {
            (Some(r), Some(n)) => r.min(n),
            (Some(r), None) => r,
            (None, Some(n)) => n,
            (None, None) => 100.0,
        };

        let decimals = decimals_from_step(control.constraints.step.as_deref())
            .or(rule_decimals)
            .unwrap_or(0);

        self.checked_number(provider, min, max, decimals)
    }

    fn checked_number(
        &self,
        provider: &mut RandomValueProvider,
        min: f64,
        max: f64,
        decimals: u32,
    ) -> String {
        match provider.number_string(min, max, decimals) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "number generation failed");
                String::new()
            }
        }
    }

    /// Rule lookup restricted to the template kinds shared by the opaque
    /// formatted control types.
    fn template_rule_value(
        &self,
        control: &ControlDescriptor,
        identity: &str,
        provider: &mut RandomValueProvider,
        state: &mut ConsistencyState,
    ) -> Option<String> {
        self.matcher
            .find(identity, TEMPLATE_KINDS)
            .map(|rule| self.generate(Some(rule), Some(control), provider, state))
    }

    /// The kind dispatch table: rule (or none) to generated string.
    pub fn generate(
        &self,
        rule: Option<&FieldRule>,
        control: Option<&ControlDescriptor>,
        provider: &mut RandomValueProvider,
        state: &mut ConsistencyState,
    ) -> String {
        let Some(rule) = rule else {
            return self.fallback_value(control, provider);
        };

        match &rule.kind {
            FieldKind::Username => {
                let username = provider.word(5, 10);
                state.previous_username = Some(username.clone());
                username
            }

            FieldKind::FirstName => {
                let name = provider.first_name();
                state.previous_first_name = Some(name.clone());
                name
            }

            FieldKind::LastName => {
                let name = provider.last_name();
                state.previous_last_name = Some(name.clone());
                name
            }

            FieldKind::FullName => {
                let first = provider.first_name();
                let last = provider.last_name();
                state.previous_first_name = Some(first.clone());
                state.previous_last_name = Some(last.clone());
                format!("{first} {last}")
            }

            FieldKind::StreetAddress => provider.street_address(),

            FieldKind::Country => provider.country(),

            FieldKind::Organization => provider.organization_name(),

            FieldKind::Url => provider.website(),

            FieldKind::Email(settings) => {
                builders::build_email(provider, settings, state, self.page_hostname.as_deref())
            }

            FieldKind::Telephone { template } => builders::telephone(
                provider,
                template.as_deref().unwrap_or(DEFAULT_TELEPHONE_TEMPLATE),
            ),

            FieldKind::Number { min, max, decimal_places } => self.checked_number(
                provider,
                min.unwrap_or(1.0),
                max.unwrap_or(100.0),
                decimal_places.unwrap_or(0),
            ),

            FieldKind::Date { template, min, max, min_date, max_date } => dates::resolve_date(
                dates::DateRule {
                    template: template.as_deref(),
                    min_offset: *min,
                    max_offset: *max,
                    min_date: min_date.as_deref(),
                    max_date: max_date.as_deref(),
                },
                control,
                provider,
                state,
            ),

            FieldKind::Text { min, max, max_length } => {
                if let Some(pattern) = native_pattern(control) {
                    return provider.regex_string(pattern);
                }

                let min_words = min.unwrap_or(10);
                let max_words = max.unwrap_or(30);
                let mut max_len = max_length.unwrap_or(self.options.default_max_length);
                if let Some(native) = control.and_then(|c| c.constraints.max_length) {
                    if native > 0 && native < max_len {
                        max_len = native;
                    }
                }
                let min_len = control
                    .and_then(|c| c.constraints.min_length)
                    .unwrap_or(0);

                match provider.paragraph(min_words, max_words, min_len, max_len) {
                    Ok(value) => value,
                    Err(error) => {
                        warn!(%error, rule = %rule.name, "text generation failed");
                        String::new()
                    }
                }
            }

            FieldKind::Alphanumeric { template } => provider.pattern_expand(template),

            FieldKind::Regex { template } => provider.regex_string(template),

            FieldKind::RandomizedList { list } => {
                provider.element(list).cloned().unwrap_or_default()
            }
        }
    }

    /// No matching rule: expand the native pattern when one exists, else a
    /// bounded random phrase.
    fn fallback_value(
        &self,
        control: Option<&ControlDescriptor>,
        provider: &mut RandomValueProvider,
    ) -> String {
        if let Some(pattern) = native_pattern(control) {
            return provider.regex_string(pattern);
        }

        provider.phrase(self.min_length_of(control), self.max_length_of(control))
    }

    fn min_length_of(&self, control: Option<&ControlDescriptor>) -> u32 {
        control
            .and_then(|c| c.constraints.min_length)
            .filter(|len| *len > 0)
            .unwrap_or(0)
    }

    fn max_length_of(&self, control: Option<&ControlDescriptor>) -> u32 {
        control
            .and_then(|c| c.constraints.max_length)
            .filter(|len| *len > 0)
            .unwrap_or(self.options.default_max_length)
    }

    pub fn is_confirm(&self, identity: &str) -> bool {
        self.confirm.is_match(identity)
    }
}

fn native_pattern(control: Option<&ControlDescriptor>) -> Option<&str> {
    control
        .and_then(|c| c.constraints.pattern.as_deref())
        .filter(|p| !p.is_empty())
}

fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
}

/// Decimal places implied by a numeric `step` attribute: `0.01` means two,
/// anything at or above one means none.
fn decimals_from_step(raw: Option<&str>) -> Option<u32> {
    let step = raw?.trim().parse::<f64>().ok()?;
    if step <= 0.0 {
        return None;
    }
    if step >= 1.0 {
        return Some(0);
    }
    Some((-step.log10()).ceil() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formfill_core::controls::ControlId;

    fn resolver_fixture(options: &FillOptions) -> FieldValueResolver<'_> {
        FieldValueResolver::new(options, None, None)
    }

    fn control(kind: ControlKind, name: &str) -> ControlDescriptor {
        ControlDescriptor::new(ControlId(1), kind).with_name(name)
    }

    fn identity(options: &FillOptions, c: &ControlDescriptor) -> String {
        crate::matcher::identity_for(c, &options.field_match)
    }

    #[test]
    fn test_number_respects_tighter_native_bounds() {
        let options = FillOptions::default();
        let resolver = resolver_fixture(&options);
        let mut provider = RandomValueProvider::with_seed(41);

        // Built-in number rule is [1, 1000]; native attributes narrow it.
        let mut c = control(ControlKind::Number, "quantity");
        c.constraints.min = Some("5".to_string());
        c.constraints.max = Some("50".to_string());
        let id = identity(&options, &c);

        for _ in 0..100 {
            let value = resolver.resolve_number(&c, &id, &mut provider);
            let parsed: f64 = value.parse().unwrap();
            assert!((5.0..=50.0).contains(&parsed), "out of range: {value}");
        }
    }

    #[test]
    fn test_number_inverted_bounds_degrade_to_empty() {
        let options = FillOptions::default();
        let resolver = resolver_fixture(&options);
        let mut provider = RandomValueProvider::with_seed(42);

        let mut c = control(ControlKind::Number, "quantity");
        // Native minimum above the rule maximum.
        c.constraints.min = Some("2000".to_string());
        c.constraints.max = Some("3000".to_string());
        let id = identity(&options, &c);

        // Rule [1,1000] vs native [2000,3000]: min=2000, max=1000 -> invalid.
        let value = resolver.resolve_number(&c, &id, &mut provider);
        assert_eq!(value, "");
    }

    #[test]
    fn test_step_attribute_sets_decimals() {
        let options = FillOptions::default();
        let resolver = resolver_fixture(&options);
        let mut provider = RandomValueProvider::with_seed(43);

        let mut c = control(ControlKind::Number, "price");
        c.constraints.step = Some("0.01".to_string());
        let id = identity(&options, &c);

        let value = resolver.resolve_number(&c, &id, &mut provider);
        let decimals = value.split('.').nth(1).unwrap();
        assert_eq!(decimals.len(), 2, "value was {value}");
    }

    #[test]
    fn test_empty_randomized_list_yields_empty_string() {
        let mut options = FillOptions::default();
        options.fields = vec![FieldRule {
            name: "Empty".to_string(),
            match_patterns: vec!["pick".to_string()],
            kind: FieldKind::RandomizedList { list: Vec::new() },
        }];
        let resolver = resolver_fixture(&options);
        let mut provider = RandomValueProvider::with_seed(44);
        let mut state = ConsistencyState::new();

        let rule = resolver.matcher.find("pick", &[]).unwrap();
        let value = resolver.generate(Some(rule), None, &mut provider, &mut state);
        assert_eq!(value, "");
    }

    #[test]
    fn test_native_pattern_wins_for_unmatched_control() {
        let options = FillOptions::default();
        let resolver = resolver_fixture(&options);
        let mut provider = RandomValueProvider::with_seed(45);
        let mut state = ConsistencyState::new();

        let mut c = control(ControlKind::Text, "zzqqxx");
        c.constraints.pattern = Some(r"\d{4}".to_string());

        let value = resolver.generate(None, Some(&c), &mut provider, &mut state);
        assert_eq!(value.len(), 4);
        assert!(value.chars().all(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn test_unmatched_control_gets_bounded_phrase() {
        let options = FillOptions::default();
        let resolver = resolver_fixture(&options);
        let mut provider = RandomValueProvider::with_seed(46);
        let mut state = ConsistencyState::new();

        let mut c = control(ControlKind::Text, "zzqqxx");
        c.constraints.max_length = Some(12);

        for _ in 0..20 {
            let value = resolver.generate(None, Some(&c), &mut provider, &mut state);
            assert!(value.len() <= 12, "too long: {value:?}");
        }
    }

    #[test]
    fn test_full_name_stores_both_names() {
        let options = FillOptions::default();
        let resolver = resolver_fixture(&options);
        let mut provider = RandomValueProvider::with_seed(47);
        let mut state = ConsistencyState::new();

        let rule = FieldRule {
            name: "Full Name".to_string(),
            match_patterns: vec!["name".to_string()],
            kind: FieldKind::FullName,
        };
        let value = resolver.generate(Some(&rule), None, &mut provider, &mut state);

        let first = state.previous_first_name.unwrap();
        let last = state.previous_last_name.unwrap();
        assert_eq!(value, format!("{first} {last}"));
    }

    #[test]
    fn test_radio_honors_rule_value_allow_list() {
        let mut options = FillOptions::default();
        options.fields = vec![FieldRule {
            name: "Plan".to_string(),
            match_patterns: vec!["plan".to_string()],
            kind: FieldKind::RandomizedList {
                list: vec!["pro".to_string()],
            },
        }];
        let resolver = resolver_fixture(&options);
        let mut provider = RandomValueProvider::with_seed(48);
        let mut state = ConsistencyState::new();

        let mut c = control(ControlKind::Radio, "plan");
        c.options = vec![
            formfill_core::controls::SelectOption::new("free"),
            formfill_core::controls::SelectOption::new("pro"),
            formfill_core::controls::SelectOption::new("enterprise"),
        ];
        let id = identity(&options, &c);

        for _ in 0..10 {
            match resolver.resolve(&c, &id, &mut provider, &mut state) {
                Some(FillAction::CheckRadio { value, .. }) => assert_eq!(value, "pro"),
                other => panic!("expected radio action, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_select_uses_rule_value_only_when_listed() {
        let mut options = FillOptions::default();
        options.fields = vec![FieldRule {
            name: "Country".to_string(),
            match_patterns: vec!["country".to_string()],
            kind: FieldKind::RandomizedList {
                list: vec!["AU".to_string()],
            },
        }];
        let resolver = resolver_fixture(&options);
        let mut provider = RandomValueProvider::with_seed(49);
        let mut state = ConsistencyState::new();

        let mut c = control(ControlKind::Select { multiple: false }, "country");
        c.options = vec![
            formfill_core::controls::SelectOption::new("AU"),
            formfill_core::controls::SelectOption::new("NZ"),
        ];
        let id = identity(&options, &c);
        match resolver.resolve(&c, &id, &mut provider, &mut state) {
            Some(FillAction::SelectOne(value)) => assert_eq!(value, "AU"),
            other => panic!("expected select action, got {other:?}"),
        }

        // Rule value not present in options: falls back to a random option.
        c.options = vec![
            formfill_core::controls::SelectOption::new("US"),
            formfill_core::controls::SelectOption::new("UK"),
        ];
        match resolver.resolve(&c, &id, &mut provider, &mut state) {
            Some(FillAction::SelectOne(value)) => assert!(value == "US" || value == "UK"),
            other => panic!("expected select action, got {other:?}"),
        }
    }

    #[test]
    fn test_select_with_no_usable_options_is_skipped() {
        let options = FillOptions::default();
        let resolver = resolver_fixture(&options);
        let mut provider = RandomValueProvider::with_seed(50);
        let mut state = ConsistencyState::new();

        let mut c = control(ControlKind::Select { multiple: false }, "zzqqxx");
        c.options = vec![formfill_core::controls::SelectOption::new("")];
        let id = identity(&options, &c);

        assert!(resolver.resolve(&c, &id, &mut provider, &mut state).is_none());
    }

    #[test]
    fn test_agree_terms_checkbox_is_always_checked() {
        let options = FillOptions::default();
        let resolver = resolver_fixture(&options);
        let mut provider = RandomValueProvider::with_seed(51);
        let mut state = ConsistencyState::new();

        let c = control(ControlKind::Checkbox, "accept_terms_and_conditions");
        let id = identity(&options, &c);

        for _ in 0..20 {
            match resolver.resolve(&c, &id, &mut provider, &mut state) {
                Some(FillAction::SetChecked(checked)) => assert!(checked),
                other => panic!("expected checkbox action, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_decimals_from_step() {
        assert_eq!(decimals_from_step(Some("0.01")), Some(2));
        assert_eq!(decimals_from_step(Some("0.5")), Some(1));
        assert_eq!(decimals_from_step(Some("1")), Some(0));
        assert_eq!(decimals_from_step(Some("2")), Some(0));
        assert_eq!(decimals_from_step(Some("abc")), None);
        assert_eq!(decimals_from_step(None), None);
    }
}
