//! The ignore policy: which controls a fill pass leaves untouched.

use formfill_core::config::FillOptions;
use formfill_core::controls::{ControlDescriptor, ControlKind};

use crate::matcher::CompiledPatternList;

pub struct IgnorePolicy<'a> {
    options: &'a FillOptions,
    ignored: CompiledPatternList,
}

impl<'a> IgnorePolicy<'a> {
    pub fn new(options: &'a FillOptions) -> Self {
        Self {
            options,
            ignored: CompiledPatternList::compile(&options.ignored_fields),
        }
    }

    pub fn should_ignore(&self, control: &ControlDescriptor, identity: &str) -> bool {
        if matches!(control.kind, ControlKind::Button) {
            return true;
        }

        if control.disabled || control.readonly {
            return true;
        }

        if self.options.ignore_hidden_fields
            && (!control.visible || control.kind == ControlKind::Hidden)
        {
            return true;
        }

        if self.ignored.is_match(identity) {
            return true;
        }

        if self.options.ignore_fields_with_content {
            match control.kind {
                // A radio group is skipped once any member is selected.
                ControlKind::Radio => {
                    return control.checked || control.options.iter().any(|o| o.selected);
                }
                ControlKind::Select { .. } => return control.select_has_value(),
                ControlKind::Checkbox => return false,
                _ => {
                    if let Some(value) = control.value.as_deref() {
                        if !value.trim().is_empty() {
                            return true;
                        }
                    }
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formfill_core::controls::{ControlId, SelectOption};

    fn policy_fixture(options: &FillOptions) -> IgnorePolicy<'_> {
        IgnorePolicy::new(options)
    }

    fn control(kind: ControlKind) -> ControlDescriptor {
        ControlDescriptor::new(ControlId(1), kind)
    }

    #[test]
    fn test_buttons_always_ignored() {
        let options = FillOptions::default();
        let policy = policy_fixture(&options);
        assert!(policy.should_ignore(&control(ControlKind::Button), ""));
    }

    #[test]
    fn test_hidden_respects_toggle() {
        let mut options = FillOptions::default();
        let mut c = control(ControlKind::Text);
        c.visible = false;

        let policy = policy_fixture(&options);
        assert!(policy.should_ignore(&c, ""));

        options.ignore_hidden_fields = false;
        let policy = policy_fixture(&options);
        assert!(!policy.should_ignore(&c, ""));
    }

    #[test]
    fn test_ignored_pattern_matches_identity() {
        let options = FillOptions::default();
        let policy = policy_fixture(&options);
        let c = control(ControlKind::Text);
        // "captcha" is in the default ignored list.
        assert!(policy.should_ignore(&c, " captcha captcha-input"));
        assert!(!policy.should_ignore(&c, " city"));
    }

    #[test]
    fn test_prefilled_value_ignored_when_policy_on() {
        let mut options = FillOptions::default();
        let mut c = control(ControlKind::Text);
        c.value = Some("already here".to_string());

        let policy = policy_fixture(&options);
        assert!(policy.should_ignore(&c, ""));

        options.ignore_fields_with_content = false;
        let policy = policy_fixture(&options);
        assert!(!policy.should_ignore(&c, ""));
    }

    #[test]
    fn test_checkbox_not_ignored_for_content() {
        let options = FillOptions::default();
        let policy = policy_fixture(&options);
        let mut c = control(ControlKind::Checkbox);
        c.value = Some("true".to_string());
        assert!(!policy.should_ignore(&c, ""));
    }

    #[test]
    fn test_radio_group_with_selection_ignored() {
        let options = FillOptions::default();
        let policy = policy_fixture(&options);
        let mut c = control(ControlKind::Radio);
        c.options = vec![SelectOption::new("a"), SelectOption {
            value: "b".to_string(),
            disabled: false,
            selected: true,
        }];
        assert!(policy.should_ignore(&c, ""));
    }

    #[test]
    fn test_select_without_chosen_value_not_ignored() {
        let options = FillOptions::default();
        let policy = policy_fixture(&options);
        let mut c = control(ControlKind::Select { multiple: false });
        c.options = vec![SelectOption::new("x")];
        assert!(!policy.should_ignore(&c, ""));
    }
}
