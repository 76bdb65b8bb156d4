//! FillEngine - one sequential pass over a host's controls
//!
//! The pass visits selects first, then inputs, textareas, and
//! content-editable regions, with a `settle()` yield point after every
//! write so event-driven pages can react between mutations. A second
//! corrective pass revisits selects whose option list may have changed as
//! a side effect of earlier fills. One `ConsistencyState` is owned by the
//! pass from start to finish and dropped with it.

pub mod files;
pub mod ignore;

use tracing::debug;

use formfill_core::config::FillOptions;
use formfill_core::controls::{ControlDescriptor, ControlKind};
use formfill_core::traits::FormHost;

use crate::consistency::ConsistencyState;
use crate::matcher::{identity_for, CompiledPatternList};
use crate::provider::RandomValueProvider;
use crate::resolver::FieldValueResolver;
use ignore::IgnorePolicy;

pub struct FillEngine {
    options: FillOptions,
    profile_index: Option<usize>,
    provider: RandomValueProvider,
}

impl FillEngine {
    pub fn new(options: FillOptions) -> Self {
        Self { options, profile_index: None, provider: RandomValueProvider::new() }
    }

    /// Pin the rule profile by index instead of selecting by URL.
    pub fn with_profile(mut self, index: usize) -> Self {
        self.profile_index = Some(index);
        self
    }

    /// Use a specific (typically seeded) randomness source.
    pub fn with_provider(mut self, provider: RandomValueProvider) -> Self {
        self.provider = provider;
        self
    }

    pub fn options(&self) -> &FillOptions {
        &self.options
    }

    /// Fill every fillable control the host exposes.
    pub fn fill_all(&mut self, host: &mut dyn FormHost) {
        let page_url = host.page_url();

        if url_is_blocked(&self.options, page_url.as_deref()) {
            debug!(url = page_url.as_deref().unwrap_or(""), "page is on the block list");
            return;
        }

        let profile_index = self
            .profile_index
            .or_else(|| profile_for_url(&self.options, page_url.as_deref()));

        let options = &self.options;
        let provider = &mut self.provider;

        let resolver = FieldValueResolver::new(options, profile_index, host.page_hostname());
        let policy = IgnorePolicy::new(options);
        let mut state = ConsistencyState::new();

        let controls = host.controls();

        // Selects first, so dependent inputs see their side effects early.
        let select_pass: Vec<&ControlDescriptor> =
            controls.iter().filter(|c| c.kind.is_select()).collect();
        let input_pass: Vec<&ControlDescriptor> = controls
            .iter()
            .filter(|c| {
                !c.kind.is_select()
                    && c.kind != ControlKind::TextArea
                    && c.kind != ControlKind::ContentEditable
            })
            .collect();
        let textarea_pass: Vec<&ControlDescriptor> = controls
            .iter()
            .filter(|c| c.kind == ControlKind::TextArea)
            .collect();
        let editable_pass: Vec<&ControlDescriptor> = controls
            .iter()
            .filter(|c| c.kind == ControlKind::ContentEditable)
            .collect();

        for pass in [select_pass, input_pass, textarea_pass, editable_pass] {
            for control in pass {
                fill_single(host, options, &resolver, &policy, provider, &mut state, control);
            }
        }

        // Corrective pass: earlier fills can repopulate dependent option
        // lists, so re-enumerate and revisit selects still without a value.
        host.settle();
        let refreshed = host.controls();
        for control in refreshed.iter().filter(|c| c.kind.is_select()) {
            if !control.select_has_value() {
                fill_single(host, options, &resolver, &policy, provider, &mut state, control);
            }
        }
    }

    /// Fill one control in isolation (the "fill this input" entry point).
    /// Uses a fresh consistency state, so confirmation fields generate
    /// independently.
    pub fn fill_one(&mut self, host: &mut dyn FormHost, control: &ControlDescriptor) {
        let page_url = host.page_url();

        if url_is_blocked(&self.options, page_url.as_deref()) {
            return;
        }

        let profile_index = self
            .profile_index
            .or_else(|| profile_for_url(&self.options, page_url.as_deref()));

        let options = &self.options;
        let provider = &mut self.provider;

        let resolver = FieldValueResolver::new(options, profile_index, host.page_hostname());
        let policy = IgnorePolicy::new(options);
        let mut state = ConsistencyState::new();

        fill_single(host, options, &resolver, &policy, provider, &mut state, control);
    }
}

fn fill_single(
    host: &mut dyn FormHost,
    options: &FillOptions,
    resolver: &FieldValueResolver<'_>,
    policy: &IgnorePolicy<'_>,
    provider: &mut RandomValueProvider,
    state: &mut ConsistencyState,
    control: &ControlDescriptor,
) {
    let identity = identity_for(control, &options.field_match);

    if policy.should_ignore(control, &identity) {
        return;
    }

    if let Some(action) = resolver.resolve(control, &identity, provider, state) {
        debug!(control = ?control.id, action = ?action, "filling control");
        host.apply(control.id, action);
        if options.trigger_events {
            host.notify_changed(control.id);
        }
    }

    host.settle();
}

fn url_is_blocked(options: &FillOptions, url: Option<&str>) -> bool {
    let Some(url) = url else {
        return false;
    };
    if options.url_matches_to_block.is_empty() {
        return false;
    }
    CompiledPatternList::compile(&options.url_matches_to_block).is_match(url)
}

/// First profile whose `urlMatch` pattern hits the page URL.
fn profile_for_url(options: &FillOptions, url: Option<&str>) -> Option<usize> {
    let url = url?;
    options.profiles.iter().position(|profile| {
        profile.url_match.as_deref().is_some_and(|pattern| {
            CompiledPatternList::compile(&[pattern.to_string()]).is_match(url)
        })
    })
}
