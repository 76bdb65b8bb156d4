//! Email assembly: prefix + username part + suffix + domain part.

use formfill_core::rules::{EmailSettings, HostnameStrategy, UsernameStrategy};
use formfill_core::text::sanitize_text;

use crate::consistency::ConsistencyState;
use crate::provider::RandomValueProvider;

const FALLBACK_USERNAMES: &[&str] = &["jack", "jill"];
const FALLBACK_HOSTNAMES: &[&str] = &["example.com"];

/// Assemble an email address from the rule's settings and the pass's
/// consistency snapshot. `page_hostname` backs the `[hostname]` suffix
/// token.
pub fn build_email(
    provider: &mut RandomValueProvider,
    settings: &EmailSettings,
    state: &ConsistencyState,
    page_hostname: Option<&str>,
) -> String {
    let prefix = settings.prefix.clone().unwrap_or_default();
    let username = build_username(provider, settings, state);
    let suffix = build_suffix(settings, page_hostname);
    let domain = build_domain(provider, settings);

    format!("{prefix}{username}{suffix}{domain}")
}

fn build_username(
    provider: &mut RandomValueProvider,
    settings: &EmailSettings,
    state: &ConsistencyState,
) -> String {
    match settings.username {
        UsernameStrategy::List => {
            let fallback: Vec<String> =
                FALLBACK_USERNAMES.iter().map(|s| s.to_string()).collect();
            let usernames = settings
                .username_list
                .as_ref()
                .filter(|list| !list.is_empty())
                .unwrap_or(&fallback);
            provider.element(usernames).cloned().unwrap_or_default()
        }

        UsernameStrategy::Username => match state.previous_username.as_deref() {
            Some(previous) if !previous.trim().is_empty() => sanitize_text(previous),
            _ => provider.username(),
        },

        UsernameStrategy::Name => {
            let first = state
                .previous_first_name
                .clone()
                .unwrap_or_else(|| provider.first_name().to_lowercase());
            let last = state
                .previous_last_name
                .clone()
                .unwrap_or_else(|| provider.last_name().to_lowercase());
            sanitize_text(&format!("{first}.{last}"))
        }

        UsernameStrategy::Regex => match settings.username_regex.as_deref() {
            Some(template) if !template.is_empty() => provider.regex_string(template),
            _ => provider.username(),
        },

        UsernameStrategy::Random => provider.username(),
    }
}

fn build_domain(provider: &mut RandomValueProvider, settings: &EmailSettings) -> String {
    if settings.hostname == HostnameStrategy::List {
        let fallback: Vec<String> =
            FALLBACK_HOSTNAMES.iter().map(|s| s.to_string()).collect();
        let hostnames = settings
            .hostname_list
            .as_ref()
            .filter(|list| !list.is_empty())
            .unwrap_or(&fallback);

        if let Some(domain) = provider.element(hostnames) {
            if !domain.is_empty() {
                if domain.contains('@') {
                    return domain.clone();
                }
                return format!("@{domain}");
            }
        }
    }

    format!("@{}", provider.domain_name())
}

fn build_suffix(settings: &EmailSettings, page_hostname: Option<&str>) -> String {
    let suffix = settings.suffix.clone().unwrap_or_default();
    suffix.replace("[hostname]", page_hostname.unwrap_or(""))
}
