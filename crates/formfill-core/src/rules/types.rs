//! Field rule types.
//!
//! A `FieldRule` binds an ordered list of identity match patterns to a
//! generation kind. The kind enumeration is closed: the resolver matches on
//! it exhaustively, so an unsupported kind is a compile error rather than a
//! silent fallthrough. Wire names mirror the options format the boundary
//! stores (`match`, `decimalPlaces`, `emailHostnameList`, ...).

use serde::{Deserialize, Serialize};

/// A named, pattern-matched generation rule.
///
/// Rules are immutable during a fill pass; the engine compiles their
/// patterns once per pass and scans them in order, first match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRule {
    /// Display name, e.g. "Date of Birth".
    pub name: String,
    /// Case-insensitive regex fragments tested against the identity string.
    #[serde(rename = "match")]
    pub match_patterns: Vec<String>,
    /// Generation kind plus its kind-specific parameters.
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldRule {
    pub fn tag(&self) -> KindTag {
        self.kind.tag()
    }
}

/// Generation kind, tagged `"type"` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldKind {
    #[serde(rename = "username")]
    Username,

    #[serde(rename = "first-name")]
    FirstName,

    #[serde(rename = "last-name")]
    LastName,

    #[serde(rename = "full-name")]
    FullName,

    #[serde(rename = "street_address")]
    StreetAddress,

    #[serde(rename = "country")]
    Country,

    #[serde(rename = "organization")]
    Organization,

    #[serde(rename = "url")]
    Url,

    #[serde(rename = "email")]
    Email(EmailSettings),

    #[serde(rename = "telephone")]
    Telephone {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        template: Option<String>,
    },

    #[serde(rename = "number")]
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(
            rename = "decimalPlaces",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        decimal_places: Option<u32>,
    },

    #[serde(rename = "date")]
    Date {
        /// Output format template (moment-style tokens, e.g. "DD-MM-YYYY").
        #[serde(default, skip_serializing_if = "Option::is_none")]
        template: Option<String>,
        /// Day offset from today when `minDate` is absent. May be negative.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        /// Day offset from today when `maxDate` is absent. May be negative.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
        /// Absolute lower bound, ISO `YYYY-MM-DD`. Wins over `min`.
        #[serde(rename = "minDate", default, skip_serializing_if = "Option::is_none")]
        min_date: Option<String>,
        /// Absolute upper bound, ISO `YYYY-MM-DD`. Wins over `max`.
        #[serde(rename = "maxDate", default, skip_serializing_if = "Option::is_none")]
        max_date: Option<String>,
    },

    #[serde(rename = "text")]
    Text {
        /// Minimum word count (default 10).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<u32>,
        /// Maximum word count (default 30).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
        #[serde(
            rename = "maxLength",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        max_length: Option<u32>,
    },

    #[serde(rename = "alphanumeric")]
    Alphanumeric {
        #[serde(default)]
        template: String,
    },

    #[serde(rename = "regex")]
    Regex {
        #[serde(default)]
        template: String,
    },

    #[serde(rename = "randomized-list")]
    RandomizedList {
        #[serde(default)]
        list: Vec<String>,
    },
}

impl FieldKind {
    /// The bare kind discriminant, used for allowed-kind filtering.
    pub fn tag(&self) -> KindTag {
        match self {
            FieldKind::Username => KindTag::Username,
            FieldKind::FirstName => KindTag::FirstName,
            FieldKind::LastName => KindTag::LastName,
            FieldKind::FullName => KindTag::FullName,
            FieldKind::StreetAddress => KindTag::StreetAddress,
            FieldKind::Country => KindTag::Country,
            FieldKind::Organization => KindTag::Organization,
            FieldKind::Url => KindTag::Url,
            FieldKind::Email(_) => KindTag::Email,
            FieldKind::Telephone { .. } => KindTag::Telephone,
            FieldKind::Number { .. } => KindTag::Number,
            FieldKind::Date { .. } => KindTag::Date,
            FieldKind::Text { .. } => KindTag::Text,
            FieldKind::Alphanumeric { .. } => KindTag::Alphanumeric,
            FieldKind::Regex { .. } => KindTag::Regex,
            FieldKind::RandomizedList { .. } => KindTag::RandomizedList,
        }
    }
}

/// Kind discriminant without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    Username,
    FirstName,
    LastName,
    FullName,
    StreetAddress,
    Country,
    Organization,
    Url,
    Email,
    Telephone,
    Number,
    Date,
    Text,
    Alphanumeric,
    Regex,
    RandomizedList,
}

/// Parameters of an email rule: how the username and domain parts are built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailSettings {
    #[serde(rename = "emailPrefix", default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Suffix between username and domain; a `[hostname]` token is replaced
    /// with the current page's hostname.
    #[serde(rename = "emailSuffix", default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(rename = "emailUsername", default)]
    pub username: UsernameStrategy,
    #[serde(
        rename = "emailUsernameList",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub username_list: Option<Vec<String>>,
    #[serde(
        rename = "emailUsernameRegEx",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub username_regex: Option<String>,
    #[serde(rename = "emailHostname", default)]
    pub hostname: HostnameStrategy,
    #[serde(
        rename = "emailHostnameList",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hostname_list: Option<Vec<String>>,
}

/// How the username part of an email is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsernameStrategy {
    /// A fresh random username.
    #[default]
    Random,
    /// Uniform pick from the configured username list.
    List,
    /// Reuse the pass's previous username, sanitized; fresh when none.
    Username,
    /// `first.last` from the pass's previous names, lowercased, sanitized.
    Name,
    /// Expand the configured regex template.
    Regex,
}

/// How the domain part of an email is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostnameStrategy {
    /// A random plausible domain.
    #[default]
    Random,
    /// Uniform pick from the configured hostname list.
    List,
}
