//! The resolver's view of a form control.
//!
//! The host boundary builds one `ControlDescriptor` per fillable control,
//! in document order. Everything the engine needs — identity sources,
//! native constraints, current value, option lists — travels in the
//! descriptor, so the engine never touches a DOM.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Opaque per-pass handle the host uses to route `FillAction`s back to the
/// underlying element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlId(pub u64);

/// Control type tag, mirroring HTML input types plus the non-input kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlKind {
    Text,
    Email,
    Password,
    Checkbox,
    Radio,
    Date,
    Datetime,
    DatetimeLocal,
    Time,
    Month,
    Week,
    Number,
    Range,
    Tel,
    Url,
    Color,
    Search,
    File,
    Hidden,
    /// button / submit / reset / image — never filled.
    Button,
    Select {
        multiple: bool,
    },
    TextArea,
    ContentEditable,
}

impl ControlKind {
    pub fn is_select(&self) -> bool {
        matches!(self, ControlKind::Select { .. })
    }
}

/// Native constraint attributes, kept as the raw attribute strings.
///
/// `min`/`max`/`step` are numbers for number inputs and dates for date
/// inputs; the resolver parses them in context and ignores what does not
/// parse, the same way a browser would.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NativeConstraints {
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<String>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub pattern: Option<String>,
    pub accept: Option<String>,
}

/// One option of a select control (or one radio of a named group).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), disabled: false, selected: false }
    }
}

/// A form control as the engine sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlDescriptor {
    pub id: ControlId,
    pub kind: ControlKind,

    // Identity sources (matching subjects, gated by `MatchSettings`).
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dom_id: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Text of `<label>` elements associated with the control.
    #[serde(default)]
    pub label_texts: Vec<String>,
    #[serde(default)]
    pub aria_label: Option<String>,
    /// Text of elements referenced by `aria-labelledby`.
    #[serde(default)]
    pub aria_labelledby_texts: Vec<String>,
    /// Values of any configured custom attributes, keyed by attribute name.
    #[serde(default)]
    pub custom_attributes: HashMap<String, String>,

    #[serde(default)]
    pub constraints: NativeConstraints,

    /// Current value, for the ignore-filled policy and select checks.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub readonly: bool,

    /// Select options, or the values of the radio group this control
    /// belongs to (enabled members only).
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

fn default_true() -> bool {
    true
}

impl ControlDescriptor {
    /// A visible, unconstrained control of the given kind. Tests and hosts
    /// start from this and set what they know.
    pub fn new(id: ControlId, kind: ControlKind) -> Self {
        Self {
            id,
            kind,
            name: String::new(),
            dom_id: String::new(),
            class_name: String::new(),
            placeholder: None,
            label_texts: Vec::new(),
            aria_label: None,
            aria_labelledby_texts: Vec::new(),
            custom_attributes: HashMap::new(),
            constraints: NativeConstraints::default(),
            value: None,
            checked: false,
            visible: true,
            disabled: false,
            readonly: false,
            options: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_dom_id(mut self, dom_id: impl Into<String>) -> Self {
        self.dom_id = dom_id.into();
        self
    }

    /// True when the select has a chosen value that is present in its
    /// option list.
    pub fn select_has_value(&self) -> bool {
        match self.value.as_deref() {
            None => false,
            Some(v) if v.trim().is_empty() => false,
            Some(v) => self.options.iter().any(|o| o.value == v),
        }
    }
}
