//! FormHost trait — the injected driver boundary.
//!
//! The engine never touches a DOM. A host (browser content script, test
//! harness, headless driver) enumerates controls as `ControlDescriptor`s
//! and applies the engine's `FillAction`s back to the real elements. The
//! default no-op hooks keep a minimal host minimal.

use crate::controls::{ControlDescriptor, ControlId};

/// What the engine decided a control should receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillAction {
    /// Set a scalar control's value.
    SetValue(String),
    /// Check or uncheck a checkbox.
    SetChecked(bool),
    /// Check one radio in the named group.
    CheckRadio { name: String, value: String },
    /// Choose one option of a single select.
    SelectOne(String),
    /// Choose a set of options of a multiple select.
    SelectMany(Vec<String>),
    /// Set the text of a content-editable region.
    SetText(String),
    /// Attach a synthetic file of the given kind to a file input.
    AttachFile(FileKind),
}

/// Kind of synthetic file to attach. Building the actual file payload is
/// the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Image,
    Pdf,
}

/// Host capability interface consumed by the fill engine.
pub trait FormHost {
    /// All candidate controls, in document order. Called again for the
    /// corrective select pass, so it must reflect mutations made so far.
    fn controls(&mut self) -> Vec<ControlDescriptor>;

    /// Full page URL, for the block list and profile selection.
    fn page_url(&self) -> Option<String> {
        None
    }

    /// Page hostname, substituted for the `[hostname]` email-suffix token.
    fn page_hostname(&self) -> Option<String> {
        None
    }

    /// Write an action back to the underlying element.
    fn apply(&mut self, id: ControlId, action: FillAction);

    /// Dispatch synthetic input/change events for the element. Only called
    /// when the options enable event triggering.
    fn notify_changed(&mut self, id: ControlId) {
        let _ = id;
    }

    /// Yield point between controls and before the corrective select pass,
    /// so event-driven pages can react between mutations.
    fn settle(&mut self) {}
}
