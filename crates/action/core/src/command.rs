//! Change commands produced by action execution.

use crate::control::ControlId;

/// Opaque description of one reversible mutation to persisted application
/// configuration.
///
/// The framework only produces these; applying (and reverting) them is the
/// job of the host's command-application layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChangeCommand {
    /// Control the change is anchored to
    pub selector: ControlId,
    /// Host-side change handler identifier
    pub change_type: String,
    /// Handler-specific payload, opaque to the framework
    pub content: serde_json::Value,
}

impl ChangeCommand {
    pub fn new(
        selector: ControlId,
        change_type: impl Into<String>,
        content: serde_json::Value,
    ) -> Self {
        Self {
            selector,
            change_type: change_type.into(),
            content,
        }
    }
}
