//! Enablement verdicts.
//!
//! A validator either raises no objection or produces a typed, user-facing
//! error; success is represented by the absence of a result.

use thiserror::Error;

/// A user-facing objection to enabling an action.
///
/// Non-fatal by design: the action stays visible but disabled, with the
/// message as tooltip, and the user can recover by changing application
/// state and re-triggering discovery.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnablementError {
    pub message: String,
}

impl EnablementError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome of one validator run.
pub type EnablementResult = Result<(), EnablementError>;
