//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from host collaborators, path validation, and strategy
//! execution so embedding hosts can bubble them up with consistent context.

use thiserror::Error;

use action_core::PathError;

use crate::definition::DefinitionState;
use crate::host::HostError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// `execute()` is only valid in the Ready state; callers must
    /// re-initialize after invalidation.
    #[error("definition is {state}, initialize must complete before execute")]
    NotReady { state: DefinitionState },

    /// Malformed path received over the transport boundary. Distinct from a
    /// stale-but-well-formed path, which resolves to an empty command list.
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Host(#[from] HostError),

    /// A context value the action needs at execution time (page id, entity
    /// set) could not be determined.
    #[error("required execution context missing: {what}")]
    MissingContext { what: &'static str },

    #[error("no action definition registered with id {id:?}")]
    UnknownAction { id: String },
}
