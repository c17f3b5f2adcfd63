//! Lifecycle events published by the registry.

/// Broadcast notification about one action definition's lifecycle.
///
/// The embedding orchestrator subscribes to learn when served trees change
/// underneath it. Invalidation is per definition; a host that prefers a
/// system-wide rebuild reacts to [`ActionEvent::TreeInvalidated`] by
/// re-initializing the rest itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionEvent {
    /// A definition finished initializing (successfully).
    Initialized {
        action_id: &'static str,
        applicable: bool,
    },

    /// A definition executed a path and produced commands.
    Executed {
        action_id: &'static str,
        path: String,
        commands: usize,
    },

    /// A definition invalidated its tree after a shape-changing execution;
    /// its cached paths are now stale and it must be re-initialized.
    TreeInvalidated { action_id: &'static str },
}
