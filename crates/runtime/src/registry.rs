//! Registry of action definitions for one editor session.
//!
//! The registry is what the embedding orchestrator talks to: it initializes
//! every registered definition once per page display, serializes the
//! applicable subset for the remote editor, and dispatches path-addressed
//! execution back to the owning definition. Lifecycle events go out on a
//! broadcast channel so the orchestrator can react to per-instance
//! invalidation.

use tokio::sync::broadcast;
use tracing::{debug, error};

use action_core::ChangeCommand;

use crate::api::{ActionEvent, Result, RuntimeError};
use crate::config::RegistryConfig;
use crate::definition::{ActionDefinition, DefinitionState, QuickActionObject};

pub struct ActionRegistry {
    definitions: Vec<ActionDefinition>,
    events: broadcast::Sender<ActionEvent>,
}

impl ActionRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity);
        Self {
            definitions: Vec::new(),
            events,
        }
    }

    pub fn register(&mut self, definition: ActionDefinition) {
        debug!(
            target: "action::registry",
            action = definition.id(),
            "registered definition"
        );
        self.definitions.push(definition);
    }

    /// Subscribe to lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<ActionEvent> {
        self.events.subscribe()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Initializes every registered definition, serially.
    ///
    /// Definitions are independent: one failing initialize is logged and
    /// leaves that definition not applicable, without aborting the rest or
    /// corrupting their state.
    pub async fn initialize_all(&mut self) {
        for definition in &mut self.definitions {
            let action_id = definition.id();
            match definition.initialize().await {
                Ok(()) => {
                    let _ = self.events.send(ActionEvent::Initialized {
                        action_id,
                        applicable: definition.is_applicable(),
                    });
                }
                Err(err) => {
                    error!(
                        target: "action::registry",
                        action = action_id,
                        error = %err,
                        "definition failed to initialize"
                    );
                }
            }
        }
    }

    /// Serializable snapshot of every applicable definition, in registration
    /// order. Side-effect free.
    pub fn action_objects(&self) -> Vec<QuickActionObject> {
        self.definitions
            .iter()
            .filter_map(|d| d.action_object())
            .collect()
    }

    /// Dispatches a path-addressed execution to the owning definition.
    pub async fn execute(&mut self, action_id: &str, path: &str) -> Result<Vec<ChangeCommand>> {
        let Some(definition) = self
            .definitions
            .iter_mut()
            .find(|d| d.id() == action_id)
        else {
            return Err(RuntimeError::UnknownAction {
                id: action_id.to_string(),
            });
        };

        let commands = definition.execute(path).await?;
        let id = definition.id();
        let _ = self.events.send(ActionEvent::Executed {
            action_id: id,
            path: path.to_string(),
            commands: commands.len(),
        });
        if definition.state() == DefinitionState::Invalidated {
            let _ = self.events.send(ActionEvent::TreeInvalidated { action_id: id });
        }
        Ok(commands)
    }

    /// Invalidates every definition, e.g. on page navigation. All served
    /// paths become stale; nothing is rebuilt until the next
    /// [`Self::initialize_all`].
    pub fn invalidate_all(&mut self) {
        for definition in &mut self.definitions {
            definition.invalidate();
        }
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}
