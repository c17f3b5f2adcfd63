//! Table personalization quick action.

use async_trait::async_trait;
use tracing::debug;

use action_core::{ChangeCommand, ControlMapEntry, ControlRole, QuickActionNode};
use action_runtime::{ActionStrategy, DialogKind, HostServices, PageView, Result};

/// Opens the host's personalization dialog for a table.
///
/// Entirely dialog-driven: the dialog itself persists whatever the user
/// changes, so execution produces no change commands.
pub struct PersonalizeTableStrategy {
    no_rows_message: String,
}

impl PersonalizeTableStrategy {
    pub fn new() -> Self {
        Self {
            no_rows_message: "table has no rows to personalize".to_string(),
        }
    }

    /// Overrides the localized disabled-node message.
    pub fn with_no_rows_message(mut self, message: impl Into<String>) -> Self {
        self.no_rows_message = message.into();
        self
    }
}

impl Default for PersonalizeTableStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionStrategy for PersonalizeTableStrategy {
    fn id(&self) -> &'static str {
        "personalize-table"
    }

    fn title_key(&self) -> &'static str {
        "QUICK_ACTION_PERSONALIZE_TABLE"
    }

    fn roles(&self) -> &[ControlRole] {
        &[ControlRole::Table]
    }

    fn refine_node(
        &self,
        node: &mut QuickActionNode,
        entry: &ControlMapEntry,
        view: &dyn PageView,
    ) {
        if entry.control.role == ControlRole::Table && view.row_count(&entry.control.id) == Some(0)
        {
            node.disable(self.no_rows_message.clone());
        }
    }

    async fn execute(
        &self,
        entry: &ControlMapEntry,
        host: &HostServices,
    ) -> Result<Vec<ChangeCommand>> {
        // Group paths are a select/scroll no-op
        if entry.control.role != ControlRole::Table {
            return Ok(Vec::new());
        }

        let opened = host
            .dialogs()
            .open(DialogKind::TablePersonalization, &entry.control.id)
            .await?;
        if !opened {
            debug!(
                target: "action::catalog",
                control = %entry.control.id,
                "host declined to open the personalization dialog"
            );
        }
        Ok(Vec::new())
    }
}
