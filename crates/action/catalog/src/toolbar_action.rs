//! Custom toolbar action quick action.

use async_trait::async_trait;
use serde_json::json;

use action_core::{ChangeCommand, ControlMapEntry, ControlRole, QuickActionNode};
use action_runtime::{ActionStrategy, DialogKind, HostServices, PageView, Result};

/// Adds a custom action to a table's header toolbar.
///
/// Execution opens the action editor dialog and, when the user confirms,
/// produces a fragment-addition change command. Adding an action changes the
/// control tree's shape, so the definition invalidates itself afterwards.
pub struct AddToolbarActionStrategy {
    no_toolbar_message: String,
}

impl AddToolbarActionStrategy {
    pub fn new() -> Self {
        Self {
            no_toolbar_message: "table header toolbar not found".to_string(),
        }
    }

    /// Overrides the localized disabled-node message.
    pub fn with_no_toolbar_message(mut self, message: impl Into<String>) -> Self {
        self.no_toolbar_message = message.into();
        self
    }
}

impl Default for AddToolbarActionStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionStrategy for AddToolbarActionStrategy {
    fn id(&self) -> &'static str {
        "add-toolbar-action"
    }

    fn title_key(&self) -> &'static str {
        "QUICK_ACTION_ADD_TOOLBAR_ACTION"
    }

    fn roles(&self) -> &[ControlRole] {
        &[ControlRole::Table]
    }

    fn force_refresh(&self) -> bool {
        true
    }

    fn refine_node(
        &self,
        node: &mut QuickActionNode,
        entry: &ControlMapEntry,
        view: &dyn PageView,
    ) {
        if entry.control.role == ControlRole::Table
            && !view.has_header_toolbar(&entry.control.id)
        {
            node.disable(self.no_toolbar_message.clone());
        }
    }

    async fn execute(
        &self,
        entry: &ControlMapEntry,
        host: &HostServices,
    ) -> Result<Vec<ChangeCommand>> {
        if entry.control.role != ControlRole::Table {
            return Ok(Vec::new());
        }

        let confirmed = host
            .dialogs()
            .open(DialogKind::ToolbarActionEditor, &entry.control.id)
            .await?;
        if !confirmed {
            return Ok(Vec::new());
        }

        let view = host.view();
        let anchor = view
            .short_id(&entry.control.id)
            .unwrap_or_else(|| entry.control.id.as_str().to_string());
        Ok(vec![ChangeCommand::new(
            entry.control.id.clone(),
            "addFragment",
            json!({
                "fragmentPath": format!("fragments/{anchor}-toolbar-action.fragment.xml"),
                "targetAggregation": "actions",
                "index": 0,
            }),
        )])
    }
}
