//! Variant management enablement quick action.

use async_trait::async_trait;
use serde_json::json;

use action_core::{ChangeCommand, ControlMapEntry, ControlRole, QuickActionNode};
use action_runtime::{ActionStrategy, HostServices, PageView, Result, RuntimeError};

/// Turns on variant management for a table via a page configuration change.
///
/// The produced command is page-scoped, so execution requires the active
/// page id; a page without one is a contract violation, not a silent no-op.
pub struct EnableVariantManagementStrategy {
    already_enabled_message: String,
}

impl EnableVariantManagementStrategy {
    pub fn new() -> Self {
        Self {
            already_enabled_message: "variant management is already enabled".to_string(),
        }
    }

    /// Overrides the localized disabled-node message.
    pub fn with_already_enabled_message(mut self, message: impl Into<String>) -> Self {
        self.already_enabled_message = message.into();
        self
    }
}

impl Default for EnableVariantManagementStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionStrategy for EnableVariantManagementStrategy {
    fn id(&self) -> &'static str {
        "enable-variant-management"
    }

    fn title_key(&self) -> &'static str {
        "QUICK_ACTION_ENABLE_VARIANT_MANAGEMENT"
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
        if entry.control.role == ControlRole::Table
            && view.variant_management_enabled(&entry.control.id)
        {
            node.disable(self.already_enabled_message.clone());
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

        let Some(page) = host.view().page_id() else {
            return Err(RuntimeError::MissingContext { what: "page id" });
        };
        let table = host
            .view()
            .short_id(&entry.control.id)
            .unwrap_or_else(|| entry.control.id.as_str().to_string());

        Ok(vec![ChangeCommand::new(
            entry.control.id.clone(),
            "propertyChange",
            json!({
                "page": page,
                "table": table,
                "property": "variantManagement",
                "newValue": true,
            }),
        )])
    }
}
