//! Per-variant strategy interface.
//!
//! One generic [`crate::definition::ActionDefinition`] serves every concrete
//! quick action; the variant-specific behavior (which controls to discover,
//! node-level business rules, what execution does) is supplied through this
//! trait instead of an inheritance chain. Concrete strategies are thin,
//! host-specific glue and live in the catalog crate.

use async_trait::async_trait;

use action_core::{ChangeCommand, ControlMapEntry, ControlRole, QuickActionNode};

use crate::api::Result;
use crate::host::{HostServices, PageView};

#[async_trait]
pub trait ActionStrategy: Send + Sync {
    /// Stable identifier of the action, used for dispatch and logging.
    fn id(&self) -> &'static str;

    /// Resource-bundle key of the action's display title.
    fn title_key(&self) -> &'static str;

    /// Control roles this action discovers. An empty slice makes the action
    /// never applicable (the version-gating escape hatch: report nothing,
    /// silently).
    fn roles(&self) -> &[ControlRole];

    /// Whether executing this action is expected to change the control
    /// tree's shape, invalidating every served path.
    fn force_refresh(&self) -> bool {
        false
    }

    /// Node-specific business rules, run as a synchronous pass over the
    /// just-built tree. The default accepts every node as-is.
    ///
    /// Implementations flip `enabled`/`tooltip` on the node based on the
    /// entry's referenced control (e.g. "table has no rows", "no header
    /// toolbar found").
    fn refine_node(&self, node: &mut QuickActionNode, entry: &ControlMapEntry, view: &dyn PageView) {
        let _ = (node, entry, view);
    }

    /// Performs the action against a resolved side-table entry.
    ///
    /// Selection, tab switching, and scrolling have already happened by the
    /// time this runs; implementations add their own side effects (opening a
    /// dialog) and produce zero or more change commands for the host's
    /// command-application layer.
    async fn execute(&self, entry: &ControlMapEntry, host: &HostServices)
    -> Result<Vec<ChangeCommand>>;
}
