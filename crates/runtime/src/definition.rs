//! The generic per-action runtime.
//!
//! One [`ActionDefinition`] instance exists per registered quick action. It
//! owns the hierarchy produced by the last initialize generation, the
//! validator chain, and the injected host services, and it drives the
//! per-instance lifecycle: discover and build on `initialize()`, serialize
//! through `action_object()`, resolve and perform on `execute()`.

use tracing::{debug, warn};

use action_core::{
    ActionPath, ActionTree, ChangeCommand, ControlObservation, HierarchyBuilder, LabelCatalog,
    PageSnapshot, QuickActionNode, TabBar,
};

use crate::api::{Result, RuntimeError};
use crate::host::HostServices;
use crate::strategy::ActionStrategy;
use crate::validator::ValidatorChain;

/// Resource-bundle keys for the builder's fallback labels.
const UNNAMED_LABEL_KEY: &str = "ACTION_LABEL_UNNAMED";
const SECTION_SUFFIX_KEY: &str = "ACTION_LABEL_SECTION_SUFFIX";

/// Lifecycle of one definition instance.
///
/// `execute()` is only valid in `Ready`. After a shape-changing execution the
/// instance moves to `Invalidated` and must be re-initialized before any
/// further execution; served paths from the old generation are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DefinitionState {
    Uninitialized,
    Initializing,
    Ready,
    Invalidated,
}

/// Serializable projection of one applicable definition, shipped to the
/// remote editor surface alongside its tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickActionObject {
    pub id: String,
    pub title: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default)]
    pub children: Vec<QuickActionNode>,
}

/// Runtime for one registered quick action.
pub struct ActionDefinition {
    strategy: Box<dyn ActionStrategy>,
    chain: ValidatorChain,
    host: HostServices,
    state: DefinitionState,
    tree: ActionTree,
    tab_bar: Option<TabBar>,
    title: String,
    enabled: bool,
    tooltip: Option<String>,
}

impl ActionDefinition {
    pub fn new(
        strategy: impl ActionStrategy + 'static,
        chain: ValidatorChain,
        host: HostServices,
    ) -> Self {
        Self {
            strategy: Box::new(strategy),
            chain,
            host,
            state: DefinitionState::Uninitialized,
            tree: ActionTree::new(),
            tab_bar: None,
            title: String::new(),
            enabled: true,
            tooltip: None,
        }
    }

    pub fn id(&self) -> &'static str {
        self.strategy.id()
    }

    pub fn state(&self) -> DefinitionState {
        self.state
    }

    /// Whether the strategy expects execution to change the tree's shape.
    pub fn force_refresh(&self) -> bool {
        self.strategy.force_refresh()
    }

    /// Discovers controls and rebuilds the tree and side table wholesale.
    ///
    /// Callers must serialize invocations per instance (await completion
    /// before issuing the next); `&mut self` enforces that within one owner.
    pub async fn initialize(&mut self) -> Result<()> {
        self.state = DefinitionState::Initializing;
        match self.rebuild().await {
            Ok(()) => {
                self.state = DefinitionState::Ready;
                debug!(
                    target: "action::definition",
                    action = self.id(),
                    nodes = self.tree.len(),
                    enabled = self.enabled,
                    "initialized"
                );
                Ok(())
            }
            Err(error) => {
                self.state = DefinitionState::Uninitialized;
                Err(error)
            }
        }
    }

    async fn rebuild(&mut self) -> Result<()> {
        let controls = self.host.index().lookup(self.strategy.roles()).await?;

        let view = self.host.view();
        let tab_bar = view.tab_bar();
        let observations: Vec<ControlObservation> = controls
            .into_iter()
            .map(|control| ControlObservation {
                title: view.control_title(&control.id),
                context: view.structural_context(&control.id),
                control,
            })
            .collect();

        let defaults = LabelCatalog::default();
        let labels = LabelCatalog {
            unnamed: self
                .host
                .text_or(UNNAMED_LABEL_KEY, &[], &defaults.unnamed)
                .await,
            section_suffix: self
                .host
                .text_or(SECTION_SUFFIX_KEY, &[], &defaults.section_suffix)
                .await,
        };

        let outcome = HierarchyBuilder::new(labels).build(PageSnapshot {
            tab_bar: tab_bar.clone(),
            controls: observations,
        });
        if outcome.skipped > 0 {
            debug!(
                target: "action::definition",
                action = self.id(),
                skipped = outcome.skipped,
                "dropped controls with unresolvable ancestry"
            );
        }

        let objections = self.chain.run(&self.host).await;
        self.enabled = objections.is_empty();
        self.tooltip = objections.into_iter().next().map(|e| e.message);

        self.title = self
            .host
            .text_or(self.strategy.title_key(), &[], self.strategy.id())
            .await;

        // Per-node pass: node-specific rules over the just-built tree
        let mut tree = outcome.tree;
        let view = self.host.view();
        tree.visit_mut(|node, entry| self.strategy.refine_node(node, entry, view));

        self.tree = tree;
        self.tab_bar = tab_bar;
        Ok(())
    }

    /// Applicability per the served-tree contract: the host UI shows a
    /// definition iff discovery produced at least one top-level child.
    pub fn is_applicable(&self) -> bool {
        self.state == DefinitionState::Ready && !self.tree.is_empty()
    }

    /// Serializable snapshot of the current generation, or `None` when the
    /// definition is not applicable.
    ///
    /// Side-effect free; the returned object carries no live references.
    pub fn action_object(&self) -> Option<QuickActionObject> {
        if !self.is_applicable() {
            return None;
        }
        Some(QuickActionObject {
            id: self.id().to_string(),
            title: self.title.clone(),
            enabled: self.enabled,
            tooltip: self.tooltip.clone(),
            children: self.tree.roots().to_vec(),
        })
    }

    /// Resolves a served path and performs the action.
    ///
    /// A well-formed path absent from the current side table resolves to an
    /// empty command list: the remote UI legitimately races page navigation,
    /// and a stale selection must not fail. Malformed paths are a contract
    /// violation and error out.
    pub async fn execute(&mut self, path: &str) -> Result<Vec<ChangeCommand>> {
        if self.state != DefinitionState::Ready {
            return Err(RuntimeError::NotReady { state: self.state });
        }

        let path = ActionPath::parse(path)?;
        let Some(entry) = self.tree.entry(&path) else {
            debug!(
                target: "action::definition",
                action = self.id(),
                path = %path,
                "stale path, tree was rebuilt since serialization"
            );
            return Ok(Vec::new());
        };

        let view = self.host.view();
        view.select(&entry.control.id);
        if let Some(key) = &entry.tab_key
            && let Some(bar) = &self.tab_bar
        {
            view.switch_tab(&bar.id, key);
        }
        view.scroll_into_view(&entry.control.id);

        let commands = self.strategy.execute(entry, &self.host).await?;

        if self.strategy.force_refresh() {
            self.state = DefinitionState::Invalidated;
            debug!(
                target: "action::definition",
                action = self.id(),
                "tree shape changed, served paths invalidated"
            );
        }

        Ok(commands)
    }

    /// Drops the current generation without rebuilding, e.g. on page
    /// navigation. Served paths become stale immediately.
    pub fn invalidate(&mut self) {
        if self.state == DefinitionState::Ready {
            self.state = DefinitionState::Invalidated;
        } else if self.state == DefinitionState::Initializing {
            warn!(
                target: "action::definition",
                action = self.id(),
                "invalidated while initializing; result will be discarded by the next initialize"
            );
        }
    }
}
