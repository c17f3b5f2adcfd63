//! Host collaborator traits and their bundle.
//!
//! The framework is a pure in-process orchestration layer between a live
//! control tree and a remote editor; everything it knows about the host
//! arrives through the traits in this module. Implementations are supplied by
//! the embedding runtime and injected at construction time, so the framework
//! is testable without a live host (see [`fixtures`]).

mod fixtures;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use action_core::{ControlId, ControlRef, ControlRole, StructuralContext, TabBar};

pub use fixtures::{
    StaticCapabilityProbe, StaticControlIndex, StaticDialogFactory, StaticLexicon, StaticPageView,
};

/// Unified error for host collaborator failures.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("control index query failed: {0}")]
    Index(String),

    #[error("resource bundle has no text for key {key:?}")]
    MissingText { key: String },

    #[error("dialog could not be opened: {0}")]
    Dialog(String),

    #[error("capability query failed: {0}")]
    Capability(String),
}

/// Per-page snapshot of live control references, queried by role.
///
/// The framework never caches results across render generations; every
/// initialize issues a fresh lookup.
#[async_trait]
pub trait ControlIndex: Send + Sync {
    /// Returns the controls of the given roles reachable from the active
    /// page, in the index's own iteration order.
    async fn lookup(&self, roles: &[ControlRole]) -> Result<Vec<ControlRef>, HostError>;
}

/// Handle onto the active page's live tree.
///
/// All methods are synchronous: the tree is in-memory on the host side.
/// Ancestor walks feed hierarchy construction; the probe methods feed
/// per-node enablement rules; the remaining methods are execution side
/// effects (selection, scrolling, tab switching).
pub trait PageView: Send + Sync {
    /// Structural ancestry of a control, discovered by ancestor walk.
    fn structural_context(&self, control: &ControlId) -> Option<StructuralContext>;

    /// The page's first tab-filter bearing container, if any.
    fn tab_bar(&self) -> Option<TabBar>;

    /// Header/title of the control itself, when one is discoverable.
    fn control_title(&self, control: &ControlId) -> Option<String>;

    /// Page-local short id of a control, used in change command payloads.
    fn short_id(&self, control: &ControlId) -> Option<String>;

    /// Stable identifier of the active page, when one can be determined.
    fn page_id(&self) -> Option<String>;

    fn has_header_toolbar(&self, control: &ControlId) -> bool;

    fn row_count(&self, control: &ControlId) -> Option<usize>;

    fn variant_management_enabled(&self, control: &ControlId) -> bool;

    /// Selects/focuses the overlay associated with a control.
    fn select(&self, control: &ControlId);

    fn scroll_into_view(&self, control: &ControlId);

    /// Switches a tab-filter container to the given key.
    fn switch_tab(&self, tab_bar: &ControlId, key: &str);
}

/// Localized resource bundle.
#[async_trait]
pub trait Lexicon: Send + Sync {
    /// Resolves a text key with positional `{0}`/`{1}` placeholders.
    async fn text(&self, key: &str, args: &[&str]) -> Result<String, HostError>;
}

/// Modal editors the host can open as an execution side effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DialogKind {
    TablePersonalization,
    ToolbarActionEditor,
}

#[async_trait]
pub trait DialogFactory: Send + Sync {
    /// Opens a modal editor anchored to a control. Returns whether the host
    /// actually opened one.
    async fn open(&self, dialog: DialogKind, control: &ControlId) -> Result<bool, HostError>;
}

/// Host feature/capability queries used by chain validators.
#[async_trait]
pub trait CapabilityProbe: Send + Sync {
    async fn supports(&self, capability: &str) -> Result<bool, HostError>;

    /// Whether the host currently holds unsaved design-time changes.
    async fn has_unsaved_changes(&self) -> Result<bool, HostError>;
}

/// Bundle of all host collaborators, injected into every definition.
///
/// Cheap to clone; the collaborators themselves are shared behind `Arc`.
#[derive(Clone)]
pub struct HostServices {
    index: Arc<dyn ControlIndex>,
    view: Arc<dyn PageView>,
    lexicon: Arc<dyn Lexicon>,
    dialogs: Arc<dyn DialogFactory>,
    capabilities: Arc<dyn CapabilityProbe>,
}

impl HostServices {
    pub fn new(
        index: Arc<dyn ControlIndex>,
        view: Arc<dyn PageView>,
        lexicon: Arc<dyn Lexicon>,
        dialogs: Arc<dyn DialogFactory>,
        capabilities: Arc<dyn CapabilityProbe>,
    ) -> Self {
        Self {
            index,
            view,
            lexicon,
            dialogs,
            capabilities,
        }
    }

    pub fn index(&self) -> &dyn ControlIndex {
        self.index.as_ref()
    }

    pub fn view(&self) -> &dyn PageView {
        self.view.as_ref()
    }

    pub fn lexicon(&self) -> &dyn Lexicon {
        self.lexicon.as_ref()
    }

    pub fn dialogs(&self) -> &dyn DialogFactory {
        self.dialogs.as_ref()
    }

    pub fn capabilities(&self) -> &dyn CapabilityProbe {
        self.capabilities.as_ref()
    }

    /// Localized text with a fallback when the bundle cannot resolve the
    /// key. Label lookups must never fail discovery, only degrade.
    pub async fn text_or(&self, key: &str, args: &[&str], fallback: &str) -> String {
        match self.lexicon.text(key, args).await {
            Ok(text) => text,
            Err(_) => fallback.to_string(),
        }
    }
}
