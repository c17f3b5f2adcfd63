//! In-memory host implementations.
//!
//! Deterministic stand-ins for every collaborator trait, used by this
//! crate's tests and by catalog integration suites. Side-effecting page-view
//! methods record their calls so tests can assert on them.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use action_core::{ControlId, ControlRef, ControlRole, StructuralContext, TabBar};

use super::{
    CapabilityProbe, ControlIndex, DialogFactory, DialogKind, HostError, Lexicon, PageView,
};

/// Control index over a fixed control list.
#[derive(Debug, Default)]
pub struct StaticControlIndex {
    controls: Vec<ControlRef>,
}

impl StaticControlIndex {
    pub fn new(controls: Vec<ControlRef>) -> Self {
        Self { controls }
    }
}

#[async_trait]
impl ControlIndex for StaticControlIndex {
    async fn lookup(&self, roles: &[ControlRole]) -> Result<Vec<ControlRef>, HostError> {
        Ok(self
            .controls
            .iter()
            .filter(|c| roles.contains(&c.role))
            .cloned()
            .collect())
    }
}

/// Page view over declared structure, recording execution side effects.
#[derive(Debug, Default)]
pub struct StaticPageView {
    contexts: HashMap<ControlId, StructuralContext>,
    titles: HashMap<ControlId, String>,
    short_ids: HashMap<ControlId, String>,
    tab_bar: Option<TabBar>,
    page_id: Option<String>,
    toolbars: HashSet<ControlId>,
    row_counts: HashMap<ControlId, usize>,
    variant_managed: HashSet<ControlId>,
    selections: Mutex<Vec<ControlId>>,
    scrolls: Mutex<Vec<ControlId>>,
    tab_switches: Mutex<Vec<(ControlId, String)>>,
}

impl StaticPageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tab_bar(mut self, tab_bar: TabBar) -> Self {
        self.tab_bar = Some(tab_bar);
        self
    }

    pub fn with_page_id(mut self, page_id: impl Into<String>) -> Self {
        self.page_id = Some(page_id.into());
        self
    }

    pub fn with_context(mut self, control: impl Into<ControlId>, ctx: StructuralContext) -> Self {
        self.contexts.insert(control.into(), ctx);
        self
    }

    pub fn with_title(mut self, control: impl Into<ControlId>, title: impl Into<String>) -> Self {
        self.titles.insert(control.into(), title.into());
        self
    }

    pub fn with_short_id(mut self, control: impl Into<ControlId>, short: impl Into<String>) -> Self {
        self.short_ids.insert(control.into(), short.into());
        self
    }

    pub fn with_toolbar(mut self, control: impl Into<ControlId>) -> Self {
        self.toolbars.insert(control.into());
        self
    }

    pub fn with_row_count(mut self, control: impl Into<ControlId>, rows: usize) -> Self {
        self.row_counts.insert(control.into(), rows);
        self
    }

    pub fn with_variant_management(mut self, control: impl Into<ControlId>) -> Self {
        self.variant_managed.insert(control.into());
        self
    }

    /// Controls selected through [`PageView::select`], in call order.
    pub fn selections(&self) -> Vec<ControlId> {
        self.selections.lock().unwrap().clone()
    }

    /// Controls scrolled through [`PageView::scroll_into_view`], in call
    /// order.
    pub fn scrolls(&self) -> Vec<ControlId> {
        self.scrolls.lock().unwrap().clone()
    }

    /// `(tab bar, key)` pairs passed to [`PageView::switch_tab`].
    pub fn tab_switches(&self) -> Vec<(ControlId, String)> {
        self.tab_switches.lock().unwrap().clone()
    }
}

impl PageView for StaticPageView {
    fn structural_context(&self, control: &ControlId) -> Option<StructuralContext> {
        self.contexts.get(control).cloned()
    }

    fn tab_bar(&self) -> Option<TabBar> {
        self.tab_bar.clone()
    }

    fn control_title(&self, control: &ControlId) -> Option<String> {
        self.titles.get(control).cloned()
    }

    fn short_id(&self, control: &ControlId) -> Option<String> {
        self.short_ids.get(control).cloned()
    }

    fn page_id(&self) -> Option<String> {
        self.page_id.clone()
    }

    fn has_header_toolbar(&self, control: &ControlId) -> bool {
        self.toolbars.contains(control)
    }

    fn row_count(&self, control: &ControlId) -> Option<usize> {
        self.row_counts.get(control).copied()
    }

    fn variant_management_enabled(&self, control: &ControlId) -> bool {
        self.variant_managed.contains(control)
    }

    fn select(&self, control: &ControlId) {
        self.selections.lock().unwrap().push(control.clone());
    }

    fn scroll_into_view(&self, control: &ControlId) {
        self.scrolls.lock().unwrap().push(control.clone());
    }

    fn switch_tab(&self, tab_bar: &ControlId, key: &str) {
        self.tab_switches
            .lock()
            .unwrap()
            .push((tab_bar.clone(), key.to_string()));
    }
}

/// Resource bundle over a fixed text table with `{n}` placeholder
/// substitution. Unknown keys fail the lookup so callers exercise their
/// fallbacks.
#[derive(Debug, Default)]
pub struct StaticLexicon {
    texts: HashMap<String, String>,
}

impl StaticLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(key.into(), text.into());
        self
    }
}

#[async_trait]
impl Lexicon for StaticLexicon {
    async fn text(&self, key: &str, args: &[&str]) -> Result<String, HostError> {
        let Some(template) = self.texts.get(key) else {
            return Err(HostError::MissingText {
                key: key.to_string(),
            });
        };
        let mut text = template.clone();
        for (i, arg) in args.iter().enumerate() {
            text = text.replace(&format!("{{{i}}}"), arg);
        }
        Ok(text)
    }
}

/// Dialog factory that records every open request.
#[derive(Debug, Default)]
pub struct StaticDialogFactory {
    refuse: bool,
    opened: Mutex<Vec<(DialogKind, ControlId)>>,
}

impl StaticDialogFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory that declines every request, as a host without design-time
    /// dialogs would.
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<(DialogKind, ControlId)> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl DialogFactory for StaticDialogFactory {
    async fn open(&self, dialog: DialogKind, control: &ControlId) -> Result<bool, HostError> {
        self.opened.lock().unwrap().push((dialog, control.clone()));
        Ok(!self.refuse)
    }
}

/// Capability probe over a fixed capability set and dirty flag.
#[derive(Debug, Default)]
pub struct StaticCapabilityProbe {
    capabilities: HashSet<String>,
    dirty: bool,
}

impl StaticCapabilityProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    pub fn dirty(mut self) -> Self {
        self.dirty = true;
        self
    }
}

#[async_trait]
impl CapabilityProbe for StaticCapabilityProbe {
    async fn supports(&self, capability: &str) -> Result<bool, HostError> {
        Ok(self.capabilities.contains(capability))
    }

    async fn has_unsaved_changes(&self) -> Result<bool, HostError> {
        Ok(self.dirty)
    }
}
