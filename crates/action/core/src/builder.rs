//! Hierarchy construction from a page snapshot.
//!
//! Turns the flat, unordered list of controls the index reported into a
//! forest reflecting page structure. Classification is pure and deterministic:
//! the same snapshot always yields the same labels, the same grouping
//! decisions, and the same path assignment order, because everything derives
//! from a single pass in input order.

use std::collections::HashMap;

use crate::control::{ControlRef, ControlRole};
use crate::path::ActionPath;
use crate::structure::{StructuralContext, TabBar};
use crate::tree::{ActionTree, ControlMapEntry};

/// One control of interest together with what the host view observed
/// around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlObservation {
    pub control: ControlRef,
    /// Header/title of the control itself, when the host could discover one
    pub title: Option<String>,
    /// Structural ancestry, absent for controls outside any known container
    pub context: Option<StructuralContext>,
}

/// Everything the builder needs about the active page, assembled by the
/// runtime in one sweep so the algorithm itself never touches the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    /// The page's tab-filter container, if any. When a page carries several,
    /// the adapter reports the first match; ambiguity is policy, not an
    /// error.
    pub tab_bar: Option<TabBar>,
    pub controls: Vec<ControlObservation>,
}

/// Localized display strings the builder falls back to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelCatalog {
    /// Leaf label when no title is discoverable
    pub unnamed: String,
    /// Suffix of section group labels ("'Products' section")
    pub section_suffix: String,
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self {
            unnamed: "Unnamed".to_string(),
            section_suffix: "section".to_string(),
        }
    }
}

impl LabelCatalog {
    fn section_group(&self, title: &str) -> String {
        format!("'{}' {}", title, self.section_suffix)
    }
}

/// Result of one build pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HierarchyOutcome {
    pub tree: ActionTree,
    /// Controls dropped because their ancestry could not be resolved
    /// unambiguously. Skipping is policy: half-formed actions are never
    /// surfaced.
    pub skipped: usize,
}

/// Classifies control observations into an [`ActionTree`].
#[derive(Clone, Debug, Default)]
pub struct HierarchyBuilder {
    labels: LabelCatalog,
}

impl HierarchyBuilder {
    pub fn new(labels: LabelCatalog) -> Self {
        Self { labels }
    }

    /// Builds the tree and side table in one pass over the snapshot.
    ///
    /// Classification per control, in input order:
    /// - under a single-subsection section: plain top-level leaf, grouping
    ///   flattened away, full structural context still recorded;
    /// - under a multi-subsection section: child of a per-section group node,
    ///   created on first encounter and reused afterwards (matched on section
    ///   title, falling back to the section id for untitled sections);
    /// - id ends with a known tab-filter key: top-level leaf carrying the
    ///   tab key;
    /// - otherwise: bare top-level leaf.
    ///
    /// A control under a section whose subsection could not be resolved is
    /// counted in [`HierarchyOutcome::skipped`] and dropped silently.
    pub fn build(&self, snapshot: PageSnapshot) -> HierarchyOutcome {
        let mut tree = ActionTree::new();
        let mut skipped = 0usize;
        // Section group reuse, keyed by title (id for untitled sections)
        let mut groups: HashMap<String, ActionPath> = HashMap::new();

        for observation in snapshot.controls {
            let section = observation
                .context
                .as_ref()
                .and_then(|ctx| ctx.section.clone());

            if let Some(section) = section {
                let context = observation
                    .context
                    .clone()
                    .unwrap_or_default();
                if context.subsection.is_none() {
                    // Orphaned: section without a resolvable subsection
                    skipped += 1;
                    continue;
                }

                let label = self.leaf_label(observation.title.as_deref(), None);
                let entry = ControlMapEntry::new(observation.control).with_context(context.clone());

                if section.subsections <= 1 {
                    // Degenerate non-branching case: skip the grouping level
                    tree.push_root(label, entry);
                } else {
                    let key = section
                        .title
                        .clone()
                        .unwrap_or_else(|| section.id.as_str().to_string());
                    let group = groups.entry(key).or_insert_with(|| {
                        let group_label = match &section.title {
                            Some(title) => self.labels.section_group(title),
                            None => self.labels.unnamed.clone(),
                        };
                        let group_entry = ControlMapEntry::new(ControlRef {
                            id: section.id.clone(),
                            role: ControlRole::Section,
                        })
                        .with_context(StructuralContext {
                            section: Some(section.clone()),
                            subsection: None,
                            layout: context.layout.clone(),
                        });
                        tree.push_root(group_label, group_entry)
                    });
                    tree.push_child(group, label, entry);
                }
            } else if let Some(item) = snapshot
                .tab_bar
                .as_ref()
                .and_then(|bar| bar.item_for_control(&observation.control.id))
            {
                let label = self.leaf_label(observation.title.as_deref(), Some(&item.label));
                let key = item.key.clone();
                let mut entry = ControlMapEntry::new(observation.control).with_tab_key(key);
                if let Some(context) = observation.context {
                    entry = entry.with_context(context);
                }
                tree.push_root(label, entry);
            } else {
                let label = self.leaf_label(observation.title.as_deref(), None);
                let mut entry = ControlMapEntry::new(observation.control);
                if let Some(context) = observation.context {
                    entry = entry.with_context(context);
                }
                tree.push_root(label, entry);
            }
        }

        HierarchyOutcome { tree, skipped }
    }

    /// Label policy: control title, then tab label where one applies, then
    /// the generic unnamed fallback.
    fn leaf_label(&self, title: Option<&str>, tab_label: Option<&str>) -> String {
        title
            .or(tab_label)
            .unwrap_or(&self.labels.unnamed)
            .to_string()
    }
}
