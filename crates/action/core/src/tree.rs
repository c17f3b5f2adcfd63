//! Action tree and its path-keyed side table.
//!
//! The tree is what gets serialized to the remote editor; the side table is
//! what stays in-process and resolves a path back to a live control. Both are
//! mutated exclusively through [`ActionTree::push_root`] and
//! [`ActionTree::push_child`], which assign the path and insert the matching
//! side-table entry in the same call. The path/entry bijection is therefore a
//! construction guarantee, not something callers have to maintain.

use std::collections::HashMap;

use crate::control::ControlRef;
use crate::path::ActionPath;
use crate::structure::StructuralContext;

/// One node of the serializable action tree.
///
/// Carries display data and the node's own path; never a live reference.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct QuickActionNode {
    pub path: ActionPath,
    pub label: String,
    pub enabled: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub tooltip: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<QuickActionNode>,
}

impl QuickActionNode {
    fn new(path: ActionPath, label: String) -> Self {
        Self {
            path,
            label,
            enabled: true,
            tooltip: None,
            children: Vec::new(),
        }
    }

    /// Marks this node disabled with a user-facing reason.
    pub fn disable(&mut self, tooltip: impl Into<String>) {
        self.enabled = false;
        self.tooltip = Some(tooltip.into());
    }
}

/// In-process side-table entry behind one tree path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlMapEntry {
    /// The referenced live control (the grouping container for group nodes)
    pub control: ControlRef,
    /// Structural ancestry recorded at discovery time, kept even when the
    /// tree flattened the grouping away
    pub context: Option<StructuralContext>,
    /// Owning tab-filter key for tab-scoped controls
    pub tab_key: Option<String>,
}

impl ControlMapEntry {
    pub fn new(control: ControlRef) -> Self {
        Self {
            control,
            context: None,
            tab_key: None,
        }
    }

    pub fn with_context(mut self, context: StructuralContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_tab_key(mut self, key: impl Into<String>) -> Self {
        self.tab_key = Some(key.into());
        self
    }
}

/// The action forest plus its side table, built in lock-step.
///
/// Discarded wholesale and rebuilt on every initialize generation; paths from
/// an old generation resolve to nothing in the new one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionTree {
    roots: Vec<QuickActionNode>,
    entries: HashMap<ActionPath, ControlMapEntry>,
}

impl ActionTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a top-level node and its side-table entry; returns the
    /// assigned path.
    pub fn push_root(&mut self, label: impl Into<String>, entry: ControlMapEntry) -> ActionPath {
        let path = ActionPath::root(self.roots.len());
        self.roots
            .push(QuickActionNode::new(path.clone(), label.into()));
        self.entries.insert(path.clone(), entry);
        path
    }

    /// Appends a child under an existing node and its side-table entry;
    /// returns the assigned path.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not address a node in this tree. Parents are
    /// always paths previously returned by a push on the same tree, so a miss
    /// indicates a programming error.
    pub fn push_child(
        &mut self,
        parent: &ActionPath,
        label: impl Into<String>,
        entry: ControlMapEntry,
    ) -> ActionPath {
        let Some(node) = Self::node_in_mut(&mut self.roots, parent) else {
            panic!("parent path {parent} not present in tree");
        };
        let path = parent.child(node.children.len());
        node.children
            .push(QuickActionNode::new(path.clone(), label.into()));
        self.entries.insert(path.clone(), entry);
        path
    }

    fn node_in_mut<'a>(
        nodes: &'a mut Vec<QuickActionNode>,
        path: &ActionPath,
    ) -> Option<&'a mut QuickActionNode> {
        let segments: Vec<usize> = path.segments().collect();
        let (last, front) = segments.split_last()?;
        let mut level = nodes;
        for &index in front {
            level = &mut level.get_mut(index)?.children;
        }
        level.get_mut(*last)
    }

    /// Resolves a path to its node, if present in this generation.
    pub fn node(&self, path: &ActionPath) -> Option<&QuickActionNode> {
        let segments: Vec<usize> = path.segments().collect();
        let (last, front) = segments.split_last()?;
        let mut level = &self.roots;
        for &index in front {
            level = &level.get(index)?.children;
        }
        level.get(*last)
    }

    /// Resolves a path to its side-table entry, if present in this
    /// generation.
    pub fn entry(&self, path: &ActionPath) -> Option<&ControlMapEntry> {
        self.entries.get(path)
    }

    pub fn roots(&self) -> &[QuickActionNode] {
        &self.roots
    }

    /// True when discovery produced no actionable controls; such a tree makes
    /// its definition not applicable.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of addressable nodes (equals the side-table size).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Depth-first read-only visit of every node.
    pub fn visit(&self, mut f: impl FnMut(&QuickActionNode)) {
        fn walk(nodes: &[QuickActionNode], f: &mut impl FnMut(&QuickActionNode)) {
            for node in nodes {
                f(node);
                walk(&node.children, f);
            }
        }
        walk(&self.roots, &mut f);
    }

    /// Depth-first pass pairing each node with its side-table entry.
    ///
    /// This is the hook point for per-node enablement: the visitor may flip
    /// `enabled` and set `tooltip`, while the entry stays read-only.
    pub fn visit_mut(&mut self, mut f: impl FnMut(&mut QuickActionNode, &ControlMapEntry)) {
        fn walk(
            nodes: &mut [QuickActionNode],
            entries: &HashMap<ActionPath, ControlMapEntry>,
            f: &mut impl FnMut(&mut QuickActionNode, &ControlMapEntry),
        ) {
            for node in nodes {
                if let Some(entry) = entries.get(&node.path) {
                    f(node, entry);
                }
                walk(&mut node.children, entries, f);
            }
        }
        walk(&mut self.roots, &self.entries, &mut f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{ControlRef, ControlRole};

    fn entry(id: &str) -> ControlMapEntry {
        ControlMapEntry::new(ControlRef::new(id, ControlRole::Table))
    }

    #[test]
    fn paths_are_assigned_in_append_order() {
        let mut tree = ActionTree::new();
        let first = tree.push_root("First", entry("t1"));
        let second = tree.push_root("Second", entry("t2"));
        let nested = tree.push_child(&second, "Nested", entry("t3"));

        assert_eq!(first.as_str(), "0");
        assert_eq!(second.as_str(), "1");
        assert_eq!(nested.as_str(), "1/0");
        assert_eq!(tree.node(&nested).map(|n| n.label.as_str()), Some("Nested"));
    }

    #[test]
    fn every_reachable_path_has_an_entry_and_nothing_more() {
        let mut tree = ActionTree::new();
        let group = tree.push_root("Group", entry("section"));
        tree.push_child(&group, "Leaf A", entry("t1"));
        tree.push_child(&group, "Leaf B", entry("t2"));
        tree.push_root("Loose", entry("t3"));

        let mut reachable = Vec::new();
        tree.visit(|node| reachable.push(node.path.clone()));

        assert_eq!(reachable.len(), tree.len());
        for path in &reachable {
            assert!(tree.entry(path).is_some(), "dangling path {path}");
        }
    }

    #[test]
    fn stale_paths_resolve_to_nothing() {
        let mut tree = ActionTree::new();
        tree.push_root("Only", entry("t1"));

        let stale = ActionPath::parse("99/99").unwrap();
        assert!(tree.node(&stale).is_none());
        assert!(tree.entry(&stale).is_none());
    }

    #[test]
    fn visit_mut_pairs_nodes_with_their_entries() {
        let mut tree = ActionTree::new();
        let group = tree.push_root("Group", entry("section"));
        tree.push_child(&group, "Leaf", entry("t1"));

        let mut seen = Vec::new();
        tree.visit_mut(|node, entry| {
            seen.push((node.path.as_str().to_string(), entry.control.id.clone()));
            node.disable("off");
        });

        assert_eq!(seen.len(), 2);
        let root = &tree.roots()[0];
        assert!(!root.enabled);
        assert_eq!(root.tooltip.as_deref(), Some("off"));
    }
}
