//! Structural containers discovered via ancestor walks.
//!
//! Sections, subsections, tab bars and layouts are *observed*, never owned:
//! the host view walks the live tree and reports what encloses each control.
//! The hierarchy builder only consumes these observations; it has no access
//! to the live objects themselves.

use crate::control::ControlId;

/// One selectable tab of a tab-filter container.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabItem {
    /// Stable filter key, also the suffix convention used by control ids
    pub key: String,
    /// Human-readable tab label
    pub label: String,
}

/// The tab-filter bearing container of a page.
///
/// At most one per page is supported; when several exist the host adapter
/// reports the first match (policy, not an error).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabBar {
    pub id: ControlId,
    pub items: Vec<TabItem>,
}

impl TabBar {
    /// Finds the tab whose key the given control id ends with.
    ///
    /// Control ids of tab-scoped controls carry their owning filter key as an
    /// id suffix; this is the only linkage between a control and its tab.
    pub fn item_for_control(&self, control: &ControlId) -> Option<&TabItem> {
        self.items
            .iter()
            .find(|item| control.as_str().ends_with(&item.key))
    }
}

/// Section observed above a control, with enough shape information to decide
/// whether grouping is warranted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionInfo {
    pub id: ControlId,
    pub title: Option<String>,
    /// Total subsections under this section, not just the ones containing
    /// controls of interest. Drives the degenerate-case flattening.
    pub subsections: usize,
}

/// Subsection observed between a section and a control.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubSectionInfo {
    pub id: ControlId,
    pub title: Option<String>,
}

/// Structural ancestry of one control, as reported by the host view.
///
/// Recorded verbatim in the side table even when the hierarchy flattens the
/// grouping away, because execution needs it to scroll and select.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructuralContext {
    pub section: Option<SectionInfo>,
    pub subsection: Option<SubSectionInfo>,
    pub layout: Option<ControlId>,
}

impl StructuralContext {
    /// Context for a control directly under a section/subsection pair.
    pub fn in_section(
        section: SectionInfo,
        subsection: SubSectionInfo,
        layout: Option<ControlId>,
    ) -> Self {
        Self {
            section: Some(section),
            subsection: Some(subsection),
            layout,
        }
    }
}
