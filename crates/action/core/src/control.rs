//! Control identity and role classification.
//!
//! A control is opaque to the framework: one host-side identifier plus one
//! role tag. Roles form a closed set resolved once by the host adapter at the
//! control-index boundary, so the classification algorithm matches on tagged
//! variants instead of probing live objects.

/// Opaque identifier of one live control instance.
///
/// Identifiers are owned by the host's control index and are only meaningful
/// for the render generation they were obtained in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlId(String);

impl ControlId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ControlId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ControlId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Role a control plays in the page structure.
///
/// The set is closed on purpose: every control the framework cares about is
/// mapped to exactly one role by the host adapter, and controls outside this
/// set never reach the hierarchy builder.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ControlRole {
    /// Tabular data control, the usual quick-action target
    Table,
    /// Object-page section grouping container
    Section,
    /// Subsection nested inside a section
    SubSection,
    /// Tab-filter bearing container (icon tab bar equivalent)
    TabBar,
    /// Header toolbar of a table or page
    Toolbar,
    /// Generic layout container
    Layout,
}

/// Reference to one live control for the current render generation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlRef {
    pub id: ControlId,
    pub role: ControlRole,
}

impl ControlRef {
    pub fn new(id: impl Into<ControlId>, role: ControlRole) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }
}

impl From<String> for ControlId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_tags_round_trip() {
        assert_eq!(ControlRole::Table.to_string(), "table");
        assert_eq!(ControlRole::TabBar.to_string(), "tab_bar");
        assert_eq!(ControlRole::from_str("sub_section").ok(), Some(ControlRole::SubSection));
    }

    #[test]
    fn control_ids_compare_by_value() {
        assert_eq!(ControlId::new("page--table"), ControlId::from("page--table"));
    }
}
