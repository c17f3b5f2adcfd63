//! Concrete quick-action strategies.
//!
//! Each strategy is thin, host-specific glue plugged into the generic
//! definition runtime: which control roles to discover, node-level business
//! rules, and what execution does. The framework mechanics (discovery,
//! hierarchy, validation, path resolution) all live in `action-runtime`.
pub mod personalize;
pub mod toolbar_action;
pub mod variant_management;

pub use personalize::PersonalizeTableStrategy;
pub use toolbar_action::AddToolbarActionStrategy;
pub use variant_management::EnableVariantManagementStrategy;
