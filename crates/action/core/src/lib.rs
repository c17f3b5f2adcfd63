//! Deterministic data model and hierarchy algorithm for quick actions.
//!
//! `action-core` defines the canonical types (controls, paths, the action
//! tree and its side table) and the pure classification that turns a page
//! snapshot into an addressable action hierarchy. Everything here is
//! synchronous and effect-free; discovery against a live host, enablement
//! validation, and execution live in the runtime crate and depend on the
//! types re-exported here.
pub mod builder;
pub mod command;
pub mod control;
pub mod enablement;
pub mod path;
pub mod structure;
pub mod tree;

pub use builder::{
    ControlObservation, HierarchyBuilder, HierarchyOutcome, LabelCatalog, PageSnapshot,
};
pub use command::ChangeCommand;
pub use control::{ControlId, ControlRef, ControlRole};
pub use enablement::{EnablementError, EnablementResult};
pub use path::{ActionPath, PathError};
pub use structure::{SectionInfo, StructuralContext, SubSectionInfo, TabBar, TabItem};
pub use tree::{ActionTree, ControlMapEntry, QuickActionNode};
