//! Async orchestration around the quick-action data model.
//!
//! This crate wires the host collaborator abstraction, the enablement
//! validator chain, and the per-action definition runtime into a cohesive
//! API. Embedders register an [`ActionDefinition`] per concrete quick action
//! with an [`ActionRegistry`], initialize once per page display, serialize
//! the applicable subset to their remote editor, and dispatch path-addressed
//! execution back in.
//!
//! Modules are organized by responsibility:
//! - [`definition`] hosts the generic per-action runtime and its state machine
//! - [`registry`] hosts the per-session registry and event publishing
//! - [`host`] defines the injected collaborator traits and in-memory fixtures
//! - [`validator`] provides the chain-level enablement predicates
//! - [`strategy`] is the interface concrete quick actions implement
//! - [`api`] exposes the error and event types downstream embedders handle
pub mod api;
pub mod config;
pub mod definition;
pub mod host;
pub mod registry;
pub mod strategy;
pub mod validator;

pub use api::{ActionEvent, Result, RuntimeError};
pub use config::RegistryConfig;
pub use definition::{ActionDefinition, DefinitionState, QuickActionObject};
pub use host::{
    CapabilityProbe, ControlIndex, DialogFactory, DialogKind, HostError, HostServices, Lexicon,
    PageView, StaticCapabilityProbe, StaticControlIndex, StaticDialogFactory, StaticLexicon,
    StaticPageView,
};
pub use registry::ActionRegistry;
pub use strategy::ActionStrategy;
pub use validator::{
    CapabilityValidator, DirtyStateValidator, EnablementValidator, ValidatorChain,
};
