//! Enablement validation for whole action definitions.
//!
//! A validator is an independent async predicate answering "is this action
//! usable at all" (version gates, capability probes, workspace state). Chains
//! run every validator to completion and accumulate all objections; nothing
//! short-circuits, so a composed action can report its full set of problems
//! even though only the first objection becomes the user-visible tooltip.
//!
//! Per-node enablement is deliberately NOT expressed here: node rules need
//! the just-built tree and the referenced live controls, and they run as a
//! synchronous strategy pass over the tree instead (see
//! [`crate::strategy::ActionStrategy::refine_node`]).

mod capability;
mod dirty;

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;

use action_core::{EnablementError, EnablementResult};

use crate::host::HostServices;

pub use capability::CapabilityValidator;
pub use dirty::DirtyStateValidator;

/// An independent, composable enablement predicate.
#[async_trait]
pub trait EnablementValidator: Send + Sync {
    /// Human-readable name for logging and debugging.
    fn name(&self) -> &'static str;

    /// Returns no objection, or a typed user-facing error.
    async fn run(&self, host: &HostServices) -> EnablementResult;
}

/// Ordered chain of validators, evaluated concurrently.
#[derive(Clone, Default)]
pub struct ValidatorChain {
    validators: Vec<Arc<dyn EnablementValidator>>,
}

impl ValidatorChain {
    pub fn new(validators: Vec<Arc<dyn EnablementValidator>>) -> Self {
        Self { validators }
    }

    /// Chain with no validators; such a definition is always enabled at the
    /// action level.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Runs every validator to completion and returns all objections in
    /// declaration order.
    ///
    /// The definition is disabled iff the returned list is non-empty; the
    /// first entry is what callers surface as tooltip (list order, not
    /// severity).
    pub async fn run(&self, host: &HostServices) -> Vec<EnablementError> {
        let runs = self.validators.iter().map(|v| v.run(host));
        let results = join_all(runs).await;

        let objections: Vec<EnablementError> = results
            .into_iter()
            .filter_map(|result| result.err())
            .collect();

        if !objections.is_empty() {
            tracing::debug!(
                target: "action::validator",
                objections = objections.len(),
                first = %objections[0],
                "validator chain raised objections"
            );
        }

        objections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{
        HostServices, StaticCapabilityProbe, StaticControlIndex, StaticDialogFactory,
        StaticLexicon, StaticPageView,
    };

    fn host() -> HostServices {
        HostServices::new(
            Arc::new(StaticControlIndex::default()),
            Arc::new(StaticPageView::new()),
            Arc::new(StaticLexicon::new()),
            Arc::new(StaticDialogFactory::new()),
            Arc::new(StaticCapabilityProbe::new()),
        )
    }

    struct Fixed(&'static str, Option<&'static str>);

    #[async_trait]
    impl EnablementValidator for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        async fn run(&self, _host: &HostServices) -> EnablementResult {
            match self.1 {
                None => Ok(()),
                Some(message) => Err(EnablementError::new(message)),
            }
        }
    }

    #[tokio::test]
    async fn empty_chain_raises_nothing() {
        assert!(ValidatorChain::empty().run(&host()).await.is_empty());
    }

    #[tokio::test]
    async fn objections_accumulate_in_declaration_order() {
        let chain = ValidatorChain::new(vec![
            Arc::new(Fixed("ok", None)),
            Arc::new(Fixed("first", Some("first objection"))),
            Arc::new(Fixed("second", Some("second objection"))),
        ]);

        let objections = chain.run(&host()).await;
        assert_eq!(objections.len(), 2);
        assert_eq!(objections[0].message, "first objection");
        assert_eq!(objections[1].message, "second objection");
    }
}
