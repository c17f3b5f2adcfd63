//! Validator gating an action on a clean design-time workspace.

use async_trait::async_trait;

use action_core::{EnablementError, EnablementResult};

use super::EnablementValidator;
use crate::host::HostServices;

/// Objects while the host reports unsaved design-time changes.
///
/// Some actions rewrite configuration that pending changes would also touch;
/// those stay disabled until the user saves or reverts.
#[derive(Clone, Debug)]
pub struct DirtyStateValidator {
    message_key: &'static str,
}

impl DirtyStateValidator {
    pub fn new(message_key: &'static str) -> Self {
        Self { message_key }
    }
}

#[async_trait]
impl EnablementValidator for DirtyStateValidator {
    fn name(&self) -> &'static str {
        "dirty_state"
    }

    async fn run(&self, host: &HostServices) -> EnablementResult {
        let dirty = host
            .capabilities()
            .has_unsaved_changes()
            .await
            .unwrap_or(false);
        if !dirty {
            return Ok(());
        }

        let message = host
            .text_or(
                self.message_key,
                &[],
                "save or revert your pending changes first",
            )
            .await;
        Err(EnablementError::new(message))
    }
}
