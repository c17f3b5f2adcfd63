//! Validator gating an action on a host capability.

use async_trait::async_trait;

use action_core::{EnablementError, EnablementResult};

use super::EnablementValidator;
use crate::host::HostServices;

/// Objects when the host lacks a named capability.
///
/// A failing probe counts as "not supported": enablement must degrade, not
/// error, when the host cannot answer.
#[derive(Clone, Debug)]
pub struct CapabilityValidator {
    capability: String,
    message_key: &'static str,
}

impl CapabilityValidator {
    pub fn new(capability: impl Into<String>, message_key: &'static str) -> Self {
        Self {
            capability: capability.into(),
            message_key,
        }
    }
}

#[async_trait]
impl EnablementValidator for CapabilityValidator {
    fn name(&self) -> &'static str {
        "capability"
    }

    async fn run(&self, host: &HostServices) -> EnablementResult {
        let supported = host
            .capabilities()
            .supports(&self.capability)
            .await
            .unwrap_or(false);
        if supported {
            return Ok(());
        }

        let fallback = format!("{} is not available in this application", self.capability);
        let message = host
            .text_or(self.message_key, &[&self.capability], &fallback)
            .await;
        Err(EnablementError::new(message))
    }
}
