//! Runtime configuration for the registry.

use std::env;

/// Configuration for [`crate::registry::ActionRegistry`].
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Capacity of the lifecycle event broadcast channel
    pub event_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { event_capacity: 32 }
    }
}

impl RegistryConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ACTION_EVENT_CAPACITY` - Event channel capacity (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("ACTION_EVENT_CAPACITY") {
            config.event_capacity = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
