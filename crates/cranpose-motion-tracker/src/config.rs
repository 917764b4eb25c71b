//! Tracker configuration.

use std::num::NonZeroUsize;

/// What happens to older pending events when a newer one is popped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StaleEventPolicy {
    /// Only the popped event is removed. Events that are never popped stay
    /// resident for the lifetime of the tracker.
    #[default]
    Retain,
    /// Popping an event also discards every pending event tracked before it.
    /// A pop that finds nothing discards nothing.
    DiscardOlder,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackerConfig {
    pub stale_policy: StaleEventPolicy,
    /// Upper bound on pending events. When tracking would exceed it the oldest
    /// pending events are evicted. `None` leaves the tracker unbounded.
    pub max_pending: Option<NonZeroUsize>,
}

impl TrackerConfig {
    pub const fn new() -> Self {
        Self {
            stale_policy: StaleEventPolicy::Retain,
            max_pending: None,
        }
    }

    pub const fn with_stale_policy(mut self, policy: StaleEventPolicy) -> Self {
        self.stale_policy = policy;
        self
    }

    pub const fn with_max_pending(mut self, max_pending: NonZeroUsize) -> Self {
        self.max_pending = Some(max_pending);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retains_and_is_unbounded() {
        let config = TrackerConfig::default();
        assert_eq!(config, TrackerConfig::new());
        assert_eq!(config.stale_policy, StaleEventPolicy::Retain);
        assert_eq!(config.max_pending, None);
    }

    #[test]
    fn test_builder_sets_fields() {
        let limit = NonZeroUsize::new(16).unwrap();
        let config = TrackerConfig::new()
            .with_stale_policy(StaleEventPolicy::DiscardOlder)
            .with_max_pending(limit);

        assert_eq!(config.stale_policy, StaleEventPolicy::DiscardOlder);
        assert_eq!(config.max_pending, Some(limit));
    }
}
