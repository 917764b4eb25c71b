//! Registry matching motion events back to their identifiers.
//!
//! The dispatch path calls [`MotionEventTracker::track`] when a native event
//! arrives and forwards the returned id with the converted event. When the
//! input pipeline hands the id back, the completion path calls
//! [`MotionEventTracker::pop`] to recover the original event.

use crate::collections::{ordered_map, OrderedMap};
use crate::config::{StaleEventPolicy, TrackerConfig};
use crate::event_id::MotionEventId;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cumulative counters for a tracker, see [`MotionEventTracker::stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackerStats {
    /// Events registered through `track`.
    pub tracked: u64,
    /// Pops that returned an event.
    pub popped: u64,
    /// Pops for ids that were unknown, already popped or discarded.
    pub missed: u64,
    /// Events dropped without being popped, either by
    /// [`StaleEventPolicy::DiscardOlder`] or by the pending limit.
    pub discarded: u64,
    /// Events currently waiting to be popped.
    pub pending: usize,
}

struct TrackerState<E> {
    /// Last minted id. Ids start at 1, so 0 is never handed out.
    last_id: u64,
    events: OrderedMap<MotionEventId, E>,
    stats: TrackerStats,
}

impl<E> TrackerState<E> {
    fn new() -> Self {
        Self {
            last_id: 0,
            events: ordered_map(),
            stats: TrackerStats::default(),
        }
    }

    /// Removes the `count` oldest pending events.
    fn discard_oldest(&mut self, count: usize) -> Vec<E> {
        let discarded: Vec<E> = self.events.drain(..count).map(|(_, event)| event).collect();
        self.stats.discarded += discarded.len() as u64;
        discarded
    }
}

/// Tracks motion events while they travel through the input pipeline.
///
/// Cloning the tracker yields another handle to the same registry, so the
/// dispatch and completion paths can each own one. Separate trackers are fully
/// independent, including their id sequences.
///
/// The counter and the pending map sit behind one lock, so minting an id and
/// storing its event happen atomically with respect to other callers.
///
/// With the default [`StaleEventPolicy::Retain`] and no pending limit, events
/// that are never popped stay in the registry until the last handle is
/// dropped. Hosts that cannot guarantee every event comes back should opt into
/// [`StaleEventPolicy::DiscardOlder`] or [`TrackerConfig::max_pending`].
pub struct MotionEventTracker<E> {
    config: TrackerConfig,
    state: Arc<Mutex<TrackerState<E>>>,
}

impl<E> MotionEventTracker<E> {
    /// Creates a tracker with the default configuration.
    pub fn new() -> Self {
        Self::with_config(TrackerConfig::default())
    }

    pub fn with_config(config: TrackerConfig) -> Self {
        Self {
            config,
            state: Arc::new(Mutex::new(TrackerState::new())),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Registers `event` and returns the id identifying it.
    ///
    /// The id is strictly greater than every id this tracker minted before.
    /// If a pending limit is configured and exceeded, the oldest pending
    /// events are discarded.
    pub fn track(&self, event: E) -> MotionEventId {
        let mut state = self.lock();
        state.last_id += 1;
        let id = MotionEventId::from_raw(state.last_id);
        state.events.insert(id, event);
        state.stats.tracked += 1;

        let evicted = match self.config.max_pending {
            Some(limit) if state.events.len() > limit.get() => {
                let overflow = state.events.len() - limit.get();
                state.discard_oldest(overflow)
            }
            _ => Vec::new(),
        };
        let pending = state.events.len();
        drop(state);

        if !evicted.is_empty() {
            log::warn!(
                "motion event tracker over its pending limit; evicted {} oldest event(s)",
                evicted.len()
            );
        }
        log::trace!("tracked motion event {id} ({pending} pending)");
        id
    }

    /// Removes and returns the event registered under `id`.
    ///
    /// Returns `None` if the id was never minted by this tracker, was already
    /// popped, or was discarded. With [`StaleEventPolicy::DiscardOlder`] a
    /// successful pop also discards every event tracked before `id`.
    pub fn pop(&self, id: MotionEventId) -> Option<E> {
        let mut state = self.lock();
        let Some(index) = state.events.get_index_of(&id) else {
            state.stats.missed += 1;
            return None;
        };

        let stale = match self.config.stale_policy {
            StaleEventPolicy::Retain => Vec::new(),
            StaleEventPolicy::DiscardOlder => state.discard_oldest(index),
        };
        let event = state.events.shift_remove(&id);
        state.stats.popped += 1;
        let pending = state.events.len();
        drop(state);

        if !stale.is_empty() {
            log::debug!("discarded {} motion event(s) older than {id}", stale.len());
        }
        log::trace!("popped motion event {id} ({pending} pending)");
        event
    }

    /// Number of events waiting to be popped.
    pub fn len(&self) -> usize {
        self.lock().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> TrackerStats {
        let state = self.lock();
        TrackerStats {
            pending: state.events.len(),
            ..state.stats
        }
    }

    // The state stays consistent across a panic inside the critical section,
    // and track/pop must not fail, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, TrackerState<E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E> Clone for MotionEventTracker<E> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            state: Arc::clone(&self.state),
        }
    }
}

impl<E> Default for MotionEventTracker<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for MotionEventTracker<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionEventTracker")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}
