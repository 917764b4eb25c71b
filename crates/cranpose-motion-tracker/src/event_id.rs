use std::fmt;

/// Identifies a motion event registered with a [`MotionEventTracker`].
///
/// Identifiers are minted by the tracker starting at 1. The raw value is what
/// travels alongside the event through the input pipeline; the completion path
/// rebuilds the identifier with [`MotionEventId::from_raw`].
///
/// [`MotionEventTracker`]: crate::MotionEventTracker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MotionEventId(u64);

impl MotionEventId {
    /// Wraps a raw identifier received back from the input pipeline.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value to attach to outgoing messages.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<MotionEventId> for u64 {
    fn from(id: MotionEventId) -> Self {
        id.0
    }
}

impl fmt::Display for MotionEventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
