//! Motion event bookkeeping for the Cranpose Android embedding.
//!
//! Native motion events cannot travel with the converted pointer events
//! through the input pipeline. The view registers each native event with a
//! [`MotionEventTracker`], sends the returned [`MotionEventId`] along, and
//! recovers the original event once the id comes back.

mod collections;
mod config;
mod event_id;
mod tracker;

pub use config::{StaleEventPolicy, TrackerConfig};
pub use event_id::MotionEventId;
pub use tracker::{MotionEventTracker, TrackerStats};

pub mod prelude {
    pub use crate::config::{StaleEventPolicy, TrackerConfig};
    pub use crate::event_id::MotionEventId;
    pub use crate::tracker::MotionEventTracker;
}
