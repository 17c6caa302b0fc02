//! Foot-landing events.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Side;

/// A detected foot strike.
///
/// # Example
///
/// ```
/// use gait_types::{LandingEvent, Side};
///
/// let event = LandingEvent::new(45, Side::Left);
/// assert!((event.time_secs(30.0) - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LandingEvent {
    /// Index of the landing frame within the session history.
    pub frame_index: usize,
    /// Foot that landed.
    pub foot: Side,
}

impl LandingEvent {
    /// Creates a landing event.
    #[must_use]
    pub const fn new(frame_index: usize, foot: Side) -> Self {
        Self { frame_index, foot }
    }

    /// Converts the frame index to seconds at the given frame rate.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time_secs(&self, fps: f64) -> f64 {
        self.frame_index as f64 / fps
    }
}
