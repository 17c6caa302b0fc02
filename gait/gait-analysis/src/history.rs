//! Session frame history.

use gait_types::{Joint, JointFrame};

/// Ordered, append-only store of the frames seen in one session.
///
/// Frames are never evicted, so the index of a frame stays valid for the
/// whole session and lines up with the records in the
/// [`SessionAggregator`](crate::SessionAggregator).
///
/// # Example
///
/// ```
/// use gait_analysis::FrameHistory;
/// use gait_types::{Joint, JointFrame};
/// use nalgebra::Point3;
///
/// let mut history = FrameHistory::new();
/// history.push(JointFrame::filled(Point3::new(0.0, 0.1, 0.0)));
/// history.push(JointFrame::filled(Point3::new(0.0, 0.2, 0.0)));
///
/// assert_eq!(history.len(), 2);
/// let heights = history.heights(Joint::RightFoot);
/// assert!((heights[1] - 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameHistory {
    frames: Vec<JointFrame>,
}

/// Size and duration of a [`FrameHistory`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryStats {
    /// Number of frames.
    pub count: usize,
    /// Time between the first and last frame in seconds.
    ///
    /// `None` with fewer than 2 frames.
    pub duration_secs: Option<f64>,
}

impl FrameHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Creates an empty history with room for `capacity` frames.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if no frames have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Removes every frame.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Appends a frame and returns its index.
    pub fn push(&mut self, frame: JointFrame) -> usize {
        self.frames.push(frame);
        self.frames.len() - 1
    }

    /// Returns all frames in arrival order.
    #[must_use]
    pub fn frames(&self) -> &[JointFrame] {
        &self.frames
    }

    /// Returns the most recent frame.
    #[must_use]
    pub fn latest(&self) -> Option<&JointFrame> {
        self.frames.last()
    }

    /// Gets a frame by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&JointFrame> {
        self.frames.get(index)
    }

    /// Returns the vertical coordinate of `joint` in every frame.
    #[must_use]
    pub fn heights(&self, joint: Joint) -> Vec<f64> {
        self.frames.iter().map(|f| f.height(joint)).collect()
    }

    /// Returns the frame count and duration at the given frame rate.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self, fps: f64) -> HistoryStats {
        let count = self.frames.len();
        let duration_secs = (count >= 2).then(|| (count - 1) as f64 / fps);
        HistoryStats {
            count,
            duration_secs,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn frame_at(y: f64) -> JointFrame {
        JointFrame::filled(Point3::new(0.0, y, 0.0))
    }

    #[test]
    fn push_returns_stable_indices() {
        let mut history = FrameHistory::with_capacity(4);
        assert_eq!(history.push(frame_at(0.0)), 0);
        assert_eq!(history.push(frame_at(1.0)), 1);
        assert_eq!(history.push(frame_at(2.0)), 2);
        assert_relative_eq!(history.get(1).unwrap().height(Joint::Head), 1.0);
        assert_relative_eq!(history.latest().unwrap().height(Joint::Head), 2.0);
    }

    #[test]
    fn empty_history() {
        let history = FrameHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert!(history.heights(Joint::LeftFoot).is_empty());
        let stats = history.stats(30.0);
        assert_eq!(stats.count, 0);
        assert!(stats.duration_secs.is_none());
    }

    #[test]
    fn stats_duration() {
        let mut history = FrameHistory::new();
        for i in 0..31 {
            history.push(frame_at(f64::from(i)));
        }
        let stats = history.stats(30.0);
        assert_eq!(stats.count, 31);
        assert_relative_eq!(stats.duration_secs.unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn clear_resets() {
        let mut history = FrameHistory::new();
        history.push(frame_at(0.0));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.push(frame_at(0.0)), 0);
    }
}
