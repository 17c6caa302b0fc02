//! Foot-landing detection from joint height histories.
//!
//! # Algorithm
//!
//! A landing is the frame where a foot stops descending near the ground.
//! Each foot is scanned independently over the whole history:
//!
//! 1. Estimate the ground as a low percentile of all foot heights.
//! 2. Compute the vertical foot velocity by central differences.
//! 3. For every interior frame, in order, short-circuiting on failure:
//!    - **Descent**: enough clearly descending frames in the lookback window.
//!    - **Height drop**: the foot was noticeably higher in the lookback window.
//!    - **Primary**: velocity crosses from descending to stopped or rising.
//!    - **Secondary**: enough of local minimum, ground proximity, low speed
//!      and "this ankle not above the other ankle".
//!    - **Refractory**: far enough from the previous accepted landing.
//!
//! The scan is a batch operation; calling it again after more frames
//! arrive re-scans from the start.

use gait_types::{Joint, JointFrame, LandingEvent, Side};
use tracing::{debug, info};

use crate::params::{DEFAULT_FPS, LandingParams};

/// Detects foot landings in a frame history.
///
/// # Example
///
/// ```
/// use gait_analysis::{LandingDetector, LandingParams};
///
/// // Foot drops 10 cm onto the ground, rests, then lifts again
/// let mut foot = vec![0.10; 10];
/// foot.extend([0.08, 0.06, 0.04, 0.02]);
/// foot.extend([0.0; 8]);
/// foot.extend([0.02, 0.04, 0.06, 0.08, 0.10]);
/// let ankle: Vec<f64> = foot.iter().map(|h| h + 0.05).collect();
///
/// let detector = LandingDetector::new(LandingParams::default(), 30.0);
/// assert_eq!(detector.detect_heights(&foot, &ankle, None), vec![15]);
/// ```
#[derive(Debug, Clone)]
pub struct LandingDetector {
    params: LandingParams,
    fps: f64,
}

impl Default for LandingDetector {
    fn default() -> Self {
        Self::new(LandingParams::default(), DEFAULT_FPS)
    }
}

impl LandingDetector {
    /// Creates a detector for a stream at `fps` frames per second.
    #[must_use]
    pub const fn new(params: LandingParams, fps: f64) -> Self {
        Self { params, fps }
    }

    /// Returns the detection parameters.
    #[must_use]
    pub const fn params(&self) -> &LandingParams {
        &self.params
    }

    /// Returns the stream rate.
    #[must_use]
    pub const fn fps(&self) -> f64 {
        self.fps
    }

    /// Converts a frame index to seconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn frame_to_seconds(&self, frame_index: usize) -> f64 {
        frame_index as f64 / self.fps
    }

    /// Detects landings of one foot.
    ///
    /// `other_ankle` enables the "not above the other ankle" criterion;
    /// without it that criterion always holds.
    ///
    /// Returns ascending frame indices into `history`.
    #[must_use]
    pub fn detect(
        &self,
        history: &[JointFrame],
        foot: Joint,
        ankle: Joint,
        other_ankle: Option<Joint>,
    ) -> Vec<usize> {
        if history.len() < self.params.min_history {
            return Vec::new();
        }
        let foot_heights: Vec<f64> = history.iter().map(|f| f.height(foot)).collect();
        let ankle_heights: Vec<f64> = history.iter().map(|f| f.height(ankle)).collect();
        let other_heights: Option<Vec<f64>> =
            other_ankle.map(|joint| history.iter().map(|f| f.height(joint)).collect());

        self.detect_heights(&foot_heights, &ankle_heights, other_heights.as_deref())
    }

    /// Detects landings of the foot on `side`, comparing against the
    /// opposite ankle.
    #[must_use]
    pub fn detect_foot(&self, history: &[JointFrame], side: Side) -> Vec<usize> {
        self.detect(
            history,
            Joint::foot(side),
            Joint::ankle(side),
            Some(Joint::ankle(side.opposite())),
        )
    }

    /// Detects landings of both feet, ordered by frame then foot.
    #[must_use]
    pub fn detect_events(&self, history: &[JointFrame]) -> Vec<LandingEvent> {
        let mut events: Vec<LandingEvent> = Side::BOTH
            .iter()
            .flat_map(|&side| {
                self.detect_foot(history, side)
                    .into_iter()
                    .map(move |frame| LandingEvent::new(frame, side))
            })
            .collect();
        events.sort_unstable();
        events
    }

    /// Detects landings from raw height series.
    ///
    /// `ankle` and `other_ankle` are indexed like `foot`; frames missing
    /// from either ankle series pass the ankle criterion.
    #[must_use]
    pub fn detect_heights(
        &self,
        foot: &[f64],
        ankle: &[f64],
        other_ankle: Option<&[f64]>,
    ) -> Vec<usize> {
        let p = &self.params;
        let min_gap = p.refractory_frames(self.fps);
        let n = foot.len();
        if n < p.min_history {
            return Vec::new();
        }

        let ground = ground_level(foot, p.ground_percentile);
        let velocity = vertical_velocity(foot);

        let mut landings = Vec::new();
        let mut last: Option<usize> = None;

        for i in 2..n.saturating_sub(2) {
            let start = i.saturating_sub(p.lookback_frames);

            let descending = velocity[start..i]
                .iter()
                .filter(|&&v| v < p.descent_velocity)
                .count();
            if descending < p.min_descent_frames {
                continue;
            }

            let recent_max = foot[start..i]
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            if recent_max - foot[i] < p.min_height_drop {
                continue;
            }

            if !(velocity[i - 1] <= p.approach_velocity && velocity[i] >= p.settled_velocity) {
                continue;
            }

            let local_min = foot[i] < foot[i - 1] && foot[i] < foot[i + 1];
            let near_ground = foot[i] - ground < p.ground_tolerance;
            let slow = velocity[i].abs() < p.max_contact_speed;
            let below_other = match (ankle.get(i), other_ankle.and_then(|o| o.get(i))) {
                (Some(&a), Some(&o)) => a <= o + p.other_ankle_tolerance,
                _ => true,
            };
            let score = [local_min, near_ground, slow, below_other]
                .iter()
                .filter(|&&c| c)
                .count();
            if score < p.min_secondary_score {
                debug!(frame = i, score, "Landing candidate rejected");
                continue;
            }

            if last.is_some_and(|prev| i - prev < min_gap) {
                debug!(frame = i, "Landing candidate inside refractory window");
                continue;
            }

            debug!(frame = i, score, "Landing accepted");
            landings.push(i);
            last = Some(i);
        }

        info!(
            frames = n,
            landings = landings.len(),
            ground = format!("{ground:.3}"),
            "Landing scan complete"
        );
        landings
    }
}

/// Estimates the ground level as a low percentile of `heights`.
///
/// The sorted index is `floor(n * percentile / 100)`, at least 1 and at
/// most `n - 1`, so a single lowest outlier never defines the ground.
/// Returns `0.0` for an empty slice.
///
/// # Example
///
/// ```
/// use gait_analysis::ground_level;
///
/// let heights = [0.5, -0.2, 0.0, 0.01, 0.3];
/// // Lowest sample is skipped
/// assert!(ground_level(&heights, 3.0).abs() < 1e-12);
/// ```
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn ground_level(heights: &[f64], percentile: f64) -> f64 {
    if heights.is_empty() {
        return 0.0;
    }
    let mut sorted = heights.to_vec();
    sorted.sort_by(f64::total_cmp);
    let raw = (sorted.len() as f64 * percentile / 100.0).floor() as usize;
    let index = raw.max(1).min(sorted.len() - 1);
    sorted[index]
}

/// Per-frame vertical velocity in units per frame.
///
/// Central difference inside, forward difference at the first frame and
/// backward difference at the last.
#[must_use]
pub fn vertical_velocity(heights: &[f64]) -> Vec<f64> {
    let n = heights.len();
    if n < 2 {
        return vec![0.0; n];
    }
    (0..n)
        .map(|i| {
            if i == 0 {
                heights[1] - heights[0]
            } else if i == n - 1 {
                heights[i] - heights[i - 1]
            } else {
                (heights[i + 1] - heights[i - 1]) / 2.0
            }
        })
        .collect()
}
