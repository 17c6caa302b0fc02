//! Parameters for the analysis pipeline.
//!
//! Every empirical threshold used by the pipeline lives here as a named
//! field. Defaults reproduce the tuned values for 30 fps skeleton streams.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Default stream rate in frames per second.
pub const DEFAULT_FPS: f64 = 30.0;

/// Default refractory window between two landings of the same foot, in seconds.
pub const DEFAULT_REFRACTORY_SECS: f64 = 0.4;

/// Parameters for front/back leg classification.
///
/// # Example
///
/// ```
/// use gait_analysis::LegSideParams;
///
/// let params = LegSideParams::default();
/// assert!((params.knee_difference_deg - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LegSideParams {
    /// Pelvis displacement (meters per frame) below which travel direction
    /// is considered unknown and the velocity method abstains.
    pub min_travel: f64,

    /// Knee angle difference (degrees) above which the more extended knee
    /// is taken as the front leg.
    pub knee_difference_deg: f64,
}

impl Default for LegSideParams {
    fn default() -> Self {
        Self {
            min_travel: 1e-6,
            knee_difference_deg: 5.0,
        }
    }
}

impl LegSideParams {
    /// Sets the minimum pelvis travel.
    #[must_use]
    pub const fn with_min_travel(mut self, min_travel: f64) -> Self {
        self.min_travel = min_travel;
        self
    }

    /// Sets the knee difference threshold.
    #[must_use]
    pub const fn with_knee_difference(mut self, degrees: f64) -> Self {
        self.knee_difference_deg = degrees;
        self
    }
}

/// Parameters for foot-landing detection.
///
/// Heights are in meters and velocities in meters per frame, so the
/// velocity thresholds assume roughly 30 fps input.
///
/// # Example
///
/// ```
/// use gait_analysis::LandingParams;
///
/// // Refractory window follows the frame rate (0.4 s)
/// assert_eq!(LandingParams::default().refractory_frames(30.0), 12);
/// assert_eq!(LandingParams::default().refractory_frames(60.0), 24);
/// assert_eq!(LandingParams::for_fps(60.0).min_frames_between, Some(24));
///
/// let strict = LandingParams::default().with_min_secondary_score(4);
/// assert_eq!(strict.min_secondary_score, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LandingParams {
    /// Histories shorter than this produce no events.
    pub min_history: usize,

    /// Frames inspected before a candidate for the descent and drop checks.
    pub lookback_frames: usize,

    /// Minimum number of descending frames in the lookback window.
    pub min_descent_frames: usize,

    /// Velocity below which a lookback frame counts as descending.
    pub descent_velocity: f64,

    /// Minimum drop from the lookback maximum to the candidate height.
    pub min_height_drop: f64,

    /// The frame before the candidate must be at or below this velocity.
    pub approach_velocity: f64,

    /// The candidate frame must be at or above this velocity.
    pub settled_velocity: f64,

    /// Percentile of foot heights used as the ground estimate.
    pub ground_percentile: f64,

    /// Maximum height above the ground estimate.
    pub ground_tolerance: f64,

    /// Maximum absolute velocity at the candidate frame.
    pub max_contact_speed: f64,

    /// Allowed excess of this ankle over the other ankle.
    pub other_ankle_tolerance: f64,

    /// Secondary criteria that must hold (out of four).
    pub min_secondary_score: usize,

    /// Minimum frames between two landings of the same foot.
    ///
    /// `None` derives [`DEFAULT_REFRACTORY_SECS`] from the stream rate.
    pub min_frames_between: Option<usize>,
}

impl Default for LandingParams {
    fn default() -> Self {
        Self {
            min_history: 5,
            lookback_frames: 10,
            min_descent_frames: 2,
            descent_velocity: -0.001,   // 1 mm/frame downwards
            min_height_drop: 0.03,      // 3 cm
            approach_velocity: -0.003,  // 3 mm/frame downwards
            settled_velocity: -0.002,   // stopped or rising
            ground_percentile: 3.0,     // robust against low outliers
            ground_tolerance: 0.08,     // 8 cm
            max_contact_speed: 0.008,   // 8 mm/frame
            other_ankle_tolerance: 0.02, // both feet grounded
            min_secondary_score: 3,
            min_frames_between: None,
        }
    }
}

impl LandingParams {
    /// Creates parameters with the refractory window fixed for `fps`.
    #[must_use]
    pub fn for_fps(fps: f64) -> Self {
        Self::default().with_min_frames_between(refractory_frames_for(fps))
    }

    /// Refractory window in frames for a stream at `fps`.
    #[must_use]
    pub fn refractory_frames(&self, fps: f64) -> usize {
        self.min_frames_between
            .unwrap_or_else(|| refractory_frames_for(fps))
    }

    /// Sets the refractory window in frames.
    #[must_use]
    pub const fn with_min_frames_between(mut self, frames: usize) -> Self {
        self.min_frames_between = Some(frames);
        self
    }

    /// Sets the required number of secondary criteria.
    #[must_use]
    pub const fn with_min_secondary_score(mut self, score: usize) -> Self {
        self.min_secondary_score = score;
        self
    }

    /// Sets the ground proximity tolerance.
    #[must_use]
    pub const fn with_ground_tolerance(mut self, meters: f64) -> Self {
        self.ground_tolerance = meters;
        self
    }

    /// Sets the minimum height drop.
    #[must_use]
    pub const fn with_min_height_drop(mut self, meters: f64) -> Self {
        self.min_height_drop = meters;
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidParams`] if the refractory window is
    /// zero, the secondary score exceeds four, or the percentile is outside
    /// `[0, 100]`.
    pub fn validate(&self) -> Result<()> {
        if self.min_frames_between == Some(0) {
            return Err(AnalysisError::invalid_params(
                "min_frames_between must be at least 1",
            ));
        }
        if self.min_secondary_score > 4 {
            return Err(AnalysisError::invalid_params(format!(
                "min_secondary_score {} exceeds the 4 available criteria",
                self.min_secondary_score
            )));
        }
        if !(0.0..=100.0).contains(&self.ground_percentile) {
            return Err(AnalysisError::invalid_params(format!(
                "ground_percentile {} not in [0, 100]",
                self.ground_percentile
            )));
        }
        Ok(())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn refractory_frames_for(fps: f64) -> usize {
    (DEFAULT_REFRACTORY_SECS * fps).round().max(1.0) as usize
}

/// Parameters for a [`GaitSession`](crate::GaitSession).
///
/// # Example
///
/// ```
/// use gait_analysis::SessionParams;
///
/// let params = SessionParams::for_fps(60.0);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.landing.refractory_frames(params.fps), 24);
///
/// assert!(SessionParams::for_fps(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionParams {
    /// Stream rate, used to convert frame indices to seconds.
    pub fps: f64,

    /// Whether processed frames are recorded for summaries and landing scans.
    pub accumulate: bool,

    /// Leg classification parameters.
    pub leg_side: LegSideParams,

    /// Landing detection parameters.
    pub landing: LandingParams,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self::for_fps(DEFAULT_FPS)
    }
}

impl SessionParams {
    /// Creates session parameters for a stream rate.
    #[must_use]
    pub fn for_fps(fps: f64) -> Self {
        Self {
            fps,
            accumulate: true,
            leg_side: LegSideParams::default(),
            landing: LandingParams::default(),
        }
    }

    /// Enables or disables accumulation.
    #[must_use]
    pub const fn with_accumulate(mut self, accumulate: bool) -> Self {
        self.accumulate = accumulate;
        self
    }

    /// Sets the leg classification parameters.
    #[must_use]
    pub const fn with_leg_side(mut self, leg_side: LegSideParams) -> Self {
        self.leg_side = leg_side;
        self
    }

    /// Sets the landing detection parameters.
    #[must_use]
    pub const fn with_landing(mut self, landing: LandingParams) -> Self {
        self.landing = landing;
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidParams`] for a non-positive or
    /// non-finite frame rate, or invalid landing parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(AnalysisError::invalid_params(format!(
                "fps must be positive, got {}",
                self.fps
            )));
        }
        self.landing.validate()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn default_landing_params() {
        let params = LandingParams::default();
        assert_eq!(params.min_history, 5);
        assert_eq!(params.lookback_frames, 10);
        assert_eq!(params.min_frames_between, None);
        assert_eq!(params.refractory_frames(DEFAULT_FPS), 12);
        assert!((params.min_height_drop - 0.03).abs() < f64::EPSILON);
        assert!((params.ground_tolerance - 0.08).abs() < f64::EPSILON);
        assert!((params.max_contact_speed - 0.008).abs() < f64::EPSILON);
    }

    #[test]
    fn refractory_scales_with_fps() {
        assert_eq!(LandingParams::for_fps(25.0).min_frames_between, Some(10));
        assert_eq!(LandingParams::default().refractory_frames(1.0), 1);
        // An explicit window ignores the stream rate
        let fixed = LandingParams::default().with_min_frames_between(7);
        assert_eq!(fixed.refractory_frames(120.0), 7);
    }

    #[test]
    fn builder_pattern() {
        let params = LandingParams::default()
            .with_min_frames_between(20)
            .with_ground_tolerance(0.05)
            .with_min_height_drop(0.04);
        assert_eq!(params.min_frames_between, Some(20));
        assert_eq!(params.ground_tolerance, 0.05);
        assert_eq!(params.min_height_drop, 0.04);
    }

    #[test]
    fn validate_rejects_bad_landing_params() {
        assert!(LandingParams::default().validate().is_ok());
        assert!(
            LandingParams::default()
                .with_min_frames_between(0)
                .validate()
                .is_err()
        );
        assert!(
            LandingParams::default()
                .with_min_secondary_score(5)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn validate_rejects_bad_fps() {
        assert!(SessionParams::default().validate().is_ok());
        assert!(SessionParams::for_fps(-30.0).validate().is_err());
        assert!(SessionParams::for_fps(f64::NAN).validate().is_err());
    }

    #[test]
    fn session_builder() {
        let params = SessionParams::default()
            .with_accumulate(false)
            .with_leg_side(LegSideParams::default().with_knee_difference(8.0));
        assert!(!params.accumulate);
        assert_eq!(params.leg_side.knee_difference_deg, 8.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn params_deserialize_with_defaults() {
        let params: SessionParams =
            serde_json::from_str(r#"{ "fps": 60.0, "landing": { "min_frames_between": 30 } }"#)
                .unwrap();
        assert_eq!(params.fps, 60.0);
        assert!(params.accumulate);
        assert_eq!(params.landing.min_frames_between, Some(30));
        assert_eq!(params.landing.lookback_frames, 10);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn fps_only_config_scales_refractory() {
        let params: SessionParams = serde_json::from_str(r#"{ "fps": 60.0 }"#).unwrap();
        assert_eq!(params.landing.refractory_frames(params.fps), 24);

        let params: SessionParams =
            serde_json::from_str(r#"{ "fps": 50.0, "landing": { "lookback_frames": 8 } }"#)
                .unwrap();
        assert_eq!(params.landing.lookback_frames, 8);
        assert_eq!(params.landing.refractory_frames(params.fps), 20);
    }
}
