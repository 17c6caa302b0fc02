//! Per-session gait pipeline.

use gait_types::{AverageRecord, JointAngleRecord, JointFrame, Side};
use nalgebra::Point3;
use tracing::info;

use crate::analysis::analyze_landings;
use crate::angles::AngleEngine;
use crate::error::Result;
use crate::history::FrameHistory;
use crate::kinematics::BodyModel;
use crate::landing::LandingDetector;
use crate::params::SessionParams;
use crate::result::{LandingAnalysis, SessionReport};
use crate::session::SessionAggregator;

/// One analysis session over a stream of poses or frames.
///
/// Owns the body model, the accumulated records, the frame history and
/// the previous pelvis position. Dropping the session releases all of it;
/// [`reset`](Self::reset) starts a new session with the same model.
///
/// A session is not internally synchronized. Share it across threads
/// behind a `Mutex`.
///
/// # Example
///
/// ```
/// use gait_analysis::{GaitSession, KinematicTree, SessionParams};
/// use gait_types::POSE_PARAMS;
///
/// let mut session = GaitSession::new(KinematicTree::t_pose(), SessionParams::default()).unwrap();
///
/// for step in 0..3 {
///     let z = f64::from(step) * 0.02;
///     session.process_pose(&[0.0; POSE_PARAMS], [0.0, 0.9, z]).unwrap();
/// }
///
/// let summary = session.summary().unwrap();
/// assert_eq!(summary.total_frames, 3);
/// ```
#[derive(Debug)]
pub struct GaitSession<M> {
    model: M,
    params: SessionParams,
    engine: AngleEngine,
    detector: LandingDetector,
    aggregator: SessionAggregator,
    history: FrameHistory,
    prev_pelvis: Option<Point3<f64>>,
}

impl<M: BodyModel> GaitSession<M> {
    /// Starts a session.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidParams`](crate::AnalysisError::InvalidParams)
    /// if `params` fail validation.
    pub fn new(model: M, params: SessionParams) -> Result<Self> {
        params.validate()?;
        info!(
            fps = params.fps,
            accumulate = params.accumulate,
            min_frames_between = params.landing.refractory_frames(params.fps),
            "Starting gait session"
        );
        Ok(Self {
            model,
            engine: AngleEngine::new(params.leg_side),
            detector: LandingDetector::new(params.landing, params.fps),
            aggregator: SessionAggregator::new(),
            history: FrameHistory::new(),
            prev_pelvis: None,
            params,
        })
    }

    /// Runs forward kinematics on a pose, then processes the frame.
    ///
    /// # Errors
    ///
    /// Returns the body model's error for a malformed pose. The session is
    /// left unchanged in that case.
    pub fn process_pose(&mut self, pose: &[f64], translation: [f64; 3]) -> Result<JointAngleRecord> {
        let frame = self.model.forward_kinematics(pose, translation)?;
        self.process_frame(&frame)
    }

    /// Computes angles for a frame and records it.
    ///
    /// The pelvis of this frame becomes the travel reference for the next.
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::NonFiniteCoordinate`](gait_types::GaitError::NonFiniteCoordinate)
    /// if any joint position is NaN or infinite. The session is left
    /// unchanged in that case.
    pub fn process_frame(&mut self, frame: &JointFrame) -> Result<JointAngleRecord> {
        frame.validate()?;
        let record = self.engine.compute(frame, self.prev_pelvis.as_ref());
        if self.params.accumulate {
            self.aggregator.append(record);
            self.history.push(*frame);
        }
        self.prev_pelvis = Some(frame.pelvis());
        Ok(record)
    }

    /// Summarizes the recorded frames, `None` if nothing was recorded.
    #[must_use]
    pub fn summary(&self) -> Option<AverageRecord> {
        self.aggregator.summarize()
    }

    /// Scans the recorded history for landings of both feet.
    #[must_use]
    pub fn detect_landings(&self) -> LandingAnalysis {
        let frames = self.history.frames();
        let left = self.detector.detect_foot(frames, Side::Left);
        let right = self.detector.detect_foot(frames, Side::Right);
        analyze_landings(self.aggregator.records(), &left, &right, self.params.fps)
    }

    /// Builds the full session report, `None` if nothing was recorded.
    #[must_use]
    pub fn report(&self) -> Option<SessionReport> {
        let summary = self.summary()?;
        Some(SessionReport::new(
            self.aggregator.records(),
            &summary,
            self.detect_landings(),
        ))
    }

    /// Clears records, history and the travel reference.
    pub fn reset(&mut self) {
        let stats = self.history.stats(self.params.fps);
        info!(
            frames = stats.count,
            duration_secs = ?stats.duration_secs,
            "Resetting gait session"
        );
        self.aggregator.reset();
        self.history.clear();
        self.prev_pelvis = None;
    }
}

impl<M> GaitSession<M> {
    /// Returns the session parameters.
    #[must_use]
    pub const fn params(&self) -> &SessionParams {
        &self.params
    }

    /// Returns the body model.
    #[must_use]
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Returns the recorded frames.
    #[must_use]
    pub const fn history(&self) -> &FrameHistory {
        &self.history
    }

    /// Returns the recorded angle records.
    #[must_use]
    pub const fn aggregator(&self) -> &SessionAggregator {
        &self.aggregator
    }

    /// Returns the pelvis position of the last processed frame.
    #[must_use]
    pub const fn prev_pelvis(&self) -> Option<&Point3<f64>> {
        self.prev_pelvis.as_ref()
    }

    /// Consumes the session and returns the body model.
    #[must_use]
    pub fn into_model(self) -> M {
        self.model
    }
}
