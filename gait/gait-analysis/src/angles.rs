//! Per-frame joint angle computation.

use gait_types::{
    BilateralAngles, HeadPosture, Joint, JointAngleRecord, JointFrame, KneeRole, Side,
};
use nalgebra::Point3;
use tracing::debug;

use crate::geometry::{angle_between, elbow_angle, knee_angle};
use crate::leg_side::{LegRoles, LegSideClassifier};
use crate::params::LegSideParams;
use crate::symmetry::symmetry_score;

/// Components of the pelvis-to-head vector below this are treated as zero.
const TILT_EPSILON: f64 = 1e-6;

/// Largest head tilt reported, in degrees.
const MAX_TILT_DEG: f64 = 90.0;

/// Turns one skeleton frame into a [`JointAngleRecord`].
///
/// The engine holds no per-session state; the previous pelvis position is
/// passed in by the caller.
///
/// # Example
///
/// ```
/// use gait_analysis::AngleEngine;
/// use gait_types::{Joint, JointFrame, Side};
/// use nalgebra::Point3;
///
/// let mut frame = JointFrame::default();
/// frame.set_position(Joint::LeftHip, Point3::new(0.1, 1.0, 0.0));
/// frame.set_position(Joint::LeftKnee, Point3::new(0.1, 0.55, 0.0));
/// frame.set_position(Joint::LeftAnkle, Point3::new(0.1, 0.1, 0.0));
///
/// let record = AngleEngine::default().compute(&frame, None);
/// assert!((record.knee.left - 180.0).abs() < 1e-6);
/// assert_eq!(record.front_knee.side, Side::Left);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AngleEngine {
    classifier: LegSideClassifier,
}

impl AngleEngine {
    /// Creates an engine with the given leg classification parameters.
    #[must_use]
    pub const fn new(params: LegSideParams) -> Self {
        Self {
            classifier: LegSideClassifier::new(params),
        }
    }

    /// Returns the leg classifier.
    #[must_use]
    pub const fn classifier(&self) -> &LegSideClassifier {
        &self.classifier
    }

    /// Computes every angle for one frame.
    ///
    /// `prev_pelvis` is the pelvis position of the previous frame in the
    /// same session, used to decide which leg leads.
    #[must_use]
    pub fn compute(&self, frame: &JointFrame, prev_pelvis: Option<&Point3<f64>>) -> JointAngleRecord {
        let left_knee = knee_angle(frame, Side::Left);
        let right_knee = knee_angle(frame, Side::Right);
        let left_elbow = elbow_angle(frame, Side::Left);
        let right_elbow = elbow_angle(frame, Side::Right);

        let roles = self
            .classifier
            .resolve_with_knees(frame, prev_pelvis, left_knee, right_knee);
        debug!(
            front = %roles.front,
            method = ?roles.method,
            left_knee,
            right_knee,
            "Resolved leg roles"
        );

        build_record(roles, left_knee, right_knee, left_elbow, right_elbow, frame)
    }
}

fn build_record(
    roles: LegRoles,
    left_knee: f64,
    right_knee: f64,
    left_elbow: f64,
    right_elbow: f64,
    frame: &JointFrame,
) -> JointAngleRecord {
    let knee = BilateralAngles {
        left: left_knee,
        right: right_knee,
        symmetry: symmetry_score(left_knee, right_knee),
    };
    let elbow = BilateralAngles {
        left: left_elbow,
        right: right_elbow,
        symmetry: symmetry_score(left_elbow, right_elbow),
    };

    JointAngleRecord {
        front_knee: KneeRole {
            angle: knee.get(roles.front),
            side: roles.front,
        },
        back_knee: KneeRole {
            angle: knee.get(roles.back),
            side: roles.back,
        },
        back_to_head: HeadPosture {
            angle: head_tilt(frame),
            spine_curvature: spine_curvature(frame),
        },
        elbow,
        knee,
    }
}

/// Signed head tilt from vertical in degrees.
///
/// Measured on the pelvis-to-head vector in the sagittal (Y/Z) plane.
/// Leaning forward gives a negative angle, leaning back a positive one.
/// The result is clamped to `[-90, 90]`; a degenerate vector gives `0.0`.
///
/// # Example
///
/// ```
/// use gait_analysis::head_tilt;
/// use gait_types::{Joint, JointFrame};
/// use nalgebra::Point3;
///
/// let mut frame = JointFrame::default();
/// // Head directly above the pelvis
/// frame.set_position(Joint::Head, Point3::new(0.0, 0.6, 0.0));
/// assert!(head_tilt(&frame).abs() < 1e-12);
///
/// // Head 45 degrees forward
/// frame.set_position(Joint::Head, Point3::new(0.0, 0.5, 0.5));
/// assert!((head_tilt(&frame) + 45.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn head_tilt(frame: &JointFrame) -> f64 {
    let v = frame.segment(Joint::Pelvis, Joint::Head);
    if v.z.abs() < TILT_EPSILON && v.y.abs() < TILT_EPSILON {
        return 0.0;
    }
    (-v.z.atan2(v.y).to_degrees()).clamp(-MAX_TILT_DEG, MAX_TILT_DEG)
}

/// Bend between the lower spine (pelvis to upper chest) and the upper
/// spine (upper chest to head), in degrees. 0 is a straight spine.
#[must_use]
pub fn spine_curvature(frame: &JointFrame) -> f64 {
    angle_between(
        &frame.segment(Joint::Pelvis, Joint::Spine3),
        &frame.segment(Joint::Spine3, Joint::Head),
    )
}
