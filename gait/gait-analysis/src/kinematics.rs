//! Pose-to-position conversion.
//!
//! A [`BodyModel`] turns per-joint axis-angle rotations plus a root
//! translation into world joint positions. [`KinematicTree`] is a rigid
//! implementation that rotates a fixed rest skeleton along the joint
//! hierarchy; statistical body models plug in through the same trait.

use gait_types::{GaitError, JOINT_COUNT, Joint, JointFrame, POSE_PARAMS};
use nalgebra::{Point3, UnitQuaternion, Vector3};

use crate::error::{AnalysisError, Result};

/// Forward kinematics collaborator.
///
/// Constructed once by the caller and moved into a
/// [`GaitSession`](crate::GaitSession).
pub trait BodyModel {
    /// Computes joint positions from `pose` (24 joints x 3 axis-angle
    /// values, radians) and the root `translation` in meters.
    ///
    /// # Errors
    ///
    /// Returns an error if `pose` does not hold exactly
    /// [`POSE_PARAMS`] finite values, or the model cannot evaluate it.
    fn forward_kinematics(&self, pose: &[f64], translation: [f64; 3]) -> Result<JointFrame>;
}

impl<M: BodyModel + ?Sized> BodyModel for Box<M> {
    fn forward_kinematics(&self, pose: &[f64], translation: [f64; 3]) -> Result<JointFrame> {
        (**self).forward_kinematics(pose, translation)
    }
}

/// Rest-pose joint positions of an average adult in a T-pose, pelvis-relative.
const T_POSE: [[f64; 3]; JOINT_COUNT] = [
    [-0.0022, -0.2409, 0.0286],
    [0.0586, -0.3247, 0.0104],
    [-0.0603, -0.3309, 0.0146],
    [0.0044, -0.1154, -0.0012],
    [0.1044, -0.7032, 0.0173],
    [-0.1056, -0.7153, 0.0101],
    [0.0098, 0.0197, 0.0286],
    [0.0917, -1.1305, -0.0253],
    [-0.0919, -1.1399, -0.0238],
    [0.0077, 0.0725, 0.0322],
    [0.1185, -1.1916, 0.0999],
    [-0.1157, -1.1958, 0.1039],
    [-0.0016, 0.2845, 0.0112],
    [0.0760, 0.1918, 0.0176],
    [-0.0764, 0.1905, 0.0161],
    [0.0136, 0.3730, 0.0615],
    [0.1999, 0.2390, 0.0106],
    [-0.1910, 0.2370, -0.0027],
    [0.4542, 0.2213, -0.0253],
    [-0.4532, 0.2226, -0.0375],
    [0.7192, 0.2341, -0.0263],
    [-0.7227, 0.2296, -0.0378],
    [0.8036, 0.2248, -0.0389],
    [-0.8082, 0.2180, -0.0483],
];

/// Rigid forward kinematics over the joint hierarchy.
///
/// For a joint `j` with parent `p`:
///
/// - `R_j = R_p * exp(pose_j)`
/// - `x_j = x_p + R_p * (rest_j - rest_p)`
///
/// and at the root `R_0 = exp(pose_0)`, `x_0 = rest_0 + translation`.
/// Bone lengths are preserved for every pose.
///
/// # Example
///
/// ```
/// use gait_analysis::{BodyModel, KinematicTree};
/// use gait_types::{Joint, POSE_PARAMS};
///
/// let tree = KinematicTree::t_pose();
/// let frame = tree.forward_kinematics(&[0.0; POSE_PARAMS], [0.0, 1.0, 0.0]).unwrap();
///
/// let rest = tree.rest_pose().position(Joint::Head);
/// assert!((frame.position(Joint::Head).y - (rest.y + 1.0)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct KinematicTree {
    rest: JointFrame,
}

impl KinematicTree {
    /// Creates a tree from rest joint positions.
    ///
    /// # Errors
    ///
    /// Returns an error if a rest position is not finite.
    pub fn new(rest: JointFrame) -> Result<Self> {
        rest.validate()?;
        Ok(Self { rest })
    }

    /// Tree with a built-in average adult T-pose skeleton.
    #[must_use]
    pub fn t_pose() -> Self {
        Self {
            rest: JointFrame::new(T_POSE.map(|[x, y, z]| Point3::new(x, y, z))),
        }
    }

    /// Returns the rest joint positions.
    #[must_use]
    pub const fn rest_pose(&self) -> &JointFrame {
        &self.rest
    }
}

impl BodyModel for KinematicTree {
    fn forward_kinematics(&self, pose: &[f64], translation: [f64; 3]) -> Result<JointFrame> {
        if pose.len() != POSE_PARAMS {
            return Err(GaitError::pose_length(POSE_PARAMS, pose.len()).into());
        }
        if let Some(index) = pose.iter().position(|v| !v.is_finite()) {
            return Err(AnalysisError::body_model(format!(
                "non-finite pose value at index {index}"
            )));
        }

        let mut rotations = [UnitQuaternion::identity(); JOINT_COUNT];
        let mut positions = [Point3::origin(); JOINT_COUNT];

        for joint in Joint::ALL {
            let j = joint.index();
            let axis_angle = Vector3::new(pose[3 * j], pose[3 * j + 1], pose[3 * j + 2]);
            let local = UnitQuaternion::from_scaled_axis(axis_angle);
            let rest = self.rest.position(joint);

            // Parents always precede children in joint order
            match joint.parent() {
                None => {
                    rotations[j] = local;
                    positions[j] = rest + Vector3::from(translation);
                }
                Some(parent) => {
                    let p = parent.index();
                    let bone = rest - self.rest.position(parent);
                    positions[j] = positions[p] + rotations[p] * bone;
                    rotations[j] = rotations[p] * local;
                }
            }
        }

        let frame = JointFrame::new(positions);
        frame.validate()?;
        Ok(frame)
    }
}
