//! Per-frame joint angle records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{LegRole, Side};

/// Knee angle tagged with the leg it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KneeRole {
    /// Interior knee angle in degrees (180 = fully extended).
    pub angle: f64,
    /// Which leg holds this role.
    pub side: Side,
}

/// Trunk and head posture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HeadPosture {
    /// Head tilt from vertical in degrees, clamped to `[-90, 90]`.
    /// Negative when leaning forward (looking down), positive when leaning back.
    pub angle: f64,
    /// Angle between the lower and upper spine segments in degrees.
    pub spine_curvature: f64,
}

/// A left/right angle pair with its symmetry score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BilateralAngles {
    /// Left-side angle in degrees.
    pub left: f64,
    /// Right-side angle in degrees.
    pub right: f64,
    /// Symmetry percentage in `[0, 100]`.
    pub symmetry: f64,
}

impl BilateralAngles {
    /// Returns the angle for one side.
    #[must_use]
    pub const fn get(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// All joint angles computed from a single frame.
///
/// Created once per processed frame and never mutated afterwards.
///
/// # Example
///
/// ```
/// use gait_types::{BilateralAngles, HeadPosture, JointAngleRecord, KneeRole, LegRole, Side};
///
/// let record = JointAngleRecord {
///     front_knee: KneeRole { angle: 170.0, side: Side::Right },
///     back_knee: KneeRole { angle: 140.0, side: Side::Left },
///     back_to_head: HeadPosture::default(),
///     elbow: BilateralAngles { left: 90.0, right: 90.0, symmetry: 100.0 },
///     knee: BilateralAngles { left: 140.0, right: 170.0, symmetry: 80.6 },
/// };
///
/// assert_eq!(record.role_of(Side::Right), LegRole::Front);
/// assert!((record.knee_angle_for(Side::Left) - 140.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct JointAngleRecord {
    /// Knee of the leading leg.
    pub front_knee: KneeRole,
    /// Knee of the trailing leg.
    pub back_knee: KneeRole,
    /// Head tilt and spine curvature.
    pub back_to_head: HeadPosture,
    /// Elbow angles.
    pub elbow: BilateralAngles,
    /// Knee angles by anatomical side.
    pub knee: BilateralAngles,
}

impl JointAngleRecord {
    /// Returns the role the given leg played in this frame.
    #[must_use]
    pub fn role_of(&self, side: Side) -> LegRole {
        if self.front_knee.side == side {
            LegRole::Front
        } else {
            LegRole::Back
        }
    }

    /// Returns the knee angle of the given leg, read through its role.
    #[must_use]
    pub fn knee_angle_for(&self, side: Side) -> f64 {
        match self.role_of(side) {
            LegRole::Front => self.front_knee.angle,
            LegRole::Back => self.back_knee.angle,
        }
    }
}
