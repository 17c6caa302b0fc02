//! Front/back leg classification.
//!
//! Two methods are tried in strict order; the first that can decide wins:
//!
//! 1. **Velocity**: project each foot onto the pelvis displacement
//!    since the previous frame. Abstains on the first frame of a session or
//!    when the pelvis barely moved.
//! 2. **Knee extension**: the straighter knee belongs to the front leg.
//!
//! The two signals are never blended.

use gait_types::{Joint, JointFrame, Side};
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::knee_angle;
use crate::params::LegSideParams;

/// Which method decided the leg roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClassificationMethod {
    /// Foot projection onto the pelvis travel direction.
    Velocity,
    /// Knee extension comparison.
    KneeExtension,
}

/// Resolved leg roles for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegRoles {
    /// Leading leg.
    pub front: Side,
    /// Trailing leg (always the opposite of `front`).
    pub back: Side,
    /// Method that produced this result.
    pub method: ClassificationMethod,
}

impl LegRoles {
    const fn with_front(front: Side, method: ClassificationMethod) -> Self {
        Self {
            front,
            back: front.opposite(),
            method,
        }
    }
}

/// Resolves which leg is in front.
///
/// Deterministic: identical inputs always produce identical roles.
///
/// # Example
///
/// ```
/// use gait_analysis::{ClassificationMethod, LegSideClassifier, LegSideParams};
/// use gait_types::{Joint, JointFrame, Side};
/// use nalgebra::Point3;
///
/// let mut frame = JointFrame::default();
/// frame.set_position(Joint::LeftFoot, Point3::new(0.1, 0.0, 0.3));
/// frame.set_position(Joint::RightFoot, Point3::new(-0.1, 0.0, -0.2));
///
/// // Pelvis moved forward (+Z) since the last frame
/// let previous = Point3::new(0.0, 0.0, -0.05);
///
/// let classifier = LegSideClassifier::new(LegSideParams::default());
/// let roles = classifier.resolve(&frame, Some(&previous));
/// assert_eq!(roles.front, Side::Left);
/// assert_eq!(roles.method, ClassificationMethod::Velocity);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LegSideClassifier {
    params: LegSideParams,
}

impl LegSideClassifier {
    /// Creates a classifier.
    #[must_use]
    pub const fn new(params: LegSideParams) -> Self {
        Self { params }
    }

    /// Returns the classifier parameters.
    #[must_use]
    pub const fn params(&self) -> &LegSideParams {
        &self.params
    }

    /// Resolves leg roles, computing knee angles when the fallback is needed.
    #[must_use]
    pub fn resolve(&self, frame: &JointFrame, prev_pelvis: Option<&Point3<f64>>) -> LegRoles {
        if let Some(front) = prev_pelvis.and_then(|prev| self.front_by_travel(frame, prev)) {
            return LegRoles::with_front(front, ClassificationMethod::Velocity);
        }
        let front = self.front_by_extension(
            knee_angle(frame, Side::Left),
            knee_angle(frame, Side::Right),
        );
        LegRoles::with_front(front, ClassificationMethod::KneeExtension)
    }

    /// Resolves leg roles with knee angles the caller already computed.
    #[must_use]
    pub fn resolve_with_knees(
        &self,
        frame: &JointFrame,
        prev_pelvis: Option<&Point3<f64>>,
        left_knee: f64,
        right_knee: f64,
    ) -> LegRoles {
        if let Some(front) = prev_pelvis.and_then(|prev| self.front_by_travel(frame, prev)) {
            return LegRoles::with_front(front, ClassificationMethod::Velocity);
        }
        LegRoles::with_front(
            self.front_by_extension(left_knee, right_knee),
            ClassificationMethod::KneeExtension,
        )
    }

    /// Picks the front leg from the pelvis travel direction.
    ///
    /// Returns `None` when the pelvis moved less than `min_travel`.
    /// Equal projections resolve to the right leg.
    #[must_use]
    pub fn front_by_travel(&self, frame: &JointFrame, prev_pelvis: &Point3<f64>) -> Option<Side> {
        let pelvis = frame.pelvis();
        let travel = pelvis - *prev_pelvis;
        let magnitude = travel.norm();
        if magnitude < self.params.min_travel {
            return None;
        }
        let direction = travel / magnitude;

        let left = (frame.position(Joint::LeftFoot) - pelvis).dot(&direction);
        let right = (frame.position(Joint::RightFoot) - pelvis).dot(&direction);

        Some(if left > right { Side::Left } else { Side::Right })
    }

    /// Picks the front leg from knee extension.
    ///
    /// Above the threshold the straighter knee wins; within it, left wins
    /// whenever `left >= right`.
    #[must_use]
    pub fn front_by_extension(&self, left_knee: f64, right_knee: f64) -> Side {
        if (left_knee - right_knee).abs() > self.params.knee_difference_deg {
            if left_knee > right_knee {
                Side::Left
            } else {
                Side::Right
            }
        } else if left_knee >= right_knee {
            Side::Left
        } else {
            Side::Right
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classifier() -> LegSideClassifier {
        LegSideClassifier::new(LegSideParams::default())
    }

    /// Frame with the pelvis at `pelvis` and feet offset along Z.
    fn frame_with_feet(pelvis: Point3<f64>, left_z: f64, right_z: f64) -> JointFrame {
        let mut frame = JointFrame::filled(pelvis);
        frame.set_position(Joint::LeftFoot, Point3::new(pelvis.x + 0.1, 0.0, pelvis.z + left_z));
        frame.set_position(Joint::RightFoot, Point3::new(pelvis.x - 0.1, 0.0, pelvis.z + right_z));
        frame
    }

    #[test]
    fn travel_forward_picks_leading_foot() {
        let frame = frame_with_feet(Point3::new(0.0, 0.9, 1.0), -0.2, 0.3);
        let prev = Point3::new(0.0, 0.9, 0.95);
        let roles = classifier().resolve(&frame, Some(&prev));
        assert_eq!(roles.front, Side::Right);
        assert_eq!(roles.back, Side::Left);
        assert_eq!(roles.method, ClassificationMethod::Velocity);
    }

    #[test]
    fn travel_backward_flips_roles() {
        let frame = frame_with_feet(Point3::new(0.0, 0.9, 1.0), -0.2, 0.3);
        let prev = Point3::new(0.0, 0.9, 1.05);
        let roles = classifier().resolve(&frame, Some(&prev));
        assert_eq!(roles.front, Side::Left);
    }

    #[test]
    fn stationary_pelvis_falls_back() {
        let frame = frame_with_feet(Point3::new(0.0, 0.9, 1.0), -0.2, 0.3);
        let prev = frame.pelvis();
        let roles = classifier().resolve(&frame, Some(&prev));
        assert_eq!(roles.method, ClassificationMethod::KneeExtension);
    }

    #[test]
    fn first_frame_falls_back() {
        let frame = frame_with_feet(Point3::new(0.0, 0.9, 1.0), -0.2, 0.3);
        let roles = classifier().resolve(&frame, None);
        assert_eq!(roles.method, ClassificationMethod::KneeExtension);
    }

    #[test]
    fn extension_beyond_threshold() {
        let c = classifier();
        assert_eq!(c.front_by_extension(170.0, 150.0), Side::Left);
        assert_eq!(c.front_by_extension(150.0, 170.0), Side::Right);
    }

    #[test]
    fn extension_within_threshold_tie_break() {
        let c = classifier();
        assert_eq!(c.front_by_extension(160.0, 160.0), Side::Left);
        assert_eq!(c.front_by_extension(162.0, 160.0), Side::Left);
        assert_eq!(c.front_by_extension(158.0, 160.0), Side::Right);
    }

    #[test]
    fn resolve_with_knees_matches_resolve() {
        let frame = frame_with_feet(Point3::new(0.0, 0.9, 0.0), 0.1, -0.1);
        let c = classifier();
        let left = knee_angle(&frame, Side::Left);
        let right = knee_angle(&frame, Side::Right);
        assert_eq!(
            c.resolve(&frame, None),
            c.resolve_with_knees(&frame, None, left, right)
        );
    }

    proptest! {
        #[test]
        fn proptest_deterministic(
            coords in prop::collection::vec(prop::array::uniform3(-1.0..1.0f64), 24),
            prev in prop::array::uniform3(-1.0..1.0f64),
            use_prev in any::<bool>(),
        ) {
            let frame = JointFrame::from_slice(&coords).unwrap();
            let prev = Point3::new(prev[0], prev[1], prev[2]);
            let prev = use_prev.then_some(&prev);
            let c = classifier();
            let first = c.resolve(&frame, prev);
            let second = c.resolve(&frame, prev);
            prop_assert_eq!(first, second);
            prop_assert_ne!(first.front, first.back);
        }
    }
}
