//! Angle geometry on joint positions.

use gait_types::{Joint, JointFrame, Side};
use nalgebra::Vector3;

/// Vectors shorter than this are treated as degenerate.
pub const NORM_EPSILON: f64 = 1e-8;

/// Angle between two vectors in degrees, in `[0, 180]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos`. If either vector is
/// shorter than [`NORM_EPSILON`] the angle is `0.0`.
///
/// # Example
///
/// ```
/// use gait_analysis::angle_between;
/// use nalgebra::Vector3;
///
/// let up = Vector3::new(0.0, 1.0, 0.0);
/// let forward = Vector3::new(0.0, 0.0, 1.0);
/// assert!((angle_between(&up, &forward) - 90.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn angle_between(v1: &Vector3<f64>, v2: &Vector3<f64>) -> f64 {
    let n1 = v1.norm();
    let n2 = v2.norm();
    if n1 < NORM_EPSILON || n2 < NORM_EPSILON {
        return 0.0;
    }
    let cos = (v1.dot(v2) / (n1 * n2)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Interior angle at `vertex` between the segments towards `a` and `b`.
#[must_use]
pub fn interior_angle(frame: &JointFrame, vertex: Joint, a: Joint, b: Joint) -> f64 {
    angle_between(&frame.segment(vertex, a), &frame.segment(vertex, b))
}

/// Knee angle (hip-knee-ankle) for one leg. 180 is a straight leg.
#[must_use]
pub fn knee_angle(frame: &JointFrame, side: Side) -> f64 {
    interior_angle(
        frame,
        Joint::knee(side),
        Joint::hip(side),
        Joint::ankle(side),
    )
}

/// Elbow angle (shoulder-elbow-wrist) for one arm. 180 is a straight arm.
#[must_use]
pub fn elbow_angle(frame: &JointFrame, side: Side) -> f64 {
    interior_angle(
        frame,
        Joint::elbow(side),
        Joint::shoulder(side),
        Joint::wrist(side),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use proptest::prelude::*;

    #[test]
    fn right_angle() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 0.0, 2.5);
        assert_relative_eq!(angle_between(&a, &b), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_vector_is_zero_angle() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(angle_between(&a, &Vector3::zeros()), 0.0);
        assert_relative_eq!(angle_between(&Vector3::zeros(), &Vector3::zeros()), 0.0);
    }

    #[test]
    fn straight_knee() {
        let mut frame = JointFrame::default();
        frame.set_position(Joint::LeftHip, Point3::new(0.1, 1.0, 0.0));
        frame.set_position(Joint::LeftKnee, Point3::new(0.1, 0.55, 0.0));
        frame.set_position(Joint::LeftAnkle, Point3::new(0.1, 0.1, 0.0));
        assert_relative_eq!(knee_angle(&frame, Side::Left), 180.0, epsilon = 1e-6);
    }

    #[test]
    fn bent_elbow() {
        let mut frame = JointFrame::default();
        frame.set_position(Joint::RightShoulder, Point3::new(-0.2, 1.4, 0.0));
        frame.set_position(Joint::RightElbow, Point3::new(-0.2, 1.1, 0.0));
        frame.set_position(Joint::RightWrist, Point3::new(-0.2, 1.1, 0.25));
        assert_relative_eq!(elbow_angle(&frame, Side::Right), 90.0, epsilon = 1e-9);
    }

    fn non_degenerate() -> impl Strategy<Value = Vector3<f64>> {
        prop::array::uniform3(-10.0..10.0f64)
            .prop_map(|[x, y, z]| Vector3::new(x, y, z))
            .prop_filter("non-degenerate", |v| v.norm() > 1e-3)
    }

    proptest! {
        #[test]
        fn proptest_self_angle_is_zero(v in non_degenerate()) {
            prop_assert!(angle_between(&v, &v).abs() < 1e-4);
        }

        #[test]
        fn proptest_opposite_angle_is_180(v in non_degenerate()) {
            prop_assert!((angle_between(&v, &-v) - 180.0).abs() < 1e-4);
        }

        #[test]
        fn proptest_angle_in_range(a in non_degenerate(), b in non_degenerate()) {
            let angle = angle_between(&a, &b);
            prop_assert!((0.0..=180.0).contains(&angle));
            prop_assert!((angle - angle_between(&b, &a)).abs() < 1e-9);
        }
    }
}
