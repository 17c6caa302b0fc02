//! Joint-position frames.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{GaitError, JOINT_COUNT, Joint, Result};

/// One skeleton sample: a world-space position for every [`Joint`].
///
/// Positions are in meters, Y is vertical and Z is forward. The joint count
/// is fixed by the type; constructors that accept untyped input validate
/// it.
///
/// # Example
///
/// ```
/// use gait_types::{Joint, JointFrame};
///
/// let coords = vec![[0.0, 1.0, 0.0]; 24];
/// let frame = JointFrame::from_slice(&coords).unwrap();
/// assert!((frame.height(Joint::Pelvis) - 1.0).abs() < 1e-12);
///
/// // Wrong joint count is a structural error
/// assert!(JointFrame::from_slice(&coords[..17]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JointFrame {
    positions: [Point3<f64>; JOINT_COUNT],
}

impl JointFrame {
    /// Creates a frame from typed positions.
    #[must_use]
    pub const fn new(positions: [Point3<f64>; JOINT_COUNT]) -> Self {
        Self { positions }
    }

    /// Creates a frame with every joint at the same position.
    #[must_use]
    pub fn filled(position: Point3<f64>) -> Self {
        Self::new([position; JOINT_COUNT])
    }

    /// Creates a frame from `[x, y, z]` triples.
    ///
    /// # Errors
    ///
    /// - [`GaitError::JointCountMismatch`] if `coords.len() != JOINT_COUNT`
    /// - [`GaitError::NonFiniteCoordinate`] if any value is `NaN` or infinite
    pub fn from_slice(coords: &[[f64; 3]]) -> Result<Self> {
        if coords.len() != JOINT_COUNT {
            return Err(GaitError::joint_count(JOINT_COUNT, coords.len()));
        }

        let mut positions = [Point3::origin(); JOINT_COUNT];
        for (joint, (slot, xyz)) in positions.iter_mut().zip(coords).enumerate() {
            if let Some(axis) = xyz.iter().position(|v| !v.is_finite()) {
                return Err(GaitError::non_finite(joint, axis));
            }
            *slot = Point3::new(xyz[0], xyz[1], xyz[2]);
        }
        Ok(Self { positions })
    }

    /// Creates a frame from a flat `[x0, y0, z0, x1, ...]` buffer.
    ///
    /// # Errors
    ///
    /// Same as [`JointFrame::from_slice`]; a length that is not a multiple
    /// of three is reported as a joint count mismatch.
    pub fn from_flat(values: &[f64]) -> Result<Self> {
        if values.len() != JOINT_COUNT * 3 {
            return Err(GaitError::joint_count(JOINT_COUNT, values.len() / 3));
        }
        let coords: Vec<[f64; 3]> = values
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Self::from_slice(&coords)
    }

    /// Checks every coordinate is finite.
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::NonFiniteCoordinate`] for the first bad value.
    pub fn validate(&self) -> Result<()> {
        for (joint, p) in self.positions.iter().enumerate() {
            if let Some(axis) = p.coords.iter().position(|v| !v.is_finite()) {
                return Err(GaitError::non_finite(joint, axis));
            }
        }
        Ok(())
    }

    /// Returns the position of a joint.
    #[must_use]
    pub const fn position(&self, joint: Joint) -> Point3<f64> {
        self.positions[joint.index()]
    }

    /// Returns the vertical (Y) coordinate of a joint.
    #[must_use]
    pub fn height(&self, joint: Joint) -> f64 {
        self.positions[joint.index()].y
    }

    /// Returns the pelvis (root) position.
    #[must_use]
    pub const fn pelvis(&self) -> Point3<f64> {
        self.position(Joint::Pelvis)
    }

    /// Returns the vector from joint `from` to joint `to`.
    #[must_use]
    pub fn segment(&self, from: Joint, to: Joint) -> Vector3<f64> {
        self.position(to) - self.position(from)
    }

    /// Returns all positions in joint order.
    #[must_use]
    pub const fn positions(&self) -> &[Point3<f64>; JOINT_COUNT] {
        &self.positions
    }

    /// Returns a copy translated by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        let mut positions = self.positions;
        for p in &mut positions {
            *p += *offset;
        }
        Self { positions }
    }

    /// Replaces the position of one joint.
    pub fn set_position(&mut self, joint: Joint, position: Point3<f64>) {
        self.positions[joint.index()] = position;
    }
}

impl Default for JointFrame {
    fn default() -> Self {
        Self::filled(Point3::origin())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::cast_precision_loss
)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn indexed_coords() -> Vec<[f64; 3]> {
        (0..JOINT_COUNT)
            .map(|i| [i as f64, i as f64 * 0.1, -(i as f64)])
            .collect()
    }

    #[test]
    fn from_slice_keeps_order() {
        let frame = JointFrame::from_slice(&indexed_coords()).unwrap();
        assert_relative_eq!(frame.position(Joint::Head).x, 15.0);
        assert_relative_eq!(frame.height(Joint::RightFoot), 1.1, epsilon = 1e-12);
        assert_relative_eq!(frame.position(Joint::RightHand).z, -23.0);
    }

    #[test]
    fn from_slice_rejects_wrong_count() {
        let coords = vec![[0.0; 3]; 23];
        assert_eq!(
            JointFrame::from_slice(&coords),
            Err(GaitError::joint_count(24, 23))
        );
    }

    #[test]
    fn from_slice_rejects_nan() {
        let mut coords = indexed_coords();
        coords[7][2] = f64::NAN;
        assert_eq!(
            JointFrame::from_slice(&coords),
            Err(GaitError::non_finite(7, 2))
        );
    }

    #[test]
    fn from_flat_matches_from_slice() {
        let coords = indexed_coords();
        let flat: Vec<f64> = coords.iter().flatten().copied().collect();
        assert_eq!(
            JointFrame::from_flat(&flat).unwrap(),
            JointFrame::from_slice(&coords).unwrap()
        );
    }

    #[test]
    fn from_flat_rejects_short_buffer() {
        let flat = vec![0.0; 70];
        assert!(matches!(
            JointFrame::from_flat(&flat),
            Err(GaitError::JointCountMismatch { .. })
        ));
    }

    #[test]
    fn validate_detects_infinite() {
        let mut frame = JointFrame::default();
        assert!(frame.validate().is_ok());
        frame.set_position(Joint::Neck, Point3::new(0.0, f64::INFINITY, 0.0));
        assert_eq!(frame.validate(), Err(GaitError::non_finite(12, 1)));
    }

    #[test]
    fn segment_and_translate() {
        let frame = JointFrame::from_slice(&indexed_coords()).unwrap();
        let seg = frame.segment(Joint::Pelvis, Joint::Spine1);
        assert_relative_eq!(seg.x, 3.0);

        let moved = frame.translated(&Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(moved.height(Joint::Pelvis), 1.0);
        assert_relative_eq!(moved.pelvis().x, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn frame_serializes_as_point_list() {
        let frame = JointFrame::from_slice(&indexed_coords()).unwrap();
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.starts_with("[[0.0,0.0,"));

        let restored: JointFrame = serde_json::from_str(&json).unwrap();
        for joint in Joint::ALL {
            let (a, b) = (restored.position(joint), frame.position(joint));
            assert_relative_eq!(a.coords, b.coords, epsilon = 1e-12);
        }
    }
}
