//! Error types for skeleton data.

use thiserror::Error;

/// Errors raised when upstream skeleton data violates the fixed layout.
///
/// These are contract violations of the forward-kinematics collaborator.
/// They are reported instead of producing angles from garbage input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaitError {
    /// Frame does not have exactly one position per joint.
    #[error("joint count mismatch: expected {expected}, got {actual}")]
    JointCountMismatch {
        /// Expected joint count.
        expected: usize,
        /// Actual joint count.
        actual: usize,
    },

    /// Pose parameter vector has the wrong length.
    #[error("pose length mismatch: expected {expected} values, got {actual}")]
    PoseLengthMismatch {
        /// Expected number of axis-angle values.
        expected: usize,
        /// Actual number of values.
        actual: usize,
    },

    /// A coordinate is `NaN` or infinite.
    #[error("non-finite coordinate at joint {joint}, axis {axis}")]
    NonFiniteCoordinate {
        /// Joint index.
        joint: usize,
        /// Axis index (0 = x, 1 = y, 2 = z).
        axis: usize,
    },

    /// Joint index outside the skeleton.
    #[error("unknown joint index: {0}")]
    UnknownJoint(usize),
}

impl GaitError {
    /// Creates a joint count mismatch error.
    #[must_use]
    pub const fn joint_count(expected: usize, actual: usize) -> Self {
        Self::JointCountMismatch { expected, actual }
    }

    /// Creates a pose length mismatch error.
    #[must_use]
    pub const fn pose_length(expected: usize, actual: usize) -> Self {
        Self::PoseLengthMismatch { expected, actual }
    }

    /// Creates a non-finite coordinate error.
    #[must_use]
    pub const fn non_finite(joint: usize, axis: usize) -> Self {
        Self::NonFiniteCoordinate { joint, axis }
    }
}

/// Result type for skeleton data operations.
pub type Result<T> = std::result::Result<T, GaitError>;
