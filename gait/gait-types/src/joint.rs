//! Fixed 24-joint skeleton enumeration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{GaitError, Side};

/// Number of joints in a [`JointFrame`](crate::JointFrame).
pub const JOINT_COUNT: usize = 24;

/// Number of axis-angle pose parameters (three per joint).
pub const POSE_PARAMS: usize = JOINT_COUNT * 3;

/// Skeleton joints in frame order.
///
/// The discriminant is the joint's index in a frame. The pelvis is the
/// kinematic root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum Joint {
    Pelvis = 0,
    LeftHip = 1,
    RightHip = 2,
    Spine1 = 3,
    LeftKnee = 4,
    RightKnee = 5,
    Spine2 = 6,
    LeftAnkle = 7,
    RightAnkle = 8,
    Spine3 = 9,
    LeftFoot = 10,
    RightFoot = 11,
    Neck = 12,
    LeftCollar = 13,
    RightCollar = 14,
    Head = 15,
    LeftShoulder = 16,
    RightShoulder = 17,
    LeftElbow = 18,
    RightElbow = 19,
    LeftWrist = 20,
    RightWrist = 21,
    LeftHand = 22,
    RightHand = 23,
}

impl Joint {
    /// All joints in frame order.
    pub const ALL: [Self; JOINT_COUNT] = [
        Self::Pelvis,
        Self::LeftHip,
        Self::RightHip,
        Self::Spine1,
        Self::LeftKnee,
        Self::RightKnee,
        Self::Spine2,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::Spine3,
        Self::LeftFoot,
        Self::RightFoot,
        Self::Neck,
        Self::LeftCollar,
        Self::RightCollar,
        Self::Head,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHand,
        Self::RightHand,
    ];

    /// Returns the joint's index within a frame.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a joint by frame index.
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::UnknownJoint`] if `index >= JOINT_COUNT`.
    pub fn from_index(index: usize) -> crate::Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GaitError::UnknownJoint(index))
    }

    /// Returns the parent joint in the kinematic tree (`None` for the pelvis).
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        let parent = match self {
            Self::Pelvis => return None,
            Self::LeftHip | Self::RightHip | Self::Spine1 => Self::Pelvis,
            Self::LeftKnee => Self::LeftHip,
            Self::RightKnee => Self::RightHip,
            Self::Spine2 => Self::Spine1,
            Self::LeftAnkle => Self::LeftKnee,
            Self::RightAnkle => Self::RightKnee,
            Self::Spine3 => Self::Spine2,
            Self::LeftFoot => Self::LeftAnkle,
            Self::RightFoot => Self::RightAnkle,
            Self::Neck | Self::LeftCollar | Self::RightCollar => Self::Spine3,
            Self::Head => Self::Neck,
            Self::LeftShoulder => Self::LeftCollar,
            Self::RightShoulder => Self::RightCollar,
            Self::LeftElbow => Self::LeftShoulder,
            Self::RightElbow => Self::RightShoulder,
            Self::LeftWrist => Self::LeftElbow,
            Self::RightWrist => Self::RightElbow,
            Self::LeftHand => Self::LeftWrist,
            Self::RightHand => Self::RightWrist,
        };
        Some(parent)
    }

    /// Returns a human-readable joint name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pelvis => "pelvis",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::Spine1 => "spine1",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::Spine2 => "spine2",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::Spine3 => "spine3",
            Self::LeftFoot => "left_foot",
            Self::RightFoot => "right_foot",
            Self::Neck => "neck",
            Self::LeftCollar => "left_collar",
            Self::RightCollar => "right_collar",
            Self::Head => "head",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHand => "left_hand",
            Self::RightHand => "right_hand",
        }
    }

    /// Hip joint for a side.
    #[must_use]
    pub const fn hip(side: Side) -> Self {
        match side {
            Side::Left => Self::LeftHip,
            Side::Right => Self::RightHip,
        }
    }

    /// Knee joint for a side.
    #[must_use]
    pub const fn knee(side: Side) -> Self {
        match side {
            Side::Left => Self::LeftKnee,
            Side::Right => Self::RightKnee,
        }
    }

    /// Ankle joint for a side.
    #[must_use]
    pub const fn ankle(side: Side) -> Self {
        match side {
            Side::Left => Self::LeftAnkle,
            Side::Right => Self::RightAnkle,
        }
    }

    /// Foot joint for a side.
    #[must_use]
    pub const fn foot(side: Side) -> Self {
        match side {
            Side::Left => Self::LeftFoot,
            Side::Right => Self::RightFoot,
        }
    }

    /// Shoulder joint for a side.
    #[must_use]
    pub const fn shoulder(side: Side) -> Self {
        match side {
            Side::Left => Self::LeftShoulder,
            Side::Right => Self::RightShoulder,
        }
    }

    /// Elbow joint for a side.
    #[must_use]
    pub const fn elbow(side: Side) -> Self {
        match side {
            Side::Left => Self::LeftElbow,
            Side::Right => Self::RightElbow,
        }
    }

    /// Wrist joint for a side.
    #[must_use]
    pub const fn wrist(side: Side) -> Self {
        match side {
            Side::Left => Self::LeftWrist,
            Side::Right => Self::RightWrist,
        }
    }
}
