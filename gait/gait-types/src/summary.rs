//! Session summary records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BilateralAngles, HeadPosture, Side};

/// Knee statistics over a session for one leg role.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KneeSummary {
    /// Mean angle in degrees.
    pub angle: f64,
    /// Smallest angle seen.
    pub min: f64,
    /// Largest angle seen.
    pub max: f64,
    /// Side that held this role most often.
    pub side: Side,
}

/// Averaged joint angles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AverageAngles {
    /// Leading-leg knee statistics.
    pub front_knee: KneeSummary,
    /// Trailing-leg knee statistics.
    pub back_knee: KneeSummary,
    /// Mean head tilt and spine curvature.
    pub back_to_head: HeadPosture,
    /// Mean elbow angles, symmetry of the means.
    pub elbow: BilateralAngles,
    /// Mean knee angles, symmetry of the means.
    pub knee: BilateralAngles,
}

/// Summary of every record accumulated in a session.
///
/// An empty session has no summary; producers return `Option<AverageRecord>`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AverageRecord {
    /// Averaged angles.
    pub joint_angles: AverageAngles,
    /// Number of frames summarized.
    pub total_frames: usize,
}

impl fmt::Display for AverageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.joint_angles;
        writeln!(f, "Session Summary:")?;
        writeln!(f, "  Frames: {}", self.total_frames)?;
        writeln!(
            f,
            "  Front knee ({}): {:.1} deg [{:.1} - {:.1}]",
            a.front_knee.side, a.front_knee.angle, a.front_knee.min, a.front_knee.max
        )?;
        writeln!(
            f,
            "  Back knee ({}): {:.1} deg [{:.1} - {:.1}]",
            a.back_knee.side, a.back_knee.angle, a.back_knee.min, a.back_knee.max
        )?;
        writeln!(f, "  Back to head: {:.1} deg", a.back_to_head.angle)?;
        writeln!(f, "  Spine curvature: {:.1} deg", a.back_to_head.spine_curvature)?;
        writeln!(
            f,
            "  Elbow: L={:.1} R={:.1} ({:.1}% symmetric)",
            a.elbow.left, a.elbow.right, a.elbow.symmetry
        )?;
        writeln!(
            f,
            "  Knee: L={:.1} R={:.1} ({:.1}% symmetric)",
            a.knee.left, a.knee.right, a.knee.symmetry
        )?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn summary() -> AverageRecord {
        AverageRecord {
            joint_angles: AverageAngles {
                front_knee: KneeSummary {
                    angle: 165.0,
                    min: 150.0,
                    max: 178.0,
                    side: Side::Left,
                },
                back_knee: KneeSummary {
                    angle: 140.0,
                    min: 120.0,
                    max: 160.0,
                    side: Side::Right,
                },
                back_to_head: HeadPosture {
                    angle: -3.0,
                    spine_curvature: 9.5,
                },
                elbow: BilateralAngles {
                    left: 90.0,
                    right: 90.0,
                    symmetry: 100.0,
                },
                knee: BilateralAngles {
                    left: 152.0,
                    right: 153.0,
                    symmetry: 99.3,
                },
            },
            total_frames: 42,
        }
    }

    #[test]
    fn display_lists_fields() {
        let output = format!("{}", summary());
        assert!(output.contains("Session Summary"));
        assert!(output.contains("Frames: 42"));
        assert!(output.contains("Front knee (left): 165.0"));
        assert!(output.contains("99.3% symmetric"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn summary_shape() {
        let json = serde_json::to_value(summary()).unwrap();
        assert_eq!(json["totalFrames"], 42);
        assert_eq!(json["jointAngles"]["frontKnee"]["min"], 150.0);
        assert_eq!(json["jointAngles"]["backKnee"]["side"], "right");
        assert_eq!(json["jointAngles"]["backToHead"]["spineCurvature"], 9.5);
    }
}
