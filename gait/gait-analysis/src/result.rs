//! Result types for landing analysis and session reports.

use std::fmt;

use gait_types::{
    AverageRecord, BilateralAngles, HeadPosture, JointAngleRecord, KneeSummary, LandingEvent,
    Side,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Knee angles sampled at landing frames for one leg role.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct KneeLandingStats {
    /// Mean knee angle at landing, `None` without landings.
    pub angle_at_landing: Option<f64>,
    /// Number of landings that contributed.
    pub landing_events: usize,
}

/// Landings detected in a session and the knee angles at those moments.
///
/// # Example
///
/// ```
/// use gait_analysis::LandingAnalysis;
///
/// let analysis = LandingAnalysis::default();
/// assert_eq!(analysis.total_landings(), 0);
/// assert!(analysis.front_knee.angle_at_landing.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LandingAnalysis {
    /// Ascending landing frames of the left foot.
    pub left_foot: Vec<usize>,
    /// Ascending landing frames of the right foot.
    pub right_foot: Vec<usize>,
    /// Landings where the landing leg was in front.
    pub front_knee: KneeLandingStats,
    /// Landings where the landing leg was behind.
    pub back_knee: KneeLandingStats,
    /// Mean gap between consecutive landings of either foot, in frames.
    pub mean_interval_frames: Option<f64>,
    /// Same gap in seconds.
    pub mean_interval_secs: Option<f64>,
}

impl LandingAnalysis {
    /// Returns the landing frames of one foot.
    #[must_use]
    pub fn landings(&self, side: Side) -> &[usize] {
        match side {
            Side::Left => &self.left_foot,
            Side::Right => &self.right_foot,
        }
    }

    /// Returns every landing as a typed event, ordered by frame.
    #[must_use]
    pub fn events(&self) -> Vec<LandingEvent> {
        let mut events: Vec<LandingEvent> = Side::BOTH
            .iter()
            .flat_map(|&side| {
                self.landings(side)
                    .iter()
                    .map(move |&frame| LandingEvent::new(frame, side))
            })
            .collect();
        events.sort_unstable();
        events
    }

    /// Returns the number of landings of both feet.
    #[must_use]
    pub fn total_landings(&self) -> usize {
        self.left_foot.len() + self.right_foot.len()
    }
}

/// One processed frame in a session report.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TimedRecord {
    /// Frame index within the session.
    pub timestamp: usize,
    /// Angles computed for that frame.
    pub joint_angles: JointAngleRecord,
}

/// Session knee statistics merged with the landing statistics of the role.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportKnee {
    /// Mean, range and majority side.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub summary: KneeSummary,
    /// Angle at landing and landing count.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub landing: KneeLandingStats,
}

/// Averaged angles of a session report.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ReportAngles {
    /// Leading-leg knee.
    pub front_knee: ReportKnee,
    /// Trailing-leg knee.
    pub back_knee: ReportKnee,
    /// Mean head tilt and spine curvature.
    pub back_to_head: HeadPosture,
    /// Mean elbow angles.
    pub elbow: BilateralAngles,
    /// Mean knee angles.
    pub knee: BilateralAngles,
}

/// Full report of a processed session.
///
/// Serializes to `{ timeSeriesData, jointAngles, totalFrames, landings }`,
/// where `jointAngles.frontKnee`/`backKnee` carry `angleAtLanding` and
/// `landingEvents` beside the session statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SessionReport {
    /// Every processed frame in order.
    pub time_series_data: Vec<TimedRecord>,
    /// Session averages.
    pub joint_angles: ReportAngles,
    /// Number of frames summarized.
    pub total_frames: usize,
    /// Detected landings.
    pub landings: LandingAnalysis,
}

impl SessionReport {
    /// Assembles a report from the session records, their summary and the
    /// landing analysis.
    #[must_use]
    pub fn new(records: &[JointAngleRecord], summary: &AverageRecord, landings: LandingAnalysis) -> Self {
        let angles = &summary.joint_angles;
        Self {
            time_series_data: records
                .iter()
                .enumerate()
                .map(|(timestamp, &joint_angles)| TimedRecord {
                    timestamp,
                    joint_angles,
                })
                .collect(),
            joint_angles: ReportAngles {
                front_knee: ReportKnee {
                    summary: angles.front_knee,
                    landing: landings.front_knee,
                },
                back_knee: ReportKnee {
                    summary: angles.back_knee,
                    landing: landings.back_knee,
                },
                back_to_head: angles.back_to_head,
                elbow: angles.elbow,
                knee: angles.knee,
            },
            total_frames: summary.total_frames,
            landings,
        }
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.joint_angles;
        writeln!(f, "Session Report:")?;
        writeln!(f, "  Frames: {}", self.total_frames)?;
        for (label, knee) in [("Front", &a.front_knee), ("Back", &a.back_knee)] {
            write!(
                f,
                "  {label} knee ({}): {:.1} deg [{:.1} - {:.1}]",
                knee.summary.side, knee.summary.angle, knee.summary.min, knee.summary.max
            )?;
            match knee.landing.angle_at_landing {
                Some(angle) => writeln!(
                    f,
                    ", at landing {angle:.1} deg ({} events)",
                    knee.landing.landing_events
                )?,
                None => writeln!(f)?,
            }
        }
        writeln!(
            f,
            "  Back to head: {:.1} deg (spine {:.1} deg)",
            a.back_to_head.angle, a.back_to_head.spine_curvature
        )?;
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
        writeln!(
            f,
            "  Landings: {} left, {} right",
            self.landings.left_foot.len(),
            self.landings.right_foot.len()
        )?;
        if let (Some(frames), Some(secs)) = (
            self.landings.mean_interval_frames,
            self.landings.mean_interval_secs,
        ) {
            writeln!(f, "  Mean landing interval: {frames:.1} frames ({secs:.2}s)")?;
        }
        Ok(())
    }
}
