//! Session-level accumulation of joint angle records.

use gait_types::{
    AverageAngles, AverageRecord, BilateralAngles, HeadPosture, JointAngleRecord, KneeRole,
    KneeSummary, Side,
};

use crate::symmetry::symmetry_score;

/// Accumulates per-frame records and summarizes them.
///
/// Appending is O(1). Summaries are recomputed from the stored records on
/// every call.
///
/// # Example
///
/// ```
/// use gait_analysis::SessionAggregator;
///
/// let aggregator = SessionAggregator::new();
/// assert!(aggregator.summarize().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionAggregator {
    records: Vec<JointAngleRecord>,
}

impl SessionAggregator {
    /// Creates an empty aggregator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record.
    pub fn append(&mut self, record: JointAngleRecord) {
        self.records.push(record);
    }

    /// Discards every record.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// Returns the accumulated records in arrival order.
    #[must_use]
    pub fn records(&self) -> &[JointAngleRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records have been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Summarizes the session.
    ///
    /// Angles are averaged, front/back knees also report their range, and
    /// the side of each knee role is the one that held it most often (ties
    /// go to the side seen first). Symmetry is scored on the averaged pairs.
    ///
    /// Returns `None` for an empty session.
    #[must_use]
    pub fn summarize(&self) -> Option<AverageRecord> {
        let first = self.records.first()?;
        let records = &self.records;

        let front_knee = knee_summary(records.iter().map(|r| r.front_knee), first.front_knee.side);
        let back_knee = knee_summary(records.iter().map(|r| r.back_knee), first.back_knee.side);

        let back_to_head = HeadPosture {
            angle: mean(records.iter().map(|r| r.back_to_head.angle)),
            spine_curvature: mean(records.iter().map(|r| r.back_to_head.spine_curvature)),
        };
        let elbow = averaged_pair(
            mean(records.iter().map(|r| r.elbow.left)),
            mean(records.iter().map(|r| r.elbow.right)),
        );
        let knee = averaged_pair(
            mean(records.iter().map(|r| r.knee.left)),
            mean(records.iter().map(|r| r.knee.right)),
        );

        Some(AverageRecord {
            joint_angles: AverageAngles {
                front_knee,
                back_knee,
                back_to_head,
                elbow,
                knee,
            },
            total_frames: records.len(),
        })
    }
}

fn averaged_pair(left: f64, right: f64) -> BilateralAngles {
    BilateralAngles {
        left,
        right,
        symmetry: symmetry_score(left, right),
    }
}

/// Mean, range and majority side of one knee role.
fn knee_summary(roles: impl Iterator<Item = KneeRole> + Clone, first_side: Side) -> KneeSummary {
    let (min, max) = roles
        .clone()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
            (lo.min(r.angle), hi.max(r.angle))
        });
    KneeSummary {
        angle: mean(roles.clone().map(|r| r.angle)),
        min,
        max,
        side: majority_side(roles.map(|r| r.side), first_side),
    }
}

/// Most frequent side; `first` wins a tie.
fn majority_side(sides: impl Iterator<Item = Side>, first: Side) -> Side {
    let (left, right) = sides.fold((0usize, 0usize), |(l, r), side| match side {
        Side::Left => (l + 1, r),
        Side::Right => (l, r + 1),
    });
    match left.cmp(&right) {
        std::cmp::Ordering::Greater => Side::Left,
        std::cmp::Ordering::Less => Side::Right,
        std::cmp::Ordering::Equal => first,
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}
