//! Knee angles at landing and landing cadence.

use gait_types::{JointAngleRecord, LegRole, Side};
use tracing::{debug, warn};

use crate::result::{KneeLandingStats, LandingAnalysis};

/// Cross-references landing frames with the per-frame records.
///
/// For every landing, the landing leg's role in that frame decides the
/// bucket: a leading leg contributes the front knee angle, a trailing leg
/// the back knee angle. Landing frames without a record are skipped.
///
/// The mean interval is taken over the sorted, de-duplicated landing
/// frames of both feet and needs at least two of them.
///
/// # Example
///
/// ```
/// use gait_analysis::analyze_landings;
///
/// let analysis = analyze_landings(&[], &[10, 40], &[25], 30.0);
/// assert_eq!(analysis.front_knee.landing_events, 0);
/// assert!((analysis.mean_interval_frames.unwrap() - 15.0).abs() < 1e-12);
/// assert!((analysis.mean_interval_secs.unwrap() - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn analyze_landings(
    records: &[JointAngleRecord],
    left_landings: &[usize],
    right_landings: &[usize],
    fps: f64,
) -> LandingAnalysis {
    let mut front = Vec::new();
    let mut back = Vec::new();

    for (side, landings) in [(Side::Left, left_landings), (Side::Right, right_landings)] {
        for &frame in landings {
            let Some(record) = records.get(frame) else {
                warn!(
                    frame,
                    foot = %side,
                    recorded = records.len(),
                    "Landing frame outside recorded range"
                );
                continue;
            };
            match record.role_of(side) {
                LegRole::Front => front.push(record.front_knee.angle),
                LegRole::Back => back.push(record.back_knee.angle),
            }
        }
    }

    let mean_interval_frames = mean_interval(left_landings, right_landings);
    let mean_interval_secs = mean_interval_frames.map(|frames| frames / fps);
    debug!(
        front = front.len(),
        back = back.len(),
        ?mean_interval_frames,
        "Landing analysis complete"
    );

    LandingAnalysis {
        left_foot: left_landings.to_vec(),
        right_foot: right_landings.to_vec(),
        front_knee: bucket_stats(&front),
        back_knee: bucket_stats(&back),
        mean_interval_frames,
        mean_interval_secs,
    }
}

#[allow(clippy::cast_precision_loss)]
fn bucket_stats(angles: &[f64]) -> KneeLandingStats {
    let angle_at_landing =
        (!angles.is_empty()).then(|| angles.iter().sum::<f64>() / angles.len() as f64);
    KneeLandingStats {
        angle_at_landing,
        landing_events: angles.len(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean_interval(left: &[usize], right: &[usize]) -> Option<f64> {
    let mut all: Vec<usize> = left.iter().chain(right).copied().collect();
    all.sort_unstable();
    all.dedup();
    if all.len() < 2 {
        return None;
    }
    // Sorted, so the mean gap is the total span over the gap count
    let span = all[all.len() - 1] - all[0];
    Some(span as f64 / (all.len() - 1) as f64)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use gait_types::{BilateralAngles, HeadPosture, KneeRole};

    fn record(front: Side, front_angle: f64, back_angle: f64) -> JointAngleRecord {
        JointAngleRecord {
            front_knee: KneeRole {
                angle: front_angle,
                side: front,
            },
            back_knee: KneeRole {
                angle: back_angle,
                side: front.opposite(),
            },
            back_to_head: HeadPosture::default(),
            elbow: BilateralAngles::default(),
            knee: BilateralAngles::default(),
        }
    }

    #[test]
    fn landing_leg_role_picks_bucket() {
        let records = vec![
            record(Side::Left, 170.0, 140.0),
            record(Side::Right, 168.0, 150.0),
            record(Side::Right, 166.0, 130.0),
        ];
        // Left lands in front at 0 and behind at 2; right lands in front at 1
        let analysis = analyze_landings(&records, &[0, 2], &[1], 30.0);

        assert_eq!(analysis.front_knee.landing_events, 2);
        assert_eq!(analysis.front_knee.angle_at_landing, Some(169.0));
        assert_eq!(analysis.back_knee.landing_events, 1);
        assert_eq!(analysis.back_knee.angle_at_landing, Some(130.0));
    }

    #[test]
    fn out_of_range_landings_are_skipped() {
        let records = vec![record(Side::Left, 170.0, 140.0)];
        let analysis = analyze_landings(&records, &[0, 7], &[], 30.0);
        assert_eq!(analysis.front_knee.landing_events, 1);
        assert_eq!(analysis.back_knee.angle_at_landing, None);
        assert_eq!(analysis.left_foot, vec![0, 7]);
    }

    #[test]
    fn interval_needs_two_landings() {
        assert!(analyze_landings(&[], &[12], &[], 30.0).mean_interval_frames.is_none());
        // Duplicates across feet count once
        assert!(analyze_landings(&[], &[12], &[12], 30.0).mean_interval_secs.is_none());
    }

    #[test]
    fn interval_over_both_feet() {
        let analysis = analyze_landings(&[], &[0, 30], &[14, 46], 30.0);
        assert_eq!(analysis.mean_interval_frames, Some(46.0 / 3.0));
    }
}
