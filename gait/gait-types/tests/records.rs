//! Integration tests for the shared gait data model.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]

use approx::assert_relative_eq;
use gait_types::{
    BilateralAngles, GaitError, HeadPosture, JOINT_COUNT, Joint, JointAngleRecord, JointFrame,
    KneeRole, LandingEvent, LegRole, Side,
};

fn record() -> JointAngleRecord {
    JointAngleRecord {
        front_knee: KneeRole {
            angle: 168.42,
            side: Side::Right,
        },
        back_knee: KneeRole {
            angle: 139.07,
            side: Side::Left,
        },
        back_to_head: HeadPosture {
            angle: -6.25,
            spine_curvature: 14.3,
        },
        elbow: BilateralAngles {
            left: 87.5,
            right: 93.1,
            symmetry: 93.8,
        },
        knee: BilateralAngles {
            left: 139.07,
            right: 168.42,
            symmetry: 81.0,
        },
    }
}

// =============================================================================
// Skeleton layout
// =============================================================================

#[test]
fn joint_table_is_consistent() {
    assert_eq!(Joint::ALL.len(), JOINT_COUNT);
    for (i, joint) in Joint::ALL.iter().enumerate() {
        assert_eq!(joint.index(), i);
        assert_eq!(Joint::from_index(i).unwrap(), *joint);
        if let Some(parent) = joint.parent() {
            assert!(parent.index() < i, "{} before its parent", joint.name());
        }
    }
    assert!(matches!(
        Joint::from_index(JOINT_COUNT),
        Err(GaitError::UnknownJoint(24))
    ));
}

#[test]
fn side_lookups_mirror() {
    for side in Side::BOTH {
        let other = side.opposite();
        assert_ne!(Joint::knee(side), Joint::knee(other));
        assert_eq!(Joint::knee(side).parent(), Some(Joint::hip(side)));
        assert_eq!(Joint::ankle(side).parent(), Some(Joint::knee(side)));
        assert_eq!(Joint::foot(side).parent(), Some(Joint::ankle(side)));
        assert_eq!(Joint::wrist(side).parent(), Some(Joint::elbow(side)));
    }
}

#[test]
fn frame_from_flat_buffer() {
    let len = u32::try_from(JOINT_COUNT * 3).unwrap();
    let values: Vec<f64> = (0..len).map(f64::from).collect();
    let frame = JointFrame::from_flat(&values).unwrap();
    let foot = frame.position(Joint::RightFoot);
    let base = 3.0 * 11.0;
    assert_relative_eq!(foot.x, base);
    assert_relative_eq!(frame.height(Joint::RightFoot), base + 1.0);

    assert!(matches!(
        JointFrame::from_flat(&values[..9]),
        Err(GaitError::JointCountMismatch {
            expected: 24,
            actual: 3
        })
    ));
}

#[test]
fn frame_rejects_nan() {
    let mut coords = vec![[0.0; 3]; JOINT_COUNT];
    coords[7][2] = f64::NAN;
    assert_eq!(
        JointFrame::from_slice(&coords).unwrap_err(),
        GaitError::non_finite(7, 2)
    );
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn record_roles() {
    let r = record();
    assert_eq!(r.role_of(Side::Right), LegRole::Front);
    assert_eq!(r.role_of(Side::Left), LegRole::Back);
    assert_eq!(r.knee_angle_for(Side::Left), r.knee.left);
}

#[test]
fn landing_events_sort_by_frame_then_foot() {
    let mut events = vec![
        LandingEvent::new(20, Side::Right),
        LandingEvent::new(20, Side::Left),
        LandingEvent::new(3, Side::Right),
    ];
    events.sort();
    assert_eq!(
        events,
        vec![
            LandingEvent::new(3, Side::Right),
            LandingEvent::new(20, Side::Left),
            LandingEvent::new(20, Side::Right),
        ]
    );
}

// =============================================================================
// Serialization
// =============================================================================

#[cfg(feature = "serde")]
mod serde_roundtrip {
    use super::*;

    #[test]
    fn record_json_roundtrip() {
        let expected = record();
        let json = serde_json::to_string(&expected).unwrap();
        let parsed: JointAngleRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.front_knee.side, expected.front_knee.side);
        assert_eq!(parsed.back_knee.side, expected.back_knee.side);
        assert_relative_eq!(parsed.front_knee.angle, expected.front_knee.angle, epsilon = 1e-12);
        assert_relative_eq!(parsed.back_knee.angle, expected.back_knee.angle, epsilon = 1e-12);
        assert_relative_eq!(parsed.back_to_head.angle, expected.back_to_head.angle, epsilon = 1e-12);
        assert_relative_eq!(
            parsed.back_to_head.spine_curvature,
            expected.back_to_head.spine_curvature,
            epsilon = 1e-12
        );
        assert_relative_eq!(parsed.elbow.symmetry, expected.elbow.symmetry, epsilon = 1e-12);
        assert_relative_eq!(parsed.knee.right, expected.knee.right, epsilon = 1e-12);
    }

    #[test]
    fn record_parses_client_json() {
        let json = r#"{
            "frontKnee": { "angle": 170.0, "side": "left" },
            "backKnee": { "angle": 150.0, "side": "right" },
            "backToHead": { "angle": 2.5, "spineCurvature": 8.0 },
            "elbow": { "left": 90.0, "right": 90.0, "symmetry": 100.0 },
            "knee": { "left": 170.0, "right": 150.0, "symmetry": 87.5 }
        }"#;
        let parsed: JointAngleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.front_knee.side, Side::Left);
        assert_eq!(parsed.back_to_head.spine_curvature, 8.0);
    }

    #[test]
    fn landing_event_json() {
        let json = serde_json::to_value(LandingEvent::new(16, Side::Right)).unwrap();
        assert_eq!(json["frameIndex"], 16);
        assert_eq!(json["foot"], "right");
    }
}
