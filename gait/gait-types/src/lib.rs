//! Skeleton frame and joint-angle record types for gait analysis.
//!
//! This crate provides the data model shared by the gait pipeline:
//! - Pose-to-position adapters (forward kinematics) produce [`JointFrame`]s
//! - `gait-analysis` turns frames into [`JointAngleRecord`]s and [`LandingEvent`]s
//! - Session summaries are reported as [`AverageRecord`]s
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used in:
//! - CLI tools
//! - Servers receiving pose streams
//! - Offline session analysis
//! - Tests and fixtures
//!
//! # Skeleton Layout
//!
//! A [`JointFrame`] always holds exactly [`JOINT_COUNT`] positions, ordered by
//! the [`Joint`] enumeration (pelvis first). Positions are in meters with
//! **Y up** and **Z forward**.
//!
//! # Serialization
//!
//! With the `serde` feature (default), records serialize to the flat keyed
//! shape consumed by feedback clients:
//!
//! ```json
//! {
//!   "frontKnee": { "angle": 165.2, "side": "left" },
//!   "backKnee": { "angle": 141.0, "side": "right" },
//!   "backToHead": { "angle": -4.1, "spineCurvature": 12.7 },
//!   "elbow": { "left": 92.0, "right": 95.5, "symmetry": 96.3 },
//!   "knee": { "left": 165.2, "right": 141.0, "symmetry": 84.6 }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use gait_types::{Joint, JointFrame, Side};
//! use nalgebra::Point3;
//!
//! let mut positions = [Point3::origin(); gait_types::JOINT_COUNT];
//! positions[Joint::Head.index()] = Point3::new(0.0, 0.6, 0.0);
//! let frame = JointFrame::new(positions);
//!
//! assert!((frame.height(Joint::Head) - 0.6).abs() < 1e-12);
//! assert_eq!(Joint::knee(Side::Left), Joint::LeftKnee);
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod frame;
mod joint;
mod landing;
mod record;
mod side;
mod summary;

pub use error::{GaitError, Result};
pub use frame::JointFrame;
pub use joint::{JOINT_COUNT, Joint, POSE_PARAMS};
pub use landing::LandingEvent;
pub use record::{BilateralAngles, HeadPosture, JointAngleRecord, KneeRole};
pub use side::{LegRole, Side};
pub use summary::{AverageAngles, AverageRecord, KneeSummary};
