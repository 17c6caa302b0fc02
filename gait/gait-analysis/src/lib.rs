//! Gait analysis on skeleton frames.
//!
//! This crate turns per-frame 3D joint positions into biomechanical
//! metrics for running and walking feedback:
//!
//! - **Joint angles**: knee, elbow, head tilt and spine curvature per frame
//! - **Leg roles**: which leg leads, from pelvis travel or knee extension
//! - **Symmetry**: left/right similarity as a percentage
//! - **Landings**: foot-strike frames from foot height and velocity
//! - **Sessions**: running summaries, landing statistics and full reports
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used in:
//! - CLI tools for offline session files
//! - Servers processing live pose streams
//! - Tests and benchmarks
//!
//! # Pipeline
//!
//! ```text
//! pose + translation ──BodyModel──▶ JointFrame ──AngleEngine──▶ JointAngleRecord
//!                                       │                             │
//!                                  FrameHistory               SessionAggregator
//!                                       │                             │
//!                               LandingDetector ──▶ LandingAnalysis ◀─┘
//! ```
//!
//! [`GaitSession`] wires these together and owns all per-session state.
//!
//! # Example
//!
//! ```
//! use gait_analysis::{GaitSession, KinematicTree, SessionParams};
//! use gait_types::POSE_PARAMS;
//!
//! let mut session = GaitSession::new(KinematicTree::t_pose(), SessionParams::for_fps(30.0))?;
//!
//! let pose = [0.0; POSE_PARAMS];
//! for frame in 0..30 {
//!     let z = f64::from(frame) * 0.04;
//!     let record = session.process_pose(&pose, [0.0, 0.95, z])?;
//!     assert!((0.0..=100.0).contains(&record.knee.symmetry));
//! }
//!
//! let report = session.report().expect("frames were recorded");
//! assert_eq!(report.total_frames, 30);
//! println!("{report}");
//! # Ok::<(), gait_analysis::AnalysisError>(())
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (session lifecycle and landing scans
//! at `info`, per-frame decisions at `debug`) and never installs a
//! subscriber.
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

mod analysis;
mod angles;
mod error;
mod geometry;
mod history;
mod kinematics;
mod landing;
mod leg_side;
mod params;
mod pipeline;
mod result;
mod session;
mod symmetry;

// Re-export angle computation
pub use angles::{AngleEngine, head_tilt, spine_curvature};
pub use geometry::{NORM_EPSILON, angle_between, elbow_angle, interior_angle, knee_angle};
pub use leg_side::{ClassificationMethod, LegRoles, LegSideClassifier};
pub use symmetry::symmetry_score;

// Re-export landing detection
pub use analysis::analyze_landings;
pub use landing::{LandingDetector, ground_level, vertical_velocity};

// Re-export session types
pub use history::{FrameHistory, HistoryStats};
pub use kinematics::{BodyModel, KinematicTree};
pub use pipeline::GaitSession;
pub use result::{KneeLandingStats, LandingAnalysis, ReportAngles, ReportKnee, SessionReport, TimedRecord};
pub use session::SessionAggregator;

// Re-export configuration
pub use params::{
    DEFAULT_FPS, DEFAULT_REFRACTORY_SECS, LandingParams, LegSideParams, SessionParams,
};

// Re-export error types
pub use error::{AnalysisError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        AnalysisError, AngleEngine, BodyModel, GaitSession, KinematicTree, LandingAnalysis,
        LandingDetector, LandingParams, LegSideClassifier, LegSideParams, SessionAggregator,
        SessionParams, SessionReport, symmetry_score,
    };
    pub use gait_types::{AverageRecord, Joint, JointAngleRecord, JointFrame, LandingEvent, Side};
}
