//! Error types for gait analysis.

use gait_types::GaitError;
use thiserror::Error;

/// Errors that can occur in the analysis pipeline.
///
/// Degenerate geometry, empty sessions and short histories are not errors;
/// they produce defined values (`0.0`, `None`, empty lists).
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Skeleton data violated the fixed frame layout.
    #[error(transparent)]
    Skeleton(#[from] GaitError),

    /// Invalid configuration.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Forward kinematics failed in the body model.
    #[error("body model failed: {0}")]
    BodyModel(String),
}

impl AnalysisError {
    /// Creates an invalid parameters error.
    #[must_use]
    pub fn invalid_params(reason: impl Into<String>) -> Self {
        Self::InvalidParams(reason.into())
    }

    /// Creates a body model error.
    #[must_use]
    pub fn body_model(reason: impl Into<String>) -> Self {
        Self::BodyModel(reason.into())
    }
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
