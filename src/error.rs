//! Error types for the strain pipeline.

use thiserror::Error;

/// Faults raised by the strain pipeline. All of these are deterministic,
/// data-dependent input faults: they abort the current analysis and are
/// never silently recovered or defaulted.
#[derive(Debug, Error)]
pub enum StrainError {
    /// Malformed or degenerate geometric input, detected before any
    /// matrix algebra runs.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// The reference basis is not invertible, so no deformation gradient
    /// exists. The determinant is reported to help diagnose near-degenerate
    /// marker placements.
    #[error("singular reference basis (determinant {determinant:e}); markers are collinear or dimensions are zero")]
    SingularBasis { determinant: f64 },

    /// The coordinate interface received the wrong number of scalar values.
    #[error("expected exactly {expected} coordinate values, got {found}")]
    InputCountMismatch { expected: usize, found: usize },

    /// 2D and 3D observations were mixed within one analysis run.
    #[error("dimension mismatch: expected {expected}D, got {found}D")]
    DimensionMismatch { expected: usize, found: usize },
}

impl StrainError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        StrainError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
