use thiserror::Error;

/// Errors produced by the matching layer.
///
/// Absent hands, empty frames, and failed name lookups are not errors; they
/// have defined in-band results (zero confidences, an untracked report, or
/// `None`). Errors are reserved for contract violations in caller-supplied
/// configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Calibration configuration failed validation.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Orientation basis is not an orthonormal triple.
    #[error("invalid orientation basis: {0}")]
    InvalidBasis(String),
}
