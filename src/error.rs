//! Error types for mvfrontier.

use thiserror::Error;

use crate::solver::SolveStatus;

/// Error type for frontier computations.
#[derive(Debug, Error)]
pub enum FrontierError {
    /// Mean-return vector and covariance matrix dimensions disagree.
    #[error("dimension mismatch: mean vector has {assets} assets but covariance matrix is {rows}x{cols}")]
    DimensionMismatch {
        assets: usize,
        rows: usize,
        cols: usize,
    },

    /// The solver terminated without an optimal solution.
    #[error("solve failed: solver terminated with status {status:?}")]
    SolveFailure { status: SolveStatus },

    /// Sweep step is zero or disagrees in sign with the bound range.
    #[error("invalid sweep range: lower {lower}, upper {upper}, step {step}")]
    InvalidSweepRange { lower: f64, upper: f64, step: f64 },
}

/// Result type for frontier computations.
pub type Result<T> = std::result::Result<T, FrontierError>;
