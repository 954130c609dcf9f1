//! Sweep driver: trace the frontier by varying one constraint bound.
//!
//! [`sweep`] is generic over "a model function" — anything callable as
//! `(mean, covariance, scalar bound) -> Result<FrontierPoint>`. Both
//! [`solve_max_return`](crate::markowitz::solve_max_return) and
//! [`solve_min_variance`](crate::markowitz::solve_min_variance) satisfy it.

use nalgebra::{DMatrix, DVector};

use crate::error::{FrontierError, Result};
use crate::markowitz::FrontierPoint;

/// Frontier samples collected by a sweep.
///
/// `returns[k]` and `variances[k]` are the two halves of the k-th solve
/// result; insertion order is sweep order and is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontierSeries {
    /// Realized expected returns, one per sweep step.
    pub returns: Vec<f64>,
    /// Realized variances, one per sweep step.
    pub variances: Vec<f64>,
}

impl FrontierSeries {
    /// Number of sweep steps collected.
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Append one solve result.
    pub fn push(&mut self, point: FrontierPoint) {
        self.returns.push(point.expected_return);
        self.variances.push(point.variance);
    }

    /// Iterate the samples in sweep order.
    pub fn points(&self) -> impl Iterator<Item = FrontierPoint> + '_ {
        self.returns
            .iter()
            .zip(&self.variances)
            .map(|(&expected_return, &variance)| FrontierPoint {
                expected_return,
                variance,
            })
    }
}

/// Sweep a model function across an inclusive range of constraint bounds.
///
/// Invokes `model` once per bound in `lower, lower + step, ...` up to and
/// including `upper` (a relative tolerance on the last step keeps the
/// endpoint from being lost to float accumulation). Steps run sequentially
/// in range order; the first failing step aborts the sweep and propagates
/// its error, so a returned series never contains gaps or placeholder
/// values.
///
/// # Errors
///
/// [`FrontierError::InvalidSweepRange`] if `step` is zero, non-finite, or
/// disagrees in sign with `upper - lower`; any error from `model` otherwise.
pub fn sweep<F>(
    model: F,
    mean: &DVector<f64>,
    cov: &DMatrix<f64>,
    lower: f64,
    upper: f64,
    step: f64,
) -> Result<FrontierSeries>
where
    F: Fn(&DVector<f64>, &DMatrix<f64>, f64) -> Result<FrontierPoint>,
{
    let bounds = sweep_bounds(lower, upper, step)?;

    let mut series = FrontierSeries::default();
    for bound in bounds {
        series.push(model(mean, cov, bound)?);
    }
    Ok(series)
}

/// Inclusive arithmetic progression of constraint bounds.
fn sweep_bounds(lower: f64, upper: f64, step: f64) -> Result<Vec<f64>> {
    let span = upper - lower;
    let valid = step != 0.0
        && step.is_finite()
        && lower.is_finite()
        && upper.is_finite()
        && (span == 0.0 || span.signum() == step.signum());
    if !valid {
        return Err(FrontierError::InvalidSweepRange { lower, upper, step });
    }

    // Tolerance so that e.g. 0.05 + 3 * 0.01 (= 0.08000000000000001) still
    // counts as the endpoint 0.08.
    let tol = step.abs() * 1e-9;
    let direction = step.signum();

    let mut bounds = Vec::new();
    let mut k = 0u32;
    loop {
        let bound = lower + f64::from(k) * step;
        if (bound - upper) * direction > tol {
            break;
        }
        bounds.push(bound);
        k += 1;
    }
    Ok(bounds)
}
