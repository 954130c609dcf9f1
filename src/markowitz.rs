//! Markowitz problem builders.
//!
//! Two quadratic-program variants over long-only, fully-invested weights:
//!
//! - [`solve_max_return`]: maximize `mu . w` subject to a risk ceiling
//!   `w' C w <= max_variance`.
//! - [`solve_min_variance`]: minimize `w' C w` subject to a return floor
//!   `mu . w >= min_return`.
//!
//! Both share the box constraints `0 <= w_i <= 1` and the budget constraint
//! `sum(w) == 1`. Sweeping either variant across its bound traces the same
//! efficient frontier.

use nalgebra::{DMatrix, DVector, SymmetricEigen};

use crate::error::{FrontierError, Result};
use crate::solver::{
    solve, stuff_program, LinearConstraint, QuadraticProgram, Settings, SocConstraint, SolveStatus,
};

/// One point on the efficient frontier.
///
/// Both fields are *realized* values at the optimum, `mu . w` and `w' C w`,
/// not the nominal bounds requested by the caller. When the controlling
/// constraint is slack at the optimum the realized value differs from the
/// bound: a generous risk ceiling reports the variance actually taken, and a
/// loose return floor reports the return actually achieved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontierPoint {
    /// Realized expected portfolio return `mu . w`.
    pub expected_return: f64,
    /// Realized portfolio variance `w' C w`.
    pub variance: f64,
}

/// Maximize expected return subject to a variance ceiling.
///
/// # Errors
///
/// Returns [`FrontierError::DimensionMismatch`] if the covariance matrix is
/// not square with side length equal to the mean vector, and
/// [`FrontierError::SolveFailure`] if the solver terminates without an
/// optimal solution (e.g. an infeasibly tight ceiling).
pub fn solve_max_return(
    mean: &DVector<f64>,
    cov: &DMatrix<f64>,
    max_variance: f64,
) -> Result<FrontierPoint> {
    solve_max_return_with(mean, cov, max_variance, &Settings::default())
}

/// [`solve_max_return`] with explicit solver settings.
pub fn solve_max_return_with(
    mean: &DVector<f64>,
    cov: &DMatrix<f64>,
    max_variance: f64,
    settings: &Settings,
) -> Result<FrontierPoint> {
    check_dimensions(mean, cov)?;
    let program = max_return_program(mean, cov, max_variance);
    let weights = optimal_weights(&program, settings)?;
    Ok(realized_point(mean, cov, &weights))
}

/// Minimize portfolio variance subject to a return floor.
///
/// Same error contract as [`solve_max_return`].
pub fn solve_min_variance(
    mean: &DVector<f64>,
    cov: &DMatrix<f64>,
    min_return: f64,
) -> Result<FrontierPoint> {
    solve_min_variance_with(mean, cov, min_return, &Settings::default())
}

/// [`solve_min_variance`] with explicit solver settings.
pub fn solve_min_variance_with(
    mean: &DVector<f64>,
    cov: &DMatrix<f64>,
    min_return: f64,
    settings: &Settings,
) -> Result<FrontierPoint> {
    check_dimensions(mean, cov)?;
    let program = min_variance_program(mean, cov, min_return);
    let weights = optimal_weights(&program, settings)?;
    Ok(realized_point(mean, cov, &weights))
}

/// Verify that the covariance matrix side length matches the mean vector.
fn check_dimensions(mean: &DVector<f64>, cov: &DMatrix<f64>) -> Result<()> {
    let n = mean.len();
    if n == 0 || cov.nrows() != n || cov.ncols() != n {
        return Err(FrontierError::DimensionMismatch {
            assets: n,
            rows: cov.nrows(),
            cols: cov.ncols(),
        });
    }
    Ok(())
}

/// Build the return-maximizing program.
///
/// Maximization is expressed as minimizing `-mu . w`; the risk ceiling
/// `w' C w <= max_variance` becomes the cone `||G' w|| <= sqrt(max_variance)`
/// with `C = G G'`.
fn max_return_program(
    mean: &DVector<f64>,
    cov: &DMatrix<f64>,
    max_variance: f64,
) -> QuadraticProgram {
    let n = mean.len();
    QuadraticProgram {
        quadratic_cost: None,
        linear_cost: -mean,
        equalities: vec![budget_constraint(n)],
        inequalities: box_constraints(n),
        soc: Some(SocConstraint {
            factor: risk_factor(cov).transpose(),
            // A negative ceiling collapses the cone to radius zero and
            // surfaces as solver infeasibility.
            radius: max_variance.max(0.0).sqrt(),
        }),
    }
}

/// Build the variance-minimizing program.
fn min_variance_program(
    mean: &DVector<f64>,
    cov: &DMatrix<f64>,
    min_return: f64,
) -> QuadraticProgram {
    let n = mean.len();
    let mut inequalities = box_constraints(n);
    // mu . w >= min_return, as -mu . w <= -min_return.
    inequalities.push(LinearConstraint::new(-mean, -min_return));

    QuadraticProgram {
        quadratic_cost: Some(cov.clone()),
        linear_cost: DVector::zeros(n),
        equalities: vec![budget_constraint(n)],
        inequalities,
        soc: None,
    }
}

/// Fully-invested budget: `sum(w) == 1`.
fn budget_constraint(n: usize) -> LinearConstraint {
    LinearConstraint::new(DVector::from_element(n, 1.0), 1.0)
}

/// Box bounds `0 <= w_i <= 1` as `2n` inequality rows.
fn box_constraints(n: usize) -> Vec<LinearConstraint> {
    let mut constraints = Vec::with_capacity(2 * n);
    for i in 0..n {
        let mut lower = DVector::zeros(n);
        lower[i] = -1.0;
        constraints.push(LinearConstraint::new(lower, 0.0));

        let mut upper = DVector::zeros(n);
        upper[i] = 1.0;
        constraints.push(LinearConstraint::new(upper, 1.0));
    }
    constraints
}

/// Symmetric factor `G` with `C = G G'`.
///
/// Eigendecomposition rather than Cholesky so that positive semi-definite
/// covariance matrices (zero eigenvalues, e.g. perfectly correlated assets)
/// still factor; small negative eigenvalues from estimation noise are
/// clamped to zero.
fn risk_factor(cov: &DMatrix<f64>) -> DMatrix<f64> {
    let eigen = SymmetricEigen::new(cov.clone());
    let scale = eigen.eigenvalues.map(|l| l.max(0.0).sqrt());
    &eigen.eigenvectors * DMatrix::from_diagonal(&scale)
}

/// Run the solver and extract the optimal weight vector.
fn optimal_weights(program: &QuadraticProgram, settings: &Settings) -> Result<DVector<f64>> {
    let stuffed = stuff_program(program);
    let solution = solve(&stuffed, settings);

    match (solution.status, solution.x) {
        (SolveStatus::Optimal, Some(x)) => Ok(DVector::from_vec(x)),
        (status, _) => Err(FrontierError::SolveFailure { status }),
    }
}

/// Realized (return, variance) pair at the optimum.
fn realized_point(mean: &DVector<f64>, cov: &DMatrix<f64>, weights: &DVector<f64>) -> FrontierPoint {
    FrontierPoint {
        expected_return: mean.dot(weights),
        variance: (cov * weights).dot(weights),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    fn two_asset() -> (DVector<f64>, DMatrix<f64>) {
        (
            DVector::from_vec(vec![0.03, 0.08]),
            DMatrix::from_row_slice(2, 2, &[0.01, 0.002, 0.002, 0.03]),
        )
    }

    fn assert_feasible_weights(weights: &DVector<f64>) {
        for w in weights.iter() {
            assert!(*w >= -TOL, "negative weight {w}");
            assert!(*w <= 1.0 + TOL, "weight above one {w}");
        }
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < TOL, "weights sum to {sum}");
    }

    #[test]
    fn max_return_weights_are_feasible() {
        let (mean, cov) = two_asset();
        let program = max_return_program(&mean, &cov, 0.02);
        let weights = optimal_weights(&program, &Settings::default()).unwrap();
        assert_feasible_weights(&weights);
    }

    #[test]
    fn min_variance_weights_are_feasible() {
        let (mean, cov) = two_asset();
        let program = min_variance_program(&mean, &cov, 0.06);
        let weights = optimal_weights(&program, &Settings::default()).unwrap();
        assert_feasible_weights(&weights);
    }

    #[test]
    fn min_variance_binding_floor_fixes_weights() {
        // mu . w = 0.06 with the budget forces w = [0.4, 0.6].
        let (mean, cov) = two_asset();
        let program = min_variance_program(&mean, &cov, 0.06);
        let weights = optimal_weights(&program, &Settings::default()).unwrap();
        assert!((weights[0] - 0.4).abs() < 1e-4);
        assert!((weights[1] - 0.6).abs() < 1e-4);
    }

    #[test]
    fn risk_factor_reproduces_covariance() {
        let (_, cov) = two_asset();
        let g = risk_factor(&cov);
        let reconstructed = &g * g.transpose();
        assert!((reconstructed - cov).norm() < 1e-12);
    }

    #[test]
    fn risk_factor_accepts_semidefinite_covariance() {
        // Two perfectly correlated assets: rank-one covariance.
        let cov = DMatrix::from_row_slice(2, 2, &[0.04, 0.04, 0.04, 0.04]);
        let g = risk_factor(&cov);
        let reconstructed = &g * g.transpose();
        assert!((reconstructed - cov).norm() < 1e-12);
    }

    #[test]
    fn infeasible_ceiling_is_a_solve_failure() {
        let (mean, cov) = two_asset();
        // No fully-invested allocation has variance this low.
        let err = solve_max_return(&mean, &cov, 1e-6).unwrap_err();
        assert!(matches!(err, FrontierError::SolveFailure { .. }));
    }

    #[test]
    fn infeasible_floor_is_a_solve_failure() {
        let (mean, cov) = two_asset();
        // Best achievable return is 0.08.
        let err = solve_min_variance(&mean, &cov, 0.20).unwrap_err();
        assert!(matches!(err, FrontierError::SolveFailure { .. }));
    }
}
