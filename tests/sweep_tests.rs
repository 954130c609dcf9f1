//! Sweep driver tests: range semantics, ordering, failure propagation.

use approx::assert_abs_diff_eq;
use mvfrontier::prelude::*;
use nalgebra::{DMatrix, DVector};

const TOL: f64 = 1e-4;

fn two_asset() -> (DVector<f64>, DMatrix<f64>) {
    (
        DVector::from_vec(vec![0.03, 0.08]),
        DMatrix::from_row_slice(2, 2, &[0.01, 0.002, 0.002, 0.03]),
    )
}

#[test]
fn sweep_ordering_and_length() {
    let (mean, cov) = two_asset();

    let series = sweep(solve_min_variance, &mean, &cov, 0.05, 0.08, 0.01)
        .expect("sweep failed");

    // Exactly the four floors 0.05, 0.06, 0.07, 0.08, in ascending order.
    assert_eq!(series.len(), 4);
    assert_eq!(series.returns.len(), series.variances.len());

    for (k, floor) in [0.05, 0.06, 0.07, 0.08].into_iter().enumerate() {
        // Every floor here is above the minimum-variance portfolio's
        // return, so it binds and the realized return matches it.
        assert_abs_diff_eq!(series.returns[k], floor, epsilon = TOL);
    }

    for pair in series.returns.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
}

#[test]
fn sweep_steps_match_individual_solves() {
    let (mean, cov) = two_asset();

    let series = sweep(solve_min_variance, &mean, &cov, 0.05, 0.07, 0.01)
        .expect("sweep failed");

    for (k, floor) in [0.05, 0.06, 0.07].into_iter().enumerate() {
        let point = solve_min_variance(&mean, &cov, floor).expect("solve failed");
        assert_abs_diff_eq!(series.returns[k], point.expected_return, epsilon = TOL);
        assert_abs_diff_eq!(series.variances[k], point.variance, epsilon = TOL);
    }
}

#[test]
fn descending_sweep_preserves_insertion_order() {
    let (mean, cov) = two_asset();

    let series = sweep(solve_min_variance, &mean, &cov, 0.07, 0.05, -0.01)
        .expect("sweep failed");

    assert_eq!(series.len(), 3);
    for pair in series.returns.windows(2) {
        assert!(pair[1] <= pair[0] + TOL);
    }
}

#[test]
fn zero_step_is_invalid() {
    let (mean, cov) = two_asset();

    assert!(matches!(
        sweep(solve_min_variance, &mean, &cov, 0.05, 0.08, 0.0),
        Err(FrontierError::InvalidSweepRange { .. })
    ));
}

#[test]
fn wrong_sign_step_is_invalid() {
    let (mean, cov) = two_asset();

    assert!(matches!(
        sweep(solve_min_variance, &mean, &cov, 0.05, 0.08, -0.01),
        Err(FrontierError::InvalidSweepRange { .. })
    ));
}

#[test]
fn sweep_aborts_on_first_failure() {
    let (mean, cov) = two_asset();

    // Fails once the bound crosses 0.065; the sweep must propagate that
    // error instead of recording a gap or placeholder.
    let model = |mean: &DVector<f64>, cov: &DMatrix<f64>, bound: f64| {
        if bound > 0.065 {
            Err(FrontierError::SolveFailure {
                status: SolveStatus::Infeasible,
            })
        } else {
            solve_min_variance(mean, cov, bound)
        }
    };

    let err = sweep(model, &mean, &cov, 0.05, 0.08, 0.01).unwrap_err();
    assert!(matches!(err, FrontierError::SolveFailure { .. }));
}

#[test]
fn infeasible_step_aborts_real_sweep() {
    let (mean, cov) = two_asset();

    // Floors beyond the best achievable return (0.08) are infeasible.
    assert!(matches!(
        sweep(solve_min_variance, &mean, &cov, 0.07, 0.12, 0.01),
        Err(FrontierError::SolveFailure { .. })
    ));
}

#[test]
fn max_return_variant_sweeps_too() {
    let (mean, cov) = two_asset();

    let series = sweep(solve_max_return, &mean, &cov, 0.010, 0.030, 0.005)
        .expect("sweep failed");

    assert_eq!(series.len(), 5);
    // Loosening the risk ceiling can only improve the achievable return.
    for pair in series.returns.windows(2) {
        assert!(pair[1] >= pair[0] - TOL);
    }
    // With the widest ceiling the optimum is all-in on the second asset.
    assert_abs_diff_eq!(series.returns[4], 0.08, epsilon = TOL);
}
