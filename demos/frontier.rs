//! Efficient Frontier Example
//!
//! Sweeps the variance-minimizing formulation across a range of return
//! floors and prints the resulting frontier:
//!
//! minimize    w' C w               (minimize risk)
//! subject to  mu' w >= floor       (minimum return)
//!             sum(w) = 1           (fully invested)
//!             0 <= w <= 1          (long-only)
//!
//! Run with `--features plot` to also open the frontier chart.

use mvfrontier::prelude::*;
use nalgebra::{DMatrix, DVector};

fn main() {
    println!("=== Efficient Frontier ===\n");

    // 4 asset classes with different risk/return profiles
    let mean = DVector::from_vec(vec![0.12, 0.10, 0.07, 0.05]);

    #[rustfmt::skip]
    let cov = DMatrix::from_row_slice(4, 4, &[
         0.04,  0.01,  0.00, -0.01,
         0.01,  0.03,  0.00,  0.00,
         0.00,  0.00,  0.02,  0.00,
        -0.01,  0.00,  0.00,  0.01,
    ]);

    println!("Assets: A, B, C, D");
    println!("Expected returns: [12%, 10%, 7%, 5%]\n");

    let series = sweep(solve_min_variance, &mean, &cov, 0.05, 0.12, 0.005)
        .expect("sweep failed");

    println!("{:>10}  {:>10}", "return", "std. dev.");
    for point in series.points() {
        println!(
            "{:>9.2}%  {:>9.2}%",
            point.expected_return * 100.0,
            point.variance.sqrt() * 100.0
        );
    }

    println!("\nHigher returns require accepting higher risk!");

    #[cfg(feature = "plot")]
    {
        let mut renderer = PlotlyRenderer::new();
        render_frontier(&series, "Efficient frontier", &mut renderer);
        if let Some(plot) = renderer.into_plot() {
            plot.show();
        }
    }
}
