//! # mvfrontier
//!
//! Mean-variance efficient frontier computation for long-only portfolios.
//!
//! mvfrontier builds the two classic Markowitz program variants — maximize
//! expected return under a variance ceiling, and minimize variance under a
//! return floor — as conic programs solved by Clarabel, and sweeps either
//! variant across a range of bounds to trace the frontier.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mvfrontier::prelude::*;
//! use nalgebra::{DMatrix, DVector};
//!
//! let mean = DVector::from_vec(vec![0.03, 0.08]);
//! let cov = DMatrix::from_row_slice(2, 2, &[0.01, 0.002, 0.002, 0.03]);
//!
//! // One frontier point: the lowest-variance portfolio returning >= 6%.
//! let point = solve_min_variance(&mean, &cov, 0.06)?;
//! println!("return {} at variance {}", point.expected_return, point.variance);
//!
//! // The whole frontier, one solve per return floor.
//! let series = sweep(solve_min_variance, &mean, &cov, 0.04, 0.08, 0.005)?;
//! ```
//!
//! ## Reported values
//!
//! Both variants report *realized* values at the optimum (`mu . w` and
//! `w' C w`), never the nominal bound that was requested. When the
//! controlling constraint is slack the two differ; see
//! [`markowitz::FrontierPoint`].
//!
//! ## Architecture
//!
//! - **Problem builders** assemble a neutral program description
//! - **Matrix stuffing** converts it to Clarabel's sparse `(P, q, A, b)` form
//! - **Clarabel** solves; non-optimal statuses surface as typed errors
//! - **Sweep driver** runs a builder across a bound range, abort-on-first-failure
//! - **Frontier assembler** hands the (risk, return) sequences to a renderer

pub mod error;
pub mod frontier;
pub mod markowitz;
pub mod solver;
pub mod sparse;
pub mod sweep;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use mvfrontier::prelude::*;
/// ```
pub mod prelude {
    // Problem builders
    pub use crate::markowitz::{
        solve_max_return, solve_max_return_with, solve_min_variance, solve_min_variance_with,
        FrontierPoint,
    };

    // Sweep driver
    pub use crate::sweep::{sweep, FrontierSeries};

    // Frontier assembler
    pub use crate::frontier::{render_frontier, FrontierChart, Renderer};
    #[cfg(feature = "plot")]
    pub use crate::frontier::PlotlyRenderer;

    // Solver
    pub use crate::solver::{Settings, Solution, SolveStatus};

    // Errors
    pub use crate::error::{FrontierError, Result};
}

// Re-export main types at crate root
pub use error::{FrontierError, Result};
pub use markowitz::{solve_max_return, solve_min_variance, FrontierPoint};
pub use sweep::{sweep, FrontierSeries};
