//! Matrix stuffing: converts a program description to solver format.
//!
//! This module builds the matrices (P, q, A, b) and cone specifications
//! required by Clarabel from a [`QuadraticProgram`] description.

use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::CscMatrix;

use crate::sparse::{csc_from_triplets, csc_scale, upper_triangle_csc};

/// A single linear constraint `coeffs . x (==|<=) rhs`.
///
/// Whether it is an equality or an inequality is decided by which list of
/// [`QuadraticProgram`] it is placed in.
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    /// Coefficient vector, one entry per decision variable.
    pub coeffs: DVector<f64>,
    /// Right-hand side scalar.
    pub rhs: f64,
}

impl LinearConstraint {
    pub fn new(coeffs: DVector<f64>, rhs: f64) -> Self {
        LinearConstraint { coeffs, rhs }
    }
}

/// A second-order-cone constraint `||factor * x||_2 <= radius`.
///
/// Used to express a quadratic bound `x' Q x <= r` through a symmetric
/// factorization `Q = F' F` with `radius = sqrt(r)`.
#[derive(Debug, Clone)]
pub struct SocConstraint {
    /// Factor matrix F applied to the decision variables.
    pub factor: DMatrix<f64>,
    /// Cone radius (nonnegative).
    pub radius: f64,
}

/// Description of one optimization program over `n` free real variables.
///
/// Objective: `x' Q x + c . x` where `Q` is the optional quadratic cost and
/// `c` the linear cost. Constraints: the listed linear equalities and
/// inequalities plus at most one second-order-cone constraint.
#[derive(Debug, Clone)]
pub struct QuadraticProgram {
    /// Optional quadratic cost matrix Q (symmetric, `x' Q x` convention).
    pub quadratic_cost: Option<DMatrix<f64>>,
    /// Linear cost vector c.
    pub linear_cost: DVector<f64>,
    /// Equality constraints `coeffs . x == rhs`.
    pub equalities: Vec<LinearConstraint>,
    /// Inequality constraints `coeffs . x <= rhs`.
    pub inequalities: Vec<LinearConstraint>,
    /// Optional second-order-cone constraint.
    pub soc: Option<SocConstraint>,
}

impl QuadraticProgram {
    /// Number of decision variables.
    pub fn num_vars(&self) -> usize {
        self.linear_cost.len()
    }
}

/// Cone dimensions for Clarabel.
#[derive(Debug, Clone, Default)]
pub struct ConeDims {
    /// Number of zero cone (equality) constraints.
    pub zero: usize,
    /// Number of nonnegative cone constraints.
    pub nonneg: usize,
    /// Second-order cone dimensions (each entry is the cone dimension).
    pub soc: Vec<usize>,
}

impl ConeDims {
    /// Total number of constraint rows.
    pub fn total(&self) -> usize {
        self.zero + self.nonneg + self.soc.iter().sum::<usize>()
    }
}

/// Stuffed problem ready for Clarabel.
#[derive(Debug)]
pub struct StuffedProblem {
    /// Quadratic cost matrix P (n x n, upper triangle).
    pub p: CscMatrix<f64>,
    /// Linear cost vector q (n).
    pub q: Vec<f64>,
    /// Constraint matrix A (m x n).
    pub a: CscMatrix<f64>,
    /// Constraint vector b (m).
    pub b: Vec<f64>,
    /// Cone dimensions.
    pub cone_dims: ConeDims,
}

/// Build the stuffed problem from a program description.
pub fn stuff_program(program: &QuadraticProgram) -> StuffedProblem {
    let n = program.num_vars();

    let p = stuff_objective(program, n);
    let q = program.linear_cost.iter().copied().collect();
    let (a, b, cone_dims) = stuff_constraints(program, n);

    StuffedProblem {
        p,
        q,
        a,
        b,
        cone_dims,
    }
}

/// Stuff the quadratic cost into P.
///
/// Clarabel uses objective (1/2) x' P x + q' x, so the symmetric Q is scaled
/// by 2 and only its upper triangle is kept.
fn stuff_objective(program: &QuadraticProgram, n: usize) -> CscMatrix<f64> {
    match &program.quadratic_cost {
        Some(quad) => csc_scale(&upper_triangle_csc(quad), 2.0),
        None => CscMatrix::zeros(n, n),
    }
}

/// Stuff constraints into A, b, and cone dims.
///
/// Row order matches the cone order Clarabel receives: Zero, NonNeg, SOC.
/// In Clarabel form `A x + s = b, s in K`:
/// - equality `a.x == r` becomes a Zero-cone row with `A = a, b = r`;
/// - inequality `a.x <= r` becomes a NonNeg-cone row with `A = a, b = r`
///   (slack `s = r - a.x >= 0`);
/// - `||F x|| <= radius` becomes an SOC block `s = [radius; F x]`, i.e. a
///   zero row with `b = radius` followed by `A = -F, b = 0`.
fn stuff_constraints(
    program: &QuadraticProgram,
    n: usize,
) -> (CscMatrix<f64>, Vec<f64>, ConeDims) {
    let zero_rows = program.equalities.len();
    let nonneg_rows = program.inequalities.len();
    let soc_dims: Vec<usize> = program
        .soc
        .iter()
        .map(|soc| soc.factor.nrows() + 1)
        .collect();
    let total_rows = zero_rows + nonneg_rows + soc_dims.iter().sum::<usize>();

    let cone_dims = ConeDims {
        zero: zero_rows,
        nonneg: nonneg_rows,
        soc: soc_dims,
    };

    let mut a_rows = Vec::new();
    let mut a_cols = Vec::new();
    let mut a_vals = Vec::new();
    let mut b = vec![0.0; total_rows];

    let mut row_offset = 0;

    for constraint in program.equalities.iter().chain(&program.inequalities) {
        for (col, val) in constraint.coeffs.iter().enumerate() {
            if val.abs() > 1e-15 {
                a_rows.push(row_offset);
                a_cols.push(col);
                a_vals.push(*val);
            }
        }
        b[row_offset] = constraint.rhs;
        row_offset += 1;
    }

    if let Some(soc) = &program.soc {
        // Radius row: s[0] = radius.
        b[row_offset] = soc.radius;
        row_offset += 1;

        // Body rows: s[1..] = F x.
        for i in 0..soc.factor.nrows() {
            for j in 0..soc.factor.ncols() {
                let val = soc.factor[(i, j)];
                if val.abs() > 1e-15 {
                    a_rows.push(row_offset + i);
                    a_cols.push(j);
                    a_vals.push(-val);
                }
            }
        }
    }

    let a = csc_from_triplets(total_rows, n, a_rows, a_cols, a_vals);

    (a, b, cone_dims)
}
