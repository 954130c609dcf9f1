//! Solver interface for mvfrontier.
//!
//! This module provides:
//! - Matrix stuffing to convert program descriptions to solver format
//! - Clarabel solver integration

pub mod clarabel;
pub mod stuffing;

pub use self::clarabel::{solve, Settings, Solution, SolveStatus};
pub use stuffing::{
    stuff_program, ConeDims, LinearConstraint, QuadraticProgram, SocConstraint, StuffedProblem,
};
