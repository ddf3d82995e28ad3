//! Numerical routines: finite-difference estimators and Newton solvers.
//!
//! - `finite_difference`: central-difference derivative and Jacobian estimates
//! - `solvers`: scalar and vector Newton-Raphson iteration

pub mod finite_difference;
pub mod solvers;
