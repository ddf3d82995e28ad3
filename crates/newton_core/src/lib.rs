//! # newton_core: Newton-Raphson Root Finding
//!
//! newton_core solves nonlinear equations by Newton-Raphson iteration:
//! - one scalar equation `f(x) = 0` ([`math::solvers::NewtonRaphsonSolver`])
//! - a system of `n` equations in `n` unknowns `F(X) = 0`
//!   ([`math::solvers::NewtonSystemSolver`])
//!
//! When no analytic derivative or Jacobian is supplied, both solvers fall
//! back to central finite differences ([`math::finite_difference`]).
//!
//! ## Dependencies
//!
//! - num-traits: Generic floating-point scalars
//! - nalgebra: Dense matrices and LU factorisation for the Newton step
//! - thiserror: Structured error types
//! - tracing: Iteration-level logging (no subscriber is installed here)
//! - num-dual: Forward-mode AD slopes (optional)
//! - serde: Serialisable solver configuration (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use newton_core::math::solvers::{NewtonRaphsonSolver, NewtonSystemSolver};
//!
//! // Scalar: x² - 2 = 0
//! let solver = NewtonRaphsonSolver::with_defaults();
//! let root = solver.find_root(|x: f64| x * x - 2.0, 1.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-5);
//!
//! // System: x² + y² = 4, x = y
//! let system = NewtonSystemSolver::with_defaults();
//! let f = |x: &[f64]| vec![x[0] * x[0] + x[1] * x[1] - 4.0, x[0] - x[1]];
//! let root = system.find_root(f, vec![1.0, 1.0]).unwrap();
//! assert!((root[0] - std::f64::consts::SQRT_2).abs() < 1e-5);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): AD-powered `solve_ad` / `find_root_ad`
//! - `serde`: Serialisation for [`math::solvers::SolverConfig`] and
//!   [`types::SolverError`]
//!
//! ## Testing
//!
//! The TOML loading tests in `tests/config_serde.rs` need the `serde`
//! feature, so run the full suite with:
//!
//! ```text
//! cargo test --all-features
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
