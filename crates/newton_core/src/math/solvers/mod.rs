//! Newton-Raphson solvers for nonlinear equations.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: one equation in one unknown, generic over `Float`
//! - [`NewtonSystemSolver`]: `n` equations in `n` unknowns, `f64` with dense LU
//!
//! Both take an optional analytic derivative/Jacobian. Without one they
//! estimate it by central differences using `SolverConfig::step_size`.
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Absolute residual tolerance (scalar default: 5e-6, systems: 1e-6)
//! - `min_iterations`: Updates performed regardless of early convergence (default: 1)
//! - `max_iterations`: Maximum iteration count (default: 100)
//! - `step_size`: Finite-difference step (default: 1e-6)
//!
//! ## Examples
//!
//! ### Scalar Equation
//!
//! ```
//! use newton_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let config = SolverConfig::default().with_tolerance(1e-5);
//! let solver = NewtonRaphsonSolver::new(config);
//!
//! let solution = solver.solve(|x: f64| x * x - 2.0, 1.0).unwrap();
//! assert!((solution.root - std::f64::consts::SQRT_2).abs() < 1e-5);
//! assert!(solution.iterations < 10);
//! ```
//!
//! ### System of Equations
//!
//! ```
//! use newton_core::math::solvers::NewtonSystemSolver;
//! use newton_core::types::SolverError;
//! use nalgebra::DMatrix;
//!
//! let f = |x: &[f64]| vec![x[0] + x[1] - 1.0, 2.0 * x[0] + 2.0 * x[1] - 3.0];
//! let singular = |_: &[f64]| DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 2.0, 2.0]);
//!
//! let solver = NewtonSystemSolver::with_defaults();
//! let result = solver.solve_with_jacobian(f, singular, vec![0.0, 0.0]);
//!
//! assert!(matches!(result, Err(SolverError::SingularJacobian { .. })));
//! ```

mod config;
mod newton_raphson;
mod newton_system;

// Re-export public types at module level
pub use config::SolverConfig;
pub use newton_raphson::{NewtonRaphsonSolver, ScalarSolution};
pub use newton_system::{NewtonSystemSolver, SystemSolution};
