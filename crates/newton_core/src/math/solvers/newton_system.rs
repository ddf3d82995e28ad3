//! Newton-Raphson solver for systems of nonlinear equations.
//!
//! # Algorithm
//!
//! ```text
//! J(X_k) δ = F(X_k)
//! X_{k+1} = X_k - δ
//! ```
//!
//! where `J` is the Jacobian of `F`, either supplied analytically or
//! estimated by central differences. The linear system is solved by LU
//! factorisation with partial pivoting; the same factorisation provides
//! the determinant used to detect a singular Jacobian. No explicit
//! inverse is formed.
//!
//! # Example
//!
//! ```
//! use newton_core::math::solvers::NewtonSystemSolver;
//!
//! // x² + y² = 4 and x = y
//! let f = |x: &[f64]| vec![x[0] * x[0] + x[1] * x[1] - 4.0, x[0] - x[1]];
//!
//! let solver = NewtonSystemSolver::with_defaults();
//! let solution = solver.solve(f, vec![1.0, 1.0]).unwrap();
//!
//! assert!((solution.root[0] - 2.0_f64.sqrt()).abs() < 1e-5);
//! assert!((solution.root[1] - 2.0_f64.sqrt()).abs() < 1e-5);
//! ```

use super::SolverConfig;
use crate::math::finite_difference::try_central_difference_jacobian;
use crate::types::SolverError;
use nalgebra::{DMatrix, DVector};
use tracing::{debug, debug_span, trace, warn};

/// Outcome of a converged system solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSolution {
    /// Root estimate `X`.
    pub root: Vec<f64>,
    /// `F(X)` at the root estimate.
    pub residual: Vec<f64>,
    /// Number of Newton updates performed.
    pub iterations: usize,
}

impl SystemSolution {
    /// Largest absolute residual component.
    pub fn max_residual(&self) -> f64 {
        max_abs(&self.residual)
    }
}

/// Newton-Raphson solver for `F(X) = 0` with `F: Rⁿ → Rⁿ`.
///
/// Convergence is elementwise: the residual satisfies the tolerance only
/// when every `|F_i(X)| <= tolerance`.
///
/// # Failure Modes
///
/// - `DimensionMismatch`: Jacobian is not `n × n`, or `F(X)` is not length `n`
/// - `UndefinedJacobian`: a Jacobian entry is NaN or infinite
/// - `SingularJacobian`: the Jacobian determinant is zero
/// - `NumericalInstability`: an iterate became non-finite
/// - `ConvergenceFailure`: `max_iterations` reached without meeting the tolerance
///
/// # Example
///
/// ```
/// use nalgebra::DMatrix;
/// use newton_core::math::solvers::NewtonSystemSolver;
///
/// // Linear system with exact Jacobian: one Newton step is exact.
/// let f = |x: &[f64]| vec![2.0 * x[0] + x[1] - 3.0, x[0] - x[1]];
/// let jac = |_: &[f64]| DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, -1.0]);
///
/// let solver = NewtonSystemSolver::with_defaults();
/// let solution = solver.solve_with_jacobian(f, jac, vec![10.0, -7.0]).unwrap();
///
/// assert_eq!(solution.iterations, 1);
/// assert!((solution.root[0] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonSystemSolver {
    config: SolverConfig<f64>,
}

/// Mutable state of one solve; discarded when the call returns.
struct IterationState {
    x: Vec<f64>,
    residual: Vec<f64>,
    jacobian: DMatrix<f64>,
    iteration: usize,
}

impl IterationState {
    fn within_tolerance(&self, tolerance: f64) -> bool {
        // NaN components never satisfy the tolerance.
        self.residual.iter().all(|r| r.abs() <= tolerance)
    }
}

impl NewtonSystemSolver {
    /// Create a new solver with the given configuration.
    pub fn new(config: SolverConfig<f64>) -> Self {
        Self { config }
    }

    /// Create a solver with [`SolverConfig::for_systems`].
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::for_systems(),
        }
    }

    /// Get the solver configuration.
    pub fn config(&self) -> &SolverConfig<f64> {
        &self.config
    }

    /// Solve `F(X) = 0` using a central-difference Jacobian.
    ///
    /// # Arguments
    ///
    /// * `f` - Vector function; must return a vector of the same length as its input
    /// * `x0` - Initial guess (non-empty)
    ///
    /// An `f` whose output length changes between the base point and a
    /// perturbed point yields `DimensionMismatch`.
    ///
    /// # Returns
    ///
    /// * `Ok(SystemSolution)` - Root, residual and iteration count
    /// * `Err(SolverError)` - See the type-level documentation
    pub fn solve<F>(&self, f: F, x0: Vec<f64>) -> Result<SystemSolution, SolverError>
    where
        F: Fn(&[f64]) -> Vec<f64>,
    {
        let h = self.config.step_size;
        self.iterate(&f, |x: &[f64]| try_central_difference_jacobian(&f, x, h), x0)
    }

    /// Solve `F(X) = 0` using the analytic Jacobian `jacobian`.
    ///
    /// The Jacobian is evaluated at `x0` and its shape checked against
    /// `(n, n)` before the first update.
    pub fn solve_with_jacobian<F, J>(
        &self,
        f: F,
        jacobian: J,
        x0: Vec<f64>,
    ) -> Result<SystemSolution, SolverError>
    where
        F: Fn(&[f64]) -> Vec<f64>,
        J: Fn(&[f64]) -> DMatrix<f64>,
    {
        self.iterate(f, |x: &[f64]| Ok(jacobian(x)), x0)
    }

    /// Find a root using a central-difference Jacobian.
    ///
    /// Equivalent to [`solve`](Self::solve) but returns only the root.
    pub fn find_root<F>(&self, f: F, x0: Vec<f64>) -> Result<Vec<f64>, SolverError>
    where
        F: Fn(&[f64]) -> Vec<f64>,
    {
        self.solve(f, x0).map(|solution| solution.root)
    }

    /// Find a root using the analytic Jacobian `jacobian`.
    ///
    /// Equivalent to [`solve_with_jacobian`](Self::solve_with_jacobian)
    /// but returns only the root.
    pub fn find_root_with_jacobian<F, J>(
        &self,
        f: F,
        jacobian: J,
        x0: Vec<f64>,
    ) -> Result<Vec<f64>, SolverError>
    where
        F: Fn(&[f64]) -> Vec<f64>,
        J: Fn(&[f64]) -> DMatrix<f64>,
    {
        self.solve_with_jacobian(f, jacobian, x0)
            .map(|solution| solution.root)
    }

    /// Shared iteration loop; `jacobian_at` is fixed for the whole solve.
    fn iterate<F, J>(
        &self,
        f: F,
        jacobian_at: J,
        x0: Vec<f64>,
    ) -> Result<SystemSolution, SolverError>
    where
        F: Fn(&[f64]) -> Vec<f64>,
        J: Fn(&[f64]) -> Result<DMatrix<f64>, SolverError>,
    {
        self.config.validate()?;
        let n = x0.len();
        if n == 0 {
            return Err(SolverError::InvalidConfig(
                "initial guess must not be empty".to_string(),
            ));
        }
        let _span = debug_span!("newton_system", n).entered();

        let SolverConfig {
            tolerance,
            min_iterations,
            max_iterations,
            ..
        } = self.config;

        let residual = f(&x0);
        let jacobian = jacobian_at(&x0)?;
        check_shapes(&jacobian, &residual, n)?;

        let mut state = IterationState {
            x: x0,
            residual,
            jacobian,
            iteration: 0,
        };

        while state.iteration < min_iterations
            || (state.iteration < max_iterations && !state.within_tolerance(tolerance))
        {
            if let Some((row, col)) = first_undefined(&state.jacobian) {
                warn!(iteration = state.iteration, row, col, "undefined jacobian entry");
                return Err(SolverError::UndefinedJacobian {
                    row,
                    col,
                    iteration: state.iteration,
                });
            }

            let step = newton_step(&state.jacobian, &state.residual).ok_or_else(|| {
                warn!(iteration = state.iteration, "singular jacobian");
                SolverError::SingularJacobian {
                    iteration: state.iteration,
                }
            })?;

            for (xi, di) in state.x.iter_mut().zip(step.iter()) {
                *xi -= di;
            }
            if state.x.iter().any(|xi| !xi.is_finite()) {
                warn!(iteration = state.iteration, "non-finite iterate");
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }

            state.residual = f(&state.x);
            state.jacobian = jacobian_at(&state.x)?;
            check_shapes(&state.jacobian, &state.residual, n)?;
            state.iteration += 1;

            trace!(
                iteration = state.iteration,
                residual = max_abs(&state.residual),
                "newton step"
            );
        }

        if state.iteration == max_iterations && !state.within_tolerance(tolerance) {
            let residual = max_abs(&state.residual);
            warn!(
                iterations = state.iteration,
                residual, "newton iteration did not converge"
            );
            return Err(SolverError::ConvergenceFailure {
                iterations: state.iteration,
                residual,
            });
        }

        debug!(iterations = state.iteration, "newton iteration converged");
        Ok(SystemSolution {
            root: state.x,
            residual: state.residual,
            iterations: state.iteration,
        })
    }
}

/// Solve `J δ = r` by LU; `None` when `J` is singular.
fn newton_step(jacobian: &DMatrix<f64>, residual: &[f64]) -> Option<DVector<f64>> {
    let lu = jacobian.clone().lu();
    if lu.determinant() == 0.0 {
        return None;
    }
    lu.solve(&DVector::from_column_slice(residual))
}

/// Jacobian must be `n × n` and the residual length `n`.
fn check_shapes(jacobian: &DMatrix<f64>, residual: &[f64], n: usize) -> Result<(), SolverError> {
    if jacobian.shape() != (n, n) {
        warn!(found = ?jacobian.shape(), n, "jacobian has wrong shape");
        return Err(SolverError::DimensionMismatch {
            expected: (n, n),
            found: jacobian.shape(),
        });
    }
    if residual.len() != n {
        warn!(found = residual.len(), n, "residual has wrong length");
        return Err(SolverError::DimensionMismatch {
            expected: (n, 1),
            found: (residual.len(), 1),
        });
    }
    Ok(())
}

/// First non-finite entry in row-major order.
fn first_undefined(jacobian: &DMatrix<f64>) -> Option<(usize, usize)> {
    let (rows, cols) = jacobian.shape();
    (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .find(|&(r, c)| !jacobian[(r, c)].is_finite())
}

#[inline]
fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0, |acc: f64, x| acc.max(x.abs()))
}
