//! Newton-Raphson root-finding solver for scalar equations.

use super::SolverConfig;
use crate::math::finite_difference::central_difference;
#[cfg(feature = "num-dual-mode")]
use crate::types::dual::DualNumber;
use crate::types::SolverError;
use num_traits::Float;
use tracing::{debug, debug_span, trace, warn};

/// Outcome of a converged scalar solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarSolution<T> {
    /// Root estimate.
    pub root: T,
    /// `f(root)`.
    pub residual: T,
    /// Number of Newton updates performed.
    pub iterations: usize,
}

/// Newton-Raphson root finder for `f(x) = 0`.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)`. The slope
/// comes from an analytic derivative when one is supplied, otherwise from
/// a central-difference estimate with `config.step_size`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a simple root. There is no
/// line search or bracketing safeguard: the caller must supply a starting
/// point reasonably close to a root. The solve fails with:
/// - `ConvergenceFailure` when `max_iterations` is reached with `|f(x)| > tolerance`
/// - `ZeroDerivative` when the slope at the current iterate is exactly zero
/// - `NumericalInstability` when an iterate becomes non-finite
///
/// # Example
///
/// ```
/// use newton_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2) with an estimated derivative
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default().with_tolerance(1e-10));
///
/// let root = solver.find_root(|x: f64| x * x - 2.0, 1.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Solve `f(x) = 0` using a central-difference slope.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find a root of
    /// * `x0` - Initial guess
    ///
    /// # Returns
    ///
    /// * `Ok(ScalarSolution)` - Root, residual and iteration count
    /// * `Err(SolverError)` - See the type-level documentation
    ///
    /// # Example
    ///
    /// ```
    /// use newton_core::math::solvers::NewtonRaphsonSolver;
    ///
    /// let solver = NewtonRaphsonSolver::with_defaults();
    /// let solution = solver.solve(|x: f64| x * x - 2.0, 1.0).unwrap();
    ///
    /// assert!(solution.residual.abs() <= 5e-6);
    /// assert!(solution.iterations < 10);
    /// ```
    pub fn solve<F>(&self, f: F, x0: T) -> Result<ScalarSolution<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        let h = self.config.step_size;
        self.iterate(&f, |x| central_difference(&f, x, h), x0)
    }

    /// Solve `f(x) = 0` using the analytic derivative `f_prime`.
    ///
    /// # Example
    ///
    /// ```
    /// use newton_core::math::solvers::NewtonRaphsonSolver;
    ///
    /// let solver = NewtonRaphsonSolver::with_defaults();
    ///
    /// // Solve x³ - x - 2 = 0
    /// let f = |x: f64| x * x * x - x - 2.0;
    /// let f_prime = |x: f64| 3.0 * x * x - 1.0;
    ///
    /// let solution = solver.solve_with_derivative(f, f_prime, 1.5).unwrap();
    /// assert!(f(solution.root).abs() <= 5e-6);
    /// ```
    pub fn solve_with_derivative<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
    ) -> Result<ScalarSolution<T>, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.iterate(f, f_prime, x0)
    }

    /// Find a root of `f` using a central-difference slope.
    ///
    /// Equivalent to [`solve`](Self::solve) but returns only the root.
    pub fn find_root<F>(&self, f: F, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        self.solve(f, x0).map(|solution| solution.root)
    }

    /// Find a root of `f` using the analytic derivative `f_prime`.
    ///
    /// Equivalent to [`solve_with_derivative`](Self::solve_with_derivative)
    /// but returns only the root.
    pub fn find_root_with_derivative<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
    ) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.solve_with_derivative(f, f_prime, x0)
            .map(|solution| solution.root)
    }

    /// Shared iteration loop; `slope_at` is fixed for the whole solve.
    fn iterate<F, D>(&self, f: F, slope_at: D, x0: T) -> Result<ScalarSolution<T>, SolverError>
    where
        F: Fn(T) -> T,
        D: Fn(T) -> T,
    {
        self.config.validate()?;
        let _span = debug_span!("newton_raphson", x0 = as_f64(x0)).entered();

        let SolverConfig {
            tolerance,
            min_iterations,
            max_iterations,
            ..
        } = self.config;
        // NaN residuals never count as converged.
        let converged = |r: T| r.abs() <= tolerance;

        let mut x = x0;
        let mut residual = f(x);
        let mut slope = slope_at(x);
        let mut iterations = 0;

        while iterations < min_iterations || (iterations < max_iterations && !converged(residual)) {
            if slope.is_zero() {
                warn!(iteration = iterations, x = as_f64(x), "zero derivative");
                return Err(SolverError::ZeroDerivative { x: as_f64(x) });
            }

            x = x - residual / slope;
            if !x.is_finite() {
                warn!(iteration = iterations, "non-finite iterate");
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }

            residual = f(x);
            slope = slope_at(x);
            iterations += 1;

            trace!(
                iteration = iterations,
                x = as_f64(x),
                residual = as_f64(residual),
                "newton step"
            );
        }

        if iterations == max_iterations && !converged(residual) {
            warn!(
                iterations,
                residual = as_f64(residual),
                "newton iteration did not converge"
            );
            return Err(SolverError::ConvergenceFailure {
                iterations,
                residual: as_f64(residual.abs()),
            });
        }

        debug!(iterations, root = as_f64(x), "newton iteration converged");
        Ok(ScalarSolution {
            root: x,
            residual,
            iterations,
        })
    }
}

/// AD-enabled Newton-Raphson solver for f64.
#[cfg(feature = "num-dual-mode")]
impl NewtonRaphsonSolver<f64> {
    /// Solve `f(x) = 0` with slopes from forward-mode automatic
    /// differentiation.
    ///
    /// `f` is evaluated on dual numbers; the real part is the residual
    /// and the dual part is the exact derivative, so no finite-difference
    /// step is involved.
    ///
    /// # Example
    ///
    /// ```
    /// use newton_core::math::solvers::NewtonRaphsonSolver;
    /// use newton_core::types::dual::DualNumber;
    ///
    /// let solver = NewtonRaphsonSolver::with_defaults();
    ///
    /// // Solve x² - 2 = 0 using AD
    /// let f = |x: DualNumber| x * x - DualNumber::from(2.0);
    ///
    /// let solution = solver.solve_ad(f, 1.0).unwrap();
    /// assert!((solution.root - std::f64::consts::SQRT_2).abs() < 1e-5);
    /// ```
    pub fn solve_ad<F>(&self, f: F, x0: f64) -> Result<ScalarSolution<f64>, SolverError>
    where
        F: Fn(DualNumber) -> DualNumber,
    {
        self.iterate(
            |x| f(DualNumber::new(x, 0.0)).re,
            |x| f(DualNumber::new(x, 1.0)).eps,
            x0,
        )
    }

    /// Find a root using automatic differentiation.
    ///
    /// Equivalent to [`solve_ad`](Self::solve_ad) but returns only the root.
    pub fn find_root_ad<F>(&self, f: F, x0: f64) -> Result<f64, SolverError>
    where
        F: Fn(DualNumber) -> DualNumber,
    {
        self.solve_ad(f, x0).map(|solution| solution.root)
    }
}

#[inline]
fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
