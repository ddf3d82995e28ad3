//! Solver configuration types.

use crate::math::finite_difference::DEFAULT_STEP_SIZE;
use crate::types::SolverError;
use num_traits::Float;

/// Convergence criteria and finite-difference step for Newton solvers.
///
/// The iteration loop runs while
/// `iterations < min_iterations || (iterations < max_iterations && !converged)`,
/// where `converged` means every residual component satisfies
/// `|r_i| <= tolerance`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance and step size (e.g., `f64`)
///
/// # Example
///
/// ```
/// use newton_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.max_iterations, 100);
/// assert_eq!(config.min_iterations, 1);
///
/// // Custom configuration
/// let custom = SolverConfig::default()
///     .with_tolerance(1e-12)
///     .with_max_iterations(200);
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on the absolute residual.
    ///
    /// For systems the test is elementwise: every component must satisfy it.
    pub tolerance: T,

    /// Iterations performed regardless of early tolerance satisfaction.
    pub min_iterations: usize,

    /// Hard iteration ceiling.
    ///
    /// If the tolerance is still unmet when this many iterations have run,
    /// the solver returns `SolverError::ConvergenceFailure`.
    pub max_iterations: usize,

    /// Finite-difference step `h` used when no analytic derivative or
    /// Jacobian is supplied. Absolute, not scaled to the iterate.
    pub step_size: T,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Create a default configuration for scalar equations.
    ///
    /// Default values:
    /// - `tolerance`: 5e-6
    /// - `min_iterations`: 1
    /// - `max_iterations`: 100
    /// - `step_size`: 1e-6
    fn default() -> Self {
        Self {
            tolerance: cast(5e-6),
            min_iterations: 1,
            max_iterations: 100,
            step_size: cast(DEFAULT_STEP_SIZE),
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Convergence tolerance (must be positive)
    /// * `min_iterations` - Lower bound on iterations (must be <= `max_iterations`)
    /// * `max_iterations` - Iteration ceiling (must be > 0)
    /// * `step_size` - Finite-difference step (must be positive)
    ///
    /// # Panics
    ///
    /// Panics if any of the above constraints is violated.
    ///
    /// # Example
    ///
    /// ```
    /// use newton_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 0, 200, 1e-7);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, min_iterations: usize, max_iterations: usize, step_size: T) -> Self {
        let config = Self {
            tolerance,
            min_iterations,
            max_iterations,
            step_size,
        };
        if let Err(SolverError::InvalidConfig(msg)) = config.validate() {
            panic!("{}", msg);
        }
        config
    }

    /// Create a default configuration for systems of equations.
    ///
    /// Identical to [`SolverConfig::default`] except for a tighter
    /// tolerance of 1e-6.
    pub fn for_systems() -> Self {
        Self {
            tolerance: cast(1e-6),
            ..Self::default()
        }
    }

    /// Create a configuration with high precision settings.
    ///
    /// Uses a tight tolerance (1e-12) and more iterations (500).
    pub fn high_precision() -> Self {
        Self {
            tolerance: cast(1e-12),
            max_iterations: 500,
            ..Self::default()
        }
    }

    /// Create a configuration optimised for fast convergence.
    ///
    /// Uses relaxed tolerance (1e-4) and fewer iterations (25).
    pub fn fast() -> Self {
        Self {
            tolerance: cast(1e-4),
            max_iterations: 25,
            ..Self::default()
        }
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the minimum iteration count.
    pub fn with_min_iterations(mut self, min_iterations: usize) -> Self {
        self.min_iterations = min_iterations;
        self
    }

    /// Set the maximum iteration count.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the finite-difference step size.
    pub fn with_step_size(mut self, step_size: T) -> Self {
        self.step_size = step_size;
        self
    }

    /// Check the configuration without panicking.
    ///
    /// Solvers call this on entry, so a struct literal with invalid
    /// fields is rejected before any function evaluation.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidConfig` describing the first violated
    /// constraint.
    pub fn validate(&self) -> Result<(), SolverError> {
        // Written as negated comparisons so that NaN fails too.
        if !(self.tolerance > T::zero()) {
            return Err(invalid("tolerance must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations must be > 0"));
        }
        if self.min_iterations > self.max_iterations {
            return Err(invalid("min_iterations must not exceed max_iterations"));
        }
        if !(self.step_size > T::zero()) || !self.step_size.is_finite() {
            return Err(invalid("step_size must be positive and finite"));
        }
        Ok(())
    }
}

#[inline]
fn invalid(msg: &str) -> SolverError {
    SolverError::InvalidConfig(msg.to_string())
}

/// Convert an f64 constant into `T`.
///
/// Every `Float` type in use (f32, f64) can represent these constants,
/// possibly with rounding; the fallback only guards exotic implementors.
#[inline]
fn cast<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::epsilon)
}
