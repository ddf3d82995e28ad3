//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Every way a Newton-Raphson solve can fail

use thiserror::Error;

/// Newton-Raphson solver errors.
///
/// A solver call yields exactly one root or exactly one of these
/// variants. Each failure is detected where it occurs and returned
/// immediately; the solvers never retry or fall back to another method.
///
/// # Variants
/// - `ConvergenceFailure`: Iteration limit reached without meeting the tolerance
/// - `ZeroDerivative`: Scalar slope is exactly zero
/// - `DimensionMismatch`: Jacobian or residual has the wrong shape
/// - `SingularJacobian`: Jacobian cannot be inverted
/// - `UndefinedJacobian`: Jacobian contains a NaN or infinite entry
/// - `NumericalInstability`: An iterate became non-finite
/// - `InvalidConfig`: Configuration or initial guess rejected before iterating
///
/// # Examples
/// ```
/// use newton_core::types::SolverError;
///
/// let err = SolverError::ConvergenceFailure { iterations: 100, residual: 0.5 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver reached `max_iterations` without satisfying the tolerance.
    #[error("Failed to converge after {iterations} iterations (residual = {residual})")]
    ConvergenceFailure {
        /// Number of iterations performed
        iterations: usize,
        /// Largest absolute residual component at exit
        residual: f64,
    },

    /// Slope is exactly zero, so the Newton update is undefined.
    #[error("Zero derivative at x = {x}")]
    ZeroDerivative {
        /// The x value where the slope vanished
        x: f64,
    },

    /// Jacobian or residual shape does not match the unknown vector.
    #[error("Dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        /// Expected (rows, columns)
        expected: (usize, usize),
        /// Actual (rows, columns)
        found: (usize, usize),
    },

    /// Jacobian determinant is zero.
    #[error("Singular Jacobian at iteration {iteration}")]
    SingularJacobian {
        /// Iteration at which the singular matrix was encountered
        iteration: usize,
    },

    /// Jacobian entry is not a finite number.
    #[error("Undefined Jacobian entry ({row}, {col}) at iteration {iteration}")]
    UndefinedJacobian {
        /// Row of the first undefined entry
        row: usize,
        /// Column of the first undefined entry
        col: usize,
        /// Iteration at which the entry was found
        iteration: usize,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Configuration or input rejected before iterating.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SolverError {
    /// Whether this is a convergence failure (as opposed to a fault
    /// detected mid-iteration).
    ///
    /// Callers typically retry a convergence failure with a better
    /// starting point or a larger iteration budget.
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, SolverError::ConvergenceFailure { .. })
    }

    /// Whether the failure originates from the Jacobian matrix
    /// (singular, undefined or misshapen).
    pub fn is_jacobian_error(&self) -> bool {
        matches!(
            self,
            SolverError::SingularJacobian { .. }
                | SolverError::UndefinedJacobian { .. }
                | SolverError::DimensionMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convergence_failure_display() {
        let err = SolverError::ConvergenceFailure {
            iterations: 100,
            residual: 0.25,
        };
        assert_eq!(
            format!("{}", err),
            "Failed to converge after 100 iterations (residual = 0.25)"
        );
    }

    #[test]
    fn test_zero_derivative_display() {
        let err = SolverError::ZeroDerivative { x: 1.5 };
        assert_eq!(format!("{}", err), "Zero derivative at x = 1.5");
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = SolverError::DimensionMismatch {
            expected: (2, 2),
            found: (3, 2),
        };
        assert_eq!(
            format!("{}", err),
            "Dimension mismatch: expected (2, 2), found (3, 2)"
        );
    }

    #[test]
    fn test_singular_jacobian_display() {
        let err = SolverError::SingularJacobian { iteration: 0 };
        assert_eq!(format!("{}", err), "Singular Jacobian at iteration 0");
    }

    #[test]
    fn test_undefined_jacobian_display() {
        let err = SolverError::UndefinedJacobian {
            row: 1,
            col: 0,
            iteration: 3,
        };
        assert_eq!(
            format!("{}", err),
            "Undefined Jacobian entry (1, 0) at iteration 3"
        );
    }

    #[test]
    fn test_invalid_config_display() {
        let err = SolverError::InvalidConfig("tolerance must be positive".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid configuration: tolerance must be positive"
        );
    }

    #[test]
    fn test_classification() {
        let failure = SolverError::ConvergenceFailure {
            iterations: 1,
            residual: 10.0,
        };
        assert!(failure.is_convergence_failure());
        assert!(!failure.is_jacobian_error());

        let singular = SolverError::SingularJacobian { iteration: 2 };
        assert!(singular.is_jacobian_error());
        assert!(!singular.is_convergence_failure());

        assert!(!SolverError::ZeroDerivative { x: 0.0 }.is_jacobian_error());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SolverError::SingularJacobian { iteration: 1 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = SolverError::UndefinedJacobian {
            row: 0,
            col: 1,
            iteration: 0,
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
