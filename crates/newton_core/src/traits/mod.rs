//! Numeric traits shared by the estimators and solvers.

/// Generic floating-point trait for scalar computations.
///
/// Re-exported from num-traits so that callers can write generic
/// residual functions without depending on num-traits directly.
///
/// # Examples
/// ```
/// use newton_core::traits::Float;
///
/// fn cubic<T: Float>(x: T) -> T {
///     x * x * x - x - T::from(2.0).unwrap()
/// }
///
/// assert_eq!(cubic(2.0_f64), 4.0);
/// ```
pub use num_traits::Float;
