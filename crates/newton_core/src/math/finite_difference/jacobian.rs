//! Jacobian estimation for vector functions.

use crate::types::SolverError;
use nalgebra::DMatrix;

/// Estimate the Jacobian of `f: Rⁿ → Rᵐ` at `x` by central differences.
///
/// Column `j` holds `(f(x + h·e_j/2) - f(x - h·e_j/2)) / h`, with every
/// other coordinate held fixed. The row count is `f(x).len()`, so the
/// result is `m × n` and need not be square. `f` is evaluated `2n + 1`
/// times (once at `x` to size the matrix).
///
/// # Panics
///
/// Panics if a perturbed evaluation returns a vector whose length differs
/// from `f(x).len()`.
///
/// # Example
///
/// ```
/// use newton_core::math::finite_difference::central_difference_jacobian;
///
/// // f(x) = [x0², x0·x1], J = [[2·x0, 0], [x1, x0]]
/// let f = |x: &[f64]| vec![x[0] * x[0], x[0] * x[1]];
/// let j = central_difference_jacobian(f, &[3.0, 4.0], 1e-6);
///
/// assert_eq!(j.shape(), (2, 2));
/// assert!((j[(0, 0)] - 6.0).abs() < 1e-6);
/// assert!((j[(0, 1)] - 0.0).abs() < 1e-6);
/// assert!((j[(1, 0)] - 4.0).abs() < 1e-6);
/// assert!((j[(1, 1)] - 3.0).abs() < 1e-6);
/// ```
pub fn central_difference_jacobian<F>(f: F, x: &[f64], h: f64) -> DMatrix<f64>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    match try_central_difference_jacobian(f, x, h) {
        Ok(jacobian) => jacobian,
        Err(_) => panic!("vector function changed output length under perturbation"),
    }
}

/// Fallible form of [`central_difference_jacobian`] used by the system
/// solver.
///
/// A perturbed evaluation whose length differs from `f(x).len()` yields
/// `SolverError::DimensionMismatch` with `(m, 1)` as the expected shape.
pub(crate) fn try_central_difference_jacobian<F>(
    f: F,
    x: &[f64],
    h: f64,
) -> Result<DMatrix<f64>, SolverError>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let n = x.len();
    let m = f(x).len();
    let half = h / 2.0;

    let mut jacobian = DMatrix::zeros(m, n);

    // Reuse both perturbed vectors, restoring each coordinate after use.
    let mut x_plus = x.to_vec();
    let mut x_minus = x.to_vec();

    for j in 0..n {
        x_plus[j] = x[j] + half;
        x_minus[j] = x[j] - half;

        let f_plus = f(&x_plus);
        let f_minus = f(&x_minus);
        if let Some(len) = [f_plus.len(), f_minus.len()].into_iter().find(|&len| len != m) {
            return Err(SolverError::DimensionMismatch {
                expected: (m, 1),
                found: (len, 1),
            });
        }

        for i in 0..m {
            jacobian[(i, j)] = (f_plus[i] - f_minus[i]) / h;
        }

        x_plus[j] = x[j];
        x_minus[j] = x[j];
    }

    Ok(jacobian)
}
