//! Central finite-difference estimators.
//!
//! Both estimators perturb the argument symmetrically by `h / 2`:
//!
//! ```text
//! f'(x)   ≈ (f(x + h/2) - f(x - h/2)) / h
//! J[i][j] ≈ (F_i(X + h·e_j/2) - F_i(X - h·e_j/2)) / h
//! ```
//!
//! The truncation error is O(h²). The step is absolute and is not
//! rescaled to the magnitude of the argument, so callers must choose `h`
//! to suit the scale of their function.
//!
//! - [`central_difference`], [`derivative_fn`]: scalar derivative
//! - [`central_difference_jacobian`]: Jacobian of a vector function

mod derivative;
mod jacobian;

pub use derivative::{central_difference, derivative_fn};
pub use jacobian::central_difference_jacobian;
pub(crate) use jacobian::try_central_difference_jacobian;

/// Default finite-difference step size.
pub const DEFAULT_STEP_SIZE: f64 = 1e-6;
