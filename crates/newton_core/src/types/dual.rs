//! Dual number type integration for automatic differentiation.
//!
//! Functions written against [`DualNumber`] carry their own derivative,
//! so the scalar solver can take an exact slope without finite
//! differences.
//!
//! ```
//! use newton_core::types::dual::DualNumber;
//!
//! let x = DualNumber::new(3.0, 1.0); // seed dx/dx = 1
//! let y = x * x;
//! assert_eq!(y.re, 9.0);
//! assert_eq!(y.eps, 6.0);
//! ```

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// - `re`: Real part (function value)
/// - `eps`: Dual part (derivative)
pub type DualNumber = num_dual::Dual64;
