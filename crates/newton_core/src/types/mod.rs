//! Core types shared across the crate.
//!
//! This module provides:
//! - `error`: Structured error type for solver failures
//! - `dual`: Dual number alias for AD-powered slopes (when `num-dual-mode` is enabled)
//!
//! # Re-exports
//!
//! - [`SolverError`] from `error`

#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod error;

pub use error::SolverError;
