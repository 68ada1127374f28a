//! Filter operations
//!
//! This module provides the generic 2D convolution engine and the
//! edge-detection filters derived from it.

/// Filter kernels
pub mod kernels;

/// Generic 2D convolution
mod convolution;
pub use convolution::*;

/// Filter operations
mod ops;
pub use ops::*;
