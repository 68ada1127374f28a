#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// radial lens distortion of normalized image points.
pub mod distortion;

/// Error types for the camera module.
pub mod error;

/// pinhole projection of camera-frame points.
pub mod projection;

pub use crate::distortion::{distort_point_radial, distort_points_radial, RadialDistortion};
pub use crate::error::CameraError;
pub use crate::projection::project_points_pinhole;
