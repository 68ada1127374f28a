/// An error type for the camera module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CameraError {
    /// Error when a point matrix does not have the expected number of columns.
    #[error("Input points must be an Nx{expected} array, got Nx{found}")]
    InvalidPointShape {
        /// The expected number of columns.
        expected: usize,
        /// The number of columns found in the input.
        found: usize,
    },

    /// Error when a 3-D point has a non-positive depth.
    #[error("All points must have z > 0, point {index} has z = {z}")]
    InvalidDepth {
        /// The row index of the first offending point.
        index: usize,
        /// The offending depth value.
        z: f64,
    },
}
