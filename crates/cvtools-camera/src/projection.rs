use ndarray::Array2;

use crate::error::CameraError;

/// Project camera-frame 3-D points with a simple pinhole model.
///
/// Every point (X, Y, Z) maps to `(f * X / Z, f * Y / Z)`. The whole batch
/// is validated before any output is computed: if any point has Z <= 0 the
/// call fails without producing a partial result. A focal length of zero is
/// not an error; it degenerates to projecting every point to the origin.
///
/// # Arguments
///
/// * `points` - The points to project, as an Nx3 array of (X, Y, Z) triples
///   with Z > 0.
/// * `focal_length` - The focal length of the camera.
///
/// # Returns
///
/// A new Nx2 array with the projected points.
///
/// # Errors
///
/// Returns an error if `points` is not an Nx3 array, or if any point has a
/// non-positive depth.
pub fn project_points_pinhole(
    points: &Array2<f64>,
    focal_length: f64,
) -> Result<Array2<f64>, CameraError> {
    if points.ncols() != 3 {
        return Err(CameraError::InvalidPointShape {
            expected: 3,
            found: points.ncols(),
        });
    }

    // all-or-nothing depth validation before any output is allocated
    if let Some((index, &z)) = points
        .column(2)
        .iter()
        .enumerate()
        .find(|(_, &z)| z <= 0.0)
    {
        return Err(CameraError::InvalidDepth { index, z });
    }

    let mut projected = Array2::zeros((points.nrows(), 2));
    for (src, mut dst) in points.rows().into_iter().zip(projected.rows_mut()) {
        dst[0] = focal_length * src[0] / src[2];
        dst[1] = focal_length * src[1] / src[2];
    }

    Ok(projected)
}
