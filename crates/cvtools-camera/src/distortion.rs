use ndarray::Array2;

use crate::error::CameraError;

/// Represents the radial distortion coefficients of a lens
///
/// The displacement of an image point grows with its squared distance from
/// the optical center following the second-order polynomial model. No
/// tangential term is modeled.
///
/// # Fields
///
/// * `k1` - The first radial distortion coefficient
/// * `k2` - The second radial distortion coefficient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialDistortion {
    /// The first radial distortion coefficient
    pub k1: f64,
    /// The second radial distortion coefficient
    pub k2: f64,
}

/// Distort a single point using the radial distortion model
///
/// # Arguments
///
/// * `x` - The x coordinate of the point, in normalized image coordinates
/// * `y` - The y coordinate of the point, in normalized image coordinates
/// * `distortion` - The distortion coefficients of the lens
///
/// # Returns
///
/// The distorted point `(x, y)`.
pub fn distort_point_radial(x: f64, y: f64, distortion: &RadialDistortion) -> (f64, f64) {
    let r2 = x * x + y * y;
    let factor = 1.0 + distortion.k1 * r2 + distortion.k2 * r2 * r2;
    (x * factor, y * factor)
}

/// Apply radial distortion to a batch of points in normalized image coordinates.
///
/// The distortion depends only on the squared radius, so a point at the
/// origin always maps to itself.
///
/// # Arguments
///
/// * `points` - The points to distort, as an Nx2 array of (x, y) pairs.
/// * `distortion` - The distortion coefficients of the lens.
///
/// # Returns
///
/// A new Nx2 array with the distorted points.
///
/// # Errors
///
/// Returns an error if `points` is not an Nx2 array.
pub fn distort_points_radial(
    points: &Array2<f64>,
    distortion: &RadialDistortion,
) -> Result<Array2<f64>, CameraError> {
    if points.ncols() != 2 {
        return Err(CameraError::InvalidPointShape {
            expected: 2,
            found: points.ncols(),
        });
    }

    let mut distorted = Array2::zeros((points.nrows(), 2));
    for (src, mut dst) in points.rows().into_iter().zip(distorted.rows_mut()) {
        let (x, y) = distort_point_radial(src[0], src[1], distortion);
        dst[0] = x;
        dst[1] = y;
    }

    Ok(distorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn rotate(x: f64, y: f64, theta: f64) -> (f64, f64) {
        (
            x * theta.cos() - y * theta.sin(),
            x * theta.sin() + y * theta.cos(),
        )
    }

    #[test]
    fn test_center_point_is_fixed() -> Result<(), CameraError> {
        let points = array![[0.0, 0.0]];
        let distortion = RadialDistortion { k1: 0.1, k2: 0.01 };

        let distorted = distort_points_radial(&points, &distortion)?;
        assert_eq!(distorted, points);

        Ok(())
    }

    #[test]
    fn test_off_center_point_is_scaled() -> Result<(), CameraError> {
        let points = array![[0.5, 0.0]];
        let distortion = RadialDistortion { k1: 0.1, k2: 0.01 };

        let r2 = 0.5 * 0.5;
        let factor = 1.0 + 0.1 * r2 + 0.01 * r2 * r2;

        let distorted = distort_points_radial(&points, &distortion)?;
        assert_relative_eq!(distorted[[0, 0]], 0.5 * factor);
        assert_relative_eq!(distorted[[0, 1]], 0.0);

        Ok(())
    }

    #[test]
    fn test_distortion_is_radially_symmetric() -> Result<(), CameraError> {
        // distortion depends only on r^2, so it commutes with rotations
        // about the origin
        let distortion = RadialDistortion { k1: 0.2, k2: -0.05 };
        let (x, y) = (0.3, 0.4);
        let theta = 0.7;

        let (xr, yr) = rotate(x, y, theta);
        let (dxr, dyr) = distort_point_radial(xr, yr, &distortion);

        let (dx, dy) = distort_point_radial(x, y, &distortion);
        let (rdx, rdy) = rotate(dx, dy, theta);

        assert_relative_eq!(dxr, rdx, epsilon = 1e-12);
        assert_relative_eq!(dyr, rdy, epsilon = 1e-12);

        Ok(())
    }

    #[test]
    fn test_scalar_and_batch_forms_agree() -> Result<(), CameraError> {
        let points = array![[0.1, 0.2], [0.3, 0.4], [-0.5, 0.25]];
        let distortion = RadialDistortion {
            k1: 0.01,
            k2: -0.001,
        };

        let distorted = distort_points_radial(&points, &distortion)?;
        for (src, dst) in points.rows().into_iter().zip(distorted.rows()) {
            let (x, y) = distort_point_radial(src[0], src[1], &distortion);
            assert_relative_eq!(dst[0], x);
            assert_relative_eq!(dst[1], y);
        }

        Ok(())
    }

    #[test]
    fn test_rejects_wrong_point_shape() {
        let points = array![[1.0, 2.0, 3.0]];
        let distortion = RadialDistortion { k1: 0.1, k2: 0.01 };

        let result = distort_points_radial(&points, &distortion);
        assert_eq!(
            result,
            Err(CameraError::InvalidPointShape {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_empty_batch() -> Result<(), CameraError> {
        let points = Array2::<f64>::zeros((0, 2));
        let distortion = RadialDistortion { k1: 0.1, k2: 0.01 };

        let distorted = distort_points_radial(&points, &distortion)?;
        assert_eq!(distorted.nrows(), 0);
        assert_eq!(distorted.ncols(), 2);

        Ok(())
    }
}
