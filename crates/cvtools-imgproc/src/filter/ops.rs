use cvtools_image::{Image, ImageError};

use super::{convolve2d, kernels, FloatConversion, PaddingMode};

/// Compute the image gradient in x with the 3x3 Sobel operator.
///
/// Responds to vertical edges. The output is an `f32` image with the same
/// shape as the input (zero-padded, [`PaddingMode::Same`]).
///
/// # Arguments
///
/// * `src` - The source grayscale image with shape (H, W).
pub fn sobel_x<T>(src: &Image<T>) -> Result<Image<f32>, ImageError>
where
    T: FloatConversion,
{
    convolve2d(src, &kernels::sobel_kernel_x_3x3(), PaddingMode::Same)
}

/// Compute the image gradient in y with the 3x3 Sobel operator.
///
/// Responds to horizontal edges. The output is an `f32` image with the same
/// shape as the input (zero-padded, [`PaddingMode::Same`]).
///
/// # Arguments
///
/// * `src` - The source grayscale image with shape (H, W).
pub fn sobel_y<T>(src: &Image<T>) -> Result<Image<f32>, ImageError>
where
    T: FloatConversion,
{
    convolve2d(src, &kernels::sobel_kernel_y_3x3(), PaddingMode::Same)
}

/// Apply the 3x3 Laplacian filter to highlight edges.
///
/// The Laplacian responds to intensity changes of any orientation and does
/// not distinguish the edge direction. The output is an `f32` image with the
/// same shape as the input (zero-padded, [`PaddingMode::Same`]).
///
/// # Arguments
///
/// * `src` - The source grayscale image with shape (H, W).
pub fn laplacian<T>(src: &Image<T>) -> Result<Image<f32>, ImageError>
where
    T: FloatConversion,
{
    convolve2d(src, &kernels::laplacian_kernel_3x3(), PaddingMode::Same)
}
