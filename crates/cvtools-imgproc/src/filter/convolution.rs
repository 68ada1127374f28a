use cvtools_image::{Image, ImageError, ImageSize};

/// Trait for promoting pixel values to floating point before accumulation.
///
/// Integer-valued images are converted element by element so that the
/// convolution accumulates in `f32` regardless of the input type.
pub trait FloatConversion {
    /// Convert the value to f32
    fn to_f32(&self) -> f32;
}

impl FloatConversion for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }
}

impl FloatConversion for f64 {
    fn to_f32(&self) -> f32 {
        *self as f32
    }
}

impl FloatConversion for u8 {
    fn to_f32(&self) -> f32 {
        *self as f32
    }
}

/// A dense 2-D convolution kernel with `f32` weights, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Kernel {
    /// Create a new kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel is empty or if the weight count does
    /// not match `rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, ImageError> {
        if rows == 0 || cols == 0 || data.is_empty() {
            return Err(ImageError::EmptyKernel);
        }
        if data.len() != rows * cols {
            return Err(ImageError::InvalidKernelShape(data.len(), rows * cols));
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a 3×3 kernel from nested rows of weights.
    pub fn from_3x3(weights: [[f32; 3]; 3]) -> Self {
        Self {
            data: weights.into_iter().flatten().collect(),
            rows: 3,
            cols: 3,
        }
    }

    /// Get the number of kernel rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of kernel columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the kernel weights as a flat row-major slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Weight at `(row, col)` after mirroring the kernel along both axes.
    #[inline]
    fn flipped(&self, row: usize, col: usize) -> f32 {
        self.data[(self.rows - 1 - row) * self.cols + (self.cols - 1 - col)]
    }
}

/// Output-size policy for [`convolve2d`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaddingMode {
    /// Zero-pad the image so the output keeps the input height and width.
    #[default]
    Same,
    /// No padding; the output shrinks to the fully-overlapping kernel positions.
    Valid,
}

/// Convolve a grayscale image with a 2-D kernel.
///
/// This is a true convolution: the kernel is mirrored along both axes before
/// sliding, as opposed to a correlation. The accumulation happens in `f32`
/// and the output is always an `f32` image, whatever the input pixel type.
///
/// With [`PaddingMode::Same`] the image is zero-padded by half the kernel
/// size (`kh / 2` rows and `kw / 2` columns on each side) and the output has
/// the input shape. Even-sized kernels are accepted; the padding is then
/// asymmetric and the window reaches one extra cell past the top/left edge.
/// With [`PaddingMode::Valid`] no padding is applied and the output shape is
/// `(H - kh + 1, W - kw + 1)`.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `kernel` - The convolution kernel with shape (kh, kw).
/// * `padding` - The output-size policy.
///
/// # Errors
///
/// With [`PaddingMode::Valid`], a kernel larger than the image in either
/// dimension is rejected.
///
/// # Example
///
/// ```
/// use cvtools_image::{Image, ImageSize};
/// use cvtools_imgproc::filter::{convolve2d, Kernel, PaddingMode};
///
/// let image = Image::<u8>::new(
///     ImageSize {
///         width: 3,
///         height: 3,
///     },
///     vec![0, 1, 2, 3, 4, 5, 6, 7, 8],
/// ).unwrap();
///
/// let identity = Kernel::from_3x3([
///     [0.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
///     [0.0, 0.0, 0.0],
/// ]);
///
/// let out = convolve2d(&image, &identity, PaddingMode::Same).unwrap();
/// assert_eq!(out.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
/// ```
pub fn convolve2d<T>(
    src: &Image<T>,
    kernel: &Kernel,
    padding: PaddingMode,
) -> Result<Image<f32>, ImageError>
where
    T: FloatConversion,
{
    let (rows, cols) = (src.rows(), src.cols());
    let (krows, kcols) = (kernel.rows(), kernel.cols());

    let (pad_r, pad_c, out_rows, out_cols) = match padding {
        PaddingMode::Same => (krows / 2, kcols / 2, rows, cols),
        PaddingMode::Valid => {
            if krows > rows || kcols > cols {
                return Err(ImageError::KernelLargerThanImage(krows, kcols, rows, cols));
            }
            (0, 0, rows - krows + 1, cols - kcols + 1)
        }
    };

    let src_data = src.as_slice();
    let mut out = vec![0.0f32; out_rows * out_cols];

    for r in 0..out_rows {
        for c in 0..out_cols {
            let mut acc = 0.0f32;
            for kr in 0..krows {
                let sr = r as isize + kr as isize - pad_r as isize;
                if sr < 0 || sr >= rows as isize {
                    continue;
                }
                for kc in 0..kcols {
                    let sc = c as isize + kc as isize - pad_c as isize;
                    if sc < 0 || sc >= cols as isize {
                        continue;
                    }
                    let val = src_data[sr as usize * cols + sc as usize].to_f32();
                    acc += val * kernel.flipped(kr, kc);
                }
            }
            out[r * out_cols + c] = acc;
        }
    }

    Image::new(
        ImageSize {
            width: out_cols,
            height: out_rows,
        },
        out,
    )
}
