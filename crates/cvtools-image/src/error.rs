/// An error type for the image and filtering modules.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the kernel data length does not match the kernel size.
    #[error("Kernel data length ({0}) does not match the kernel size ({1})")]
    InvalidKernelShape(usize, usize),

    /// Error when the kernel has no elements.
    #[error("Kernel must have at least one element")]
    EmptyKernel,

    /// Error when the kernel does not fit into the image.
    #[error("Kernel size ({0}, {1}) exceeds the image size ({2}, {3})")]
    KernelLargerThanImage(usize, usize, usize, usize),

    /// Error when the pixel data cannot be casted to the requested type.
    #[error("Failed to cast the pixel data")]
    CastError,
}
