use super::Kernel;

/// Create the 3x3 Sobel kernel for gradients in x (vertical edges).
pub fn sobel_kernel_x_3x3() -> Kernel {
    Kernel::from_3x3([
        [-1.0, 0.0, 1.0],
        [-2.0, 0.0, 2.0],
        [-1.0, 0.0, 1.0],
    ])
}

/// Create the 3x3 Sobel kernel for gradients in y (horizontal edges).
pub fn sobel_kernel_y_3x3() -> Kernel {
    Kernel::from_3x3([
        [-1.0, -2.0, -1.0],
        [0.0, 0.0, 0.0],
        [1.0, 2.0, 1.0],
    ])
}

/// Create the 3x3 Laplacian kernel (second-derivative edge response).
pub fn laplacian_kernel_3x3() -> Kernel {
    Kernel::from_3x3([
        [0.0, -1.0, 0.0],
        [-1.0, 4.0, -1.0],
        [0.0, -1.0, 0.0],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sobel_kernels_3x3() {
        let kernel = sobel_kernel_x_3x3();
        assert_eq!(
            kernel.as_slice(),
            &[-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0]
        );

        let kernel = sobel_kernel_y_3x3();
        assert_eq!(
            kernel.as_slice(),
            &[-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0]
        );
    }

    #[test]
    fn test_laplacian_kernel_3x3() {
        let kernel = laplacian_kernel_3x3();
        assert_eq!(
            kernel.as_slice(),
            &[0.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 0.0]
        );
        assert_eq!(kernel.as_slice().iter().sum::<f32>(), 0.0);
    }
}
