//! Gaussian convolution kernels.
use crate::error::{Error, Result};

/// Writes a normalised `rows x cols` Gaussian kernel into `dest` in row-major order.
///
/// Both dimensions must be odd so the kernel has a centre tap, `sigma` must be finite
/// and positive, and `dest` must hold at least `rows * cols` weights. Entries past
/// `rows * cols` are left untouched.
pub fn gaussian_kernel(rows: usize, cols: usize, sigma: f32, dest: &mut [f32]) -> Result<()> {
    if rows % 2 == 0 {
        return Err(Error::InvalidArgument(format!("rows must be odd, got {rows}")));
    }
    if cols % 2 == 0 {
        return Err(Error::InvalidArgument(format!("cols must be odd, got {cols}")));
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "sigma must be finite and > 0, got {sigma}"
        )));
    }
    let len = rows * cols;
    if dest.len() < len {
        return Err(Error::InvalidArgument(format!(
            "kernel needs {len} weights but dest holds {}",
            dest.len()
        )));
    }

    let two_sigma2 = 2.0 * sigma * sigma;
    let (half_rows, half_cols) = ((rows / 2) as isize, (cols / 2) as isize);
    let mut sum = 0.0;
    let mut i = 0;
    for y in -half_rows..=half_rows {
        for x in -half_cols..=half_cols {
            let d2 = (y * y + x * x) as f32;
            let k = (-d2 / two_sigma2).exp();
            dest[i] = k;
            sum += k;
            i += 1;
        }
    }
    for k in &mut dest[..len] {
        *k /= sum;
    }
    Ok(())
}

/// Allocating variant of [`gaussian_kernel`].
pub fn gaussian_kernel_vec(rows: usize, cols: usize, sigma: f32) -> Result<Vec<f32>> {
    let mut kernel = vec![0.0; rows * cols];
    gaussian_kernel(rows, cols, sigma, &mut kernel)?;
    Ok(kernel)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn weights_sum_to_one_and_peak_in_the_centre() {
        let k = gaussian_kernel_vec(5, 3, 1.0).unwrap();
        assert_eq!(k.len(), 15);
        assert_abs_diff_eq!(k.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
        let centre = k[2 * 3 + 1];
        assert!(k.iter().all(|&w| w <= centre));
    }

    #[test]
    fn kernel_is_symmetric() {
        let k = gaussian_kernel_vec(5, 5, 1.5).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(k[y * 5 + x], k[(4 - y) * 5 + (4 - x)]);
                assert_eq!(k[y * 5 + x], k[x * 5 + y]);
            }
        }
    }

    #[test]
    fn one_by_three_matches_closed_form() {
        let k = gaussian_kernel_vec(1, 3, 1.0).unwrap();
        let side = (-0.5f32).exp();
        let sum = 1.0 + 2.0 * side;
        assert_abs_diff_eq!(k[0], side / sum, epsilon = 1e-6);
        assert_abs_diff_eq!(k[1], 1.0 / sum, epsilon = 1e-6);
        assert_abs_diff_eq!(k[2], side / sum, epsilon = 1e-6);
    }

    #[test]
    fn single_tap_is_one() {
        assert_eq!(gaussian_kernel_vec(1, 1, 0.1).unwrap(), vec![1.0]);
    }

    #[test]
    fn rejects_bad_arguments() {
        let mut small = [0.0; 8];
        for result in [
            gaussian_kernel(4, 3, 1.0, &mut [0.0; 12]),
            gaussian_kernel(3, 2, 1.0, &mut [0.0; 6]),
            gaussian_kernel(3, 3, 0.0, &mut [0.0; 9]),
            gaussian_kernel(3, 3, f32::NAN, &mut [0.0; 9]),
            gaussian_kernel(3, 3, 1.0, &mut small),
        ] {
            assert!(matches!(result, Err(Error::InvalidArgument(_))));
        }
    }

    #[test]
    fn leaves_trailing_entries_alone() {
        let mut dest = [7.0; 11];
        gaussian_kernel(3, 3, 1.0, &mut dest).unwrap();
        assert_eq!(dest[9..], [7.0, 7.0]);
    }
}
