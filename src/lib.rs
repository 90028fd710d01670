//! Camera color calibration using the two-illuminant model of raw pipelines
//!
//! A [`CalibrationRecord`](calibration::CalibrationRecord) holds color
//! matrices measured under two illuminants. A
//! [`ColorSolver`](solver::ColorSolver) interpolates between them for any
//! white point, recovers the white point implied by a camera neutral, and
//! derives camera to PCS (XYZ D50) and camera to linear sRGB transforms.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod calibration;
pub mod config;
pub mod error;
pub mod solver;

pub use colormath;

#[cfg(test)]
mod tests {
    use colormath::matrix::Matrix3;
    use colormath::xy::XY;

    use crate::calibration::CalibrationRecord;

    pub const COLOR_MATRIX_1: Matrix3 = Matrix3::from_rows([
        [0.7858, -0.2151, -0.091],
        [-0.5955, 1.431, 0.1737],
        [-0.2399, 0.3391, 0.579],
    ]);

    pub const COLOR_MATRIX_2: Matrix3 = Matrix3::from_rows([
        [1.0753, -0.3149, -0.2765],
        [-0.553, 1.6283, -0.1152],
        [-0.0538, 0.192, 0.5914],
    ]);

    /// Camera white balance recorded at capture time
    pub const AS_SHOT_NEUTRAL: [f64; 3] = [0.472_441, 1.0, 0.629_921];

    /// Calibration with illuminant 1 at D65 and illuminant 2 at standard
    /// illuminant A (i.e. not yet standardized)
    pub fn reference_record() -> CalibrationRecord {
        CalibrationRecord::new(COLOR_MATRIX_1, COLOR_MATRIX_2, XY::D65, XY::STANDARD_A)
    }

    #[macro_export]
    macro_rules! compare_float {
        ($expr:expr, $value:expr, $diff:expr) => {
            let a = $expr;
            let b = $value;
            eprintln!("{a} vs {b:.4}");
            assert!((a - b).abs() < $diff);
        };
    }

    #[macro_export]
    macro_rules! compare {
        ($expr:expr, $value:expr) => {
            compare_float!($expr, $value, 1e-4)
        };
    }

    #[macro_export]
    macro_rules! compare_xy {
        ($expr:expr, $value:expr) => {
            let a = $expr;
            let b = $value;
            compare!(a.x, b.x);
            compare!(a.y, b.y);
        };
    }

    #[macro_export]
    macro_rules! compare_rgb {
        ($a:expr, $b:expr) => {{
            eprintln!("Comparing r");
            compare!($a[0], $b[0]);
            eprintln!("Comparing g");
            compare!($a[1], $b[1]);
            eprintln!("Comparing b");
            compare!($a[2], $b[2]);
        }};
    }

    #[macro_export]
    macro_rules! compare_matrix {
        ($a:expr, $b:expr) => {
            zip($a, $b).for_each(|(a, b)| {
                compare!(a, b);
            });
        };
    }
}
