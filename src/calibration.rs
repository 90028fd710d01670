use serde::{Deserialize, Serialize};

use colormath::colortemp::cct_from_xy;
use colormath::matrix::Matrix3;
use colormath::xy::XY;

/// Color calibration of a camera, measured under two illuminants
///
/// The color matrices map XYZ (relative to the white point of their
/// illuminant) to camera coordinates. The per-unit calibration matrices and
/// the analog balance adjust those for the particular camera body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationRecord {
    pub color_matrix_1: Matrix3,
    pub color_matrix_2: Matrix3,

    pub illuminant_1_xy: XY,
    pub illuminant_2_xy: XY,

    pub camera_calib_1: Matrix3,
    pub camera_calib_2: Matrix3,

    /// Per-channel analog gains (non-negative)
    pub analog_balance: [f64; 3],
}

impl Default for CalibrationRecord {
    fn default() -> Self {
        Self {
            color_matrix_1: Matrix3::identity(),
            color_matrix_2: Matrix3::identity(),
            illuminant_1_xy: XY::D65,
            illuminant_2_xy: XY::STANDARD_A,
            camera_calib_1: Matrix3::identity(),
            camera_calib_2: Matrix3::identity(),
            analog_balance: [1.0; 3],
        }
    }
}

impl CalibrationRecord {
    #[must_use]
    pub fn new(
        color_matrix_1: Matrix3,
        color_matrix_2: Matrix3,
        illuminant_1_xy: XY,
        illuminant_2_xy: XY,
    ) -> Self {
        Self {
            color_matrix_1,
            color_matrix_2,
            illuminant_1_xy,
            illuminant_2_xy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn illuminant_1_temperature(&self) -> f64 {
        cct_from_xy(self.illuminant_1_xy)
    }

    #[must_use]
    pub fn illuminant_2_temperature(&self) -> f64 {
        cct_from_xy(self.illuminant_2_xy)
    }

    /// `diag(analog_balance) * camera_calib_1 * color_matrix_1`
    #[must_use]
    pub fn calibrated_color_matrix_1(&self) -> Matrix3 {
        Matrix3::from_diagonal(self.analog_balance) * self.camera_calib_1 * self.color_matrix_1
    }

    /// `diag(analog_balance) * camera_calib_2 * color_matrix_2`
    #[must_use]
    pub fn calibrated_color_matrix_2(&self) -> Matrix3 {
        Matrix3::from_diagonal(self.analog_balance) * self.camera_calib_2 * self.color_matrix_2
    }

    #[must_use]
    pub fn is_standardized(&self) -> bool {
        self.illuminant_1_temperature() <= self.illuminant_2_temperature()
    }

    /// Returns a record where illuminant 1 is the cooler (lower temperature)
    /// of the two.
    ///
    /// If that already holds, this is a plain copy. Otherwise every
    /// illuminant-specific field is swapped. The analog balance is not tied to
    /// an illuminant and is kept as is.
    #[must_use]
    pub fn standardized(&self) -> Self {
        if self.is_standardized() {
            return self.clone();
        }

        log::debug!(
            "Swapping calibration illuminants ({:.0}K, {:.0}K)",
            self.illuminant_1_temperature(),
            self.illuminant_2_temperature()
        );

        Self {
            color_matrix_1: self.color_matrix_2,
            color_matrix_2: self.color_matrix_1,
            illuminant_1_xy: self.illuminant_2_xy,
            illuminant_2_xy: self.illuminant_1_xy,
            camera_calib_1: self.camera_calib_2,
            camera_calib_2: self.camera_calib_1,
            analog_balance: self.analog_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use colormath::matrix::Matrix3;
    use colormath::xy::XY;

    use crate::calibration::CalibrationRecord;
    use crate::tests::{COLOR_MATRIX_1, COLOR_MATRIX_2, reference_record};
    use crate::{compare, compare_float, compare_matrix};

    #[test]
    fn defaults() {
        let rec = CalibrationRecord::default();
        assert_eq!(rec.color_matrix_1, Matrix3::identity());
        assert_eq!(rec.camera_calib_2, Matrix3::identity());
        assert_eq!(rec.illuminant_1_xy, XY::D65);
        assert_eq!(rec.illuminant_2_xy, XY::STANDARD_A);
        assert_eq!(rec.analog_balance, [1.0; 3]);
    }

    #[test]
    fn temperatures() {
        let rec = reference_record();
        compare_float!(rec.illuminant_1_temperature(), 6508.18, 0.01);
        compare_float!(rec.illuminant_2_temperature(), 2855.79, 0.01);
    }

    #[test]
    fn calibrated_matrix_without_adjustment() {
        let rec = reference_record();
        compare_matrix!(rec.calibrated_color_matrix_1().0, COLOR_MATRIX_1.0);
        compare_matrix!(rec.calibrated_color_matrix_2().0, COLOR_MATRIX_2.0);
    }

    #[test]
    fn calibrated_matrix_order() {
        let rec = CalibrationRecord {
            camera_calib_1: Matrix3::from_diagonal([1.0, 1.1, 0.9]),
            analog_balance: [2.0, 1.0, 0.5],
            ..reference_record()
        };
        let expected = Matrix3::from_diagonal([2.0, 1.1, 0.45]) * COLOR_MATRIX_1;
        compare_matrix!(rec.calibrated_color_matrix_1().0, expected.0);

        // analog balance applies to both illuminants
        let expected = Matrix3::from_diagonal([2.0, 1.0, 0.5]) * COLOR_MATRIX_2;
        compare_matrix!(rec.calibrated_color_matrix_2().0, expected.0);
    }

    #[test]
    fn standardized_swaps() {
        let rec = CalibrationRecord {
            camera_calib_1: Matrix3::from_diagonal([1.0, 1.1, 0.9]),
            analog_balance: [0.8, 1.0, 1.2],
            ..reference_record()
        };
        assert!(!rec.is_standardized());

        let swapped = rec.standardized();
        assert!(swapped.is_standardized());
        assert_eq!(swapped.color_matrix_1, rec.color_matrix_2);
        assert_eq!(swapped.color_matrix_2, rec.color_matrix_1);
        assert_eq!(swapped.illuminant_1_xy, XY::STANDARD_A);
        assert_eq!(swapped.illuminant_2_xy, XY::D65);
        assert_eq!(swapped.camera_calib_1, Matrix3::identity());
        assert_eq!(swapped.camera_calib_2, rec.camera_calib_1);
        assert_eq!(swapped.analog_balance, rec.analog_balance);
        assert!(swapped.illuminant_1_temperature() <= swapped.illuminant_2_temperature());

        // the original is left untouched
        assert_eq!(rec.illuminant_1_xy, XY::D65);
        assert_eq!(rec.color_matrix_1, COLOR_MATRIX_1);
    }

    #[test]
    fn standardized_keeps_ordered() {
        let rec = reference_record().standardized();
        assert_eq!(rec.standardized(), rec);
    }

    #[test]
    fn standardized_is_idempotent() {
        let records = [
            reference_record(),
            CalibrationRecord::default(),
            CalibrationRecord::new(COLOR_MATRIX_2, COLOR_MATRIX_1, XY::D50, XY::D75),
            CalibrationRecord::new(COLOR_MATRIX_1, COLOR_MATRIX_2, XY::D55, XY::D55),
        ];

        for rec in records {
            let once = rec.standardized();
            let twice = once.standardized();
            assert_eq!(once, twice);
            assert!(once.illuminant_1_temperature() <= once.illuminant_2_temperature());
        }
    }
}
