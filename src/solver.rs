use colormath::adapt::adapt_white_point_with;
use colormath::colortemp::{cct_from_xy, cct_to_xy};
use colormath::matrix::{Matrix3, max_component};
use colormath::rgb::linear_srgb_from_xyz_d50;
use colormath::xy::XY;

use crate::calibration::CalibrationRecord;
use crate::config::SolverConfig;
use crate::error::{ColorError, ColorResult};

/// Result of solving for the white point of a camera neutral
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WhitePointEstimate {
    pub xy: XY,

    /// Number of iterations performed
    pub passes: u32,

    /// `false` if the iteration limit was reached, in which case `xy` is the
    /// average of the last two estimates and should be treated as a best
    /// guess.
    pub converged: bool,
}

/// Derives color transforms for arbitrary white points from a two-illuminant
/// calibration.
///
/// The calibration is standardized on construction, so illuminant 1 is
/// always the cooler one.
#[derive(Clone, Debug)]
pub struct ColorSolver {
    record: CalibrationRecord,
    config: SolverConfig,
}

impl ColorSolver {
    #[must_use]
    pub fn new(record: &CalibrationRecord) -> Self {
        Self::with_config(record, SolverConfig::default())
    }

    #[must_use]
    pub fn with_config(record: &CalibrationRecord, config: SolverConfig) -> Self {
        Self {
            record: record.standardized(),
            config,
        }
    }

    #[must_use]
    pub const fn record(&self) -> &CalibrationRecord {
        &self.record
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Weight of calibration 1 for a given white point.
    ///
    /// 1.0 at or below the temperature of illuminant 1, 0.0 at or above that
    /// of illuminant 2, and interpolated linearly in inverse temperature
    /// (mired) space in between.
    #[must_use]
    pub fn interpolation_weight(&self, white_xy: XY) -> f64 {
        let white_temp = cct_from_xy(white_xy);
        let temp1 = self.record.illuminant_1_temperature();
        let temp2 = self.record.illuminant_2_temperature();

        if white_temp <= temp1 {
            1.0
        } else if white_temp >= temp2 {
            0.0
        } else {
            (1.0 / white_temp - 1.0 / temp2) / (1.0 / temp1 - 1.0 / temp2)
        }
    }

    /// Transform from XYZ (relative to `white_xy`) to camera coordinates
    #[must_use]
    pub fn camera_from_xyz(&self, white_xy: XY) -> Matrix3 {
        let g = self.interpolation_weight(white_xy);

        if g >= 1.0 {
            self.record.calibrated_color_matrix_1()
        } else if g <= 0.0 {
            self.record.calibrated_color_matrix_2()
        } else {
            g * self.record.calibrated_color_matrix_1()
                + (1.0 - g) * self.record.calibrated_color_matrix_2()
        }
    }

    /// The camera coordinates considered "white" under the given white
    /// point, normalized so the largest component is 1.0
    #[must_use]
    pub fn camera_neutral_for(&self, white_xy: XY) -> [f64; 3] {
        let neutral = self.camera_from_xyz(white_xy).mult(white_xy.to_xyz());
        let max = max_component(neutral);
        neutral.map(|q| q / max)
    }

    /// Find the white point whose camera neutral is `camera_neutral`.
    ///
    /// `camera_from_xyz` depends on the white point itself, so this iterates
    /// from D50 until two successive estimates are within `eps` (L1 distance)
    /// of each other. If the pass limit is hit first, the iteration is most
    /// likely stuck oscillating between two values, and their average is
    /// returned instead.
    ///
    /// The components of `camera_neutral` are expected in `[0, 1]`, with the
    /// largest one equal to 1.0.
    pub fn solve_white_point(&self, camera_neutral: [f64; 3]) -> ColorResult<WhitePointEstimate> {
        let SolverConfig { max_passes, eps, .. } = self.config;

        let mut last = XY::D50;

        for pass in 1..=max_passes {
            let neutral_xyz = self
                .camera_from_xyz(last)
                .solve(camera_neutral)
                .ok_or(ColorError::SingularMatrix("camera_from_xyz"))?;

            let next = XY::from_xyz(neutral_xyz);
            let distance = next.l1_distance(last);

            log::trace!(
                "White point pass {pass}: ({:.6}, {:.6}), distance {distance:.3e}",
                next.x,
                next.y
            );

            if distance < eps {
                return Ok(WhitePointEstimate {
                    xy: next,
                    passes: pass,
                    converged: true,
                });
            }

            if pass == max_passes {
                let xy = last.midpoint(next);
                log::warn!(
                    "Failed to converge to an xy white point from camera neutral {camera_neutral:?} \
                     after {max_passes} passes. Returning the average of the last two estimates: \
                     ({:.6}, {:.6})",
                    xy.x,
                    xy.y
                );
                return Ok(WhitePointEstimate {
                    xy,
                    passes: pass,
                    converged: false,
                });
            }

            last = next;
        }

        // only reachable with max_passes == 0
        Ok(WhitePointEstimate {
            xy: last,
            passes: 0,
            converged: false,
        })
    }

    /// The white point chromaticity for a camera neutral.
    ///
    /// See [`ColorSolver::solve_white_point`].
    pub fn xy_from_camera_neutral(&self, camera_neutral: [f64; 3]) -> ColorResult<XY> {
        Ok(self.solve_white_point(camera_neutral)?.xy)
    }

    /// Transform from camera coordinates to the profile connection space
    /// (XYZ relative to D50), for the given white point.
    ///
    /// The transform is scaled so that D50 maps to camera coordinates with a
    /// largest component of 1.0.
    pub fn pcs_from_xy(&self, white_xy: XY) -> ColorResult<Matrix3> {
        // camera <- XYZ(white_xy) <- XYZ(D50)
        let camera_from_pcs = self.camera_from_xyz(white_xy)
            * adapt_white_point_with(XY::D50, white_xy, &self.config.adaptation);

        let d50_camera = camera_from_pcs.mult(XY::D50.to_xyz());
        let max_coeff = max_component(d50_camera);

        if max_coeff.is_nan() || max_coeff <= 0.0 {
            return Err(ColorError::DegenerateCalibration { max_coeff });
        }

        (camera_from_pcs * (1.0 / max_coeff))
            .inverted()
            .ok_or(ColorError::SingularMatrix("camera_from_pcs"))
    }

    pub fn pcs_from_camera_neutral(&self, camera_neutral: [f64; 3]) -> ColorResult<Matrix3> {
        let white_xy = self.xy_from_camera_neutral(camera_neutral)?;
        self.pcs_from_xy(white_xy)
    }

    /// Transform from camera coordinates to linear sRGB, for the given white
    /// point
    pub fn linear_srgb_from_xy(&self, white_xy: XY) -> ColorResult<Matrix3> {
        Ok(linear_srgb_from_xyz_d50() * self.pcs_from_xy(white_xy)?)
    }

    /// Transform from camera coordinates to linear sRGB, white balanced for
    /// the given camera neutral
    pub fn linear_srgb_from_camera(&self, camera_neutral: [f64; 3]) -> ColorResult<Matrix3> {
        Ok(linear_srgb_from_xyz_d50() * self.pcs_from_camera_neutral(camera_neutral)?)
    }

    /// Transform from camera coordinates to linear sRGB, white balanced for a
    /// blackbody illuminant of the given temperature (in Kelvin)
    pub fn linear_srgb_from_temperature(&self, kelvin: f64) -> ColorResult<Matrix3> {
        self.linear_srgb_from_xy(cct_to_xy(kelvin))
    }
}
