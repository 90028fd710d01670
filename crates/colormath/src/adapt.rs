use serde::{Deserialize, Serialize};

use crate::matrix::Matrix3;
use crate::xy::XY;

/// Linearized Bradford cone response matrix
///
/// See <http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html>
pub const BRADFORD: Matrix3 = Matrix3([
    0.8951, 0.2664, -0.1614, //
    -0.7502, 1.7135, 0.0367, //
    0.0389, -0.0685, 1.0296, //
]);

/// Inverse of [`BRADFORD`]
pub const BRADFORD_INVERSE: Matrix3 = Matrix3([
    0.986_992_9, -0.147_054_3, 0.159_962_7, //
    0.432_305_3, 0.518_360_3, 0.049_291_2, //
    -0.008_528_7, 0.040_042_8, 0.968_486_7, //
]);

#[must_use]
pub const fn bradford_matrix() -> Matrix3 {
    BRADFORD
}

/// Bounds for the per-cone scale factors of a white point adaptation
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptationLimits {
    /// Added to the source cone response before dividing
    pub eps: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for AdaptationLimits {
    fn default() -> Self {
        Self {
            eps: 1e-12,
            min_scale: 0.1,
            max_scale: 10.0,
        }
    }
}

/// Per-cone scale factors taking the `from` white to the `to` white.
///
/// Negative cone responses carry no meaning and are clipped to zero. Each
/// ratio is limited to `[min_scale, max_scale]`.
#[must_use]
pub fn cone_scale(from: XY, to: XY, limits: &AdaptationLimits) -> [f64; 3] {
    let w1 = BRADFORD.mult(from.to_xyz()).map(|q| q.max(0.0));
    let w2 = BRADFORD.mult(to.to_xyz()).map(|q| q.max(0.0));

    [0, 1, 2].map(|k| (w2[k] / (w1[k] + limits.eps)).clamp(limits.min_scale, limits.max_scale))
}

/// Matrix mapping XYZ relative to white point `from` into XYZ relative to
/// white point `to`, using the linearized Bradford method with default limits.
#[must_use]
pub fn adapt_white_point(from: XY, to: XY) -> Matrix3 {
    adapt_white_point_with(from, to, &AdaptationLimits::default())
}

#[must_use]
pub fn adapt_white_point_with(from: XY, to: XY, limits: &AdaptationLimits) -> Matrix3 {
    let scale = cone_scale(from, to, limits);
    BRADFORD_INVERSE * Matrix3::from_diagonal(scale) * BRADFORD
}
