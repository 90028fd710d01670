use serde::{Deserialize, Serialize};

/// Lower clamp bound for chromaticity components before converting to XYZ
pub const XY_MIN: f64 = 1e-6;

/// Upper clamp bound for chromaticity components (and their sum)
pub const XY_MAX: f64 = 1.0 - 1e-6;

/// CIE 1931 (x, y) chromaticity coordinate
#[derive(Copy, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

impl XY {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// D50, the white point of the profile connection space
    pub const D50: Self = Self::new(0.3457, 0.3585);

    pub const D55: Self = Self::new(0.3324, 0.3474);

    pub const D65: Self = Self::new(0.3127, 0.3290);

    pub const D75: Self = Self::new(0.2990, 0.3149);

    /// CIE standard illuminant A (incandescent, ~2856K)
    pub const STANDARD_A: Self = Self::new(0.4476, 0.4074);

    /// Tristimulus value (with `Y = 1`) for this chromaticity.
    ///
    /// See [`xyz_from_xy`] for the clamping applied to the coordinates.
    #[must_use]
    pub fn to_xyz(&self) -> [f64; 3] {
        xyz_from_xy(*self, XY_MIN, XY_MAX)
    }

    /// Chromaticity of a tristimulus value.
    ///
    /// Falls back to [`XY::D50`] when the components do not sum to a positive
    /// value.
    #[must_use]
    pub fn from_xyz(xyz: [f64; 3]) -> Self {
        let sum = xyz[0] + xyz[1] + xyz[2];
        if sum > 0.0 {
            Self::new(xyz[0] / sum, xyz[1] / sum)
        } else {
            Self::D50
        }
    }

    /// Manhattan distance between two chromaticities
    #[must_use]
    pub fn l1_distance(&self, other: Self) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    #[must_use]
    pub fn midpoint(&self, other: Self) -> Self {
        Self::new(0.5 * (self.x + other.x), 0.5 * (self.y + other.y))
    }
}

/// Convert chromaticity to tristimulus (`Y = 1`).
///
/// Each coordinate is first clamped to `[min, max]`. If the resulting `x + y`
/// exceeds `max`, both are scaled down so their sum equals `max`, which keeps
/// `Z` from going negative. This prevents extreme temperature/tint inputs from
/// producing non-physical values.
#[must_use]
pub fn xyz_from_xy(xy: XY, min: f64, max: f64) -> [f64; 3] {
    let mut x = xy.x.clamp(min, max);
    let mut y = xy.y.clamp(min, max);

    let sum = x + y;
    if sum > max {
        let scale = max / sum;
        x *= scale;
        y *= scale;
    }

    [x / y, 1.0, (1.0 - x - y) / y]
}

impl From<[f64; 2]> for XY {
    fn from(value: [f64; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<XY> for [f64; 2] {
    fn from(value: XY) -> Self {
        [value.x, value.y]
    }
}

#[cfg(test)]
mod tests {
    use crate::xy::{XY, XY_MAX, XY_MIN, xyz_from_xy};
    use crate::{compare, compare_float, compare_xy};

    #[test]
    fn xy_from_f64() {
        let a = XY::from([0.1, 0.2]);
        let b = XY::new(0.1, 0.2);

        compare!(a.x, b.x);
        compare!(a.y, b.y);
    }

    #[test]
    fn f64_from_xy() {
        let a = [0.1, 0.2];
        let b = <[f64; 2]>::from(XY::new(0.1, 0.2));

        compare!(a[0], b[0]);
        compare!(a[1], b[1]);
    }

    #[test]
    fn d65_to_xyz() {
        let [x, y, z] = XY::D65.to_xyz();
        compare!(x, 0.3127 / 0.3290);
        compare!(y, 1.0);
        compare!(z, (1.0 - 0.3127 - 0.3290) / 0.3290);
    }

    #[test]
    fn xyz_round_trip() {
        compare_xy!(XY::from_xyz(XY::D50.to_xyz()), XY::D50);
        compare_xy!(XY::from_xyz(XY::STANDARD_A.to_xyz()), XY::STANDARD_A);
    }

    #[test]
    fn from_xyz_zero_sum_is_d50() {
        assert_eq!(XY::from_xyz([0.0, 0.0, 0.0]), XY::D50);
        assert_eq!(XY::from_xyz([1.0, -2.0, 1.0]), XY::D50);
        assert_eq!(XY::from_xyz([-1.0, -1.0, -1.0]), XY::D50);
    }

    #[test]
    fn to_xyz_clamps_negative() {
        let [x, y, z] = XY::new(-1.0, 0.5).to_xyz();
        compare_float!(x, XY_MIN / 0.5, 1e-12);
        compare!(y, 1.0);
        assert!(z > 0.0);
    }

    #[test]
    fn to_xyz_rescales_sum() {
        // x + y = 1.8, rescaled so the sum is XY_MAX and Z stays non-negative
        let [x, y, z] = xyz_from_xy(XY::new(0.9, 0.9), XY_MIN, XY_MAX);
        compare!(x, 1.0);
        compare!(y, 1.0);
        assert!(z >= 0.0);
        compare_float!(z, 2.0e-6, 1e-9);
    }

    #[test]
    fn l1_distance() {
        let a = XY::new(0.3, 0.3);
        let b = XY::new(0.2, 0.5);
        compare!(a.l1_distance(b), 0.3);
        compare!(b.l1_distance(a), 0.3);
        compare!(a.l1_distance(a), 0.0);
    }

    #[test]
    fn midpoint() {
        let m = XY::new(0.3, 0.3).midpoint(XY::new(0.2, 0.5));
        compare_xy!(m, XY::new(0.25, 0.4));
    }
}
