use crate::adapt::adapt_white_point;
use crate::matrix::Matrix3;
use crate::xy::XY;

/// Linear sRGB from XYZ, relative to the D65 white point
pub const SRGB_FROM_XYZ_D65: Matrix3 = Matrix3([
    3.24071, -1.53726, -0.498_571, //
    -0.969_258, 1.87599, 0.041_555_7, //
    0.055_635_2, -0.203_996, 1.05707, //
]);

/// Linear sRGB from XYZ relative to D50 (i.e. from the profile connection space)
#[must_use]
pub fn linear_srgb_from_xyz_d50() -> Matrix3 {
    SRGB_FROM_XYZ_D65 * adapt_white_point(XY::D50, XY::D65)
}
