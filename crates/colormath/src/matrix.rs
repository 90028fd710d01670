use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Pivots smaller than this are treated as zero, i.e. the matrix is singular.
const PIVOT_EPSILON: f64 = 1e-12;

/// Row-major 3x3 matrix
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix3(pub [f64; 3 * 3]);

impl Matrix3 {
    #[must_use]
    pub const fn identity() -> Self {
        Self([
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0, //
        ])
    }

    #[must_use]
    pub const fn from_diagonal(d: [f64; 3]) -> Self {
        Self([
            d[0], 0.0, 0.0, //
            0.0, d[1], 0.0, //
            0.0, 0.0, d[2], //
        ])
    }

    #[must_use]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        let [a, b, c] = rows;
        Self([
            a[0], a[1], a[2], //
            b[0], b[1], b[2], //
            c[0], c[1], c[2], //
        ])
    }

    #[must_use]
    pub const fn rows(&self) -> [[f64; 3]; 3] {
        let m = self.0;
        [[m[0], m[1], m[2]], [m[3], m[4], m[5]], [m[6], m[7], m[8]]]
    }

    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> f64 {
        self.0[row * 3 + col]
    }

    /// Gauss-Jordan inversion with partial pivoting.
    ///
    /// Returns `None` if the matrix is singular (or close enough to it that
    /// the result would be meaningless).
    #[must_use]
    pub fn inverted(&self) -> Option<Self> {
        let mut current = *self;
        let mut inverse = Self::identity();

        for i in 0..3 {
            // Pick the row with the largest coefficient in this column
            let pivot = (i..3).max_by(|&a, &b| {
                current.0[a * 3 + i]
                    .abs()
                    .total_cmp(&current.0[b * 3 + i].abs())
            })?;

            if current.0[pivot * 3 + i].abs() < PIVOT_EPSILON {
                return None;
            } // i is the rank

            if pivot != i {
                current.swap_rows(i, pivot);
                inverse.swap_rows(i, pivot);
            }

            // Divide the row by the diagonal term
            let inv = 1.0 / current.0[i * 3 + i];
            for c in 0..3 {
                current.0[i * 3 + c] *= inv;
                inverse.0[i * 3 + c] *= inv;
            }

            // Eliminate this column from every other row
            for r in (0..3).filter(|&r| r != i) {
                let p = current.0[r * 3 + i];
                if p != 0.0 {
                    for c in 0..3 {
                        current.0[r * 3 + c] -= current.0[i * 3 + c] * p;
                        inverse.0[r * 3 + c] -= inverse.0[i * 3 + c] * p;
                    }
                }
            }
        }

        Some(inverse)
    }

    /// Solve `self * x = b` for `x`.
    #[must_use]
    pub fn solve(&self, b: [f64; 3]) -> Option<[f64; 3]> {
        self.inverted().map(|inv| inv.mult(b))
    }

    #[allow(clippy::suboptimal_flops)]
    #[must_use]
    pub const fn mult(&self, d: [f64; 3]) -> [f64; 3] {
        let m = self.0;
        let cx = d[0] * m[0] + d[1] * m[1] + d[2] * m[2];
        let cy = d[0] * m[3] + d[1] * m[4] + d[2] * m[5];
        let cz = d[0] * m[6] + d[1] * m[7] + d[2] * m[8];
        [cx, cy, cz]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for c in 0..3 {
            self.0.swap(a * 3 + c, b * 3 + c);
        }
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    #[allow(clippy::suboptimal_flops)]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        let mut res = [0.0; 9];
        for r in 0..3 {
            for c in 0..3 {
                res[r * 3 + c] =
                    a[r * 3] * b[c] + a[r * 3 + 1] * b[3 + c] + a[r * 3 + 2] * b[6 + c];
            }
        }
        Self(res)
    }
}

impl Mul<f64> for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0.map(|q| q * rhs))
    }
}

impl Mul<Matrix3> for f64 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        rhs * self
    }
}

impl Add for Matrix3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut res = self.0;
        res.iter_mut().zip(rhs.0).for_each(|(a, b)| *a += b);
        Self(res)
    }
}

/// Largest component of a 3-vector
#[must_use]
pub fn max_component(v: [f64; 3]) -> f64 {
    v[0].max(v[1]).max(v[2])
}
