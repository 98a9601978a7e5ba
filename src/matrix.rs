/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::mlaf::mlaf;
use std::ops::{Div, Mul};

/// Vector math helper
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    pub v: [T; 3],
}

pub type Vector3f = Vector3<f32>;

impl<T> From<T> for Vector3<T>
where
    T: Copy,
{
    fn from(value: T) -> Self {
        Self {
            v: [value, value, value],
        }
    }
}

/// Row-major 3x3 matrix
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix3f {
    pub v: [[f32; 3]; 3],
}

impl Matrix3f {
    pub const IDENTITY: Matrix3f = Matrix3f {
        v: [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]],
    };

    #[inline]
    pub const fn test_equality(&self, other: Matrix3f) -> bool {
        const TOLERANCE: f32 = 0.001f32;
        let mut i = 0;
        while i < 3 {
            let mut j = 0;
            while j < 3 {
                let diff = self.v[i][j] - other.v[i][j];
                if diff > TOLERANCE || diff < -TOLERANCE {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }

    #[inline]
    pub const fn determinant(&self) -> Option<f32> {
        let v = self.v;
        let a0 = v[0][0] * v[1][1] * v[2][2];
        let a1 = v[0][1] * v[1][2] * v[2][0];
        let a2 = v[0][2] * v[1][0] * v[2][1];

        let s0 = v[0][2] * v[1][1] * v[2][0];
        let s1 = v[0][1] * v[1][0] * v[2][2];
        let s2 = v[0][0] * v[1][2] * v[2][1];

        let j = a0 + a1 + a2 - s0 - s1 - s2;
        if j == 0. {
            return None;
        }
        Some(j)
    }

    pub fn inverse(&self) -> Option<Self> {
        let v = self.v;
        let det = 1. / self.determinant()?;
        let mut out = Matrix3f::default();
        out.v[0][0] = v[1][1] * v[2][2] - v[2][1] * v[1][2];
        out.v[1][0] = v[1][2] * v[2][0] - v[1][0] * v[2][2];
        out.v[2][0] = v[1][0] * v[2][1] - v[2][0] * v[1][1];

        out.v[0][1] = v[2][1] * v[0][2] - v[0][1] * v[2][2];
        out.v[1][1] = v[0][0] * v[2][2] - v[2][0] * v[0][2];
        out.v[2][1] = v[2][0] * v[0][1] - v[0][0] * v[2][1];

        out.v[0][2] = v[0][1] * v[1][2] - v[1][1] * v[0][2];
        out.v[1][2] = v[1][0] * v[0][2] - v[0][0] * v[1][2];
        out.v[2][2] = v[0][0] * v[1][1] - v[0][1] * v[1][0];

        for row in out.v.iter_mut() {
            for x in row.iter_mut() {
                *x *= det;
            }
        }
        Some(out)
    }

    #[inline]
    pub fn mul_vector(&self, other: Vector3f) -> Vector3f {
        let m = &self.v;
        let x = other.v[0];
        let y = other.v[1];
        let z = other.v[2];
        Vector3f {
            v: [
                mlaf(mlaf(x * m[0][0], y, m[0][1]), z, m[0][2]),
                mlaf(mlaf(x * m[1][0], y, m[1][1]), z, m[1][2]),
                mlaf(mlaf(x * m[2][0], y, m[2][1]), z, m[2][2]),
            ],
        }
    }

    #[inline]
    pub fn mat_mul(&self, other: Matrix3f) -> Self {
        let mut result = Matrix3f::default();
        for i in 0..3 {
            for j in 0..3 {
                result.v[i][j] = mlaf(
                    mlaf(self.v[i][0] * other.v[0][j], self.v[i][1], other.v[1][j]),
                    self.v[i][2],
                    other.v[2][j],
                );
            }
        }
        result
    }
}

/// Holds CIE XYZ representation
#[repr(C)]
#[derive(Clone, Debug, Copy, Default)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PartialEq<Self> for Xyz {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        const TOLERANCE: f32 = 0.0001f32;
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        let dz = (self.z - other.z).abs();
        dx < TOLERANCE && dy < TOLERANCE && dz < TOLERANCE
    }
}

impl Xyz {
    /// D50 PCS illuminant as encoded in ICC headers.
    pub const D50: Xyz = Xyz {
        x: 0.9642,
        y: 1.0,
        z: 0.8249,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn to_vector(self) -> Vector3f {
        Vector3f {
            v: [self.x, self.y, self.z],
        }
    }

    #[inline]
    pub const fn from_vector(v: Vector3f) -> Self {
        Self {
            x: v.v[0],
            y: v.v[1],
            z: v.v[2],
        }
    }

    #[inline]
    pub fn transform(self, matrix: Matrix3f) -> Xyz {
        Xyz::from_vector(matrix.mul_vector(self.to_vector()))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Mul<f32> for Xyz {
    type Output = Xyz;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div<f32> for Xyz {
    type Output = Xyz;

    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_round_trip() {
        let m = Matrix3f {
            v: [
                [0.4361, 0.3851, 0.1431],
                [0.2225, 0.7169, 0.0606],
                [0.0139, 0.0971, 0.7141],
            ],
        };
        let inv = m.inverse().unwrap();
        assert!(m.mat_mul(inv).test_equality(Matrix3f::IDENTITY));
        assert!(Matrix3f::default().inverse().is_none());
    }

    #[test]
    fn test_mul_vector() {
        let m = Matrix3f {
            v: [[1., 2., 3.], [0., 1., 0.], [0., 0., 2.]],
        };
        let r = m.mul_vector(Vector3f { v: [1., 1., 1.] });
        assert_eq!(r.v, [6., 1., 2.]);
    }
}
