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
use crate::math::lookup_linear;
use crate::matrix::Xyz;
use crate::mlaf::mlaf;
use pxfm::f_cbrtf;
use std::sync::LazyLock;

/// Holds CIE LAB values
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq)]
pub struct Lab {
    /// `l`: lightness component (0 to 100)
    pub l: f32,
    /// `a`: green (negative) and red (positive) component.
    pub a: f32,
    /// `b`: blue (negative) and yellow (positive) component
    pub b: f32,
}

const LEGACY_LAB_SCALE: f32 = 65535.0 / 65280.0;

/// Upper bound of the cube-root table domain; XYZ/white ratios above it fall
/// back to the exact root.
const CBRT_TABLE_RANGE: f32 = 2.0;
const CBRT_TABLE_SIZE: usize = 8192;

static CBRT_TABLE: LazyLock<Box<[f32]>> = LazyLock::new(|| {
    (0..=CBRT_TABLE_SIZE)
        .map(|i| f_cbrtf(i as f32 / CBRT_TABLE_SIZE as f32 * CBRT_TABLE_RANGE))
        .collect()
});

#[inline(always)]
const fn f_1(t: f32) -> f32 {
    if t <= 24.0 / 116.0 {
        (108.0 / 841.0) * (t - 16.0 / 116.0)
    } else {
        t * t * t
    }
}

const EPSILON: f32 = 24. / 116. * (24. / 116.) * (24. / 116.);

#[inline(always)]
fn f(t: f32) -> f32 {
    if t <= EPSILON {
        (841. / 108. * t) + 16. / 116.
    } else {
        f_cbrtf(t)
    }
}

#[inline(always)]
fn f_table(t: f32) -> f32 {
    if t <= EPSILON {
        (841. / 108. * t) + 16. / 116.
    } else if t < CBRT_TABLE_RANGE {
        // Table is linearly interpolated, precision is well below 1e-5 in L*.
        lookup_linear(&CBRT_TABLE, t * (1. / CBRT_TABLE_RANGE))
    } else {
        f_cbrtf(t)
    }
}

impl Lab {
    /// Create a new CIELAB color.
    ///
    /// # Arguments
    ///
    /// * `l`: lightness component (0 to 100).
    /// * `a`: green (negative) and red (positive) component.
    /// * `b`: blue (negative) and yellow (positive) component.
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Decodes components normalized to `[0, 1]` using the v4 encoding,
    /// `L* = 100 v`, `a*, b* = 255 v - 128`.
    #[inline]
    pub fn from_normalized(v: [f32; 3]) -> Self {
        Self::new(v[0] * 100.0, mlaf(-128.0, v[1], 255.0), mlaf(-128.0, v[2], 255.0))
    }

    /// Decodes the legacy 16-bit Lab encoding used by `lut16Type`, where
    /// `0xFF00` stands for `L* = 100`.
    #[inline]
    pub fn from_normalized_legacy(v: [f32; 3]) -> Self {
        Self::from_normalized([
            v[0] * LEGACY_LAB_SCALE,
            v[1] * LEGACY_LAB_SCALE,
            v[2] * LEGACY_LAB_SCALE,
        ])
    }

    /// Converts to CIE Lab from CIE XYZ relative to D50
    #[inline]
    pub fn from_xyz(xyz: Xyz) -> Self {
        Self::from_xyz_impl(xyz, f)
    }

    /// Same as [Lab::from_xyz] with the cube root taken from a precomputed table.
    #[inline]
    pub fn from_xyz_fast(xyz: Xyz) -> Self {
        Self::from_xyz_impl(xyz, f_table)
    }

    #[inline(always)]
    fn from_xyz_impl(xyz: Xyz, f: impl Fn(f32) -> f32) -> Self {
        const WP: Xyz = Xyz::D50;
        let fx = f(xyz.x / WP.x);
        let fy = f(xyz.y / WP.y);
        let fz = f(xyz.z / WP.z);

        let l = mlaf(-16.0, 116.0, fy);
        let a = 500.0 * (fx - fy);
        let b = 200.0 * (fy - fz);
        Self::new(l, a, b)
    }

    /// Converts CIE [Lab] into CIE [Xyz] relative to D50
    #[inline]
    pub fn to_xyz(self) -> Xyz {
        const WP: Xyz = Xyz::D50;
        let y = (self.l + 16.0) / 116.0;
        let x = f_1(mlaf(y, 0.002, self.a)) * WP.x;
        let y1 = f_1(y) * WP.y;
        let z = f_1(mlaf(y, -0.005, self.b)) * WP.z;
        Xyz::new(x, y1, z)
    }
}
