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
use crate::math::{clamp_unit, lookup_linear};
use crate::matrix::{Matrix3f, Xyz};
use crate::rgb::Rgb;
use pxfm::f_powf;
use std::sync::LazyLock;

const COMPAND_TABLE_SIZE: usize = 8192;

/// Bradford-adapted XYZ(D50) to linear sRGB.
pub(crate) const XYZ_D50_TO_SRGB: Matrix3f = Matrix3f {
    v: [
        [3.1338561, -1.6168667, -0.4906146],
        [-0.9787684, 1.9161415, 0.0334540],
        [0.0719453, -0.2289914, 1.4052427],
    ],
};

#[inline]
/// Linear transfer function for sRGB
pub(crate) fn srgb_to_linear(gamma: f32) -> f32 {
    if gamma < 0. {
        0.
    } else if gamma <= 0.04045 {
        gamma * (1. / 12.92)
    } else if gamma < 1.0 {
        f_powf((gamma + 0.055) / 1.055, 2.4)
    } else {
        1.0
    }
}

#[inline]
/// Gamma transfer function for sRGB
pub(crate) fn srgb_from_linear(linear: f32) -> f32 {
    if linear < 0. {
        0.
    } else if linear <= 0.0031308 {
        linear * 12.92
    } else if linear < 1.0 {
        1.055 * f_powf(linear, 1.0 / 2.4) - 0.055
    } else {
        1.0
    }
}

fn make_table(f: impl Fn(f32) -> f32) -> Box<[f32]> {
    (0..=COMPAND_TABLE_SIZE)
        .map(|i| f(i as f32 / COMPAND_TABLE_SIZE as f32))
        .collect()
}

static COMPAND_TABLE: LazyLock<Box<[f32]>> = LazyLock::new(|| make_table(srgb_from_linear));
static LINEARIZE_TABLE: LazyLock<Box<[f32]>> = LazyLock::new(|| make_table(srgb_to_linear));

/// Encodes linear light with the sRGB transfer function, input is clamped to `[0, 1]`.
#[inline]
pub fn srgb_compand(linear: f32) -> f32 {
    lookup_linear(&COMPAND_TABLE, linear)
}

/// Decodes sRGB into linear light, input is clamped to `[0, 1]`.
#[inline]
pub fn srgb_linearize(encoded: f32) -> f32 {
    lookup_linear(&LINEARIZE_TABLE, encoded)
}

/// Converts D50 XYZ into gamma encoded sRGB, components clamped into `[0, 1]`.
#[inline]
pub(crate) fn xyz_d50_to_srgb(xyz: Xyz) -> Rgb<f32> {
    let linear = xyz.transform(XYZ_D50_TO_SRGB);
    Rgb::new(
        srgb_compand(clamp_unit(linear.x)),
        srgb_compand(clamp_unit(linear.y)),
        srgb_compand(clamp_unit(linear.z)),
    )
}
