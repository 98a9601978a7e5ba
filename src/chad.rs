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
use crate::matrix::{Matrix3f, Vector3f, Xyz};

const BRADFORD: Matrix3f = Matrix3f {
    v: [
        [0.8951, 0.2664, -0.1614],
        [-0.7502, 1.7135, 0.0367],
        [0.0389, -0.0685, 1.0296],
    ],
};

#[inline]
fn compute_chromatic_adaption(
    source_white_point: Xyz,
    dest_white_point: Xyz,
    chad: Matrix3f,
) -> Option<Matrix3f> {
    let cone_source_rgb = chad.mul_vector(source_white_point.to_vector());
    let cone_dest_rgb = chad.mul_vector(dest_white_point.to_vector());

    if cone_source_rgb.v.iter().any(|&x| x == 0.) {
        return None;
    }

    let cone = Matrix3f {
        v: [
            [cone_dest_rgb.v[0] / cone_source_rgb.v[0], 0., 0.],
            [0., cone_dest_rgb.v[1] / cone_source_rgb.v[1], 0.],
            [0., 0., cone_dest_rgb.v[2] / cone_source_rgb.v[2]],
        ],
    };

    let chad_inv = chad.inverse()?;

    let p0 = cone.mat_mul(chad);
    Some(chad_inv.mat_mul(p0))
}

/// Bradford adaptation matrix taking XYZ under `source` to XYZ under `target`.
pub(crate) fn bradford_adaptation(source: Xyz, target: Xyz) -> Option<Matrix3f> {
    if source.y == 0.0 || target.y == 0.0 {
        return None;
    }
    compute_chromatic_adaption(source, target, BRADFORD)
}

/// Adapts a colorant matrix (columns are primaries) from `source_white_pt` to D50.
pub(crate) fn adapt_to_d50(r: Matrix3f, source_white_pt: Xyz) -> Option<Matrix3f> {
    let bradford = bradford_adaptation(source_white_pt, Xyz::D50)?;
    Some(bradford.mat_mul(r))
}

/// White point produced by `matrix` for a full-intensity input.
#[inline]
pub(crate) fn matrix_white(matrix: Matrix3f) -> Xyz {
    Xyz::from_vector(matrix.mul_vector(Vector3f::from(1f32)))
}
