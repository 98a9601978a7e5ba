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
use crate::lab::Lab;
use crate::math::m_clamp;
use crate::matrix::Xyz;
use crate::profile::RenderingIntent;

/// Lightness remapping that sends the profile black point to `L* = 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlackPointCompensation {
    /// `L*` of the profile black point
    pub black_l: f32,
    /// `100 / (100 - black_l)`
    pub scale: f32,
}

impl BlackPointCompensation {
    /// Builds compensation from a `bkpt` value.
    ///
    /// Black points are only trusted when their lightness lies strictly in `(0, 50)`,
    /// everything else yields `None`.
    pub fn from_black_point(black_point: Xyz) -> Option<Self> {
        if !black_point.is_finite() {
            return None;
        }
        let black_l = Lab::from_xyz(black_point).l;
        if black_l > 0. && black_l < 50. {
            Some(Self {
                black_l,
                scale: 100. / (100. - black_l),
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn apply(&self, xyz: Xyz, intent: RenderingIntent) -> Xyz {
        apply_bpc(xyz, self.black_l, self.scale, intent)
    }
}

/// Remaps lightness of `xyz` so that `black_l` becomes zero.
///
/// Applies to [RenderingIntent::RelativeColorimetric] only.
#[inline]
pub(crate) fn apply_bpc(xyz: Xyz, black_l: f32, scale: f32, intent: RenderingIntent) -> Xyz {
    if intent != RenderingIntent::RelativeColorimetric || black_l <= 0. {
        return xyz;
    }
    let mut lab = Lab::from_xyz_fast(xyz);
    lab.l = m_clamp((lab.l - black_l) * scale, 0., 100.);
    lab.to_xyz()
}
