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
use crate::bpc::BlackPointCompensation;
use crate::conversions::DeviceToSrgb;
use crate::conversions::pcs::{lut_to_xyz, xyz_to_output};
use crate::err::{CmsError, MalformedSize};
use crate::math::lookup_linear;
use crate::matrix::Xyz;
use crate::profile::{ColorProfile, RenderingIntent};
use crate::rgb::Rgb;
use std::sync::Arc;

/// Samples used to tabulate the `kTRC` curve
const GRAY_TRC_SIZE: usize = 4096;

pub(crate) struct GrayToSrgb {
    profile: Arc<ColorProfile>,
    /// `kTRC` tabulated, `None` when the profile has no gray curve
    trc: Option<Vec<f32>>,
    white_point: Xyz,
    bpc: Option<BlackPointCompensation>,
}

impl GrayToSrgb {
    pub(crate) fn new(profile: Arc<ColorProfile>, bpc: bool) -> Self {
        let trc = profile.gray_trc.as_ref().map(|trc| {
            if trc.is_identity() {
                Vec::new()
            } else {
                trc.to_lut(GRAY_TRC_SIZE)
            }
        });
        let white_point = match profile.white_point {
            Some(wp) if wp.is_finite() && wp.y > 0. => wp,
            _ => Xyz::D50,
        };
        let bpc = if bpc {
            profile.black_point_compensation()
        } else {
            None
        };
        Self {
            profile,
            trc,
            white_point,
            bpc,
        }
    }

    fn luminance_to_xyz(&self, y: f32, intent: RenderingIntent) -> Xyz {
        if intent == RenderingIntent::RelativeColorimetric {
            Xyz::D50 * (y / self.white_point.y)
        } else {
            (self.white_point / self.white_point.y) * y
        }
    }
}

impl DeviceToSrgb for GrayToSrgb {
    fn channels(&self) -> usize {
        1
    }

    fn convert(&self, device: &[f32], intent: RenderingIntent) -> Result<Rgb<f32>, CmsError> {
        let &[gray] = device else {
            return Err(CmsError::ChannelMismatch(MalformedSize {
                size: device.len(),
                expected: 1,
            }));
        };
        let xyz = match &self.trc {
            Some(table) => self.luminance_to_xyz(lookup_linear(table, gray), intent),
            None => match self.profile.a_to_b_for_intent(intent) {
                Some(lut) => lut_to_xyz(lut, self.profile.pcs(), device)?,
                None => self.luminance_to_xyz(gray, intent),
            },
        };
        Ok(xyz_to_output(xyz, self.bpc.as_ref(), intent))
    }
}
