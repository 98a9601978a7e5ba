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
use crate::profile::{ColorProfile, RenderingIntent};
use crate::rgb::Rgb;
use std::sync::Arc;

/// CMYK to sRGB through the profile A2B tables
pub(crate) struct CmykToSrgb {
    profile: Arc<ColorProfile>,
    bpc: Option<BlackPointCompensation>,
}

impl CmykToSrgb {
    pub(crate) fn new(profile: Arc<ColorProfile>, bpc: bool) -> Self {
        let bpc = if bpc {
            profile.black_point_compensation()
        } else {
            None
        };
        Self { profile, bpc }
    }
}

impl DeviceToSrgb for CmykToSrgb {
    fn channels(&self) -> usize {
        4
    }

    fn convert(&self, device: &[f32], intent: RenderingIntent) -> Result<Rgb<f32>, CmsError> {
        if device.len() != 4 {
            return Err(CmsError::ChannelMismatch(MalformedSize {
                size: device.len(),
                expected: 4,
            }));
        }
        let lut = self
            .profile
            .a_to_b_for_intent(intent)
            .ok_or(CmsError::NoLutForRenderingIntent(intent))?;
        let xyz = lut_to_xyz(lut, self.profile.pcs(), device)?;
        Ok(xyz_to_output(xyz, self.bpc.as_ref(), intent))
    }
}
