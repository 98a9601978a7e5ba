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
use crate::err::{CmsError, MalformedSize};
use crate::gamma::xyz_d50_to_srgb;
use crate::lab::Lab;
use crate::lut::{LutPipeline, LutType};
use crate::matrix::Xyz;
use crate::profile::{DataColorSpace, RenderingIntent};
use crate::rgb::Rgb;

/// `u1Fixed15` XYZ, `0x8000` is 1.0
const XYZ_PCS_SCALE: f32 = 65535.0 / 32768.0;

/// Decodes a normalized PCS triplet produced by a `lut_type` table into XYZ(D50).
#[inline]
pub(crate) fn pcs_to_xyz(
    pcs: DataColorSpace,
    lut_type: LutType,
    v: [f32; 3],
) -> Result<Xyz, CmsError> {
    match pcs {
        DataColorSpace::Xyz => Ok(Xyz::new(
            v[0] * XYZ_PCS_SCALE,
            v[1] * XYZ_PCS_SCALE,
            v[2] * XYZ_PCS_SCALE,
        )),
        DataColorSpace::Lab => {
            // lut16Type keeps the legacy Lab encoding in every profile version
            let lab = if lut_type == LutType::Lut16 {
                Lab::from_normalized_legacy(v)
            } else {
                Lab::from_normalized(v)
            };
            Ok(lab.to_xyz())
        }
        _ => Err(CmsError::UnsupportedPcs(pcs.into())),
    }
}

/// Runs `device` through `lut` and decodes the result as `pcs`.
pub(crate) fn lut_to_xyz(
    lut: &LutPipeline,
    pcs: DataColorSpace,
    device: &[f32],
) -> Result<Xyz, CmsError> {
    if lut.output_channels() != 3 {
        return Err(CmsError::ChannelMismatch(MalformedSize {
            size: lut.output_channels(),
            expected: 3,
        }));
    }
    let mut out = [0f32; 3];
    lut.evaluate(device, &mut out)?;
    pcs_to_xyz(pcs, lut.lut_type(), out)
}

/// Applies black point compensation and encodes XYZ(D50) as sRGB.
#[inline]
pub(crate) fn xyz_to_output(
    xyz: Xyz,
    bpc: Option<&BlackPointCompensation>,
    intent: RenderingIntent,
) -> Rgb<f32> {
    let xyz = match bpc {
        Some(bpc) => bpc.apply(xyz, intent),
        None => xyz,
    };
    xyz_d50_to_srgb(xyz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xyz_decoding() {
        let one = 0x8000 as f32 / 65535.;
        let xyz = pcs_to_xyz(DataColorSpace::Xyz, LutType::Lut8, [one; 3]).unwrap();
        assert!((xyz.y - 1.).abs() < 1e-6);
    }

    #[test]
    fn test_lab_decoding() {
        let neutral = 128. / 255.;
        let white =
            pcs_to_xyz(DataColorSpace::Lab, LutType::LutMab, [1.0, neutral, neutral]).unwrap();
        assert_eq!(white, Xyz::D50);
        let legacy = pcs_to_xyz(
            DataColorSpace::Lab,
            LutType::Lut16,
            [65280. / 65535., 0x8000 as f32 / 65535., 0x8000 as f32 / 65535.],
        )
        .unwrap();
        assert_eq!(legacy, Xyz::D50);
        assert!(matches!(
            pcs_to_xyz(DataColorSpace::Rgb, LutType::Lut8, [0.; 3]),
            Err(CmsError::UnsupportedPcs(_))
        ));
    }
}
