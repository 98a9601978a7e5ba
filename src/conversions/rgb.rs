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
use crate::lab::Lab;
use crate::math::lookup_linear;
use crate::matrix::{Matrix3f, Vector3f, Xyz};
use crate::profile::{ColorProfile, DataColorSpace, RenderingIntent};
use crate::rgb::Rgb;
use crate::trc::Trc;
use std::sync::Arc;

const RGB_TRC_SIZE: usize = 4096;

enum RgbPath {
    /// Device values are Lab
    Lab,
    /// Tabulated TRCs followed by the D50 adapted colorant matrix
    Matrix {
        curves: [Vec<f32>; 3],
        matrix: Matrix3f,
    },
    /// A2B tables
    Lut,
}

/// RGB, Lab and other three component device spaces to sRGB
pub(crate) struct RgbToSrgb {
    profile: Arc<ColorProfile>,
    path: RgbPath,
    bpc: Option<BlackPointCompensation>,
}

fn tabulate(trc: &Trc) -> Vec<f32> {
    if trc.is_identity() {
        Vec::new()
    } else {
        trc.to_lut(RGB_TRC_SIZE)
    }
}

impl RgbToSrgb {
    pub(crate) fn new(profile: Arc<ColorProfile>, bpc: bool) -> Self {
        let path = if profile.color_space() == DataColorSpace::Lab {
            RgbPath::Lab
        } else {
            match (
                &profile.red_trc,
                &profile.green_trc,
                &profile.blue_trc,
                profile.rgb_to_pcs_matrix(),
            ) {
                (Some(r), Some(g), Some(b), Some(matrix)) => RgbPath::Matrix {
                    curves: [tabulate(r), tabulate(g), tabulate(b)],
                    matrix,
                },
                _ => RgbPath::Lut,
            }
        };
        let bpc = if bpc {
            profile.black_point_compensation()
        } else {
            None
        };
        Self { profile, path, bpc }
    }
}

impl DeviceToSrgb for RgbToSrgb {
    fn channels(&self) -> usize {
        3
    }

    fn convert(&self, device: &[f32], intent: RenderingIntent) -> Result<Rgb<f32>, CmsError> {
        let &[c0, c1, c2] = device else {
            return Err(CmsError::ChannelMismatch(MalformedSize {
                size: device.len(),
                expected: 3,
            }));
        };
        let xyz = match &self.path {
            RgbPath::Lab => Lab::from_normalized([c0, c1, c2]).to_xyz(),
            RgbPath::Matrix { curves, matrix } => {
                let linear = Vector3f {
                    v: [
                        lookup_linear(&curves[0], c0),
                        lookup_linear(&curves[1], c1),
                        lookup_linear(&curves[2], c2),
                    ],
                };
                Xyz::from_vector(matrix.mul_vector(linear))
            }
            RgbPath::Lut => {
                let lut = self
                    .profile
                    .a_to_b_for_intent(intent)
                    .ok_or(CmsError::NoLutForRenderingIntent(intent))?;
                lut_to_xyz(lut, self.profile.pcs(), device)?
            }
        };
        Ok(xyz_to_output(xyz, self.bpc.as_ref(), intent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_profiles::*;

    fn converter(data: &[u8]) -> RgbToSrgb {
        RgbToSrgb::new(Arc::new(ColorProfile::new_from_slice(data).unwrap()), true)
    }

    #[test]
    fn test_srgb_matrix_profile_is_near_identity() {
        let converter = converter(&srgb_matrix_profile());
        assert!(matches!(converter.path, RgbPath::Matrix { .. }));
        let samples = [
            [0., 0., 0.],
            [1., 1., 1.],
            [1., 0., 0.],
            [0., 1., 0.],
            [0., 0., 1.],
            [0.5, 0.5, 0.5],
            [0.2, 0.6, 0.9],
        ];
        for sample in samples {
            let rgb = converter
                .convert(&sample, RenderingIntent::Perceptual)
                .unwrap();
            assert!((rgb.r - sample[0]).abs() < 6e-3, "{sample:?} -> {rgb:?}");
            assert!((rgb.g - sample[1]).abs() < 6e-3, "{sample:?} -> {rgb:?}");
            assert!((rgb.b - sample[2]).abs() < 6e-3, "{sample:?} -> {rgb:?}");
        }
    }

    #[test]
    fn test_lab_device_space() {
        let data = ProfileBuilder::new(b"Lab ", b"Lab ")
            .class(b"abst")
            .build();
        let converter = converter(&data);
        let neutral = 128. / 255.;
        let white = converter
            .convert(&[1., neutral, neutral], RenderingIntent::Perceptual)
            .unwrap();
        assert!((white.r - 1.).abs() < 2e-3 && (white.b - 1.).abs() < 2e-3, "{white:?}");
        let black = converter
            .convert(&[0., neutral, neutral], RenderingIntent::Perceptual)
            .unwrap();
        assert!(black.r.abs() < 2e-3 && black.b.abs() < 2e-3, "{black:?}");
    }

    #[test]
    fn test_lut_path_into_xyz() {
        // Scales device RGB straight into u1Fixed15 D50 XYZ
        let scale = 32768. / 65535.;
        let matrix = [
            Xyz::D50.x * scale,
            0.,
            0.,
            0.,
            Xyz::D50.y * scale,
            0.,
            0.,
            0.,
            Xyz::D50.z * scale,
        ];
        let data = ProfileBuilder::new(b"RGB ", b"XYZ ")
            .tag(b"A2B1", mab_tag(3, 3, &[], &[], None, Some((matrix, [0.; 3]))))
            .build();
        let converter = converter(&data);
        assert!(matches!(converter.path, RgbPath::Lut));
        let white = converter
            .convert(&[1., 1., 1.], RenderingIntent::Perceptual)
            .unwrap();
        assert!((white.r - 1.).abs() < 3e-3, "{white:?}");
        assert!((white.g - 1.).abs() < 3e-3, "{white:?}");
        assert!((white.b - 1.).abs() < 3e-3, "{white:?}");
        let half = converter
            .convert(&[0.5, 0.5, 0.5], RenderingIntent::RelativeColorimetric)
            .unwrap();
        assert!((half.g - 0.7354).abs() < 3e-3, "{half:?}");
    }

    #[test]
    fn test_missing_lut() {
        let data = ProfileBuilder::new(b"RGB ", b"XYZ ").build();
        let converter = converter(&data);
        assert!(matches!(
            converter.convert(&[0.1, 0.2, 0.3], RenderingIntent::Saturation),
            Err(CmsError::NoLutForRenderingIntent(RenderingIntent::Saturation))
        ));
        assert!(matches!(
            converter.convert(&[0.1, 0.2], RenderingIntent::Saturation),
            Err(CmsError::ChannelMismatch(_))
        ));
    }
}
