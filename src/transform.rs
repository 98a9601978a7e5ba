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
use crate::conversions::{
    CmykToSrgb, DeviceToSrgb, GrayToSrgb, LayeredCmykLut, Lut3d, Lut4d, RgbToSrgb,
};
use crate::err::{CmsError, MalformedSize};
use crate::profile::{ColorProfile, DataColorSpace, RenderingIntent};
use crate::rgb::Rgb;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
/// Defines the interpolation used when sampling 3D acceleration grids.
///
/// Layered CMYK grids apply it inside each K slice.
pub enum InterpolationMethod {
    /// General Tetrahedron interpolation.
    #[default]
    Tetrahedral,
    /// Trilinear interpolation over all eight cube corners
    Trilinear,
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
/// Acceleration grid layout for CMYK sources
pub enum CmykAcceleration {
    /// CMY grids at fixed K levels, blended linearly along K
    #[default]
    Layered,
    /// Dense 4D grid with multilinear interpolation
    Grid4d,
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
/// Declares additional transformation options
pub struct TransformOptions {
    /// Remaps the profile black point to sRGB black for relative colorimetric intent.
    pub black_point_compensation: bool,
    /// Interpolation method for 3D grids
    pub interpolation: InterpolationMethod,
    pub cmyk_acceleration: CmykAcceleration,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            black_point_compensation: true,
            interpolation: InterpolationMethod::default(),
            cmyk_acceleration: CmykAcceleration::default(),
        }
    }
}

enum Sampler {
    Rgb(Lut3d),
    Layered(LayeredCmykLut),
    Grid4d(Lut4d),
}

impl Sampler {
    #[inline]
    fn sample(&self, device: &[f32]) -> Option<Rgb<f32>> {
        match (self, device) {
            (Sampler::Rgb(lut), &[c0, c1, c2]) => Some(lut.sample([c0, c1, c2])),
            (Sampler::Layered(lut), &[c, m, y, k]) => Some(lut.sample([c, m, y, k])),
            (Sampler::Grid4d(lut), &[c, m, y, k]) => Some(lut.sample([c, m, y, k])),
            _ => None,
        }
    }
}

/// Converts device colors described by an ICC profile into sRGB.
///
/// A converter is immutable once created and may be shared between threads.
/// Acceleration grids are built lazily, once per rendering intent, on the
/// first accelerated conversion for that intent.
pub struct SrgbConverter {
    profile: Arc<ColorProfile>,
    options: TransformOptions,
    converter: Box<dyn DeviceToSrgb + Send + Sync>,
    samplers: [OnceLock<Option<Sampler>>; 4],
}

impl SrgbConverter {
    /// Creates a converter for Gray, three component and CMYK profiles.
    pub fn new(profile: Arc<ColorProfile>, options: TransformOptions) -> Result<Self, CmsError> {
        let bpc = options.black_point_compensation;
        let color_space = profile.color_space();
        let converter: Box<dyn DeviceToSrgb + Send + Sync> = match color_space {
            DataColorSpace::Gray => Box::new(GrayToSrgb::new(profile.clone(), bpc)),
            DataColorSpace::Cmyk => Box::new(CmykToSrgb::new(profile.clone(), bpc)),
            cs if cs.channels() == 3 => Box::new(RgbToSrgb::new(profile.clone(), bpc)),
            cs => return Err(CmsError::UnsupportedColorSpace(cs.into())),
        };
        Ok(Self {
            profile,
            options,
            converter,
            samplers: Default::default(),
        })
    }

    #[inline]
    pub fn profile(&self) -> &ColorProfile {
        &self.profile
    }

    #[inline]
    pub fn options(&self) -> TransformOptions {
        self.options
    }

    /// Components per device sample
    #[inline]
    pub fn channels(&self) -> usize {
        self.converter.channels()
    }

    /// Converts one normalized device sample.
    pub fn to_srgb(&self, device: &[f32], intent: RenderingIntent) -> Result<Rgb<f32>, CmsError> {
        self.converter.convert(device, intent)
    }

    /// Converts one normalized device sample, `None` when it cannot be converted.
    #[inline]
    pub fn try_to_srgb(&self, device: &[f32], intent: RenderingIntent) -> Option<Rgb<f32>> {
        self.to_srgb(device, intent).ok()
    }

    fn sampler(&self, intent: RenderingIntent) -> Option<&Sampler> {
        self.samplers[intent as usize]
            .get_or_init(|| {
                let converter = self.converter.as_ref();
                let interpolation = self.options.interpolation;
                match converter.channels() {
                    3 => Lut3d::build(converter, intent, interpolation).map(Sampler::Rgb),
                    4 => match self.options.cmyk_acceleration {
                        CmykAcceleration::Layered => {
                            LayeredCmykLut::build(converter, intent, interpolation)
                                .map(Sampler::Layered)
                        }
                        CmykAcceleration::Grid4d => {
                            Lut4d::build(converter, intent).map(Sampler::Grid4d)
                        }
                    },
                    _ => None,
                }
            })
            .as_ref()
    }

    /// Converts one sample through the acceleration grid for `intent`.
    ///
    /// Gray sources and intents whose grid could not be built use the
    /// analytic path.
    pub fn to_srgb_accelerated(
        &self,
        device: &[f32],
        intent: RenderingIntent,
    ) -> Result<Rgb<f32>, CmsError> {
        if device.len() != self.channels() {
            return Err(CmsError::ChannelMismatch(MalformedSize {
                size: device.len(),
                expected: self.channels(),
            }));
        }
        match self.sampler(intent).and_then(|s| s.sample(device)) {
            Some(rgb) => Ok(rgb),
            None => self.to_srgb(device, intent),
        }
    }

    /// Converts interleaved device samples in `src` into interleaved sRGB in `dst`.
    ///
    /// Returns `false` when the buffer sizes disagree, in which case nothing is
    /// written, or when any pixel failed. Failed pixels are written as black.
    pub fn convert_row(
        &self,
        src: &[f32],
        dst: &mut [f32],
        intent: RenderingIntent,
        accelerated: bool,
    ) -> bool {
        let channels = self.channels();
        if src.len() % channels != 0 || dst.len() != src.len() / channels * 3 {
            return false;
        }
        let mut all_converted = true;
        for (device, out) in src.chunks_exact(channels).zip(dst.chunks_exact_mut(3)) {
            let result = if accelerated {
                self.to_srgb_accelerated(device, intent)
            } else {
                self.to_srgb(device, intent)
            };
            let rgb = result.unwrap_or_else(|_| {
                all_converted = false;
                Rgb::default()
            });
            out.copy_from_slice(&rgb.to_array());
        }
        all_converted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Xyz;
    use crate::test_profiles::*;

    fn converter(data: &[u8], options: TransformOptions) -> SrgbConverter {
        let profile = ColorProfile::new_from_slice(data).unwrap();
        SrgbConverter::new(Arc::new(profile), options).unwrap()
    }

    #[test]
    fn test_gray_gamma_scenario() {
        let converter = converter(&gray_gamma_profile(2.2), TransformOptions::default());
        assert_eq!(converter.channels(), 1);
        let rgb = converter
            .try_to_srgb(&[0.5], RenderingIntent::RelativeColorimetric)
            .unwrap();
        assert!((rgb.r - 0.5038).abs() < 3e-3, "{rgb:?}");
        assert!((rgb.g - 0.5038).abs() < 3e-3, "{rgb:?}");
        assert!((rgb.b - 0.5038).abs() < 3e-3, "{rgb:?}");
        // No grid for gray, accelerated path falls back
        let accelerated = converter
            .to_srgb_accelerated(&[0.5], RenderingIntent::RelativeColorimetric)
            .unwrap();
        assert_eq!(accelerated, rgb);
    }

    #[test]
    fn test_cmyk_lut8_scenario() {
        let converter = converter(&cmyk_lut8_profile(), TransformOptions::default());
        let white = converter
            .try_to_srgb(&[0., 0., 0., 0.], RenderingIntent::Perceptual)
            .unwrap();
        assert_eq!(white.to_rgb8(), Rgb::new(255, 255, 255));
        let black = converter
            .try_to_srgb(&[0., 0., 0., 1.], RenderingIntent::Perceptual)
            .unwrap();
        assert_eq!(black.to_rgb8(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_layered_scenario() {
        let converter = converter(&cmyk_lut8_profile(), TransformOptions::default());
        let intent = RenderingIntent::Perceptual;
        for device in [
            [0., 0., 0., 0.5],
            [0.5, 0.5, 0.5, 0.5],
            [1., 0., 1., 0.15],
            [0., 0., 0., 0.85],
        ] {
            let exact = converter.to_srgb(&device, intent).unwrap();
            let fast = converter.to_srgb_accelerated(&device, intent).unwrap();
            assert!((exact.r - fast.r).abs() <= 1. / 255., "{device:?}");
            assert!((exact.g - fast.g).abs() <= 1. / 255., "{device:?}");
            assert!((exact.b - fast.b).abs() <= 1. / 255., "{device:?}");
        }
    }

    #[test]
    fn test_layered_scenario_with_ink_mix() {
        let intent = RenderingIntent::Perceptual;
        for interpolation in [InterpolationMethod::Tetrahedral, InterpolationMethod::Trilinear] {
            let options = TransformOptions {
                interpolation,
                ..Default::default()
            };
            let converter = converter(&cmyk_ink_mix_profile(), options);
            for device in [
                [0.5, 0.5, 0.5, 0.5],
                [1., 0., 0., 0.5],
                [0., 1., 0.5, 0.15],
                [3. / 14., 9. / 14., 1., 0.7],
            ] {
                let exact = converter.to_srgb(&device, intent).unwrap();
                let fast = converter.to_srgb_accelerated(&device, intent).unwrap();
                assert!((exact.r - fast.r).abs() <= 1. / 255., "{device:?}");
                assert!((exact.g - fast.g).abs() <= 1. / 255., "{device:?}");
                assert!((exact.b - fast.b).abs() <= 1. / 255., "{device:?}");
            }
        }
    }

    #[test]
    fn test_grid4d_acceleration() {
        let options = TransformOptions {
            cmyk_acceleration: CmykAcceleration::Grid4d,
            ..Default::default()
        };
        let converter = converter(&cmyk_lut8_profile(), options);
        let device = [0.25, 0.5, 0.75, 0.5];
        let exact = converter.to_srgb(&device, RenderingIntent::Saturation).unwrap();
        let fast = converter
            .to_srgb_accelerated(&device, RenderingIntent::Saturation)
            .unwrap();
        assert!((exact.g - fast.g).abs() <= 1. / 255., "{exact:?} {fast:?}");
    }

    #[test]
    fn test_rgb_accelerated() {
        let options = TransformOptions {
            interpolation: InterpolationMethod::Trilinear,
            ..Default::default()
        };
        let converter = converter(&srgb_matrix_profile(), options);
        let device = [0.3, 0.6, 0.9];
        let fast = converter
            .to_srgb_accelerated(&device, RenderingIntent::Perceptual)
            .unwrap();
        assert!((fast.r - 0.3).abs() < 8e-3, "{fast:?}");
        assert!((fast.g - 0.6).abs() < 8e-3, "{fast:?}");
        assert!((fast.b - 0.9).abs() < 8e-3, "{fast:?}");
        assert!(matches!(
            converter.to_srgb_accelerated(&[0.3], RenderingIntent::Perceptual),
            Err(CmsError::ChannelMismatch(_))
        ));
    }

    #[test]
    fn test_black_point_compensation() {
        // Gray profile whose black sits at L* ~ 20
        let black = Xyz::new(0.0287, 0.0298, 0.0246);
        let data = ProfileBuilder::new(b"GRAY", b"XYZ ")
            .tag(b"wtpt", xyz_tag(Xyz::D50))
            .tag(b"bkpt", xyz_tag(black))
            .tag(b"kTRC", curv_identity_tag())
            .build();
        let compensated = converter(&data, TransformOptions::default());
        let plain = converter(
            &data,
            TransformOptions {
                black_point_compensation: false,
                ..Default::default()
            },
        );
        let gray = [0.0298];
        let relative = RenderingIntent::RelativeColorimetric;
        let with_bpc = compensated.to_srgb(&gray, relative).unwrap();
        let without_bpc = plain.to_srgb(&gray, relative).unwrap();
        assert!(with_bpc.g < 0.01, "{with_bpc:?}");
        assert!(without_bpc.g > 0.15, "{without_bpc:?}");
        // Perceptual intent is never compensated
        let perceptual = compensated
            .to_srgb(&gray, RenderingIntent::Perceptual)
            .unwrap();
        assert!((perceptual.g - without_bpc.g).abs() < 1e-3);
    }

    #[test]
    fn test_convert_row() {
        let converter = converter(&cmyk_lut8_profile(), TransformOptions::default());
        let src = [0., 0., 0., 0., 0., 0., 0., 1.];
        let mut dst = [0.5f32; 6];
        for accelerated in [false, true] {
            let intent = RenderingIntent::Perceptual;
            assert!(converter.convert_row(&src, &mut dst, intent, accelerated));
            assert!((dst[1] - 1.).abs() < 2e-3, "{dst:?}");
            assert!(dst[4].abs() < 2e-3, "{dst:?}");
        }
        let mut short = [0f32; 3];
        assert!(!converter.convert_row(&src, &mut short, RenderingIntent::Perceptual, false));
    }

    #[test]
    fn test_convert_row_reports_failures() {
        let data = ProfileBuilder::new(b"CMYK", b"Lab ").class(b"prtr").build();
        let converter = converter(&data, TransformOptions::default());
        let src = [0.1f32; 8];
        let mut dst = [0.5f32; 6];
        assert!(!converter.convert_row(&src, &mut dst, RenderingIntent::Perceptual, true));
        assert_eq!(dst, [0.; 6]);
    }

    #[test]
    fn test_bundled_assets() {
        let cmyk = converter(
            include_bytes!("../assets/synthetic_cmyk.icc"),
            TransformOptions::default(),
        );
        assert_eq!(cmyk.profile().description.as_deref(), Some("Synthetic CMYK press"));
        assert_eq!(cmyk.channels(), 4);
        let intent = RenderingIntent::Perceptual;
        let paper = cmyk.to_srgb(&[0., 0., 0., 0.], intent).unwrap();
        assert!(paper.g > 0.9, "{paper:?}");
        let black = cmyk.to_srgb(&[0., 0., 0., 1.], intent).unwrap();
        assert!(black.g < 0.3, "{black:?}");
        let cyan = cmyk.to_srgb(&[1., 0., 0., 0.], intent).unwrap();
        assert!(cyan.r < cyan.b, "{cyan:?}");
        let device = [0.5, 0.5, 0.5, 0.5];
        let fast = cmyk.to_srgb_accelerated(&device, intent).unwrap();
        let exact = cmyk.to_srgb(&device, intent).unwrap();
        assert!((fast.g - exact.g).abs() <= 1. / 255., "{fast:?} {exact:?}");

        let rgb = converter(
            include_bytes!("../assets/synthetic_srgb.icc"),
            TransformOptions::default(),
        );
        let mid = rgb.to_srgb(&[0.5, 0.25, 0.75], intent).unwrap();
        assert!((mid.r - 0.5).abs() < 6e-3, "{mid:?}");
        assert!((mid.g - 0.25).abs() < 6e-3, "{mid:?}");
        assert!((mid.b - 0.75).abs() < 6e-3, "{mid:?}");
    }

    #[test]
    fn test_unsupported_color_space() {
        let data = ProfileBuilder::new(b"6CLR", b"Lab ").class(b"prtr").build();
        let profile = Arc::new(ColorProfile::new_from_slice(&data).unwrap());
        assert!(matches!(
            SrgbConverter::new(profile, TransformOptions::default()),
            Err(CmsError::UnsupportedColorSpace(_))
        ));
    }
}
