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
use crate::conversions::{DeviceToSrgb, sample_grid};
use crate::nd_array::Clut;
use crate::profile::RenderingIntent;
use crate::rgb::Rgb;

/// Dense CMYK to sRGB grid, sampled with 4D multilinear interpolation
pub(crate) struct Lut4d {
    clut: Clut,
}

impl Lut4d {
    pub(crate) const GRID_SIZE: usize = 15;

    pub(crate) fn build(converter: &dyn DeviceToSrgb, intent: RenderingIntent) -> Option<Lut4d> {
        let grid = [Self::GRID_SIZE; 4];
        let (values, converted) = sample_grid(converter, intent, &grid, &[]);
        if converted == 0 {
            log::debug!("4D CMYK grid for {intent:?} discarded, no node converted");
            return None;
        }
        log::debug!("Built 4D CMYK grid for {intent:?}, {converted} nodes converted");
        Some(Lut4d {
            clut: Clut::new(values, grid.to_vec(), 3).ok()?,
        })
    }

    #[inline]
    pub(crate) fn sample(&self, device: [f32; 4]) -> Rgb<f32> {
        let mut out = [0f32; 3];
        self.clut.multilinear(&device, &mut out);
        Rgb::new(out[0], out[1], out[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversions::CmykToSrgb;
    use crate::profile::ColorProfile;
    use crate::test_profiles::*;
    use std::sync::Arc;

    #[test]
    fn test_4d_grid_tracks_analytic() {
        let profile = ColorProfile::new_from_slice(&cmyk_lut8_profile()).unwrap();
        let converter = CmykToSrgb::new(Arc::new(profile), true);
        let intent = RenderingIntent::RelativeColorimetric;
        let lut = Lut4d::build(&converter, intent).unwrap();
        let step = 1. / (Lut4d::GRID_SIZE - 1) as f32;
        for node in [[0usize, 0, 0, 0], [14, 14, 14, 14], [1, 5, 9, 7]] {
            let device = node.map(|v| v as f32 * step);
            let fast = lut.sample(device);
            let exact = converter.convert(&device, intent).unwrap();
            assert!((fast.r - exact.r).abs() < 1e-4, "{node:?}");
            assert!((fast.g - exact.g).abs() < 1e-4, "{node:?}");
            assert!((fast.b - exact.b).abs() < 1e-4, "{node:?}");
        }
        let between = lut.sample([0.5, 0.5, 0.5, 0.5]);
        let exact = converter.convert(&[0.5, 0.5, 0.5, 0.5], intent).unwrap();
        assert!((between.g - exact.g).abs() < 1. / 255., "{between:?} {exact:?}");
    }

    #[test]
    fn test_ink_mix_nodes_match_analytic() {
        let profile = ColorProfile::new_from_slice(&cmyk_ink_mix_profile()).unwrap();
        let converter = CmykToSrgb::new(Arc::new(profile), true);
        let intent = RenderingIntent::Perceptual;
        let lut = Lut4d::build(&converter, intent).unwrap();
        let step = 1. / (Lut4d::GRID_SIZE - 1) as f32;
        for node in [
            [14usize, 0, 0, 0],
            [0, 14, 0, 0],
            [0, 0, 14, 3],
            [3, 11, 6, 2],
            [7, 7, 7, 7],
            [14, 14, 14, 14],
        ] {
            let device = node.map(|v| v as f32 * step);
            let fast = lut.sample(device);
            let exact = converter.convert(&device, intent).unwrap();
            assert!((fast.r - exact.r).abs() <= 1. / 255., "{node:?}");
            assert!((fast.g - exact.g).abs() <= 1. / 255., "{node:?}");
            assert!((fast.b - exact.b).abs() <= 1. / 255., "{node:?}");
        }
        let cyan = lut.sample([1., 0., 0., 0.]);
        let yellow = lut.sample([0., 0., 1., 0.]);
        assert!(cyan.b > yellow.b, "{cyan:?} {yellow:?}");
    }
}
