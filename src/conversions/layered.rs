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
use crate::math::{clamp_unit, lerp};
use crate::nd_array::Clut;
use crate::profile::RenderingIntent;
use crate::rgb::Rgb;
use crate::transform::InterpolationMethod;

/// Black levels each CMY slice is built at
pub(crate) const K_LEVELS: [f32; 8] = [0., 0.05, 0.15, 0.30, 0.50, 0.70, 0.85, 1.0];

/// CMYK to sRGB grid made of CMY slices at fixed K levels.
///
/// Sampling interpolates inside the two slices around K and blends them linearly.
pub(crate) struct LayeredCmykLut {
    slices: Vec<Clut>,
    interpolation: InterpolationMethod,
}

impl LayeredCmykLut {
    pub(crate) const GRID_SIZE: usize = 15;

    pub(crate) fn build(
        converter: &dyn DeviceToSrgb,
        intent: RenderingIntent,
        interpolation: InterpolationMethod,
    ) -> Option<LayeredCmykLut> {
        let grid = [Self::GRID_SIZE; 3];
        let mut slices = Vec::with_capacity(K_LEVELS.len());
        let mut converted = 0usize;
        for k in K_LEVELS {
            let (values, slice_converted) = sample_grid(converter, intent, &grid, &[k]);
            converted += slice_converted;
            slices.push(Clut::new(values, grid.to_vec(), 3).ok()?);
        }
        if converted == 0 {
            log::debug!("Layered CMYK grid for {intent:?} discarded, no node converted");
            return None;
        }
        log::debug!(
            "Built layered CMYK grid for {intent:?}, {converted} nodes converted"
        );
        Some(LayeredCmykLut {
            slices,
            interpolation,
        })
    }

    #[inline]
    fn sample_slice(&self, slice: &Clut, cmy: [f32; 3]) -> [f32; 3] {
        let mut out = [0f32; 3];
        match self.interpolation {
            InterpolationMethod::Tetrahedral => slice.tetrahedral(cmy, &mut out),
            InterpolationMethod::Trilinear => slice.trilinear(cmy, &mut out),
        }
        out
    }

    pub(crate) fn sample(&self, device: [f32; 4]) -> Rgb<f32> {
        let [c, m, y, k] = device;
        let k = clamp_unit(k);
        let segment = K_LEVELS[1..K_LEVELS.len() - 1]
            .iter()
            .take_while(|&&level| level <= k)
            .count();
        let (k0, k1) = (K_LEVELS[segment], K_LEVELS[segment + 1]);
        let t = (k - k0) / (k1 - k0);

        let lower = self.sample_slice(&self.slices[segment], [c, m, y]);
        if t == 0. {
            return Rgb::new(lower[0], lower[1], lower[2]);
        }
        let upper = self.sample_slice(&self.slices[segment + 1], [c, m, y]);
        Rgb::new(
            lerp(lower[0], upper[0], t),
            lerp(lower[1], upper[1], t),
            lerp(lower[2], upper[2], t),
        )
    }
}
