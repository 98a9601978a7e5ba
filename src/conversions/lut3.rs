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
use crate::transform::InterpolationMethod;

/// Dense sRGB grid over a three component device space
pub(crate) struct Lut3d {
    clut: Clut,
    interpolation: InterpolationMethod,
}

impl Lut3d {
    pub(crate) const GRID_SIZE: usize = 17;

    /// Tabulates `converter` for `intent`.
    ///
    /// Returns `None` when no grid node converts.
    pub(crate) fn build(
        converter: &dyn DeviceToSrgb,
        intent: RenderingIntent,
        interpolation: InterpolationMethod,
    ) -> Option<Lut3d> {
        let grid = [Self::GRID_SIZE; 3];
        let (values, converted) = sample_grid(converter, intent, &grid, &[]);
        if converted == 0 {
            log::debug!("3D grid for {intent:?} discarded, no node converted");
            return None;
        }
        let clut = Clut::new(values, grid.to_vec(), 3).ok()?;
        log::debug!(
            "Built {0}x{0}x{0} grid for {intent:?}, {converted} nodes converted",
            Self::GRID_SIZE
        );
        Some(Lut3d {
            clut,
            interpolation,
        })
    }

    #[inline]
    pub(crate) fn sample(&self, device: [f32; 3]) -> Rgb<f32> {
        let mut out = [0f32; 3];
        match self.interpolation {
            InterpolationMethod::Tetrahedral => self.clut.tetrahedral(device, &mut out),
            InterpolationMethod::Trilinear => self.clut.trilinear(device, &mut out),
        }
        Rgb::new(out[0], out[1], out[2])
    }
}
