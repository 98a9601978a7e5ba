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
mod cmyk;
mod gray;
mod layered;
mod lut3;
mod lut4;
mod pcs;
mod rgb;

use crate::err::CmsError;
use crate::profile::RenderingIntent;
use crate::rgb::Rgb;

pub(crate) use cmyk::CmykToSrgb;
pub(crate) use gray::GrayToSrgb;
pub(crate) use layered::LayeredCmykLut;
pub(crate) use lut3::Lut3d;
pub(crate) use lut4::Lut4d;
pub(crate) use rgb::RgbToSrgb;

/// Analytic conversion of normalized device components to sRGB
pub(crate) trait DeviceToSrgb {
    /// Number of components one device sample has
    fn channels(&self) -> usize;

    fn convert(&self, device: &[f32], intent: RenderingIntent) -> Result<Rgb<f32>, CmsError>;
}

/// Evaluates `converter` on every node of a uniform grid spanning `[0, 1]` per axis.
///
/// Nodes are visited row-major with the first axis slowest, `tail` is appended
/// to every node as constant trailing components. Nodes that fail to convert
/// are stored as black. Returns interleaved RGB values and the number of
/// nodes converted successfully.
pub(crate) fn sample_grid(
    converter: &dyn DeviceToSrgb,
    intent: RenderingIntent,
    grid_points: &[usize],
    tail: &[f32],
) -> (Vec<f32>, usize) {
    let total: usize = grid_points.iter().product();
    let mut values = Vec::with_capacity(total * 3);
    let mut device = vec![0f32; grid_points.len() + tail.len()];
    device[grid_points.len()..].copy_from_slice(tail);
    let mut converted = 0usize;
    for node in 0..total {
        let mut rem = node;
        for (axis, &points) in grid_points.iter().enumerate().rev() {
            let scale = 1. / (points.max(2) - 1) as f32;
            device[axis] = (rem % points) as f32 * scale;
            rem /= points;
        }
        match converter.convert(&device, intent) {
            Ok(rgb) => {
                values.extend_from_slice(&rgb.to_array());
                converted += 1;
            }
            Err(_) => values.extend_from_slice(&[0.; 3]),
        }
    }
    (values, converted)
}
