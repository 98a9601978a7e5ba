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
use crate::err::{CmsError, MalformedSize};
use crate::math::clamp_unit;
use crate::mlaf::mlaf;

/// Maximum number of input dimensions a CLUT may have
pub(crate) const MAX_CLUT_INPUTS: usize = 15;

/// Color lookup table over a rectilinear grid.
///
/// Samples are stored row-major: the first input dimension varies slowest
/// and the output channel is innermost.
#[derive(Clone, Debug, PartialEq)]
pub struct Clut {
    values: Vec<f32>,
    grid_points: Vec<usize>,
    strides: Vec<usize>,
    output_channels: usize,
}

/// Splits a normalized coordinate into the lower grid index and the
/// fractional position towards the next one.
///
/// The lower index never exceeds `grid - 2`, so `x = 1.0` lands on the top
/// sample with a fraction of 1.
#[inline(always)]
fn axis(x: f32, grid: usize) -> (usize, f32) {
    if grid < 2 {
        return (0, 0.);
    }
    let last = grid - 1;
    let pos = clamp_unit(x) * last as f32;
    let idx = pos as usize;
    if idx >= last {
        (last - 1, 1.)
    } else {
        (idx, pos - idx as f32)
    }
}

impl Clut {
    pub fn new(
        values: Vec<f32>,
        grid_points: Vec<usize>,
        output_channels: usize,
    ) -> Result<Clut, CmsError> {
        if grid_points.is_empty() || grid_points.len() > MAX_CLUT_INPUTS {
            return Err(CmsError::ChannelMismatch(MalformedSize {
                size: grid_points.len(),
                expected: MAX_CLUT_INPUTS,
            }));
        }
        if output_channels == 0 || grid_points.contains(&0) {
            return Err(CmsError::MalformedClut(MalformedSize {
                size: values.len(),
                expected: 0,
            }));
        }
        let mut strides = vec![0usize; grid_points.len()];
        let mut stride = output_channels;
        for (dst, &grid) in strides.iter_mut().zip(grid_points.iter()).rev() {
            *dst = stride;
            stride = stride
                .checked_mul(grid)
                .ok_or(CmsError::OverflowingError)?;
        }
        if values.len() != stride {
            return Err(CmsError::MalformedClut(MalformedSize {
                size: values.len(),
                expected: stride,
            }));
        }
        Ok(Clut {
            values,
            grid_points,
            strides,
            output_channels,
        })
    }

    #[inline]
    pub fn input_channels(&self) -> usize {
        self.grid_points.len()
    }

    #[inline]
    pub fn output_channels(&self) -> usize {
        self.output_channels
    }

    #[inline]
    pub fn grid_points(&self) -> &[usize] {
        &self.grid_points
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Interpolates `input`, writing `output_channels` values into `output`.
    ///
    /// Three dimensional tables use tetrahedral interpolation, everything else
    /// multilinear.
    pub fn evaluate(&self, input: &[f32], output: &mut [f32]) -> Result<(), CmsError> {
        self.check_channels(input, output)?;
        if let [x, y, z] = *input {
            self.tetrahedral([x, y, z], output);
        } else {
            self.multilinear(input, output);
        }
        Ok(())
    }

    #[inline]
    fn check_channels(&self, input: &[f32], output: &[f32]) -> Result<(), CmsError> {
        if input.len() != self.input_channels() {
            return Err(CmsError::ChannelMismatch(MalformedSize {
                size: input.len(),
                expected: self.input_channels(),
            }));
        }
        if output.len() < self.output_channels {
            return Err(CmsError::ChannelMismatch(MalformedSize {
                size: output.len(),
                expected: self.output_channels,
            }));
        }
        Ok(())
    }

    /// Offset of the next sample along dimension `d`, zero for single point grids.
    #[inline(always)]
    fn step(&self, d: usize) -> usize {
        if self.grid_points[d] > 1 {
            self.strides[d]
        } else {
            0
        }
    }

    /// Tetrahedral interpolation, the table must have three inputs.
    #[inline]
    pub(crate) fn tetrahedral(&self, input: [f32; 3], output: &mut [f32]) {
        let (x0, fx) = axis(input[0], self.grid_points[0]);
        let (y0, fy) = axis(input[1], self.grid_points[1]);
        let (z0, fz) = axis(input[2], self.grid_points[2]);

        let c000 = x0 * self.strides[0] + y0 * self.strides[1] + z0 * self.strides[2];
        let dx = self.step(0);
        let dy = self.step(1);
        let dz = self.step(2);
        let c111 = c000 + dx + dy + dz;

        let (c1, c2, w0, w1, w2, w3) = if fx >= fy {
            if fy >= fz {
                (c000 + dx, c000 + dx + dy, 1. - fx, fx - fy, fy - fz, fz)
            } else if fx >= fz {
                (c000 + dx, c000 + dx + dz, 1. - fx, fx - fz, fz - fy, fy)
            } else {
                (c000 + dz, c000 + dx + dz, 1. - fz, fz - fx, fx - fy, fy)
            }
        } else if fx >= fz {
            (c000 + dy, c000 + dx + dy, 1. - fy, fy - fx, fx - fz, fz)
        } else if fy >= fz {
            (c000 + dy, c000 + dy + dz, 1. - fy, fy - fz, fz - fx, fx)
        } else {
            (c000 + dz, c000 + dy + dz, 1. - fz, fz - fy, fy - fx, fx)
        };

        let v = &self.values;
        for (ch, dst) in output.iter_mut().take(self.output_channels).enumerate() {
            let mut acc = v[c000 + ch] * w0;
            acc = mlaf(acc, v[c1 + ch], w1);
            acc = mlaf(acc, v[c2 + ch], w2);
            *dst = mlaf(acc, v[c111 + ch], w3);
        }
    }

    /// Trilinear interpolation, the table must have three inputs.
    #[inline]
    pub(crate) fn trilinear(&self, input: [f32; 3], output: &mut [f32]) {
        let (x0, fx) = axis(input[0], self.grid_points[0]);
        let (y0, fy) = axis(input[1], self.grid_points[1]);
        let (z0, fz) = axis(input[2], self.grid_points[2]);

        let c000 = x0 * self.strides[0] + y0 * self.strides[1] + z0 * self.strides[2];
        let dx = self.step(0);
        let dy = self.step(1);
        let dz = self.step(2);

        let v = &self.values;
        for (ch, dst) in output.iter_mut().take(self.output_channels).enumerate() {
            let at = |offset: usize| v[c000 + offset + ch];
            let c00 = mlaf(at(0) * (1. - fx), at(dx), fx);
            let c10 = mlaf(at(dy) * (1. - fx), at(dx + dy), fx);
            let c01 = mlaf(at(dz) * (1. - fx), at(dx + dz), fx);
            let c11 = mlaf(at(dy + dz) * (1. - fx), at(dx + dy + dz), fx);
            let c0 = mlaf(c00 * (1. - fy), c10, fy);
            let c1 = mlaf(c01 * (1. - fy), c11, fy);
            *dst = mlaf(c0 * (1. - fz), c1, fz);
        }
    }

    /// Multilinear interpolation over all `2^N` corners of the enclosing cell.
    pub(crate) fn multilinear(&self, input: &[f32], output: &mut [f32]) {
        let n = self.input_channels();
        let mut lower = [0usize; MAX_CLUT_INPUTS];
        let mut frac = [0f32; MAX_CLUT_INPUTS];
        for (d, &x) in input.iter().enumerate().take(n) {
            (lower[d], frac[d]) = axis(x, self.grid_points[d]);
        }

        let output = &mut output[..self.output_channels];
        output.fill(0.);

        'corners: for corner in 0..(1usize << n) {
            let mut weight = 1f32;
            let mut offset = 0usize;
            for d in 0..n {
                if (corner >> d) & 1 == 1 {
                    if self.grid_points[d] < 2 {
                        continue 'corners;
                    }
                    weight *= frac[d];
                    offset += (lower[d] + 1) * self.strides[d];
                } else {
                    weight *= 1. - frac[d];
                    offset += lower[d] * self.strides[d];
                }
            }
            if weight == 0. {
                continue;
            }
            let samples = &self.values[offset..offset + self.output_channels];
            for (dst, &src) in output.iter_mut().zip(samples.iter()) {
                *dst = mlaf(*dst, src, weight);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn make_clut(grid: Vec<usize>, out: usize) -> Clut {
        let count = grid.iter().product::<usize>() * out;
        let values = (0..count).map(|i| ((i * 37) % 101) as f32 / 100.).collect();
        Clut::new(values, grid, out).unwrap()
    }

    fn vertex_value(clut: &Clut, idx: &[usize], ch: usize) -> f32 {
        let offset: usize = idx.iter().zip(clut.strides.iter()).map(|(a, b)| a * b).sum();
        clut.values[offset + ch]
    }

    #[test]
    fn test_rejects_wrong_sizes() {
        assert!(Clut::new(vec![0.; 7], vec![2, 2, 2], 1).is_err());
        assert!(Clut::new(vec![0.; 8], vec![2, 2, 2], 1).is_ok());
        assert!(Clut::new(vec![], vec![0, 2], 1).is_err());
    }

    #[test]
    fn test_corner_exactness_3d() {
        let clut = make_clut(vec![3, 5, 2], 3);
        let mut out = [0f32; 3];
        for x in 0..3 {
            for y in 0..5 {
                for z in 0..2 {
                    let input = [x as f32 / 2., y as f32 / 4., z as f32];
                    clut.evaluate(&input, &mut out).unwrap();
                    for (ch, &v) in out.iter().enumerate() {
                        assert_eq!(v, vertex_value(&clut, &[x, y, z], ch));
                    }
                    clut.multilinear(&input, &mut out);
                    for (ch, &v) in out.iter().enumerate() {
                        assert_eq!(v, vertex_value(&clut, &[x, y, z], ch));
                    }
                }
            }
        }
    }

    #[test]
    fn test_corner_exactness_4d() {
        let clut = make_clut(vec![3, 3, 3, 3], 3);
        let mut out = [0f32; 3];
        for idx in 0..81usize {
            let v = [idx / 27, (idx / 9) % 3, (idx / 3) % 3, idx % 3];
            let input = v.map(|i| i as f32 / 2.);
            clut.evaluate(&input, &mut out).unwrap();
            for (ch, &o) in out.iter().enumerate() {
                assert_eq!(o, vertex_value(&clut, &v, ch));
            }
        }
    }

    #[test]
    fn test_top_boundary() {
        let clut = make_clut(vec![5, 5, 5, 5], 2);
        let mut out = [0f32; 2];
        clut.evaluate(&[1.0, 1.0, 1.0, 1.0], &mut out).unwrap();
        assert_eq!(out[0], vertex_value(&clut, &[4, 4, 4, 4], 0));
        assert_eq!(out[1], vertex_value(&clut, &[4, 4, 4, 4], 1));
        let clut3 = make_clut(vec![5, 5, 5], 2);
        clut3.evaluate(&[1.0, 1.0, 1.0], &mut out).unwrap();
        assert_eq!(out[1], vertex_value(&clut3, &[4, 4, 4], 1));
        clut3.trilinear([1.0, 1.0, 1.0], &mut out);
        assert_eq!(out[1], vertex_value(&clut3, &[4, 4, 4], 1));
        // out of range inputs clamp
        clut3.evaluate(&[3.0, -1.0, f32::NAN], &mut out).unwrap();
        assert_eq!(out[0], vertex_value(&clut3, &[4, 0, 0], 0));
    }

    #[test]
    fn test_single_point_grid() {
        let clut = Clut::new(vec![0.25, 0.5, 0.75, 1.0], vec![1, 2], 2).unwrap();
        let mut out = [0f32; 2];
        clut.evaluate(&[0.7, 1.0], &mut out).unwrap();
        assert_eq!(out, [0.75, 1.0]);
        let flat = Clut::new(vec![0.1, 0.2, 0.3], vec![1, 1, 1], 3).unwrap();
        flat.evaluate(&[0.4, 0.9, 1.0], &mut out[..]).unwrap_err();
        let mut out3 = [0f32; 3];
        flat.evaluate(&[0.4, 0.9, 1.0], &mut out3).unwrap();
        assert!((out3[0] - 0.1).abs() < 1e-7 && (out3[2] - 0.3).abs() < 1e-7);
    }

    #[test]
    fn test_linear_table_is_reproduced() {
        // A table sampling f(x, y, z) = x is reproduced exactly by every method.
        let grid = 5;
        let mut values = Vec::new();
        for x in 0..grid {
            for _ in 0..grid * grid {
                values.push(x as f32 / (grid - 1) as f32);
            }
        }
        let clut = Clut::new(values, vec![grid, grid, grid], 1).unwrap();
        let mut rng = rand::rng();
        let mut a = [0f32; 1];
        let mut b = [0f32; 1];
        let mut c = [0f32; 1];
        for _ in 0..500 {
            let input: [f32; 3] = [
                rng.random_range(0.0..=1.0),
                rng.random_range(0.0..=1.0),
                rng.random_range(0.0..=1.0),
            ];
            clut.tetrahedral(input, &mut a);
            clut.trilinear(input, &mut b);
            clut.multilinear(&input, &mut c);
            assert!((a[0] - input[0]).abs() < 1e-5);
            assert!((b[0] - input[0]).abs() < 1e-5);
            assert!((c[0] - input[0]).abs() < 1e-5);
        }
    }
}
