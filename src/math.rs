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
use num_traits::Num;

#[inline]
pub(crate) fn m_clamp<T: Num + PartialOrd>(a: T, min: T, max: T) -> T {
    if a > max {
        max
    } else if a >= min {
        a
    } else {
        // a < min or a is NaN
        min
    }
}

#[inline(always)]
pub(crate) fn clamp_unit(x: f32) -> f32 {
    m_clamp(x, 0.0, 1.0)
}

#[inline(always)]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    crate::mlaf::mlaf(a, b - a, t)
}

/// Linearly interpolated lookup of a table sampled uniformly over `[0, 1]`.
#[inline]
pub(crate) fn lookup_linear(table: &[f32], x: f32) -> f32 {
    match table.len() {
        0 => return x,
        1 => return table[0],
        _ => {}
    }
    let last = table.len() - 1;
    let pos = clamp_unit(x) * last as f32;
    let lower = (pos as usize).min(last - 1);
    let frac = pos - lower as f32;
    lerp(table[lower], table[lower + 1], frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_linear_hits_samples() {
        let table = [0.0f32, 0.25, 1.0];
        assert_eq!(lookup_linear(&table, 0.0), 0.0);
        assert_eq!(lookup_linear(&table, 0.5), 0.25);
        assert_eq!(lookup_linear(&table, 1.0), 1.0);
        assert!((lookup_linear(&table, 0.75) - 0.625).abs() < 1e-6);
        assert_eq!(lookup_linear(&table, 2.0), 1.0);
        assert_eq!(lookup_linear(&table, f32::NAN), 0.0);
    }
}
