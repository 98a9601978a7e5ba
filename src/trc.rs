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
use crate::math::{clamp_unit, lookup_linear};
use crate::mlaf::mlaf;
use crate::reader::{ProfileReader, four_cc, uint16_number_to_float};
use crate::tag::TagTypeDefinition;
use pxfm::f_powf;

/// Tone reproduction curve
#[derive(Clone, Debug, PartialEq)]
pub enum Trc {
    /// Pure power function `x^gamma`
    Gamma(f32),
    /// Uniformly spaced samples normalized to `[0, 1]`; empty means identity
    Sampled(Vec<f32>),
    /// ICC parametric curve of types 0 to 4
    Parametric(ParametricCurve),
    /// Parametric curve of a type this crate can't evaluate, treated as identity
    UnsupportedParametric(u16),
}

/// Parametric curve in the unified `g, a, b, c, d, e, f` form
///
/// `y = (a * x + b)^g + e` for `x >= d`, otherwise `y = c * x + f`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParametricCurve {
    function_type: u16,
    g: f32,
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

/// Number of parameters stored for each `para` function type
const PARAMETRIC_COUNT: [usize; 5] = [1, 3, 4, 5, 7];

#[inline]
fn guarded_pow(base: f32, exponent: f32) -> f32 {
    if base <= 0. {
        return 0.;
    }
    f_powf(base, exponent)
}

impl ParametricCurve {
    /// Builds a curve from the parameters as they are stored in a `para` tag.
    #[allow(clippy::many_single_char_names)]
    pub fn new(function_type: u16, params: &[f32]) -> Result<ParametricCurve, CmsError> {
        let expected = *PARAMETRIC_COUNT
            .get(function_type as usize)
            .ok_or(CmsError::MalformedTrcCurve(format!(
                "Unsupported parametric curve type {function_type}"
            )))?;
        if params.len() != expected {
            return Err(CmsError::MalformedCurveLutTable(MalformedSize {
                size: params.len(),
                expected,
            }));
        }
        let g = params[0];
        // convert from the variable number of parameters
        // contained in profiles to a unified representation.
        let curve = match params[1..] {
            [] => ParametricCurve {
                function_type,
                g,
                a: 1.,
                b: 0.,
                c: 1.,
                d: 0.,
                e: 0.,
                f: 0.,
            },
            // types 1 and 2 divide by `a`
            [a, _] | [a, _, _] if a == 0. => return Err(CmsError::ParametricCurveZeroDivision),
            [a, b] => ParametricCurve {
                function_type,
                g,
                a,
                b,
                c: 0.,
                d: -b / a,
                e: 0.,
                f: 0.,
            },
            [a, b, c] => ParametricCurve {
                function_type,
                g,
                a,
                b,
                c: 0.,
                d: -b / a,
                e: c,
                f: c,
            },
            [a, b, c, d] => ParametricCurve {
                function_type,
                g,
                a,
                b,
                c,
                d,
                e: 0.,
                f: 0.,
            },
            [a, b, c, d, e, f] => ParametricCurve {
                function_type,
                g,
                a,
                b,
                c,
                d,
                e,
                f,
            },
            _ => return Err(CmsError::MalformedTrcCurve("Invalid parametric curve".to_string())),
        };
        Ok(curve)
    }

    /// `para` function type, 0 to 4
    #[inline]
    pub const fn function_type(&self) -> u16 {
        self.function_type
    }

    #[inline]
    pub fn eval(&self, x: f32) -> f32 {
        if x < self.d {
            mlaf(self.f, self.c, x)
        } else {
            guarded_pow(mlaf(self.b, self.a, x), self.g) + self.e
        }
    }
}

impl Trc {
    /// Evaluates the curve, input is clamped to `[0, 1]`.
    #[inline]
    pub fn evaluate(&self, x: f32) -> f32 {
        let x = clamp_unit(x);
        match self {
            Trc::Gamma(gamma) => guarded_pow(x, *gamma),
            Trc::Sampled(samples) => lookup_linear(samples, x),
            Trc::Parametric(curve) => curve.eval(x),
            Trc::UnsupportedParametric(_) => x,
        }
    }

    /// Tabulates the curve at `i / size` for `i` in `0..=size`.
    pub fn to_lut(&self, size: usize) -> Vec<f32> {
        let size = size.max(1);
        let scale = 1. / size as f32;
        (0..=size).map(|i| self.evaluate(i as f32 * scale)).collect()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        match self {
            Trc::Gamma(gamma) => *gamma == 1.,
            Trc::Sampled(samples) => samples.is_empty(),
            Trc::Parametric(_) => false,
            Trc::UnsupportedParametric(_) => true,
        }
    }
}

/// Reads a `curv` or `para` element at `offset`.
///
/// Returns the curve together with the number of bytes it occupies.
pub(crate) fn read_trc(
    reader: &ProfileReader<'_>,
    offset: usize,
    max_allowed_trc_size: usize,
) -> Result<(Trc, usize), CmsError> {
    let curve_type = reader.read_u32(offset)?;
    match TagTypeDefinition::from(curve_type) {
        TagTypeDefinition::Curve => {
            let entry_count = reader.read_u32(offset + 8)? as usize;
            if entry_count > max_allowed_trc_size {
                return Err(CmsError::CurveLutIsTooLarge);
            }
            let consumed = 12 + entry_count * 2;
            if entry_count == 0 {
                return Ok((Trc::Gamma(1.), consumed));
            }
            if entry_count == 1 {
                let gamma = reader.read_u8_fixed8(offset + 12)?;
                return Ok((Trc::Gamma(gamma), consumed));
            }
            let bytes = reader.read_bytes(offset + 12, entry_count * 2)?;
            let samples = bytes
                .chunks_exact(2)
                .map(|v| uint16_number_to_float(u16::from_be_bytes([v[0], v[1]])))
                .collect();
            Ok((Trc::Sampled(samples), consumed))
        }
        TagTypeDefinition::ParametricCurve => {
            let function_type = reader.read_u16(offset + 8)?;
            let Some(&count) = PARAMETRIC_COUNT.get(function_type as usize) else {
                return Ok((Trc::UnsupportedParametric(function_type), 12));
            };
            let mut params = [0f32; 7];
            for (i, param) in params.iter_mut().take(count).enumerate() {
                *param = reader.read_s15_fixed16(offset + 12 + i * 4)?;
            }
            let curve = ParametricCurve::new(function_type, &params[..count])?;
            Ok((Trc::Parametric(curve), 12 + count * 4))
        }
        _ => Err(CmsError::InvalidTagType {
            expected: four_cc(b"curv"),
            found: curve_type,
        }),
    }
}
