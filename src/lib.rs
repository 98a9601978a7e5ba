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
#![allow(clippy::manual_clamp, clippy::excessive_precision)]
#![deny(unreachable_pub)]
mod bpc;
mod chad;
mod conversions;
mod dat;
mod err;
mod gamma;
mod lab;
mod lut;
mod math;
mod matrix;
mod mlaf;
mod nd_array;
mod profile;
mod reader;
mod rgb;
mod tag;
#[cfg(test)]
mod test_profiles;
mod transform;
mod trc;

pub use bpc::BlackPointCompensation;
pub use dat::ColorDateTime;
pub use err::{CmsError, MalformedSize};
pub use gamma::{srgb_compand, srgb_linearize};
pub use lab::Lab;
pub use lut::{LutPipeline, LutType, MabLut, MatrixStage, UniformLut};
pub use matrix::{Matrix3f, Vector3, Vector3f, Xyz};
pub use nd_array::Clut;
pub use profile::{
    ColorProfile, DataColorSpace, ParsingOptions, ProfileClass, ProfileHeader, ProfileVersion,
    RenderingIntent,
};
pub use reader::{
    ProfileReader, ReadCursor, float_to_s15_fixed16, float_to_u8_fixed8, four_cc,
    four_cc_to_string, s15_fixed16_number_to_float, u8_fixed8_number_to_float,
};
pub use rgb::Rgb;
pub use tag::{Tag, TagEntry, TagTypeDefinition};
pub use transform::{CmykAcceleration, InterpolationMethod, SrgbConverter, TransformOptions};
pub use trc::{ParametricCurve, Trc};
