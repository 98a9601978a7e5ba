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
use crate::RenderingIntent;
use std::error::Error;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct MalformedSize {
    pub size: usize,
    pub expected: usize,
}

#[derive(Debug, Clone, PartialOrd, PartialEq)]
pub enum CmsError {
    OutOfBounds(MalformedSize),
    InvalidProfile,
    ProfileIsTooLarge(MalformedSize),
    InvalidTagType { expected: u32, found: u32 },
    MalformedTrcCurve(String),
    CurveLutIsTooLarge,
    ParametricCurveZeroDivision,
    UnsupportedLutType(u32),
    MalformedClut(MalformedSize),
    MalformedCurveLutTable(MalformedSize),
    ChannelMismatch(MalformedSize),
    NoLutForRenderingIntent(RenderingIntent),
    UnsupportedPcs(u32),
    UnsupportedColorSpace(u32),
    OverflowingError,
}

impl Display for CmsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CmsError::OutOfBounds(size) => f.write_fmt(format_args!(
                "Read out of bounds, buffer is {} bytes, required {}",
                size.size, size.expected
            )),
            CmsError::InvalidProfile => f.write_str("Invalid ICC profile"),
            CmsError::ProfileIsTooLarge(size) => f.write_fmt(format_args!(
                "Profile is too large: {} bytes, allowed {}",
                size.size, size.expected
            )),
            CmsError::InvalidTagType { expected, found } => f.write_fmt(format_args!(
                "Invalid tag type {}, expected {}",
                crate::reader::four_cc_to_string(*found),
                crate::reader::four_cc_to_string(*expected)
            )),
            CmsError::MalformedTrcCurve(str) => f.write_str(str),
            CmsError::CurveLutIsTooLarge => f.write_str("Curve Lut is too large"),
            CmsError::ParametricCurveZeroDivision => {
                f.write_str("Parametric Curve definition causes division by zero")
            }
            CmsError::UnsupportedLutType(t) => f.write_fmt(format_args!(
                "Unsupported LUT type: {}",
                crate::reader::four_cc_to_string(*t)
            )),
            CmsError::MalformedClut(size) => {
                f.write_fmt(format_args!("Invalid CLUT size: {size:?}"))
            }
            CmsError::MalformedCurveLutTable(size) => {
                f.write_fmt(format_args!("Malformed curve LUT size: {size:?}"))
            }
            CmsError::ChannelMismatch(size) => f.write_fmt(format_args!(
                "Channel count mismatch, got {} expected {}",
                size.size, size.expected
            )),
            CmsError::NoLutForRenderingIntent(intent) => f.write_fmt(format_args!(
                "Can't find LUT for rendering intent: {intent:?}"
            )),
            CmsError::UnsupportedPcs(pcs) => f.write_fmt(format_args!(
                "Unsupported profile connection space: {}",
                crate::reader::four_cc_to_string(*pcs)
            )),
            CmsError::UnsupportedColorSpace(cs) => f.write_fmt(format_args!(
                "Unsupported device color space: {}",
                crate::reader::four_cc_to_string(*cs)
            )),
            CmsError::OverflowingError => {
                f.write_str("Overflowing was happen, that is not allowed")
            }
        }
    }
}

impl Error for CmsError {}
