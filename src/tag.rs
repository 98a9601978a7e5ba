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
use crate::reader::four_cc;

/// Size of a single record in the tag directory
pub(crate) const TAG_SIZE: usize = 12;

/// Tags this crate turns into structured profile fields
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Tag {
    WhitePoint,
    BlackPoint,
    RedColorant,
    GreenColorant,
    BlueColorant,
    RedToneReproduction,
    GreenToneReproduction,
    BlueToneReproduction,
    GrayToneReproduction,
    ChromaticAdaptation,
    ProfileDescription,
    MultiLocalizedDescription,
    DeviceToPcsLutPerceptual,
    DeviceToPcsLutColorimetric,
    DeviceToPcsLutSaturation,
    PcsToDeviceLutPerceptual,
    PcsToDeviceLutColorimetric,
    PcsToDeviceLutSaturation,
}

impl Tag {
    pub(crate) const ALL: [Tag; 18] = [
        Tag::WhitePoint,
        Tag::BlackPoint,
        Tag::RedColorant,
        Tag::GreenColorant,
        Tag::BlueColorant,
        Tag::RedToneReproduction,
        Tag::GreenToneReproduction,
        Tag::BlueToneReproduction,
        Tag::GrayToneReproduction,
        Tag::ChromaticAdaptation,
        Tag::ProfileDescription,
        Tag::MultiLocalizedDescription,
        Tag::DeviceToPcsLutPerceptual,
        Tag::DeviceToPcsLutColorimetric,
        Tag::DeviceToPcsLutSaturation,
        Tag::PcsToDeviceLutPerceptual,
        Tag::PcsToDeviceLutColorimetric,
        Tag::PcsToDeviceLutSaturation,
    ];
}

impl From<Tag> for u32 {
    fn from(value: Tag) -> Self {
        match value {
            Tag::WhitePoint => four_cc(b"wtpt"),
            Tag::BlackPoint => four_cc(b"bkpt"),
            Tag::RedColorant => four_cc(b"rXYZ"),
            Tag::GreenColorant => four_cc(b"gXYZ"),
            Tag::BlueColorant => four_cc(b"bXYZ"),
            Tag::RedToneReproduction => four_cc(b"rTRC"),
            Tag::GreenToneReproduction => four_cc(b"gTRC"),
            Tag::BlueToneReproduction => four_cc(b"bTRC"),
            Tag::GrayToneReproduction => four_cc(b"kTRC"),
            Tag::ChromaticAdaptation => four_cc(b"chad"),
            Tag::ProfileDescription => four_cc(b"desc"),
            Tag::MultiLocalizedDescription => four_cc(b"mluc"),
            Tag::DeviceToPcsLutPerceptual => four_cc(b"A2B0"),
            Tag::DeviceToPcsLutColorimetric => four_cc(b"A2B1"),
            Tag::DeviceToPcsLutSaturation => four_cc(b"A2B2"),
            Tag::PcsToDeviceLutPerceptual => four_cc(b"B2A0"),
            Tag::PcsToDeviceLutColorimetric => four_cc(b"B2A1"),
            Tag::PcsToDeviceLutSaturation => four_cc(b"B2A2"),
        }
    }
}

impl TryFrom<u32> for Tag {
    type Error = ();

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Tag::ALL
            .into_iter()
            .find(|&tag| u32::from(tag) == value)
            .ok_or(())
    }
}

/// Type signature found in the first four bytes of a tag's data
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum TagTypeDefinition {
    Xyz,
    Curve,
    ParametricCurve,
    S15Fixed16Array,
    Description,
    MultiLocalizedUnicode,
    Text,
    Lut8,
    Lut16,
    LutAtoB,
    LutBtoA,
    Other(u32),
}

impl From<u32> for TagTypeDefinition {
    fn from(value: u32) -> Self {
        const XYZ: u32 = four_cc(b"XYZ ");
        const CURV: u32 = four_cc(b"curv");
        const PARA: u32 = four_cc(b"para");
        const SF32: u32 = four_cc(b"sf32");
        const DESC: u32 = four_cc(b"desc");
        const MLUC: u32 = four_cc(b"mluc");
        const TEXT: u32 = four_cc(b"text");
        const MFT1: u32 = four_cc(b"mft1");
        const MFT2: u32 = four_cc(b"mft2");
        const MAB: u32 = four_cc(b"mAB ");
        const MBA: u32 = four_cc(b"mBA ");
        match value {
            XYZ => TagTypeDefinition::Xyz,
            CURV => TagTypeDefinition::Curve,
            PARA => TagTypeDefinition::ParametricCurve,
            SF32 => TagTypeDefinition::S15Fixed16Array,
            DESC => TagTypeDefinition::Description,
            MLUC => TagTypeDefinition::MultiLocalizedUnicode,
            TEXT => TagTypeDefinition::Text,
            MFT1 => TagTypeDefinition::Lut8,
            MFT2 => TagTypeDefinition::Lut16,
            MAB => TagTypeDefinition::LutAtoB,
            MBA => TagTypeDefinition::LutBtoA,
            _ => TagTypeDefinition::Other(value),
        }
    }
}

impl From<TagTypeDefinition> for u32 {
    fn from(value: TagTypeDefinition) -> Self {
        match value {
            TagTypeDefinition::Xyz => four_cc(b"XYZ "),
            TagTypeDefinition::Curve => four_cc(b"curv"),
            TagTypeDefinition::ParametricCurve => four_cc(b"para"),
            TagTypeDefinition::S15Fixed16Array => four_cc(b"sf32"),
            TagTypeDefinition::Description => four_cc(b"desc"),
            TagTypeDefinition::MultiLocalizedUnicode => four_cc(b"mluc"),
            TagTypeDefinition::Text => four_cc(b"text"),
            TagTypeDefinition::Lut8 => four_cc(b"mft1"),
            TagTypeDefinition::Lut16 => four_cc(b"mft2"),
            TagTypeDefinition::LutAtoB => four_cc(b"mAB "),
            TagTypeDefinition::LutBtoA => four_cc(b"mBA "),
            TagTypeDefinition::Other(v) => v,
        }
    }
}

/// A record of the tag directory, offsets are relative to the profile start
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TagEntry {
    pub signature: u32,
    pub offset: i32,
    pub size: i32,
}

impl TagEntry {
    /// Returns the byte range of the tag when it is non-negative.
    #[inline]
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.offset < 0 || self.size < 0 {
            return None;
        }
        Some((self.offset as usize, self.size as usize))
    }
}
