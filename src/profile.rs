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
use crate::bpc::BlackPointCompensation;
use crate::chad::{adapt_to_d50, matrix_white};
use crate::dat::ColorDateTime;
use crate::err::{CmsError, MalformedSize};
use crate::lut::{LutPipeline, read_lut_tag};
use crate::matrix::{Matrix3f, Xyz};
use crate::reader::{ProfileReader, four_cc, four_cc_to_string};
use crate::tag::{TAG_SIZE, Tag, TagEntry, TagTypeDefinition};
use crate::trc::{Trc, read_trc};

const ACSP_SIGNATURE: u32 = four_cc(b"acsp");
const HEADER_SIZE: usize = 128;
/// Header plus the tag count
const MIN_PROFILE_SIZE: usize = HEADER_SIZE + 4;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
pub enum DataColorSpace {
    #[default]
    Xyz,
    Lab,
    Luv,
    YCbr,
    Yxy,
    Rgb,
    Gray,
    Hsv,
    Hls,
    Cmyk,
    Cmy,
    Color2,
    Color3,
    Color4,
    Color5,
    Color6,
    Color7,
    Color8,
    Color9,
    Color10,
    Color11,
    Color12,
    Color13,
    Color14,
    Color15,
    /// Signature this crate doesn't know
    Other(u32),
}

impl From<u32> for DataColorSpace {
    fn from(value: u32) -> Self {
        const XYZ: u32 = four_cc(b"XYZ ");
        const LAB: u32 = four_cc(b"Lab ");
        const LUV: u32 = four_cc(b"Luv ");
        const YCBR: u32 = four_cc(b"YCbr");
        const YXY: u32 = four_cc(b"Yxy ");
        const RGB: u32 = four_cc(b"RGB ");
        const GRAY: u32 = four_cc(b"GRAY");
        const HSV: u32 = four_cc(b"HSV ");
        const HLS: u32 = four_cc(b"HLS ");
        const CMYK: u32 = four_cc(b"CMYK");
        const CMY: u32 = four_cc(b"CMY ");
        const CLR2: u32 = four_cc(b"2CLR");
        const CLR3: u32 = four_cc(b"3CLR");
        const CLR4: u32 = four_cc(b"4CLR");
        const CLR5: u32 = four_cc(b"5CLR");
        const CLR6: u32 = four_cc(b"6CLR");
        const CLR7: u32 = four_cc(b"7CLR");
        const CLR8: u32 = four_cc(b"8CLR");
        const CLR9: u32 = four_cc(b"9CLR");
        const CLR10: u32 = four_cc(b"ACLR");
        const CLR11: u32 = four_cc(b"BCLR");
        const CLR12: u32 = four_cc(b"CCLR");
        const CLR13: u32 = four_cc(b"DCLR");
        const CLR14: u32 = four_cc(b"ECLR");
        const CLR15: u32 = four_cc(b"FCLR");
        match value {
            XYZ => DataColorSpace::Xyz,
            LAB => DataColorSpace::Lab,
            LUV => DataColorSpace::Luv,
            YCBR => DataColorSpace::YCbr,
            YXY => DataColorSpace::Yxy,
            RGB => DataColorSpace::Rgb,
            GRAY => DataColorSpace::Gray,
            HSV => DataColorSpace::Hsv,
            HLS => DataColorSpace::Hls,
            CMYK => DataColorSpace::Cmyk,
            CMY => DataColorSpace::Cmy,
            CLR2 => DataColorSpace::Color2,
            CLR3 => DataColorSpace::Color3,
            CLR4 => DataColorSpace::Color4,
            CLR5 => DataColorSpace::Color5,
            CLR6 => DataColorSpace::Color6,
            CLR7 => DataColorSpace::Color7,
            CLR8 => DataColorSpace::Color8,
            CLR9 => DataColorSpace::Color9,
            CLR10 => DataColorSpace::Color10,
            CLR11 => DataColorSpace::Color11,
            CLR12 => DataColorSpace::Color12,
            CLR13 => DataColorSpace::Color13,
            CLR14 => DataColorSpace::Color14,
            CLR15 => DataColorSpace::Color15,
            _ => DataColorSpace::Other(value),
        }
    }
}

impl From<DataColorSpace> for u32 {
    fn from(val: DataColorSpace) -> Self {
        match val {
            DataColorSpace::Xyz => four_cc(b"XYZ "),
            DataColorSpace::Lab => four_cc(b"Lab "),
            DataColorSpace::Luv => four_cc(b"Luv "),
            DataColorSpace::YCbr => four_cc(b"YCbr"),
            DataColorSpace::Yxy => four_cc(b"Yxy "),
            DataColorSpace::Rgb => four_cc(b"RGB "),
            DataColorSpace::Gray => four_cc(b"GRAY"),
            DataColorSpace::Hsv => four_cc(b"HSV "),
            DataColorSpace::Hls => four_cc(b"HLS "),
            DataColorSpace::Cmyk => four_cc(b"CMYK"),
            DataColorSpace::Cmy => four_cc(b"CMY "),
            DataColorSpace::Color2 => four_cc(b"2CLR"),
            DataColorSpace::Color3 => four_cc(b"3CLR"),
            DataColorSpace::Color4 => four_cc(b"4CLR"),
            DataColorSpace::Color5 => four_cc(b"5CLR"),
            DataColorSpace::Color6 => four_cc(b"6CLR"),
            DataColorSpace::Color7 => four_cc(b"7CLR"),
            DataColorSpace::Color8 => four_cc(b"8CLR"),
            DataColorSpace::Color9 => four_cc(b"9CLR"),
            DataColorSpace::Color10 => four_cc(b"ACLR"),
            DataColorSpace::Color11 => four_cc(b"BCLR"),
            DataColorSpace::Color12 => four_cc(b"CCLR"),
            DataColorSpace::Color13 => four_cc(b"DCLR"),
            DataColorSpace::Color14 => four_cc(b"ECLR"),
            DataColorSpace::Color15 => four_cc(b"FCLR"),
            DataColorSpace::Other(v) => v,
        }
    }
}

impl DataColorSpace {
    /// Number of components a sample of this space carries, 0 when unknown
    pub const fn channels(&self) -> usize {
        match self {
            DataColorSpace::Gray => 1,
            DataColorSpace::Color2 => 2,
            DataColorSpace::Xyz
            | DataColorSpace::Lab
            | DataColorSpace::Luv
            | DataColorSpace::YCbr
            | DataColorSpace::Yxy
            | DataColorSpace::Rgb
            | DataColorSpace::Hsv
            | DataColorSpace::Hls
            | DataColorSpace::Cmy
            | DataColorSpace::Color3 => 3,
            DataColorSpace::Cmyk | DataColorSpace::Color4 => 4,
            DataColorSpace::Color5 => 5,
            DataColorSpace::Color6 => 6,
            DataColorSpace::Color7 => 7,
            DataColorSpace::Color8 => 8,
            DataColorSpace::Color9 => 9,
            DataColorSpace::Color10 => 10,
            DataColorSpace::Color11 => 11,
            DataColorSpace::Color12 => 12,
            DataColorSpace::Color13 => 13,
            DataColorSpace::Color14 => 14,
            DataColorSpace::Color15 => 15,
            DataColorSpace::Other(_) => 0,
        }
    }
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default)]
pub enum ProfileClass {
    InputDevice,
    #[default]
    DisplayDevice,
    OutputDevice,
    DeviceLink,
    ColorSpace,
    Abstract,
    Named,
}

impl TryFrom<u32> for ProfileClass {
    type Error = CmsError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == four_cc(b"scnr") {
            return Ok(ProfileClass::InputDevice);
        } else if value == four_cc(b"mntr") {
            return Ok(ProfileClass::DisplayDevice);
        } else if value == four_cc(b"prtr") {
            return Ok(ProfileClass::OutputDevice);
        } else if value == four_cc(b"link") {
            return Ok(ProfileClass::DeviceLink);
        } else if value == four_cc(b"spac") {
            return Ok(ProfileClass::ColorSpace);
        } else if value == four_cc(b"abst") {
            return Ok(ProfileClass::Abstract);
        } else if value == four_cc(b"nmcl") {
            return Ok(ProfileClass::Named);
        }
        Err(CmsError::InvalidProfile)
    }
}

#[derive(Clone, Copy, Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum RenderingIntent {
    AbsoluteColorimetric = 3,
    Saturation = 2,
    RelativeColorimetric = 1,
    #[default]
    Perceptual = 0,
}

impl TryFrom<u32> for RenderingIntent {
    type Error = CmsError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RenderingIntent::Perceptual),
            1 => Ok(RenderingIntent::RelativeColorimetric),
            2 => Ok(RenderingIntent::Saturation),
            3 => Ok(RenderingIntent::AbsoluteColorimetric),
            _ => Err(CmsError::InvalidProfile),
        }
    }
}

impl RenderingIntent {
    /// Index of the `A2Bx`/`B2Ax` table holding this intent.
    ///
    /// ICC stores absolute colorimetric in the relative colorimetric table.
    #[inline]
    pub const fn table_index(self) -> usize {
        match self {
            RenderingIntent::Perceptual => 0,
            RenderingIntent::RelativeColorimetric | RenderingIntent::AbsoluteColorimetric => 1,
            RenderingIntent::Saturation => 2,
        }
    }
}

/// Profile format version, `major.minor.bugfix`
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
pub struct ProfileVersion {
    pub major: u8,
    pub minor: u8,
    pub bugfix: u8,
}

impl From<u32> for ProfileVersion {
    fn from(value: u32) -> Self {
        let [major, minor_bugfix, _, _] = value.to_be_bytes();
        ProfileVersion {
            major,
            minor: minor_bugfix >> 4,
            bugfix: minor_bugfix & 0x0f,
        }
    }
}

/// The fixed 128 byte header of a profile
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfileHeader {
    /// Size the profile declares for itself
    pub size: u32,
    pub cmm_type: u32,
    pub version: ProfileVersion,
    pub profile_class: ProfileClass,
    pub color_space: DataColorSpace,
    pub pcs: DataColorSpace,
    pub creation_date_time: ColorDateTime,
    pub rendering_intent: RenderingIntent,
    pub illuminant: Xyz,
    pub creator: u32,
}

impl ProfileHeader {
    pub(crate) fn read(reader: &ProfileReader<'_>) -> Result<ProfileHeader, CmsError> {
        if reader.len() < MIN_PROFILE_SIZE {
            return Err(CmsError::InvalidProfile);
        }
        if reader.read_u32(36)? != ACSP_SIGNATURE {
            return Err(CmsError::InvalidProfile);
        }
        // Only the low 16 bits carry the intent, the rest is reserved
        let rendering_intent = RenderingIntent::try_from(reader.read_u32(64)? & 0xffff)
            .unwrap_or(RenderingIntent::Perceptual);
        Ok(ProfileHeader {
            size: reader.read_u32(0)?,
            cmm_type: reader.read_u32(4)?,
            version: ProfileVersion::from(reader.read_u32(8)?),
            profile_class: ProfileClass::try_from(reader.read_u32(12)?)?,
            color_space: DataColorSpace::from(reader.read_u32(16)?),
            pcs: DataColorSpace::from(reader.read_u32(20)?),
            creation_date_time: ColorDateTime::new_from_slice(reader.read_bytes(24, 12)?)?,
            rendering_intent,
            illuminant: reader.read_xyz_number(68)?,
            creator: reader.read_u32(80)?,
        })
    }
}

/// Limits applied while parsing untrusted profiles
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ParsingOptions {
    /// Maximum accepted profile size in bytes
    pub max_profile_size: usize,
    /// Maximum number of samples in a `curv` element
    pub max_allowed_trc_size: usize,
    /// Maximum number of CLUT samples, grid points times output channels
    pub max_clut_size: usize,
}

impl Default for ParsingOptions {
    fn default() -> Self {
        Self {
            max_profile_size: 16 * 1024 * 1024,
            max_allowed_trc_size: 40000,
            max_clut_size: 10_000_000,
        }
    }
}

/// ICC Profile representation
#[derive(Debug, Clone, Default)]
pub struct ColorProfile {
    pub header: ProfileHeader,
    /// Tag directory as stored, including tags without a structured field
    pub tags: Vec<TagEntry>,
    pub white_point: Option<Xyz>,
    pub black_point: Option<Xyz>,
    pub red_colorant: Option<Xyz>,
    pub green_colorant: Option<Xyz>,
    pub blue_colorant: Option<Xyz>,
    pub red_trc: Option<Trc>,
    pub green_trc: Option<Trc>,
    pub blue_trc: Option<Trc>,
    pub gray_trc: Option<Trc>,
    pub chromatic_adaptation: Option<Matrix3f>,
    pub description: Option<String>,
    /// `A2B0`, `A2B1` and `A2B2`
    pub lut_a_to_b: [Option<LutPipeline>; 3],
    /// `B2A0`, `B2A1` and `B2A2`, kept for inspection only
    pub lut_b_to_a: [Option<LutPipeline>; 3],
}

impl ColorProfile {
    #[inline]
    fn read_xyz_tag(reader: &ProfileReader<'_>) -> Result<Xyz, CmsError> {
        let tag_type = reader.read_u32(0)?;
        if TagTypeDefinition::from(tag_type) != TagTypeDefinition::Xyz {
            return Err(CmsError::InvalidTagType {
                expected: TagTypeDefinition::Xyz.into(),
                found: tag_type,
            });
        }
        reader.read_xyz_number(8)
    }

    #[inline]
    fn read_chad_tag(reader: &ProfileReader<'_>) -> Result<Matrix3f, CmsError> {
        let tag_type = reader.read_u32(0)?;
        if TagTypeDefinition::from(tag_type) != TagTypeDefinition::S15Fixed16Array {
            return Err(CmsError::InvalidTagType {
                expected: TagTypeDefinition::S15Fixed16Array.into(),
                found: tag_type,
            });
        }
        let mut matrix = Matrix3f::default();
        for (i, v) in matrix.v.iter_mut().flatten().enumerate() {
            *v = reader.read_s15_fixed16(8 + i * 4)?;
        }
        Ok(matrix)
    }

    fn read_description_tag(reader: &ProfileReader<'_>) -> Result<String, CmsError> {
        let tag_type = reader.read_u32(0)?;
        match TagTypeDefinition::from(tag_type) {
            TagTypeDefinition::Description => {
                let count = reader.read_u32(8)? as usize;
                reader.read_ascii(12, count)
            }
            TagTypeDefinition::Text => reader.read_ascii(8, reader.len().saturating_sub(8)),
            TagTypeDefinition::MultiLocalizedUnicode => {
                let records = reader.read_u32(8)?;
                if records == 0 {
                    return Ok(String::new());
                }
                // first record only
                let length = reader.read_u32(20)? as usize;
                let offset = reader.read_u32(24)? as usize;
                let bytes = reader.read_bytes(offset, length & !1)?;
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|v| u16::from_be_bytes([v[0], v[1]]))
                    .collect();
                Ok(String::from_utf16_lossy(&units)
                    .trim_end_matches('\0')
                    .to_string())
            }
            _ => Err(CmsError::InvalidTagType {
                expected: TagTypeDefinition::Description.into(),
                found: tag_type,
            }),
        }
    }

    fn read_tag(
        &mut self,
        reader: &ProfileReader<'_>,
        tag: Tag,
        entry: TagEntry,
        options: &ParsingOptions,
    ) -> Result<(), CmsError> {
        let (offset, size) = entry.range().ok_or(CmsError::InvalidProfile)?;
        let tag_reader = reader.sub_reader(offset, size)?;
        let read_trc_tag = || -> Result<Option<Trc>, CmsError> {
            Ok(Some(read_trc(&tag_reader, 0, options.max_allowed_trc_size)?.0))
        };
        match tag {
            Tag::WhitePoint => self.white_point = Some(Self::read_xyz_tag(&tag_reader)?),
            Tag::BlackPoint => self.black_point = Some(Self::read_xyz_tag(&tag_reader)?),
            Tag::RedColorant => self.red_colorant = Some(Self::read_xyz_tag(&tag_reader)?),
            Tag::GreenColorant => self.green_colorant = Some(Self::read_xyz_tag(&tag_reader)?),
            Tag::BlueColorant => self.blue_colorant = Some(Self::read_xyz_tag(&tag_reader)?),
            Tag::RedToneReproduction => self.red_trc = read_trc_tag()?,
            Tag::GreenToneReproduction => self.green_trc = read_trc_tag()?,
            Tag::BlueToneReproduction => self.blue_trc = read_trc_tag()?,
            Tag::GrayToneReproduction => self.gray_trc = read_trc_tag()?,
            Tag::ChromaticAdaptation => {
                self.chromatic_adaptation = Some(Self::read_chad_tag(&tag_reader)?)
            }
            Tag::ProfileDescription => {
                self.description = Some(Self::read_description_tag(&tag_reader)?)
            }
            Tag::MultiLocalizedDescription => {
                if self.description.is_none() {
                    self.description = Some(Self::read_description_tag(&tag_reader)?);
                }
            }
            Tag::DeviceToPcsLutPerceptual => {
                self.lut_a_to_b[0] = Some(read_lut_tag(&tag_reader, options)?)
            }
            Tag::DeviceToPcsLutColorimetric => {
                self.lut_a_to_b[1] = Some(read_lut_tag(&tag_reader, options)?)
            }
            Tag::DeviceToPcsLutSaturation => {
                self.lut_a_to_b[2] = Some(read_lut_tag(&tag_reader, options)?)
            }
            Tag::PcsToDeviceLutPerceptual => {
                self.lut_b_to_a[0] = Some(read_lut_tag(&tag_reader, options)?)
            }
            Tag::PcsToDeviceLutColorimetric => {
                self.lut_b_to_a[1] = Some(read_lut_tag(&tag_reader, options)?)
            }
            Tag::PcsToDeviceLutSaturation => {
                self.lut_b_to_a[2] = Some(read_lut_tag(&tag_reader, options)?)
            }
        }
        Ok(())
    }

    /// Parses a profile with default [ParsingOptions].
    pub fn new_from_slice(slice: &[u8]) -> Result<Self, CmsError> {
        Self::new_from_slice_with_options(slice, &ParsingOptions::default())
    }

    /// Parses a profile.
    ///
    /// Only the header is mandatory: a truncated tag directory keeps the records
    /// read so far, and a known tag that fails to parse leaves its field empty.
    pub fn new_from_slice_with_options(
        slice: &[u8],
        options: &ParsingOptions,
    ) -> Result<Self, CmsError> {
        if slice.len() > options.max_profile_size {
            return Err(CmsError::ProfileIsTooLarge(MalformedSize {
                size: slice.len(),
                expected: options.max_profile_size,
            }));
        }
        let reader = ProfileReader::new(slice);
        let mut profile = ColorProfile {
            header: ProfileHeader::read(&reader)?,
            ..Default::default()
        };

        let tag_count = reader.read_i32(HEADER_SIZE)?.max(0) as usize;
        for i in 0..tag_count {
            let position = MIN_PROFILE_SIZE + i * TAG_SIZE;
            if !reader.can_read(position, TAG_SIZE) {
                log::warn!(
                    "Tag directory is truncated, read {i} of {tag_count} entries"
                );
                break;
            }
            profile.tags.push(TagEntry {
                signature: reader.read_u32(position)?,
                offset: reader.read_i32(position + 4)?,
                size: reader.read_i32(position + 8)?,
            });
        }

        let mut seen = 0u32;
        for entry in profile.tags.clone() {
            let Ok(tag) = Tag::try_from(entry.signature) else {
                continue;
            };
            let bit = 1u32 << (tag as u32);
            if seen & bit != 0 {
                continue;
            }
            seen |= bit;
            if let Err(err) = profile.read_tag(&reader, tag, entry, options) {
                log::warn!(
                    "Skipping tag {}: {err}",
                    four_cc_to_string(entry.signature)
                );
            }
        }

        Ok(profile)
    }

    /// Parses a profile, `None` when the header is unusable.
    pub fn try_parse(slice: &[u8]) -> Option<Self> {
        Self::new_from_slice(slice).ok()
    }

    #[inline]
    pub fn color_space(&self) -> DataColorSpace {
        self.header.color_space
    }

    #[inline]
    pub fn pcs(&self) -> DataColorSpace {
        self.header.pcs
    }

    /// Device to PCS table for `intent`.
    ///
    /// Falls back to perceptual, relative colorimetric and saturation tables
    /// in that order when the intent has no table of its own.
    pub fn a_to_b_for_intent(&self, intent: RenderingIntent) -> Option<&LutPipeline> {
        let preferred = intent.table_index();
        if let Some(lut) = &self.lut_a_to_b[preferred] {
            return Some(lut);
        }
        let fallback = self.lut_a_to_b.iter().flatten().next();
        if fallback.is_some() {
            log::debug!("No A2B{preferred} table for {intent:?}, using a fallback table");
        }
        fallback
    }

    #[inline]
    pub fn has_a_to_b(&self) -> bool {
        self.lut_a_to_b.iter().any(|v| v.is_some())
    }

    /// Colorant columns as stored in `rXYZ`, `gXYZ` and `bXYZ`
    pub fn colorant_matrix(&self) -> Option<Matrix3f> {
        let r = self.red_colorant?;
        let g = self.green_colorant?;
        let b = self.blue_colorant?;
        Some(Matrix3f {
            v: [[r.x, g.x, b.x], [r.y, g.y, b.y], [r.z, g.z, b.z]],
        })
    }

    /// RGB to PCS XYZ matrix.
    ///
    /// Colorants already summing to the D50 white are used as is, others are
    /// adapted by `chad` when present and by Bradford from `wtpt` otherwise.
    pub fn rgb_to_pcs_matrix(&self) -> Option<Matrix3f> {
        const TOLERANCE: f32 = 0.01;
        let colorants = self.colorant_matrix()?;
        let white = matrix_white(colorants);
        if (white.x - Xyz::D50.x).abs() < TOLERANCE
            && (white.y - Xyz::D50.y).abs() < TOLERANCE
            && (white.z - Xyz::D50.z).abs() < TOLERANCE
        {
            return Some(colorants);
        }
        if let Some(chad) = self.chromatic_adaptation {
            return Some(chad.mat_mul(colorants));
        }
        match self.white_point {
            Some(white_point) => adapt_to_d50(colorants, white_point),
            None => Some(colorants),
        }
    }

    /// Matrix/TRC colorimetry is complete
    pub fn has_rgb_colorimetry(&self) -> bool {
        self.colorant_matrix().is_some()
            && self.red_trc.is_some()
            && self.green_trc.is_some()
            && self.blue_trc.is_some()
    }

    /// Black point compensation for this profile, when its black point can be trusted
    pub fn black_point_compensation(&self) -> Option<BlackPointCompensation> {
        self.black_point
            .and_then(BlackPointCompensation::from_black_point)
    }
}
