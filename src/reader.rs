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
use crate::matrix::Xyz;

/// Packs a four character signature into a big-endian word.
#[inline]
pub const fn four_cc(signature: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*signature)
}

/// Unpacks a signature word back into its four characters.
///
/// Bytes outside printable ASCII are replaced with `?`.
pub fn four_cc_to_string(signature: u32) -> String {
    signature
        .to_be_bytes()
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '?'
            }
        })
        .collect()
}

/// Produces the nearest float to `a` with a maximum error of 1/1024 which
/// happens for large values like 0x40000040.
#[inline]
pub const fn s15_fixed16_number_to_float(a: i32) -> f32 {
    a as f32 / 65536.
}

/// Converts a float to s15Fixed16, saturating at the representable range.
#[inline]
pub fn float_to_s15_fixed16(v: f32) -> i32 {
    if v.is_nan() {
        return 0;
    }
    (v as f64 * 65536.0)
        .round()
        .clamp(i32::MIN as f64, i32::MAX as f64) as i32
}

#[inline]
pub const fn u8_fixed8_number_to_float(a: u16) -> f32 {
    // 0x0000 = 0.
    // 0x0100 = 1.
    // 0xffff = 255  + 255/256
    a as f32 / 256.
}

#[inline]
pub fn float_to_u8_fixed8(v: f32) -> u16 {
    if v > 255.0 + 255.0 / 256f32 {
        0xffffu16
    } else if v < 0.0 || v.is_nan() {
        0u16
    } else {
        (v * 256.0 + 0.5).floor() as u16
    }
}

#[inline]
pub(crate) const fn uint16_number_to_float(a: u16) -> f32 {
    a as f32 * (1. / 65535.)
}

#[inline]
pub(crate) const fn uint8_number_to_float(a: u8) -> f32 {
    a as f32 * (1. / 255.)
}

/// Bounds-checked big-endian access over a profile blob.
///
/// Every read validates `offset + count <= len` and fails with
/// [CmsError::OutOfBounds] instead of returning partial data.
#[derive(Debug, Copy, Clone)]
pub struct ProfileReader<'a> {
    data: &'a [u8],
}

impl<'a> ProfileReader<'a> {
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Non-failing check for `count` bytes at `offset`.
    #[inline]
    pub fn can_read(&self, offset: usize, count: usize) -> bool {
        match offset.checked_add(count) {
            Some(end) => end <= self.data.len(),
            None => false,
        }
    }

    #[inline]
    fn check(&self, offset: usize, count: usize) -> Result<usize, CmsError> {
        let end = offset.checked_add(count).ok_or(CmsError::OverflowingError)?;
        if end > self.data.len() {
            return Err(CmsError::OutOfBounds(MalformedSize {
                size: self.data.len(),
                expected: end,
            }));
        }
        Ok(end)
    }

    #[inline]
    pub fn read_bytes(&self, offset: usize, count: usize) -> Result<&'a [u8], CmsError> {
        let end = self.check(offset, count)?;
        Ok(&self.data[offset..end])
    }

    #[inline]
    fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], CmsError> {
        let mut dst = [0u8; N];
        dst.copy_from_slice(self.read_bytes(offset, N)?);
        Ok(dst)
    }

    #[inline]
    pub fn read_u8(&self, offset: usize) -> Result<u8, CmsError> {
        Ok(self.read_array::<1>(offset)?[0])
    }

    #[inline]
    pub fn read_u16(&self, offset: usize) -> Result<u16, CmsError> {
        Ok(u16::from_be_bytes(self.read_array(offset)?))
    }

    #[inline]
    pub fn read_i16(&self, offset: usize) -> Result<i16, CmsError> {
        Ok(i16::from_be_bytes(self.read_array(offset)?))
    }

    #[inline]
    pub fn read_u32(&self, offset: usize) -> Result<u32, CmsError> {
        Ok(u32::from_be_bytes(self.read_array(offset)?))
    }

    #[inline]
    pub fn read_i32(&self, offset: usize) -> Result<i32, CmsError> {
        Ok(i32::from_be_bytes(self.read_array(offset)?))
    }

    #[inline]
    pub fn read_u64(&self, offset: usize) -> Result<u64, CmsError> {
        Ok(u64::from_be_bytes(self.read_array(offset)?))
    }

    /// Reads `count` bytes as text, stopping at the first NUL.
    pub fn read_ascii(&self, offset: usize, count: usize) -> Result<String, CmsError> {
        let bytes = self.read_bytes(offset, count)?;
        let end = bytes.iter().position(|&x| x == 0).unwrap_or(bytes.len());
        Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
    }

    #[inline]
    pub fn read_s15_fixed16(&self, offset: usize) -> Result<f32, CmsError> {
        Ok(s15_fixed16_number_to_float(self.read_i32(offset)?))
    }

    #[inline]
    pub fn read_u8_fixed8(&self, offset: usize) -> Result<f32, CmsError> {
        Ok(u8_fixed8_number_to_float(self.read_u16(offset)?))
    }

    pub fn read_xyz_number(&self, offset: usize) -> Result<Xyz, CmsError> {
        Ok(Xyz::new(
            self.read_s15_fixed16(offset)?,
            self.read_s15_fixed16(offset + 4)?,
            self.read_s15_fixed16(offset + 8)?,
        ))
    }

    /// Restricts the reader to `count` bytes starting at `offset`.
    pub fn sub_reader(&self, offset: usize, count: usize) -> Result<ProfileReader<'a>, CmsError> {
        Ok(ProfileReader::new(self.read_bytes(offset, count)?))
    }

    #[inline]
    pub const fn cursor(&self, position: usize) -> ReadCursor<'a> {
        ReadCursor {
            reader: *self,
            position,
        }
    }
}

/// Sequential reader over a [ProfileReader], advancing after each read.
#[derive(Debug, Copy, Clone)]
pub struct ReadCursor<'a> {
    reader: ProfileReader<'a>,
    position: usize,
}

impl<'a> ReadCursor<'a> {
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn skip(&mut self, count: usize) -> Result<(), CmsError> {
        self.position = self
            .position
            .checked_add(count)
            .ok_or(CmsError::OverflowingError)?;
        Ok(())
    }

    /// Moves forward to the next 4-byte boundary.
    #[inline]
    pub fn align4(&mut self) -> Result<(), CmsError> {
        let rem = self.position % 4;
        if rem != 0 {
            self.skip(4 - rem)?;
        }
        Ok(())
    }

    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], CmsError> {
        let v = self.reader.read_bytes(self.position, count)?;
        self.position += count;
        Ok(v)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, CmsError> {
        let v = self.reader.read_u8(self.position)?;
        self.position += 1;
        Ok(v)
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, CmsError> {
        let v = self.reader.read_u16(self.position)?;
        self.position += 2;
        Ok(v)
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, CmsError> {
        let v = self.reader.read_u32(self.position)?;
        self.position += 4;
        Ok(v)
    }

    #[inline]
    pub fn read_s15_fixed16(&mut self) -> Result<f32, CmsError> {
        let v = self.reader.read_s15_fixed16(self.position)?;
        self.position += 4;
        Ok(v)
    }
}
