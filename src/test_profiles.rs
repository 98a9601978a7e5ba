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
//! Synthetic ICC streams for unit tests.

use crate::matrix::{Matrix3f, Xyz};
use crate::reader::{float_to_s15_fixed16, float_to_u8_fixed8};

fn push_u16(data: &mut Vec<u8>, v: u16) {
    data.extend_from_slice(&v.to_be_bytes());
}

fn push_u32(data: &mut Vec<u8>, v: u32) {
    data.extend_from_slice(&v.to_be_bytes());
}

fn push_s15(data: &mut Vec<u8>, v: f32) {
    data.extend_from_slice(&float_to_s15_fixed16(v).to_be_bytes());
}

fn pad4(data: &mut Vec<u8>) {
    while data.len() % 4 != 0 {
        data.push(0);
    }
}

fn type_header(signature: &[u8; 4]) -> Vec<u8> {
    let mut data = signature.to_vec();
    data.extend_from_slice(&[0; 4]);
    data
}

pub(crate) struct ProfileBuilder {
    color_space: [u8; 4],
    pcs: [u8; 4],
    class: [u8; 4],
    version: u32,
    intent: u32,
    magic: [u8; 4],
    date: [u8; 12],
    tags: Vec<([u8; 4], Vec<u8>)>,
}

impl ProfileBuilder {
    pub(crate) fn new(color_space: &[u8; 4], pcs: &[u8; 4]) -> Self {
        ProfileBuilder {
            color_space: *color_space,
            pcs: *pcs,
            class: *b"mntr",
            version: 0x0430_0000,
            intent: 0,
            magic: *b"acsp",
            date: [0x07, 0xE8, 0, 5, 0, 17, 0, 12, 0, 30, 0, 0],
            tags: Vec::new(),
        }
    }

    pub(crate) fn class(mut self, class: &[u8; 4]) -> Self {
        self.class = *class;
        self
    }

    pub(crate) fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub(crate) fn intent(mut self, intent: u32) -> Self {
        self.intent = intent;
        self
    }

    pub(crate) fn magic(mut self, magic: &[u8; 4]) -> Self {
        self.magic = *magic;
        self
    }

    pub(crate) fn tag(mut self, signature: &[u8; 4], data: Vec<u8>) -> Self {
        self.tags.push((*signature, data));
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let mut directory = Vec::new();
        let mut payload = Vec::new();
        let data_start = 132 + 12 * self.tags.len();
        for (signature, data) in self.tags.iter() {
            let offset = data_start + payload.len();
            directory.extend_from_slice(signature);
            push_u32(&mut directory, offset as u32);
            push_u32(&mut directory, data.len() as u32);
            payload.extend_from_slice(data);
            pad4(&mut payload);
        }
        let total = data_start + payload.len();

        let mut profile = Vec::with_capacity(total);
        push_u32(&mut profile, total as u32);
        profile.extend_from_slice(b"test");
        push_u32(&mut profile, self.version);
        profile.extend_from_slice(&self.class);
        profile.extend_from_slice(&self.color_space);
        profile.extend_from_slice(&self.pcs);
        profile.extend_from_slice(&self.date);
        profile.extend_from_slice(&self.magic);
        profile.resize(64, 0);
        push_u32(&mut profile, self.intent);
        push_s15(&mut profile, Xyz::D50.x);
        push_s15(&mut profile, Xyz::D50.y);
        push_s15(&mut profile, Xyz::D50.z);
        profile.resize(128, 0);
        push_u32(&mut profile, self.tags.len() as u32);
        profile.extend_from_slice(&directory);
        profile.extend_from_slice(&payload);
        profile
    }
}

pub(crate) fn xyz_tag(xyz: Xyz) -> Vec<u8> {
    let mut data = type_header(b"XYZ ");
    push_s15(&mut data, xyz.x);
    push_s15(&mut data, xyz.y);
    push_s15(&mut data, xyz.z);
    data
}

pub(crate) fn curv_gamma_tag(gamma: f32) -> Vec<u8> {
    let mut data = type_header(b"curv");
    push_u32(&mut data, 1);
    push_u16(&mut data, float_to_u8_fixed8(gamma));
    data
}

pub(crate) fn curv_identity_tag() -> Vec<u8> {
    let mut data = type_header(b"curv");
    push_u32(&mut data, 0);
    data
}

pub(crate) fn curv_sampled_tag(samples: &[u16]) -> Vec<u8> {
    let mut data = type_header(b"curv");
    push_u32(&mut data, samples.len() as u32);
    for &v in samples {
        push_u16(&mut data, v);
    }
    data
}

pub(crate) fn para_tag(function_type: u16, params: &[f32]) -> Vec<u8> {
    let mut data = type_header(b"para");
    push_u16(&mut data, function_type);
    push_u16(&mut data, 0);
    for &p in params {
        push_s15(&mut data, p);
    }
    data
}

pub(crate) fn chad_tag(matrix: Matrix3f) -> Vec<u8> {
    let mut data = type_header(b"sf32");
    for row in matrix.v.iter() {
        for &v in row.iter() {
            push_s15(&mut data, v);
        }
    }
    data
}

pub(crate) fn desc_tag(text: &str) -> Vec<u8> {
    let mut data = type_header(b"desc");
    push_u32(&mut data, text.len() as u32 + 1);
    data.extend_from_slice(text.as_bytes());
    data.push(0);
    // empty unicode and scriptcode records
    data.extend_from_slice(&[0; 4 + 4 + 2 + 1 + 67]);
    data
}

pub(crate) fn text_tag(text: &str) -> Vec<u8> {
    let mut data = type_header(b"text");
    data.extend_from_slice(text.as_bytes());
    data.push(0);
    data
}

pub(crate) fn mluc_tag(text: &str) -> Vec<u8> {
    let utf16: Vec<u16> = text.encode_utf16().collect();
    let mut data = type_header(b"mluc");
    push_u32(&mut data, 1);
    push_u32(&mut data, 12);
    data.extend_from_slice(b"enUS");
    push_u32(&mut data, utf16.len() as u32 * 2);
    push_u32(&mut data, 28);
    for v in utf16 {
        push_u16(&mut data, v);
    }
    data
}

fn lut_header(signature: &[u8; 4], in_ch: u8, out_ch: u8, grid: u8) -> Vec<u8> {
    let mut data = type_header(signature);
    data.extend_from_slice(&[in_ch, out_ch, grid, 0]);
    for row in Matrix3f::IDENTITY.v.iter() {
        for &v in row.iter() {
            push_s15(&mut data, v);
        }
    }
    data
}

/// `mft1` with identity input/output tables
pub(crate) fn lut8_tag(in_ch: u8, out_ch: u8, grid: u8, clut: &[u8]) -> Vec<u8> {
    let mut data = lut_header(b"mft1", in_ch, out_ch, grid);
    for _ in 0..in_ch {
        data.extend(0..=255u8);
    }
    data.extend_from_slice(clut);
    for _ in 0..out_ch {
        data.extend(0..=255u8);
    }
    data
}

/// `mft2` with identity input/output tables of `entries` samples
pub(crate) fn lut16_tag(in_ch: u8, out_ch: u8, grid: u8, entries: u16, clut: &[u16]) -> Vec<u8> {
    let mut data = lut_header(b"mft2", in_ch, out_ch, grid);
    push_u16(&mut data, entries);
    push_u16(&mut data, entries);
    let identity = |data: &mut Vec<u8>| {
        for i in 0..entries as u32 {
            let v = (i * 65535 + (entries as u32 - 1) / 2) / (entries as u32 - 1);
            push_u16(data, v as u16);
        }
    };
    for _ in 0..in_ch {
        identity(&mut data);
    }
    for &v in clut {
        push_u16(&mut data, v);
    }
    for _ in 0..out_ch {
        identity(&mut data);
    }
    data
}

/// Elements of a `mAB `/`mBA ` tag. Curves are pure gammas, `None` writes
/// identity B curves and leaves A out. M curves are identity and only written
/// along with the matrix. The CLUT is omitted when `grid` is empty.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LutElements<'a> {
    pub(crate) in_ch: u8,
    pub(crate) out_ch: u8,
    pub(crate) grid: &'a [u8],
    /// CLUT values in 16 bit, divided by 257 when `precision` is 1
    pub(crate) clut: &'a [u16],
    pub(crate) precision: u8,
    pub(crate) a_gamma: Option<f32>,
    pub(crate) b_gamma: Option<f32>,
    pub(crate) matrix: Option<([f32; 9], [f32; 3])>,
}

impl Default for LutElements<'_> {
    fn default() -> Self {
        Self {
            in_ch: 3,
            out_ch: 3,
            grid: &[],
            clut: &[],
            precision: 2,
            a_gamma: None,
            b_gamma: None,
            matrix: None,
        }
    }
}

/// Writes `elements` as a `mAB ` or `mBA ` tag.
pub(crate) fn lut_ab_tag(signature: &[u8; 4], elements: &LutElements<'_>) -> Vec<u8> {
    let (in_ch, out_ch) = (elements.in_ch, elements.out_ch);
    // B and M curves sit on the PCS side
    let (a_count, pcs_side) = if signature == b"mBA " {
        (out_ch, in_ch)
    } else {
        (in_ch, out_ch)
    };

    let mut data = type_header(signature);
    data.extend_from_slice(&[in_ch, out_ch, 0, 0]);
    data.resize(32, 0);

    let set_offset = |data: &mut Vec<u8>, at: usize| {
        let offset = data.len() as u32;
        data[at..at + 4].copy_from_slice(&offset.to_be_bytes());
    };
    let gamma_curves = |data: &mut Vec<u8>, gamma: Option<f32>, count: u8| {
        for _ in 0..count {
            match gamma {
                Some(gamma) => data.extend_from_slice(&curv_gamma_tag(gamma)),
                None => data.extend_from_slice(&curv_identity_tag()),
            }
            pad4(data);
        }
    };

    set_offset(&mut data, 12);
    gamma_curves(&mut data, elements.b_gamma, pcs_side);

    if let Some((m, bias)) = elements.matrix {
        set_offset(&mut data, 16);
        for v in m.iter().chain(bias.iter()) {
            push_s15(&mut data, *v);
        }
        set_offset(&mut data, 20);
        gamma_curves(&mut data, None, pcs_side);
    }

    if !elements.grid.is_empty() {
        set_offset(&mut data, 24);
        let mut grid_bytes = [0u8; 16];
        grid_bytes[..elements.grid.len()].copy_from_slice(elements.grid);
        data.extend_from_slice(&grid_bytes);
        data.extend_from_slice(&[elements.precision, 0, 0, 0]);
        for &v in elements.clut {
            if elements.precision == 1 {
                data.push((v / 257) as u8);
            } else {
                push_u16(&mut data, v);
            }
        }
        pad4(&mut data);
    }

    if elements.a_gamma.is_some() {
        set_offset(&mut data, 28);
        gamma_curves(&mut data, elements.a_gamma, a_count);
    }
    data
}

/// `mAB ` with identity B curves, optional gamma A curves, optional matrix
/// (with identity M curves) and an optional 16-bit CLUT when `grid` is not empty.
pub(crate) fn mab_tag(
    in_ch: u8,
    out_ch: u8,
    grid: &[u8],
    clut: &[u16],
    a_gamma: Option<f32>,
    matrix: Option<([f32; 9], [f32; 3])>,
) -> Vec<u8> {
    lut_ab_tag(
        b"mAB ",
        &LutElements {
            in_ch,
            out_ch,
            grid,
            clut,
            a_gamma,
            matrix,
            ..Default::default()
        },
    )
}

/// Gray profile with a pure gamma `kTRC` and a D50 white point
pub(crate) fn gray_gamma_profile(gamma: f32) -> Vec<u8> {
    ProfileBuilder::new(b"GRAY", b"XYZ ")
        .tag(b"wtpt", xyz_tag(Xyz::D50))
        .tag(b"kTRC", curv_gamma_tag(gamma))
        .build()
}

/// sRGB primaries adapted to D50 with the sRGB parametric curve
pub(crate) fn srgb_matrix_profile() -> Vec<u8> {
    let srgb = [2.4, 1. / 1.055, 0.055 / 1.055, 1. / 12.92, 0.04045];
    ProfileBuilder::new(b"RGB ", b"XYZ ")
        .tag(b"wtpt", xyz_tag(Xyz::D50))
        .tag(b"rXYZ", xyz_tag(Xyz::new(0.4360747, 0.2225045, 0.0139322)))
        .tag(b"gXYZ", xyz_tag(Xyz::new(0.3850649, 0.7168786, 0.0971045)))
        .tag(b"bXYZ", xyz_tag(Xyz::new(0.1430804, 0.0606169, 0.7141733)))
        .tag(b"rTRC", para_tag(3, &srgb))
        .tag(b"gTRC", para_tag(3, &srgb))
        .tag(b"bTRC", para_tag(3, &srgb))
        .build()
}

/// CLUT of a 4 -> 3 `lut8` mapping no ink to Lab white and full K to Lab black,
/// ignoring C, M and Y.
pub(crate) fn cmyk_k_only_clut() -> Vec<u8> {
    let mut clut = Vec::new();
    for _c in 0..2 {
        for _m in 0..2 {
            for _y in 0..2 {
                clut.extend_from_slice(&[255, 128, 128]);
                clut.extend_from_slice(&[0, 128, 128]);
            }
        }
    }
    clut
}

/// CMYK output profile with a single `lut8` A2B0 table into Lab
pub(crate) fn cmyk_lut8_profile() -> Vec<u8> {
    ProfileBuilder::new(b"CMYK", b"Lab ")
        .class(b"prtr")
        .tag(b"wtpt", xyz_tag(Xyz::D50))
        .tag(b"A2B0", lut8_tag(4, 3, 2, &cmyk_k_only_clut()))
        .build()
}

/// CLUT of a 4 -> 3 `lut8` into Lab where every ink moves the result
pub(crate) fn cmyk_ink_mix_clut() -> Vec<u8> {
    let mut clut = Vec::new();
    for c in [0f32, 1.] {
        for m in [0f32, 1.] {
            for y in [0f32, 1.] {
                for k in [0f32, 1.] {
                    let l = 255. * (1. - k) * (1. - 0.25 * c - 0.35 * m - 0.1 * y);
                    let fade = 1. - 0.5 * k;
                    let a = 128. + (40. * m - 30. * c) * fade;
                    let b = 128. + (50. * y - 20. * c - 10. * m) * fade;
                    clut.extend_from_slice(&[l.round() as u8, a.round() as u8, b.round() as u8]);
                }
            }
        }
    }
    clut
}

/// CMYK output profile whose `lut8` A2B0 depends on C, M, Y and K
pub(crate) fn cmyk_ink_mix_profile() -> Vec<u8> {
    ProfileBuilder::new(b"CMYK", b"Lab ")
        .class(b"prtr")
        .tag(b"wtpt", xyz_tag(Xyz::D50))
        .tag(b"A2B0", lut8_tag(4, 3, 2, &cmyk_ink_mix_clut()))
        .build()
}
