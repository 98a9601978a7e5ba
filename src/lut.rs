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
use crate::matrix::{Matrix3f, Vector3f};
use crate::mlaf::mlaf;
use crate::nd_array::{Clut, MAX_CLUT_INPUTS};
use crate::profile::ParsingOptions;
use crate::reader::{ProfileReader, ReadCursor, uint8_number_to_float, uint16_number_to_float};
use crate::tag::TagTypeDefinition;
use crate::trc::{Trc, read_trc};
use std::sync::OnceLock;

/// Number of intervals curves are expanded to in [LutCache]
const CURVE_LUT_SIZE: usize = 4096;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum LutType {
    Lut8,
    Lut16,
    LutMab,
    LutMba,
}

impl TryFrom<u32> for LutType {
    type Error = CmsError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match TagTypeDefinition::from(value) {
            TagTypeDefinition::Lut8 => Ok(LutType::Lut8),
            TagTypeDefinition::Lut16 => Ok(LutType::Lut16),
            TagTypeDefinition::LutAtoB => Ok(LutType::LutMab),
            TagTypeDefinition::LutBtoA => Ok(LutType::LutMba),
            _ => Err(CmsError::UnsupportedLutType(value)),
        }
    }
}

/// `lut8Type`/`lut16Type`: one grid size shared by every input dimension
#[derive(Debug, Clone)]
pub struct UniformLut {
    pub lut_type: LutType,
    pub num_input_channels: u8,
    pub num_output_channels: u8,
    pub num_clut_grid_points: u8,
    pub matrix: Matrix3f,
    pub num_input_table_entries: u16,
    pub num_output_table_entries: u16,
    /// Input tables, one after another
    pub input_table: Vec<f32>,
    pub clut: Clut,
    /// Output tables, one after another
    pub output_table: Vec<f32>,
    cache: OnceLock<LutCache>,
}

/// Matrix element of `lutAtoBType`/`lutBtoAType`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixStage {
    pub matrix: Matrix3f,
    pub bias: Vector3f,
}

/// `lutAtoBType`/`lutBtoAType`, every element is optional
#[derive(Debug, Clone)]
pub struct MabLut {
    pub lut_type: LutType,
    pub num_input_channels: u8,
    pub num_output_channels: u8,
    pub a_curves: Vec<Trc>,
    pub m_curves: Vec<Trc>,
    pub b_curves: Vec<Trc>,
    pub matrix: Option<MatrixStage>,
    pub clut: Option<Clut>,
    cache: OnceLock<LutCache>,
}

/// Device to PCS (or PCS to device) table of a profile
#[derive(Debug, Clone)]
pub enum LutPipeline {
    Uniform(UniformLut),
    Multidimensional(MabLut),
}

/// Expanded curves and matrix rows of a pipeline, built once on first use.
///
/// Empty curve tables stand for identity.
#[derive(Debug, Clone, Default)]
pub(crate) struct LutCache {
    pub(crate) a_curves: Vec<Vec<f32>>,
    pub(crate) m_curves: Vec<Vec<f32>>,
    pub(crate) b_curves: Vec<Vec<f32>>,
    pub(crate) matrix_rows: Option<[[f32; 4]; 3]>,
}

fn expand_curves(curves: &[Trc]) -> Vec<Vec<f32>> {
    curves
        .iter()
        .map(|trc| {
            if trc.is_identity() {
                Vec::new()
            } else {
                trc.to_lut(CURVE_LUT_SIZE)
            }
        })
        .collect()
}

fn matrix_rows(matrix: Matrix3f, bias: Vector3f) -> [[f32; 4]; 3] {
    let m = matrix.v;
    [
        [m[0][0], m[0][1], m[0][2], bias.v[0]],
        [m[1][0], m[1][1], m[1][2], bias.v[1]],
        [m[2][0], m[2][1], m[2][2], bias.v[2]],
    ]
}

#[inline]
fn apply_curves(curves: &[Vec<f32>], values: &mut [f32]) {
    for (value, curve) in values.iter_mut().zip(curves.iter()) {
        *value = lookup_linear(curve, *value);
    }
}

#[inline]
fn apply_matrix(rows: Option<&[[f32; 4]; 3]>, values: &mut [f32]) {
    let (Some(rows), [x, y, z]) = (rows, values) else {
        return;
    };
    let src = [*x, *y, *z];
    let mut dst = [0f32; 3];
    for (row, out) in rows.iter().zip(dst.iter_mut()) {
        *out = clamp_unit(mlaf(
            mlaf(mlaf(row[3], src[0], row[0]), src[1], row[1]),
            src[2],
            row[2],
        ));
    }
    *x = dst[0];
    *y = dst[1];
    *z = dst[2];
}

fn check_channels(
    input: &[f32],
    output: &[f32],
    input_channels: usize,
    output_channels: usize,
) -> Result<(), CmsError> {
    if input.len() != input_channels {
        return Err(CmsError::ChannelMismatch(MalformedSize {
            size: input.len(),
            expected: input_channels,
        }));
    }
    if output.len() < output_channels {
        return Err(CmsError::ChannelMismatch(MalformedSize {
            size: output.len(),
            expected: output_channels,
        }));
    }
    Ok(())
}

impl UniformLut {
    pub(crate) fn cache(&self) -> &LutCache {
        self.cache.get_or_init(|| {
            let split = |table: &[f32], entries: u16| -> Vec<Vec<f32>> {
                table
                    .chunks_exact(entries as usize)
                    .map(|v| v.to_vec())
                    .collect()
            };
            let matrix_rows = if self.num_input_channels == 3
                && !self.matrix.test_equality(Matrix3f::IDENTITY)
            {
                Some(matrix_rows(self.matrix, Vector3f::default()))
            } else {
                None
            };
            LutCache {
                a_curves: split(&self.input_table, self.num_input_table_entries),
                m_curves: Vec::new(),
                b_curves: split(&self.output_table, self.num_output_table_entries),
                matrix_rows,
            }
        })
    }

    /// Input tables, then the matrix for three inputs, then CLUT and output tables.
    pub fn evaluate(&self, input: &[f32], output: &mut [f32]) -> Result<(), CmsError> {
        let in_ch = self.num_input_channels as usize;
        let out_ch = self.num_output_channels as usize;
        check_channels(input, output, in_ch, out_ch)?;
        let cache = self.cache();

        let mut stage = [0f32; MAX_CLUT_INPUTS];
        for (dst, &src) in stage.iter_mut().zip(input.iter()) {
            *dst = clamp_unit(src);
        }
        apply_curves(&cache.a_curves, &mut stage[..in_ch]);
        apply_matrix(cache.matrix_rows.as_ref(), &mut stage[..in_ch]);

        let output = &mut output[..out_ch];
        self.clut.evaluate(&stage[..in_ch], output)?;
        apply_curves(&cache.b_curves, output);
        Ok(())
    }
}

impl MabLut {
    /// Number of channels the matrix element operates on
    #[inline]
    fn matrix_channels(&self) -> u8 {
        match self.lut_type {
            LutType::LutMba => self.num_input_channels,
            _ => self.num_output_channels,
        }
    }

    pub(crate) fn cache(&self) -> &LutCache {
        self.cache.get_or_init(|| {
            let matrix_rows = match self.matrix {
                Some(stage) if self.matrix_channels() == 3 => {
                    Some(matrix_rows(stage.matrix, stage.bias))
                }
                _ => None,
            };
            LutCache {
                a_curves: expand_curves(&self.a_curves),
                m_curves: expand_curves(&self.m_curves),
                b_curves: expand_curves(&self.b_curves),
                matrix_rows,
            }
        })
    }

    /// Runs the elements in ICC order: `A, CLUT, M, matrix, B` for `mAB `
    /// and `B, matrix, M, CLUT, A` for `mBA `.
    ///
    /// For `mAB ` the matrix follows the CLUT. Moving it in front of the CLUT
    /// changes results for every profile carrying both elements.
    pub fn evaluate(&self, input: &[f32], output: &mut [f32]) -> Result<(), CmsError> {
        let in_ch = self.num_input_channels as usize;
        let out_ch = self.num_output_channels as usize;
        check_channels(input, output, in_ch, out_ch)?;
        let cache = self.cache();

        let mut stage = [0f32; MAX_CLUT_INPUTS];
        for (dst, &src) in stage.iter_mut().zip(input.iter()) {
            *dst = clamp_unit(src);
        }
        let output = &mut output[..out_ch];

        if self.lut_type == LutType::LutMba {
            apply_curves(&cache.b_curves, &mut stage[..in_ch]);
            apply_matrix(cache.matrix_rows.as_ref(), &mut stage[..in_ch]);
            apply_curves(&cache.m_curves, &mut stage[..in_ch]);
            match &self.clut {
                Some(clut) => clut.evaluate(&stage[..in_ch], output)?,
                None => output.copy_from_slice(&stage[..out_ch]),
            }
            apply_curves(&cache.a_curves, output);
        } else {
            apply_curves(&cache.a_curves, &mut stage[..in_ch]);
            match &self.clut {
                Some(clut) => clut.evaluate(&stage[..in_ch], output)?,
                None => output.copy_from_slice(&stage[..out_ch]),
            }
            apply_curves(&cache.m_curves, output);
            apply_matrix(cache.matrix_rows.as_ref(), output);
            apply_curves(&cache.b_curves, output);
        }
        Ok(())
    }
}

impl LutPipeline {
    #[inline]
    pub fn lut_type(&self) -> LutType {
        match self {
            LutPipeline::Uniform(lut) => lut.lut_type,
            LutPipeline::Multidimensional(lut) => lut.lut_type,
        }
    }

    #[inline]
    pub fn input_channels(&self) -> usize {
        match self {
            LutPipeline::Uniform(lut) => lut.num_input_channels as usize,
            LutPipeline::Multidimensional(lut) => lut.num_input_channels as usize,
        }
    }

    #[inline]
    pub fn output_channels(&self) -> usize {
        match self {
            LutPipeline::Uniform(lut) => lut.num_output_channels as usize,
            LutPipeline::Multidimensional(lut) => lut.num_output_channels as usize,
        }
    }

    /// Evaluates the pipeline on components in `[0, 1]`.
    ///
    /// `input` must hold exactly [LutPipeline::input_channels] values, `output`
    /// at least [LutPipeline::output_channels].
    pub fn evaluate(&self, input: &[f32], output: &mut [f32]) -> Result<(), CmsError> {
        match self {
            LutPipeline::Uniform(lut) => lut.evaluate(input, output),
            LutPipeline::Multidimensional(lut) => lut.evaluate(input, output),
        }
    }
}

fn read_channel_count(reader: &ProfileReader<'_>, offset: usize) -> Result<u8, CmsError> {
    let channels = reader.read_u8(offset)?;
    if channels == 0 || channels as usize > MAX_CLUT_INPUTS {
        return Err(CmsError::ChannelMismatch(MalformedSize {
            size: channels as usize,
            expected: MAX_CLUT_INPUTS,
        }));
    }
    Ok(channels)
}

fn read_table(
    cursor: &mut ReadCursor<'_>,
    count: usize,
    entry_size: usize,
) -> Result<Vec<f32>, CmsError> {
    let size = count
        .checked_mul(entry_size)
        .ok_or(CmsError::OverflowingError)?;
    let bytes = cursor.read_bytes(size)?;
    Ok(if entry_size == 2 {
        bytes
            .chunks_exact(2)
            .map(|v| uint16_number_to_float(u16::from_be_bytes([v[0], v[1]])))
            .collect()
    } else {
        bytes.iter().map(|&v| uint8_number_to_float(v)).collect()
    })
}

fn clut_sample_count(
    grid_points: &[usize],
    output_channels: usize,
    options: &ParsingOptions,
) -> Result<usize, CmsError> {
    let count = grid_points
        .iter()
        .try_fold(output_channels, |acc, &g| acc.checked_mul(g))
        .ok_or(CmsError::OverflowingError)?;
    if count > options.max_clut_size {
        return Err(CmsError::MalformedClut(MalformedSize {
            size: count,
            expected: options.max_clut_size,
        }));
    }
    Ok(count)
}

fn read_matrix3(cursor: &mut ReadCursor<'_>) -> Result<Matrix3f, CmsError> {
    let mut matrix = Matrix3f::default();
    for row in matrix.v.iter_mut() {
        for v in row.iter_mut() {
            *v = cursor.read_s15_fixed16()?;
        }
    }
    Ok(matrix)
}

fn read_uniform_lut(
    reader: &ProfileReader<'_>,
    lut_type: LutType,
    options: &ParsingOptions,
) -> Result<UniformLut, CmsError> {
    let num_input_channels = read_channel_count(reader, 8)?;
    let num_output_channels = read_channel_count(reader, 9)?;
    let num_clut_grid_points = reader.read_u8(10)?;
    if num_clut_grid_points == 0 {
        return Err(CmsError::MalformedClut(MalformedSize {
            size: 0,
            expected: 1,
        }));
    }
    let matrix = read_matrix3(&mut reader.cursor(12))?;

    let (num_input_table_entries, num_output_table_entries, data_offset, entry_size) =
        match lut_type {
            LutType::Lut16 => (reader.read_u16(48)?, reader.read_u16(50)?, 52usize, 2usize),
            _ => (256u16, 256u16, 48usize, 1usize),
        };
    for entries in [num_input_table_entries, num_output_table_entries] {
        if !(2..=4096).contains(&entries) {
            return Err(CmsError::MalformedCurveLutTable(MalformedSize {
                size: entries as usize,
                expected: 4096,
            }));
        }
    }

    let in_ch = num_input_channels as usize;
    let out_ch = num_output_channels as usize;
    let grid_points = vec![num_clut_grid_points as usize; in_ch];
    let clut_size = clut_sample_count(&grid_points, out_ch, options)?;

    let mut cursor = reader.cursor(data_offset);
    let input_table = read_table(
        &mut cursor,
        num_input_table_entries as usize * in_ch,
        entry_size,
    )?;
    let clut_values = read_table(&mut cursor, clut_size, entry_size)?;
    let output_table = read_table(
        &mut cursor,
        num_output_table_entries as usize * out_ch,
        entry_size,
    )?;

    Ok(UniformLut {
        lut_type,
        num_input_channels,
        num_output_channels,
        num_clut_grid_points,
        matrix,
        num_input_table_entries,
        num_output_table_entries,
        input_table,
        clut: Clut::new(clut_values, grid_points, out_ch)?,
        output_table,
        cache: OnceLock::new(),
    })
}

fn read_curve_sequence(
    reader: &ProfileReader<'_>,
    offset: usize,
    count: usize,
    options: &ParsingOptions,
) -> Result<Vec<Trc>, CmsError> {
    let mut cursor = reader.cursor(offset);
    let mut curves = Vec::with_capacity(count);
    for _ in 0..count {
        let (curve, size) = read_trc(reader, cursor.position(), options.max_allowed_trc_size)?;
        curves.push(curve);
        cursor.skip(size)?;
        cursor.align4()?;
    }
    Ok(curves)
}

fn read_mab_clut(
    reader: &ProfileReader<'_>,
    offset: usize,
    input_channels: usize,
    output_channels: usize,
    options: &ParsingOptions,
) -> Result<Clut, CmsError> {
    let grid_bytes = reader.read_bytes(offset, 16)?;
    let grid_points: Vec<usize> = grid_bytes[..input_channels]
        .iter()
        .map(|&v| v as usize)
        .collect();
    if grid_points.contains(&0) {
        return Err(CmsError::MalformedClut(MalformedSize {
            size: 0,
            expected: 1,
        }));
    }
    let precision = reader.read_u8(offset + 16)? as usize;
    if precision != 1 && precision != 2 {
        return Err(CmsError::MalformedClut(MalformedSize {
            size: precision,
            expected: 2,
        }));
    }
    let count = clut_sample_count(&grid_points, output_channels, options)?;
    let values = read_table(&mut reader.cursor(offset + 20), count, precision)?;
    Clut::new(values, grid_points, output_channels)
}

fn read_matrix_stage(reader: &ProfileReader<'_>, offset: usize) -> Result<MatrixStage, CmsError> {
    let mut cursor = reader.cursor(offset);
    let matrix = read_matrix3(&mut cursor)?;
    let mut bias = Vector3f::default();
    for v in bias.v.iter_mut() {
        *v = cursor.read_s15_fixed16()?;
    }
    Ok(MatrixStage { matrix, bias })
}

fn read_mab_lut(
    reader: &ProfileReader<'_>,
    lut_type: LutType,
    options: &ParsingOptions,
) -> Result<MabLut, CmsError> {
    let num_input_channels = read_channel_count(reader, 8)?;
    let num_output_channels = read_channel_count(reader, 9)?;
    let in_ch = num_input_channels as usize;
    let out_ch = num_output_channels as usize;

    let b_offset = reader.read_u32(12)? as usize;
    let matrix_offset = reader.read_u32(16)? as usize;
    let m_offset = reader.read_u32(20)? as usize;
    let clut_offset = reader.read_u32(24)? as usize;
    let a_offset = reader.read_u32(28)? as usize;

    // B and M sit on the PCS side of the CLUT
    let (a_count, pcs_side) = match lut_type {
        LutType::LutMba => (out_ch, in_ch),
        _ => (in_ch, out_ch),
    };

    let curves = |offset: usize, count: usize| -> Result<Vec<Trc>, CmsError> {
        if offset == 0 {
            Ok(Vec::new())
        } else {
            read_curve_sequence(reader, offset, count, options)
        }
    };
    let a_curves = curves(a_offset, a_count)?;
    let m_curves = curves(m_offset, pcs_side)?;
    let b_curves = curves(b_offset, pcs_side)?;

    let matrix = if matrix_offset != 0 {
        Some(read_matrix_stage(reader, matrix_offset)?)
    } else {
        None
    };
    let clut = if clut_offset != 0 {
        Some(read_mab_clut(reader, clut_offset, in_ch, out_ch, options)?)
    } else {
        if in_ch != out_ch {
            return Err(CmsError::ChannelMismatch(MalformedSize {
                size: out_ch,
                expected: in_ch,
            }));
        }
        None
    };

    Ok(MabLut {
        lut_type,
        num_input_channels,
        num_output_channels,
        a_curves,
        m_curves,
        b_curves,
        matrix,
        clut,
        cache: OnceLock::new(),
    })
}

/// Parses an `A2Bx`/`B2Ax` tag, `reader` must span exactly the tag data.
pub(crate) fn read_lut_tag(
    reader: &ProfileReader<'_>,
    options: &ParsingOptions,
) -> Result<LutPipeline, CmsError> {
    let tag_type = reader.read_u32(0)?;
    let lut_type = LutType::try_from(tag_type)?;
    match lut_type {
        LutType::Lut8 | LutType::Lut16 => Ok(LutPipeline::Uniform(read_uniform_lut(
            reader, lut_type, options,
        )?)),
        LutType::LutMab | LutType::LutMba => Ok(LutPipeline::Multidimensional(read_mab_lut(
            reader, lut_type, options,
        )?)),
    }
}
