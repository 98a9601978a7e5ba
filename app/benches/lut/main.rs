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
use criterion::{Criterion, criterion_group, criterion_main};
use pdfcms::{
    CmykAcceleration, ColorProfile, InterpolationMethod, RenderingIntent, SrgbConverter,
    TransformOptions,
};
use rand::Rng;
use std::fs;
use std::sync::Arc;

fn random_samples(channels: usize, pixels: usize) -> Vec<f32> {
    let mut rng = rand::rng();
    (0..channels * pixels)
        .map(|_| rng.random_range(0f32..=1.))
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let cmyk_icc = fs::read("../assets/synthetic_cmyk.icc").unwrap();
    let cmyk_profile = Arc::new(ColorProfile::new_from_slice(&cmyk_icc).unwrap());
    let srgb_icc = fs::read("../assets/synthetic_srgb.icc").unwrap();
    let srgb_profile = Arc::new(ColorProfile::new_from_slice(&srgb_icc).unwrap());

    let cmyk = random_samples(4, 4096);
    let rgb = random_samples(3, 4096);
    let mut dst = vec![0f32; 4096 * 3];

    for (name, acceleration) in [
        ("Layered", CmykAcceleration::Layered),
        ("Grid4d", CmykAcceleration::Grid4d),
    ] {
        for (method_name, interpolation) in [
            ("Tetra", InterpolationMethod::Tetrahedral),
            ("Trilinear", InterpolationMethod::Trilinear),
        ] {
            let options = TransformOptions {
                cmyk_acceleration: acceleration,
                interpolation,
                ..Default::default()
            };
            let converter = SrgbConverter::new(cmyk_profile.clone(), options).unwrap();
            // Builds the grid outside of the measured loop
            _ = converter.to_srgb_accelerated(&[0.; 4], RenderingIntent::Perceptual);
            c.bench_function(
                &format!("pdfcms: {name} {method_name} CMYK -> sRGB"),
                |b| {
                    b.iter(|| {
                        converter.convert_row(&cmyk, &mut dst, RenderingIntent::Perceptual, true);
                    })
                },
            );
        }
    }

    c.bench_function("pdfcms: build layered CMYK grid", |b| {
        b.iter(|| {
            let converter =
                SrgbConverter::new(cmyk_profile.clone(), TransformOptions::default()).unwrap();
            converter.to_srgb_accelerated(&[0.; 4], RenderingIntent::RelativeColorimetric)
        })
    });

    c.bench_function("pdfcms: LUT Tetra RGB -> sRGB", |b| {
        let converter =
            SrgbConverter::new(srgb_profile.clone(), TransformOptions::default()).unwrap();
        _ = converter.to_srgb_accelerated(&[0.; 3], RenderingIntent::Perceptual);
        b.iter(|| {
            converter.convert_row(&rgb, &mut dst, RenderingIntent::Perceptual, true);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
