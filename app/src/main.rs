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
use pdfcms::{
    ColorProfile, DataColorSpace, RenderingIntent, SrgbConverter, TransformOptions,
    four_cc_to_string,
};
use std::fs;
use std::sync::Arc;

const INTENTS: [RenderingIntent; 4] = [
    RenderingIntent::Perceptual,
    RenderingIntent::RelativeColorimetric,
    RenderingIntent::Saturation,
    RenderingIntent::AbsoluteColorimetric,
];

fn sample_colors(color_space: DataColorSpace) -> Vec<Vec<f32>> {
    match color_space.channels() {
        1 => vec![vec![0.], vec![0.25], vec![0.5], vec![0.75], vec![1.]],
        3 => vec![
            vec![0., 0., 0.],
            vec![1., 1., 1.],
            vec![1., 0., 0.],
            vec![0., 1., 0.],
            vec![0., 0., 1.],
            vec![0.5, 0.5, 0.5],
        ],
        4 => vec![
            vec![0., 0., 0., 0.],
            vec![1., 0., 0., 0.],
            vec![0., 1., 0., 0.],
            vec![0., 0., 1., 0.],
            vec![0., 0., 0., 1.],
            vec![1., 1., 1., 1.],
            vec![0.2, 0.4, 0.6, 0.5],
        ],
        _ => vec![],
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: app <profile.icc>");
        std::process::exit(2);
    };
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::error!("Can't read {path}: {err}");
            std::process::exit(1);
        }
    };
    let profile = match ColorProfile::new_from_slice(&bytes) {
        Ok(profile) => Arc::new(profile),
        Err(err) => {
            log::error!("Can't parse {path}: {err}");
            std::process::exit(1);
        }
    };

    println!("Profile: {}", profile.description.as_deref().unwrap_or("<none>"));
    println!(
        "Class {:?}, version {}.{}, {:?} -> {:?}, intent {:?}",
        profile.header.profile_class,
        profile.header.version.major,
        profile.header.version.minor,
        profile.color_space(),
        profile.pcs(),
        profile.header.rendering_intent,
    );
    if let Some(date) = profile.header.creation_date_time.to_naive() {
        println!("Created {date}");
    }
    for tag in profile.tags.iter() {
        println!(
            "  tag {} at {} ({} bytes)",
            four_cc_to_string(tag.signature),
            tag.offset,
            tag.size
        );
    }

    let converter = match SrgbConverter::new(profile.clone(), TransformOptions::default()) {
        Ok(converter) => converter,
        Err(err) => {
            log::error!("No sRGB conversion for {path}: {err}");
            std::process::exit(1);
        }
    };

    for intent in INTENTS {
        println!("{intent:?}");
        for device in sample_colors(profile.color_space()) {
            let exact = converter.try_to_srgb(&device, intent);
            let fast = converter.to_srgb_accelerated(&device, intent).ok();
            match (exact, fast) {
                (Some(exact), Some(fast)) => println!(
                    "  {device:?} -> {:?} (accelerated {:?})",
                    exact.to_rgb8(),
                    fast.to_rgb8()
                ),
                _ => println!("  {device:?} -> not converted"),
            }
        }
    }
}
