#![no_main]

use libfuzzer_sys::fuzz_target;
use pdfcms::{ColorProfile, RenderingIntent, SrgbConverter, TransformOptions};
use std::sync::Arc;

const INTENTS: [RenderingIntent; 4] = [
    RenderingIntent::Perceptual,
    RenderingIntent::RelativeColorimetric,
    RenderingIntent::Saturation,
    RenderingIntent::AbsoluteColorimetric,
];

fuzz_target!(|data: &[u8]| {
    let Ok(profile) = ColorProfile::new_from_slice(data) else {
        return;
    };
    let Ok(converter) = SrgbConverter::new(Arc::new(profile), TransformOptions::default()) else {
        return;
    };
    let channels = converter.channels();
    let samples: Vec<f32> = (0..channels * 5)
        .map(|i| (i % 5) as f32 / 4.)
        .collect();
    let mut dst = vec![0f32; 5 * 3];
    for intent in INTENTS {
        _ = converter.convert_row(&samples, &mut dst, intent, false);
    }
});
