#![no_main]

use libfuzzer_sys::fuzz_target;
use pdfcms::{
    CmykAcceleration, ColorProfile, InterpolationMethod, RenderingIntent, SrgbConverter,
    TransformOptions,
};
use std::fs;
use std::sync::{Arc, LazyLock};

static STATIC_CMYK: LazyLock<Arc<ColorProfile>> = LazyLock::new(|| {
    let cmyk_icc = fs::read("./assets/synthetic_cmyk.icc").unwrap();
    Arc::new(ColorProfile::new_from_slice(&cmyk_icc).unwrap())
});

static STATIC_SRGB: LazyLock<Arc<ColorProfile>> = LazyLock::new(|| {
    let rgb_icc = fs::read("./assets/synthetic_srgb.icc").unwrap();
    Arc::new(ColorProfile::new_from_slice(&rgb_icc).unwrap())
});

fuzz_target!(|data: (f32, f32, f32, f32, u8, bool)| {
    let intent = match data.4 % 4 {
        0 => RenderingIntent::Perceptual,
        1 => RenderingIntent::RelativeColorimetric,
        2 => RenderingIntent::Saturation,
        _ => RenderingIntent::AbsoluteColorimetric,
    };
    let options = TransformOptions {
        interpolation: if data.5 {
            InterpolationMethod::Tetrahedral
        } else {
            InterpolationMethod::Trilinear
        },
        cmyk_acceleration: if data.4 & 0x10 != 0 {
            CmykAcceleration::Grid4d
        } else {
            CmykAcceleration::Layered
        },
        ..Default::default()
    };
    fuzz_cmyk(STATIC_CMYK.clone(), [data.0, data.1, data.2, data.3], intent, options);
    fuzz_rgb(
        STATIC_SRGB.clone(),
        [data.0, data.1, data.2],
        intent,
        options,
    );
});

fn fuzz_cmyk(
    profile: Arc<ColorProfile>,
    device: [f32; 4],
    intent: RenderingIntent,
    options: TransformOptions,
) {
    let converter = SrgbConverter::new(profile, options).unwrap();
    _ = converter.to_srgb(&device, intent);
    _ = converter.to_srgb_accelerated(&device, intent);
}

fn fuzz_rgb(
    profile: Arc<ColorProfile>,
    device: [f32; 3],
    intent: RenderingIntent,
    options: TransformOptions,
) {
    let converter = SrgbConverter::new(profile, options).unwrap();
    _ = converter.to_srgb(&device, intent);
    _ = converter.to_srgb_accelerated(&device, intent);
}
