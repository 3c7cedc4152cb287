//! Encoders for the two output formats.
//!
//! Both encode into memory first and only then touch the destination, so an
//! encoder failure never leaves a truncated file behind.

use std::fs;
use std::path::Path;

use image::DynamicImage;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use libwebp_sys::WebPConfig;
use webp::Encoder;

use crate::utils::{OptimizerError, OptimizerResult};

/// libwebp's slowest, best-compressing method.
const WEBP_METHOD: i32 = 6;

/// Encodes `image` as PNG with maximum deflate effort and adaptive filtering.
///
/// Indexed sources come out as truecolor: the decoder expands the palette and
/// `image` has no indexed encoder. Pixels are unchanged.
pub fn encode_png(image: &DynamicImage, path: &Path) -> OptimizerResult<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive);
    image
        .write_with_encoder(encoder)
        .map_err(|e| OptimizerError::encode(path, format!("PNG encode failed: {e}")))?;
    Ok(buf)
}

/// Encodes `image` as lossy WebP at `quality` (0-100).
///
/// Images with an alpha channel keep it; both layouts use the same config.
pub fn encode_webp(image: &DynamicImage, quality: u8, path: &Path) -> OptimizerResult<Vec<u8>> {
    let mut config = WebPConfig::new()
        .map_err(|_| OptimizerError::encode(path, "WebP config init failed"))?;
    config.lossless = 0;
    config.quality = f32::from(quality.min(100));
    config.method = WEBP_METHOD;

    let (width, height) = (image.width(), image.height());
    let encoded = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        Encoder::from_rgba(rgba.as_raw(), width, height).encode_advanced(&config)
    } else {
        let rgb = image.to_rgb8();
        Encoder::from_rgb(rgb.as_raw(), width, height).encode_advanced(&config)
    };

    encoded
        .map(|memory| memory.to_vec())
        .map_err(|e| OptimizerError::encode(path, format!("WebP encode failed: {e:?}")))
}

/// Writes encoded bytes to `path`, replacing whatever is there.
pub fn write_encoded(path: &Path, bytes: &[u8]) -> OptimizerResult<u64> {
    fs::write(path, bytes).map_err(|e| OptimizerError::io(path, e))?;
    Ok(bytes.len() as u64)
}
