//! The two per-file transforms.
//!
//! Both read the source once, optionally downscale it, re-encode it and
//! report how many bytes that saved. Nothing is retried and nothing is
//! cleaned up on failure; the caller decides what an error means.

use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::core::OptimizationResult;
use crate::utils::{OptimizerError, OptimizerResult, file_size};

use super::formats::{encode_png, encode_webp, write_encoded};
use super::resize::constrain_width;

/// Recompresses a PNG in place, downscaling it to `max_width` first if wider.
///
/// `_quality` is accepted for parity with [`convert_to_webp`]; PNG output is
/// lossless and ignores it.
pub fn compress_png(
    path: impl AsRef<Path>,
    max_width: Option<u32>,
    _quality: u8,
) -> OptimizerResult<OptimizationResult> {
    let path = path.as_ref();
    let original_size = file_size(path)?;
    let image = constrain_width(load(path)?, max_width);

    let bytes = encode_png(&image, path)?;
    let optimized_size = write_encoded(path, &bytes)?;

    let result = OptimizationResult::new(
        path.to_path_buf(),
        path.to_path_buf(),
        original_size,
        optimized_size,
        (image.width(), image.height()),
    );
    debug!("'{}' → {} bytes saved ({:.1}%)", path.display(), result.saved_bytes, result.compression_ratio);
    Ok(result)
}

/// Encodes `input_path` as lossy WebP at `output_path`.
///
/// The source file is left untouched; removing it is up to the caller.
pub fn convert_to_webp(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    max_width: Option<u32>,
    quality: u8,
) -> OptimizerResult<OptimizationResult> {
    let (input_path, output_path) = (input_path.as_ref(), output_path.as_ref());
    if input_path == output_path {
        return Err(OptimizerError::format(format!(
            "WebP output would overwrite its source: {}", input_path.display()
        )));
    }

    let original_size = file_size(input_path)?;
    let image = constrain_width(load(input_path)?, max_width);

    let bytes = encode_webp(&image, quality, output_path)?;
    let optimized_size = write_encoded(output_path, &bytes)?;

    let result = OptimizationResult::new(
        input_path.to_path_buf(),
        output_path.to_path_buf(),
        original_size,
        optimized_size,
        (image.width(), image.height()),
    );
    debug!("'{}' → {} bytes saved ({:.1}%)", output_path.display(), result.saved_bytes, result.compression_ratio);
    Ok(result)
}

/// Decodes by sniffing the file contents; the name's extension is not trusted.
fn load(path: &Path) -> OptimizerResult<DynamicImage> {
    let image = ImageReader::open(path)
        .map_err(|e| OptimizerError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| OptimizerError::io(path, e))?
        .decode()
        .map_err(|e| OptimizerError::decode(path, e))?;
    debug!("Loaded '{}': {}×{}", path.display(), image.width(), image.height());
    Ok(image)
}
