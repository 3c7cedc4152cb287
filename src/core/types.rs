//! Core types for optimization targets and results.

use std::path::PathBuf;

/// An icon that is recompressed in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    /// Path relative to the project root
    pub rel_path: &'static str,
    /// Icons wider than this are downscaled
    pub max_width: u32,
}

impl IconTarget {
    pub const fn new(rel_path: &'static str, max_width: u32) -> Self {
        Self { rel_path, max_width }
    }
}

/// Result of an image optimization operation.
///
/// Contains the original and optimized file information along with
/// compression statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// Path to the original input file
    pub original_path: PathBuf,
    /// Path to the optimized output file
    pub optimized_path: PathBuf,
    /// Original file size in bytes
    pub original_size: u64,
    /// Optimized file size in bytes
    pub optimized_size: u64,
    /// Bytes saved (can be negative if file grew)
    pub saved_bytes: i64,
    /// Width of the written image
    pub width: u32,
    /// Height of the written image
    pub height: u32,
    /// Compression ratio as a percentage
    pub compression_ratio: f64,
}

impl OptimizationResult {
    pub fn new(
        original_path: PathBuf,
        optimized_path: PathBuf,
        original_size: u64,
        optimized_size: u64,
        (width, height): (u32, u32),
    ) -> Self {
        let saved_bytes = original_size as i64 - optimized_size as i64;
        let compression_ratio = if original_size > 0 {
            saved_bytes as f64 / original_size as f64 * 100.0
        } else {
            0.0
        };

        Self {
            original_path,
            optimized_path,
            original_size,
            optimized_size,
            saved_bytes,
            width,
            height,
            compression_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2048, 512, 1536, 75.0)]
    #[case(1000, 1500, -500, -50.0)]
    #[case(0, 10, -10, 0.0)]
    fn saved_bytes_are_not_clamped(
        #[case] original: u64,
        #[case] optimized: u64,
        #[case] saved: i64,
        #[case] ratio: f64,
    ) {
        let result = OptimizationResult::new(
            PathBuf::from("a.png"),
            PathBuf::from("a.webp"),
            original,
            optimized,
            (1, 1),
        );
        assert_eq!(saved, result.saved_bytes);
        assert_eq!(ratio, result.compression_ratio);
    }
}
