//! Compiled-in locations and thresholds.
//!
//! Nothing here is read from the environment or the command line.

use crate::core::IconTarget;

/// Root of the app project whose assets get optimized.
pub const PROJECT_ROOT: &str = "/home/ubuntu/mv-studio-pro";

/// Cover artwork directory, relative to the project root.
pub const COVERS_DIR: &str = "assets/covers";

/// Covers wider than this are downscaled before WebP encoding.
pub const COVER_MAX_WIDTH: u32 = 540;

/// Lossy WebP quality for covers (0-100).
pub const COVER_WEBP_QUALITY: u8 = 75;

/// Quality passed along with icon recompression.
///
/// PNG output is lossless so the encoder never looks at this value.
pub const ICON_PNG_QUALITY: u8 = 85;

/// Icons recompressed in place, with their maximum widths.
pub const ICON_TARGETS: &[IconTarget] = &[
    IconTarget::new("assets/images/icon.png", 512),
    IconTarget::new("assets/images/splash-icon.png", 256),
    IconTarget::new("assets/images/android-icon-foreground.png", 256),
    IconTarget::new("assets/images/favicon.png", 64),
];
