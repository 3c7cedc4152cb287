//! Image processing: resizing, encoding and the optimization pass.
//!
//! - [`AssetOptimizer`]: walks a project root and applies the transforms
//! - [`compress_png`] / [`convert_to_webp`]: the per-file transforms

mod executor;
mod formats;
mod optimizer;
mod resize;

pub use executor::AssetOptimizer;
pub use optimizer::{compress_png, convert_to_webp};
pub use resize::{constrain_width, constrained_dimensions};
