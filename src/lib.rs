// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod report;
pub mod processing;

// Public exports for external consumers
pub use crate::core::{IconTarget, OptimizationResult, Savings};
pub use processing::{AssetOptimizer, compress_png, convert_to_webp};
pub use report::Reporter;
pub use utils::{OptimizerError, OptimizerResult};
