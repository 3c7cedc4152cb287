//! Core types and compiled-in settings.
//!
//! - [`config`]: project root, thresholds and the icon table
//! - [`OptimizationResult`]: outcome of optimizing one file
//! - [`Savings`]: running total for one run

pub mod config;
mod savings;
mod types;

pub use savings::{Savings, floor_kb};
pub use types::{IconTarget, OptimizationResult};
