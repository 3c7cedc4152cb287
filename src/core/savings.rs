use crate::core::OptimizationResult;

const KB: i64 = 1024;
const MB: i64 = KB * 1024;

/// Running total of bytes saved during one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Savings {
    total_bytes: i64,
    files: usize,
}

impl Savings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &OptimizationResult) {
        self.add(result.saved_bytes);
    }

    /// Adds one file's savings; negative values shrink the total.
    pub fn add(&mut self, saved_bytes: i64) {
        self.total_bytes += saved_bytes;
        self.files += 1;
    }

    pub fn total_bytes(&self) -> i64 {
        self.total_bytes
    }

    pub fn files(&self) -> usize {
        self.files
    }

    /// Whole kilobytes, floored (a 1-byte loss is -1 KB).
    pub fn total_kb(&self) -> i64 {
        floor_kb(self.total_bytes)
    }

    pub fn total_mb(&self) -> f64 {
        self.total_bytes as f64 / MB as f64
    }
}

/// Floor division by 1024, rounding toward negative infinity.
pub fn floor_kb(bytes: i64) -> i64 {
    bytes.div_euclid(KB)
}
