//! Console report written while assets are processed.
//!
//! Sizes are shown in whole kilobytes, floored, so a file that grew by a few
//! bytes shows up as `-1KB` saved.

use std::io::{self, Write};
use std::path::Path;

use crate::core::{OptimizationResult, Savings, floor_kb};
use crate::utils::{OptimizerError, OptimizerResult};

pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn covers_header(&mut self) -> OptimizerResult<()> {
        self.line(format_args!("=== Optimizing cover images (PNG → WebP) ==="))
    }

    pub fn icons_header(&mut self) -> OptimizerResult<()> {
        self.line(format_args!("\n=== Optimizing app icons ==="))
    }

    /// Covers are listed by file name only.
    pub fn cover(&mut self, result: &OptimizationResult) -> OptimizerResult<()> {
        let name = file_name(&result.original_path);
        self.line(format_args!("  WebP: {name} | {}", sizes(result)))
    }

    /// Icons are listed with their full path.
    pub fn icon(&mut self, result: &OptimizationResult) -> OptimizerResult<()> {
        let path = result.original_path.display();
        self.line(format_args!("  PNG: {path} | {}", sizes(result)))
    }

    pub fn total(&mut self, savings: &Savings) -> OptimizerResult<()> {
        self.line(format_args!(
            "\n=== Total saved: {}KB ({:.1}MB) ===",
            savings.total_kb(),
            savings.total_mb()
        ))
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) -> OptimizerResult<()> {
        writeln!(self.out, "{args}")
            .and_then(|_| self.out.flush())
            .map_err(OptimizerError::Report)
    }
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

fn sizes(result: &OptimizationResult) -> String {
    format!(
        "{}KB → {}KB (saved {}KB)",
        floor_kb(result.original_size as i64),
        floor_kb(result.optimized_size as i64),
        floor_kb(result.saved_bytes)
    )
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    fn result(original: &str, original_size: u64, optimized_size: u64) -> OptimizationResult {
        let original = PathBuf::from(original);
        OptimizationResult::new(original.clone(), original, original_size, optimized_size, (1, 1))
    }

    fn output(f: impl FnOnce(&mut Reporter<Vec<u8>>)) -> String {
        let mut reporter = Reporter::new(Vec::new());
        f(&mut reporter);
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[rstest]
    fn cover_lines_use_the_file_name() {
        let text = output(|r| r.cover(&result("/p/assets/covers/a.png", 300 * 1024, 40 * 1024 + 5)).unwrap());
        assert_eq!("  WebP: a.png | 300KB → 40KB (saved 259KB)\n", text);
    }

    #[rstest]
    fn icon_lines_use_the_full_path() {
        let text = output(|r| r.icon(&result("/p/assets/images/icon.png", 2000, 2100)).unwrap());
        assert_eq!("  PNG: /p/assets/images/icon.png | 1KB → 2KB (saved -1KB)\n", text);
    }

    #[rstest]
    #[case(0, "\n=== Total saved: 0KB (0.0MB) ===\n")]
    #[case(5 * 1024 * 1024 + 300 * 1024, "\n=== Total saved: 5420KB (5.3MB) ===\n")]
    #[case(-2048, "\n=== Total saved: -2KB (-0.0MB) ===\n")]
    fn total_line(#[case] bytes: i64, #[case] expected: &str) {
        let mut savings = Savings::new();
        savings.add(bytes);
        assert_eq!(expected, output(|r| r.total(&savings).unwrap()));
    }

    #[rstest]
    fn headers() {
        let text = output(|r| {
            r.covers_header().unwrap();
            r.icons_header().unwrap();
        });
        assert_eq!(
            "=== Optimizing cover images (PNG → WebP) ===\n\n=== Optimizing app icons ===\n",
            text
        );
    }
}
