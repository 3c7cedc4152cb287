//! Runs the whole optimization pass over a project tree.
//!
//! Files are handled one at a time, in a fixed order. The first failure ends
//! the run: whatever was converted before it stays converted, and nothing
//! after it is touched.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::config::{
    COVER_MAX_WIDTH, COVER_WEBP_QUALITY, COVERS_DIR, ICON_PNG_QUALITY, ICON_TARGETS, PROJECT_ROOT,
};
use crate::core::{IconTarget, Savings};
use crate::report::Reporter;
use crate::utils::{ImageFormat, OptimizerResult, remove_file, sibling_with_format, sorted_file_names};

use super::optimizer::{compress_png, convert_to_webp};

/// Optimizes the cover artwork and icons of one project root.
#[derive(Debug, Clone)]
pub struct AssetOptimizer {
    root: PathBuf,
}

impl Default for AssetOptimizer {
    fn default() -> Self {
        Self::new(PROJECT_ROOT)
    }
}

impl AssetOptimizer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn covers_dir(&self) -> PathBuf {
        self.root.join(COVERS_DIR)
    }

    /// Converts covers, recompresses icons, then prints the total.
    pub fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> OptimizerResult<Savings> {
        info!("Optimizing assets under {}", self.root.display());
        let mut savings = Savings::new();

        self.optimize_covers(&mut savings, reporter)?;
        self.optimize_icons(ICON_TARGETS, &mut savings, reporter)?;

        reporter.total(&savings)?;
        info!("Processed {} files, {} bytes saved", savings.files(), savings.total_bytes());
        Ok(savings)
    }

    /// PNG → WebP for every `*.png` in the covers directory, deleting each
    /// PNG once its WebP is on disk.
    fn optimize_covers<W: Write>(
        &self,
        savings: &mut Savings,
        reporter: &mut Reporter<W>,
    ) -> OptimizerResult<()> {
        let covers_dir = self.covers_dir();
        if !covers_dir.exists() {
            debug!("No covers directory at {}, skipping", covers_dir.display());
            return Ok(());
        }

        reporter.covers_header()?;
        for name in sorted_file_names(&covers_dir, ImageFormat::PNG)? {
            let input_path = covers_dir.join(&name);
            let webp_path = sibling_with_format(&input_path, ImageFormat::PNG, ImageFormat::WebP);

            let result = convert_to_webp(&input_path, &webp_path, Some(COVER_MAX_WIDTH), COVER_WEBP_QUALITY)?;
            reporter.cover(&result)?;
            savings.record(&result);

            remove_file(&input_path)?;
        }

        Ok(())
    }

    /// In-place PNG recompression for each icon that exists.
    fn optimize_icons<W: Write>(
        &self,
        icons: &[IconTarget],
        savings: &mut Savings,
        reporter: &mut Reporter<W>,
    ) -> OptimizerResult<()> {
        reporter.icons_header()?;

        for icon in icons {
            let full_path = self.root.join(icon.rel_path);
            if !full_path.exists() {
                debug!("Icon {} not found, skipping", full_path.display());
                continue;
            }

            let result = compress_png(&full_path, Some(icon.max_width), ICON_PNG_QUALITY)?;
            reporter.icon(&result)?;
            savings.record(&result);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat as Codec, Rgb, RgbImage};
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn write_png(path: &Path, width: u32, height: u32) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 7]))
            .save_with_format(path, Codec::Png)
            .unwrap();
    }

    fn run(optimizer: &AssetOptimizer) -> (OptimizerResult<Savings>, String) {
        let mut reporter = Reporter::new(Vec::new());
        let result = optimizer.run(&mut reporter);
        (result, String::from_utf8(reporter.into_inner()).unwrap())
    }

    #[rstest]
    fn empty_root_prints_only_icons_header_and_total() {
        let root = TempDir::new().unwrap();

        let (savings, text) = run(&AssetOptimizer::new(root.path()));

        assert_eq!(Savings::new(), savings.unwrap());
        assert_eq!(
            "\n=== Optimizing app icons ===\n\n=== Total saved: 0KB (0.0MB) ===\n",
            text
        );
    }

    #[rstest]
    fn missing_icons_do_not_stop_the_rest() {
        let root = TempDir::new().unwrap();
        let favicon = root.path().join("assets/images/favicon.png");
        write_png(&favicon, 128, 128);

        let (savings, text) = run(&AssetOptimizer::new(root.path()));

        assert_eq!(1, savings.unwrap().files());
        assert_eq!(1, text.matches("  PNG: ").count());
        let decoded = image::open(&favicon).unwrap();
        assert_eq!((64, 64), (decoded.width(), decoded.height()));
    }

    #[rstest]
    fn non_png_cover_files_are_left_alone() {
        let root = TempDir::new().unwrap();
        let covers = root.path().join(COVERS_DIR);
        write_png(&covers.join("a.png"), 10, 10);
        fs::write(covers.join("README.txt"), b"covers").unwrap();
        fs::write(covers.join("shout.PNG"), b"not touched").unwrap();

        run(&AssetOptimizer::new(root.path())).0.unwrap();

        assert!(covers.join("a.webp").exists());
        assert!(!covers.join("a.png").exists());
        assert!(covers.join("README.txt").exists());
        assert!(covers.join("shout.PNG").exists());
    }

    #[rstest]
    fn bare_suffix_cover_is_converted() {
        let root = TempDir::new().unwrap();
        let covers = root.path().join(COVERS_DIR);
        write_png(&covers.join(".png"), 8, 8);
        let favicon = root.path().join("assets/images/favicon.png");
        write_png(&favicon, 128, 64);

        let (savings, text) = run(&AssetOptimizer::new(root.path()));

        assert_eq!(2, savings.unwrap().files());
        assert!(!covers.join(".png").exists());
        assert!(!covers.join(".png.webp").exists());
        let webp_bytes = fs::read(covers.join(".webp")).unwrap();
        let decoded = webp::Decoder::new(&webp_bytes).decode().unwrap();
        assert_eq!((8, 8), (decoded.width(), decoded.height()));
        assert!(text.contains("  WebP: .png | "));
        let icon = image::open(&favicon).unwrap();
        assert_eq!((64, 32), (icon.width(), icon.height()));
    }

    #[rstest]
    fn default_points_at_the_project_root() {
        assert_eq!(Path::new(PROJECT_ROOT), AssetOptimizer::default().root());
    }
}
