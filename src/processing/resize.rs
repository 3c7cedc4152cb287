//! Width-constrained downscaling.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

/// Dimensions after constraining `width` to `max_width`, or `None` when the
/// image already fits.
///
/// Height scales by `max_width / width` and is floored. Images are never
/// enlarged.
pub fn constrained_dimensions(width: u32, height: u32, max_width: Option<u32>) -> Option<(u32, u32)> {
    let max_width = max_width.filter(|&w| w > 0)?;
    if width <= max_width {
        return None;
    }

    let new_height = u64::from(height) * u64::from(max_width) / u64::from(width);
    // A 1px-tall strip must not collapse to nothing
    let new_height = (new_height as u32).max(1);
    Some((max_width, new_height))
}

/// Downscales `image` so it is at most `max_width` wide, using Lanczos3.
///
/// Returns the image unchanged when no limit is set or it already fits.
pub fn constrain_width(image: DynamicImage, max_width: Option<u32>) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    match constrained_dimensions(width, height, max_width) {
        Some((new_width, new_height)) => {
            debug!("Resizing {width}×{height} → {new_width}×{new_height}");
            image.resize_exact(new_width, new_height, FilterType::Lanczos3)
        }
        None => image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(600, 800, Some(540), Some((540, 720)))]
    #[case(1000, 333, Some(512), Some((512, 170)))]
    #[case(3, 1, Some(2), Some((2, 1)))]
    #[case(4000, 1, Some(64), Some((64, 1)))]
    #[case(400, 300, Some(540), None)]
    #[case(540, 300, Some(540), None)]
    #[case(4000, 3000, None, None)]
    #[case(4000, 3000, Some(0), None)]
    fn dimensions(
        #[case] width: u32,
        #[case] height: u32,
        #[case] max_width: Option<u32>,
        #[case] expected: Option<(u32, u32)>,
    ) {
        assert_eq!(expected, constrained_dimensions(width, height, max_width));
    }

    #[rstest]
    fn resamples_wide_images() {
        let image = DynamicImage::new_rgba8(300, 100);
        let resized = constrain_width(image, Some(150));
        assert_eq!((150, 50), (resized.width(), resized.height()));
    }

    #[rstest]
    fn leaves_narrow_images_alone() {
        let image = DynamicImage::new_rgb8(100, 80);
        let same = constrain_width(image, Some(150));
        assert_eq!((100, 80), (same.width(), same.height()));
    }
}
