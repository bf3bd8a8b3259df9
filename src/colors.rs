use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView, Rgb};
use palette::Srgb;
use std::path::Path;

/// Open and decode an image file, keeping the path in the error chain
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    image::open(path).with_context(|| format!("Failed to load image {}", path.display()))
}

/// Number of color channels per pixel (1 for gray, 3 for RGB, 4 for RGBA)
pub fn channel_count(image: &DynamicImage) -> u8 {
    image.color().channel_count()
}

/// Read the color of column 0 for every row, top to bottom.
///
/// Pixels are converted to 8-bit RGB first, so gray images give
/// `r == g == b` and any alpha channel is dropped.
pub fn column_colors(image: &DynamicImage) -> Vec<Srgb<u8>> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 {
        return Vec::new();
    }

    (0..height)
        .map(|y| {
            let Rgb([r, g, b]) = *rgb.get_pixel(0, y);
            Srgb::new(r, g, b)
        })
        .collect()
}

/// Image size as (width, height)
pub fn dimensions(image: &DynamicImage) -> (u32, u32) {
    image.dimensions()
}
