//! Canvas construction for banner annotation.
//!
//! Builds the enlarged output canvas: a solid banner strip above and below
//! the source image, with the source composited unmodified in between.

use image::{imageops, DynamicImage, Rgba, RgbaImage};

use super::{BannerError, BannerSpec};

/// Build the output canvas for a banner annotation.
///
/// The canvas is `source.width()` wide and `source.height() + 2 *
/// spec.banner_height` tall. The top and bottom `banner_height` rows are
/// filled with the fully opaque background color; the source is copied
/// pixel-for-pixel into the band between them, preserving its alpha
/// channel.
///
/// # Errors
///
/// Returns [`BannerError::InvalidDimension`] if the banner height is zero
/// or the source has zero width or height.
pub fn build_canvas(source: &DynamicImage, spec: &BannerSpec) -> Result<RgbaImage, BannerError> {
    let (width, height) = (source.width(), source.height());

    if spec.banner_height == 0 || width == 0 || height == 0 {
        return Err(BannerError::invalid_dimension(
            width,
            height,
            spec.banner_height,
        ));
    }

    let out_height = height + 2 * spec.banner_height;
    let background = Rgba([
        spec.background.r,
        spec.background.g,
        spec.background.b,
        255,
    ]);

    let mut canvas = RgbaImage::new(width, out_height);

    // Banner fills are unconditional overwrites, not blends.
    fill_rows(&mut canvas, 0, spec.banner_height, background);
    fill_rows(
        &mut canvas,
        out_height - spec.banner_height,
        out_height,
        background,
    );

    // Straight copy of the source band; alpha is preserved as-is.
    imageops::replace(&mut canvas, &source.to_rgba8(), 0, spec.banner_height as i64);

    Ok(canvas)
}

/// Fill the row range `[y_start, y_end)` with a solid color.
fn fill_rows(canvas: &mut RgbaImage, y_start: u32, y_end: u32, color: Rgba<u8>) {
    for y in y_start..y_end {
        for x in 0..canvas.width() {
            canvas.put_pixel(x, y, color);
        }
    }
}
