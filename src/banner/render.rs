//! Label rendering onto the banner canvas.
//!
//! Draws label text glyph-by-glyph at a resolved baseline anchor, blending
//! anti-aliased glyph coverage against the banner background.

use ab_glyph::{Font, ScaleFont};
use image::{Rgba, RgbaImage};

use super::{font::LabelFont, layout::LabelAnchor, Rgb};

/// Draw `text` onto `canvas` starting at the baseline anchor.
///
/// Glyphs advance left-to-right using the font's natural advance widths
/// plus its own kerning. The color is applied uniformly to every glyph.
/// Empty text is a no-op; characters without an outline in the font (e.g.
/// whitespace or unsupported codepoints) contribute their advance and draw
/// nothing. Pixels falling outside the canvas are clipped.
pub fn draw_label(
    canvas: &mut RgbaImage,
    text: &str,
    anchor: LabelAnchor,
    color: Rgb,
    font: &LabelFont,
) {
    if text.is_empty() {
        return;
    }

    let scale = font.scale();
    let scaled = font.font().as_scaled(scale);

    let baseline_y = anchor.y as f32;
    let mut cursor_x = anchor.x as f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled.glyph_id(c);

        if let Some(prev) = prev_glyph {
            cursor_x += scaled.kern(prev, glyph_id);
        }

        let glyph = glyph_id.with_scale_and_position(scale, ab_glyph::point(cursor_x, baseline_y));

        if let Some(outlined) = font.font().outline_glyph(glyph) {
            let bounds = outlined.px_bounds();

            outlined.draw(|px, py, coverage| {
                let x = px as i32 + bounds.min.x as i32;
                let y = py as i32 + bounds.min.y as i32;

                if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
                    let ink = Rgba([color.r, color.g, color.b, (coverage * 255.0) as u8]);

                    // Blend with the existing pixel (for anti-aliasing)
                    let existing = canvas.get_pixel(x as u32, y as u32);
                    let blended = blend_pixels(*existing, ink);
                    canvas.put_pixel(x as u32, y as u32, blended);
                }
            });
        }

        cursor_x += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }
}

/// Blend two RGBA pixels using the Porter-Duff "over" operator.
fn blend_pixels(bottom: Rgba<u8>, top: Rgba<u8>) -> Rgba<u8> {
    let top_alpha = top[3] as f32 / 255.0;
    let bottom_alpha = bottom[3] as f32 / 255.0;

    let out_alpha = top_alpha + bottom_alpha * (1.0 - top_alpha);

    if out_alpha < 0.001 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |t: u8, b: u8| -> u8 {
        let t = t as f32 / 255.0;
        let b = b as f32 / 255.0;
        let result = (t * top_alpha + b * bottom_alpha * (1.0 - top_alpha)) / out_alpha;
        (result * 255.0).clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend(top[0], bottom[0]),
        blend(top[1], bottom[1]),
        blend(top[2], bottom[2]),
        (out_alpha * 255.0).round() as u8,
    ])
}
