//! Label position calculation.
//!
//! Resolves where label text is drawn on the banner pair, based on the
//! measured text width, banner geometry, and placement mode.
//!
//! The vertical baseline nudge and the corner margin ratio are empirical
//! constants carried over unchanged; adjusting them changes the visual
//! output of every stamped image.

use super::{font::LabelFont, Placement};

/// Baseline offset below the vertical center of a banner, in pixels.
pub const BASELINE_NUDGE_PX: i32 = 10;

/// Horizontal corner margin as a fraction of the image width.
pub const CORNER_MARGIN_RATIO: f32 = 0.05;

/// Horizontal alignment of a resolved label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Centered,
    Left,
    Right,
}

/// A resolved baseline anchor for one label drawing operation.
///
/// `x` and `y` locate the start of the text baseline. Coordinates may fall
/// outside the canvas when the text is wider than the image; the renderer
/// clips per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelAnchor {
    pub x: i32,
    pub y: i32,
    pub align: Align,
}

impl LabelAnchor {
    pub fn new(x: i32, y: i32, align: Align) -> Self {
        Self { x, y, align }
    }
}

/// Compute the baseline anchors for drawing `text` on both banners.
///
/// Center mode yields two anchors (top, bottom); corners mode yields four
/// (top-left, top-right, bottom-left, bottom-right), in that order.
///
/// Both banners share the same in-banner vertical anchor,
/// `banner_height / 2 + BASELINE_NUDGE_PX`; the bottom banner's anchor is
/// shifted down by `output_height - banner_height`.
pub fn compute_label_positions(
    text: &str,
    font: &LabelFont,
    image_width: u32,
    banner_height: u32,
    output_height: u32,
    placement: Placement,
) -> Vec<LabelAnchor> {
    let text_width = font.measure(text) as i32;
    let width = image_width as i32;

    let top_y = (banner_height / 2) as i32 + BASELINE_NUDGE_PX;
    let bottom_y = top_y + (output_height as i32 - banner_height as i32);

    match placement {
        Placement::Center => {
            let x = width / 2 - text_width / 2;
            vec![
                LabelAnchor::new(x, top_y, Align::Centered),
                LabelAnchor::new(x, bottom_y, Align::Centered),
            ]
        }
        Placement::Corners => {
            // Labels may overlap on narrow images; that is accepted, not an
            // error.
            let margin = (CORNER_MARGIN_RATIO * image_width as f32).round() as i32;
            let left_x = margin;
            let right_x = width - margin - text_width;
            vec![
                LabelAnchor::new(left_x, top_y, Align::Left),
                LabelAnchor::new(right_x, top_y, Align::Right),
                LabelAnchor::new(left_x, bottom_y, Align::Left),
                LabelAnchor::new(right_x, bottom_y, Align::Right),
            ]
        }
    }
}
