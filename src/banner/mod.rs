//! Banner compositor for stamping classification banners onto images.
//!
//! Given a decoded bitmap and a [`BannerSpec`], [`annotate`] produces a new
//! bitmap with a solid banner strip above and below the source image and
//! the classification label drawn on both strips.
//!
//! # Pipeline
//!
//! 1. **Canvas builder** - enlarge the canvas, fill both banner regions,
//!    composite the source in between ([`canvas::build_canvas`])
//! 2. **Text layout** - measure the label and resolve baseline anchors for
//!    the placement mode ([`layout::compute_label_positions`])
//! 3. **Label renderer** - draw the label at each anchor
//!    ([`render::draw_label`])
//!
//! The operation is a pure function of its inputs: it allocates and mutates
//! its own output buffer, performs no I/O, and holds no state across calls.
//! Callers processing many images construct one [`LabelFont`] up front and
//! share it; each call returns its own buffer, so invocations may run on
//! separate threads without coordination.

pub mod canvas;
pub mod error;
pub mod font;
pub mod layout;
pub mod render;
pub mod spec;

use image::{DynamicImage, RgbaImage};

// Re-export main types for convenience
pub use canvas::build_canvas;
pub use error::BannerError;
pub use font::{LabelFont, LABEL_SIZE_PX};
pub use layout::{
    compute_label_positions, Align, LabelAnchor, BASELINE_NUDGE_PX, CORNER_MARGIN_RATIO,
};
pub use render::draw_label;
pub use spec::{BannerSpec, Placement, Rgb};

/// Stamp classification banners onto `source`.
///
/// Builds the enlarged canvas, resolves label anchors for the spec's
/// placement mode, and draws the label at each anchor. Returns the
/// annotated bitmap.
///
/// # Errors
///
/// Returns [`BannerError::InvalidDimension`] if the banner height is zero
/// or the source image is degenerate.
pub fn annotate(
    source: &DynamicImage,
    spec: &BannerSpec,
    font: &LabelFont,
) -> Result<RgbaImage, BannerError> {
    let mut canvas = build_canvas(source, spec)?;

    let anchors = compute_label_positions(
        &spec.label,
        font,
        source.width(),
        spec.banner_height,
        canvas.height(),
        spec.placement,
    );

    for anchor in anchors {
        draw_label(&mut canvas, &spec.label, anchor, spec.text_color, font);
    }

    Ok(canvas)
}
