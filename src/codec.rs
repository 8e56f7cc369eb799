//! Format-preserving image decode and encode.
//!
//! Exactly two raster formats are supported: PNG and JPEG. The format is
//! detected from the byte content (magic bytes, never the file extension)
//! and preserved end-to-end - an image is always re-encoded in the format
//! it arrived in.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use thiserror::Error;

/// The two supported raster formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }
}

/// Errors from decoding or encoding image bytes.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Unsupported image format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Failed to decode image: {message}")]
    DecodeFailed { message: String },

    #[error("Failed to encode to {format}: {message}")]
    EncodeFailed {
        format: &'static str,
        message: String,
    },
}

/// Decode raw image bytes, returning the bitmap and its detected format.
///
/// Any detected format other than PNG or JPEG is rejected with
/// [`CodecError::UnsupportedFormat`] before decoding begins.
pub fn decode(data: &[u8]) -> Result<(DynamicImage, ImageKind), CodecError> {
    let format = image::guess_format(data).map_err(|e| CodecError::DecodeFailed {
        message: e.to_string(),
    })?;

    let kind = match format {
        ImageFormat::Png => ImageKind::Png,
        ImageFormat::Jpeg => ImageKind::Jpeg,
        other => {
            return Err(CodecError::UnsupportedFormat {
                format: format!("{:?}", other).to_lowercase(),
            })
        }
    };

    let bitmap = image::load_from_memory_with_format(data, format).map_err(|e| {
        CodecError::DecodeFailed {
            message: e.to_string(),
        }
    })?;

    Ok((bitmap, kind))
}

/// Encode an annotated canvas to bytes in the given format.
///
/// JPEG has no alpha channel, so the canvas is converted to RGB at encode
/// time; PNG keeps the alpha channel as-is.
pub fn encode(canvas: &RgbaImage, kind: ImageKind) -> Result<Vec<u8>, CodecError> {
    let mut buffer = Cursor::new(Vec::new());

    let result = match kind {
        ImageKind::Png => canvas.write_to(&mut buffer, ImageFormat::Png),
        ImageKind::Jpeg => rgba_to_rgb(canvas).write_to(&mut buffer, ImageFormat::Jpeg),
    };

    result.map_err(|e| CodecError::EncodeFailed {
        format: kind.as_str(),
        message: e.to_string(),
    })?;

    Ok(buffer.into_inner())
}

/// Drop the alpha channel of an RGBA canvas.
fn rgba_to_rgb(canvas: &RgbaImage) -> RgbImage {
    let mut rgb = RgbImage::new(canvas.width(), canvas.height());
    for (x, y, pixel) in canvas.enumerate_pixels() {
        rgb.put_pixel(x, y, image::Rgb([pixel[0], pixel[1], pixel[2]]));
    }
    rgb
}
