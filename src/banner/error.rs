//! Banner annotation error types.
//!
//! Defines errors that can occur while building the banner canvas and
//! rendering label text.

use std::fmt;

/// Errors that can occur during banner annotation.
#[derive(Debug, Clone)]
pub enum BannerError {
    /// Banner height is zero or the source image is degenerate
    InvalidDimension {
        width: u32,
        height: u32,
        banner_height: u32,
    },

    /// Font data is missing or unparsable
    FontLoad { message: String },
}

impl fmt::Display for BannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BannerError::InvalidDimension {
                width,
                height,
                banner_height,
            } => {
                write!(
                    f,
                    "Invalid dimensions: source {}x{} with banner height {}",
                    width, height, banner_height
                )
            }
            BannerError::FontLoad { message } => {
                write!(f, "Failed to load font: {}", message)
            }
        }
    }
}

impl std::error::Error for BannerError {}

impl BannerError {
    /// Helper constructors for common error patterns
    pub fn invalid_dimension(width: u32, height: u32, banner_height: u32) -> Self {
        BannerError::InvalidDimension {
            width,
            height,
            banner_height,
        }
    }

    pub fn font_load(message: impl Into<String>) -> Self {
        BannerError::FontLoad {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_display() {
        let err = BannerError::invalid_dimension(100, 50, 0);
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: source 100x50 with banner height 0"
        );
    }

    #[test]
    fn test_font_load_display() {
        let err = BannerError::font_load("truncated table directory");
        assert_eq!(
            err.to_string(),
            "Failed to load font: truncated table directory"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BannerError>();
    }
}
