//! Banner specification types.
//!
//! A [`BannerSpec`] fully describes the banners to stamp onto one image:
//! colors, label text, banner height, and label placement. Presets and
//! custom flag handling live at the CLI boundary; by the time a spec
//! reaches the core it is a single concrete value.

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// White color.
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Black color.
    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }
}

/// Where label text is drawn within the banner pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// One label per banner, horizontally centered.
    #[default]
    Center,
    /// Two labels per banner, left- and right-aligned.
    Corners,
}

impl Placement {
    /// Parse a placement flag value.
    ///
    /// Unrecognized values fall back to [`Placement::Center`], the documented
    /// default. This never fails.
    pub fn from_flag(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "corners" => Placement::Corners,
            _ => Placement::Center,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Corners => "corners",
        }
    }
}

/// Full description of the banners to stamp onto one image.
///
/// Invariants: `label` is non-empty and `banner_height >= 1`. The CLI
/// boundary guarantees both before the spec enters the core; the canvas
/// builder re-checks the height together with the source dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerSpec {
    /// Banner background color
    pub background: Rgb,

    /// Label text color
    pub text_color: Rgb,

    /// Label text drawn on each banner
    pub label: String,

    /// Height of each banner strip in pixels
    pub banner_height: u32,

    /// Label placement mode
    pub placement: Placement,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_color_helpers() {
        assert_eq!(Rgb::white(), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::black(), Rgb::new(0, 0, 0));
    }

    #[rstest]
    #[case("center", Placement::Center)]
    #[case("corners", Placement::Corners)]
    #[case("CORNERS", Placement::Corners)]
    #[case("Center", Placement::Center)]
    fn test_placement_from_flag(#[case] value: &str, #[case] expected: Placement) {
        assert_eq!(Placement::from_flag(value), expected);
    }

    // Test: Unknown placement values behave identically to center mode
    #[rstest]
    #[case("")]
    #[case("diagonal")]
    #[case("top-left")]
    #[case("123")]
    fn test_placement_unknown_falls_back_to_center(#[case] value: &str) {
        assert_eq!(Placement::from_flag(value), Placement::Center);
    }

    #[test]
    fn test_placement_as_str_round_trip() {
        assert_eq!(Placement::from_flag(Placement::Center.as_str()), Placement::Center);
        assert_eq!(Placement::from_flag(Placement::Corners.as_str()), Placement::Corners);
    }
}
