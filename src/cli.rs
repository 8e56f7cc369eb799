//! Command-line surface and classification preset resolution.
//!
//! The classification flag selects one of the predefined banner bundles or
//! `custom`, which builds the banner from the text and color flags.
//! Either way, resolution happens exactly once here: the annotation core
//! only ever sees a single concrete [`BannerSpec`] and never branches on
//! which preset produced it.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::banner::{BannerSpec, Placement, Rgb};

/// Stamp classification banners onto PNG and JPEG images.
#[derive(Parser, Debug)]
#[command(name = "bannerstamp")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "dir"])))]
pub struct Args {
    /// Single image file to classify
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Directory containing images to classify (non-recursive)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Classification preset, or "custom" to use the text and color flags
    #[arg(short, long, value_enum)]
    pub classification: Classification,

    /// Output directory for classified images
    #[arg(short, long, default_value = "bannerstamp_output")]
    pub output: PathBuf,

    /// Banner height in pixels
    #[arg(long, default_value_t = 60)]
    pub height: u32,

    /// Location of banner text: "center" or "corners" (unknown falls back to center)
    #[arg(short = 'l', long, default_value = "center")]
    pub location: String,

    /// Custom banner text (required with -c custom)
    #[arg(long, required_if_eq("classification", "custom"))]
    pub text: Option<String>,

    /// Comma-separated R,G,B background color for custom banners
    #[arg(long, default_value = "255,0,0", value_parser = parse_rgb)]
    pub background_color: Rgb,

    /// Comma-separated R,G,B text color for custom banners
    #[arg(long, default_value = "255,255,255", value_parser = parse_rgb)]
    pub text_color: Rgb,
}

/// Predefined classification banner bundles, plus the custom escape hatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Classification {
    /// Green banner, black "CUI" label
    Cui,
    /// Red banner, white "SECRET" label
    Secret,
    /// Black banner, white "UNCLASSIFIED" label
    Unclassed,
    /// Caller-supplied text and colors
    Custom,
}

/// Resolve the parsed arguments into one concrete banner specification.
///
/// Presets carry their own colors and label; `custom` takes all three from
/// the flags. The returned spec upholds the core invariants: non-empty
/// label and banner height of at least one pixel.
pub fn resolve_spec(args: &Args) -> Result<BannerSpec, String> {
    if args.height == 0 {
        return Err("banner height must be at least 1 pixel".to_string());
    }

    let placement = Placement::from_flag(&args.location);

    let spec = match args.classification {
        Classification::Cui => BannerSpec {
            background: Rgb::new(0, 255, 0),
            text_color: Rgb::black(),
            label: "CUI".to_string(),
            banner_height: args.height,
            placement,
        },
        Classification::Secret => BannerSpec {
            background: Rgb::new(255, 0, 0),
            text_color: Rgb::white(),
            label: "SECRET".to_string(),
            banner_height: args.height,
            placement,
        },
        Classification::Unclassed => BannerSpec {
            background: Rgb::black(),
            text_color: Rgb::white(),
            label: "UNCLASSIFIED".to_string(),
            banner_height: args.height,
            placement,
        },
        Classification::Custom => {
            let label = args.text.clone().unwrap_or_default();
            if label.is_empty() {
                return Err("custom banner text must not be empty".to_string());
            }
            BannerSpec {
                background: args.background_color,
                text_color: args.text_color,
                label,
                banner_height: args.height,
                placement,
            }
        }
    };

    Ok(spec)
}

/// Parse a comma-separated `R,G,B` color triple.
pub fn parse_rgb(value: &str) -> Result<Rgb, String> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return Err(format!(
            "invalid color format (expected \"R,G,B\"): {}",
            value
        ));
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let n: i64 = part.trim().parse().map_err(|_| {
            format!("invalid color format (expected \"R,G,B\"): {}", value)
        })?;
        if !(0..=255).contains(&n) {
            return Err("invalid color value, each channel must be between 0 and 255".to_string());
        }
        *slot = n as u8;
    }

    Ok(Rgb::new(channels[0], channels[1], channels[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse_args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).unwrap()
    }

    #[rstest]
    #[case("0,0,0", Rgb::new(0, 0, 0))]
    #[case("255,255,255", Rgb::new(255, 255, 255))]
    #[case("255, 255, 0", Rgb::new(255, 255, 0))]
    #[case("12,34,56", Rgb::new(12, 34, 56))]
    fn test_parse_rgb_valid(#[case] value: &str, #[case] expected: Rgb) {
        assert_eq!(parse_rgb(value).unwrap(), expected);
    }

    #[rstest]
    #[case("255,0")]
    #[case("255,0,0,0")]
    #[case("red,green,blue")]
    #[case("")]
    #[case("256,0,0")]
    #[case("-1,0,0")]
    fn test_parse_rgb_invalid(#[case] value: &str) {
        assert!(parse_rgb(value).is_err());
    }

    #[test]
    fn test_file_and_dir_are_mutually_exclusive() {
        let result =
            Args::try_parse_from(["bannerstamp", "-f", "a.png", "-d", "imgs", "-c", "cui"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_one_of_file_or_dir_is_required() {
        let result = Args::try_parse_from(["bannerstamp", "-c", "cui"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_requires_text() {
        let result = Args::try_parse_from(["bannerstamp", "-f", "a.png", "-c", "custom"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let args = parse_args(&["bannerstamp", "-f", "a.png", "-c", "cui"]);
        assert_eq!(args.height, 60);
        assert_eq!(args.location, "center");
        assert_eq!(args.output, PathBuf::from("bannerstamp_output"));
        assert_eq!(args.background_color, Rgb::new(255, 0, 0));
        assert_eq!(args.text_color, Rgb::white());
    }

    #[test]
    fn test_presets_resolve() {
        let args = parse_args(&["bannerstamp", "-f", "a.png", "-c", "secret"]);
        let spec = resolve_spec(&args).unwrap();

        assert_eq!(spec.background, Rgb::new(255, 0, 0));
        assert_eq!(spec.text_color, Rgb::white());
        assert_eq!(spec.label, "SECRET");
        assert_eq!(spec.banner_height, 60);
        assert_eq!(spec.placement, Placement::Center);
    }

    #[test]
    fn test_unclassed_resolves() {
        let args = parse_args(&["bannerstamp", "-d", "imgs", "-c", "unclassed"]);
        let spec = resolve_spec(&args).unwrap();

        assert_eq!(spec.background, Rgb::black());
        assert_eq!(spec.label, "UNCLASSIFIED");
    }

    #[test]
    fn test_custom_resolves_from_flags() {
        let args = parse_args(&[
            "bannerstamp",
            "-f",
            "a.png",
            "-c",
            "custom",
            "--text",
            "SENSITIVE",
            "--background-color",
            "255,255,0",
            "--text-color",
            "0,0,0",
        ]);
        let spec = resolve_spec(&args).unwrap();

        assert_eq!(spec.background, Rgb::new(255, 255, 0));
        assert_eq!(spec.text_color, Rgb::black());
        assert_eq!(spec.label, "SENSITIVE");
    }

    // Test: A custom spec carrying a preset's field values is
    // indistinguishable from the preset
    #[test]
    fn test_custom_matching_preset_is_identical() {
        let preset = resolve_spec(&parse_args(&["bannerstamp", "-f", "a.png", "-c", "cui"]))
            .unwrap();
        let custom = resolve_spec(&parse_args(&[
            "bannerstamp",
            "-f",
            "a.png",
            "-c",
            "custom",
            "--text",
            "CUI",
            "--background-color",
            "0,255,0",
            "--text-color",
            "0,0,0",
        ]))
        .unwrap();

        assert_eq!(preset, custom);
    }

    #[test]
    fn test_custom_empty_text_rejected() {
        let args = parse_args(&[
            "bannerstamp",
            "-f",
            "a.png",
            "-c",
            "custom",
            "--text",
            "",
        ]);
        assert!(resolve_spec(&args).is_err());
    }

    #[test]
    fn test_zero_height_rejected() {
        let args = parse_args(&["bannerstamp", "-f", "a.png", "-c", "cui", "--height", "0"]);
        assert!(resolve_spec(&args).is_err());
    }

    #[test]
    fn test_unknown_location_falls_back_to_center() {
        let args = parse_args(&[
            "bannerstamp",
            "-f",
            "a.png",
            "-c",
            "cui",
            "-l",
            "diagonal",
        ]);
        let spec = resolve_spec(&args).unwrap();
        assert_eq!(spec.placement, Placement::Center);
    }

    #[test]
    fn test_corners_location() {
        let args = parse_args(&["bannerstamp", "-f", "a.png", "-c", "cui", "-l", "corners"]);
        let spec = resolve_spec(&args).unwrap();
        assert_eq!(spec.placement, Placement::Corners);
    }
}
