//! Consumer-side parsing of theme values.
//!
//! The registry stores values verbatim, so anything that draws with them
//! parses here: colors into [`Rgba`], the `cursorType` token into
//! [`CursorType`], font shorthands into [`FontSpec`], and `%a` alpha
//! placeholders into concrete opacities.

/// Substitution token for alpha inside color strings.
///
/// A value carrying this token (e.g. `rgba(0, 0, 0, %a)`) is not valid for
/// drawing until [`substitute_alpha`] has replaced it.
pub const ALPHA_PLACEHOLDER: &str = "%a";

/// Whether a style string still carries an unsubstituted alpha placeholder.
pub fn has_alpha_placeholder(style: &str) -> bool {
    style.contains(ALPHA_PLACEHOLDER)
}

/// Replace every alpha placeholder with a concrete opacity.
///
/// The contract for placeholder values is an alpha in `[0, 1]`; anything
/// outside is clamped, and a non-finite alpha falls back to opaque.
pub fn substitute_alpha(style: &str, alpha: f64) -> String {
    let alpha = if alpha.is_finite() {
        alpha.clamp(0.0, 1.0)
    } else {
        1.0
    };
    style.replace(ALPHA_PLACEHOLDER, &format!("{alpha}"))
}

/// Color with 8-bit channels and a unit-interval alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

/// Parse a theme color value: `#RRGGBB`, `rgb(r, g, b)`, or
/// `rgba(r, g, b, a)`.
///
/// Values still carrying a `%a` placeholder are rejected; substitute first.
pub fn parse_color(input: &str) -> Result<Rgba, String> {
    let normalized = input.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err("color value cannot be empty".to_string());
    }
    if has_alpha_placeholder(&normalized) {
        return Err(format!(
            "color `{input}` carries an unsubstituted `%a` placeholder"
        ));
    }

    if let Some(hex) = normalized.strip_prefix('#') {
        if hex.len() != 6 {
            return Err(format!("invalid hex color `{input}` (expected #RRGGBB)"));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|_| format!("invalid hex color `{input}`"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|_| format!("invalid hex color `{input}`"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|_| format!("invalid hex color `{input}`"))?;
        return Ok(Rgba { r, g, b, a: 1.0 });
    }

    if let Some(body) = normalized
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(format!(
                "invalid rgba color `{input}` (expected rgba(r, g, b, a))"
            ));
        }
        let r = parse_channel(parts[0], input)?;
        let g = parse_channel(parts[1], input)?;
        let b = parse_channel(parts[2], input)?;
        let a: f32 = parts[3]
            .parse()
            .map_err(|_| format!("invalid alpha in `{input}`"))?;
        if !(0.0..=1.0).contains(&a) {
            return Err(format!("alpha out of range in `{input}` (expected 0..=1)"));
        }
        return Ok(Rgba { r, g, b, a });
    }

    if let Some(body) = normalized
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(format!(
                "invalid rgb color `{input}` (expected rgb(r, g, b))"
            ));
        }
        let r = parse_channel(parts[0], input)?;
        let g = parse_channel(parts[1], input)?;
        let b = parse_channel(parts[2], input)?;
        return Ok(Rgba { r, g, b, a: 1.0 });
    }

    Err(format!("unsupported color value `{input}`"))
}

fn parse_channel(part: &str, input: &str) -> Result<u8, String> {
    part.parse()
        .map_err(|_| format!("invalid color channel in `{input}` (expected 0..=255)"))
}

/// Cursor rendering shape, the `cursorType` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorType {
    Underline,
    Ibeam,
}

impl CursorType {
    /// Parse a `cursorType` value.
    pub fn parse(input: &str) -> Result<Self, String> {
        match input.trim().to_ascii_lowercase().as_str() {
            "underline" => Ok(Self::Underline),
            "ibeam" => Ok(Self::Ibeam),
            _ => Err(format!(
                "unsupported cursor type `{input}` (expected `underline` or `ibeam`)"
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Underline => "underline",
            Self::Ibeam => "ibeam",
        }
    }
}

/// Parsed font shorthand, e.g. `10pt Monaco, Lucida Console, monospace`.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub size_pt: f32,
    pub families: Vec<String>,
}

/// Parse a font shorthand: a point size followed by a comma-separated
/// family list.
pub fn parse_font(input: &str) -> Result<FontSpec, String> {
    let trimmed = input.trim();
    let (size, families) = trimmed
        .split_once(' ')
        .ok_or_else(|| format!("invalid font `{input}` (expected `<size>pt <families>`)"))?;
    let size_pt: f32 = size
        .strip_suffix("pt")
        .ok_or_else(|| format!("invalid font size in `{input}` (expected e.g. `10pt`)"))?
        .parse()
        .map_err(|_| format!("invalid font size in `{input}`"))?;
    let families: Vec<String> = families
        .split(',')
        .map(|family| family.trim().to_string())
        .filter(|family| !family.is_empty())
        .collect();
    if families.is_empty() {
        return Err(format!("font `{input}` names no families"));
    }
    Ok(FontSpec { size_pt, families })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_supports_hex() {
        assert_eq!(
            parse_color("#010203").expect("hex"),
            Rgba {
                r: 1,
                g: 2,
                b: 3,
                a: 1.0
            }
        );
        // Uppercase hex digits from theme data parse the same.
        assert_eq!(
            parse_color("#FF0033").expect("hex"),
            Rgba {
                r: 0xff,
                g: 0,
                b: 0x33,
                a: 1.0
            }
        );
    }

    #[test]
    fn parse_color_supports_rgb_forms() {
        assert_eq!(
            parse_color("rgb(240, 240, 240)").expect("rgb"),
            Rgba {
                r: 240,
                g: 240,
                b: 240,
                a: 1.0
            }
        );
        // No interior spaces, as some theme data writes it.
        assert_eq!(
            parse_color("rgb(255,0,0)").expect("rgb"),
            Rgba {
                r: 255,
                g: 0,
                b: 0,
                a: 1.0
            }
        );
        assert_eq!(
            parse_color("rgba(100, 100, 100, 0.3)").expect("rgba"),
            Rgba {
                r: 100,
                g: 100,
                b: 100,
                a: 0.3
            }
        );
    }

    #[test]
    fn parse_color_rejects_bad_input() {
        assert!(parse_color("").is_err());
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gg0000").is_err());
        assert!(parse_color("rgb(1, 2)").is_err());
        assert!(parse_color("rgb(300, 0, 0)").is_err());
        assert!(parse_color("rgba(0, 0, 0, 1.5)").is_err());
        assert!(parse_color("cornflowerblue").is_err());
    }

    #[test]
    fn parse_color_rejects_unsubstituted_placeholder() {
        let err = parse_color("rgba(0, 0, 0, %a)").expect_err("must reject");
        assert!(err.contains("%a"), "got: {err}");
    }

    #[test]
    fn substitute_alpha_replaces_every_placeholder() {
        assert_eq!(
            substitute_alpha("rgba(90, 90, 90, %a)", 0.3),
            "rgba(90, 90, 90, 0.3)"
        );
        assert_eq!(substitute_alpha("%a-%a", 0.5), "0.5-0.5");
        // Styles without a placeholder pass through unchanged.
        assert_eq!(substitute_alpha("#000000", 0.5), "#000000");
    }

    #[test]
    fn substitute_alpha_clamps_out_of_range() {
        assert_eq!(substitute_alpha("rgba(0, 0, 0, %a)", 2.0), "rgba(0, 0, 0, 1)");
        assert_eq!(substitute_alpha("rgba(0, 0, 0, %a)", -0.5), "rgba(0, 0, 0, 0)");
        assert_eq!(
            substitute_alpha("rgba(0, 0, 0, %a)", f64::NAN),
            "rgba(0, 0, 0, 1)"
        );
    }

    #[test]
    fn substituted_placeholder_round_trips_through_parse() {
        let style = substitute_alpha("rgba(22, 22, 22, %a)", 0.8);
        assert_eq!(
            parse_color(&style).expect("substituted style"),
            Rgba {
                r: 22,
                g: 22,
                b: 22,
                a: 0.8
            }
        );
    }

    #[test]
    fn cursor_type_parses_both_tokens() {
        assert_eq!(CursorType::parse("ibeam").expect("ibeam"), CursorType::Ibeam);
        assert_eq!(
            CursorType::parse("underline").expect("underline"),
            CursorType::Underline
        );
        assert_eq!(CursorType::parse(" Ibeam ").expect("trimmed"), CursorType::Ibeam);
        assert!(CursorType::parse("block").is_err());
        assert_eq!(CursorType::Underline.as_str(), "underline");
    }

    #[test]
    fn parse_font_splits_size_and_families() {
        let font = parse_font("10pt Monaco, Lucida Console, monospace").expect("font");
        assert_eq!(font.size_pt, 10.0);
        assert_eq!(
            font.families,
            vec![
                "Monaco".to_string(),
                "Lucida Console".to_string(),
                "monospace".to_string()
            ]
        );
    }

    #[test]
    fn parse_font_rejects_malformed_shorthand() {
        assert!(parse_font("monospace").is_err());
        assert!(parse_font("10px Monaco").is_err());
        assert!(parse_font("10pt ,").is_err());
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn substitute_alpha_output_is_placeholder_free(
                prefix in "[ -~]{0,12}",
                suffix in "[ -~]{0,12}",
                alpha in 0.0f64..=1.0f64,
            ) {
                let style = format!("{prefix}%a{suffix}");
                let substituted = substitute_alpha(&style, alpha);
                prop_assert!(!has_alpha_placeholder(&substituted));
            }

            #[test]
            fn rgba_components_round_trip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
                let parsed = parse_color(&format!("rgb({r}, {g}, {b})")).expect("rgb");
                prop_assert_eq!(parsed, Rgba { r, g, b, a: 1.0 });
            }
        }
    }
}
