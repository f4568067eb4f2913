//! Color types and conversion functions for the shadecraft engine.
//!
//! Provides three color representations (`HexColor`, `Rgb`, `Hsl`) and pure
//! conversion functions between them, plus [`format_hex_value`], the
//! normalization policy applied to free-text color input.
//!
//! `HexColor` is the canonical exchange type: it always holds a valid color,
//! displays and serializes as `"#RRGGBB"` (uppercase), and can only be built
//! through strict parsing, normalization, or conversion. Every function that
//! accepts a `HexColor` is therefore infallible.
//!
//! HSL values produced by conversion are rounded to whole numbers (degrees and
//! percentages), so `hsl_to_hex(hex_to_hsl(x))` is only approximately `x`.

use crate::error::PaletteError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An 8-bit RGB color with channels in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color: hue in degrees [0, 360), saturation and lightness in percent.
///
/// Fields are `f64` because generators feed fractional saturations back into
/// [`hsl_to_hex`]; values coming out of [`rgb_to_hsl`] are always whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// A valid color in canonical `#RRGGBB` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(Rgb);

impl Rgb {
    /// Channels as given.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from unbounded channel values: each channel is rounded
    /// to the nearest integer and clamped to [0, 255].
    pub fn clamped(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: quantize_channel(r),
            g: quantize_channel(g),
            b: quantize_channel(b),
        }
    }
}

impl Hsl {
    /// Components as given; hue in degrees, the rest in percent.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl HexColor {
    pub const BLACK: HexColor = HexColor(Rgb::new(0, 0, 0));
    pub const WHITE: HexColor = HexColor(Rgb::new(255, 255, 255));

    /// Wraps an RGB triple.
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    /// Parses a strict hex color like `"#ff00aa"` or `"FF00AA"` (case insensitive).
    ///
    /// Returns `PaletteError::InvalidColor` unless the input is exactly six hex
    /// digits with an optional leading `#`. Use [`format_hex_value`] for
    /// lenient user input.
    pub fn parse(hex: &str) -> Result<Self, PaletteError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(PaletteError::InvalidColor(format!(
                "expected 6 hex digits, got {} in {hex:?}",
                digits.len()
            )));
        }
        decode_hex6(digits.as_bytes())
            .map(Self)
            .ok_or_else(|| PaletteError::InvalidColor(format!("non-hex digit in {hex:?}")))
    }

    /// The channels.
    pub const fn rgb(self) -> Rgb {
        self.0
    }

    /// Integer-rounded HSL of this color.
    pub fn hsl(self) -> Hsl {
        rgb_to_hsl(self.0)
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl From<HexColor> for Rgb {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for HexColor {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn quantize_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decodes exactly six hex digits into a color.
fn decode_hex6(digits: &[u8]) -> Option<Rgb> {
    let [r1, r2, g1, g2, b1, b2] = <[u8; 6]>::try_from(digits).ok()?;
    let pair = |hi: u8, lo: u8| Some(hex_nibble(hi)? << 4 | hex_nibble(lo)?);
    Some(Rgb::new(pair(r1, r2)?, pair(g1, g2)?, pair(b1, b2)?))
}

/// Normalizes free-text color input into a canonical hex color.
///
/// Never fails. Non-hex characters are dropped, then the remaining digits are
/// completed by length:
///
/// | digits | result |
/// |---|---|
/// | 0 | `fallback` |
/// | 1 | repeated 6 times (`F` -> `#FFFFFF`) |
/// | 2 | doubled, blue `00` (`FF` -> `#FFFF00`) |
/// | 3 | each digit doubled (`F00` -> `#FF0000`) |
/// | 4 | blue `00` appended (`12AB` -> `#12AB00`) |
/// | 5 | first digit appended (`12345` -> `#123451`) |
/// | 6+ | first six digits |
pub fn format_hex_value(raw: &str, fallback: HexColor) -> HexColor {
    let digits: String = raw.chars().filter(char::is_ascii_hexdigit).collect();
    let expanded = match digits.len() {
        0 => return fallback,
        1 => digits.repeat(6),
        2 => format!("{digits}{digits}00"),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        4 => format!("{digits}00"),
        5 => format!("{digits}{}", &digits[..1]),
        _ => digits[..6].to_string(),
    };
    decode_hex6(expanded.as_bytes()).map_or(fallback, HexColor)
}

/// Splits a hex color into its RGB channels.
pub fn hex_to_rgb(hex: HexColor) -> Rgb {
    hex.0
}

/// Formats RGB channels as a canonical hex color.
pub fn rgb_to_hex(rgb: Rgb) -> HexColor {
    HexColor(rgb)
}

/// Converts a hex color to HSL with whole-number hue, saturation and lightness.
pub fn hex_to_hsl(hex: HexColor) -> Hsl {
    rgb_to_hsl(hex.0)
}

/// Converts HSL to a hex color, rounding each channel.
pub fn hsl_to_hex(hsl: Hsl) -> HexColor {
    HexColor(hsl_to_rgb(hsl))
}

/// Converts RGB to HSL.
///
/// Achromatic colors (all channels equal) get hue 0 and saturation 0. The
/// results are rounded to whole degrees and percentages; a hue that rounds
/// up to 360 is reported as 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, (l * 100.0).round());
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(
        (sector / 6.0 * 360.0).round() % 360.0,
        (s * 100.0).round(),
        (l * 100.0).round(),
    )
}

/// Converts HSL to RGB, rounding and clamping each channel.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    if s == 0.0 {
        return Rgb::clamped(l * 255.0, l * 255.0, l * 255.0);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::clamped(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = match t {
        t if t < 0.0 => t + 1.0,
        t if t > 1.0 => t - 1.0,
        t => t,
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    // -- Strict parsing --

    #[test]
    fn parse_accepts_hash_and_bare_forms() {
        assert_eq!(hex("#ff0000").rgb(), Rgb::new(255, 0, 0));
        assert_eq!(hex("00FF00").rgb(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(hex("#c0ffee"), hex("#C0FFEE"));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(HexColor::parse("#gggggg").is_err());
        assert!(HexColor::parse("#fff").is_err());
        assert!(HexColor::parse("").is_err());
        assert!(HexColor::parse("#ff00ff00").is_err());
        assert!(HexColor::parse("#ff 0ff").is_err());
    }

    #[test]
    fn display_is_uppercase_with_hash() {
        assert_eq!(hex("#c0ffee").to_string(), "#C0FFEE");
        assert_eq!(HexColor::from_rgb(Rgb::new(1, 2, 3)).to_string(), "#010203");
    }

    // -- format_hex_value cascade --

    #[test]
    fn format_expands_three_digit_shorthand() {
        assert_eq!(format_hex_value("F00", HexColor::BLACK).to_string(), "#FF0000");
        assert_eq!(format_hex_value("#abc", HexColor::BLACK).to_string(), "#AABBCC");
    }

    #[test]
    fn format_repeats_single_digit() {
        assert_eq!(format_hex_value("F", HexColor::BLACK).to_string(), "#FFFFFF");
        assert_eq!(format_hex_value("7", HexColor::BLACK).to_string(), "#777777");
    }

    #[test]
    fn format_two_digits_become_red_green_not_gray() {
        assert_eq!(format_hex_value("FF", HexColor::BLACK).to_string(), "#FFFF00");
        assert_eq!(format_hex_value("80", HexColor::BLACK).to_string(), "#808000");
    }

    #[test]
    fn format_four_digits_get_zero_blue() {
        assert_eq!(format_hex_value("12AB", HexColor::BLACK).to_string(), "#12AB00");
    }

    #[test]
    fn format_five_digits_append_first_digit() {
        assert_eq!(format_hex_value("12345", HexColor::BLACK).to_string(), "#123451");
    }

    #[test]
    fn format_truncates_long_input() {
        assert_eq!(
            format_hex_value("1234567", HexColor::BLACK).to_string(),
            "#123456"
        );
    }

    #[test]
    fn format_returns_fallback_when_no_hex_digits_remain() {
        let fallback = hex("#123456");
        assert_eq!(format_hex_value("", fallback), fallback);
        assert_eq!(format_hex_value("#zz-zz", fallback), fallback);
    }

    #[test]
    fn format_strips_non_hex_characters_before_counting() {
        // "r g b" contains only 'b' as a hex digit
        assert_eq!(format_hex_value("r g b", HexColor::BLACK).to_string(), "#BBBBBB");
        assert_eq!(
            format_hex_value(" #15-43-7f ", HexColor::BLACK).to_string(),
            "#15437F"
        );
    }

    #[test]
    fn format_ignores_non_ascii_digits() {
        assert_eq!(format_hex_value("ＦＦ0", HexColor::BLACK).to_string(), "#000000");
    }

    // -- RGB <-> hex --

    #[test]
    fn clamped_rounds_and_clamps_channels() {
        assert_eq!(Rgb::clamped(300.0, -4.0, 127.5), Rgb::new(255, 0, 128));
        assert_eq!(Rgb::clamped(0.49, 254.6, 10.0), Rgb::new(0, 255, 10));
    }

    #[test]
    fn hex_rgb_conversions_are_inverse() {
        let c = hex("#804020");
        assert_eq!(hex_to_rgb(c), Rgb::new(0x80, 0x40, 0x20));
        assert_eq!(rgb_to_hex(hex_to_rgb(c)), c);
    }

    // -- HSL --

    #[test]
    fn primaries_convert_to_expected_hsl() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)), Hsl::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn achromatic_colors_have_zero_hue_and_saturation() {
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 0)), Hsl::new(0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hsl(Rgb::new(255, 255, 255)), Hsl::new(0.0, 0.0, 100.0));
        assert_eq!(rgb_to_hsl(Rgb::new(128, 128, 128)), Hsl::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn red_max_branch_wraps_when_green_below_blue() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 128)), Hsl::new(330.0, 100.0, 50.0));
    }

    #[test]
    fn hue_rounding_up_to_360_is_reduced_to_zero() {
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 1));
        assert_eq!(hsl.h, 0.0);
    }

    #[test]
    fn base_color_fixture_converts_to_known_hsl() {
        assert_eq!(hex_to_hsl(hex("#15437F")), Hsl::new(214.0, 72.0, 29.0));
    }

    #[test]
    fn hsl_to_rgb_known_values() {
        assert_eq!(hsl_to_rgb(Hsl::new(330.0, 100.0, 50.0)), Rgb::new(255, 0, 128));
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 50.0)), Rgb::new(128, 128, 128));
        assert_eq!(hsl_to_hex(Hsl::new(214.0, 64.8, 50.0)).to_string(), "#2D74D2");
    }

    #[test]
    fn hsl_to_hex_accepts_hue_360_as_zero() {
        assert_eq!(
            hsl_to_hex(Hsl::new(360.0, 100.0, 50.0)),
            hsl_to_hex(Hsl::new(0.0, 100.0, 50.0))
        );
    }

    // -- Serde --

    #[test]
    fn hex_color_serializes_as_canonical_string() {
        let json = serde_json::to_string(&hex("#ff0000")).unwrap();
        assert_eq!(json, "\"#FF0000\"");
    }

    #[test]
    fn hex_color_deserializes_from_string() {
        let c: HexColor = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(c.rgb(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn hex_color_deserialize_rejects_invalid_hex() {
        let result: Result<HexColor, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn channel_distance(a: Rgb, b: Rgb) -> u8 {
            a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
        }

        proptest! {
            #[test]
            fn gray_hsl_round_trip_within_one(v in any::<u8>()) {
                let gray = Rgb::new(v, v, v);
                let back = hsl_to_rgb(rgb_to_hsl(gray));
                prop_assert!(channel_distance(gray, back) <= 1, "{gray:?} -> {back:?}");
            }

            #[test]
            fn hsl_round_trip_within_quantization(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                // Whole-number h/s/l can move a saturated channel by up to 5.
                let original = Rgb::new(r, g, b);
                let back = hsl_to_hex(hex_to_hsl(HexColor::from_rgb(original))).rgb();
                prop_assert!(
                    channel_distance(original, back) <= 6,
                    "{original:?} -> {back:?}"
                );
            }

            #[test]
            fn rgb_to_hsl_stays_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let hsl = rgb_to_hsl(Rgb::new(r, g, b));
                prop_assert!(hsl.h >= 0.0 && hsl.h < 360.0, "h = {}", hsl.h);
                prop_assert!((0.0..=100.0).contains(&hsl.s), "s = {}", hsl.s);
                prop_assert!((0.0..=100.0).contains(&hsl.l), "l = {}", hsl.l);
                prop_assert_eq!(hsl.h.fract(), 0.0);
            }

            #[test]
            fn format_hex_value_always_yields_canonical_hex(raw in ".{0,12}") {
                let formatted = format_hex_value(&raw, HexColor::BLACK).to_string();
                prop_assert_eq!(formatted.len(), 7);
                prop_assert!(formatted.starts_with('#'));
                prop_assert!(formatted[1..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
                prop_assert!(HexColor::parse(&formatted).is_ok());
            }

            #[test]
            fn parse_display_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let c = HexColor::from_rgb(Rgb::new(r, g, b));
                prop_assert_eq!(HexColor::parse(&c.to_string()).unwrap(), c);
            }
        }
    }
}
