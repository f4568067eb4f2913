//! Single-color adjustments in HSL space, and RGB blending.
//!
//! Amounts are percentage points (lightness, saturation) or degrees (hue).
//! Results are clamped into range rather than rejected.

use crate::color::{hex_to_hsl, hsl_to_hex, HexColor, Hsl, Rgb};

/// Raises lightness by `amount` points, capped at 100.
pub fn lighten(color: HexColor, amount: f64) -> HexColor {
    let hsl = hex_to_hsl(color);
    hsl_to_hex(Hsl {
        l: (hsl.l + amount).min(100.0),
        ..hsl
    })
}

/// Lowers lightness by `amount` points, floored at 0.
pub fn darken(color: HexColor, amount: f64) -> HexColor {
    let hsl = hex_to_hsl(color);
    hsl_to_hex(Hsl {
        l: (hsl.l - amount).max(0.0),
        ..hsl
    })
}

/// Raises saturation by `amount` points, capped at 100.
pub fn saturate(color: HexColor, amount: f64) -> HexColor {
    let hsl = hex_to_hsl(color);
    hsl_to_hex(Hsl {
        s: (hsl.s + amount).min(100.0),
        ..hsl
    })
}

/// Lowers saturation by `amount` points, floored at 0.
pub fn desaturate(color: HexColor, amount: f64) -> HexColor {
    let hsl = hex_to_hsl(color);
    hsl_to_hex(Hsl {
        s: (hsl.s - amount).max(0.0),
        ..hsl
    })
}

/// Rotates the hue by `degrees`, wrapping into [0, 360).
pub fn adjust_hue(color: HexColor, degrees: f64) -> HexColor {
    let hsl = hex_to_hsl(color);
    hsl_to_hex(Hsl {
        h: wrap_hue(hsl.h + degrees),
        ..hsl
    })
}

/// Linearly mixes two colors per RGB channel.
///
/// `ratio` 0 returns `from`, 1 returns `to`; each channel is rounded.
pub fn blend(from: HexColor, to: HexColor, ratio: f64) -> HexColor {
    let a = from.rgb();
    let b = to.rgb();
    let mix = |x: u8, y: u8| f64::from(x) * (1.0 - ratio) + f64::from(y) * ratio;
    HexColor::from_rgb(Rgb::clamped(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b)))
}

/// Wraps a hue angle into [0, 360).
pub(crate) fn wrap_hue(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}
