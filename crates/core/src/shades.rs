//! Ten-step tonal shade ramps derived from a base color.
//!
//! Lightness per shade comes from a fixed table, so shade 50 is always the
//! lightest and 900 the darkest whatever the input. Saturation follows a
//! piecewise curve in the shade number, scaled by the vibrancy control:
//! light tints and very dark shades are desaturated so they neither wash out
//! nor turn muddy.

use crate::adjust::wrap_hue;
use crate::color::{hex_to_hsl, hsl_to_hex, HexColor, Hsl};
use crate::params::{param_f64, param_i64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The ten shade keys, lightest first.
pub const SHADE_KEYS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Target lightness (percent) for each shade key.
const SHADE_LIGHTNESS: [(u16, u8); 10] = [
    (50, 96),
    (100, 90),
    (200, 80),
    (300, 70),
    (400, 60),
    (500, 50),
    (600, 40),
    (700, 30),
    (800, 20),
    (900, 10),
];

/// Vibrancy above this has no further effect.
pub const MAX_VIBRANCY: f64 = 85.0;
/// Vibrancy at which the base saturation is used unscaled.
const NEUTRAL_VIBRANCY: f64 = 50.0;

const DEFAULT_VIBRANCY: f64 = 50.0;
const DEFAULT_HUE_SHIFT: i32 = 0;

/// Controls for [`generate_shades`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadeOptions {
    /// Saturation intensity, 0-100 in the UI; capped at [`MAX_VIBRANCY`].
    /// Negative values (and NaN) act as 0, giving an unsaturated ramp.
    pub vibrancy: f64,
    /// Degrees added to the base hue before generating.
    pub hue_shift: i32,
}

impl Default for ShadeOptions {
    fn default() -> Self {
        Self {
            vibrancy: DEFAULT_VIBRANCY,
            hue_shift: DEFAULT_HUE_SHIFT,
        }
    }
}

impl ShadeOptions {
    /// Options as given; clamping happens in [`generate_shades`].
    pub fn new(vibrancy: f64, hue_shift: i32) -> Self {
        Self {
            vibrancy,
            hue_shift,
        }
    }

    /// Reads `vibrancy` and `hueShift` from a JSON object, falling back to
    /// defaults for anything missing or malformed.
    pub fn from_json(params: &Value) -> Self {
        let hue_shift = param_i64(params, "hueShift", i64::from(DEFAULT_HUE_SHIFT));
        // Out-of-range shifts only matter modulo a full turn.
        let hue_shift = i32::try_from(hue_shift)
            .unwrap_or_else(|_| hue_shift.rem_euclid(360) as i32);
        Self {
            vibrancy: param_f64(params, "vibrancy", DEFAULT_VIBRANCY),
            hue_shift,
        }
    }
}

/// One rung of a shade ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorShade {
    pub shade: u16,
    pub hex: HexColor,
    /// Hue in whole degrees, [0, 360).
    pub hue: u16,
    /// Saturation actually used, rounded to a whole percent.
    pub saturation: u8,
    /// Target lightness from the shade table.
    pub lightness: u8,
}

/// An ordered ramp of exactly ten shades, 50 through 900.
///
/// Only produced by [`generate_shades`] (or transformed from one), so the
/// ten-key invariant always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShadeRamp {
    shades: Vec<ColorShade>,
}

impl ShadeRamp {
    /// Looks up a shade by key; `None` for keys outside [`SHADE_KEYS`].
    pub fn get(&self, shade: u16) -> Option<&ColorShade> {
        self.shades.iter().find(|s| s.shade == shade)
    }

    /// Shades lightest first.
    pub fn iter(&self) -> std::slice::Iter<'_, ColorShade> {
        self.shades.iter()
    }

    /// The shades as a slice, lightest first.
    pub fn as_slice(&self) -> &[ColorShade] {
        &self.shades
    }

    /// Number of shades, always ten.
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    /// Always false: a ramp has ten shades.
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    /// Just the hex values, lightest first.
    pub fn hexes(&self) -> Vec<HexColor> {
        self.shades.iter().map(|s| s.hex).collect()
    }

    /// Returns a new ramp with every hex replaced by `f(hex)`, keeping the
    /// shade key and recorded hue, saturation and lightness.
    pub fn map_hex(&self, mut f: impl FnMut(HexColor) -> HexColor) -> ShadeRamp {
        ShadeRamp {
            shades: self
                .shades
                .iter()
                .map(|s| ColorShade { hex: f(s.hex), ..*s })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ShadeRamp {
    type Item = &'a ColorShade;
    type IntoIter = std::slice::Iter<'a, ColorShade>;

    fn into_iter(self) -> Self::IntoIter {
        self.shades.iter()
    }
}

/// Position-dependent saturation factor for a shade key.
fn saturation_factor(shade: u16) -> f64 {
    let shade = f64::from(shade);
    if shade <= 100.0 {
        0.3 + shade / 500.0
    } else if shade < 500.0 {
        0.6 + shade / 1000.0
    } else if shade < 800.0 {
        0.9 + (shade - 500.0) / 2000.0
    } else {
        0.95
    }
}

/// Generates the ten-shade ramp for `base`.
///
/// The base hue is rotated by `hue_shift` (wrapping), the base saturation is
/// scaled by `vibrancy / 50` (vibrancy clamped to [0, 85]) and by the
/// per-shade factor, capped at 100, and lightness is taken from the table.
pub fn generate_shades(base: HexColor, options: ShadeOptions) -> ShadeRamp {
    let base_hsl = hex_to_hsl(base);
    let hue = wrap_hue(base_hsl.h + f64::from(options.hue_shift));

    let vibrancy = if options.vibrancy.is_nan() {
        0.0
    } else {
        options.vibrancy.clamp(0.0, MAX_VIBRANCY)
    };
    let multiplier = vibrancy / NEUTRAL_VIBRANCY;

    let shades = SHADE_LIGHTNESS
        .iter()
        .map(|&(shade, lightness)| {
            let saturation = (base_hsl.s * multiplier * saturation_factor(shade)).min(100.0);
            ColorShade {
                shade,
                hex: hsl_to_hex(Hsl::new(hue, saturation, f64::from(lightness))),
                hue: hue as u16,
                saturation: saturation.round() as u8,
                lightness,
            }
        })
        .collect();

    ShadeRamp { shades }
}
