//! Color-theory harmonies derived from a base color.
//!
//! Every harmony is a row in a static recipe table: a list of tones, each
//! either the base color verbatim or an HSL derivation (hue rotation plus an
//! optional saturation/lightness rule). The base color is converted to HSL
//! once per call; entries marked as the base are passed through untouched so
//! they never pick up HSL rounding drift.

use crate::adjust::wrap_hue;
use crate::color::{hex_to_hsl, hsl_to_hex, HexColor, Hsl};
use crate::error::PaletteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The harmony kinds, in catalogue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HarmonyType {
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
    Tetradic,
    Square,
    Compound,
    Monochromatic,
    Shades,
    Custom,
}

/// A named set of colors related to a base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorHarmony {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: HarmonyType,
    pub colors: Vec<HexColor>,
}

/// How a derived tone treats saturation or lightness.
#[derive(Debug, Clone, Copy)]
enum Level {
    Keep,
    Lower { by: f64, floor: f64 },
    Raise { by: f64, ceil: f64 },
    Fixed(f64),
}

impl Level {
    fn apply(self, value: f64) -> f64 {
        match self {
            Level::Keep => value,
            Level::Lower { by, floor } => (value - by).max(floor),
            Level::Raise { by, ceil } => (value + by).min(ceil),
            Level::Fixed(v) => v,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Base,
    Derived {
        hue: i32,
        saturation: Level,
        lightness: Level,
    },
}

const BASE: Tone = Tone::Base;

const fn rotate(hue: i32) -> Tone {
    Tone::Derived {
        hue,
        saturation: Level::Keep,
        lightness: Level::Keep,
    }
}

const fn lightness(rule: Level) -> Tone {
    Tone::Derived {
        hue: 0,
        saturation: Level::Keep,
        lightness: rule,
    }
}

struct Recipe {
    kind: HarmonyType,
    name: &'static str,
    description: &'static str,
    tones: &'static [Tone],
}

static RECIPES: [Recipe; 10] = [
    Recipe {
        kind: HarmonyType::Complementary,
        name: "Complementary",
        description: "Colors opposite each other on the color wheel",
        tones: &[BASE, rotate(180)],
    },
    Recipe {
        kind: HarmonyType::Analogous,
        name: "Analogous",
        description: "Colors adjacent to each other on the color wheel",
        tones: &[rotate(-30), BASE, rotate(30)],
    },
    Recipe {
        kind: HarmonyType::Triadic,
        name: "Triadic",
        description: "Three colors evenly spaced on the color wheel",
        tones: &[BASE, rotate(120), rotate(240)],
    },
    Recipe {
        kind: HarmonyType::SplitComplementary,
        name: "Split Complementary",
        description: "A color and two colors adjacent to its complement",
        tones: &[BASE, rotate(150), rotate(210)],
    },
    Recipe {
        kind: HarmonyType::Tetradic,
        name: "Tetradic",
        description: "Four colors arranged in two complementary pairs",
        tones: &[BASE, rotate(90), rotate(180), rotate(270)],
    },
    Recipe {
        kind: HarmonyType::Square,
        name: "Square",
        description: "Four colors evenly spaced around the color wheel",
        tones: &[BASE, rotate(90), rotate(180), rotate(270)],
    },
    Recipe {
        kind: HarmonyType::Compound,
        name: "Compound",
        description: "A mix of complementary and analogous colors",
        tones: &[
            BASE,
            rotate(30),
            Tone::Derived {
                hue: 180,
                saturation: Level::Keep,
                lightness: Level::Lower {
                    by: 10.0,
                    floor: 10.0,
                },
            },
            rotate(210),
        ],
    },
    Recipe {
        kind: HarmonyType::Monochromatic,
        name: "Monochromatic",
        description: "Different shades and tints of the same color",
        tones: &[
            lightness(Level::Lower {
                by: 30.0,
                floor: 10.0,
            }),
            BASE,
            Tone::Derived {
                hue: 0,
                saturation: Level::Lower {
                    by: 20.0,
                    floor: 10.0,
                },
                lightness: Level::Keep,
            },
            lightness(Level::Raise {
                by: 30.0,
                ceil: 90.0,
            }),
        ],
    },
    Recipe {
        kind: HarmonyType::Shades,
        name: "Shades",
        description: "Variations of lightness of the same color",
        tones: &[
            lightness(Level::Fixed(80.0)),
            lightness(Level::Fixed(60.0)),
            lightness(Level::Fixed(40.0)),
            lightness(Level::Fixed(20.0)),
        ],
    },
    Recipe {
        kind: HarmonyType::Custom,
        name: "Custom",
        description: "Custom harmony with golden ratio spacing",
        tones: &[BASE, rotate(38), rotate(76), rotate(114)],
    },
];

impl HarmonyType {
    /// All harmony types in catalogue order.
    pub fn all() -> [HarmonyType; 10] {
        std::array::from_fn(|i| RECIPES[i].kind)
    }

    /// The camelCase id used in serialized output, e.g. `"splitComplementary"`.
    pub fn id(self) -> &'static str {
        match self {
            HarmonyType::Complementary => "complementary",
            HarmonyType::Analogous => "analogous",
            HarmonyType::Triadic => "triadic",
            HarmonyType::SplitComplementary => "splitComplementary",
            HarmonyType::Tetradic => "tetradic",
            HarmonyType::Square => "square",
            HarmonyType::Compound => "compound",
            HarmonyType::Monochromatic => "monochromatic",
            HarmonyType::Shades => "shades",
            HarmonyType::Custom => "custom",
        }
    }

    /// Display name, e.g. "Split Complementary".
    pub fn name(self) -> &'static str {
        self.recipe().name
    }

    /// One-sentence explanation of the scheme.
    pub fn description(self) -> &'static str {
        self.recipe().description
    }

    fn recipe(self) -> &'static Recipe {
        // RECIPES holds one row per variant, in declaration order.
        &RECIPES[self as usize]
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for HarmonyType {
    type Err = PaletteError;

    /// Accepts the camelCase id or a kebab-case spelling (`split-complementary`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| *c != '-' && *c != '_').collect();
        HarmonyType::all()
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| PaletteError::UnknownHarmony(s.to_string()))
    }
}

fn render_tone(tone: Tone, base: HexColor, base_hsl: Hsl) -> HexColor {
    match tone {
        Tone::Base => base,
        Tone::Derived {
            hue,
            saturation,
            lightness,
        } => hsl_to_hex(Hsl::new(
            wrap_hue(base_hsl.h + f64::from(hue)),
            saturation.apply(base_hsl.s),
            lightness.apply(base_hsl.l),
        )),
    }
}

fn build(recipe: &Recipe, base: HexColor, base_hsl: Hsl) -> ColorHarmony {
    ColorHarmony {
        name: recipe.name.to_string(),
        description: recipe.description.to_string(),
        kind: recipe.kind,
        colors: recipe
            .tones
            .iter()
            .map(|&tone| render_tone(tone, base, base_hsl))
            .collect(),
    }
}

/// Computes a single harmony for `base`.
pub fn harmony(base: HexColor, kind: HarmonyType) -> ColorHarmony {
    build(kind.recipe(), base, hex_to_hsl(base))
}

/// Computes the whole harmony catalogue for `base`, in catalogue order.
pub fn all_harmonies(base: HexColor) -> Vec<ColorHarmony> {
    let base_hsl = hex_to_hsl(base);
    RECIPES
        .iter()
        .map(|recipe| build(recipe, base, base_hsl))
        .collect()
}
