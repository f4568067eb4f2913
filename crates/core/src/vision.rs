//! Color-vision-deficiency simulation.
//!
//! Each deficiency is either a 3x3 matrix over 0-255 RGB, a per-pixel
//! function, or the identity. Lookups by string id never fail: an unknown id
//! leaves the color untouched.

use crate::color::{HexColor, Rgb};
use crate::error::PaletteError;
use crate::shades::ShadeRamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a deficiency transforms a color.
#[derive(Debug, Clone, Copy)]
pub enum Simulation {
    /// No color change. `BlurredVision` is a display effect, not a color one.
    Identity,
    /// Row-major 3x3 transform applied to un-normalized RGB.
    Matrix([f64; 9]),
    /// Arbitrary per-pixel mapping over un-normalized RGB.
    Custom(fn(f64, f64, f64) -> [f64; 3]),
}

impl Simulation {
    /// Applies the transform, rounding and clamping back into a hex color.
    pub fn apply(&self, color: HexColor) -> HexColor {
        let rgb = color.rgb();
        let (r, g, b) = (f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b));
        match self {
            Simulation::Identity => color,
            Simulation::Matrix(m) => HexColor::from_rgb(Rgb::clamped(
                r * m[0] + g * m[1] + b * m[2],
                r * m[3] + g * m[4] + b * m[5],
                r * m[6] + g * m[7] + b * m[8],
            )),
            Simulation::Custom(f) => {
                let [nr, ng, nb] = f(r, g, b);
                HexColor::from_rgb(Rgb::clamped(nr, ng, nb))
            }
        }
    }
}

/// NTSC luma. Distinct from the WCAG linear-light weights used for contrast.
fn luma(r: f64, g: f64, b: f64) -> f64 {
    r * 0.299 + g * 0.587 + b * 0.114
}

fn monochrome(r: f64, g: f64, b: f64) -> [f64; 3] {
    let y = luma(r, g, b);
    [y, y, y]
}

fn reduced_contrast(r: f64, g: f64, b: f64) -> [f64; 3] {
    let y = luma(r, g, b);
    [r * 0.7 + y * 0.3, g * 0.7 + y * 0.3, b * 0.7 + y * 0.3]
}

/// The catalogue of simulated vision types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Deficiency {
    Normal,
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Protanomaly,
    Deuteranomaly,
    Tritanomaly,
    Achromatopsia,
    LowContrast,
    BlurredVision,
}

impl Deficiency {
    /// Every deficiency in catalogue order.
    pub fn all() -> [Deficiency; 10] {
        [
            Deficiency::Normal,
            Deficiency::Protanopia,
            Deficiency::Deuteranopia,
            Deficiency::Tritanopia,
            Deficiency::Protanomaly,
            Deficiency::Deuteranomaly,
            Deficiency::Tritanomaly,
            Deficiency::Achromatopsia,
            Deficiency::LowContrast,
            Deficiency::BlurredVision,
        ]
    }

    /// Kebab-case id used in lookups.
    pub fn id(self) -> &'static str {
        match self {
            Deficiency::Normal => "normal",
            Deficiency::Protanopia => "protanopia",
            Deficiency::Deuteranopia => "deuteranopia",
            Deficiency::Tritanopia => "tritanopia",
            Deficiency::Protanomaly => "protanomaly",
            Deficiency::Deuteranomaly => "deuteranomaly",
            Deficiency::Tritanomaly => "tritanomaly",
            Deficiency::Achromatopsia => "achromatopsia",
            Deficiency::LowContrast => "low-contrast",
            Deficiency::BlurredVision => "blurred-vision",
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Deficiency::Normal => "Normal Vision",
            Deficiency::Protanopia => "Protanopia",
            Deficiency::Deuteranopia => "Deuteranopia",
            Deficiency::Tritanopia => "Tritanopia",
            Deficiency::Protanomaly => "Protanomaly",
            Deficiency::Deuteranomaly => "Deuteranomaly",
            Deficiency::Tritanomaly => "Tritanomaly",
            Deficiency::Achromatopsia => "Achromatopsia",
            Deficiency::LowContrast => "Low Contrast",
            Deficiency::BlurredVision => "Blurred Vision",
        }
    }

    /// Short description of the condition.
    pub fn description(self) -> &'static str {
        match self {
            Deficiency::Normal => "No color vision deficiency",
            Deficiency::Protanopia => "Red-blind (absence of red retinal photoreceptors)",
            Deficiency::Deuteranopia => "Green-blind (absence of green retinal photoreceptors)",
            Deficiency::Tritanopia => "Blue-blind (absence of blue retinal photoreceptors)",
            Deficiency::Protanomaly => "Red-weak (anomalous red retinal photoreceptors)",
            Deficiency::Deuteranomaly => "Green-weak (anomalous green retinal photoreceptors)",
            Deficiency::Tritanomaly => "Blue-weak (anomalous blue retinal photoreceptors)",
            Deficiency::Achromatopsia => "Complete color blindness (monochromacy)",
            Deficiency::LowContrast => "Reduced contrast sensitivity",
            Deficiency::BlurredVision => "Simulates blurred vision",
        }
    }

    /// The transform this deficiency applies.
    pub fn simulation(self) -> Simulation {
        match self {
            Deficiency::Normal | Deficiency::BlurredVision => Simulation::Identity,
            Deficiency::Protanopia => {
                Simulation::Matrix([0.567, 0.433, 0.0, 0.558, 0.442, 0.0, 0.0, 0.242, 0.758])
            }
            Deficiency::Deuteranopia => {
                Simulation::Matrix([0.625, 0.375, 0.0, 0.7, 0.3, 0.0, 0.0, 0.3, 0.7])
            }
            Deficiency::Tritanopia => {
                Simulation::Matrix([0.95, 0.05, 0.0, 0.0, 0.433, 0.567, 0.0, 0.475, 0.525])
            }
            Deficiency::Protanomaly => {
                Simulation::Matrix([0.817, 0.183, 0.0, 0.333, 0.667, 0.0, 0.0, 0.125, 0.875])
            }
            Deficiency::Deuteranomaly => {
                Simulation::Matrix([0.8, 0.2, 0.0, 0.258, 0.742, 0.0, 0.0, 0.142, 0.858])
            }
            Deficiency::Tritanomaly => {
                Simulation::Matrix([0.967, 0.033, 0.0, 0.0, 0.733, 0.267, 0.0, 0.183, 0.817])
            }
            Deficiency::Achromatopsia => Simulation::Custom(monochrome),
            Deficiency::LowContrast => Simulation::Custom(reduced_contrast),
        }
    }

    /// Simulates a single color.
    pub fn apply(self, color: HexColor) -> HexColor {
        self.simulation().apply(color)
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Deficiency {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Deficiency::all()
            .into_iter()
            .find(|d| d.id() == wanted)
            .ok_or_else(|| PaletteError::UnknownDeficiency(s.to_string()))
    }
}

/// Simulates `color` under the deficiency named `id`; unknown ids are identity.
pub fn simulate(color: HexColor, id: &str) -> HexColor {
    match id.parse::<Deficiency>() {
        Ok(deficiency) => deficiency.apply(color),
        Err(_) => color,
    }
}

/// Simulates every shade, replacing only the hex of each entry.
pub fn simulate_ramp(ramp: &ShadeRamp, id: &str) -> ShadeRamp {
    match id.parse::<Deficiency>() {
        Ok(deficiency) => {
            let simulation = deficiency.simulation();
            ramp.map_hex(|hex| simulation.apply(hex))
        }
        Err(_) => ramp.clone(),
    }
}

/// Simulates each color in a plain list; unknown ids are identity.
pub fn simulate_colors(colors: &[HexColor], id: &str) -> Vec<HexColor> {
    colors.iter().map(|&c| simulate(c, id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shades::{generate_shades, ShadeOptions};

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    // -- Catalogue --

    #[test]
    fn ids_round_trip_through_from_str() {
        for d in Deficiency::all() {
            assert_eq!(d.id().parse::<Deficiency>().unwrap(), d);
        }
    }

    #[test]
    fn unknown_id_is_an_error_for_strict_parse() {
        let err = "tetrachromacy".parse::<Deficiency>().unwrap_err();
        assert!(matches!(err, PaletteError::UnknownDeficiency(ref s) if s == "tetrachromacy"));
    }

    #[test]
    fn serde_uses_kebab_case_ids() {
        assert_eq!(
            serde_json::to_string(&Deficiency::LowContrast).unwrap(),
            "\"low-contrast\""
        );
        let d: Deficiency = serde_json::from_str("\"blurred-vision\"").unwrap();
        assert_eq!(d, Deficiency::BlurredVision);
    }

    #[test]
    fn metadata_is_populated() {
        assert_eq!(Deficiency::Normal.name(), "Normal Vision");
        assert!(Deficiency::all()
            .iter()
            .all(|d| !d.name().is_empty() && !d.description().is_empty()));
    }

    // -- Simulation --

    #[test]
    fn red_under_each_deficiency() {
        let red = hex("#FF0000");
        let cases = [
            ("protanopia", "#918E00"),
            ("deuteranopia", "#9FB300"),
            ("tritanopia", "#F20000"),
            ("achromatopsia", "#4C4C4C"),
            ("low-contrast", "#C91717"),
        ];
        for (id, expected) in cases {
            assert_eq!(simulate(red, id).to_string(), expected, "{id}");
        }
    }

    #[test]
    fn fixture_base_under_each_deficiency() {
        let base = hex("#15437F");
        let cases = [
            ("protanopia", "#292970"),
            ("deuteranopia", "#26236D"),
            ("tritanopia", "#176563"),
            ("achromatopsia", "#3C3C3C"),
            ("low-contrast", "#21416B"),
        ];
        for (id, expected) in cases {
            assert_eq!(simulate(base, id).to_string(), expected, "{id}");
        }
    }

    #[test]
    fn identity_variants_and_unknown_ids_leave_color_unchanged() {
        let c = hex("#15437F");
        assert_eq!(simulate(c, "normal"), c);
        assert_eq!(simulate(c, "blurred-vision"), c);
        assert_eq!(simulate(c, "no-such-thing"), c);
        assert_eq!(simulate(c, ""), c);
    }

    #[test]
    fn achromatopsia_yields_gray() {
        let rgb = simulate(hex("#3B82F6"), "achromatopsia").rgb();
        assert_eq!(rgb.r, rgb.g);
        assert_eq!(rgb.g, rgb.b);
    }

    #[test]
    fn simulate_ramp_replaces_only_hex() {
        let ramp = generate_shades(hex("#15437F"), ShadeOptions::default());
        let simulated = simulate_ramp(&ramp, "protanopia");
        assert_eq!(simulated.len(), ramp.len());
        for (orig, sim) in ramp.iter().zip(simulated.iter()) {
            assert_eq!(sim.shade, orig.shade);
            assert_eq!(sim.hue, orig.hue);
            assert_eq!(sim.saturation, orig.saturation);
            assert_eq!(sim.lightness, orig.lightness);
            assert_eq!(sim.hex, simulate(orig.hex, "protanopia"));
        }
    }

    #[test]
    fn simulate_ramp_with_unknown_id_is_identity() {
        let ramp = generate_shades(hex("#15437F"), ShadeOptions::default());
        assert_eq!(simulate_ramp(&ramp, "martian"), ramp);
    }

    #[test]
    fn simulate_colors_preserves_order() {
        let colors = [hex("#FF0000"), hex("#15437F")];
        assert_eq!(
            simulate_colors(&colors, "achromatopsia"),
            vec![hex("#4C4C4C"), hex("#3C3C3C")]
        );
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_hex() -> impl Strategy<Value = HexColor> {
            any::<(u8, u8, u8)>().prop_map(|(r, g, b)| HexColor::from_rgb(Rgb::new(r, g, b)))
        }

        proptest! {
            #[test]
            fn grays_are_fixed_points_of_achromatopsia(v in any::<u8>()) {
                let gray = HexColor::from_rgb(Rgb::new(v, v, v));
                prop_assert_eq!(simulate(gray, "achromatopsia"), gray);
            }

            #[test]
            fn simulation_is_deterministic(c in any_hex(), i in 0usize..10) {
                let d = Deficiency::all()[i];
                prop_assert_eq!(d.apply(c), d.apply(c));
            }
        }
    }
}
