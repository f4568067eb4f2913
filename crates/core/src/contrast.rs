//! WCAG 2.x relative luminance, contrast ratios and palette accessibility reports.

use crate::color::HexColor;
use crate::shades::{ColorShade, ShadeRamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shades compared against each other in an accessibility report.
pub const ACCESSIBILITY_SHADES: [u16; 6] = [50, 100, 200, 500, 700, 900];

/// WCAG conformance level for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContrastLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AA Large")]
    AaLarge,
    #[serde(rename = "Fail")]
    Fail,
}

impl ContrastLevel {
    /// Label as shown in reports.
    pub fn label(self) -> &'static str {
        match self {
            ContrastLevel::Aaa => "AAA",
            ContrastLevel::Aa => "AA",
            ContrastLevel::AaLarge => "AA Large",
            ContrastLevel::Fail => "Fail",
        }
    }

    /// True for every level except `Fail`.
    pub fn passes(self) -> bool {
        self != ContrastLevel::Fail
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One background/foreground pairing in an accessibility report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastScore {
    pub background: ColorShade,
    pub foreground: ColorShade,
    pub ratio: f64,
    pub level: ContrastLevel,
    pub pass: bool,
}

/// sRGB channel (0-1) to linear light, using the WCAG 2.x 0.03928 threshold.
fn channel_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in [0, 1].
pub fn luminance(color: HexColor) -> f64 {
    let rgb = color.rgb();
    let r = channel_to_linear(f64::from(rgb.r) / 255.0);
    let g = channel_to_linear(f64::from(rgb.g) / 255.0);
    let b = channel_to_linear(f64::from(rgb.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio in [1, 21]; symmetric in its arguments.
pub fn contrast_ratio(a: HexColor, b: HexColor) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Classifies a ratio: 7 AAA, 4.5 AA, 3 AA Large, else Fail.
pub fn classify(ratio: f64) -> (ContrastLevel, bool) {
    let level = if ratio >= 7.0 {
        ContrastLevel::Aaa
    } else if ratio >= 4.5 {
        ContrastLevel::Aa
    } else if ratio >= 3.0 {
        ContrastLevel::AaLarge
    } else {
        ContrastLevel::Fail
    };
    (level, level.passes())
}

/// Scores every pair of [`ACCESSIBILITY_SHADES`] in `ramp`, highest ratio first.
///
/// The lighter-numbered shade of each pair is the background. Ties keep
/// their pairing order.
pub fn palette_accessibility(ramp: &ShadeRamp) -> Vec<ContrastScore> {
    let tested: Vec<&ColorShade> = ACCESSIBILITY_SHADES
        .iter()
        .filter_map(|&key| ramp.get(key))
        .collect();

    let mut scores: Vec<ContrastScore> = tested
        .iter()
        .enumerate()
        .flat_map(|(i, &background)| {
            tested[i + 1..].iter().map(move |&foreground| {
                let ratio = contrast_ratio(background.hex, foreground.hex);
                let (level, pass) = classify(ratio);
                ContrastScore {
                    background: *background,
                    foreground: *foreground,
                    ratio,
                    level,
                    pass,
                }
            })
        })
        .collect();

    scores.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    scores
}

/// The scores that meet at least AA Large.
pub fn passing(scores: &[ContrastScore]) -> Vec<ContrastScore> {
    scores.iter().filter(|s| s.pass).cloned().collect()
}

/// The scores below AA Large.
pub fn failing(scores: &[ContrastScore]) -> Vec<ContrastScore> {
    scores.iter().filter(|s| !s.pass).cloned().collect()
}
