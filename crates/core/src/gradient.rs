//! Linear and radial gradients over ordered color stops.
//!
//! A [`Gradient`] always has at least two stops. Mutations return new values;
//! removing a stop at the floor is refused rather than reported as an error.

use crate::adjust::blend;
use crate::color::{HexColor, Rgb};
use crate::error::PaletteError;
use crate::random::IdGenerator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of stops a gradient may have.
pub const MIN_STOPS: usize = 2;

const DEFAULT_START: HexColor = HexColor::from_rgb(Rgb::new(0x3B, 0x82, 0xF6));
const DEFAULT_END: HexColor = HexColor::from_rgb(Rgb::new(0x8B, 0x5C, 0xF6));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub id: String,
    pub color: HexColor,
    /// Percentage along the gradient, nominally 0-100.
    pub position: f64,
}

impl GradientStop {
    /// A stop at `position` percent.
    pub fn new(id: impl Into<String>, color: HexColor, position: f64) -> Self {
        Self {
            id: id.into(),
            color,
            position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientKind::Linear => f.write_str("linear"),
            GradientKind::Radial => f.write_str("radial"),
        }
    }
}

/// Partial stop edit; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopUpdate {
    #[serde(default)]
    pub color: Option<HexColor>,
    #[serde(default)]
    pub position: Option<f64>,
}

/// Wire shape of a gradient, validated into [`Gradient`].
#[derive(Deserialize)]
struct GradientRepr {
    id: String,
    name: String,
    #[serde(rename = "type", default)]
    kind: GradientKind,
    stops: Vec<GradientStop>,
    #[serde(default = "default_angle")]
    angle: f64,
}

fn default_angle() -> f64 {
    90.0
}

impl TryFrom<GradientRepr> for Gradient {
    type Error = PaletteError;

    fn try_from(repr: GradientRepr) -> Result<Self, Self::Error> {
        Gradient::new(repr.id, repr.name, repr.kind, repr.stops, repr.angle)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GradientRepr")]
pub struct Gradient {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GradientKind,
    stops: Vec<GradientStop>,
    /// Degrees; only meaningful for linear gradients.
    pub angle: f64,
}

impl Gradient {
    /// Builds a gradient, rejecting fewer than [`MIN_STOPS`] stops.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: GradientKind,
        stops: Vec<GradientStop>,
        angle: f64,
    ) -> Result<Self, PaletteError> {
        if stops.len() < MIN_STOPS {
            return Err(PaletteError::InvalidGradient(format!(
                "a gradient needs at least {MIN_STOPS} stops, got {}",
                stops.len()
            )));
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            kind,
            stops,
            angle,
        })
    }

    /// A blue-to-violet linear gradient at 90 degrees.
    pub fn with_defaults(id: impl Into<String>, ids: &mut IdGenerator) -> Self {
        Self {
            id: id.into(),
            name: "New Gradient".to_string(),
            kind: GradientKind::Linear,
            stops: vec![
                GradientStop::new(ids.next_stop_id(), DEFAULT_START, 0.0),
                GradientStop::new(ids.next_stop_id(), DEFAULT_END, 100.0),
            ],
            angle: 90.0,
        }
    }

    /// Spreads `colors` evenly from 0 to 100 in a linear gradient.
    pub fn from_colors(
        id: impl Into<String>,
        colors: &[HexColor],
        ids: &mut IdGenerator,
    ) -> Result<Self, PaletteError> {
        if colors.len() < MIN_STOPS {
            return Err(PaletteError::InvalidGradient(format!(
                "a gradient needs at least {MIN_STOPS} colors, got {}",
                colors.len()
            )));
        }
        let last = (colors.len() - 1) as f64;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| {
                GradientStop::new(ids.next_stop_id(), color, i as f64 / last * 100.0)
            })
            .collect();
        Self::new(id, "Shade Gradient", GradientKind::Linear, stops, 90.0)
    }

    /// Stops in insertion order.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Stops ordered by position; ties keep insertion order.
    pub fn sorted_stops(&self) -> Vec<&GradientStop> {
        let mut sorted: Vec<&GradientStop> = self.stops.iter().collect();
        sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
        sorted
    }

    /// CSS `linear-gradient(...)` or `radial-gradient(circle, ...)` value.
    pub fn css_string(&self) -> String {
        let stops = self
            .sorted_stops()
            .iter()
            .map(|s| format!("{} {}%", s.color, s.position))
            .collect::<Vec<_>>()
            .join(", ");
        match self.kind {
            GradientKind::Linear => format!("linear-gradient({}deg, {stops})", self.angle),
            GradientKind::Radial => format!("radial-gradient(circle, {stops})"),
        }
    }

    /// Interpolated color at `position`, clamped to the outermost stops.
    pub fn color_at(&self, position: f64) -> HexColor {
        let sorted = self.sorted_stops();
        let (first, last) = match (sorted.first(), sorted.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return HexColor::BLACK,
        };
        if position <= first.position {
            return first.color;
        }
        if position >= last.position {
            return last.color;
        }

        sorted
            .windows(2)
            .find(|pair| position >= pair[0].position && position <= pair[1].position)
            .map(|pair| {
                let (before, after) = (pair[0], pair[1]);
                let range = after.position - before.position;
                if range == 0.0 {
                    return before.color;
                }
                blend(before.color, after.color, (position - before.position) / range)
            })
            .unwrap_or(HexColor::BLACK)
    }

    /// Appends `stop`; positions need not be ordered.
    pub fn add_stop(&self, stop: GradientStop) -> Gradient {
        let mut next = self.clone();
        next.stops.push(stop);
        next
    }

    /// Removes every stop with `stop_id`, or returns `None` when that would
    /// leave fewer than [`MIN_STOPS`].
    pub fn try_remove_stop(&self, stop_id: &str) -> Option<Gradient> {
        let stops: Vec<GradientStop> = self
            .stops
            .iter()
            .filter(|s| s.id != stop_id)
            .cloned()
            .collect();
        if stops.len() < MIN_STOPS {
            return None;
        }
        Some(Gradient {
            stops,
            ..self.clone()
        })
    }

    /// Like [`Gradient::try_remove_stop`], but returns the gradient unchanged
    /// at the floor.
    pub fn remove_stop(&self, stop_id: &str) -> Gradient {
        self.try_remove_stop(stop_id).unwrap_or_else(|| self.clone())
    }

    /// Applies `update` to the stop with `stop_id`; unknown ids change nothing.
    pub fn update_stop(&self, stop_id: &str, update: &StopUpdate) -> Gradient {
        let mut next = self.clone();
        if let Some(stop) = next.stops.iter_mut().find(|s| s.id == stop_id) {
            if let Some(color) = update.color {
                stop.color = color;
            }
            if let Some(position) = update.position {
                stop.position = position;
            }
        }
        next
    }

    /// Copy with a new display name.
    pub fn renamed(&self, name: impl Into<String>) -> Gradient {
        Gradient {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Copy switched to `kind`.
    pub fn with_kind(&self, kind: GradientKind) -> Gradient {
        Gradient {
            kind,
            ..self.clone()
        }
    }

    /// Copy with the linear angle set to `angle` degrees.
    pub fn with_angle(&self, angle: f64) -> Gradient {
        Gradient {
            angle,
            ..self.clone()
        }
    }
}
