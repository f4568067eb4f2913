//! Named color sets and the palette document that groups them with gradients.
//!
//! A [`ColorSet`] owns its shade ramp, which is always regenerated from the
//! base color, vibrancy and hue shift. Nothing here mutates in place: every
//! edit returns a new value.

use crate::color::{HexColor, Rgb};
use crate::gradient::Gradient;
use crate::shades::{generate_shades, ShadeOptions, ShadeRamp};
use serde::{Deserialize, Serialize};

/// Base color for a fresh palette.
pub const DEFAULT_BASE_COLOR: HexColor = HexColor::from_rgb(Rgb::new(0x15, 0x43, 0x7F));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ColorSetRepr")]
pub struct ColorSet {
    pub id: String,
    pub name: String,
    base_color: HexColor,
    vibrancy: f64,
    hue_shift: i32,
    shades: ShadeRamp,
}

/// The stored fields of a color set. `shades` in the input is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColorSetRepr {
    id: String,
    name: String,
    base_color: HexColor,
    #[serde(default = "default_vibrancy")]
    vibrancy: f64,
    #[serde(default)]
    hue_shift: i32,
}

fn default_vibrancy() -> f64 {
    ShadeOptions::default().vibrancy
}

impl From<ColorSetRepr> for ColorSet {
    fn from(repr: ColorSetRepr) -> Self {
        ColorSet::new(
            repr.id,
            repr.name,
            repr.base_color,
            ShadeOptions::new(repr.vibrancy, repr.hue_shift),
        )
    }
}

impl ColorSet {
    /// Builds a set and generates its shades.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_color: HexColor,
        options: ShadeOptions,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_color,
            vibrancy: options.vibrancy,
            hue_shift: options.hue_shift,
            shades: generate_shades(base_color, options),
        }
    }

    /// The color the ramp is derived from.
    pub fn base_color(&self) -> HexColor {
        self.base_color
    }

    /// Vibrancy as stored, before the ramp's ceiling applies.
    pub fn vibrancy(&self) -> f64 {
        self.vibrancy
    }

    /// Degrees added to the base hue.
    pub fn hue_shift(&self) -> i32 {
        self.hue_shift
    }

    /// Vibrancy and hue shift as generator options.
    pub fn options(&self) -> ShadeOptions {
        ShadeOptions::new(self.vibrancy, self.hue_shift)
    }

    /// The generated ten-shade ramp.
    pub fn shades(&self) -> &ShadeRamp {
        &self.shades
    }

    /// Copy on a new base color, shades regenerated.
    pub fn with_base_color(&self, base_color: HexColor) -> ColorSet {
        ColorSet::new(self.id.clone(), self.name.clone(), base_color, self.options())
    }

    /// Copy with a new vibrancy, shades regenerated.
    pub fn with_vibrancy(&self, vibrancy: f64) -> ColorSet {
        let options = ShadeOptions::new(vibrancy, self.hue_shift);
        ColorSet::new(self.id.clone(), self.name.clone(), self.base_color, options)
    }

    /// Copy with a new hue shift, shades regenerated.
    pub fn with_hue_shift(&self, hue_shift: i32) -> ColorSet {
        let options = ShadeOptions::new(self.vibrancy, hue_shift);
        ColorSet::new(self.id.clone(), self.name.clone(), self.base_color, options)
    }

    /// Copy with a new display name; shades are kept.
    pub fn renamed(&self, name: impl Into<String>) -> ColorSet {
        ColorSet {
            name: name.into(),
            ..self.clone()
        }
    }
}

/// Everything an export needs: the color sets and the gradients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteDocument {
    pub color_sets: Vec<ColorSet>,
    #[serde(default)]
    pub gradients: Vec<Gradient>,
}

impl Default for PaletteDocument {
    /// A single "Primary" set on the default base color, no gradients.
    fn default() -> Self {
        Self::new(ColorSet::new(
            "primary",
            "Primary",
            DEFAULT_BASE_COLOR,
            ShadeOptions::default(),
        ))
    }
}

impl PaletteDocument {
    /// A document holding only `first`.
    pub fn new(first: ColorSet) -> Self {
        Self {
            color_sets: vec![first],
            gradients: Vec::new(),
        }
    }

    /// First set with `id`.
    pub fn color_set(&self, id: &str) -> Option<&ColorSet> {
        self.color_sets.iter().find(|s| s.id == id)
    }

    /// First gradient with `id`.
    pub fn gradient(&self, id: &str) -> Option<&Gradient> {
        self.gradients.iter().find(|g| g.id == id)
    }

    /// Appends a set named `Color N` with default options, N being the new count.
    pub fn add_color_set(&self, id: impl Into<String>, base_color: HexColor) -> PaletteDocument {
        let name = format!("Color {}", self.color_sets.len() + 1);
        self.with_color_set(ColorSet::new(id, name, base_color, ShadeOptions::default()))
    }

    /// Appends `set` as is.
    pub fn with_color_set(&self, set: ColorSet) -> PaletteDocument {
        let mut next = self.clone();
        next.color_sets.push(set);
        next
    }

    /// Replaces the set with the same id; shades are regenerated from its fields.
    pub fn update_color_set(&self, set: &ColorSet) -> PaletteDocument {
        let fresh = ColorSet::new(set.id.clone(), set.name.clone(), set.base_color, set.options());
        let mut next = self.clone();
        for slot in next.color_sets.iter_mut().filter(|s| s.id == fresh.id) {
            *slot = fresh.clone();
        }
        next
    }

    /// Removes every set with `id`, or returns `None` if none would remain.
    pub fn try_remove_color_set(&self, id: &str) -> Option<PaletteDocument> {
        let color_sets = keep_nonempty(&self.color_sets, |s| s.id != id)?;
        Some(PaletteDocument {
            color_sets,
            gradients: self.gradients.clone(),
        })
    }

    /// Like [`PaletteDocument::try_remove_color_set`], unchanged at the floor.
    pub fn remove_color_set(&self, id: &str) -> PaletteDocument {
        self.try_remove_color_set(id).unwrap_or_else(|| self.clone())
    }

    /// Appends `gradient` as is.
    pub fn add_gradient(&self, gradient: Gradient) -> PaletteDocument {
        let mut next = self.clone();
        next.gradients.push(gradient);
        next
    }

    /// Replaces the gradient with the same id.
    pub fn update_gradient(&self, gradient: &Gradient) -> PaletteDocument {
        let mut next = self.clone();
        for slot in next.gradients.iter_mut().filter(|g| g.id == gradient.id) {
            *slot = gradient.clone();
        }
        next
    }

    /// Removes every gradient with `id`, or returns `None` if none would remain.
    pub fn try_remove_gradient(&self, id: &str) -> Option<PaletteDocument> {
        let gradients = keep_nonempty(&self.gradients, |g| g.id != id)?;
        Some(PaletteDocument {
            color_sets: self.color_sets.clone(),
            gradients,
        })
    }

    /// Like [`PaletteDocument::try_remove_gradient`], unchanged at the floor.
    pub fn remove_gradient(&self, id: &str) -> PaletteDocument {
        self.try_remove_gradient(id).unwrap_or_else(|| self.clone())
    }
}

/// Items passing `keep`, or `None` if that would leave nothing.
fn keep_nonempty<T: Clone>(items: &[T], keep: impl Fn(&T) -> bool) -> Option<Vec<T>> {
    let kept: Vec<T> = items.iter().filter(|item| keep(item)).cloned().collect();
    (!kept.is_empty()).then_some(kept)
}
