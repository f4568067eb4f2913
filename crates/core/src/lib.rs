#![deny(unsafe_code)]
//! Core color-derivation engine for the shadecraft palette tool.
//!
//! Provides hex/RGB/HSL conversion (`HexColor`, `Rgb`, `Hsl`), shade ramps,
//! color harmonies, WCAG contrast reports, color-vision-deficiency
//! simulation, gradients, and the `ColorSet`/`PaletteDocument` model consumed
//! by exporters. Everything is a pure function over plain values.

pub mod adjust;
pub mod color;
pub mod color_set;
pub mod contrast;
pub mod error;
pub mod gradient;
pub mod harmony;
pub mod params;
pub mod random;
pub mod shades;
pub mod vision;

pub use color::{format_hex_value, HexColor, Hsl, Rgb};
pub use color_set::{ColorSet, PaletteDocument, DEFAULT_BASE_COLOR};
pub use contrast::{contrast_ratio, palette_accessibility, ContrastLevel, ContrastScore};
pub use error::PaletteError;
pub use gradient::{Gradient, GradientKind, GradientStop, StopUpdate};
pub use harmony::{all_harmonies, harmony, ColorHarmony, HarmonyType};
pub use random::{random_color, IdGenerator, Xorshift64};
pub use shades::{generate_shades, ColorShade, ShadeOptions, ShadeRamp, SHADE_KEYS};
pub use vision::{simulate, simulate_ramp, Deficiency};
