#![deny(unsafe_code)]
//! Export formatting: renders color sets and gradients into style-system
//! source files.
//!
//! This crate sits between `shadecraft-core` (which owns the palette model)
//! and the outer surfaces. Both the CLI and WASM bindings depend on it so the
//! format dispatch lives in one place.

mod naming;
mod json;
mod stylesheet;
mod theme;
pub mod write;

use serde::{Deserialize, Serialize};
use shadecraft_core::{ColorSet, Gradient, PaletteDocument, PaletteError};
use std::fmt;
use std::str::FromStr;

pub use write::write_export;

/// All supported export targets, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Css,
    Scss,
    Less,
    Tailwind,
    Unocss,
    Windicss,
    Styled,
    Mui,
    Chakra,
    Json,
}

impl ExportFormat {
    /// All formats in menu order.
    pub fn all() -> [ExportFormat; 10] {
        [
            ExportFormat::Css,
            ExportFormat::Scss,
            ExportFormat::Less,
            ExportFormat::Tailwind,
            ExportFormat::Unocss,
            ExportFormat::Windicss,
            ExportFormat::Styled,
            ExportFormat::Mui,
            ExportFormat::Chakra,
            ExportFormat::Json,
        ]
    }

    /// Lowercase id accepted by `FromStr`.
    pub fn id(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Less => "less",
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Unocss => "unocss",
            ExportFormat::Windicss => "windicss",
            ExportFormat::Styled => "styled",
            ExportFormat::Mui => "mui",
            ExportFormat::Chakra => "chakra",
            ExportFormat::Json => "json",
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Css => "CSS Variables",
            ExportFormat::Scss => "SCSS Variables",
            ExportFormat::Less => "Less Variables",
            ExportFormat::Tailwind => "Tailwind Config",
            ExportFormat::Unocss => "UnoCSS Theme",
            ExportFormat::Windicss => "WindiCSS Theme",
            ExportFormat::Styled => "Styled Components",
            ExportFormat::Mui => "Material UI Theme",
            ExportFormat::Chakra => "Chakra UI Theme",
            ExportFormat::Json => "JSON",
        }
    }

    /// One-line description of the output.
    pub fn description(self) -> &'static str {
        match self {
            ExportFormat::Css => "CSS custom properties",
            ExportFormat::Scss => "Sass variables",
            ExportFormat::Less => "Less variables",
            ExportFormat::Tailwind => "Tailwind CSS configuration",
            ExportFormat::Unocss => "UnoCSS theme configuration",
            ExportFormat::Windicss => "WindiCSS theme configuration",
            ExportFormat::Styled => "Styled Components theme",
            ExportFormat::Mui => "Material UI theme",
            ExportFormat::Chakra => "Chakra UI theme",
            ExportFormat::Json => "JSON format",
        }
    }

    /// File extension without the dot.
    pub fn file_extension(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Less => "less",
            ExportFormat::Json => "json",
            ExportFormat::Tailwind
            | ExportFormat::Unocss
            | ExportFormat::Windicss
            | ExportFormat::Styled
            | ExportFormat::Mui
            | ExportFormat::Chakra => "js",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExportFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ExportFormat::all()
            .into_iter()
            .find(|f| f.id() == wanted)
            .ok_or_else(|| PaletteError::UnknownFormat(s.to_string()))
    }
}

/// Renders `color_sets` and `gradients` as `format` source text.
pub fn render(format: ExportFormat, color_sets: &[ColorSet], gradients: &[Gradient]) -> String {
    tracing::debug!(
        format = format.id(),
        color_sets = color_sets.len(),
        gradients = gradients.len(),
        "rendering export"
    );
    match format {
        ExportFormat::Css => stylesheet::css_variables(color_sets, gradients),
        ExportFormat::Scss => stylesheet::scss_variables(color_sets, gradients),
        ExportFormat::Less => stylesheet::less_variables(color_sets, gradients),
        ExportFormat::Tailwind => theme::tailwind_config(color_sets, gradients),
        ExportFormat::Unocss => theme::unocss_theme(color_sets, gradients),
        ExportFormat::Windicss => theme::windicss_theme(color_sets, gradients),
        ExportFormat::Styled => theme::styled_components_theme(color_sets, gradients),
        ExportFormat::Mui => theme::material_ui_theme(color_sets, gradients),
        ExportFormat::Chakra => theme::chakra_ui_theme(color_sets, gradients),
        ExportFormat::Json => json::json_document(color_sets, gradients),
    }
}

/// Renders a whole palette document.
pub fn render_document(format: ExportFormat, document: &PaletteDocument) -> String {
    render(format, &document.color_sets, &document.gradients)
}
