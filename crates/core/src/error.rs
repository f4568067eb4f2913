//! Error types for the shadecraft core.
//!
//! The engine itself never fails on numeric input or free-text colors (see
//! [`crate::color::format_hex_value`]). These errors only surface at strict
//! boundaries: typed parsing, deserialization and file output.

use thiserror::Error;

/// Errors produced at the strict edges of the color engine.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A color string was not a 6-digit hex color.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A gradient would have fewer than the required two stops.
    #[error("invalid gradient: {0}")]
    InvalidGradient(String),

    /// A vision-deficiency id was not found in the catalogue.
    #[error("unknown vision deficiency: {0}")]
    UnknownDeficiency(String),

    /// A harmony type name was not recognized.
    #[error("unknown harmony: {0}")]
    UnknownHarmony(String),

    /// An export format id was not recognized.
    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    /// Writing an export to disk failed.
    #[error("I/O error: {0}")]
    Io(String),
}
