//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: palette error (gradient with too few colors)
//! - 11: I/O error (reading a document, writing an export)
//! - 12: input error (bad JSON document, unknown format, deficiency or harmony)
//! - 13: serialization error

use shadecraft_core::PaletteError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A palette-model error the user could not have avoided by spelling.
    Palette(PaletteError),
    /// An I/O error (document read, export write).
    Io(String),
    /// A user input error (unknown name, malformed document).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Palette(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Palette(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<PaletteError> for CliError {
    fn from(e: PaletteError) -> Self {
        match e {
            PaletteError::Io(msg) => CliError::Io(msg),
            PaletteError::InvalidColor(_)
            | PaletteError::UnknownDeficiency(_)
            | PaletteError::UnknownHarmony(_)
            | PaletteError::UnknownFormat(_) => CliError::Input(e.to_string()),
            PaletteError::InvalidGradient(_) => CliError::Palette(e),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
