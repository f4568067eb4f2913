//! Writing rendered exports to disk.

use crate::{render_document, ExportFormat};
use shadecraft_core::{PaletteDocument, PaletteError};
use std::path::Path;

/// Renders `document` as `format` and writes it to `path`.
///
/// Returns `PaletteError::Io` if the file cannot be written.
pub fn write_export(
    format: ExportFormat,
    document: &PaletteDocument,
    path: &Path,
) -> Result<(), PaletteError> {
    let text = render_document(format, document);
    std::fs::write(path, &text)
        .map_err(|e| PaletteError::Io(format!("{}: {e}", path.display())))?;
    tracing::info!(
        format = format.id(),
        path = %path.display(),
        bytes = text.len(),
        "wrote export"
    );
    Ok(())
}
