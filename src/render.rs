use crate::{errors::StreamError, structure::ProjectStructure};
use miette::Diagnostic;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("I/O error within render domain")]
    #[diagnostic(code(uitleg::render::io))]
    Stream(#[from] StreamError),
}

/// Writes the structure to `out` as plain text.
///
/// The header line comes first, then one block per folder in declaration
/// order: a blank line, the folder path, and each entry indented by two spaces
/// behind a `- ` marker. A folder with no entries still gets its path line.
/// Output ends at the final entry's newline, so there is no trailing blank
/// line.
pub fn render_structure<W: Write>(
    structure: &ProjectStructure,
    out: &mut W,
) -> Result<(), RenderError> {
    writeln!(out, "Project structure for {}:", structure.name()).map_err(StreamError::new)?;

    for (folder, entries) in structure.folders() {
        writeln!(out, "\n{}", folder).map_err(StreamError::new)?;

        for entry in entries {
            writeln!(out, "  - {}", entry).map_err(StreamError::new)?;
        }
    }

    Ok(())
}
