use crate::{render, structure::ProjectStructure};
use std::io;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum UitlegError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] render::RenderError),
}

/// Renders the BioDash project structure to standard output.
///
/// # Errors
///
/// Returns a [`UitlegError`] if standard output cannot be written to, for
/// example because the stream was closed by the consumer.
pub fn print_structure() -> Result<(), UitlegError> {
    let structure = ProjectStructure::biodash();

    log::debug!("rendering {} folder entries", structure.len());

    let stdout = io::stdout();

    render::render_structure(&structure, &mut stdout.lock())?;

    Ok(())
}
