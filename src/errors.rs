use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("I/O error: writing to the output stream")]
#[diagnostic(
    code(uitleg::io),
    help("Check that standard output is open and writable.")
)]
pub struct StreamError {
    #[source]
    pub source: std::io::Error,
}

impl StreamError {
    pub fn new(error: std::io::Error) -> Self {
        Self { source: error }
    }
}
