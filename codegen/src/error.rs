//! Contains the error type of the generator.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Read { path: PathBuf, #[source] source: std::io::Error },

    #[error("failed to write {}", path.display())]
    Write { path: PathBuf, #[source] source: std::io::Error },

    /// The source file is no valid Rust, or does not contain a usable constant group.
    #[error("{}:{line}:{column}: {message}", path.display())]
    Parse { path: PathBuf, line: usize, column: usize, message: String },

    #[error("invalid runtime crate path `{0}`")]
    Runtime(String),

    #[error("rustfmt failed on {}: {message}", path.display())]
    Format { path: PathBuf, message: String }
}

impl Error {
    /// Attaches the location of `error` in the file at `path`. Columns are reported 1-based.
    pub(crate) fn parse(path: impl Into<PathBuf>, error: syn::Error) -> Self {
        let start = error.span().start();

        Self::Parse {
            path: path.into(),
            line: start.line,
            column: start.column + 1,
            message: error.to_string()
        }
    }
}
