//! Error types shared by the extractor, the document model and the CLI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can make a filter run fail.
///
/// Unknown directive modes and mis-bounded blocks are deliberately absent:
/// the first passes through untouched, the second is a known limitation of
/// the block boundary heuristic and is never detected.
#[derive(Debug, Error)]
pub enum Error {
    /// A file referenced by a directive is missing or unreadable.
    #[error("cannot read source file '{}': {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The pandoc AST on stdin could not be decoded.
    #[error("invalid pandoc document: {0}")]
    Document(#[from] serde_json::Error),

    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

impl Error {
    pub fn resource(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Resource {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
