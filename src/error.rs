//! Error types for header generation

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Input could not be read or output could not be written
    #[error("cannot access {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Captured codepoint token is not base-16
    #[error("invalid hex codepoint {token:?}: {source}")]
    Parse {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("U+{value:X} is not a Unicode scalar value")]
    InvalidCodepoint { value: u32 },

    #[error("malformed byte escape {escape:?}")]
    MalformedEscape { escape: String },

    #[error("invalid selector pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("config: {0}")]
    Config(String),

    #[error("failed to write manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("failed to read path from stdin: {0}")]
    Prompt(#[source] io::Error),
}

impl Error {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
