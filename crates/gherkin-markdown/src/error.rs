//! Errors raised while parsing and converting feature files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning Gherkin into Markdown.
///
/// Rendering itself cannot fail; every variant comes from the parser or the
/// file system and carries the original cause.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The source text is not valid Gherkin.
    #[error("failed to parse feature: {0}")]
    Parse(#[from] gherkin::ParseError),

    /// The feature groups scenarios under `Rule:` blocks, which have no
    /// Markdown representation.
    #[error("rule blocks are not supported (found rule '{name}')")]
    UnsupportedRule {
        /// Name of the first rule encountered.
        name: String,
    },

    /// A source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A destination file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A destination directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The source directory could not be traversed.
    #[error("failed to walk source directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
