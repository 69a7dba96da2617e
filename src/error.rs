//! Error type for dirtree operations

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or writing a tree.
///
/// Build errors are created where the filesystem call failed and travel up
/// through the recursion untouched, so the path always names the deepest
/// directory that could not be read.
#[derive(Error, Debug)]
pub enum Error {
    /// A directory could not be listed (missing, not a directory, no permission)
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry inside a listing could not be inspected
    #[error("cannot read entry in '{}': {source}", path.display())]
    Entry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output sink failed
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::ReadDir { path, .. } | Error::Entry { path, .. } => Some(path),
            Error::Output(_) => None,
        }
    }

    /// Underlying I/O error kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::ReadDir { source, .. } | Error::Entry { source, .. } => source.kind(),
            Error::Output(e) => e.kind(),
        }
    }
}
