//! Shared helpers for building and describing tree entries

use std::fs::{self, DirEntry};
use std::path::Path;

use crate::error::{Error, Result};

/// Describe a file size for display: `"empty"` for zero or unknown sizes,
/// otherwise the exact byte count with a `b` suffix. No unit scaling.
pub fn size_descriptor(size: Option<u64>) -> String {
    match size {
        Some(bytes) if bytes > 0 => format!("{}b", bytes),
        _ => "empty".to_string(),
    }
}

/// List a directory, sorted by file name.
///
/// Any failure, whether opening the directory or reading one of its
/// entries, aborts the listing.
pub fn read_dir_sorted(path: &Path) -> Result<Vec<DirEntry>> {
    let entries = fs::read_dir(path).map_err(|source| Error::ReadDir {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = entries
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|source| Error::Entry {
            path: path.to_path_buf(),
            source,
        })?;
    entries.sort_by_key(|a| a.file_name());

    Ok(entries)
}
