//! TreeBuilder - reads a directory hierarchy into memory

use std::fs::DirEntry;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};

use super::entry::Entry;
use super::utils::read_dir_sorted;

/// Builds the full tree below a directory before anything is rendered.
///
/// Directories are always descended into. Non-directories are dropped
/// entirely unless `include_files` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    include_files: bool,
}

impl TreeBuilder {
    pub fn new(include_files: bool) -> Self {
        Self { include_files }
    }

    /// Build the entries below `root`. The root itself is not part of the
    /// result.
    ///
    /// The first failure anywhere in the walk aborts the build; nothing
    /// collected before it is returned.
    pub fn build(&self, root: &Path) -> Result<Vec<Entry>> {
        self.build_dir(root)
    }

    fn build_dir(&self, path: &Path) -> Result<Vec<Entry>> {
        debug!(path = %path.display(), "listing directory");

        let mut tree = Vec::new();
        for dir_entry in read_dir_sorted(path)? {
            let is_dir = dir_entry
                .file_type()
                .map_err(|source| Error::Entry {
                    path: dir_entry.path(),
                    source,
                })?
                .is_dir();

            if !self.include_files && !is_dir {
                continue;
            }

            let name = dir_entry.file_name().to_string_lossy().to_string();
            trace!(name = %name, is_dir, "entry");

            let entry = if is_dir {
                let children = self.build_dir(&dir_entry.path())?;
                Entry::Dir { name, children }
            } else {
                Entry::File {
                    name,
                    size: file_size(&dir_entry),
                }
            };
            tree.push(entry);
        }

        Ok(tree)
    }
}

/// Size of a listed entry, without following symlinks.
fn file_size(dir_entry: &DirEntry) -> Option<u64> {
    match dir_entry.metadata() {
        Ok(meta) => Some(meta.len()),
        Err(e) => {
            warn!(path = %dir_entry.path().display(), error = %e, "cannot read file metadata");
            None
        }
    }
}

/// Build the tree below `path`; shorthand for `TreeBuilder::new(include_files).build(path)`.
pub fn build_tree(path: impl AsRef<Path>, include_files: bool) -> Result<Vec<Entry>> {
    TreeBuilder::new(include_files).build(path.as_ref())
}
