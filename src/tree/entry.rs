//! In-memory tree node

use super::utils::size_descriptor;

/// One filesystem object found while listing a directory.
///
/// Only directories carry children, so a file can never have any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File {
        name: String,
        /// `None` when the entry's metadata could not be read.
        size: Option<u64>,
    },
    Dir {
        name: String,
        children: Vec<Entry>,
    },
}

impl Entry {
    pub fn file(name: impl Into<String>, size: Option<u64>) -> Self {
        Entry::File {
            name: name.into(),
            size,
        }
    }

    pub fn dir(name: impl Into<String>, children: Vec<Entry>) -> Self {
        Entry::Dir {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::File { name, .. } => name,
            Entry::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Dir { .. })
    }

    pub fn children(&self) -> &[Entry] {
        match self {
            Entry::Dir { children, .. } => children,
            Entry::File { .. } => &[],
        }
    }

    /// Size in bytes; always `None` for directories.
    pub fn size(&self) -> Option<u64> {
        match self {
            Entry::File { size, .. } => *size,
            Entry::Dir { .. } => None,
        }
    }

    /// `"empty"` or `"<N>b"`, see [`size_descriptor`].
    pub fn size_descriptor(&self) -> String {
        size_descriptor(self.size())
    }

    /// Label shown on the entry's line: the bare name for directories,
    /// `name (size)` for everything else.
    pub fn display_name(&self) -> String {
        match self {
            Entry::Dir { name, .. } => name.clone(),
            Entry::File { name, .. } => format!("{} ({})", name, self.size_descriptor()),
        }
    }
}
