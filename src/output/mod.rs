//! Output formatting for directory trees

mod tree;

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::tree::build_tree;

pub use tree::{TreeFormatter, render};

/// Build the tree below `path` and write it to `out`.
///
/// Nothing is written unless the whole build succeeds.
pub fn dir_tree<W: Write + ?Sized>(out: &mut W, path: impl AsRef<Path>, include_files: bool) -> Result<()> {
    let tree = build_tree(path, include_files)?;
    render(out, &tree, "")?;
    Ok(())
}
