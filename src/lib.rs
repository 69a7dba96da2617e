//! dirtree - render a directory as an ASCII tree

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{TreeFormatter, dir_tree, render};
pub use tree::{Entry, TreeBuilder, build_tree, size_descriptor};
