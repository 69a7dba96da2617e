//! Directory tree building
//!
//! The whole hierarchy is read into memory as [`Entry`] values before any
//! output is produced, so a failed build never leaves partial output behind.

mod builder;
mod entry;
mod utils;

pub use builder::{TreeBuilder, build_tree};
pub use entry::Entry;
pub use utils::size_descriptor;
