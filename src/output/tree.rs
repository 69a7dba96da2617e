//! Tree formatter for ASCII output
//!
//! Lines are written depth-first, a directory before its contents. Each
//! line is the accumulated ancestor prefix, a connector, and the entry's
//! display name.

use std::io::{self, Write};

use crate::tree::Entry;

const BRANCH: &str = "├───";
const LAST_BRANCH: &str = "└───";
const CONTINUE: &str = "│\t";
const BLANK: &str = "\t";

/// Formatter for buffered or streamed tree output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Render the tree into a string.
    pub fn format(&self, tree: &[Entry]) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write(&mut buf, tree, "");
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Print the tree to stdout.
    pub fn print(&self, tree: &[Entry]) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        self.write(&mut out, tree, "")?;
        out.flush()
    }

    /// Write `tree` to `out`, every line starting with `prefix`.
    pub fn write<W: Write + ?Sized>(&self, out: &mut W, tree: &[Entry], prefix: &str) -> io::Result<()> {
        for (i, entry) in tree.iter().enumerate() {
            let is_last = i + 1 == tree.len();
            let connector = if is_last { LAST_BRANCH } else { BRANCH };

            writeln!(out, "{}{}{}", prefix, connector, entry.display_name())?;

            if let Entry::Dir { children, .. } = entry {
                let child_prefix = child_prefix(prefix, is_last);
                self.write(out, children, &child_prefix)?;
            }
        }
        Ok(())
    }
}

/// Prefix for the children of an entry.
fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, BLANK)
    } else {
        format!("{}{}", prefix, CONTINUE)
    }
}

/// Write `tree` to `out` below the given ancestor prefix (empty at the top).
///
/// Rendering has no failure modes of its own; only sink errors are returned.
pub fn render<W: Write + ?Sized>(out: &mut W, tree: &[Entry], prefix: &str) -> io::Result<()> {
    TreeFormatter::new().write(out, tree, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(tree: &[Entry]) -> String {
        let mut buf = Vec::new();
        render(&mut buf, tree, "").unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_tree_renders_nothing() {
        assert_eq!(render_to_string(&[]), "");
    }

    #[test]
    fn test_single_empty_file() {
        let tree = vec![Entry::file("x.txt", Some(0))];
        assert_eq!(render_to_string(&tree), "└───x.txt (empty)\n");
    }

    #[test]
    fn test_single_sized_file() {
        let tree = vec![Entry::file("answer", Some(42))];
        assert_eq!(render_to_string(&tree), "└───answer (42b)\n");
    }

    #[test]
    fn test_only_last_sibling_uses_last_connector() {
        let tree = vec![
            Entry::dir("a", vec![]),
            Entry::dir("b", vec![]),
            Entry::dir("c", vec![]),
            Entry::file("d", Some(1)),
        ];
        let out = render_to_string(&tree);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in &lines[..3] {
            assert!(line.starts_with(BRANCH), "line: {:?}", line);
        }
        assert!(lines[3].starts_with(LAST_BRANCH));
    }

    #[test]
    fn test_known_tree_byte_for_byte() {
        let tree = vec![
            Entry::dir("a", vec![Entry::file("x.txt", Some(0))]),
            Entry::file("b.txt", Some(10)),
        ];
        assert_eq!(
            render_to_string(&tree),
            "├───a\n│\t└───x.txt (empty)\n└───b.txt (10b)\n"
        );
    }

    #[test]
    fn test_prefix_segments_follow_ancestors() {
        // first (not last) -> mid (last) -> deep (not last) -> leaf
        let tree = vec![
            Entry::dir(
                "first",
                vec![Entry::dir(
                    "mid",
                    vec![
                        Entry::dir("deep", vec![Entry::file("leaf.rs", Some(5))]),
                        Entry::dir("other", vec![]),
                    ],
                )],
            ),
            Entry::dir("second", vec![]),
        ];
        let out = render_to_string(&tree);
        let leaf = out.lines().find(|l| l.contains("leaf.rs")).unwrap();
        assert_eq!(leaf, "│\t\t│\t└───leaf.rs (5b)");
    }

    #[test]
    fn test_directory_without_children_still_has_line() {
        let tree = vec![Entry::dir("only_files", vec![])];
        assert_eq!(render_to_string(&tree), "└───only_files\n");
    }

    #[test]
    fn test_ancestor_prefix_is_prepended() {
        let mut buf = Vec::new();
        render(&mut buf, &[Entry::dir("x", vec![])], ">>").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), ">>└───x\n");
    }

    #[test]
    fn test_format_matches_render() {
        let tree = vec![Entry::dir("a", vec![Entry::file("b", None)])];
        assert_eq!(TreeFormatter::new().format(&tree), render_to_string(&tree));
    }

    #[test]
    fn test_sink_error_is_returned() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = render(&mut Broken, &[Entry::dir("a", vec![])], "").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
