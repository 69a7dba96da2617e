//! CLI entry point for dirtree

use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirtree::{TreeBuilder, TreeFormatter, logging};
use tracing::debug;

/// Second argument that switches on file listing.
const FILES_FLAG: &str = "-f";

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Render a directory as an ASCII tree")]
#[command(override_usage = "dirtree <PATH> [-f]")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Directory to display
    path: PathBuf,

    /// Pass -f to include files with their sizes (directories only otherwise)
    #[arg(value_name = "-f", allow_hyphen_values = true)]
    mode: Option<String>,
}

impl Args {
    fn include_files(&self) -> bool {
        self.mode.as_deref() == Some(FILES_FLAG)
    }
}

fn main() {
    logging::init_logging();

    let args = Args::parse();

    let include_files = args.include_files();
    debug!(path = %args.path.display(), include_files, "starting");

    let tree = match TreeBuilder::new(include_files).build(&args.path) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("dirtree: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = TreeFormatter::new().print(&tree) {
        eprintln!("dirtree: error writing output: {}", e);
        process::exit(1);
    }
}
