//! Command-line interface for mergecat.
//!
//! This binary provides access to the mergecat library functionality,
//! merging every file under the given directories into one output file.

use clap::Parser;
use mergecat::{MergeBuilder, MergeOptions, merge};
use std::path::PathBuf;
use std::process::exit;

/// mergecat — flatten directory trees into one annotated text file
#[derive(Parser)]
#[command(name = "mergecat", version, about, long_about = None)]
struct Cli {
    /// Output file (created or truncated)
    output: PathBuf,

    /// Directories to merge, in order
    #[arg(required = true)]
    roots: Vec<PathBuf>,

    /// Follow directory symlinks while walking
    #[arg(long)]
    follow_links: bool,
}

impl Cli {
    fn into_options(self) -> (MergeOptions, PathBuf) {
        let options = MergeBuilder::new(self.roots)
            .follow_links(self.follow_links)
            .build();
        (options, self.output)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, output) = cli.into_options();

    for root in &options.roots {
        if !root.is_dir() {
            eprintln!(
                "warning: {} is not a directory, it will produce no records",
                root.display()
            );
        }
    }

    if let Err(e) = merge(options, &output) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
