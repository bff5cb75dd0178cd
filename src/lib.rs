//! # Mergecat
//!
//! `mergecat` flattens one or more directory trees into a single text file.
//! Every file found under the given roots becomes one record in the output:
//! a `// {root}/{relative path}` header line, the file's UTF-8 content, and a
//! blank-line separator. Files that cannot be read as UTF-8 text get an inline
//! `// Error reading file: ...` line instead of content, and never abort the run.
//!
//! Roots are processed in the order given and the walk is name-sorted, so the
//! output for a fixed directory tree is reproducible run to run.
//!
//! # Features
//!
//! - `logging`: Enables debug/warn logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use mergecat::{MergeBuilder, merge};
//!
//! let options = MergeBuilder::new(["src", "docs"]).build();
//!
//! let report = merge(options, "merged_code.txt").expect("Failed to merge directories");
//!
//! println!(
//!     "merged {} files ({} unreadable)",
//!     report.files, report.read_errors
//! );
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::merge;
pub use error::MergecatError;
pub use options::{MergeBuilder, MergeOptions};
pub use types::{MergeReport, Record, RecordBody};
