use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The body of a record: what goes under the header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordBody {
    /// The file's content, exactly as read.
    Text(String),
    /// The message of the error that prevented the file from being read
    /// as UTF-8 text. Rendered as a single `// Error reading file: ...` line.
    ReadError(String),
}

/// One unit of output: a file discovered under one of the roots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// The root directory the file was discovered under, verbatim as supplied.
    pub root: PathBuf,
    /// The file's path relative to its owning root.
    pub relative_path: PathBuf,
    /// The file's content, or the read error that stands in for it.
    pub body: RecordBody,
}

/// Summary of a completed merge run.
///
/// The merged file on disk is the primary product; the report only counts
/// what was written to it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MergeReport {
    /// Number of records written, including ones whose body is an error line.
    pub files: usize,
    /// Number of records whose file could not be read as UTF-8 text.
    pub read_errors: usize,
    /// Number of supplied roots that were missing or not directories.
    pub skipped_roots: usize,
}
