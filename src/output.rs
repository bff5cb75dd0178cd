//! Record rendering for merged output.
//!
//! Defines the exact on-disk form of one record: a `// {root}/{relative path}`
//! header line, then the file's content verbatim (or a single
//! `// Error reading file: ...` line), then one blank line as separator.

use crate::types::{Record, RecordBody};
use std::io::{self, Write};

/// Renders a record into its exact output form.
pub fn render_record(record: &Record) -> String {
    let mut out = String::with_capacity(64);
    out.push_str(&format!(
        "// {}/{}\n",
        record.root.display(),
        record.relative_path.display()
    ));
    match &record.body {
        RecordBody::Text(content) => out.push_str(content),
        RecordBody::ReadError(msg) => out.push_str(&format!("// Error reading file: {}\n", msg)),
    }
    out.push_str("\n\n");
    out
}

/// Writes a record to `writer` in its exact output form.
pub fn write_record<W: Write>(writer: &mut W, record: &Record) -> io::Result<()> {
    writer.write_all(render_record(record).as_bytes())
}
