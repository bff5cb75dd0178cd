use crate::error::MergecatError;
use crate::options::MergeOptions;
use crate::output::write_record;
use crate::types::{MergeReport, Record, RecordBody};
use ignore::WalkBuilder;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, options: &MergeOptions) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = PathBuf> {
        self.inner.filter_map(|result| match result {
            Ok(entry) => {
                let path = entry.into_path();
                path.is_file().then_some(path)
            }
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Walk error, entry skipped: {}", _e);
                None
            }
        })
    }
}
fn read_file_text(path: &Path) -> Result<String, MergecatError> {
    let file = File::open(path).map_err(|e| MergecatError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| MergecatError::io(path, e))?;
    Ok(content)
}
fn build_record(root: &Path, path: PathBuf) -> Record {
    let relative_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
    let body = match read_file_text(&path) {
        Ok(content) => RecordBody::Text(content),
        Err(e) => RecordBody::ReadError(e.to_string()),
    };
    Record {
        root: root.to_path_buf(),
        relative_path,
        body,
    }
}
/// Merges every file under `options.roots`, in root order, into the file at
/// `output_path` (created or truncated). Per-file read failures are written
/// into the output as error records; only I/O errors on `output_path` itself
/// abort the run.
pub fn merge(
    options: MergeOptions,
    output_path: impl AsRef<Path>,
) -> Result<MergeReport, MergecatError> {
    let output_path = output_path.as_ref();
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Starting merge of {} roots into {}",
        options.roots.len(),
        output_path.display()
    );
    let file = File::create(output_path).map_err(|e| MergecatError::io(output_path, e))?;
    let mut writer = BufWriter::new(file);
    let mut report = MergeReport::default();
    for root in &options.roots {
        if !root.is_dir() {
            // A missing root, or a root naming a plain file, contributes no records.
            #[cfg(feature = "logging")]
            tracing::warn!("Root {} is not a directory, skipping", root.display());
            report.skipped_roots += 1;
            continue;
        }
        for path in Walker::new(root, &options).into_iter() {
            let record = build_record(root, path);
            if matches!(record.body, RecordBody::ReadError(_)) {
                report.read_errors += 1;
            }
            write_record(&mut writer, &record).map_err(|e| MergecatError::io(output_path, e))?;
            report.files += 1;
        }
    }
    writer
        .flush()
        .map_err(|e| MergecatError::io(output_path, e))?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Merge complete: {} files, {} read errors",
        report.files,
        report.read_errors
    );
    Ok(report)
}
