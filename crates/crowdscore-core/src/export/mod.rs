//! CSV export and console table formatting for CrowdScore series.

mod table;

pub use table::{SCORE_HEADER, ScoreRow, ScoreTable, TIME_HEADER, TableFormatter, TableStyle};

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::export::CSV_COLUMNS;
use crate::score::ScoreRecord;

/// Platform line terminator used for exported rows.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

pub fn format_csv_header() -> String {
    CSV_COLUMNS.join(",")
}

pub fn format_csv_row(record: &ScoreRecord) -> String {
    format!("{},{}", escape_csv_field(&record.timestamp), record.score)
}

/// Quote a field containing a delimiter, quote or line break.
fn escape_csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Write the header and one row per record, in the given order.
pub fn write_csv<W: Write>(records: &[ScoreRecord], writer: &mut W) -> io::Result<()> {
    write!(writer, "{}{}", format_csv_header(), LINE_ENDING)?;
    for record in records {
        write!(writer, "{}{}", format_csv_row(record), LINE_ENDING)?;
    }
    Ok(())
}

/// Result of an export attempt.
///
/// Export failures are reported here instead of being raised, so a failed
/// write never masks a successful retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    NoData,
    Failed { path: PathBuf, message: String },
}

impl ExportOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, ExportOutcome::Written { .. })
    }
}

impl fmt::Display for ExportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportOutcome::Written { path, .. } => {
                write!(f, "[Success] Data saved to file: {}", path.display())
            }
            ExportOutcome::NoData => write!(f, "No data"),
            ExportOutcome::Failed { message, .. } => write!(f, "[FAIL] Error saving data: {}", message),
        }
    }
}

/// Export records to a CSV file at `path`.
///
/// An empty series writes nothing and returns [`ExportOutcome::NoData`].
pub fn export_csv<P: AsRef<Path>>(records: &[ScoreRecord], path: P) -> ExportOutcome {
    let path = path.as_ref();

    if records.is_empty() {
        info!("No scores to export, skipping {}", path.display());
        return ExportOutcome::NoData;
    }

    match write_csv_file(records, path) {
        Ok(()) => {
            info!("Exported {} scores to {}", records.len(), path.display());
            ExportOutcome::Written {
                path: path.to_path_buf(),
                rows: records.len(),
            }
        }
        Err(e) => {
            warn!("Failed to export scores to {}: {}", path.display(), e);
            ExportOutcome::Failed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    }
}

fn write_csv_file(records: &[ScoreRecord], path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv(records, &mut writer)?;
    writer.flush()
}
