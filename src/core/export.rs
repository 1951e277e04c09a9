// SentiView - core/export.rs
//
// CSV and JSON export of the rows the user ticked in the preview.
// The format writers take any Write trait object; `export_to_file` creates
// the destination file for the UI.

use crate::core::model::ParseResult;
use crate::util::error::ExportError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

/// One exported row. `index` is the 0-based filtered-row position, the same
/// value the preview checkbox carries.
#[derive(Debug, Clone, Serialize)]
pub struct ExportedRow<'a> {
    pub index: usize,
    pub hit_sentence: &'a str,
    pub sentiment: &'a str,
}

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    exported_at: DateTime<Utc>,
    rows: Vec<ExportedRow<'a>>,
}

/// Collect the selected rows in filtered order. Indices past the end of the
/// filtered rows are ignored.
pub fn selected_rows<'a>(
    result: &'a ParseResult,
    selection: &BTreeSet<usize>,
) -> Vec<ExportedRow<'a>> {
    selection
        .iter()
        .filter(|&&i| i < result.rows.len())
        .map(|&i| ExportedRow {
            index: i,
            hit_sentence: result.hit(i),
            sentiment: result.sentiment(i),
        })
        .collect()
}

/// Export selected rows to CSV.
///
/// Writes: index, hit_sentence, sentiment
pub fn export_csv<W: Write>(
    result: &ParseResult,
    selection: &BTreeSet<usize>,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let rows = selected_rows(result, selection);
    if rows.is_empty() {
        return Err(ExportError::NothingSelected);
    }

    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["index", "hit_sentence", "sentiment"])
        .map_err(csv_err)?;

    for row in &rows {
        let index = row.index.to_string();
        csv_writer
            .write_record([index.as_str(), row.hit_sentence, row.sentiment])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %export_path.display(), rows = rows.len(), "CSV export written");
    Ok(rows.len())
}

/// Export selected rows to JSON: `{ "exported_at": ..., "rows": [...] }`.
pub fn export_json<W: Write>(
    result: &ParseResult,
    selection: &BTreeSet<usize>,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let rows = selected_rows(result, selection);
    if rows.is_empty() {
        return Err(ExportError::NothingSelected);
    }
    let count = rows.len();
    let doc = ExportDocument {
        exported_at: Utc::now(),
        rows,
    };
    serde_json::to_writer_pretty(writer, &doc).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %export_path.display(), rows = count, "JSON export written");
    Ok(count)
}

/// Output format offered by the export menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Csv => "selected.csv",
            Self::Json => "selected.json",
        }
    }
}

/// Create `dest` and write the selected rows to it in `format`.
///
/// Nothing is created when the selection is empty.
pub fn export_to_file(
    result: &ParseResult,
    selection: &BTreeSet<usize>,
    format: ExportFormat,
    dest: &Path,
) -> crate::util::error::Result<usize> {
    if selected_rows(result, selection).is_empty() {
        return Err(ExportError::NothingSelected.into());
    }
    let file = std::fs::File::create(dest).map_err(|e| ExportError::Io {
        path: dest.to_path_buf(),
        source: e,
    })?;
    let count = match format {
        ExportFormat::Csv => export_csv(result, selection, file, dest)?,
        ExportFormat::Json => export_json(result, selection, file, dest)?,
    };
    Ok(count)
}
