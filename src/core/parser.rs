// SentiView - core/parser.rs
//
// Turns the raw text of a selected file into filtered rows.
// Core layer: accepts the file content as a string, never touches the
// filesystem directly.
//
// Header and data lines use different delimiters (TAB and COMMA); exported
// files from the monitoring product are read exactly that way.

use crate::core::model::{ColumnIndex, ParseResult, Row};
use crate::util::constants::{
    EXCLUDED_PREFIXES, HEADER_DELIMITER, HIT_SENTENCE_COLUMN, ROW_DELIMITER, SENTIMENT_COLUMN,
    SUPPORTED_FILE_SUFFIX,
};
use crate::util::error::{PreviewError, RequiredColumn};
use std::path::Path;

/// Returns true when `path` names a file the previewer reads.
///
/// The check is a literal, case-sensitive suffix match on the file name.
pub fn is_supported_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.ends_with(SUPPORTED_FILE_SUFFIX))
}

/// Parse the full text of a selected file.
///
/// Blank lines are skipped. The first remaining line is the header; every
/// other line becomes a row, and rows whose hit sentence starts with an
/// exclusion prefix are dropped. Fails with `MissingColumn` before producing
/// any rows when the header lacks a required column. A leading U+FEFF is
/// an encoding marker, not part of the first header field.
pub fn parse_content(raw: &str) -> Result<ParseResult, PreviewError> {
    let raw = raw.strip_prefix('\u{FEFF}').unwrap_or(raw);
    let mut lines = non_blank_lines(raw);

    let columns = resolve_columns(lines.next().unwrap_or(""))?;

    let mut rows = Vec::new();
    let mut excluded = 0usize;
    for line in lines {
        let row = split_row(line);
        if is_excluded(row.field(columns.hit)) {
            excluded += 1;
            tracing::trace!(
                hit = %crate::util::logging::preview(row.field(columns.hit)),
                "Row excluded"
            );
            continue;
        }
        rows.push(row);
    }

    tracing::debug!(
        hit_index = columns.hit,
        sentiment_index = columns.sentiment,
        rows = rows.len(),
        excluded,
        "Parsed preview content"
    );

    Ok(ParseResult {
        rows,
        columns,
        excluded,
    })
}

/// Locate the required columns in a header line.
///
/// Fields are split on TAB, then compared trimmed and lowercased. The first
/// matching field wins.
pub fn resolve_columns(header: &str) -> Result<ColumnIndex, PreviewError> {
    let names: Vec<String> = header
        .split(HEADER_DELIMITER)
        .map(|f| f.trim().to_lowercase())
        .collect();

    let hit = names.iter().position(|n| n == HIT_SENTENCE_COLUMN);
    let sentiment = names.iter().position(|n| n == SENTIMENT_COLUMN);

    match (hit, sentiment) {
        (Some(hit), Some(sentiment)) => Ok(ColumnIndex { hit, sentiment }),
        (hit, sentiment) => {
            let mut missing = Vec::with_capacity(2);
            if hit.is_none() {
                missing.push(RequiredColumn::HitSentence);
            }
            if sentiment.is_none() {
                missing.push(RequiredColumn::Sentiment);
            }
            tracing::debug!(?missing, "Header lacks required columns");
            Err(PreviewError::MissingColumn { missing })
        }
    }
}

/// True when a hit sentence marks a retweet or quote-tweet.
pub fn is_excluded(hit: &str) -> bool {
    let hit = hit.trim();
    EXCLUDED_PREFIXES.iter().any(|p| hit.starts_with(p))
}

/// Split a data line on COMMA. No quoting rules apply.
fn split_row(line: &str) -> Row {
    Row::new(line.split(ROW_DELIMITER).map(str::to_string).collect())
}

/// Lines split on `\n` with a trailing `\r` removed, skipping blank lines.
fn non_blank_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty())
}
