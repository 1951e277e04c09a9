// SentiView - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all SentiView operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum SentiViewError {
    /// Loading or parsing a preview failed.
    Preview(PreviewError),

    /// Export operation failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for SentiViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preview(e) => write!(f, "Preview error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for SentiViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Preview(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Preview errors
// ---------------------------------------------------------------------------

/// A column the header row must name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredColumn {
    HitSentence,
    Sentiment,
}

impl RequiredColumn {
    /// Display name as it appears in exported files.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HitSentence => "Hit Sentence",
            Self::Sentiment => "Sentiment",
        }
    }
}

/// Errors related to loading and parsing a preview.
#[derive(Debug)]
pub enum PreviewError {
    /// The selected file does not end with ".csv".
    UnsupportedFile { path: PathBuf },

    /// The header row lacks one or both required columns.
    /// `missing` is never empty.
    MissingColumn { missing: Vec<RequiredColumn> },

    /// I/O error while reading the selected file.
    Io { path: PathBuf, source: io::Error },
}

impl PreviewError {
    /// Short message suitable for a flash notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingColumn { missing } => {
                let names: Vec<&str> = missing.iter().map(RequiredColumn::label).collect();
                format!(
                    "{} (falta: {})",
                    super::constants::MISSING_COLUMNS_MESSAGE,
                    names.join(", ")
                )
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFile { path } => {
                write!(f, "'{}' is not a .csv file", path.display())
            }
            Self::MissingColumn { missing } => {
                let names: Vec<&str> = missing.iter().map(RequiredColumn::label).collect();
                write!(f, "missing required column(s): {}", names.join(", "))
            }
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PreviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<PreviewError> for SentiViewError {
    fn from(e: PreviewError) -> Self {
        Self::Preview(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// No rows are selected, so there is nothing to write.
    NothingSelected,

    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingSelected => {
                write!(f, "No rows selected. Tick at least one row to export.")
            }
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::NothingSelected => None,
        }
    }
}

impl From<ExportError> for SentiViewError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading. Reported as startup warnings,
/// never propagated.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Convenience type alias for SentiView results.
pub type Result<T> = std::result::Result<T, SentiViewError>;
