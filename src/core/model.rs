// SentiView - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Parsed rows
// =============================================================================

/// One data line of the selected file, split into fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field at `index`, or the empty string when the row is too short.
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Header positions of the two required columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub hit: usize,
    pub sentiment: usize,
}

/// Outcome of a successful parse.
///
/// `rows` holds every row that survived the exclusion filter, in source
/// order. It is never windowed; the preview limit applies at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub rows: Vec<Row>,
    pub columns: ColumnIndex,
    /// Number of data rows dropped by the exclusion prefixes.
    pub excluded: usize,
}

impl ParseResult {
    /// Hit sentence of the filtered row at `index`.
    pub fn hit(&self, index: usize) -> &str {
        self.rows
            .get(index)
            .map(|r| r.field(self.columns.hit))
            .unwrap_or("")
    }

    /// Sentiment of the filtered row at `index`.
    pub fn sentiment(&self, index: usize) -> &str {
        self.rows
            .get(index)
            .map(|r| r.field(self.columns.sentiment))
            .unwrap_or("")
    }
}

// =============================================================================
// Preview limit
// =============================================================================

/// Maximum number of filtered rows rendered at once. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PreviewLimit(usize);

impl PreviewLimit {
    /// Returns `None` for zero.
    pub fn new(limit: usize) -> Option<Self> {
        (limit > 0).then_some(Self(limit))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PreviewLimit {
    fn default() -> Self {
        Self(crate::util::constants::DEFAULT_PREVIEW_LIMIT)
    }
}

impl TryFrom<usize> for PreviewLimit {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "preview limit must be positive".to_string())
    }
}

impl From<PreviewLimit> for usize {
    fn from(limit: PreviewLimit) -> Self {
        limit.0
    }
}

impl std::fmt::Display for PreviewLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Rendered preview
// =============================================================================

/// One rendered line of the preview table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    /// 1-based row number shown to the user.
    pub display_index: usize,
    /// 0-based position in the filtered rows; the checkbox value.
    pub value: usize,
    pub hit: String,
    pub sentiment: String,
}

/// A fully rendered preview. Each render produces a fresh table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PreviewTable {
    pub rows: Vec<PreviewRow>,
}

impl PreviewTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a config value ("light" / "dark", any case).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}
