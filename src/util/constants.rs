// SentiView - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SentiView";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "SentiView";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Preview input contract
// =============================================================================

/// Only files whose name ends with this literal suffix are read.
pub const SUPPORTED_FILE_SUFFIX: &str = ".csv";

/// Header line delimiter.
pub const HEADER_DELIMITER: char = '\t';

/// Data line delimiter. Differs from the header delimiter; kept as the
/// exporting product writes it.
pub const ROW_DELIMITER: char = ',';

/// Required header name for the sentence column (compared trimmed, lowercase).
pub const HIT_SENTENCE_COLUMN: &str = "hit sentence";

/// Required header name for the sentiment column (compared trimmed, lowercase).
pub const SENTIMENT_COLUMN: &str = "sentiment";

/// Rows whose trimmed hit sentence starts with one of these are excluded.
/// Case-sensitive.
pub const EXCLUDED_PREFIXES: &[&str] = &["RT ", "QT "];

/// User-facing message shown when a required column is absent.
pub const MISSING_COLUMNS_MESSAGE: &str =
    "El archivo CSV debe contener las columnas 'Hit Sentence' y 'Sentiment'";

// =============================================================================
// Preview limits
// =============================================================================

/// Default set of preview sizes offered in the limit selector.
pub const DEFAULT_PREVIEW_LIMITS: &[usize] = &[10, 25, 50, 100];

/// Default preview size.
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// Hard upper bound on a configurable preview size.
pub const ABSOLUTE_MAX_PREVIEW_LIMIT: usize = 10_000;

/// Maximum number of entries in the limit selector.
pub const MAX_PREVIEW_LIMIT_CHOICES: usize = 16;

// =============================================================================
// UI defaults
// =============================================================================

/// Seconds a flash notification stays visible before auto-dismissal.
pub const DEFAULT_FLASH_SECS: u64 = 5;

/// Minimum configurable flash lifetime (seconds).
pub const MIN_FLASH_SECS: u64 = 1;

/// Maximum configurable flash lifetime (seconds).
pub const MAX_FLASH_SECS: u64 = 60;

/// Maximum number of flashes kept at once; the oldest is dropped first.
pub const MAX_FLASHES: usize = 8;

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Characters of a sentence shown in debug logs before truncation.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 80;

/// Label used in the sentiment summary for rows with an empty sentiment.
pub const BLANK_SENTIMENT_LABEL: &str = "(blank)";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Preference store file name (stored in the platform data directory).
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
