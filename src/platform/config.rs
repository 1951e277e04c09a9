// SentiView - platform/config.rs
//
// Platform-specific configuration, data directory resolution, and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::{PreviewLimit, Theme};
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved platform paths for SentiView data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/sentiview/ or %APPDATA%\SentiView\config\)
    pub config_dir: PathBuf,

    /// Data directory for the preference store.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Full path of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[preview]` section.
    pub preview: PreviewSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[preview]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PreviewSection {
    /// Choices offered in the limit selector.
    pub limits: Option<Vec<usize>>,
    /// Limit selected at startup when no preference is stored.
    pub default_limit: Option<usize>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme used when no preference is stored: "dark" or "light".
    pub theme: Option<String>,
    /// Seconds a flash notification stays visible.
    pub flash_seconds: Option<u64>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Sorted, de-duplicated limit choices. Never empty.
    pub preview_limits: Vec<PreviewLimit>,
    /// Always one of `preview_limits`.
    pub default_limit: PreviewLimit,
    pub theme: Theme,
    pub flash_duration: Duration,
    pub font_size: f32,
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preview_limits: default_limits(),
            default_limit: PreviewLimit::default(),
            theme: Theme::default(),
            flash_duration: Duration::from_secs(constants::DEFAULT_FLASH_SECS),
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
        }
    }
}

fn default_limits() -> Vec<PreviewLimit> {
    constants::DEFAULT_PREVIEW_LIMITS
        .iter()
        .filter_map(|&n| PreviewLimit::new(n))
        .collect()
}

/// Read and deserialise a config file.
pub fn read_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load and validate `config.toml` at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings (first run). An unreadable
/// or unparseable file yields defaults and one warning.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    match read_config_file(config_path) {
        Ok(raw) => {
            tracing::info!(path = %config_path.display(), "Loaded config.toml");
            validate(raw)
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            (AppConfig::default(), vec![msg])
        }
    }
}

/// Validate each field against named constants, accumulating all warnings.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut config = AppConfig::default();

    // -- Preview: limits --
    if let Some(ref limits) = raw.preview.limits {
        let mut valid: Vec<PreviewLimit> = limits
            .iter()
            .filter(|&&n| n <= constants::ABSOLUTE_MAX_PREVIEW_LIMIT)
            .filter_map(|&n| PreviewLimit::new(n))
            .collect();
        valid.sort();
        valid.dedup();
        valid.truncate(constants::MAX_PREVIEW_LIMIT_CHOICES);

        if valid.len() != limits.len() {
            warnings.push(format!(
                "[preview] limits: ignored zero, duplicate, or out-of-range values \
                 (allowed 1-{}, at most {} choices).",
                constants::ABSOLUTE_MAX_PREVIEW_LIMIT,
                constants::MAX_PREVIEW_LIMIT_CHOICES,
            ));
        }
        if valid.is_empty() {
            warnings.push(format!(
                "[preview] limits has no usable values. Using default {:?}.",
                constants::DEFAULT_PREVIEW_LIMITS,
            ));
        } else {
            config.preview_limits = valid;
        }
    }

    // -- Preview: default_limit --
    if let Some(limit) = raw.preview.default_limit {
        match PreviewLimit::new(limit) {
            Some(l) if config.preview_limits.contains(&l) => config.default_limit = l,
            _ => warnings.push(format!(
                "[preview] default_limit = {limit} is not one of the configured limits. \
                 Using {}.",
                config.preview_limits[0],
            )),
        }
    }
    if !config.preview_limits.contains(&config.default_limit) {
        config.default_limit = config.preview_limits[0];
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match Theme::from_name(theme) {
            Some(t) => config.theme = t,
            None => warnings.push(format!(
                "[ui] theme = \"{theme}\" is not recognised. Expected \"dark\" or \"light\". \
                 Using default (dark).",
            )),
        }
    }

    // -- UI: flash_seconds --
    if let Some(secs) = raw.ui.flash_seconds {
        if (constants::MIN_FLASH_SECS..=constants::MAX_FLASH_SECS).contains(&secs) {
            config.flash_duration = Duration::from_secs(secs);
        } else {
            warnings.push(format!(
                "[ui] flash_seconds = {secs} is out of range ({}-{}). Using default ({}).",
                constants::MIN_FLASH_SECS,
                constants::MAX_FLASH_SECS,
                constants::DEFAULT_FLASH_SECS,
            ));
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(format!(
                "[ui] font_size = {size} is out of range ({}-{}). Using default ({}).",
                constants::MIN_FONT_SIZE,
                constants::MAX_FONT_SIZE,
                constants::DEFAULT_FONT_SIZE,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}
