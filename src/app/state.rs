// SentiView - app/state.rs
//
// Application state management. Holds the current preview, the selection,
// and the per-component view state.
// Owned by the eframe::App implementation.

use crate::app::flash::{FlashLevel, FlashQueue};
use crate::app::loader::LoadCompletion;
use crate::app::preferences::{self, Preferences};
use crate::app::view::{Sidebar, UserMenu};
use crate::core::model::{ParseResult, PreviewLimit, PreviewTable, Theme};
use crate::core::render;
use crate::core::summary::{self, SentimentSummary};
use crate::platform::config::AppConfig;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

/// A successfully parsed file and its current rendering.
#[derive(Debug)]
pub struct Preview {
    pub source: PathBuf,
    pub result: ParseResult,
    pub table: PreviewTable,
    pub summary: SentimentSummary,
}

/// Preview lifecycle. A failed parse never changes this value.
#[derive(Debug, Default)]
pub enum PreviewState {
    #[default]
    Empty,
    Previewing(Preview),
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Validated configuration.
    pub config: AppConfig,

    pub preview: PreviewState,

    /// Current preview limit; always one of `config.preview_limits`.
    pub limit: PreviewLimit,

    /// Checked rows, as 0-based filtered-row indices.
    pub selection: BTreeSet<usize>,

    pub theme: Theme,
    pub user_menu: UserMenu,
    pub sidebar: Sidebar,
    pub flashes: FlashQueue,

    /// Status message for the status bar.
    pub status_message: String,

    /// File chosen in the UI, picked up by the app loop on the next frame.
    pub pending_file: Option<PathBuf>,

    /// Generation of the last load applied to `preview` (or rejected).
    pub last_applied: u64,

    /// Where preferences are persisted. `None` disables persistence.
    pub preferences_path: Option<PathBuf>,
}

impl AppState {
    /// Create initial state from validated config and any stored preferences.
    ///
    /// A stored theme overrides the configured default. The limit always
    /// starts at the configured default.
    pub fn new(
        config: AppConfig,
        stored: Option<Preferences>,
        preferences_path: Option<PathBuf>,
    ) -> Self {
        let theme = stored.map(|p| p.theme).unwrap_or(config.theme);
        let limit = config.default_limit;
        let flashes = FlashQueue::new(config.flash_duration);

        Self {
            config,
            preview: PreviewState::Empty,
            limit,
            selection: BTreeSet::new(),
            theme,
            user_menu: UserMenu::default(),
            sidebar: Sidebar::default(),
            flashes,
            status_message: "Ready. Open a .csv file to preview.".to_string(),
            pending_file: None,
            last_applied: 0,
            preferences_path,
        }
    }

    /// The current preview, if any.
    pub fn current(&self) -> Option<&Preview> {
        match &self.preview {
            PreviewState::Previewing(p) => Some(p),
            PreviewState::Empty => None,
        }
    }

    /// Apply a finished load.
    ///
    /// Success replaces the preview, clears the selection and renders at the
    /// current limit. Failure leaves the preview untouched and raises an
    /// error flash.
    pub fn apply_completion(&mut self, done: LoadCompletion, now: Instant) {
        self.last_applied = done.generation;
        match done.outcome {
            Ok(result) => {
                let table = render::render(&result, self.limit);
                let summary = summary::summarise(&result);
                self.status_message = format!(
                    "{}: {} rows ({} excluded), showing {}",
                    file_label(&done.path),
                    result.rows.len(),
                    result.excluded,
                    table.len()
                );
                self.flashes.push(
                    FlashLevel::Success,
                    format!("Loaded {}", file_label(&done.path)),
                    now,
                );
                tracing::info!(
                    path = %done.path.display(),
                    rows = result.rows.len(),
                    excluded = result.excluded,
                    "Preview ready"
                );
                self.selection.clear();
                self.preview = PreviewState::Previewing(Preview {
                    source: done.path,
                    result,
                    table,
                    summary,
                });
            }
            Err(e) => {
                tracing::warn!(path = %done.path.display(), error = %e, "Preview load failed");
                self.flashes.push(FlashLevel::Error, e.user_message(), now);
            }
        }
    }

    /// Change the preview limit and re-render without re-parsing.
    ///
    /// Limits outside the configured choices are ignored and `false` is
    /// returned. Selections of rows no longer rendered are dropped.
    pub fn set_limit(&mut self, limit: PreviewLimit) -> bool {
        if !self.config.preview_limits.contains(&limit) {
            tracing::debug!(limit = limit.get(), "Ignoring limit outside configured choices");
            return false;
        }
        self.limit = limit;
        if let PreviewState::Previewing(ref mut p) = self.preview {
            p.table = render::render(&p.result, limit);
            let visible = p.table.len();
            self.selection.retain(|&i| i < visible);
        }
        true
    }

    /// Apply a limit given on the command line. One the selector cannot
    /// offer is reported with an error flash and the default stays.
    pub fn apply_startup_limit(&mut self, limit: PreviewLimit, now: Instant) {
        if self.set_limit(limit) {
            return;
        }
        tracing::warn!(limit = limit.get(), "--limit is not a configured choice");
        let choices: Vec<String> = self
            .config
            .preview_limits
            .iter()
            .map(|l| l.to_string())
            .collect();
        self.flashes.push(
            FlashLevel::Error,
            format!(
                "--limit {limit} ignored: choose one of {}. Showing {} rows.",
                choices.join(", "),
                self.limit
            ),
            now,
        );
    }

    /// Flip the checkbox for filtered row `value`. Values outside the
    /// rendered table are ignored.
    pub fn toggle_selection(&mut self, value: usize) {
        let visible = self.current().map(|p| p.table.len()).unwrap_or(0);
        if value >= visible {
            return;
        }
        if !self.selection.remove(&value) {
            self.selection.insert(value);
        }
    }

    /// Check every rendered row.
    pub fn select_all_visible(&mut self) {
        if let Some(p) = self.current() {
            let values: Vec<usize> = p.table.rows.iter().map(|r| r.value).collect();
            self.selection.extend(values);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Switch theme and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.label(), "Theme toggled");
        self.save_preferences();
    }

    /// Persist the theme. Failures are logged, never surfaced.
    pub fn save_preferences(&self) {
        let Some(ref path) = self.preferences_path else {
            return;
        };
        let prefs = Preferences::new(self.theme);
        if let Err(e) = preferences::save(&prefs, path) {
            tracing::warn!(error = %e, "Could not save preferences");
        }
    }
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_content;
    use crate::util::error::{PreviewError, RequiredColumn};
    use tempfile::TempDir;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), None, None)
    }

    fn completion(generation: u64, raw: &str) -> LoadCompletion {
        LoadCompletion {
            generation,
            path: PathBuf::from(format!("file{generation}.csv")),
            outcome: parse_content(raw),
        }
    }

    fn rows(n: usize) -> String {
        let mut raw = String::from("Hit Sentence\tSentiment\n");
        for i in 0..n {
            raw.push_str(&format!("hit {i},positive\n"));
        }
        raw
    }

    #[test]
    fn test_empty_to_previewing_on_success() {
        let mut s = state();
        assert!(s.current().is_none());
        s.apply_completion(completion(1, &rows(3)), Instant::now());
        let p = s.current().unwrap();
        assert_eq!(p.table.len(), 3);
        assert_eq!(p.summary.total, 3);
        assert_eq!(s.last_applied, 1);
        assert_eq!(s.flashes.len(), 1);
    }

    #[test]
    fn test_failed_parse_keeps_prior_preview() {
        let mut s = state();
        s.apply_completion(completion(1, &rows(2)), Instant::now());
        s.toggle_selection(1);

        s.apply_completion(completion(2, "Hit Sentence\tSource\nx,y"), Instant::now());
        let p = s.current().unwrap();
        assert_eq!(p.source, PathBuf::from("file1.csv"));
        assert_eq!(p.table.len(), 2);
        assert!(s.selection.contains(&1));
        let last = s.flashes.iter().last().unwrap();
        assert_eq!(last.level, FlashLevel::Error);
        assert!(last.message.contains("Sentiment"));
    }

    #[test]
    fn test_failed_parse_from_empty_stays_empty() {
        let mut s = state();
        let done = LoadCompletion {
            generation: 1,
            path: PathBuf::from("x.csv"),
            outcome: Err(PreviewError::MissingColumn {
                missing: vec![RequiredColumn::HitSentence],
            }),
        };
        s.apply_completion(done, Instant::now());
        assert!(matches!(s.preview, PreviewState::Empty));
    }

    #[test]
    fn test_new_file_clears_selection() {
        let mut s = state();
        s.apply_completion(completion(1, &rows(3)), Instant::now());
        s.select_all_visible();
        assert_eq!(s.selection.len(), 3);
        s.apply_completion(completion(2, &rows(5)), Instant::now());
        assert!(s.selection.is_empty());
    }

    #[test]
    fn test_limit_change_rerenders_and_trims_selection() {
        let mut s = state();
        s.apply_completion(completion(1, &rows(40)), Instant::now());
        assert_eq!(s.current().unwrap().table.len(), 10);

        s.set_limit(PreviewLimit::new(25).unwrap());
        assert_eq!(s.current().unwrap().table.len(), 25);
        s.toggle_selection(3);
        s.toggle_selection(20);

        s.set_limit(PreviewLimit::new(10).unwrap());
        assert_eq!(s.current().unwrap().table.len(), 10);
        assert_eq!(s.selection.iter().copied().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_limit_outside_choices_ignored() {
        let mut s = state();
        s.set_limit(PreviewLimit::new(7).unwrap());
        assert_eq!(s.limit.get(), 10);
    }

    #[test]
    fn test_toggle_selection_outside_table_ignored() {
        let mut s = state();
        s.toggle_selection(0);
        assert!(s.selection.is_empty());
        s.apply_completion(completion(1, &rows(2)), Instant::now());
        s.toggle_selection(5);
        assert!(s.selection.is_empty());
        s.toggle_selection(1);
        s.toggle_selection(1);
        assert!(s.selection.is_empty());
    }

    #[test]
    fn test_theme_toggle_persists() {
        let dir = TempDir::new().unwrap();
        let path = preferences::preferences_path(dir.path());
        let mut s = AppState::new(AppConfig::default(), None, Some(path.clone()));
        assert_eq!(s.theme, Theme::Dark);
        s.toggle_theme();

        let stored = preferences::load(&path).unwrap();
        assert_eq!(stored.theme, Theme::Light);

        let restored = AppState::new(AppConfig::default(), Some(stored), None);
        assert_eq!(restored.theme, Theme::Light);
    }

    #[test]
    fn test_limit_change_is_not_persisted() {
        let dir = TempDir::new().unwrap();
        let path = preferences::preferences_path(dir.path());
        let mut s = AppState::new(AppConfig::default(), None, Some(path.clone()));
        assert!(s.set_limit(PreviewLimit::new(50).unwrap()));
        assert!(!path.exists());

        s.toggle_theme();
        let restored = AppState::new(AppConfig::default(), preferences::load(&path), None);
        assert_eq!(restored.limit.get(), 10);
        assert_eq!(restored.theme, Theme::Light);
    }

    #[test]
    fn test_set_limit_reports_unconfigured_choice() {
        let mut s = state();
        assert!(!s.set_limit(PreviewLimit::new(33).unwrap()));
        assert_eq!(s.limit.get(), 10);
    }

    #[test]
    fn test_unconfigured_startup_limit_flashes_error() {
        let mut s = state();
        s.apply_startup_limit(PreviewLimit::new(33).unwrap(), Instant::now());
        assert_eq!(s.limit.get(), 10);
        let flash = s.flashes.iter().next().unwrap();
        assert_eq!(flash.level, FlashLevel::Error);
        assert!(flash.message.contains("--limit 33 ignored"));
        assert!(flash.message.contains("10, 25, 50, 100"));

        let mut s = state();
        s.apply_startup_limit(PreviewLimit::new(25).unwrap(), Instant::now());
        assert_eq!(s.limit.get(), 25);
        assert!(s.flashes.is_empty());
    }
}
