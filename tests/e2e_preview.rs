// SentiView - tests/e2e_preview.rs
//
// End-to-end tests for the load -> parse -> render -> export pipeline.
//
// These tests read real fixture files from disk through the background
// loader, drive `AppState` the way the GUI does, and check the rendered
// table and exports. No mocks.

use sentiview::app::loader::LoadManager;
use sentiview::app::state::{AppState, PreviewState};
use sentiview::core::model::{PreviewLimit, PreviewRow};
use sentiview::core::{export, render};
use sentiview::platform::config::AppConfig;
use sentiview::util::error::{PreviewError, RequiredColumn};
use std::path::PathBuf;
use std::time::Instant;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fresh_state() -> AppState {
    AppState::new(AppConfig::default(), None, None)
}

/// Request `path` and apply the completion, as one GUI frame would.
fn load_into(state: &mut AppState, loader: &mut LoadManager, path: PathBuf) {
    loader.request(path).expect("fixture is a .csv file");
    let done = loader.wait().expect("load completes");
    state.apply_completion(done, Instant::now());
}

// =============================================================================
// Load + render
// =============================================================================

/// The sample export resolves its columns, drops RT/QT rows, and renders
/// the survivors in source order.
#[test]
fn e2e_sample_export_previews_filtered_rows() {
    let mut state = fresh_state();
    let mut loader = LoadManager::new();
    load_into(&mut state, &mut loader, fixture("mentions_sample.csv"));

    let preview = state.current().expect("previewing");
    assert_eq!(preview.result.columns.hit, 3);
    assert_eq!(preview.result.columns.sentiment, 5);
    assert_eq!(preview.result.excluded, 2);

    let hits: Vec<&str> = preview.table.rows.iter().map(|r| r.hit.as_str()).collect();
    assert_eq!(
        hits,
        vec![
            "La economia crece este trimestre",
            "Los precios siguen subiendo",
            "Reunion del banco central",
            "RTVE informa sobre <mercados>",
        ]
    );
    assert_eq!(
        preview.table.rows[1],
        PreviewRow {
            display_index: 2,
            value: 1,
            hit: "Los precios siguen subiendo".to_string(),
            sentiment: "Negative".to_string(),
        }
    );

    let counts: Vec<(&str, usize)> = preview
        .summary
        .counts
        .iter()
        .map(|c| (c.sentiment.as_str(), c.count))
        .collect();
    assert_eq!(counts, vec![("neutral", 2), ("negative", 1), ("positive", 1)]);
}

/// A file missing the Sentiment column is rejected and the previous preview
/// stays on screen untouched.
#[test]
fn e2e_missing_column_keeps_previous_preview() {
    let mut state = fresh_state();
    let mut loader = LoadManager::new();
    load_into(&mut state, &mut loader, fixture("mentions_sample.csv"));
    let before = state.current().unwrap().table.clone();

    loader.request(fixture("missing_sentiment.csv")).unwrap();
    let done = loader.wait().unwrap();
    match done.outcome {
        Err(PreviewError::MissingColumn { ref missing }) => {
            assert_eq!(missing, &vec![RequiredColumn::Sentiment])
        }
        ref other => panic!("expected MissingColumn, got {other:?}"),
    }
    state.apply_completion(done, Instant::now());

    let after = state.current().unwrap();
    assert_eq!(after.table, before);
    assert_eq!(after.source, fixture("mentions_sample.csv"));
}

/// A missing-column file selected first leaves the app empty with no rows.
#[test]
fn e2e_missing_column_from_empty_renders_nothing() {
    let mut state = fresh_state();
    let mut loader = LoadManager::new();
    load_into(&mut state, &mut loader, fixture("missing_sentiment.csv"));
    assert!(matches!(state.preview, PreviewState::Empty));
}

/// Selecting a second file before the first finishes: only the second is
/// ever applied.
#[test]
fn e2e_second_selection_wins() {
    let mut state = fresh_state();
    let mut loader = LoadManager::new();
    loader.request(fixture("mentions_sample.csv")).unwrap();
    loader.request(fixture("missing_sentiment.csv")).unwrap();
    let done = loader.wait().unwrap();
    assert_eq!(done.path, fixture("missing_sentiment.csv"));
    state.apply_completion(done, Instant::now());
    assert!(state.current().is_none());
}

/// Limit changes re-render from the held rows; render is idempotent.
#[test]
fn e2e_limit_change_rerenders_without_reparse() {
    let mut state = fresh_state();
    let mut loader = LoadManager::new();
    load_into(&mut state, &mut loader, fixture("mentions_sample.csv"));

    let p = state.current().unwrap();
    let small = PreviewLimit::new(2).unwrap();
    let table = render::render(&p.result, small);
    assert_eq!(table.len(), 2);
    assert_eq!(render::render(&p.result, small), table);
    assert_eq!(render::render(&p.result, PreviewLimit::new(100).unwrap()).len(), 4);
}

// =============================================================================
// Selection + export
// =============================================================================

/// Ticked rows export in filtered order with their checkbox values.
#[test]
fn e2e_export_selected_rows_csv() {
    let mut state = fresh_state();
    let mut loader = LoadManager::new();
    load_into(&mut state, &mut loader, fixture("mentions_sample.csv"));
    state.toggle_selection(3);
    state.toggle_selection(0);

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("selected.csv");
    let file = std::fs::File::create(&dest).unwrap();
    let p = state.current().unwrap();
    let n = export::export_csv(&p.result, &state.selection, file, &dest).unwrap();
    assert_eq!(n, 2);

    let written = std::fs::read_to_string(&dest).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            "index,hit_sentence,sentiment",
            "0,La economia crece este trimestre,Positive",
            "3,RTVE informa sobre <mercados>,Neutral",
        ]
    );
}

/// The headless renderer produces the same table as HTML, escaped.
#[test]
fn e2e_headless_html() {
    let html = sentiview::app::headless::preview_html(
        &fixture("mentions_sample.csv"),
        PreviewLimit::new(10).unwrap(),
    )
    .unwrap();
    assert_eq!(html.matches("type=\"checkbox\"").count(), 4);
    assert!(html.contains("value=\"3\""));
    assert!(html.contains("RTVE informa sobre &lt;mercados&gt;"));
    assert!(!html.contains("@user"));
}
