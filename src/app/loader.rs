// SentiView - app/loader.rs
//
// Preview load lifecycle. Reads and parses the selected file on a
// background thread and hands the outcome to the UI thread via an mpsc
// channel.
//
// Architecture:
//   - `LoadManager` lives on the UI thread; `run_load` runs on a short-lived
//     background thread.
//   - Every accepted request takes a new generation number. Only the
//     completion carrying the latest generation is delivered, so the most
//     recently selected file wins regardless of which read finishes last.
//   - No cancellation: a superseded read runs to completion and is dropped.

use crate::core::model::ParseResult;
use crate::core::parser;
use crate::util::error::PreviewError;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// Outcome of one background load.
#[derive(Debug)]
pub struct LoadCompletion {
    pub generation: u64,
    pub path: PathBuf,
    pub outcome: Result<ParseResult, PreviewError>,
}

/// Manages preview loads on background threads.
pub struct LoadManager {
    tx: mpsc::Sender<LoadCompletion>,
    rx: mpsc::Receiver<LoadCompletion>,

    /// Generation of the most recent accepted request. 0 = none yet.
    latest: u64,
}

impl LoadManager {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx, latest: 0 }
    }

    /// Request a preview of `path`.
    ///
    /// Files not ending in ".csv" are ignored without any state change and
    /// `None` is returned. Otherwise returns the generation assigned to the
    /// request.
    pub fn request(&mut self, path: PathBuf) -> Option<u64> {
        if !parser::is_supported_file(&path) {
            tracing::debug!(path = %path.display(), "Ignoring non-.csv selection");
            return None;
        }

        self.latest += 1;
        let generation = self.latest;
        let tx = self.tx.clone();

        std::thread::spawn(move || {
            let outcome = run_load(&path);
            // Receiver dropped means the UI closed; nothing to report to.
            let _ = tx.send(LoadCompletion {
                generation,
                path,
                outcome,
            });
        });

        tracing::info!(generation, "Preview load started");
        Some(generation)
    }

    /// Whether the latest request has not completed yet.
    pub fn is_pending(&self, last_applied: u64) -> bool {
        self.latest > last_applied
    }

    /// Poll without blocking. Returns the completion of the latest request
    /// if it has arrived; stale completions are discarded.
    pub fn poll(&self) -> Option<LoadCompletion> {
        let mut current = None;
        while let Ok(done) = self.rx.try_recv() {
            if done.generation == self.latest {
                current = Some(done);
            } else {
                tracing::debug!(
                    generation = done.generation,
                    latest = self.latest,
                    path = %done.path.display(),
                    "Discarding stale preview load"
                );
            }
        }
        current
    }

    /// Block until the latest request completes. Used by the headless CLI
    /// and tests.
    pub fn wait(&self) -> Option<LoadCompletion> {
        if self.latest == 0 {
            return None;
        }
        while let Ok(done) = self.rx.recv() {
            if done.generation == self.latest {
                return Some(done);
            }
            tracing::debug!(generation = done.generation, "Discarding stale preview load");
        }
        None
    }
}

impl Default for LoadManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Read and parse one file. Runs on the background thread.
pub fn run_load(path: &Path) -> Result<ParseResult, PreviewError> {
    let content = crate::platform::fs::read_file_lossy(path).map_err(|e| PreviewError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parser::parse_content(&content)
}
