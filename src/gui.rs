// SentiView - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and drives the preview load lifecycle.
// Every event handler is registered here, once per frame; panels only
// mutate `AppState`.

use crate::app::loader::LoadManager;
use crate::app::state::AppState;
use crate::core::model::Theme;
use crate::ui;
use std::time::{Duration, Instant};

/// Repaint cadence while a background load is outstanding.
const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The SentiView application.
pub struct SentiViewApp {
    pub state: AppState,
    pub loader: LoadManager,
    /// Theme last pushed to egui; re-applied only when it changes.
    applied_theme: Option<Theme>,
}

impl SentiViewApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            loader: LoadManager::new(),
            applied_theme: None,
        }
    }
}

impl eframe::App for SentiViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_theme != Some(self.state.theme) {
            ui::theme::apply(ctx, self.state.theme, self.state.config.font_size);
            self.applied_theme = Some(self.state.theme);
        }

        // pending_file: a panel (or the CLI) selected a file to preview.
        if let Some(path) = self.state.pending_file.take() {
            if self.loader.request(path).is_some() {
                self.state.status_message = "Loading\u{2026}".to_string();
            }
        }

        if let Some(done) = self.loader.poll() {
            self.state.apply_completion(done, Instant::now());
        }
        if self.loader.is_pending(self.state.last_applied) {
            ctx.request_repaint_after(LOAD_POLL_INTERVAL);
        }

        // Top bar
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui::panels::top_bar::render(ui, &mut self.state);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.state.status_message.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("rows: {}", self.state.limit));
                });
            });
        });

        // Left sidebar (hidden unless toggled open)
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show_animated(ctx, self.state.sidebar.open, |ui| {
                ui::panels::sidebar::render(ui, &mut self.state);
            });

        // Central panel (preview table), dimmed while the sidebar is open
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::preview::render(ui, &mut self.state);
            ui::panels::sidebar::render_overlay(ui, &mut self.state);
        });

        ui::panels::flash::render(ctx, &mut self.state);
    }

    /// Called by eframe when the application window is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_preferences();
    }
}
