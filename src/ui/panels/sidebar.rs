// SentiView - ui/panels/sidebar.rs
//
// Left sidebar: loaded file details and the sentiment breakdown.
// The overlay drawn over the central area while the sidebar is open lives
// here too; clicking it closes the sidebar.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the sidebar contents (only called while it is open).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Details");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("\u{2715}").on_hover_text("Close sidebar").clicked() {
                state.sidebar.close();
            }
        });
    });
    ui.separator();

    let Some(preview) = state.current() else {
        ui.label("No file loaded.");
        return;
    };

    ui.strong("File");
    ui.label(preview.source.display().to_string());
    ui.add_space(8.0);

    let summary = &preview.summary;
    egui::Grid::new("sidebar_overview")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.label("Rows kept:");
            ui.label(summary.total.to_string());
            ui.end_row();

            ui.label("RT/QT excluded:");
            ui.label(summary.excluded.to_string());
            ui.end_row();

            ui.label("Selected:");
            ui.label(state.selection.len().to_string());
            ui.end_row();
        });

    if summary.counts.is_empty() {
        return;
    }

    ui.add_space(8.0);
    ui.separator();
    ui.strong("Sentiment");

    let fallback = ui.style().visuals.text_color();
    egui::ScrollArea::vertical()
        .id_salt("sidebar_sentiment")
        .show(ui, |ui| {
            egui::Grid::new("sidebar_sentiment_table")
                .num_columns(2)
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for entry in &summary.counts {
                        ui.colored_label(
                            theme::sentiment_colour(&entry.sentiment, fallback),
                            entry.sentiment.as_str(),
                        );
                        ui.label(entry.count.to_string());
                        ui.end_row();
                    }
                });
        });
}

/// Dim the central area while the sidebar is open. A click on the overlay
/// closes the sidebar.
pub fn render_overlay(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.sidebar.overlay_visible() {
        return;
    }
    let rect = ui.max_rect();
    ui.painter().rect_filled(rect, 0.0, theme::OVERLAY);
    let response = ui.interact(rect, ui.id().with("sidebar_overlay"), egui::Sense::click());
    if response.clicked() {
        state.sidebar.close();
    }
}
