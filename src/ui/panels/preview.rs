// SentiView - ui/panels/preview.rs
//
// Central preview table: limit selector, row checkboxes, sentence and
// sentiment columns.
//
// Checkbox toggles are collected while the table borrows `state` and
// applied afterwards.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the preview panel (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    render_controls(ui, state);
    ui.separator();

    let Some(preview) = state.current() else {
        ui.centered_and_justified(|ui| {
            ui.label("No file loaded.\nOpen a .csv export via File \u{2192} Open CSV.");
        });
        return;
    };

    if preview.table.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("Every row was excluded or the file has no data rows.");
        });
        return;
    }

    let fallback = ui.style().visuals.text_color();
    let mut toggles: Vec<usize> = Vec::new();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("preview_table")
                .num_columns(4)
                .striped(true)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("#");
                    ui.label("");
                    ui.strong("Hit Sentence");
                    ui.strong("Sentiment");
                    ui.end_row();

                    for row in &preview.table.rows {
                        ui.label(row.display_index.to_string());
                        let mut checked = state.selection.contains(&row.value);
                        if ui.checkbox(&mut checked, "").changed() {
                            toggles.push(row.value);
                        }
                        ui.add(egui::Label::new(row.hit.as_str()).wrap());
                        ui.colored_label(
                            theme::sentiment_colour(&row.sentiment, fallback),
                            row.sentiment.as_str(),
                        );
                        ui.end_row();
                    }
                });
        });

    for value in toggles {
        state.toggle_selection(value);
    }
}

fn render_controls(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let mut chosen = state.limit;
        egui::ComboBox::from_label("rows")
            .selected_text(chosen.to_string())
            .show_ui(ui, |ui| {
                for &limit in &state.config.preview_limits {
                    ui.selectable_value(&mut chosen, limit, limit.to_string());
                }
            });
        if chosen != state.limit {
            state.set_limit(chosen);
        }

        ui.separator();

        let has_rows = state.current().is_some_and(|p| !p.table.is_empty());
        ui.add_enabled_ui(has_rows, |ui| {
            if ui.button("Select all").clicked() {
                state.select_all_visible();
            }
            if ui.button("Clear").clicked() {
                state.clear_selection();
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(p) = state.current() {
                ui.label(format!(
                    "{} selected \u{00b7} {}/{} rows",
                    state.selection.len(),
                    p.table.len(),
                    p.result.rows.len()
                ));
            }
        });
    });
}
