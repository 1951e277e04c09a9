// SentiView - ui/panels/top_bar.rs
//
// Top bar: File menu (open, export), sidebar toggle, theme toggle, and the
// user menu drop-down.

use crate::app::flash::FlashLevel;
use crate::app::state::AppState;
use crate::core::export::{self, ExportFormat};
use crate::ui::theme;
use std::time::Instant;

/// Render the top bar contents.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui| {
        if ui
            .button("\u{2630}")
            .on_hover_text("Toggle sidebar")
            .clicked()
        {
            state.sidebar.toggle();
        }

        ui.menu_button("File", |ui| {
            if ui.button("Open CSV\u{2026}").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("CSV", &["csv"])
                    .pick_file()
                {
                    state.pending_file = Some(path);
                }
                ui.close_menu();
            }
            ui.separator();
            let can_export = state.current().is_some() && !state.selection.is_empty();
            ui.add_enabled_ui(can_export, |ui| {
                ui.menu_button("Export selected", |ui| {
                    if ui.button("CSV\u{2026}").clicked() {
                        export_to(state, ExportFormat::Csv);
                        ui.close_menu();
                    }
                    if ui.button("JSON\u{2026}").clicked() {
                        export_to(state, ExportFormat::Json);
                        ui.close_menu();
                    }
                });
            });
            ui.separator();
            if ui.button("Exit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            render_user_menu(ui, state);
            if ui.button(theme::toggle_label(state.theme)).clicked() {
                state.toggle_theme();
            }
        });
    });
}

/// User menu toggle plus its drop-down. Any click outside the drop-down and
/// the toggle closes it.
fn render_user_menu(ui: &mut egui::Ui, state: &mut AppState) {
    let toggle = ui.button("\u{1f464} Account");
    if toggle.clicked() {
        state.user_menu.toggle();
    }
    if !state.user_menu.open {
        return;
    }

    let ctx = ui.ctx().clone();
    let area = egui::Area::new(egui::Id::new("user_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(toggle.rect.left_bottom())
        .show(&ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(theme::USER_MENU_WIDTH);
                ui.label(egui::RichText::new("Preferences").weak());
                if ui.button(theme::toggle_label(state.theme)).clicked() {
                    state.toggle_theme();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });

    let click = ctx.input(|i| {
        if i.pointer.any_click() {
            i.pointer.interact_pos()
        } else {
            None
        }
    });
    if let Some(pos) = click {
        state
            .user_menu
            .click_elsewhere(area.response.rect.contains(pos), toggle.rect.contains(pos));
    }
}

fn export_to(state: &mut AppState, format: ExportFormat) {
    let Some(dest) = rfd::FileDialog::new()
        .add_filter(format.label(), &[format.extension()])
        .set_file_name(format.default_file_name())
        .save_file()
    else {
        return;
    };
    let Some(preview) = state.current() else {
        return;
    };

    let outcome = export::export_to_file(&preview.result, &state.selection, format, &dest);
    let now = Instant::now();
    match outcome {
        Ok(n) => {
            state.status_message = format!("Exported {n} rows to {}.", format.label());
            state
                .flashes
                .push(FlashLevel::Info, format!("Exported {n} rows"), now);
        }
        Err(e) => {
            tracing::warn!(error = %e, path = %dest.display(), "Export failed");
            state.flashes.push(FlashLevel::Error, e.to_string(), now);
        }
    }
}
