// SentiView - ui/panels/flash.rs
//
// Flash notifications stacked in the top-right corner.

use crate::app::flash::FlashLevel;
use crate::app::state::AppState;
use crate::ui::theme;
use std::time::Instant;

/// Drop expired flashes, draw the rest, and schedule the next repaint.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let now = Instant::now();
    state.flashes.prune(now);
    if state.flashes.is_empty() {
        return;
    }

    let mut dismissed: Vec<u64> = Vec::new();
    egui::Area::new(egui::Id::new("flash_area"))
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 40.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_max_width(theme::FLASH_WIDTH);
            for flash in state.flashes.iter() {
                let fill = match flash.level {
                    FlashLevel::Info => theme::FLASH_INFO_BG,
                    FlashLevel::Success => theme::FLASH_SUCCESS_BG,
                    FlashLevel::Error => theme::FLASH_ERROR_BG,
                };
                egui::Frame::popup(ui.style()).fill(fill).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let text = egui::RichText::new(flash.message.as_str())
                            .color(theme::FLASH_TEXT);
                        ui.add(egui::Label::new(text).wrap());
                        if ui.small_button("\u{2715}").clicked() {
                            dismissed.push(flash.id);
                        }
                    });
                });
                ui.add_space(4.0);
            }
        });

    for id in dismissed {
        state.flashes.dismiss(id);
    }

    if let Some(wait) = state.flashes.next_expiry(now) {
        ctx.request_repaint_after(wait);
    }
}
