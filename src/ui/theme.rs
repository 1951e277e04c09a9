// SentiView - ui/theme.rs
//
// Colour scheme, sentiment colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::Theme;
use egui::Color32;

/// Apply the theme and body font size to the egui context.
pub fn apply(ctx: &egui::Context, theme: Theme, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    if let Some(body) = style.text_styles.get_mut(&egui::TextStyle::Body) {
        body.size = font_size;
    }
    if let Some(button) = style.text_styles.get_mut(&egui::TextStyle::Button) {
        button.size = font_size;
    }
    style.visuals = match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    };
    ctx.set_style(style);
}

/// Label for the theme toggle button: shows the theme a click switches to.
pub fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "\u{2600} Light",
        Theme::Light => "\u{263e} Dark",
    }
}

/// Text colour for a sentiment value (compared lowercase).
pub fn sentiment_colour(sentiment: &str, fallback: Color32) -> Color32 {
    match sentiment.trim().to_lowercase().as_str() {
        "positive" | "positivo" => Color32::from_rgb(34, 197, 94), // Green 500
        "negative" | "negativo" => Color32::from_rgb(220, 38, 38), // Red 600
        "neutral" | "neutro" => Color32::from_rgb(107, 114, 128),  // Gray 500
        _ => fallback,
    }
}

/// Flash background colours.
pub const FLASH_INFO_BG: Color32 = Color32::from_rgb(37, 99, 235); // Blue 600
pub const FLASH_SUCCESS_BG: Color32 = Color32::from_rgb(22, 163, 74); // Green 600
pub const FLASH_ERROR_BG: Color32 = Color32::from_rgb(185, 28, 28); // Red 800
pub const FLASH_TEXT: Color32 = Color32::WHITE;

/// Sidebar overlay tint.
pub const OVERLAY: Color32 = Color32::from_black_alpha(110);

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 260.0;
pub const FLASH_WIDTH: f32 = 320.0;
pub const USER_MENU_WIDTH: f32 = 180.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_colours() {
        let fallback = Color32::WHITE;
        assert_eq!(sentiment_colour(" Positive ", fallback), Color32::from_rgb(34, 197, 94));
        assert_eq!(sentiment_colour("NEGATIVO", fallback), Color32::from_rgb(220, 38, 38));
        assert_eq!(sentiment_colour("mixed", fallback), fallback);
    }
}
