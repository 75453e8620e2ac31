//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use crate::ui::theme::Palette;
use egui;

/// Render a styled text input field
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    size: [f32; 2],
) -> egui::Response {
    ui.label(egui::RichText::new(label).size(14.0));
    ui.add_sized(size, egui::TextEdit::singleline(value).hint_text(hint))
}

/// Render a styled button with optional fill color
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    fill_color: Option<egui::Color32>,
    min_size: Option<egui::Vec2>,
) -> egui::Response {
    let mut button = egui::Button::new(egui::RichText::new(text).size(16.0));

    if let Some(color) = fill_color {
        button = button.fill(color);
    }

    if let Some(size) = min_size {
        button = button.min_size(size);
    }

    ui.add(button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    let heading = egui::RichText::new(text)
        .size(24.0)
        .strong()
        .color(palette.primary);
    ui.label(heading);
    ui.add_space(20.0);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, message: &str, palette: &Palette) {
    ui.colored_label(palette.error, format!("⚠ {}", message));
}

/// Render a success confirmation message
pub fn render_success(ui: &mut egui::Ui, message: &str, palette: &Palette) {
    ui.colored_label(palette.success, format!("✔ {}", message));
}
