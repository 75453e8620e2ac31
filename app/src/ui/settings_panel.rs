//! # Settings Window
//!
//! Floating window for theme color customization and config persistence,
//! opened from the gear button in the nav bar. Color edits apply live;
//! Save writes the config file, Reset restores the stock palette.

use crate::app::{App, AppState};
use crate::ui::widgets::forms;
use egui;

/// Render the settings window when open
pub fn render(ctx: &egui::Context, state: &AppState, app: &mut App) {
    if !state.settings.panel_open {
        return;
    }
    let palette = state.settings.theme_config.to_palette();
    let strings = state.strings();

    let mut open = true;
    egui::Window::new(strings.settings_heading)
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            let mut config = state.settings.theme_config.clone();
            let mut changed = false;

            egui::Grid::new("theme_colors")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    for (label, rgb) in [
                        ("Background", &mut config.background),
                        ("Surface", &mut config.surface),
                        ("Text", &mut config.text),
                        ("Dim text", &mut config.text_dim),
                        ("Primary", &mut config.primary),
                        ("Secondary", &mut config.secondary),
                        ("Success", &mut config.success),
                        ("Error", &mut config.error),
                        ("Warning", &mut config.warning),
                        ("Border", &mut config.border),
                    ] {
                        ui.label(label);
                        changed |= ui.color_edit_button_srgb(rgb).changed();
                        ui.end_row();
                    }
                });

            if changed {
                app.handle_theme_color_change(config);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if forms::render_button(ui, strings.save, Some(palette.primary), None).clicked() {
                    app.handle_settings_save();
                }
                if forms::render_button(ui, strings.reset, None, None).clicked() {
                    app.handle_settings_reset();
                }
                if state.settings.unsaved_changes {
                    ui.colored_label(palette.warning, strings.unsaved_changes);
                }
            });

            ui.add_space(4.0);
            ui.colored_label(palette.dim, &state.settings.config_path);
        });

    if !open {
        app.handle_settings_panel_toggle();
    }
}
