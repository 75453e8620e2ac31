//! # Navigation Bar
//!
//! Top navigation bar with arrow navigation, one tab per screen, and the
//! settings and language toggles at the far right.

use crate::app::{App, AppState, Screen};
use egui;

/// Render the top navigation bar
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let palette = state.settings.theme_config.to_palette();
    let strings = state.strings();

    ui.horizontal(|ui| {
        ui.set_height(35.0);

        // Navigation arrows at far left
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(2.0, 0.0);

            if ui.button("<").clicked() {
                app.previous_screen();
            }
            if ui.button(">").clicked() {
                app.next_screen();
            }
        });

        ui.add_space(10.0);

        // One selectable tab per screen
        for &screen in Screen::all() {
            let selected = state.current_screen == screen;
            let label = egui::RichText::new(screen.title(strings)).size(14.0);
            let label = if selected {
                label.strong().color(palette.primary)
            } else {
                label.color(palette.dim)
            };
            if ui.selectable_label(selected, label).clicked() && !selected {
                app.handle_screen_change(screen);
            }
        }

        // Settings and language toggle at far right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⚙").clicked() {
                app.handle_settings_panel_toggle();
            }
            if ui
                .button(state.settings.language.toggled().label())
                .clicked()
            {
                app.handle_language_toggle();
            }
        });
    });
}
