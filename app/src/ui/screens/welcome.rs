//! # Welcome Screen
//!
//! Landing screen with the tagline, primary calls to action, and the
//! services grid. Each service card opens onboarding with that service
//! pre-selected.

use crate::app::{App, AppState, Screen, SERVICES};
use crate::ui::widgets::cards;
use egui;

/// Render welcome screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let palette = state.settings.theme_config.to_palette();
    let strings = state.strings();

    ui.add_space(30.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("ShapShap")
                .size(42.0)
                .strong()
                .color(palette.primary),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(strings.tagline)
                .size(18.0)
                .color(palette.dim),
        );
    });

    ui.add_space(30.0);

    // Primary calls to action
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            let button_size = egui::vec2(180.0, 40.0);
            let total = button_size.x * 3.0 + ui.spacing().item_spacing.x * 2.0;
            let pad = (ui.available_width() - total).max(0.0) / 2.0;
            ui.add_space(pad);

            if ui
                .add(egui::Button::new(strings.cta_find_suppliers).min_size(button_size))
                .clicked()
            {
                app.handle_screen_change(Screen::Suppliers);
            }
            if ui
                .add(egui::Button::new(strings.cta_opportunities).min_size(button_size))
                .clicked()
            {
                app.handle_screen_change(Screen::Opportunities);
            }
            if ui
                .add(egui::Button::new(strings.cta_exchange).min_size(button_size))
                .clicked()
            {
                app.handle_screen_change(Screen::Exchange);
            }
        });
    });

    ui.add_space(40.0);
    ui.separator();
    ui.add_space(10.0);

    ui.label(
        egui::RichText::new(strings.our_services)
            .size(20.0)
            .strong(),
    );
    ui.add_space(10.0);

    let service_labels = [
        strings.svc_sourcing,
        strings.svc_quality,
        strings.svc_shipping,
        strings.svc_customs,
        strings.svc_escrow,
        strings.svc_intelligence,
    ];

    // Services grid, two rows of three; clicking a card opens onboarding
    egui::Grid::new("services_grid")
        .num_columns(3)
        .spacing([15.0, 15.0])
        .show(ui, |ui| {
            for (idx, label) in service_labels.iter().enumerate() {
                let clicked = cards::render_card(ui, label, &palette, |ui| {
                    ui.add_space(4.0);
                    ui.button(strings.nav_onboarding).clicked()
                });
                if clicked {
                    app.open_onboarding_with_service(idx);
                }
                if idx % 3 == 2 {
                    ui.end_row();
                }
            }
        });

    debug_assert_eq!(service_labels.len(), SERVICES.len());
}
