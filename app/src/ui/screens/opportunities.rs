//! # Opportunities Screen
//!
//! Trade opportunities feed. Loads once on first visit and can be refreshed
//! manually.

use crate::app::{App, AppState};
use crate::ui::widgets::cards;
use egui;
use shared::dto::trade::DemandLevel;

/// Render opportunities screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let palette = state.settings.theme_config.to_palette();
    let strings = state.strings();

    // First visit kicks off the initial load
    if !state.opportunities.loaded && !state.opportunities.loading {
        app.handle_opportunities_load();
    }

    ui.horizontal(|ui| {
        ui.heading(strings.opportunities_heading);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.opportunities.loading {
                ui.add(egui::Spinner::new());
                ui.colored_label(palette.dim, strings.loading);
            } else if ui.button(strings.refresh).clicked() {
                app.handle_opportunities_load();
            }
        });
    });
    ui.add_space(10.0);

    if let Some(error) = &state.opportunities.error {
        ui.colored_label(palette.error, format!("⚠ {}", error));
        ui.add_space(10.0);
    }

    if state.opportunities.records.is_empty() {
        if state.opportunities.loaded && !state.opportunities.loading {
            cards::render_empty_state(ui, strings.no_results, None, &palette);
        }
        return;
    }

    let config = cards::TableConfig {
        num_columns: 4,
        spacing: [14.0, 8.0],
        striped: true,
        scrollable: true,
    };

    cards::render_table(
        ui,
        "opportunities",
        config,
        &[strings.route, strings.product, strings.demand, strings.margin],
        &palette,
        |ui| {
            for record in &state.opportunities.records {
                let demand_color = match record.demand {
                    DemandLevel::High => palette.success,
                    DemandLevel::Medium => palette.warning,
                    DemandLevel::Low => palette.dim,
                };

                ui.label(&record.route);
                ui.label(&record.product);
                ui.colored_label(demand_color, record.demand.label());
                ui.label(&record.margin);
                ui.end_row();
            }
        },
    );
}
