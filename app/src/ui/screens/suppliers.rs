//! # Supplier Search Screen
//!
//! Search bar plus result cards with the three-way price comparison
//! (listed, via money exchanger, via ShapShap escrow).

use crate::app::{App, AppState};
use crate::ui::widgets::{cards, forms};
use egui;
use shared::format_money;

/// Render suppliers screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let palette = state.settings.theme_config.to_palette();
    let strings = state.strings();

    ui.heading(strings.nav_suppliers);
    ui.add_space(10.0);

    // Search bar
    ui.horizontal(|ui| {
        let mut query = state.suppliers.query_input.clone();
        let response = ui.add_sized(
            [300.0, 26.0],
            egui::TextEdit::singleline(&mut query).hint_text(strings.search_placeholder),
        );
        if response.changed() {
            app.handle_supplier_query_input(query);
        }

        let submitted =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if state.suppliers.searching {
            ui.add(egui::Spinner::new());
            ui.colored_label(palette.dim, strings.searching);
        } else if forms::render_button(ui, strings.search, Some(palette.secondary), None).clicked()
            || submitted
        {
            app.handle_supplier_search();
        }
    });

    ui.add_space(10.0);

    if let Some(error) = &state.suppliers.error {
        forms::render_error(ui, error, &palette);
        ui.add_space(10.0);
    }

    if state.suppliers.searched && state.suppliers.results.is_empty() && !state.suppliers.searching
    {
        cards::render_empty_state(ui, strings.no_results, None, &palette);
        return;
    }

    let results = state.suppliers.results.clone();
    egui::ScrollArea::vertical().show(ui, |ui| {
        for supplier in results {
            let request = cards::render_card(ui, &supplier.name, &palette, |ui| {
                ui.colored_label(palette.dim, &supplier.location);
                ui.label(&supplier.product);
                ui.horizontal(|ui| {
                    ui.colored_label(
                        palette.warning,
                        format!("{} {:.1}", strings.rating, supplier.rating),
                    );
                    ui.separator();
                    ui.colored_label(
                        palette.dim,
                        format!("{} {}", strings.min_order, supplier.min_order_quantity),
                    );
                });
                ui.add_space(6.0);

                // Price comparison per unit
                cards::render_stat_row(
                    ui,
                    strings.listed_price,
                    &format!("${}", format_money(supplier.unit_price_usd)),
                    &palette,
                );
                cards::render_stat_row(
                    ui,
                    strings.via_exchanger,
                    &format!("${}", format_money(supplier.price_via_exchanger())),
                    &palette,
                );
                ui.horizontal(|ui| {
                    ui.colored_label(palette.success, strings.via_shapshap);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.colored_label(
                            palette.success,
                            format!("${}", format_money(supplier.price_via_shapshap())),
                        );
                    });
                });

                ui.add_space(6.0);
                forms::render_button(ui, strings.request_proforma, Some(palette.primary), None)
                    .clicked()
            });

            if request {
                app.open_proforma_for(supplier);
            }
            ui.add_space(8.0);
        }
    });
}
