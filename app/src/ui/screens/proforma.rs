//! # Proforma Screen
//!
//! Generate a proforma invoice for the supplier carried over from the
//! suppliers screen. Shows the generated reference, estimated total, and a
//! link to the document, with service links into onboarding below.

use crate::app::{App, AppState, Screen};
use crate::ui::widgets::{cards, forms};
use egui;
use shared::format_money;

/// Render proforma screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let palette = state.settings.theme_config.to_palette();
    let strings = state.strings();

    ui.heading(strings.nav_proforma);
    ui.add_space(10.0);

    let supplier = match &state.proforma.supplier {
        Some(supplier) => supplier.clone(),
        None => {
            cards::render_empty_state(ui, strings.pick_supplier_hint, None, &palette);
            ui.vertical_centered(|ui| {
                if ui.button(strings.nav_suppliers).clicked() {
                    app.handle_screen_change(Screen::Suppliers);
                }
            });
            return;
        }
    };

    cards::render_card(ui, &supplier.name, &palette, |ui| {
        ui.colored_label(palette.dim, &supplier.location);
        ui.label(&supplier.product);
        cards::render_stat_row(
            ui,
            strings.listed_price,
            &format!("${}", format_money(supplier.unit_price_usd)),
            &palette,
        );
        cards::render_stat_row(
            ui,
            strings.min_order,
            &supplier.min_order_quantity.to_string(),
            &palette,
        );
    });

    ui.add_space(12.0);

    ui.horizontal(|ui| {
        let mut quantity = state.proforma.quantity_input.clone();
        let response = forms::render_text_input(ui, strings.quantity, &mut quantity, "1", [80.0, 24.0]);
        if response.changed() {
            app.handle_proforma_quantity_input(quantity);
        }

        ui.add_space(10.0);

        if state.proforma.generating {
            ui.add(egui::Spinner::new());
            ui.colored_label(palette.dim, strings.generating);
        } else if forms::render_button(
            ui,
            strings.generate_proforma,
            Some(palette.primary),
            None,
        )
        .clicked()
        {
            app.handle_proforma_generate();
        }
    });

    ui.add_space(10.0);

    if let Some(error) = &state.proforma.error {
        forms::render_error(ui, error, &palette);
    }

    if let Some(quote) = &state.proforma.quote {
        ui.add_space(10.0);
        cards::render_card(ui, strings.invoice_reference, &palette, |ui| {
            ui.colored_label(palette.primary, &quote.reference);
            cards::render_stat_row(
                ui,
                strings.estimated_total,
                &format!("${}", format_money(quote.total_cost_usd)),
                &palette,
            );
            cards::render_stat_row(
                ui,
                "",
                &quote.issued_at.format("%Y-%m-%d %H:%M UTC").to_string(),
                &palette,
            );
            ui.add_space(6.0);
            ui.hyperlink_to(strings.open_document, &quote.url);
        });
    }

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);

    // The five fulfilment services for this order; each link opens onboarding
    // with that service pre-selected. Market Intelligence is onboarding-only.
    ui.label(egui::RichText::new(strings.our_services).size(16.0).strong());
    ui.add_space(6.0);
    let service_links = [
        (0, strings.svc_sourcing),
        (1, strings.svc_quality),
        (2, strings.svc_shipping),
        (3, strings.svc_customs),
        (4, strings.svc_escrow),
    ];
    ui.horizontal_wrapped(|ui| {
        for (idx, label) in service_links {
            if ui.button(label).clicked() {
                app.open_onboarding_with_service(idx);
            }
        }
    });
}
