//! # Onboarding Screen
//!
//! Trader KYC application form with service selection checkboxes.

use crate::app::{App, AppState, OnboardingField};
use crate::ui::widgets::forms;
use egui;

/// Render onboarding screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let palette = state.settings.theme_config.to_palette();
    let strings = state.strings();

    forms::render_form_heading(ui, strings.onboarding_heading, &palette);

    if state.onboarding.submitted {
        forms::render_success(ui, strings.application_received, &palette);
        return;
    }

    let field_size = [320.0, 24.0];
    let fields = [
        (OnboardingField::FullName, strings.full_name, &state.onboarding.full_name),
        (OnboardingField::CompanyName, strings.company_name, &state.onboarding.company_name),
        (OnboardingField::Country, strings.country, &state.onboarding.country),
        (OnboardingField::Address, strings.address, &state.onboarding.address),
        (OnboardingField::Email, strings.email, &state.onboarding.email),
        (OnboardingField::Whatsapp, strings.whatsapp, &state.onboarding.whatsapp),
    ];

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (field, label, value) in fields {
            let mut value = value.clone();
            if forms::render_text_input(ui, label, &mut value, "", field_size).changed() {
                app.handle_onboarding_field(field, value);
            }
            ui.add_space(6.0);
        }

        ui.add_space(8.0);
        ui.label(egui::RichText::new(strings.services_wanted).size(14.0).strong());
        ui.add_space(4.0);

        let service_labels = [
            strings.svc_sourcing,
            strings.svc_quality,
            strings.svc_shipping,
            strings.svc_customs,
            strings.svc_escrow,
            strings.svc_intelligence,
        ];
        for (idx, label) in service_labels.iter().enumerate() {
            let mut checked = state.onboarding.selected_services[idx];
            if ui.checkbox(&mut checked, *label).changed() {
                app.handle_service_toggle(idx);
            }
        }

        ui.add_space(12.0);

        for error in &state.onboarding.errors {
            forms::render_error(ui, &error.to_string(), &palette);
        }

        ui.add_space(8.0);
        if forms::render_button(
            ui,
            strings.submit,
            Some(palette.primary),
            Some(egui::vec2(160.0, 32.0)),
        )
        .clicked()
        {
            app.handle_onboarding_submit();
        }
    });
}
