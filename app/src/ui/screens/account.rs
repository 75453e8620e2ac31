//! # Account Screen
//!
//! Wallet screen with two sections: top-up (receive CNY for a local-currency
//! payment) and sending CNY from the balance.

use crate::app::{AccountSection, App, AppState, PaymentMethod};
use crate::exchange::Currency;
use crate::ui::widgets::{cards, forms};
use egui;
use shared::format_money;

/// Render account screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let palette = state.settings.theme_config.to_palette();
    let strings = state.strings();
    let account = &state.account;

    ui.horizontal(|ui| {
        ui.heading(strings.nav_account);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(
                palette.primary,
                egui::RichText::new(format!(
                    "{} {}",
                    strings.cny_balance,
                    format_money(account.cny_balance)
                ))
                .size(18.0),
            );
        });
    });
    ui.add_space(10.0);

    // Section tabs
    ui.horizontal(|ui| {
        for (section, label) in [
            (AccountSection::TopUp, strings.top_up),
            (AccountSection::SendCny, strings.send_cny),
        ] {
            let selected = account.section == section;
            if ui.selectable_label(selected, label).clicked() && !selected {
                app.handle_account_section_change(section);
            }
        }
    });
    ui.separator();
    ui.add_space(10.0);

    match account.section {
        AccountSection::TopUp => render_topup(ui, state, app, &palette),
        AccountSection::SendCny => render_send(ui, state, app, &palette),
    }
}

fn render_topup(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut App,
    palette: &crate::ui::theme::Palette,
) {
    let strings = state.strings();
    let account = &state.account;
    let field_size = [260.0, 24.0];

    let mut amount = account.topup_amount_input.clone();
    if forms::render_text_input(ui, strings.amount, &mut amount, "0.00", field_size).changed() {
        app.handle_topup_amount_input(amount);
    }
    ui.add_space(6.0);

    egui::ComboBox::from_id_salt("topup_currency")
        .selected_text(format!(
            "{} {}",
            account.topup_currency.flag(),
            account.topup_currency.code()
        ))
        .show_ui(ui, |ui| {
            for &candidate in Currency::all() {
                let label = format!("{} {}", candidate.flag(), candidate.code());
                if ui
                    .selectable_label(candidate == account.topup_currency, label)
                    .clicked()
                {
                    app.handle_topup_currency_select(candidate);
                }
            }
        });
    ui.add_space(6.0);

    if let Some(incoming) = account.incoming_cny {
        cards::render_stat_row(
            ui,
            strings.you_receive,
            &format!("{} CNY", format_money(incoming)),
            palette,
        );
        ui.add_space(6.0);
    }

    ui.label(egui::RichText::new(strings.payment_method).size(14.0));
    let method_label = account
        .payment_method
        .map(|m| m.label())
        .unwrap_or("-");
    egui::ComboBox::from_id_salt("payment_method")
        .selected_text(method_label)
        .show_ui(ui, |ui| {
            for &candidate in PaymentMethod::all() {
                let selected = account.payment_method == Some(candidate);
                if ui.selectable_label(selected, candidate.label()).clicked() {
                    app.handle_payment_method_select(candidate);
                }
            }
        });
    ui.add_space(6.0);

    let mut number = account.account_number.clone();
    if forms::render_text_input(ui, strings.account_number, &mut number, "", field_size).changed()
    {
        app.handle_account_number_input(number);
    }

    ui.add_space(10.0);
    if let Some(error) = &account.topup_error {
        forms::render_error(ui, &error.to_string(), palette);
        ui.add_space(6.0);
    }
    if account.topup_confirmed {
        forms::render_success(ui, strings.topup_confirmed, palette);
        ui.add_space(6.0);
    }

    if forms::render_button(
        ui,
        strings.top_up,
        Some(palette.primary),
        Some(egui::vec2(140.0, 30.0)),
    )
    .clicked()
    {
        app.handle_topup_submit();
    }
}

fn render_send(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut App,
    palette: &crate::ui::theme::Palette,
) {
    let strings = state.strings();
    let account = &state.account;
    let field_size = [260.0, 24.0];

    let mut recipient = account.recipient_input.clone();
    if forms::render_text_input(ui, strings.recipient_account, &mut recipient, "", field_size)
        .changed()
    {
        app.handle_recipient_input(recipient);
    }
    ui.add_space(6.0);

    let mut amount = account.send_amount_input.clone();
    if forms::render_text_input(
        ui,
        &format!("{} (CNY)", strings.amount),
        &mut amount,
        "0.00",
        field_size,
    )
    .changed()
    {
        app.handle_send_amount_input(amount);
    }

    ui.add_space(10.0);
    if let Some(error) = &account.transfer_error {
        forms::render_error(ui, &error.to_string(), palette);
        ui.add_space(6.0);
    }
    if account.transfer_confirmed {
        forms::render_success(ui, strings.transfer_confirmed, palette);
        ui.add_space(6.0);
    }

    if forms::render_button(
        ui,
        strings.send,
        Some(palette.primary),
        Some(egui::vec2(140.0, 30.0)),
    )
    .clicked()
    {
        app.handle_transfer_submit();
    }
}
