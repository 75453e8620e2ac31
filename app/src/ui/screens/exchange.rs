//! # Exchange Screen
//!
//! Live rate ticker, fee calculator breakdown, cost comparison against the
//! bank and black-market channels, and the rate-lock panel.

use crate::app::{App, AppState};
use crate::exchange::{Currency, Quote, Trend};
use crate::ui::widgets::{cards, forms};
use egui;
use shared::{format_money, format_rate};

/// Render exchange screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let palette = state.settings.theme_config.to_palette();
    let strings = state.strings();
    let exchange = &state.exchange;
    let locked = exchange.lock.is_locked();
    let currency = exchange.ticker.currency();

    ui.heading(strings.nav_exchange);
    ui.add_space(10.0);

    // Currency selector and live rate
    ui.horizontal(|ui| {
        ui.add_enabled_ui(!locked, |ui| {
            egui::ComboBox::from_id_salt("exchange_currency")
                .selected_text(format!("{} {}", currency.flag(), currency.code()))
                .show_ui(ui, |ui| {
                    for &candidate in Currency::all() {
                        let label = format!(
                            "{} {} - {}",
                            candidate.flag(),
                            candidate.code(),
                            candidate.name()
                        );
                        if ui
                            .selectable_label(candidate == currency, label)
                            .clicked()
                        {
                            app.handle_currency_select(candidate);
                        }
                    }
                });
        });

        ui.add_space(10.0);

        let trend = exchange.ticker.trend();
        let trend_color = palette.trend_color(match trend {
            Trend::Up => Some(true),
            Trend::Down => Some(false),
            Trend::Flat => None,
        });
        ui.colored_label(palette.dim, strings.live_rate);
        ui.colored_label(
            trend_color,
            format!(
                "1 {} = {} CNY {}",
                currency.code(),
                format_rate(exchange.ticker.displayed()),
                trend.arrow()
            ),
        );

        if locked {
            ui.add_space(8.0);
            ui.colored_label(palette.warning, strings.locked_badge);
        }
    });

    ui.add_space(12.0);

    // Amount input
    let mut amount = exchange.amount_input.clone();
    let response = forms::render_text_input(
        ui,
        &format!("{} ({})", strings.amount_to_send, currency.code()),
        &mut amount,
        "0",
        [240.0, 26.0],
    );
    if response.changed() {
        app.handle_exchange_amount_input(amount);
    }

    let quote = Quote::from_input(
        &exchange.amount_input,
        exchange.ticker.displayed(),
        exchange.premium,
    );

    ui.add_space(12.0);

    ui.columns(2, |columns| {
        // Fee breakdown
        cards::render_card(&mut columns[0], strings.you_receive, &palette, |ui| {
            ui.colored_label(
                palette.primary,
                egui::RichText::new(format!("{} CNY", format_money(quote.converted))).size(22.0),
            );
            ui.add_space(6.0);
            cards::render_stat_row(
                ui,
                strings.service_fee,
                &format!("{} {}", format_money(quote.service_fee), currency.code()),
                &palette,
            );
            cards::render_stat_row(
                ui,
                strings.network_fee,
                &format!("{} {}", format_money(quote.network_fee), currency.code()),
                &palette,
            );
            cards::render_stat_row(
                ui,
                strings.total_payable,
                &format!("{} {}", format_money(quote.total_payable), currency.code()),
                &palette,
            );
        });

        // Channel comparison
        cards::render_card(&mut columns[1], strings.your_savings, &palette, |ui| {
            cards::render_stat_row(
                ui,
                strings.bank_cost,
                &format!("{} {}", format_money(quote.bank_cost), currency.code()),
                &palette,
            );
            cards::render_stat_row(
                ui,
                strings.black_market_cost,
                &format!("{} {}", format_money(quote.black_market_cost), currency.code()),
                &palette,
            );
            ui.add_space(6.0);
            ui.colored_label(
                palette.success,
                egui::RichText::new(format!(
                    "{} {}",
                    format_money(quote.savings),
                    currency.code()
                ))
                .size(20.0),
            );
        });
    });

    ui.add_space(12.0);

    // Rate lock panel
    cards::render_card(ui, strings.rate_lock, &palette, |ui| {
        ui.horizontal(|ui| {
            ui.add_enabled_ui(!locked, |ui| {
                let mut premium = exchange.premium;
                let standard = ui.radio_value(&mut premium, false, strings.tier_standard);
                let premium_btn = ui.radio_value(&mut premium, true, strings.tier_premium);
                if standard.clicked() || premium_btn.clicked() {
                    app.handle_premium_toggle(premium);
                }
            });

            ui.add_space(14.0);
            let countdown_color = if locked { palette.warning } else { palette.dim };
            ui.colored_label(
                countdown_color,
                egui::RichText::new(exchange.lock.countdown_label()).size(20.0),
            );

            ui.add_space(14.0);
            let toggle_label = if locked {
                strings.unlock_rate
            } else {
                strings.lock_rate
            };
            if forms::render_button(ui, toggle_label, Some(palette.secondary), None).clicked() {
                app.handle_rate_lock_toggle();
            }
        });
    });

    ui.add_space(12.0);

    ui.add_enabled_ui(!quote.is_zero(), |ui| {
        if forms::render_button(
            ui,
            strings.proceed_to_payment,
            Some(palette.primary),
            Some(egui::vec2(220.0, 36.0)),
        )
        .clicked()
        {
            app.open_account_with_quote(quote.total_payable, currency, quote.converted);
        }
    });
}
