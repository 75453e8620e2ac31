//! # GUI Rendering Framework
//!
//! Orchestrates the per-frame rendering pipeline. Rendering always works from
//! a cloned state snapshot so the lock is never held across widget code; user
//! actions dispatch back through [`crate::app::App`] handler methods.

pub mod i18n;
pub mod screens;
pub mod settings_panel;
pub mod theme;
pub mod widgets;

use crate::app::{App, Screen};
use egui;
use shared::{format_money, format_rate};

/// Main render function - called every frame by eframe
pub fn render(ctx: &egui::Context, app: &mut App, _frame: &mut eframe::Frame) {
    // Read state for rendering
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            None => {
                // Lock is held by another task, skip this frame
                return;
            }
        }
    }; // Lock released here - rendering happens without holding lock

    theme::Palette::apply(ctx, &state.settings.theme_config);

    egui::CentralPanel::default().show(ctx, |ui| {
        widgets::nav_bar::render_nav_bar(ui, &state, app);
        ui.add_space(5.0);
        ui.separator();
        ui.add_space(5.0);

        // Tab / Shift+Tab cycle through screens
        if ctx.input(|i| i.key_pressed(egui::Key::Tab) && !i.modifiers.shift) {
            app.next_screen();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Tab) && i.modifiers.shift) {
            app.previous_screen();
        }

        match state.current_screen {
            Screen::Welcome => screens::welcome::render(ui, &state, app),
            Screen::Suppliers => screens::suppliers::render(ui, &state, app),
            Screen::Proforma => screens::proforma::render(ui, &state, app),
            Screen::Onboarding => screens::onboarding::render(ui, &state, app),
            Screen::Opportunities => screens::opportunities::render(ui, &state, app),
            Screen::Exchange => screens::exchange::render(ui, &state, app),
            Screen::Account => screens::account::render(ui, &state, app),
        }

        // Status bar at bottom
        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            render_status_bar(ui, &state);
            ui.separator();
        });
    });

    settings_panel::render(ctx, &state, app);
}

/// Render status bar at the bottom
pub fn render_status_bar(ui: &mut egui::Ui, state: &crate::app::AppState) {
    let palette = state.settings.theme_config.to_palette();
    let strings = state.strings();
    let ticker = &state.exchange.ticker;

    ui.horizontal(|ui| {
        ui.colored_label(
            palette.primary,
            format!(
                "{} {}",
                strings.cny_balance,
                format_money(state.account.cny_balance)
            ),
        );

        ui.separator();

        let rate_color = if state.exchange.lock.is_locked() {
            palette.warning
        } else {
            palette.dim
        };
        ui.colored_label(
            rate_color,
            format!(
                "1 {} = {} CNY",
                ticker.currency().code(),
                format_rate(ticker.displayed())
            ),
        );
        if state.exchange.lock.is_locked() {
            ui.colored_label(palette.warning, strings.locked_badge);
        }

        ui.separator();

        ui.colored_label(palette.dim, state.settings.language.label());
    });
}
