//! # Card and Table Components
//!
//! Reusable grid/card components for displaying supplier and opportunity data.

use crate::ui::theme::Palette;
use egui;

/// Configuration for table styling
pub struct TableConfig {
    pub num_columns: usize,
    pub spacing: [f32; 2],
    pub striped: bool,
    pub scrollable: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_columns: 4,
            spacing: [10.0, 5.0],
            striped: true,
            scrollable: false,
        }
    }
}

/// Render a data table with headers and rows
pub fn render_table<F>(
    ui: &mut egui::Ui,
    id: &str,
    config: TableConfig,
    headers: &[&str],
    palette: &Palette,
    render_rows: F,
) where
    F: FnOnce(&mut egui::Ui),
{
    let table_render = |ui: &mut egui::Ui| {
        egui::Grid::new(id)
            .num_columns(config.num_columns)
            .spacing(config.spacing)
            .striped(config.striped)
            .show(ui, |ui| {
                for header in headers {
                    ui.colored_label(palette.primary, *header);
                }
                ui.end_row();

                render_rows(ui);
            });
    };

    if config.scrollable {
        egui::ScrollArea::vertical().show(ui, table_render);
    } else {
        table_render(ui);
    }
}

/// Render an empty state message
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    palette: &Palette,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(palette.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(5.0);
            ui.colored_label(palette.dim, egui::RichText::new(secondary).size(12.0));
        }
        ui.add_space(20.0);
    });
}

/// Render a framed card with a title, returning whatever the body produces
pub fn render_card<R>(
    ui: &mut egui::Ui,
    title: &str,
    palette: &Palette,
    body: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::group(ui.style())
        .fill(palette.surface)
        .stroke(egui::Stroke::new(1.0, palette.border))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(title)
                    .size(16.0)
                    .strong()
                    .color(palette.text),
            );
            ui.add_space(8.0);
            body(ui)
        })
        .inner
}

/// Render a label/value line inside a card
pub fn render_stat_row(ui: &mut egui::Ui, label: &str, value: &str, palette: &Palette) {
    ui.horizontal(|ui| {
        ui.colored_label(palette.dim, label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(palette.text, value);
        });
    });
}
