//! # ShapShap - Binary Entry Point
//!
//! Initializes logging, builds the [`App`] orchestrator, and hands control
//! to the eframe event loop. Each frame drains async results and advances
//! the exchange timers before rendering.

use shapshap::app::App;
use shapshap::{ui, utils};
use std::time::Duration;

struct ShapShapApp {
    app: App,
    // Held so buffered log lines are flushed on exit
    _log_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

impl eframe::App for ShapShapApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app, frame);

        // The ticker and countdown advance on wall-clock deadlines, so keep
        // frames coming even without input
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}

fn main() -> eframe::Result {
    let log_guard = utils::logging::init();
    tracing::info!("Starting ShapShap");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("ShapShap"),
        ..Default::default()
    };

    eframe::run_native(
        "ShapShap",
        options,
        Box::new(|_cc| {
            Ok(Box::new(ShapShapApp {
                app: App::new(),
                _log_guard: log_guard,
            }))
        }),
    )
}
