//! Gomoku GUI
//!
//! Play five in a row against the computer.

use clap::Parser;
use gomoku::config::Cli;
use gomoku::ui::GomokuApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let config = Cli::parse().into_config();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        difficulty = %config.difficulty,
        color = %config.player_color,
        think_min = ?config.think_min,
        think_max = ?config.think_max,
        "Starting Gomoku"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
}
