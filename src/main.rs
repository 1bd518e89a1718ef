//! Tic-tac-toe GUI
//!
//! A two-player tic-tac-toe game in a fixed-size window.

use tictactoe::ui::{TicTacToeApp, CANVAS_HEIGHT, CANVAS_WIDTH};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([CANVAS_WIDTH, CANVAS_HEIGHT])
            .with_resizable(false)
            .with_title("Tic-tac-toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-tac-toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
}
