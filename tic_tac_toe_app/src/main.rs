use anyhow::{anyhow, Result};
use eframe::egui;
use tic_tac_toe::config::{AppConfig, DEFAULT_LOG_FILTER};
use tic_tac_toe::game_app::GameApp;
use tic_tac_toe::storage::FileStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AppConfig::from_env();
    info!("Scores file: {}", config.scores_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tic-Tac-Toe")
            .with_inner_size([460.0, 560.0]),
        ..Default::default()
    };

    let store = FileStore::new(config.scores_path);
    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(GameApp::new(Box::new(store))))),
    )
    .map_err(|e| anyhow!("failed to run the game window: {e}"))
}
