mod broadcaster;
mod config;
mod state;
mod ui;

use clap::Parser;
use common::game::{GameSession, SessionRng};
use common::log;
use eframe::egui;
use tokio::sync::mpsc;

use broadcaster::UiBroadcaster;
use state::SharedState;
use ui::{PIXELS_PER_CELL, SnakeDuelApp};

#[derive(Parser, Debug)]
#[command(name = "snake_duel_client", about = "Two-player snake duel")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Fixed RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    common::logger::init_logger();

    let config_manager = match args.config.as_deref() {
        Some(path) => config::config_manager_for(path),
        None => config::get_config_manager(),
    };
    let config = config_manager.get_config()?;
    log!(
        "Loaded config: {}x{} grid, {} ms initial interval",
        config.field_width,
        config.field_height,
        config.initial_tick_interval_ms
    );

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let session = GameSession::new(config.to_game_settings(), rng);
    let broadcaster = UiBroadcaster::new(shared_state.clone());
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(session.run(command_rx, broadcaster));
    });

    let window_width = config.field_width as f32 * PIXELS_PER_CELL + 300.0;
    let window_height = config.field_height as f32 * PIXELS_PER_CELL + 160.0;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_width, window_height])
            .with_title("Snake Duel"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Duel",
        options,
        Box::new(|_cc| Ok(Box::new(SnakeDuelApp::new(shared_state, command_tx)))),
    )?;

    Ok(())
}
