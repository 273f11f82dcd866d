mod frame_input;
mod render;
mod window_config;

use std::fs;
use std::path::{Path, PathBuf};

use app::app_loop::AppState;
use app::seed::{SeedChoice, generate_runtime_seed};
use app::settings_file::SettingsFile;
use app::{format_seed, format_snapshot_hash};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use macroquad::time::get_frame_time;
use macroquad::Window;
use macroquad::window::next_frame;
use maze_core::{Game, InputJournal};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::frame_input::capture_frame_input;
use crate::render::draw_frame;
use crate::window_config::build_window_conf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sneak through a lamp-lit maze past guards and scouts")]
struct Cli {
    /// Run seed; a fresh one is generated when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file (defaults to the per-user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the session's input journal here on quit
    #[arg(long)]
    record: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(fmt::layer().without_time())
        .init();

    let settings = match cli.settings.clone().or_else(SettingsFile::get_default_path) {
        Some(path) => SettingsFile::load_or_default(&path)
            .wrap_err_with(|| format!("reading settings from {}", path.display()))?,
        None => SettingsFile::default(),
    };

    let seed = SeedChoice::resolve(cli.seed, generate_runtime_seed());
    info!(seed = %format_seed(seed.value()), source = seed.source(), "starting run");
    let game = Game::new(seed.value(), settings.sim.clone()).wrap_err("building first level")?;
    let app_state = if cli.record.is_some() { AppState::recording(&game) } else { AppState::new() };

    Window::from_config(build_window_conf(&settings.window), run(game, app_state, cli.record));
    Ok(())
}

async fn run(mut game: Game, mut app_state: AppState, record_path: Option<PathBuf>) {
    loop {
        let input = capture_frame_input();
        if let Err(err) =
            app_state.tick(&mut game, get_frame_time(), input.controls, &input.keys_pressed)
        {
            error!(%err, "could not rebuild the level");
            break;
        }
        if app_state.should_quit() {
            break;
        }
        draw_frame(&game, &app_state, input.look);
        next_frame().await;
    }

    info!(
        level = game.level_index(),
        tick = game.current_tick(),
        hash = %format_snapshot_hash(game.snapshot_hash()),
        "session closed"
    );
    if let (Some(path), Some(journal)) = (record_path, app_state.journal.as_ref()) {
        match save_journal(&path, journal) {
            Ok(()) => info!(path = %path.display(), frames = journal.frames.len(), "saved journal"),
            Err(err) => error!("{err:?}"),
        }
    }
}

fn save_journal(path: &Path, journal: &InputJournal) -> Result<()> {
    let text = journal.to_json().wrap_err("serializing journal")?;
    fs::write(path, text).wrap_err_with(|| format!("writing journal to {}", path.display()))
}
