use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use grid_snake::client::{ClientState, handle_input};
use grid_snake::config::{DEFAULT_SPEED_MS, FRAME_INTERVAL_MS};
use grid_snake::engine::GameEngine;
use grid_snake::input::InputHandler;
use grid_snake::logging::{default_log_path, init_file_logger};
use grid_snake::notify::{AudioNotifier, TerminalBell};
use grid_snake::renderer::{self, View};
use grid_snake::scheduler::{Scheduler, SystemClock};
use grid_snake::store::{JsonFileStore, KeyValueStore};
use grid_snake::terminal_runtime::TerminalSession;
use grid_snake::theme::DisplayMode;
use simplelog::LevelFilter;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Pre-fill the player name on the start screen.
    #[arg(long)]
    name: Option<String>,

    /// Start in dark mode.
    #[arg(long)]
    dark: bool,

    /// Movement period in milliseconds.
    #[arg(long, default_value_t = DEFAULT_SPEED_MS)]
    speed: u64,

    /// Key-value store file holding the high score.
    #[arg(long = "scores-file")]
    scores_file: Option<PathBuf>,

    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    #[arg(long = "log-level", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Disable the terminal bell cues.
    #[arg(long)]
    mute: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(error) = init_file_logger(&log_path, cli.log_level) {
        eprintln!("Logging disabled, cannot open {}: {error}", log_path.display());
    }

    let store = match &cli.scores_file {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::default_location(),
    };
    log::info!("starting, store at {}", store.path().display());

    let mut engine = GameEngine::new(TerminalBell::new(cli.mute), store);
    engine.set_speed_ms(cli.speed);

    let mut client = ClientState::new(
        cli.name.as_deref().unwrap_or_default(),
        DisplayMode::from_dark_flag(cli.dark),
    );

    let result = run(&mut engine, &mut client);
    log::info!("exiting, high score {}", engine.state().high_score);
    result
}

fn run<N, S>(engine: &mut GameEngine<N, S>, client: &mut ClientState) -> io::Result<()>
where
    N: AudioNotifier,
    S: KeyValueStore,
{
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut scheduler = Scheduler::new(engine.state().speed_ms);
    let clock = SystemClock;

    loop {
        session.terminal_mut().draw(|frame| {
            renderer::render(
                frame,
                engine.state(),
                View {
                    mode: client.mode,
                    name_field: &client.name_field,
                },
            )
        })?;

        if let Some(game_input) = input.poll_input(Duration::from_millis(FRAME_INTERVAL_MS))? {
            if handle_input(engine, client, game_input).is_break() {
                break;
            }
        }

        scheduler.pump(&clock, engine);
    }

    scheduler.cancel_all();
    Ok(())
}
