mod command;
mod config;
mod constants;
mod playback;
mod render;
mod runner;
mod session;

use std::io::{BufReader, stdin, stdout};
use std::path::PathBuf;

use clap::Parser;
use puzzle2048_engine::replay::{Replay, generate_replay_filename, save_replay};
use puzzle2048_engine::version::VERSION;
use puzzle2048_engine::{log, logger};

use config::{ReplayConfig, get_config_manager};

#[derive(Parser)]
#[command(name = "puzzle2048", version)]
struct Args {
    /// Path of the YAML config file; defaults to one next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    /// Play back a saved replay instead of starting a game.
    #[arg(long)]
    replay: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Puzzle2048".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if let Some(path) = args.replay {
        return playback::run_playback(&path, &mut stdout());
    }

    let config = get_config_manager(args.config).get_config()?;
    log!("Puzzle 2048 {} starting", VERSION);

    let replays = runner::run_interactive(
        BufReader::new(stdin()),
        &mut stdout(),
        &config,
        args.seed,
    )?;

    if config.replays.save {
        for replay in &replays {
            save_replay_file(&config.replays, replay);
        }
    }

    Ok(())
}

fn save_replay_file(replay_config: &ReplayConfig, replay: &Replay) {
    let replay_dir = std::path::Path::new(&replay_config.location);
    if let Err(e) = std::fs::create_dir_all(replay_dir) {
        log!("Failed to create replay directory: {}", e);
        return;
    }

    let file_path = replay_dir.join(generate_replay_filename(replay.seed, VERSION));
    match save_replay(&file_path, replay) {
        Ok(()) => log!("Replay saved to: {}", file_path.display()),
        Err(e) => log!("Failed to save replay: {}", e),
    }
}
