use std::io::{BufRead, Write};

use puzzle2048_engine::log;
use puzzle2048_engine::replay::Replay;
use puzzle2048_engine::{GameStatus, SessionRng};

use crate::command::Command;
use crate::config::Config;
use crate::render::render;
use crate::session::GameSession;

const HELP: &str = "Commands: w/a/s/d or up/left/down/right to move, n for a new game, q to quit";

/// Reads commands line by line until `q` or end of input. Returns the
/// replays of every game that had at least one accepted move.
pub fn run_interactive<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &Config,
    seed: Option<u64>,
) -> Result<Vec<Replay>, Box<dyn std::error::Error>> {
    let mut finished = Vec::new();
    let mut session = start_session(config, seed)?;

    writeln!(output, "{}", HELP)?;
    write!(output, "{}", render(&session))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}. {}", e, HELP)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::NewGame => {
                keep_replay(&mut session, &mut finished);
                session = start_session(config, None)?;
            }
            Command::Move(direction) => {
                let was_playing = session.game_state().status() == GameStatus::Playing;
                if let Err(e) = session.handle_move(direction) {
                    session.note(e.to_string());
                    log!("Move {} failed: {}", direction, e);
                }
                if was_playing {
                    announce_game_over(&mut session);
                }
            }
        }

        write!(output, "{}", render(&session))?;
    }

    keep_replay(&mut session, &mut finished);
    Ok(finished)
}

fn start_session(
    config: &Config,
    seed: Option<u64>,
) -> Result<GameSession, Box<dyn std::error::Error>> {
    let seed = seed.unwrap_or_else(|| SessionRng::from_random().seed());
    let session = GameSession::start(config.game, seed, config.event_log_size)?;
    log!("Started game with seed {}", seed);
    Ok(session)
}

fn announce_game_over(session: &mut GameSession) {
    let game_state = session.game_state();
    let message = match game_state.status() {
        GameStatus::Playing => return,
        GameStatus::Won => format!("You won with {} points!", game_state.score()),
        GameStatus::Lost => format!("No moves left. Final score {}", game_state.score()),
    };
    log!(
        "Game {} over ({:?}) after {} moves, score {}",
        session.seed(),
        game_state.status(),
        game_state.moves_made(),
        game_state.score()
    );
    session.note(format!("{} Press n for a new game or q to quit", message));
}

fn keep_replay(session: &mut GameSession, finished: &mut Vec<Replay>) {
    let replay = session.finish();
    if !replay.moves.is_empty() {
        finished.push(replay);
    }
}
