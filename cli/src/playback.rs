use std::io::Write;
use std::path::Path;

use puzzle2048_engine::log;
use puzzle2048_engine::replay::{ReplayPlayer, load_replay};

/// Replays a saved game move by move, printing the board after each step.
pub fn run_playback<W: Write>(
    path: &Path,
    output: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut player = ReplayPlayer::new(load_replay(path)?);
    log!(
        "Playing back {} ({} moves, seed {}, engine {})",
        path.display(),
        player.total_moves(),
        player.seed(),
        player.engine_version()
    );

    let (mut game_state, mut rng) = player.start()?;
    write!(output, "{}", game_state.board())?;

    while let Some(direction) = player.next_move() {
        if !game_state.apply_move(direction, &mut rng)? {
            return Err(format!(
                "Replay rejected move {} ({})",
                player.current_move_index(),
                direction
            )
            .into());
        }
        writeln!(output, "-- {} {}/{}", direction, player.current_move_index(), player.total_moves())?;
        write!(output, "{}", game_state.board())?;
    }

    writeln!(
        output,
        "Final score {}, best tile {}, status {:?}",
        game_state.score(),
        game_state.highest_tile(),
        game_state.status()
    )?;
    Ok(())
}
