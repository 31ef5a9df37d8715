pub mod file_io;
pub mod player;
pub mod recorder;

use serde::{Deserialize, Serialize};

use crate::puzzle2048::{Direction, GameSettings};

pub use file_io::{
    ReplayError, generate_replay_filename, load_replay, load_replay_from_str, save_replay,
    save_replay_to_string,
};
pub use player::ReplayPlayer;
pub use recorder::ReplayRecorder;

pub const REPLAY_FILE_EXTENSION: &str = "puzzle2048replay";
pub const REPLAY_VERSION: u8 = 1;

/// Everything needed to rebuild a game: the seed drives every spawn, so the
/// accepted moves alone reproduce the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub version: u8,
    pub engine_version: String,
    pub game_started_timestamp_ms: i64,
    pub seed: u64,
    pub settings: GameSettings,
    pub moves: Vec<Direction>,
}
