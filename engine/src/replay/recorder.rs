use super::{REPLAY_VERSION, Replay};
use crate::puzzle2048::{Direction, GameSettings};

pub struct ReplayRecorder {
    engine_version: String,
    game_started_timestamp_ms: i64,
    seed: u64,
    settings: GameSettings,
    moves: Vec<Direction>,
}

impl ReplayRecorder {
    pub fn new(engine_version: String, seed: u64, settings: GameSettings) -> Self {
        Self {
            engine_version,
            game_started_timestamp_ms: chrono::Utc::now().timestamp_millis(),
            seed,
            settings,
            moves: Vec::new(),
        }
    }

    /// Only accepted moves belong here; rejected ones never touched the rng.
    pub fn record_move(&mut self, direction: Direction) {
        self.moves.push(direction);
    }

    pub fn finalize(&mut self) -> Replay {
        Replay {
            version: REPLAY_VERSION,
            engine_version: std::mem::take(&mut self.engine_version),
            game_started_timestamp_ms: self.game_started_timestamp_ms,
            seed: self.seed,
            settings: self.settings,
            moves: std::mem::take(&mut self.moves),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn moves_count(&self) -> usize {
        self.moves.len()
    }
}
