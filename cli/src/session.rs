use puzzle2048_engine::replay::{Replay, ReplayRecorder};
use puzzle2048_engine::version::VERSION;
use puzzle2048_engine::{Direction, GameError, GameSettings, GameState, SessionRng};
use ringbuffer::{AllocRingBuffer, RingBuffer};

/// One game in progress: the engine state plus what the front end keeps
/// around it (rng, replay recording, recent events).
pub struct GameSession {
    game_state: GameState,
    rng: SessionRng,
    recorder: ReplayRecorder,
    event_log: AllocRingBuffer<String>,
}

impl GameSession {
    pub fn start(
        settings: GameSettings,
        seed: u64,
        event_log_size: usize,
    ) -> Result<Self, GameError> {
        let mut rng = SessionRng::new(seed);
        let game_state = GameState::new_game(settings, &mut rng)?;
        let mut event_log = AllocRingBuffer::new(event_log_size);
        event_log.enqueue(format!(
            "New {0}x{0} game, reach {1} to win",
            settings.size, settings.win_value
        ));

        Ok(Self {
            game_state,
            rng,
            recorder: ReplayRecorder::new(VERSION.to_string(), seed, settings),
            event_log,
        })
    }

    pub fn handle_move(&mut self, direction: Direction) -> Result<bool, GameError> {
        let score_before = self.game_state.score();
        let accepted = self.game_state.apply_move(direction, &mut self.rng)?;

        if !accepted {
            self.event_log
                .enqueue(format!("{}: nothing moved", direction));
            return Ok(false);
        }

        self.recorder.record_move(direction);
        let gained = self.game_state.score() - score_before;
        let message = match self.game_state.last_spawned() {
            Some(tile) => {
                let size = self.game_state.board().size();
                format!(
                    "{}: +{}, new {} at row {} col {}",
                    direction,
                    gained,
                    tile.value,
                    tile.index / size + 1,
                    tile.index % size + 1
                )
            }
            None => format!("{}: +{}", direction, gained),
        };
        self.event_log.enqueue(message);
        Ok(true)
    }

    pub fn note(&mut self, message: String) {
        self.event_log.enqueue(message);
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn events(&self) -> impl Iterator<Item = &String> {
        self.event_log.iter()
    }

    pub fn finish(&mut self) -> Replay {
        self.recorder.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_records_only_accepted_moves() {
        let mut session = GameSession::start(GameSettings::default(), 42, 4).unwrap();
        let mut accepted = 0;
        for direction in [Direction::Left, Direction::Left, Direction::Up, Direction::Right] {
            if session.handle_move(direction).unwrap() {
                accepted += 1;
            }
        }
        let replay = session.finish();
        assert_eq!(replay.moves.len(), accepted);
        assert_eq!(replay.seed, 42);
    }

    #[test]
    fn test_event_log_is_bounded() {
        let mut session = GameSession::start(GameSettings::default(), 7, 3).unwrap();
        for i in 0..10 {
            session.note(format!("event {}", i));
        }
        let events: Vec<&String> = session.events().collect();
        assert_eq!(events.len(), 3);
        assert_eq!(events[2], "event 9");
    }
}
