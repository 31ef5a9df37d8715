use super::Replay;
use super::file_io::ReplayError;
use crate::puzzle2048::{Direction, GameSettings, GameState};
use crate::rng::SessionRng;

pub struct ReplayPlayer {
    replay: Replay,
    current_move_index: usize,
}

impl ReplayPlayer {
    pub fn new(replay: Replay) -> Self {
        Self {
            replay,
            current_move_index: 0,
        }
    }

    pub fn engine_version(&self) -> &str {
        &self.replay.engine_version
    }

    pub fn seed(&self) -> u64 {
        self.replay.seed
    }

    pub fn settings(&self) -> &GameSettings {
        &self.replay.settings
    }

    pub fn game_started_timestamp_ms(&self) -> i64 {
        self.replay.game_started_timestamp_ms
    }

    pub fn total_moves(&self) -> usize {
        self.replay.moves.len()
    }

    pub fn current_move_index(&self) -> usize {
        self.current_move_index
    }

    pub fn is_finished(&self) -> bool {
        self.current_move_index >= self.replay.moves.len()
    }

    pub fn next_move(&mut self) -> Option<Direction> {
        let direction = self.replay.moves.get(self.current_move_index).copied()?;
        self.current_move_index += 1;
        Some(direction)
    }

    pub fn reset(&mut self) {
        self.current_move_index = 0;
    }

    /// Fresh game and rng in the state the recording started from.
    pub fn start(&self) -> Result<(GameState, SessionRng), ReplayError> {
        let mut rng = SessionRng::new(self.replay.seed);
        let game_state = GameState::new_game(self.replay.settings, &mut rng)?;
        Ok((game_state, rng))
    }

    /// Replays every recorded move from the beginning. A recorded move that
    /// the rebuilt game rejects means the file does not match this engine.
    pub fn play_to_end(&mut self) -> Result<GameState, ReplayError> {
        self.reset();
        let (mut game_state, mut rng) = self.start()?;
        while let Some(direction) = self.next_move() {
            if !game_state.apply_move(direction, &mut rng)? {
                return Err(ReplayError::Desync {
                    move_index: self.current_move_index - 1,
                });
            }
        }
        Ok(game_state)
    }

    pub fn into_replay(self) -> Replay {
        self.replay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::REPLAY_VERSION;

    fn create_test_replay(moves: Vec<Direction>) -> Replay {
        Replay {
            version: REPLAY_VERSION,
            engine_version: "1.0.0".to_string(),
            game_started_timestamp_ms: 1234567890,
            seed: 42,
            settings: GameSettings::default(),
            moves,
        }
    }

    #[test]
    fn test_replay_player_basic() {
        let player = ReplayPlayer::new(create_test_replay(vec![Direction::Left, Direction::Up]));
        assert_eq!(player.engine_version(), "1.0.0");
        assert_eq!(player.seed(), 42);
        assert_eq!(player.total_moves(), 2);
        assert_eq!(player.game_started_timestamp_ms(), 1234567890);
        assert!(!player.is_finished());
    }

    #[test]
    fn test_replay_player_next_move_and_reset() {
        let mut player = ReplayPlayer::new(create_test_replay(vec![Direction::Left, Direction::Up]));
        assert_eq!(player.next_move(), Some(Direction::Left));
        assert_eq!(player.next_move(), Some(Direction::Up));
        assert_eq!(player.next_move(), None);
        assert!(player.is_finished());

        player.reset();
        assert_eq!(player.current_move_index(), 0);
        assert!(!player.is_finished());
    }

    #[test]
    fn test_start_matches_recorded_seed() {
        let player = ReplayPlayer::new(create_test_replay(vec![]));
        let (game_state, _) = player.start().unwrap();
        let mut rng = SessionRng::new(42);
        let expected = GameState::new_game(GameSettings::default(), &mut rng).unwrap();
        assert_eq!(game_state, expected);
    }

    #[test]
    fn test_play_to_end_detects_desync() {
        // Seed 42's opening is replayed and then the same direction is pushed
        // until the game refuses it.
        let mut rng = SessionRng::new(42);
        let mut game_state = GameState::new_game(GameSettings::default(), &mut rng).unwrap();
        let mut moves = Vec::new();
        while game_state.apply_move(Direction::Left, &mut rng).unwrap() {
            moves.push(Direction::Left);
        }
        let accepted = moves.len();
        moves.push(Direction::Left);

        let mut player = ReplayPlayer::new(create_test_replay(moves));
        let result = player.play_to_end();
        assert!(matches!(
            result,
            Err(ReplayError::Desync { move_index }) if move_index == accepted
        ));
    }

    #[test]
    fn test_play_to_end_rejects_bad_settings() {
        let mut replay = create_test_replay(vec![]);
        replay.settings.size = 0;
        let mut player = ReplayPlayer::new(replay);
        assert!(matches!(player.play_to_end(), Err(ReplayError::Game(_))));
    }
}
