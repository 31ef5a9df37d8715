use super::board::Board;
use super::error::GameError;
use super::moves::apply_direction;
use super::settings::GameSettings;
use super::spawn::spawn_tile;
use super::status::evaluate;
use super::types::{Direction, GameStatus, SpawnedTile};
use crate::rng::SessionRng;

#[derive(Clone, PartialEq, Debug)]
pub struct GameState {
    board: Board,
    settings: GameSettings,
    score: u64,
    status: GameStatus,
    moves_made: u32,
    last_spawned: Option<SpawnedTile>,
}

impl GameState {
    pub fn new_game(settings: GameSettings, rng: &mut SessionRng) -> Result<Self, GameError> {
        settings.check()?;

        let board = Board::empty(settings.size);
        let (board, first) = spawn_tile(&board, settings.four_probability, rng)?;
        let (board, second) = spawn_tile(&board, settings.four_probability, rng)?;
        let status = evaluate(&board, settings.win_value);

        Ok(Self {
            board,
            settings,
            score: 0,
            status,
            moves_made: 0,
            last_spawned: second.or(first),
        })
    }

    /// Resumes play from an existing board with zero score.
    pub fn from_board(board: Board, settings: GameSettings) -> Result<Self, GameError> {
        settings.check()?;
        if board.size() != settings.size {
            return Err(GameError::InvalidConfiguration(format!(
                "Board is {0}x{0} but settings expect {1}x{1}",
                board.size(),
                settings.size
            )));
        }

        let status = evaluate(&board, settings.win_value);
        Ok(Self {
            board,
            settings,
            score: 0,
            status,
            moves_made: 0,
            last_spawned: None,
        })
    }

    /// Slides the board and spawns a tile if anything moved.
    /// Returns whether the move was accepted; on `Ok(false)` and on error the
    /// state is untouched.
    pub fn apply_move(
        &mut self,
        direction: Direction,
        rng: &mut SessionRng,
    ) -> Result<bool, GameError> {
        if self.status != GameStatus::Playing {
            return Ok(false);
        }

        let result = apply_direction(&self.board, direction)?;
        if !result.changed {
            return Ok(false);
        }

        let (board, spawned) = spawn_tile(&result.board, self.settings.four_probability, rng)?;
        let bonus = match spawned {
            Some(tile) if self.settings.spawn_bonus && tile.value == 4 => 4,
            _ => 0,
        };

        self.board = board;
        self.score += result.score_delta + bonus;
        self.moves_made += 1;
        self.last_spawned = spawned;
        self.status = evaluate(&self.board, self.settings.win_value);

        Ok(true)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn highest_tile(&self) -> u32 {
        self.board.highest_tile()
    }

    pub fn last_spawned(&self) -> Option<SpawnedTile> {
        self.last_spawned
    }

    #[cfg(test)]
    fn set_cells(&mut self, cells: Vec<u32>) {
        self.board = Board::from_cells(cells).unwrap();
    }
}
