use super::board::Board;
use super::moves::can_move;
use super::types::{Direction, GameStatus};

/// Won beats Lost: reaching `win_value` wins even when the board is stuck.
pub fn evaluate(board: &Board, win_value: u32) -> GameStatus {
    if board.cells().iter().any(|&v| v >= win_value) {
        return GameStatus::Won;
    }

    if board.is_full() && !Direction::ALL.iter().any(|&d| can_move(board, d)) {
        return GameStatus::Lost;
    }

    GameStatus::Playing
}
