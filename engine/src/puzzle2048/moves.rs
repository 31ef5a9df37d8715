use super::board::Board;
use super::error::GameError;
use super::line::merge_toward_front;
use super::types::{Direction, MoveResult};

/// Board indices of the `line`-th row or column, ordered from the edge the
/// tiles slide toward.
fn line_indices(size: usize, direction: Direction, line: usize) -> Vec<usize> {
    match direction {
        Direction::Left => (0..size).map(|col| line * size + col).collect(),
        Direction::Right => (0..size).rev().map(|col| line * size + col).collect(),
        Direction::Up => (0..size).map(|row| row * size + line).collect(),
        Direction::Down => (0..size).rev().map(|row| row * size + line).collect(),
    }
}

/// Computes the result of sliding `board` in `direction` without touching it.
pub fn apply_direction(board: &Board, direction: Direction) -> Result<MoveResult, GameError> {
    let size = board.size();
    let mut next = board.clone();
    let mut score_delta: u64 = 0;

    for line in 0..size {
        let indices = line_indices(size, direction, line);
        let values: Vec<u32> = indices.iter().map(|&i| board.value_at(i)).collect();
        let (merged, score) = merge_toward_front(&values)?;
        score_delta += score;
        for (&index, &value) in indices.iter().zip(merged.iter()) {
            next.set_at(index, value);
        }
    }

    let changed = next != *board;
    Ok(MoveResult {
        board: next,
        score_delta,
        changed,
    })
}

/// An overflowing merge can never be applied, so it does not count as a move.
pub fn can_move(board: &Board, direction: Direction) -> bool {
    match apply_direction(board, direction) {
        Ok(result) => result.changed,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: Vec<u32>) -> Board {
        Board::from_cells(cells).unwrap()
    }

    #[test]
    #[rustfmt::skip]
    fn test_left_merges_equal() {
        let start = board(vec![
            2, 2, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ]);
        let result = apply_direction(&start, Direction::Left).unwrap();
        assert!(result.changed);
        assert_eq!(result.score_delta, 4);
        assert_eq!(result.board.cells()[0], 4);
        assert_eq!(result.board.cells()[1], 0);
    }

    #[test]
    #[rustfmt::skip]
    fn test_right_merges_toward_right_edge() {
        let start = board(vec![
            2, 2, 4, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ]);
        let result = apply_direction(&start, Direction::Right).unwrap();
        assert_eq!(&result.board.cells()[0..4], &[0, 0, 4, 4]);
        assert_eq!(result.score_delta, 4);
    }

    #[test]
    #[rustfmt::skip]
    fn test_right_merges_from_the_far_end_first() {
        let start = board(vec![
            2, 2, 2, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ]);
        let result = apply_direction(&start, Direction::Right).unwrap();
        assert_eq!(&result.board.cells()[0..4], &[0, 0, 2, 4]);
    }

    #[test]
    #[rustfmt::skip]
    fn test_up_merges_columns() {
        let start = board(vec![
            2, 0, 0, 4,
            2, 0, 0, 0,
            0, 0, 0, 4,
            0, 8, 0, 0,
        ]);
        let result = apply_direction(&start, Direction::Up).unwrap();
        assert_eq!(
            result.board.cells(),
            &[
                4, 8, 0, 8,
                0, 0, 0, 0,
                0, 0, 0, 0,
                0, 0, 0, 0,
            ]
        );
        assert_eq!(result.score_delta, 12);
    }

    #[test]
    #[rustfmt::skip]
    fn test_down_merges_columns() {
        let start = board(vec![
            0, 0, 0, 0,
            0, 0, 0, 0,
            2, 0, 0, 0,
            2, 0, 0, 0,
        ]);
        let result = apply_direction(&start, Direction::Down).unwrap();
        assert_eq!(result.board.cells()[12], 4);
        assert_eq!(result.board.cells()[8], 0);
    }

    #[test]
    #[rustfmt::skip]
    fn test_down_and_up_are_symmetric() {
        let start = board(vec![
            2, 4, 0, 8,
            2, 0, 8, 8,
            4, 4, 0, 0,
            4, 0, 8, 2,
        ]);
        let up = apply_direction(&start, Direction::Up).unwrap();
        let down = apply_direction(&start, Direction::Down).unwrap();
        assert_eq!(up.score_delta, down.score_delta);
        assert_eq!(up.board.occupied_count(), down.board.occupied_count());
    }

    #[test]
    #[rustfmt::skip]
    fn test_no_op_left_on_packed_row() {
        let start = board(vec![
            2, 4, 8, 16,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ]);
        let result = apply_direction(&start, Direction::Left).unwrap();
        assert!(!result.changed);
        assert_eq!(result.score_delta, 0);
        assert_eq!(result.board, start);
    }

    #[test]
    #[rustfmt::skip]
    fn test_zero_cells_are_not_special_cased() {
        // A sparse board keeps every tile through a column move.
        let start = board(vec![
            0, 2, 0, 0,
            4, 0, 0, 0,
            0, 0, 0, 8,
            0, 0, 16, 0,
        ]);
        let result = apply_direction(&start, Direction::Up).unwrap();
        assert_eq!(
            result.board.cells(),
            &[
                4, 2, 16, 8,
                0, 0, 0, 0,
                0, 0, 0, 0,
                0, 0, 0, 0,
            ]
        );
        assert_eq!(result.score_delta, 0);
    }

    #[test]
    #[rustfmt::skip]
    fn test_input_board_untouched() {
        let start = board(vec![
            2, 2,
            2, 2,
        ]);
        let snapshot = start.clone();
        let _ = apply_direction(&start, Direction::Left).unwrap();
        assert_eq!(start, snapshot);
    }

    #[test]
    #[rustfmt::skip]
    fn test_can_move() {
        let stuck = board(vec![
            2, 4,
            4, 2,
        ]);
        for direction in Direction::ALL {
            assert!(!can_move(&stuck, direction));
        }

        let open = board(vec![
            2, 0,
            4, 2,
        ]);
        assert!(can_move(&open, Direction::Right));
        assert!(can_move(&open, Direction::Up));
        assert!(!can_move(&open, Direction::Left));
    }

    #[test]
    #[rustfmt::skip]
    fn test_overflowing_merge_is_not_a_move() {
        let top = 1u32 << 31;
        let start = board(vec![
            top, top,
            4,   2,
        ]);
        assert!(!can_move(&start, Direction::Left));
        assert!(!can_move(&start, Direction::Right));
        assert!(!can_move(&start, Direction::Up));
        assert!(!can_move(&start, Direction::Down));
    }
}
