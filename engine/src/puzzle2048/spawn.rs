use super::board::Board;
use super::error::GameError;
use super::types::SpawnedTile;
use crate::rng::SessionRng;

/// Places a 2 or 4 on a uniformly chosen empty cell of a copy of `board`.
/// A full board comes back unchanged with `None`.
pub fn spawn_tile(
    board: &Board,
    four_probability: f64,
    rng: &mut SessionRng,
) -> Result<(Board, Option<SpawnedTile>), GameError> {
    if !(0.0..=1.0).contains(&four_probability) {
        return Err(GameError::InvalidConfiguration(format!(
            "Four probability must be between 0 and 1, got {}",
            four_probability
        )));
    }

    let empty_indices = board.empty_indices();
    if empty_indices.is_empty() {
        return Ok((board.clone(), None));
    }

    let index = empty_indices[rng.random_range(0..empty_indices.len())];
    let value = if rng.chance(four_probability) { 4 } else { 2 };

    let mut next = board.clone();
    next.set_at(index, value);
    Ok((next, Some(SpawnedTile { index, value })))
}
