mod board;
mod error;
mod game_state;
mod line;
mod moves;
mod settings;
mod spawn;
mod status;
mod types;

pub use board::Board;
pub use error::GameError;
pub use game_state::GameState;
pub use line::merge_toward_front;
pub use moves::{apply_direction, can_move};
pub use settings::{GameSettings, MAX_SIZE, MIN_SIZE, MIN_WIN_VALUE};
pub use spawn::spawn_tile;
pub use status::evaluate;
pub use types::{Direction, GameStatus, MoveResult, SpawnedTile};
