pub mod config;
pub mod logger;
pub mod puzzle2048;
pub mod replay;
pub mod rng;
pub mod version;

pub use puzzle2048::{Direction, GameError, GameSettings, GameState, GameStatus};
pub use rng::SessionRng;
