use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::error::GameError;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" => Ok(Direction::Up),
            "down" | "s" => Ok(Direction::Down),
            "left" | "a" => Ok(Direction::Left),
            "right" | "d" => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::Up),
            1 => Ok(Direction::Down),
            2 => Ok(Direction::Left),
            3 => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(value.to_string())),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MoveResult {
    pub board: Board,
    pub score_delta: u64,
    pub changed: bool,
}

/// A tile placed by the spawner; `index` is row-major.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SpawnedTile {
    pub index: usize,
    pub value: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_str_aliases() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("W".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("s".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!(" Left ".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("a".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("RIGHT".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("d".parse::<Direction>(), Ok(Direction::Right));
    }

    #[test]
    fn test_direction_from_str_rejects_unknown() {
        let result = "diagonal".parse::<Direction>();
        assert!(matches!(result, Err(GameError::InvalidDirection(ref s)) if s == "diagonal"));
    }

    #[test]
    fn test_direction_try_from_u8() {
        assert_eq!(Direction::try_from(0), Ok(Direction::Up));
        assert_eq!(Direction::try_from(3), Ok(Direction::Right));
        assert!(matches!(
            Direction::try_from(4),
            Err(GameError::InvalidDirection(_))
        ));
    }

    #[test]
    fn test_direction_display_parses_back() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }
}
