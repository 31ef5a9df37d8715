use std::str::FromStr;

use puzzle2048_engine::{Direction, GameError};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Move(Direction),
    NewGame,
    Quit,
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "n" | "new" => Ok(Command::NewGame),
            other => other.parse().map(Command::Move),
        }
    }
}
