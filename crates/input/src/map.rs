//! Mapping from typed lines to game commands.

use crate::types::{Command, Direction};

/// Map one input line to a command.
///
/// Case-insensitive; surrounding whitespace (including the newline) is
/// ignored. Only a single bound letter is accepted.
pub fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "w" => Command::Move(Direction::Up),
        "a" => Command::Move(Direction::Left),
        "s" => Command::Move(Direction::Down),
        "d" => Command::Move(Direction::Right),
        "q" => Command::Quit,
        _ => Command::Invalid,
    }
}
