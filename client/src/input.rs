//! Parsing player commands typed at the prompt

use duel_battle::{Combatant, MoveCatalog};
use thiserror::Error;

/// Something the player asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Use the move with this identifier
    Move(String),
    /// Show the move menu again
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Type a move number or name")]
    Empty,

    #[error("No move number {0}; pick 1-{1}")]
    OutOfRange(usize, usize),

    #[error("{0} does not know {1}")]
    UnknownMove(String, String),
}

/// Parse one line of input against the creature's move list.
///
/// Accepts a 1-based menu number, a move id or display name (case
/// insensitive), `help`/`?` and `quit`/`q`.
pub fn parse_command(
    line: &str,
    combatant: &Combatant,
    catalog: &MoveCatalog,
) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    match line.to_ascii_lowercase().as_str() {
        "help" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    if let Ok(number) = line.parse::<usize>() {
        return match number.checked_sub(1).and_then(|i| combatant.moves.get(i)) {
            Some(move_id) => Ok(Command::Move(move_id.clone())),
            None => Err(InputError::OutOfRange(number, combatant.moves.len())),
        };
    }

    combatant
        .moves
        .iter()
        .find(|id| {
            id.eq_ignore_ascii_case(line) || catalog.display_name(id.as_str()).eq_ignore_ascii_case(line)
        })
        .map(|id| Command::Move(id.clone()))
        .ok_or_else(|| InputError::UnknownMove(combatant.name().to_string(), line.to_string()))
}

/// Numbered move menu, one line per move
pub fn move_menu(combatant: &Combatant, catalog: &MoveCatalog) -> Vec<String> {
    combatant
        .moves
        .iter()
        .enumerate()
        .map(|(i, id)| match catalog.get(id) {
            Some(data) if data.is_damaging() => {
                format!("  {}. {} ({}, power {})", i + 1, data.name, data.move_type, data.power)
            }
            Some(data) => format!("  {}. {} ({})", i + 1, data.name, data.move_type),
            None => format!("  {}. {}", i + 1, id),
        })
        .collect()
}
