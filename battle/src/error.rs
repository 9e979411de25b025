use thiserror::Error;

/// Problems found while assembling a battle from data.
///
/// These are only raised at construction time; a running battle never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Duplicate move id in catalog: {0}")]
    DuplicateMove(String),

    #[error("Move {move_id} has a status chance outside 0..=1: {chance}")]
    InvalidChance { move_id: String, chance: f64 },

    #[error("Creature {creature} knows a move missing from the catalog: {move_id}")]
    UnknownMove { creature: String, move_id: String },

    #[error("Unknown creature: {0}")]
    UnknownCreature(String),

    #[error("Creature {creature} has invalid stats: {reason}")]
    InvalidStats { creature: String, reason: String },

    #[error("Weather must last at least one round, got {0}")]
    InvalidWeatherTurns(u32),
}
