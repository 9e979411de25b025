use thiserror::Error;

pub mod event;
pub mod player;

pub use event::{AnimationCue, BattleEvent, parse_event, parse_transcript, to_transcript};
pub use player::Player;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid event format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),
}
