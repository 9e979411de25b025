//! Terminal front end for duels: interactive play, autoplay and replay.

pub mod config;
pub mod driver;
pub mod input;
pub mod replay;
pub mod terminal;

pub use config::{load_config, parse_config};
pub use driver::{Outcome, run_auto, run_interactive};
pub use input::{Command, InputError, move_menu, parse_command};
pub use replay::{load_view, render, summary};
pub use terminal::{HealthBand, TerminalPresenter};

pub use duel_battle::{Battle, BattleConfig, EventRecorder, MoveCatalog};
pub use duel_protocol::Player;
