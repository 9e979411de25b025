//! Turn resolution and domain types for two-creature duels.
//!
//! This crate owns the battle rules: creatures, moves, weather and status
//! bookkeeping, and the resolver that plays out each round. It knows nothing
//! about how a battle is shown; that is left to a [`Presenter`].
//!
//! # Overview
//!
//! `duel-battle` sits between `duel-protocol` (event wire format) and the
//! front end:
//!
//! ```text
//! duel-protocol (events + transcript format)
//!        │
//!        ▼
//! duel-battle (rules + resolver + replay view) ← THIS CRATE
//!        │
//!        └─> duel-client (terminal front end, autoplay, replay)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Combatant`] - A creature's stats, HP and statuses
//! - [`Weather`], [`FieldState`] - Field conditions with a round timer
//! - [`Status`], [`StatusEffect`] - Timed statuses (sleep)
//! - [`MoveCatalog`], [`MoveData`] - Immutable move table
//!
//! ## Resolution
//! - [`Battle`] - Owns the state, takes move selections, resolves rounds
//! - [`Presenter`] - Callbacks the resolver awaits at every step
//! - [`EventRecorder`] - Presenter that records a transcript
//!
//! ## Replay
//! - [`BattleView`] - Rebuilds health, weather and winner from events
//!
//! # Example Usage
//!
//! ```ignore
//! use duel_battle::{Battle, BattleConfig, EventRecorder};
//! use duel_protocol::Player;
//!
//! let config = BattleConfig { seed: Some(7), ..BattleConfig::default() };
//! let mut battle = Battle::from_config(&config, EventRecorder::new())?;
//!
//! battle.start().await;
//! while !battle.is_finished() {
//!     battle.select_move(Player::P1, "Electroball").await;
//! }
//!
//! println!("{}", battle.presenter().to_transcript());
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod presenter;
pub mod tracking;
pub mod types;

pub use catalog::{MoveCatalog, MoveData, MoveEffect, MoveTarget, STRUGGLE, WeatherModifier};
pub use config::{BattleConfig, CreatureSpec, builtin_roster};
pub use engine::{Battle, BattleState, Phase, Rejection, Selection};
pub use error::ConfigError;
pub use presenter::{EventRecorder, Presenter};
pub use tracking::{BattleView, SideView};
pub use types::*;
