//! Turn resolution
//!
//! [`Battle`] owns the [`BattleState`] and is the only thing that mutates it.
//! Every step of a round (announce, animate, apply) is awaited before the
//! next begins, so at most one presenter callback is ever in flight.
//!
//! ```text
//! Selecting ──both chosen──▶ Resolving ──defender at 0 HP──▶ Finished
//!     ▲                          │
//!     └──────round complete──────┘
//! ```

mod apply;
mod damage;
mod order;
mod round;
mod selection;
mod state;

use duel_protocol::Player;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::catalog::MoveCatalog;
use crate::config::{BattleConfig, DEFAULT_WEATHER_TURNS};
use crate::error::ConfigError;
use crate::presenter::Presenter;
use crate::types::{Combatant, Weather};

pub use damage::{WeatherAdjustment, adjust_for_weather, base_damage};
pub use order::{Action, first_actor};
pub use state::{BattleState, Phase};

/// Why a move selection was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The battle is over
    Finished,
    /// A round is being resolved
    Resolving,
    /// The side is not human-controlled
    NotHuman,
}

/// Result of [`Battle::select_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Nothing changed
    Ignored(Rejection),
    /// Choice stored, still waiting on the other side
    Pending,
    /// Both sides had chosen and the round has been resolved
    Resolved,
}

/// A two-creature battle driven through a [`Presenter`]
pub struct Battle<P, R = SmallRng> {
    state: BattleState,
    catalog: MoveCatalog,
    presenter: P,
    rng: R,
    human: Player,
    weather_turns: u32,
}

impl<P: Presenter> Battle<P, SmallRng> {
    /// Build a battle from configuration, using the built-in move catalog
    pub fn from_config(config: &BattleConfig, presenter: P) -> Result<Self, ConfigError> {
        let catalog = MoveCatalog::builtin();
        let [p1, p2] = config.combatants(&catalog)?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Ok(Battle::new(p1, p2, presenter, rng)
            .with_human(config.human)
            .with_catalog(catalog)
            .with_weather_turns(config.weather_turns))
    }
}

impl<P: Presenter, R: Rng> Battle<P, R> {
    /// Create a battle with p1 as the human side and the built-in catalog
    pub fn new(p1: Combatant, p2: Combatant, presenter: P, rng: R) -> Self {
        Self {
            state: BattleState::new(p1, p2),
            catalog: MoveCatalog::builtin(),
            presenter,
            rng,
            human: Player::P1,
            weather_turns: DEFAULT_WEATHER_TURNS,
        }
    }

    /// Hand control of `human` to the driver; the other side picks its own moves
    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    /// Resolve moves against `catalog` instead of the built-in one
    pub fn with_catalog(mut self, catalog: MoveCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Rounds a weather change lasts, at least one
    pub fn with_weather_turns(mut self, turns: u32) -> Self {
        self.weather_turns = turns.max(1);
        self
    }

    /// Read-only view of the whole state
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn combatant(&self, player: Player) -> &Combatant {
        self.state.combatant(player)
    }

    pub fn catalog(&self) -> &MoveCatalog {
        &self.catalog
    }

    /// Side controlled by the human
    pub fn human(&self) -> Player {
        self.human
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn turn(&self) -> u32 {
        self.state.turn
    }

    pub fn weather(&self) -> Weather {
        self.state.field.weather
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Push initial health and weather to the presenter and open the first
    /// selection phase
    pub async fn start(&mut self) {
        for player in Player::BOTH {
            let hp = self.state.combatant(player).hp;
            self.presenter.update_health(player, hp, 0);
        }

        self.announce("Battle begins!");

        let weather = self.state.field.weather;
        self.presenter.set_weather(weather, Weather::Clear).await;

        self.begin_selection_phase().await;
    }

    /// Choose a move for the human side.
    ///
    /// A repeated choice before the other side has picked replaces the
    /// previous one. Once both sides have picked, the round is resolved before
    /// this returns.
    pub async fn select_move(&mut self, player: Player, move_id: &str) -> Selection {
        match self.state.phase {
            Phase::Finished { .. } => return Selection::Ignored(Rejection::Finished),
            Phase::Resolving => return Selection::Ignored(Rejection::Resolving),
            Phase::Selecting => {}
        }

        if player != self.human {
            debug!(%player, move_id, "ignoring selection for autonomous side");
            return Selection::Ignored(Rejection::NotHuman);
        }

        self.state.selections[player.index()] = Some(move_id.to_string());

        let message = format!(
            "{} selected {}.",
            self.state.combatant(player).name(),
            self.catalog.display_name(move_id)
        );
        self.announce(message);
        self.presenter.set_input_enabled(player, false);

        if !self.state.both_selected() {
            return Selection::Pending;
        }

        self.state.phase = Phase::Resolving;
        self.resolve_round().await;
        Selection::Resolved
    }

    /// Log a line and forward it to the presenter
    fn announce(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(turn = self.state.turn, "{}", message);
        self.presenter.announce(&message);
        self.state.log.push(message);
    }

    /// Disable move input for every side
    fn disable_all_input(&mut self) {
        self.presenter.set_input_enabled(self.human, false);
    }
}
