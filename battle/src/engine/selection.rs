//! Move selection phase

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::warn;

use super::{Battle, Phase};
use crate::catalog::STRUGGLE;
use crate::presenter::Presenter;

impl<P: Presenter, R: Rng> Battle<P, R> {
    /// Open a new selection phase.
    ///
    /// The weather reminder is awaited before input is re-enabled.
    pub(super) async fn begin_selection_phase(&mut self) {
        if self.state.phase != Phase::Selecting {
            return;
        }

        self.state.selections = [None, None];

        if self.state.field.has_timed_weather() {
            let weather = self.state.field.weather;
            if let Some(message) = weather.continues_message() {
                self.announce(message);
                self.presenter.weather_continues(weather).await;
            }
        }

        self.presenter.set_input_enabled(self.human, true);
        self.choose_autonomous_move();
    }

    /// Pick uniformly from the autonomous side's moves
    fn choose_autonomous_move(&mut self) {
        let side = self.human.opponent();
        if self.state.selection(side).is_some() {
            return;
        }

        let choice = self
            .state
            .combatant(side)
            .moves
            .choose(&mut self.rng)
            .cloned();
        let name = self.state.combatant(side).name().to_string();

        match choice {
            Some(move_id) => {
                let message = format!(
                    "{} (enemy) prepared {}.",
                    name,
                    self.catalog.display_name(&move_id)
                );
                self.state.selections[side.index()] = Some(move_id);
                self.announce(message);
            }
            None => {
                warn!(player = %side, creature = %name, "autonomous side has no moves, falling back");
                self.state.selections[side.index()] = Some(STRUGGLE.to_string());
                self.announce(format!("{} (enemy) uses struggle out of desperation!", name));
            }
        }
    }
}
