//! Round resolution

use duel_protocol::Player;
use rand::Rng;
use tracing::debug;

use super::order::{Action, first_actor};
use super::{Battle, Phase};
use crate::catalog::STRUGGLE;
use crate::presenter::Presenter;
use crate::types::Weather;

impl<P: Presenter, R: Rng> Battle<P, R> {
    /// Play out one round with both selections in place
    pub(super) async fn resolve_round(&mut self) {
        self.state.turn += 1;
        let turn = self.state.turn;
        debug!(turn, "resolving round");
        self.announce(format!("--- Round {} ---", turn));

        for action in self.plan_actions() {
            if self.state.is_finished() {
                break;
            }
            self.perform(action).await;
        }

        if self.state.is_finished() {
            return;
        }

        self.finish_round().await;
    }

    /// Order this round's actions; ties are re-rolled every round
    fn plan_actions(&mut self) -> [Action; 2] {
        let first = first_actor(
            self.state.combatant(Player::P1).speed,
            self.state.combatant(Player::P2).speed,
            &mut self.rng,
        );
        let second = first.opponent();

        [first, second].map(|actor| Action {
            actor,
            target: actor.opponent(),
            move_id: self.state.selections[actor.index()]
                .take()
                .unwrap_or_else(|| STRUGGLE.to_string()),
        })
    }

    /// End-of-round bookkeeping, then hand control back to selection
    async fn finish_round(&mut self) {
        for player in Player::BOTH {
            let expired = self.state.combatant_mut(player).tick_statuses();
            for status in expired {
                let name = self.state.combatant(player).name().to_string();
                self.announce(format!("{} is no longer affected by {}.", name, status));
            }
        }

        if let Some(expired) = self.state.field.tick_weather() {
            self.announce(format!("The effect of {} vanished.", expired.to_protocol()));
            self.presenter.set_weather(Weather::Clear, expired).await;
        }

        self.announce(format!("--- End of Round {} ---", self.state.turn));

        self.state.phase = Phase::Selecting;
        self.begin_selection_phase().await;
    }

    /// Mark the battle as won by `winner` and close all input
    pub(super) fn declare_winner(&mut self, winner: Player) {
        self.state.phase = Phase::Finished { winner };

        let name = self.state.combatant(winner).name().to_string();
        debug!(%winner, turn = self.state.turn, "battle finished");
        self.announce(format!("{} wins the battle!", name));
        self.presenter.announce_winner(winner, &name);
        self.disable_all_input();
    }
}
