//! Move application

use duel_protocol::{AnimationCue, Player};
use rand::Rng;
use tracing::warn;

use super::Battle;
use super::damage::{WeatherAdjustment, adjust_for_weather, base_damage};
use super::order::Action;
use crate::catalog::{MoveData, MoveEffect};
use crate::presenter::Presenter;
use crate::types::{Status, Weather};

impl<P: Presenter, R: Rng> Battle<P, R> {
    /// Carry out one actor's turn
    pub(super) async fn perform(&mut self, action: Action) {
        let name = self.state.combatant(action.actor).name().to_string();

        if self.state.combatant(action.actor).is_incapacitated() {
            self.announce(format!("{} is asleep and cannot attack!", name));
            self.presenter
                .play_attack_animation(action.actor, &AnimationCue::Asleep)
                .await;
            return;
        }

        let Some(data) = self.catalog.get(&action.move_id).cloned() else {
            warn!(player = %action.actor, move_id = %action.move_id, "unresolvable move, actor does nothing");
            self.announce(format!("{} is confused and it does nothing.", name));
            self.presenter
                .play_attack_animation(action.actor, &AnimationCue::Confused)
                .await;
            return;
        };

        self.announce(format!("{} uses {}!", name, data.name));
        self.presenter
            .play_attack_animation(action.actor, &AnimationCue::Move(data.id.clone()))
            .await;

        self.apply_move(&action, &data).await;

        if !self.state.combatant(action.target).is_alive() {
            let defeated = self.state.combatant(action.target).name().to_string();
            self.announce(format!("{} is exhausted!", defeated));
            self.presenter.play_defeat_animation(action.target).await;
            self.declare_winner(action.actor);
        }
    }

    /// Weather, then damage, then status
    async fn apply_move(&mut self, action: &Action, data: &MoveData) {
        if let Some(weather) = data.weather_change() {
            self.change_weather(weather).await;
        }

        if data.is_damaging() {
            self.deal_damage(action, data).await;
        }

        if let Some(MoveEffect::Status {
            status,
            chance,
            turns,
        }) = data.effect
        {
            self.try_inflict(action.target, data, status, chance, turns);
        }
    }

    async fn change_weather(&mut self, weather: Weather) {
        if self.state.field.weather == weather {
            self.announce(format!(
                "The weather is already {}. The move has no further effect.",
                weather.to_protocol()
            ));
            return;
        }

        let previous = self.state.field.set_weather(weather, self.weather_turns);
        self.announce(format!(
            "The weather changed to {}! It will last {} rounds.",
            weather.to_protocol(),
            self.weather_turns
        ));
        self.presenter.set_weather(weather, previous).await;

        if weather != Weather::Clear {
            self.presenter.weather_continues(weather).await;
        }
    }

    async fn deal_damage(&mut self, action: &Action, data: &MoveData) {
        let attack = self.state.combatant(action.actor).attack;
        let defence = self.state.combatant(action.target).defence;
        let mut damage = base_damage(attack, defence, data.power);

        if let Some(modifier) = data.weather_modifier() {
            let weather = self.state.field.weather;
            match adjust_for_weather(damage, modifier, weather) {
                WeatherAdjustment::Boosted(d) => {
                    self.announce(format!("The {} powers up {}!", weather.to_protocol(), data.name));
                    damage = d;
                }
                WeatherAdjustment::Weakened(d) => {
                    self.announce(format!("The {} weakens {}!", weather.to_protocol(), data.name));
                    damage = d;
                }
                WeatherAdjustment::Unchanged(_) => {}
            }
        }

        let defender = self.state.combatant_mut(action.target);
        let hp = defender.take_damage(damage);
        let name = defender.name().to_string();

        self.announce(format!("{} suffers {} damage.", name, damage));
        self.presenter.update_health(action.target, hp, damage);
        self.presenter.play_damage_animation(action.target).await;
    }

    fn try_inflict(
        &mut self,
        target: Player,
        data: &MoveData,
        status: Status,
        chance: f64,
        turns: u32,
    ) {
        let name = self.state.combatant(target).name().to_string();

        if self.state.combatant(target).has_status(status) {
            self.announce(format!("{} is already affected by {}.", name, status));
            return;
        }

        if self.rng.gen_bool(chance.clamp(0.0, 1.0)) {
            self.state.combatant_mut(target).inflict(status, turns);
            self.announce(format!("{} was affected by {}!", name, status));
        } else {
            self.announce(format!("But it failed! ({} on {})", data.name, name));
        }
    }
}
