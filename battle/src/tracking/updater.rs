//! Update logic for folding BattleEvents into a BattleView

use duel_protocol::{AnimationCue, BattleEvent};
use tracing::debug;

use super::view::BattleView;
use crate::types::Weather;

impl BattleView {
    /// Build a view from a whole event sequence
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a BattleEvent>) -> Self {
        let mut view = Self::new();
        for event in events {
            view.update(event);
        }
        view
    }

    /// Update the view from one event
    pub fn update(&mut self, event: &BattleEvent) {
        match event {
            BattleEvent::Health {
                player,
                hp,
                damage,
            } => {
                let side = self.side_mut(*player);
                if side.hp_start.is_none() {
                    side.hp_start = Some(*hp);
                }
                side.hp = Some(*hp);
                side.damage_taken = side.damage_taken.saturating_add(*damage);
            }

            BattleEvent::Attack { player, cue } => {
                let side = self.side_mut(*player);
                match cue {
                    AnimationCue::Move(move_id) => side.moves_used.push(move_id.clone()),
                    AnimationCue::Asleep => side.turns_asleep += 1,
                    AnimationCue::Confused => {}
                }
            }

            // Damage is already counted via the paired health event
            BattleEvent::Damage(_) => {}

            BattleEvent::Faint(player) => {
                let side = self.side_mut(*player);
                side.fainted = true;
                side.hp = Some(0);
            }

            BattleEvent::Announce(text) => {
                if let Some(round) = parse_round_banner(text) {
                    self.round = round;
                }
                self.log.push(text.clone());
            }

            BattleEvent::Win { player, name } => {
                self.winner = Some((*player, name.clone()));
            }

            BattleEvent::Input { player, enabled } => {
                self.side_mut(*player).input_enabled = *enabled;
            }

            BattleEvent::Weather { condition, .. } => match Weather::from_protocol(condition) {
                Some(weather) => self.weather = weather,
                None => {
                    debug!(condition = %condition, "unknown weather in transcript");
                    self.unknown.push(event.to_wire_format());
                }
            },

            // Reminder only; the condition was set by an earlier weather event
            BattleEvent::WeatherContinues(_) => {}

            BattleEvent::Raw(line) => {
                if !line.is_empty() {
                    self.unknown.push(line.clone());
                }
            }
        }
    }
}

/// Round number from a `--- Round N ---` banner
fn parse_round_banner(text: &str) -> Option<u32> {
    text.strip_prefix("--- Round ")?
        .strip_suffix(" ---")?
        .parse()
        .ok()
}
