//! Presenter that records every callback as a transcript event

use duel_protocol::{AnimationCue, BattleEvent, Player, to_transcript};

use super::Presenter;
use crate::types::Weather;

/// Records callbacks as [`BattleEvent`]s, in call order
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Vec<BattleEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Consume the recorder, returning the events
    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    /// Announcement texts only, in order
    pub fn announcements(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                BattleEvent::Announce(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Count events matching a predicate
    pub fn count(&self, predicate: impl Fn(&BattleEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Serialize the recording in transcript format
    pub fn to_transcript(&self) -> String {
        to_transcript(&self.events)
    }

    fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }
}

impl Presenter for EventRecorder {
    fn update_health(&mut self, player: Player, hp: u32, damage: u32) {
        self.push(BattleEvent::Health { player, hp, damage });
    }

    async fn play_attack_animation(&mut self, player: Player, cue: &AnimationCue) {
        self.push(BattleEvent::Attack {
            player,
            cue: cue.clone(),
        });
    }

    async fn play_damage_animation(&mut self, player: Player) {
        self.push(BattleEvent::Damage(player));
    }

    async fn play_defeat_animation(&mut self, player: Player) {
        self.push(BattleEvent::Faint(player));
    }

    fn announce(&mut self, message: &str) {
        self.push(BattleEvent::Announce(message.to_string()));
    }

    fn announce_winner(&mut self, player: Player, name: &str) {
        self.push(BattleEvent::Win {
            player,
            name: name.to_string(),
        });
    }

    fn set_input_enabled(&mut self, player: Player, enabled: bool) {
        self.push(BattleEvent::Input { player, enabled });
    }

    async fn set_weather(&mut self, weather: Weather, previous: Weather) {
        self.push(BattleEvent::Weather {
            condition: weather.to_protocol().to_string(),
            previous: previous.to_protocol().to_string(),
        });
    }

    async fn weather_continues(&mut self, weather: Weather) {
        self.push(BattleEvent::WeatherContinues(
            weather.to_protocol().to_string(),
        ));
    }
}
