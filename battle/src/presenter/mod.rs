mod recorder;

pub use recorder::EventRecorder;

use duel_protocol::{AnimationCue, Player};

use crate::types::Weather;

/// Trait for presenting a battle to the outside world.
///
/// The resolver calls these in order and awaits each async method before
/// moving on, so an implementation can pace itself (play an animation,
/// sleep, wait for a frame) simply by not returning yet. All methods have
/// default no-op implementations, so you only need to implement the
/// callbacks you care about.
///
/// # Example
///
/// ```ignore
/// struct Console;
///
/// impl Presenter for Console {
///     fn announce(&mut self, message: &str) {
///         println!("{message}");
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait Presenter {
    /// Called whenever a combatant's HP changes (and once per side at start).
    fn update_health(&mut self, player: Player, hp: u32, damage: u32) {
        let _ = (player, hp, damage);
    }

    /// Called when an actor takes its turn, including forfeited ones.
    async fn play_attack_animation(&mut self, player: Player, cue: &AnimationCue) {
        let _ = (player, cue);
    }

    /// Called after damage has been applied to `player`.
    async fn play_damage_animation(&mut self, player: Player) {
        let _ = player;
    }

    /// Called when `player` runs out of HP.
    async fn play_defeat_animation(&mut self, player: Player) {
        let _ = player;
    }

    /// Called for every line of battle text.
    fn announce(&mut self, message: &str) {
        let _ = message;
    }

    /// Called exactly once, when the battle ends.
    fn announce_winner(&mut self, player: Player, name: &str) {
        let _ = (player, name);
    }

    /// Called when a side may (or may no longer) pick a move.
    fn set_input_enabled(&mut self, player: Player, enabled: bool) {
        let _ = (player, enabled);
    }

    /// Called when the field weather changes.
    async fn set_weather(&mut self, weather: Weather, previous: Weather) {
        let _ = (weather, previous);
    }

    /// Called when a weather condition is (still) in effect.
    async fn weather_continues(&mut self, weather: Weather) {
        let _ = weather;
    }
}

/// Presenter that ignores everything
impl Presenter for () {}
