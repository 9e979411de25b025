//! Damage formula

use crate::catalog::WeatherModifier;
use crate::types::Weather;

/// `max(1, attack - defence + power)`
pub fn base_damage(attack: u32, defence: u32, power: u32) -> u32 {
    let raw = i64::from(attack) - i64::from(defence) + i64::from(power);
    u32::try_from(raw.max(1)).unwrap_or(u32::MAX)
}

/// Outcome of applying a weather modifier to a damage value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherAdjustment {
    Unchanged(u32),
    Boosted(u32),
    Weakened(u32),
}

impl WeatherAdjustment {
    /// Final damage after the adjustment
    pub fn damage(self) -> u32 {
        match self {
            WeatherAdjustment::Unchanged(d)
            | WeatherAdjustment::Boosted(d)
            | WeatherAdjustment::Weakened(d) => d,
        }
    }
}

/// Apply a move's weather modifier under the current weather
pub fn adjust_for_weather(
    damage: u32,
    modifier: WeatherModifier,
    weather: Weather,
) -> WeatherAdjustment {
    if weather == modifier.boosted_in {
        WeatherAdjustment::Boosted(damage.saturating_add(modifier.bonus))
    } else if weather == modifier.weakened_in {
        WeatherAdjustment::Weakened(damage.saturating_sub(modifier.penalty).max(1))
    } else {
        WeatherAdjustment::Unchanged(damage)
    }
}
