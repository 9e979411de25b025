//! Global field state

use super::conditions::Weather;

/// Global field state shared by both combatants
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Current weather condition
    pub weather: Weather,

    /// Rounds left before the weather reverts to clear (0 = permanent clear)
    pub weather_turns: u32,
}

impl FieldState {
    /// Create a new clear field
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weather for a number of rounds, returning the previous condition
    pub fn set_weather(&mut self, weather: Weather, turns: u32) -> Weather {
        let previous = self.weather;
        self.weather = weather;
        self.weather_turns = turns;
        previous
    }

    /// Whether a timed weather condition is in effect
    pub fn has_timed_weather(&self) -> bool {
        self.weather_turns > 0
    }

    /// Count down one completed round.
    ///
    /// Returns the expired condition when the timer reaches zero; the field is
    /// clear again afterwards.
    pub fn tick_weather(&mut self) -> Option<Weather> {
        if self.weather_turns == 0 {
            return None;
        }

        self.weather_turns -= 1;
        if self.weather_turns == 0 {
            let expired = self.weather;
            self.weather = Weather::Clear;
            Some(expired)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_clear() {
        let field = FieldState::new();
        assert_eq!(field.weather, Weather::Clear);
        assert!(!field.has_timed_weather());
    }

    #[test]
    fn test_set_weather_returns_previous() {
        let mut field = FieldState::new();
        assert_eq!(field.set_weather(Weather::Rain, 5), Weather::Clear);
        assert_eq!(field.set_weather(Weather::Sun, 5), Weather::Rain);
        assert_eq!(field.weather, Weather::Sun);
    }

    #[test]
    fn test_tick_weather_expires_after_duration() {
        let mut field = FieldState::new();
        field.set_weather(Weather::Rain, 5);

        for _ in 0..4 {
            assert_eq!(field.tick_weather(), None);
            assert_eq!(field.weather, Weather::Rain);
        }

        assert_eq!(field.tick_weather(), Some(Weather::Rain));
        assert_eq!(field.weather, Weather::Clear);
        assert_eq!(field.tick_weather(), None);
    }
}
