//! Move definitions and the catalog they are looked up in

mod moves;

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::types::{Status, Type, Weather};

pub use moves::builtin_moves;

/// Identifier the autonomous side falls back to when it knows no moves.
/// It is deliberately absent from every catalog.
pub const STRUGGLE: &str = "struggle";

/// Who a move is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MoveTarget {
    /// The shared field (weather moves)
    Field,
    /// The other combatant
    Opponent,
}

/// Damage adjustment depending on the current weather
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherModifier {
    /// Weather that strengthens the move
    pub boosted_in: Weather,
    /// Damage added under `boosted_in`
    pub bonus: u32,
    /// Weather that weakens the move
    pub weakened_in: Weather,
    /// Damage removed under `weakened_in` (result never drops below 1)
    pub penalty: u32,
}

/// Secondary effect carried by a move
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum MoveEffect {
    /// Change the field weather
    Weather { condition: Weather },
    /// Try to attach a status to the defender
    Status {
        status: Status,
        chance: f64,
        turns: u32,
    },
    /// Adjust damage depending on weather
    WeatherModifier(WeatherModifier),
}

/// A single move definition
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveData {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub move_type: Type,
    /// Base power, 0 for status and field moves
    pub power: u32,
    pub target: MoveTarget,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<MoveEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl MoveData {
    /// Whether the move deals damage
    pub fn is_damaging(&self) -> bool {
        self.power > 0
    }

    /// Weather this move sets, if any
    pub fn weather_change(&self) -> Option<Weather> {
        match self.effect {
            Some(MoveEffect::Weather { condition }) => Some(condition),
            _ => None,
        }
    }

    /// Damage modifier this move carries, if any
    pub fn weather_modifier(&self) -> Option<WeatherModifier> {
        match self.effect {
            Some(MoveEffect::WeatherModifier(modifier)) => Some(modifier),
            _ => None,
        }
    }
}

/// Immutable lookup table of moves, validated once on construction
#[derive(Debug, Clone)]
pub struct MoveCatalog {
    moves: Vec<MoveData>,
}

impl MoveCatalog {
    /// Build a catalog, rejecting duplicate ids and impossible status chances
    pub fn new(moves: Vec<MoveData>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();

        for data in &moves {
            if !seen.insert(data.id.as_str()) {
                return Err(ConfigError::DuplicateMove(data.id.clone()));
            }

            if let Some(MoveEffect::Status { chance, .. }) = data.effect
                && !(0.0..=1.0).contains(&chance)
            {
                return Err(ConfigError::InvalidChance {
                    move_id: data.id.clone(),
                    chance,
                });
            }
        }

        Ok(Self { moves })
    }

    /// The eight built-in moves
    pub fn builtin() -> Self {
        Self {
            moves: builtin_moves(),
        }
    }

    /// Look up a move by identifier
    pub fn get(&self, id: &str) -> Option<&MoveData> {
        self.moves.iter().find(|m| m.id == id)
    }

    /// Check whether an identifier resolves
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Display name for an identifier, falling back to the raw id
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map_or(id, |m| m.name.as_str())
    }

    /// Iterate over all moves in definition order
    pub fn iter(&self) -> impl Iterator<Item = &MoveData> {
        self.moves.iter()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl Default for MoveCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_move(id: &str) -> MoveData {
        MoveData {
            id: id.to_string(),
            name: id.to_string(),
            move_type: Type::Normal,
            power: 10,
            target: MoveTarget::Opponent,
            effect: None,
            description: String::new(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = MoveCatalog::builtin();
        let rebuilt = MoveCatalog::new(builtin_moves()).unwrap();
        assert_eq!(builtin.len(), 8);
        assert_eq!(rebuilt.len(), 8);
        assert!(!builtin.contains(STRUGGLE));
    }

    #[test]
    fn test_lookup() {
        let catalog = MoveCatalog::builtin();
        let flamethrower = catalog.get("Flamethrower").unwrap();
        assert_eq!(flamethrower.power, 15);
        assert_eq!(flamethrower.move_type, Type::Fire);
        assert!(flamethrower.weather_modifier().is_some());

        let rain = catalog.get("Raindance").unwrap();
        assert_eq!(rain.weather_change(), Some(Weather::Rain));
        assert!(!rain.is_damaging());

        assert!(catalog.get("Hyper Beam").is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let catalog = MoveCatalog::builtin();
        assert_eq!(catalog.display_name("Sing"), "Sing");
        assert_eq!(catalog.display_name("struggle"), "struggle");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = MoveCatalog::new(vec![plain_move("Tackle"), plain_move("Tackle")]);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::DuplicateMove("Tackle".to_string())
        );
    }

    #[test]
    fn test_invalid_chance_rejected() {
        let mut lullaby = plain_move("Lullaby");
        lullaby.power = 0;
        lullaby.effect = Some(MoveEffect::Status {
            status: Status::Sleep,
            chance: 1.5,
            turns: 2,
        });

        assert!(matches!(
            MoveCatalog::new(vec![lullaby]),
            Err(ConfigError::InvalidChance { .. })
        ));
    }
}
