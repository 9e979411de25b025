//! Battle configuration and the creature roster

use duel_protocol::Player;

use crate::catalog::MoveCatalog;
use crate::error::ConfigError;
use crate::types::{Combatant, CombatantIdentity};

/// Rounds a weather move lasts
pub const DEFAULT_WEATHER_TURNS: u32 = 5;

/// Autoplay round limit
pub const DEFAULT_MAX_ROUNDS: u32 = 100;

/// Stat block for a creature that can enter a battle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureSpec {
    pub key: String,
    pub name: String,
    pub hp: u32,
    pub attack: u32,
    pub defence: u32,
    pub speed: u32,
    pub moves: Vec<String>,
}

impl CreatureSpec {
    /// Build a fresh, full-health combatant from this stat block
    pub fn to_combatant(&self) -> Combatant {
        Combatant::new(
            CombatantIdentity::new(&self.key, &self.name),
            self.hp,
            self.attack,
            self.defence,
            self.speed,
            self.moves.clone(),
        )
    }

    /// Check stats and that every move resolves in `catalog`
    pub fn validate(&self, catalog: &MoveCatalog) -> Result<(), ConfigError> {
        if self.hp == 0 {
            return Err(ConfigError::InvalidStats {
                creature: self.key.clone(),
                reason: "hp must be positive".to_string(),
            });
        }

        if let Some(missing) = self.moves.iter().find(|m| !catalog.contains(m)) {
            return Err(ConfigError::UnknownMove {
                creature: self.key.clone(),
                move_id: missing.clone(),
            });
        }

        Ok(())
    }
}

/// Built-in roster: Magnemite and Jigglypuff
pub fn builtin_roster() -> Vec<CreatureSpec> {
    vec![
        CreatureSpec {
            key: "magnemite".to_string(),
            name: "Magnemite".to_string(),
            hp: 65,
            attack: 10,
            defence: 15,
            speed: 10,
            moves: vec![
                "Rapid-spin".to_string(),
                "Electroball".to_string(),
                "Cannon-flash".to_string(),
                "Raindance".to_string(),
            ],
        },
        CreatureSpec {
            key: "jigglypuff".to_string(),
            name: "Jigglypuff".to_string(),
            hp: 50,
            attack: 15,
            defence: 10,
            speed: 15,
            moves: vec![
                "Sing".to_string(),
                "SunnyDay".to_string(),
                "Flamethrower".to_string(),
                "Echoing-voice".to_string(),
            ],
        },
    ]
}

/// Everything needed to set up a battle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Side controlled by the human; the other side picks moves on its own
    pub human: Player,

    /// Roster key of the creature in slot p1
    pub p1: String,

    /// Roster key of the creature in slot p2
    pub p2: String,

    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,

    /// Rounds a weather change lasts
    pub weather_turns: u32,

    /// Stop autoplay after this many rounds
    pub max_rounds: u32,

    /// Creatures available to `p1`/`p2`
    pub roster: Vec<CreatureSpec>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            human: Player::P1,
            p1: "magnemite".to_string(),
            p2: "jigglypuff".to_string(),
            seed: None,
            weather_turns: DEFAULT_WEATHER_TURNS,
            max_rounds: DEFAULT_MAX_ROUNDS,
            roster: builtin_roster(),
        }
    }
}

impl BattleConfig {
    /// Put the human in control of `creature`, facing the first other roster entry
    pub fn playing_as(mut self, creature: &str) -> Result<Self, ConfigError> {
        let opponent = self
            .roster
            .iter()
            .find(|c| c.key != creature)
            .map(|c| c.key.clone())
            .ok_or_else(|| ConfigError::UnknownCreature(format!("opponent for {}", creature)))?;

        self.find(creature)?;
        match self.human {
            Player::P1 => {
                self.p1 = creature.to_string();
                self.p2 = opponent;
            }
            Player::P2 => {
                self.p2 = creature.to_string();
                self.p1 = opponent;
            }
        }
        Ok(self)
    }

    /// Look up a roster entry by key
    pub fn find(&self, key: &str) -> Result<&CreatureSpec, ConfigError> {
        self.roster
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| ConfigError::UnknownCreature(key.to_string()))
    }

    /// Validate both slots against the catalog
    pub fn validate(&self, catalog: &MoveCatalog) -> Result<(), ConfigError> {
        if self.weather_turns == 0 {
            return Err(ConfigError::InvalidWeatherTurns(self.weather_turns));
        }

        self.find(&self.p1)?.validate(catalog)?;
        self.find(&self.p2)?.validate(catalog)?;
        Ok(())
    }

    /// Build the two combatants, p1 first
    pub fn combatants(&self, catalog: &MoveCatalog) -> Result<[Combatant; 2], ConfigError> {
        self.validate(catalog)?;
        Ok([
            self.find(&self.p1)?.to_combatant(),
            self.find(&self.p2)?.to_combatant(),
        ])
    }
}
