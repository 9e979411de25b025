//! Built-in move table

use super::{MoveData, MoveEffect, MoveTarget, WeatherModifier};
use crate::types::{Status, Type, Weather};

fn define(
    id: &str,
    move_type: Type,
    power: u32,
    target: MoveTarget,
    effect: Option<MoveEffect>,
    description: &str,
) -> MoveData {
    MoveData {
        id: id.to_string(),
        name: id.to_string(),
        move_type,
        power,
        target,
        effect,
        description: description.to_string(),
    }
}

/// Moves known by the built-in roster
pub fn builtin_moves() -> Vec<MoveData> {
    vec![
        define(
            "Rapid-spin",
            Type::Normal,
            10,
            MoveTarget::Opponent,
            None,
            "Spins rapidly and strikes the opponent.",
        ),
        define(
            "Electroball",
            Type::Electric,
            15,
            MoveTarget::Opponent,
            None,
            "Hurls an electric orb at the opponent.",
        ),
        define(
            "Cannon-flash",
            Type::Steel,
            15,
            MoveTarget::Opponent,
            None,
            "Fires a beam of metallic light at the opponent.",
        ),
        define(
            "Raindance",
            Type::Water,
            0,
            MoveTarget::Field,
            Some(MoveEffect::Weather {
                condition: Weather::Rain,
            }),
            "Summons rain for five rounds.",
        ),
        define(
            "Sing",
            Type::Normal,
            0,
            MoveTarget::Opponent,
            Some(MoveEffect::Status {
                status: Status::Sleep,
                chance: 0.6,
                turns: 2,
            }),
            "Lulls the opponent to sleep (60% chance).",
        ),
        define(
            "SunnyDay",
            Type::Fire,
            0,
            MoveTarget::Field,
            Some(MoveEffect::Weather {
                condition: Weather::Sun,
            }),
            "Brings out harsh sunlight for five rounds.",
        ),
        define(
            "Flamethrower",
            Type::Fire,
            15,
            MoveTarget::Opponent,
            Some(MoveEffect::WeatherModifier(WeatherModifier {
                boosted_in: Weather::Sun,
                bonus: 5,
                weakened_in: Weather::Rain,
                penalty: 5,
            })),
            "Scorches the opponent (+5 in sun, -5 in rain).",
        ),
        define(
            "Echoing-voice",
            Type::Normal,
            15,
            MoveTarget::Opponent,
            None,
            "Sends sound waves at the opponent.",
        ),
    ]
}
