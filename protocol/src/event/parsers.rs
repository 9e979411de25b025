//! Per-event line parsers

use super::{AnimationCue, BattleEvent};
use crate::{ParseError, Player};
use anyhow::Result;

/// Helper to parse the player at a given position
fn parse_player(parts: &[&str], index: usize) -> Result<Player> {
    let raw = parts
        .get(index)
        .ok_or_else(|| ParseError::MissingField("player".to_string()))?;

    Player::parse(raw).ok_or_else(|| ParseError::UnknownPlayer(raw.to_string()).into())
}

/// Helper to parse a numeric field at a given position
fn parse_number(parts: &[&str], index: usize, field: &str) -> Result<u32> {
    let raw = parts
        .get(index)
        .ok_or_else(|| ParseError::MissingField(field.to_string()))?;

    raw.parse()
        .map_err(|_| ParseError::InvalidFormat(format!("{} is not a number: {}", field, raw)).into())
}

/// Helper to parse a non-empty string field
fn parse_text(parts: &[&str], index: usize, field: &str) -> Result<String> {
    match parts.get(index) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(ParseError::MissingField(field.to_string()).into()),
    }
}

/// Parse |health|PLAYER|HP|DAMAGE
pub fn parse_health(parts: &[&str]) -> Result<BattleEvent> {
    let player = parse_player(parts, 2)?;
    let hp = parse_number(parts, 3, "hp")?;
    let damage = parse_number(parts, 4, "damage")?;

    Ok(BattleEvent::Health { player, hp, damage })
}

/// Parse |attack|PLAYER|move|MOVE, |attack|PLAYER|slp or |attack|PLAYER|confused
pub fn parse_attack(parts: &[&str]) -> Result<BattleEvent> {
    let player = parse_player(parts, 2)?;

    let cue = match parts.get(3).copied() {
        Some("move") => AnimationCue::Move(parse_text(parts, 4, "move")?),
        Some("slp") => AnimationCue::Asleep,
        Some("confused") => AnimationCue::Confused,
        Some(other) => {
            return Err(ParseError::InvalidFormat(format!("unknown attack cue: {}", other)).into());
        }
        None => return Err(ParseError::MissingField("attack cue".to_string()).into()),
    };

    Ok(BattleEvent::Attack { player, cue })
}

/// Parse |damage|PLAYER
pub fn parse_damage(parts: &[&str]) -> Result<BattleEvent> {
    Ok(BattleEvent::Damage(parse_player(parts, 2)?))
}

/// Parse |faint|PLAYER
pub fn parse_faint(parts: &[&str]) -> Result<BattleEvent> {
    Ok(BattleEvent::Faint(parse_player(parts, 2)?))
}

/// Parse |announce|TEXT
pub fn parse_announce(parts: &[&str]) -> Result<BattleEvent> {
    // TEXT can contain | characters, so join everything after parts[1]
    if parts.len() < 3 {
        return Err(ParseError::MissingField("announcement".to_string()).into());
    }

    Ok(BattleEvent::Announce(parts[2..].join("|")))
}

/// Parse |win|PLAYER|NAME
pub fn parse_win(parts: &[&str]) -> Result<BattleEvent> {
    let player = parse_player(parts, 2)?;
    if parts.len() < 4 {
        return Err(ParseError::MissingField("winner name".to_string()).into());
    }
    let name = parts[3..].join("|");

    Ok(BattleEvent::Win { player, name })
}

/// Parse |input|PLAYER|on or |input|PLAYER|off
pub fn parse_input(parts: &[&str]) -> Result<BattleEvent> {
    let player = parse_player(parts, 2)?;
    let enabled = match parts.get(3).copied() {
        Some("on") => true,
        Some("off") => false,
        Some(other) => {
            return Err(ParseError::InvalidFormat(format!("input must be on/off: {}", other)).into());
        }
        None => return Err(ParseError::MissingField("input state".to_string()).into()),
    };

    Ok(BattleEvent::Input { player, enabled })
}

/// Parse |weather|CONDITION|PREVIOUS
pub fn parse_weather(parts: &[&str]) -> Result<BattleEvent> {
    let condition = parse_text(parts, 2, "weather")?;
    let previous = parse_text(parts, 3, "previous weather")?;

    Ok(BattleEvent::Weather {
        condition,
        previous,
    })
}

/// Parse |weathercontinues|CONDITION
pub fn parse_weather_continues(parts: &[&str]) -> Result<BattleEvent> {
    Ok(BattleEvent::WeatherContinues(parse_text(parts, 2, "weather")?))
}
