mod parsers;
mod tests;

use crate::Player;
use anyhow::Result;

/// What the attack animation should show for an actor's turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationCue {
    /// A resolved move, by catalog identifier
    Move(String),
    /// The actor is asleep and forfeits its action
    Asleep,
    /// The chosen move could not be resolved
    Confused,
}

impl AnimationCue {
    /// Marker used on the wire for the non-move cues
    pub fn marker(&self) -> &str {
        match self {
            AnimationCue::Move(id) => id,
            AnimationCue::Asleep => "slp",
            AnimationCue::Confused => "confused",
        }
    }
}

/// Everything the resolver tells the presentation layer, in order
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    /// |health|PLAYER|HP|DAMAGE
    Health {
        player: Player,
        hp: u32,
        damage: u32,
    },

    /// |attack|PLAYER|move|MOVE, |attack|PLAYER|slp or |attack|PLAYER|confused
    Attack { player: Player, cue: AnimationCue },

    /// |damage|PLAYER
    Damage(Player),

    /// |faint|PLAYER
    Faint(Player),

    /// |announce|TEXT
    Announce(String),

    /// |win|PLAYER|NAME
    Win { player: Player, name: String },

    /// |input|PLAYER|on or |input|PLAYER|off
    Input { player: Player, enabled: bool },

    /// |weather|CONDITION|PREVIOUS
    Weather { condition: String, previous: String },

    /// |weathercontinues|CONDITION
    WeatherContinues(String),

    /// Anything that is not a recognised event line
    Raw(String),
}

impl BattleEvent {
    /// Serialize to a single transcript line
    pub fn to_wire_format(&self) -> String {
        match self {
            Self::Health { player, hp, damage } => format!("|health|{}|{}|{}", player, hp, damage),
            Self::Attack { player, cue } => match cue {
                AnimationCue::Move(id) => format!("|attack|{}|move|{}", player, id),
                other => format!("|attack|{}|{}", player, other.marker()),
            },
            Self::Damage(player) => format!("|damage|{}", player),
            Self::Faint(player) => format!("|faint|{}", player),
            Self::Announce(text) => format!("|announce|{}", text),
            Self::Win { player, name } => format!("|win|{}|{}", player, name),
            Self::Input { player, enabled } => {
                format!("|input|{}|{}", player, if *enabled { "on" } else { "off" })
            }
            Self::Weather {
                condition,
                previous,
            } => format!("|weather|{}|{}", condition, previous),
            Self::WeatherContinues(condition) => format!("|weathercontinues|{}", condition),
            Self::Raw(line) => line.clone(),
        }
    }
}

/// Parse a single transcript line into a BattleEvent
pub fn parse_event(line: &str) -> Result<BattleEvent> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.trim().is_empty() {
        return Ok(BattleEvent::Raw(String::new()));
    }

    if !line.starts_with('|') {
        return Ok(BattleEvent::Raw(line.to_string()));
    }

    let parts: Vec<&str> = line.split('|').collect();

    if parts.len() < 2 {
        return Ok(BattleEvent::Raw(line.to_string()));
    }

    match parts[1] {
        "health" => parsers::parse_health(&parts),
        "attack" => parsers::parse_attack(&parts),
        "damage" => parsers::parse_damage(&parts),
        "faint" => parsers::parse_faint(&parts),
        "announce" => parsers::parse_announce(&parts),
        "win" => parsers::parse_win(&parts),
        "input" => parsers::parse_input(&parts),
        "weather" => parsers::parse_weather(&parts),
        "weathercontinues" => parsers::parse_weather_continues(&parts),
        _ => Ok(BattleEvent::Raw(line.to_string())),
    }
}

/// Parse a whole transcript, skipping blank lines
pub fn parse_transcript(text: &str) -> Result<Vec<BattleEvent>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_event)
        .collect()
}

/// Serialize events as a newline-terminated transcript
pub fn to_transcript(events: &[BattleEvent]) -> String {
    let mut out = String::new();
    for event in events {
        out.push_str(&event.to_wire_format());
        out.push('\n');
    }
    out
}
