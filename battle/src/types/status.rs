//! Timed status conditions

/// Status conditions a move can inflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    Sleep,
}

impl Status {
    /// Whether a combatant carrying this status forfeits its action
    pub fn prevents_action(&self) -> bool {
        matches!(self, Status::Sleep)
    }

    /// Lowercase name used in battle messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Sleep => "sleep",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A status attached to one combatant, with the rounds it has left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEffect {
    pub status: Status,
    pub turns_left: u32,
}

impl StatusEffect {
    pub fn new(status: Status, turns: u32) -> Self {
        Self {
            status,
            turns_left: turns,
        }
    }

    /// Count down one round, returns true once the effect has run out
    pub fn tick(&mut self) -> bool {
        self.turns_left = self.turns_left.saturating_sub(1);
        self.turns_left == 0
    }
}
