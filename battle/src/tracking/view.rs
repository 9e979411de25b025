//! BattleView - battle state as seen from the event stream

use duel_protocol::Player;

use crate::types::{Weather, percent_of};

/// What is known about one side from the events alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideView {
    /// Last reported HP (`None` until the first health event)
    pub hp: Option<u32>,

    /// HP at the first health event
    pub hp_start: Option<u32>,

    /// Sum of all damage reported against this side
    pub damage_taken: u32,

    /// Move identifiers this side was seen using, in order
    pub moves_used: Vec<String>,

    /// Rounds this side spent asleep
    pub turns_asleep: u32,

    /// Whether the side's input is currently open
    pub input_enabled: bool,

    pub fainted: bool,
}

impl SideView {
    /// Remaining HP as a percentage of the starting HP
    pub fn hp_percent(&self) -> Option<u32> {
        Some(percent_of(self.hp?, self.hp_start?))
    }
}

/// A battle reconstructed from [`BattleEvent`](duel_protocol::BattleEvent)s
///
/// This never sees the engine state directly; everything here is derived from
/// a transcript, so it works the same for a live recorder and a saved file.
#[derive(Debug, Clone, Default)]
pub struct BattleView {
    /// Sides indexed by [`Player::index`]
    pub(crate) sides: [SideView; 2],

    /// Current weather
    pub weather: Weather,

    /// Last round number announced (0 = not started)
    pub round: u32,

    /// Winner and their creature's name, once the battle is over
    pub winner: Option<(Player, String)>,

    /// Every announcement, in order
    pub log: Vec<String>,

    /// Lines that were not recognised
    pub unknown: Vec<String>,
}

impl BattleView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a side's view
    pub fn side(&self, player: Player) -> &SideView {
        &self.sides[player.index()]
    }

    pub(crate) fn side_mut(&mut self, player: Player) -> &mut SideView {
        &mut self.sides[player.index()]
    }

    /// Check if a winner has been announced
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Check if the battle has started but not ended
    pub fn is_active(&self) -> bool {
        self.round > 0 && !self.is_finished()
    }
}
