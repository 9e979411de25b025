//! Battle state owned by the resolver

use duel_protocol::Player;

use crate::types::{Combatant, FieldState};

/// Where the battle is in its round cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for one or both move choices
    Selecting,
    /// Both moves chosen, actions being applied in order
    Resolving,
    /// Terminal; nothing changes after this
    Finished { winner: Player },
}

/// Complete state of one duel
#[derive(Debug, Clone)]
pub struct BattleState {
    /// Combatants indexed by [`Player::index`]
    pub combatants: [Combatant; 2],

    /// Global field state (weather)
    pub field: FieldState,

    /// Rounds started so far (0 = not started)
    pub turn: u32,

    /// Pending move choices, indexed by [`Player::index`]
    pub selections: [Option<String>; 2],

    pub phase: Phase,

    /// Every announced line, in order
    pub log: Vec<String>,
}

impl BattleState {
    pub fn new(p1: Combatant, p2: Combatant) -> Self {
        Self {
            combatants: [p1, p2],
            field: FieldState::new(),
            turn: 0,
            selections: [None, None],
            phase: Phase::Selecting,
            log: Vec::new(),
        }
    }

    /// Get a combatant by side
    pub fn combatant(&self, player: Player) -> &Combatant {
        &self.combatants[player.index()]
    }

    /// Get a combatant mutably by side
    pub fn combatant_mut(&mut self, player: Player) -> &mut Combatant {
        &mut self.combatants[player.index()]
    }

    /// Pending move choice for a side
    pub fn selection(&self, player: Player) -> Option<&str> {
        self.selections[player.index()].as_deref()
    }

    /// Check if both sides have chosen
    pub fn both_selected(&self) -> bool {
        self.selections.iter().all(Option::is_some)
    }

    /// Check if the battle has ended
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    /// Winner, once the battle has ended
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CombatantIdentity;

    fn dummy(name: &str) -> Combatant {
        Combatant::new(CombatantIdentity::new(name, name), 10, 1, 1, 1, Vec::new())
    }

    #[test]
    fn test_new_state() {
        let state = BattleState::new(dummy("a"), dummy("b"));
        assert_eq!(state.turn, 0);
        assert_eq!(state.phase, Phase::Selecting);
        assert!(!state.both_selected());
        assert!(!state.is_finished());
        assert_eq!(state.combatant(Player::P2).name(), "b");
    }

    #[test]
    fn test_winner() {
        let mut state = BattleState::new(dummy("a"), dummy("b"));
        assert_eq!(state.winner(), None);

        state.phase = Phase::Finished { winner: Player::P2 };
        assert!(state.is_finished());
        assert_eq!(state.winner(), Some(Player::P2));
    }

    #[test]
    fn test_selections() {
        let mut state = BattleState::new(dummy("a"), dummy("b"));
        state.selections[Player::P1.index()] = Some("Sing".to_string());
        assert_eq!(state.selection(Player::P1), Some("Sing"));
        assert!(!state.both_selected());

        state.selections[Player::P2.index()] = Some("Electroball".to_string());
        assert!(state.both_selected());
    }
}
