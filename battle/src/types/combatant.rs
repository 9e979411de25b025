//! Combatant state types

use super::status::{Status, StatusEffect};

/// `value` as a whole percentage of `max`, rounded down (0 when `max` is 0)
pub fn percent_of(value: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let percent = u64::from(value) * 100 / u64::from(max);
    u32::try_from(percent).unwrap_or(u32::MAX)
}

/// Core combatant identity (doesn't change during battle)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatantIdentity {
    /// Roster key (e.g., "magnemite")
    pub key: String,

    /// Display name (e.g., "Magnemite")
    pub name: String,
}

impl CombatantIdentity {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// Combatant state during battle (changes as battle progresses)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    /// Core identity
    pub identity: CombatantIdentity,

    // === HP ===
    /// Current HP, never above `hp_max`
    pub hp: u32,

    /// Maximum HP
    pub hp_max: u32,

    // === Stats ===
    pub attack: u32,
    pub defence: u32,
    pub speed: u32,

    /// Known move identifiers, in menu order
    pub moves: Vec<String>,

    /// Active timed statuses, at most one per tag
    pub statuses: Vec<StatusEffect>,
}

impl Combatant {
    /// Create a combatant at full health
    pub fn new(
        identity: CombatantIdentity,
        hp_max: u32,
        attack: u32,
        defence: u32,
        speed: u32,
        moves: Vec<String>,
    ) -> Self {
        Self {
            identity,
            hp: hp_max,
            hp_max,
            attack,
            defence,
            speed,
            moves,
            statuses: Vec::new(),
        }
    }

    /// Get display name
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    /// Get HP as percentage (0-100)
    pub fn hp_percent(&self) -> u32 {
        percent_of(self.hp, self.hp_max)
    }

    /// Check if combatant still has HP left
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Reduce HP by `amount`, floored at 0. Returns the new HP.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }

    /// Check for a status condition
    pub fn has_status(&self, status: Status) -> bool {
        self.statuses.iter().any(|s| s.status == status)
    }

    /// Whether any carried status makes this combatant forfeit its action
    pub fn is_incapacitated(&self) -> bool {
        self.statuses.iter().any(|s| s.status.prevents_action())
    }

    /// Attach a status; returns false if the tag is already present
    pub fn inflict(&mut self, status: Status, turns: u32) -> bool {
        if self.has_status(status) {
            return false;
        }
        self.statuses.push(StatusEffect::new(status, turns));
        true
    }

    /// Count down every status by one round, returning those that ran out
    pub fn tick_statuses(&mut self) -> Vec<Status> {
        let mut expired = Vec::new();
        self.statuses.retain_mut(|effect| {
            if effect.tick() {
                expired.push(effect.status);
                false
            } else {
                true
            }
        });
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_combatant() -> Combatant {
        Combatant::new(
            CombatantIdentity::new("test", "Test"),
            60,
            10,
            10,
            10,
            vec!["Electroball".to_string()],
        )
    }

    #[test]
    fn test_combatant_new_is_full_health() {
        let c = create_test_combatant();
        assert_eq!(c.hp, 60);
        assert_eq!(c.hp_max, 60);
        assert_eq!(c.name(), "Test");
        assert!(c.statuses.is_empty());
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut c = create_test_combatant();
        assert_eq!(c.take_damage(15), 45);
        assert_eq!(c.take_damage(100), 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_hp_percent() {
        let mut c = create_test_combatant();
        c.hp = 30;
        assert_eq!(c.hp_percent(), 50);
    }

    #[test]
    fn test_hp_percent_large_pool() {
        let mut c = Combatant::new(
            CombatantIdentity::new("big", "Big"),
            100_000_000,
            10,
            10,
            10,
            Vec::new(),
        );
        assert_eq!(c.hp_percent(), 100);

        c.take_damage(75_000_000);
        assert_eq!(c.hp_percent(), 25);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(5, 0), 0);
        assert_eq!(percent_of(u32::MAX, u32::MAX), 100);
        assert_eq!(percent_of(u32::MAX, 1), u32::MAX);
    }

    #[test]
    fn test_inflict_rejects_duplicates() {
        let mut c = create_test_combatant();
        assert!(c.inflict(Status::Sleep, 2));
        assert!(!c.inflict(Status::Sleep, 5));
        assert_eq!(c.statuses.len(), 1);
        assert_eq!(c.statuses[0].turns_left, 2);
        assert!(c.is_incapacitated());
    }

    #[test]
    fn test_tick_statuses_removes_expired() {
        let mut c = create_test_combatant();
        c.inflict(Status::Sleep, 2);

        assert!(c.tick_statuses().is_empty());
        assert!(c.has_status(Status::Sleep));

        assert_eq!(c.tick_statuses(), vec![Status::Sleep]);
        assert!(!c.has_status(Status::Sleep));
        assert!(c.tick_statuses().is_empty());
    }
}
