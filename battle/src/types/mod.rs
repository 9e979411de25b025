//! Domain types for battle state

mod combatant;
mod conditions;
mod field;
mod move_type;
mod status;

pub use combatant::{Combatant, CombatantIdentity, percent_of};
pub use conditions::Weather;
pub use field::FieldState;
pub use move_type::Type;
pub use status::{Status, StatusEffect};
