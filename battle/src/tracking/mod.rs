//! Battle state reconstruction from recorded events

mod updater;
mod view;

pub use view::{BattleView, SideView};
