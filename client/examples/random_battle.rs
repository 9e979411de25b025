//! Random Battle Example
//!
//! Plays a seeded battle where both sides pick random moves and prints it
//! to the terminal, then replays the recorded transcript as a summary.
//!
//! ```text
//! cargo run --example random_battle -- 42
//! ```

use anyhow::Result;
use duel_battle::BattleView;
use duel_client::{
    Battle, BattleConfig, MoveCatalog, Outcome, TerminalPresenter, run_auto, summary,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[tokio::main]
async fn main() -> Result<()> {
    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let config = BattleConfig {
        seed: Some(seed),
        ..BattleConfig::default()
    };

    let [p1, p2] = config.combatants(&MoveCatalog::builtin())?;
    let presenter = TerminalPresenter::stdout(&p1, &p2, config.human).recording();
    let mut battle = Battle::from_config(&config, presenter)?;
    let mut picker = SmallRng::seed_from_u64(seed.wrapping_add(1));

    println!("=== Seed {} ===", seed);
    match run_auto(&mut battle, &mut picker, config.max_rounds).await {
        Outcome::Won { name, .. } => println!("{} takes it!", name),
        other => println!("Ended without a winner: {:?}", other),
    }

    if let Some(recorder) = battle.into_presenter().into_recorder() {
        println!();
        println!("--- Replay summary ---");
        let view = BattleView::from_events(recorder.events());
        for line in summary(&view) {
            println!("{}", line);
        }
    }

    Ok(())
}
