//! Driving a battle from stdin or on autoplay

use anyhow::{Context, Result};
use duel_battle::{Battle, Presenter, Selection};
use duel_protocol::Player;
use rand::Rng;
use rand::seq::SliceRandom;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::input::{Command, move_menu, parse_command};

/// How a driven battle ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Someone won
    Won { player: Player, name: String },
    /// The player quit or input ran out
    Abandoned,
    /// Autoplay hit its round limit
    RoundLimit(u32),
}

impl Outcome {
    fn of<P: Presenter, R: Rng>(battle: &Battle<P, R>) -> Option<Self> {
        let player = battle.winner()?;
        Some(Outcome::Won {
            player,
            name: battle.combatant(player).name().to_string(),
        })
    }
}

/// Prompt the human for a move each round, reading lines from `input`
pub async fn run_interactive<P, R, I>(battle: &mut Battle<P, R>, input: I) -> Result<Outcome>
where
    P: Presenter,
    R: Rng,
    I: AsyncBufRead + Unpin,
{
    let human = battle.human();
    let mut lines = input.lines();

    battle.start().await;

    loop {
        if let Some(outcome) = Outcome::of(battle) {
            return Ok(outcome);
        }

        print_menu(battle, human);

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            info!("input closed, leaving battle");
            return Ok(Outcome::Abandoned);
        };

        let command = match parse_command(&line, battle.combatant(human), battle.catalog()) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Move(move_id) => {
                let selection = battle.select_move(human, &move_id).await;
                debug!(?selection, move_id = %move_id, "human selection");
            }
            Command::Help => continue,
            Command::Quit => return Ok(Outcome::Abandoned),
        }
    }
}

/// Pick random moves for the human side until the battle ends or
/// `max_rounds` rounds have been played
pub async fn run_auto<P, R, G>(
    battle: &mut Battle<P, R>,
    picker: &mut G,
    max_rounds: u32,
) -> Outcome
where
    P: Presenter,
    R: Rng,
    G: Rng,
{
    let human = battle.human();
    battle.start().await;

    while battle.turn() < max_rounds {
        if let Some(outcome) = Outcome::of(battle) {
            return outcome;
        }

        let choice = battle.combatant(human).moves.choose(picker).cloned();
        let Some(move_id) = choice else {
            warn!(player = %human, "human side has no moves, stopping autoplay");
            return Outcome::Abandoned;
        };

        if let Selection::Ignored(reason) = battle.select_move(human, &move_id).await {
            warn!(?reason, "autoplay selection ignored");
            return Outcome::Abandoned;
        }
    }

    Outcome::of(battle).unwrap_or(Outcome::RoundLimit(max_rounds))
}

fn print_menu<P: Presenter, R: Rng>(battle: &Battle<P, R>, human: Player) {
    let combatant = battle.combatant(human);
    println!(
        "Choose a move for {} ({}% HP):",
        combatant.name(),
        combatant.hp_percent()
    );
    for line in move_menu(combatant, battle.catalog()) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_battle::{BattleConfig, EventRecorder};
    use duel_protocol::BattleEvent;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn seeded(seed: u64) -> Battle<EventRecorder> {
        let config = BattleConfig {
            seed: Some(seed),
            ..BattleConfig::default()
        };
        Battle::from_config(&config, EventRecorder::new()).unwrap()
    }

    #[tokio::test]
    async fn test_run_auto_finishes() {
        let mut battle = seeded(1);
        let mut picker = SmallRng::seed_from_u64(2);

        let outcome = run_auto(&mut battle, &mut picker, 100).await;

        let Outcome::Won { player, name } = outcome else {
            panic!("expected a winner, got {:?}", outcome);
        };
        assert_eq!(battle.winner(), Some(player));
        assert_eq!(battle.combatant(player).name(), name);
    }

    #[tokio::test]
    async fn test_run_auto_round_limit() {
        let mut battle = seeded(1);
        let mut picker = SmallRng::seed_from_u64(2);

        let outcome = run_auto(&mut battle, &mut picker, 1).await;

        // Nobody can be knocked out in a single round from full health
        assert_eq!(outcome, Outcome::RoundLimit(1));
        assert_eq!(battle.turn(), 1);
    }

    #[tokio::test]
    async fn test_run_interactive_reads_moves() {
        let mut battle = seeded(4);
        let input: &[u8] = b"2\nnot-a-move\nElectroball\nquit\n";

        let outcome = run_interactive(&mut battle, input).await.unwrap();

        assert_eq!(outcome, Outcome::Abandoned);
        assert_eq!(battle.turn(), 2);
        assert_eq!(
            battle
                .presenter()
                .count(|e| matches!(e, BattleEvent::Attack { player: Player::P1, .. })),
            2
        );
    }

    #[tokio::test]
    async fn test_run_interactive_eof() {
        let mut battle = seeded(4);
        let input: &[u8] = b"";

        let outcome = run_interactive(&mut battle, input).await.unwrap();

        assert_eq!(outcome, Outcome::Abandoned);
        assert_eq!(battle.turn(), 0);
    }
}
