//! Replaying saved transcripts

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use duel_battle::BattleView;
use duel_protocol::{Player, parse_transcript};

/// Read a transcript file and fold it into a view
pub async fn load_view(path: &Path) -> Result<BattleView> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read transcript {}", path.display()))?;

    let events = parse_transcript(&text)
        .with_context(|| format!("Malformed transcript {}", path.display()))?;

    Ok(BattleView::from_events(&events))
}

/// Write the announcements followed by a short summary
pub fn render<W: Write>(view: &BattleView, out: &mut W) -> std::io::Result<()> {
    for line in &view.log {
        writeln!(out, "{}", line)?;
    }

    writeln!(out)?;
    for line in summary(view) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Final state as a few lines of text
pub fn summary(view: &BattleView) -> Vec<String> {
    let mut lines = vec![format!("Rounds played: {}", view.round)];

    for player in Player::BOTH {
        let side = view.side(player);
        let hp = match (side.hp, side.hp_start, side.hp_percent()) {
            (Some(hp), Some(start), Some(percent)) => format!("{}/{} ({}%)", hp, start, percent),
            _ => "unknown".to_string(),
        };
        lines.push(format!(
            "{}: HP {}, damage taken {}, moves used {}",
            player,
            hp,
            side.damage_taken,
            side.moves_used.len()
        ));
    }

    lines.push(format!("Weather: {}", view.weather.to_protocol()));
    lines.push(match &view.winner {
        Some((player, name)) => format!("Winner: {} ({})", name, player),
        None => "Winner: none".to_string(),
    });

    if !view.unknown.is_empty() {
        lines.push(format!("Unrecognised lines: {}", view.unknown.len()));
    }
    lines
}
