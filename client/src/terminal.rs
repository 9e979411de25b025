//! Terminal presenter

use std::io::{self, Stdout, Write};
use std::time::Duration;

use duel_battle::{Combatant, EventRecorder, Presenter, Weather, percent_of};
use duel_protocol::{AnimationCue, Player};
use tracing::warn;

const RESET: &str = "\x1b[0m";

/// Colour band for an HP readout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    /// More than half left
    Healthy,
    /// More than a quarter left
    Wounded,
    Critical,
}

impl HealthBand {
    pub fn from_percent(percent: u32) -> Self {
        if percent > 50 {
            HealthBand::Healthy
        } else if percent > 25 {
            HealthBand::Wounded
        } else {
            HealthBand::Critical
        }
    }

    /// ANSI foreground colour (green, orange, red)
    fn ansi(self) -> &'static str {
        match self {
            HealthBand::Healthy => "\x1b[32m",
            HealthBand::Wounded => "\x1b[38;5;208m",
            HealthBand::Critical => "\x1b[31m",
        }
    }
}

/// Per-side display info captured at construction
#[derive(Debug, Clone)]
struct SideInfo {
    name: String,
    hp_max: u32,
}

/// Prints the battle as text, pausing on animations.
///
/// Optionally tees every callback into an [`EventRecorder`] so the session
/// can be saved as a transcript.
pub struct TerminalPresenter<W = Stdout> {
    out: W,
    sides: [SideInfo; 2],
    human: Player,
    delay: Duration,
    color: bool,
    recorder: Option<EventRecorder>,
}

impl TerminalPresenter<Stdout> {
    pub fn stdout(p1: &Combatant, p2: &Combatant, human: Player) -> Self {
        Self::new(io::stdout(), p1, p2, human)
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, p1: &Combatant, p2: &Combatant, human: Player) -> Self {
        let info = |c: &Combatant| SideInfo {
            name: c.name().to_string(),
            hp_max: c.hp_max,
        };

        Self {
            out,
            sides: [info(p1), info(p2)],
            human,
            delay: Duration::ZERO,
            color: true,
            recorder: None,
        }
    }

    /// Pause this long on every animation
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Also record every callback
    pub fn recording(mut self) -> Self {
        self.recorder = Some(EventRecorder::new());
        self
    }

    pub fn recorder(&self) -> Option<&EventRecorder> {
        self.recorder.as_ref()
    }

    pub fn into_recorder(self) -> Option<EventRecorder> {
        self.recorder
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Format an HP readout like `Magnemite HP: 50/65 (-15)`
    pub fn health_line(&self, player: Player, hp: u32, damage: u32) -> String {
        let side = &self.sides[player.index()];
        let percent = percent_of(hp, side.hp_max);

        let mut line = format!("{} HP: {}/{}", side.name, hp, side.hp_max);
        if damage > 0 {
            line.push_str(&format!(" (-{})", damage));
        }

        if self.color {
            format!("{}{}{}", HealthBand::from_percent(percent).ansi(), line, RESET)
        } else {
            line
        }
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to write to terminal");
        }
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn side_name(&self, player: Player) -> &str {
        &self.sides[player.index()].name
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn update_health(&mut self, player: Player, hp: u32, damage: u32) {
        if let Some(recorder) = &mut self.recorder {
            recorder.update_health(player, hp, damage);
        }
        let line = self.health_line(player, hp, damage);
        self.write_line(&line);
    }

    async fn play_attack_animation(&mut self, player: Player, cue: &AnimationCue) {
        if let Some(recorder) = &mut self.recorder {
            recorder.play_attack_animation(player, cue).await;
        }
        if matches!(cue, AnimationCue::Asleep) {
            let line = format!("  ({} snores)", self.side_name(player));
            self.write_line(&line);
        }
        self.pause().await;
    }

    async fn play_damage_animation(&mut self, player: Player) {
        if let Some(recorder) = &mut self.recorder {
            recorder.play_damage_animation(player).await;
        }
        self.pause().await;
    }

    async fn play_defeat_animation(&mut self, player: Player) {
        if let Some(recorder) = &mut self.recorder {
            recorder.play_defeat_animation(player).await;
        }
        let line = format!("  ({} faints)", self.side_name(player));
        self.write_line(&line);
        self.pause().await;
    }

    fn announce(&mut self, message: &str) {
        if let Some(recorder) = &mut self.recorder {
            recorder.announce(message);
        }
        self.write_line(message);
    }

    fn announce_winner(&mut self, player: Player, name: &str) {
        if let Some(recorder) = &mut self.recorder {
            recorder.announce_winner(player, name);
        }
        let line = if player == self.human {
            format!("*** You win with {}! ***", name)
        } else {
            format!("*** {} beat you. ***", name)
        };
        self.write_line(&line);
    }

    fn set_input_enabled(&mut self, player: Player, enabled: bool) {
        if let Some(recorder) = &mut self.recorder {
            recorder.set_input_enabled(player, enabled);
        }
    }

    async fn set_weather(&mut self, weather: Weather, previous: Weather) {
        if let Some(recorder) = &mut self.recorder {
            recorder.set_weather(weather, previous).await;
        }
        if weather != previous {
            let line = format!("[weather: {} -> {}]", previous.to_protocol(), weather.to_protocol());
            self.write_line(&line);
        }
        self.pause().await;
    }

    async fn weather_continues(&mut self, weather: Weather) {
        if let Some(recorder) = &mut self.recorder {
            recorder.weather_continues(weather).await;
        }
        self.pause().await;
    }
}
