use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use duel_client::{
    Battle, BattleConfig, MoveCatalog, Outcome, TerminalPresenter, load_config, load_view, render,
    run_auto, run_interactive,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "duel", version, about = "Turn-based two-creature battles in the terminal")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play {
        /// Creature to control (roster key)
        #[arg(long = "as")]
        creature: Option<String>,
        /// RNG seed for a reproducible battle
        #[arg(short, long)]
        seed: Option<u64>,
        /// JSON battle config
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Save the event transcript here
        #[arg(short, long)]
        transcript: Option<PathBuf>,
        /// Pause after each animation, in milliseconds
        #[arg(long, default_value = "400")]
        delay_ms: u64,
        /// Disable coloured HP readouts
        #[arg(long)]
        no_color: bool,
    },
    /// Let both sides pick random moves
    Auto {
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Stop after this many rounds (defaults to the config's limit)
        #[arg(short, long)]
        rounds: Option<u32>,
        #[arg(short, long)]
        transcript: Option<PathBuf>,
        #[arg(long, default_value = "0")]
        delay_ms: u64,
    },
    /// Print a saved transcript and its final state
    Replay {
        /// Transcript file
        file: PathBuf,
    },
    /// List the move catalog
    Moves,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play {
            creature,
            seed,
            config,
            transcript,
            delay_ms,
            no_color,
        } => {
            let mut config = load_config(config.as_deref()).await?;
            if let Some(creature) = creature {
                config = config.playing_as(&creature)?;
            }
            config.seed = seed.or(config.seed);

            let presenter = terminal_presenter(&config, delay_ms, !no_color, transcript.is_some())?;
            let mut battle = Battle::from_config(&config, presenter)?;

            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let outcome = run_interactive(&mut battle, stdin).await?;
            report(&outcome);

            save_transcript(battle.into_presenter(), transcript.as_deref()).await?;
        }
        Commands::Auto {
            seed,
            config,
            rounds,
            transcript,
            delay_ms,
        } => {
            let mut config = load_config(config.as_deref()).await?;
            config.seed = seed.or(config.seed);
            let max_rounds = rounds.unwrap_or(config.max_rounds);

            let presenter = terminal_presenter(&config, delay_ms, true, transcript.is_some())?;
            let mut battle = Battle::from_config(&config, presenter)?;
            let mut picker = match config.seed {
                Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(1)),
                None => SmallRng::from_entropy(),
            };

            let outcome = run_auto(&mut battle, &mut picker, max_rounds).await;
            report(&outcome);

            save_transcript(battle.into_presenter(), transcript.as_deref()).await?;
        }
        Commands::Replay { file } => {
            let view = load_view(&file).await?;
            render(&view, &mut std::io::stdout().lock()).context("Failed to print replay")?;
        }
        Commands::Moves => {
            for data in MoveCatalog::builtin().iter() {
                println!(
                    "{:<14} {:<9} {:>3}  {}",
                    data.name,
                    data.move_type.as_str(),
                    data.power,
                    data.description
                );
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn terminal_presenter(
    config: &BattleConfig,
    delay_ms: u64,
    color: bool,
    record: bool,
) -> Result<TerminalPresenter> {
    let [p1, p2] = config.combatants(&MoveCatalog::builtin())?;
    let presenter = TerminalPresenter::stdout(&p1, &p2, config.human)
        .with_delay(Duration::from_millis(delay_ms))
        .with_color(color);

    Ok(if record {
        presenter.recording()
    } else {
        presenter
    })
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Won { player, name } => println!("{} ({}) won.", name, player),
        Outcome::Abandoned => println!("Battle abandoned."),
        Outcome::RoundLimit(rounds) => println!("No winner after {} rounds.", rounds),
    }
}

async fn save_transcript(presenter: TerminalPresenter, path: Option<&Path>) -> Result<()> {
    let (Some(path), Some(recorder)) = (path, presenter.into_recorder()) else {
        return Ok(());
    };

    tokio::fs::write(path, recorder.to_transcript())
        .await
        .with_context(|| format!("Failed to write transcript {}", path.display()))?;
    info!(path = %path.display(), events = recorder.events().len(), "transcript saved");
    Ok(())
}
