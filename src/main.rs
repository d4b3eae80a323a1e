//! Creature Arena - Entry Point
//!
//! Interactive terminal frontend for the arena engine. It sets up the
//! async runtime, wires the catalog provider, and runs a command loop:
//! draw two creatures, bet on one, watch the resolution land, repeat.

use creature_arena::arena::{ArenaEngine, ArenaPhase, AudioCue, FrontendEvent, NoticeKind};
use creature_arena::catalog::{CreatureProvider, HttpCatalog, StubCatalog};
use creature_arena::core::error::{ArenaError, Result};
use creature_arena::core::{DifficultyTier, GameConfig, Side};

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(
    name = "creature-arena",
    about = "Draw two creatures, back one, settle the wager"
)]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the draw rng (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Override the battle resolution delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Override the catalog base URL
    #[arg(long)]
    catalog_url: Option<String>,

    /// Play against the built-in synthetic catalog (no network)
    #[arg(long)]
    offline: bool,
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("creature_arena=info")
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(delay_ms) = args.delay_ms {
        config.resolve_delay_ms = delay_ms;
    }
    if let Some(catalog_url) = &args.catalog_url {
        config.catalog_base_url = catalog_url.clone();
    }
    config.validate().map_err(ArenaError::InvalidConfig)?;

    tracing::info!("Creature Arena starting...");

    // Create the async runtime for catalog fetches and battle delays
    let rt = Runtime::new()?;

    let provider: Box<dyn CreatureProvider> = if args.offline {
        tracing::info!("offline mode - synthetic catalog");
        Box::new(StubCatalog::new())
    } else {
        Box::new(HttpCatalog::new(config.catalog_base_url.clone()))
    };

    let mut engine = match args.seed {
        Some(seed) => ArenaEngine::with_seed(config, seed),
        None => ArenaEngine::new(config),
    };
    let mut difficulty = DifficultyTier::default();
    let mut muted = false;

    // Display welcome message
    println!("\n=== CREATURE ARENA ===");
    println!("Two creatures enter. Back one of them.");
    println!();
    println!("Commands:");
    println!("  draw / d             - Draw two creatures from the catalog");
    println!("  bet a | bet b        - Back a creature (starts the battle)");
    println!("  difficulty <tier>    - easy, normal, or hard");
    println!("  score                - Show wins and losses");
    println!("  history / h          - Show recent battles");
    println!("  mute                 - Toggle sound cues");
    println!("  reset                - Clear the round, score, and history");
    println!("  quit / q             - Exit the arena");
    println!();

    // Main game loop
    loop {
        display_status(&engine, difficulty);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "draw" || input == "d" {
            // errors are also surfaced through the event queue
            let _ = rt.block_on(engine.draw(difficulty, &*provider));
            flush_events(&mut engine, muted);
            continue;
        }

        if input == "bet a" || input == "bet b" {
            let side = if input.ends_with('a') { Side::A } else { Side::B };
            match engine.place_bet(side) {
                Some(ticket) => {
                    flush_events(&mut engine, muted);
                    println!("Battle underway...");
                    if let Some(report) = rt.block_on(engine.resolve(ticket)) {
                        flush_events(&mut engine, muted);
                        println!(
                            "Winner: {} ({:.0} vs {:.0})",
                            report.winner_name.to_uppercase(),
                            report.power_a,
                            report.power_b
                        );
                    }
                }
                None => println!("No bet taken - draw a round first."),
            }
            continue;
        }

        if let Some(tier) = input.strip_prefix("difficulty ") {
            match tier.parse::<DifficultyTier>() {
                Ok(tier) => {
                    difficulty = tier;
                    println!("Difficulty set to {}.", difficulty.label());
                }
                Err(e) => println!("{}", e),
            }
            continue;
        }

        if input == "score" {
            let tally = engine.tally();
            println!("Wins: {}  Losses: {}", tally.wins, tally.losses);
            continue;
        }

        if input == "history" || input == "h" {
            if engine.history().is_empty() {
                println!("No battles yet.");
            }
            for entry in engine.history().entries() {
                println!(
                    "  {} vs {} - winner {} ({})",
                    entry.name_a, entry.name_b, entry.winner, entry.timestamp
                );
            }
            continue;
        }

        if input == "mute" {
            muted = !muted;
            println!("Sound {}.", if muted { "off" } else { "on" });
            continue;
        }

        if input == "reset" {
            engine.reset();
            println!("Arena reset.");
            continue;
        }

        println!("Unknown command. Available: draw, bet a, bet b, difficulty <tier>, score, history, mute, reset, quit");
    }

    let tally = engine.tally();
    println!(
        "\nGoodbye! Final score: {} wins, {} losses.",
        tally.wins, tally.losses
    );
    Ok(())
}

/// Display the current round and score
fn display_status(engine: &ArenaEngine, difficulty: DifficultyTier) {
    let tally = engine.tally();
    println!();
    println!(
        "--- {} | Wins: {} Losses: {} | Phase: {:?} ---",
        difficulty.label(),
        tally.wins,
        tally.losses,
        engine.phase()
    );

    if let Some(round) = engine.round() {
        for (label, combatant) in [("A", &round.combatant_a), ("B", &round.combatant_b)] {
            let stats: Vec<String> = combatant
                .stats
                .iter()
                .map(|s| format!("{} {}", s.name, s.base_value))
                .collect();
            println!(
                "  [{}] {} ({}) - {}",
                label,
                combatant.name,
                combatant.types.join("/"),
                stats.join(", ")
            );
        }
        if let Some(winner) = round.winner_combatant() {
            println!("  Winner: {}", winner.name.to_uppercase());
        } else if engine.phase() == ArenaPhase::Ready {
            println!("  Place your bet: bet a | bet b");
        }
    }
}

/// Print queued notices and cues; cues respect the mute toggle
fn flush_events(engine: &mut ArenaEngine, muted: bool) {
    for event in engine.drain_events() {
        match event {
            FrontendEvent::Notice {
                title,
                kind,
                message,
            } => {
                let tag = match kind {
                    NoticeKind::Info => "i",
                    NoticeKind::Success => "+",
                    NoticeKind::Error => "!",
                };
                println!("[{}] {} {}", tag, title, message);
            }
            FrontendEvent::Cue(cue) if !muted => {
                let sound = match cue {
                    AudioCue::Appear => "*rustle*",
                    AudioCue::Clash => "*clash*",
                    AudioCue::Win => "*fanfare*",
                    AudioCue::Lose => "*trombone*",
                };
                println!("{}", sound);
            }
            FrontendEvent::Cue(_) => {}
        }
    }
}
