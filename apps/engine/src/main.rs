//! doko-inspect: load a snapshot (or deal a seeded demo hand), feed it to an
//! engine and print what the presentation layer would see.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use doko_engine::domain::rules::PLAYERS;
use doko_engine::domain::{deal_hands, GameSnapshot, GameVariant, PlayerId};
use doko_engine::report::Report;
use doko_engine::telemetry::init_tracing;
use doko_engine::{Engine, EngineConfig};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "doko-inspect")]
#[command(about = "Inspect the engine's view of a Doppelkopf snapshot")]
struct Args {
    /// Snapshot JSON file; a seeded demo deal is used when omitted
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Seed for the demo deal
    #[arg(long, default_value = "1")]
    seed: u64,

    /// Seat to inspect, 0..=3 (overrides DOKO_LOCAL_SEAT)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..PLAYERS as i64))]
    seat: Option<PlayerId>,

    /// Variant for the demo deal
    #[arg(long, default_value = "normal")]
    variant: VariantArg,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    Normal,
    Fleshless,
    JackSolo,
    QueenSolo,
    KingSolo,
    TrumpSolo,
    Hochzeit,
}

impl From<VariantArg> for GameVariant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Normal => GameVariant::Normal,
            VariantArg::Fleshless => GameVariant::Fleshless,
            VariantArg::JackSolo => GameVariant::JackSolo,
            VariantArg::QueenSolo => GameVariant::QueenSolo,
            VariantArg::KingSolo => GameVariant::KingSolo,
            VariantArg::TrumpSolo => GameVariant::TrumpSolo,
            VariantArg::Hochzeit => GameVariant::Hochzeit,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    if args.json_logs {
        init_tracing(filter);
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let mut config = EngineConfig::from_env()?;
    if let Some(seat) = args.seat {
        config.local_seat = seat;
    }
    debug!(?config, "configuration loaded");

    let snapshot = match &args.snapshot {
        Some(path) => {
            info!(path = %path.display(), "loading snapshot");
            let raw = fs::read_to_string(path)?;
            serde_json::from_str::<GameSnapshot>(&raw)?
        }
        None => {
            info!(seed = args.seed, variant = ?args.variant, "dealing demo hand");
            let hands = deal_hands(args.seed);
            let hand = hands
                .get(config.local_seat as usize)
                .cloned()
                .ok_or("local seat must be 0..=3")?;
            GameSnapshot::opening(hand, config.local_seat, args.variant.into())
        }
    };

    let mut engine = Engine::new(config);
    engine.apply_snapshot(snapshot)?;
    let report = Report::from_engine(&engine);

    match args.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
