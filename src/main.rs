//! Elysium — headless session driver
//!
//! Usage:
//!   elysium                 play the full council session and exit
//!   elysium --cadence-ms 500 --seed 7
//!
//! Spawns the orchestration engine, activates the gateway, and streams the
//! council discussion, directives, and phase transitions to the terminal
//! until the script completes and the suite ascends. After ascension it
//! sends one Architect message to demonstrate the free-form channel.

use clap::Parser;
use elysium_core::{MessageKind, SystemPhase};
use elysium_engine::{Engine, EngineConfig, EngineUpdate};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "elysium", about = "Scripted orchestration for the Elysium suite")]
struct Cli {
    /// Path to config file (TOML). Default: ./elysium.toml
    #[arg(long)]
    config: Option<String>,

    /// Dump default config as TOML and exit.
    #[arg(long)]
    dump_config: bool,

    /// Seed for the engine's random generator (deterministic runs).
    #[arg(long)]
    seed: Option<u64>,

    /// Override the script cadence in milliseconds.
    #[arg(long)]
    cadence_ms: Option<u64>,

    /// Message the Architect sends after ascension.
    #[arg(long, default_value = "The work is complete. Thank you.")]
    message: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "elysium=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if cli.dump_config {
        println!("{}", EngineConfig::default().to_toml());
        return Ok(());
    }

    let config_path = cli
        .config
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("elysium.toml"));
    let mut config = EngineConfig::load(&config_path);
    if let Some(seed) = cli.seed {
        config.rng_seed = Some(seed);
    }
    if let Some(cadence) = cli.cadence_ms {
        config.cadence_ms = cadence;
    }

    println!("╔══════════════════════════════════════════════╗");
    println!("║   ELYSIUM SUITE v{}                       ║", env!("CARGO_PKG_VERSION"));
    println!("║   Autonomous Council Orchestration           ║");
    println!("╚══════════════════════════════════════════════╝");

    let (handle, join) = Engine::spawn(config);
    let mut updates = handle.subscribe();

    handle.toggle_gateway(true).await?;
    info!("Elysium Gateway activated");

    let mut ascended = false;
    let mut exhausted = false;
    let mut message_sent = false;
    let mut replies_pending = 0u32;

    while let Ok(update) = updates.recv().await {
        match update {
            EngineUpdate::MessageAppended { message } => {
                let marker = match message.kind {
                    MessageKind::Directive => " [DIRECTIVE]",
                    MessageKind::Thought => "",
                };
                println!("  {}{}: {}", message.speaker, marker, message.text);
                if message_sent && replies_pending > 0 {
                    replies_pending -= 1;
                    if replies_pending == 0 {
                        break;
                    }
                }
            }
            EngineUpdate::PhaseChanged { phase } => {
                info!("system phase: {}", phase);
                if phase == SystemPhase::Ascended {
                    ascended = true;
                }
            }
            EngineUpdate::ToolChanged { tool } => {
                debug!("{} -> {}", tool.name, tool.status);
            }
            EngineUpdate::ScriptExhausted => {
                info!("council script complete");
                exhausted = true;
            }
            _ => {}
        }

        if ascended && exhausted && !message_sent {
            handle.send_architect_message(cli.message.clone()).await?;
            message_sent = true;
            // The Architect's own message plus one persona reply.
            replies_pending = 2;
        }
    }

    let snapshot = handle.snapshot().await?;
    println!(
        "\nSession closed: {} messages, phase {}",
        snapshot.discussion.len(),
        snapshot.phase
    );

    handle.shutdown().await?;
    join.await?;
    Ok(())
}
