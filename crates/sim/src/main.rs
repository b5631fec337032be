//! Headless brawler driver.
//!
//! Runs a [`GameSession`] at a fixed 60 Hz with a scripted input source and
//! prints where the run ended up. Useful for soak runs, balance checks and
//! reproducing a seed.
//!
//! ```bash
//! RUST_LOG=brawl_runtime=debug cargo run -p brawl-sim -- --frames 7200 --seed 42
//! ```

mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use brawl_core::{GameEvent, HitKind};
use brawl_runtime::{GameSession, RuntimeConfig, SessionStatus};
use clap::Parser;
use script::{Script, ScriptKind};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const FRAME_DT: f32 = 1.0 / 60.0;

/// Run a brawler session without a window
#[derive(Parser)]
#[command(name = "brawl-sim", long_about = None)]
#[command(version)]
struct Cli {
    /// Frames to simulate at 60 Hz
    #[arg(short, long, default_value = "3600")]
    frames: u64,

    /// Session seed (overrides BRAWL_SEED and the session file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory holding config.{toml,ron} and session.{toml,ron}
    #[arg(short, long, value_name = "DIR")]
    config: Option<PathBuf>,

    /// Input source driving the player
    #[arg(long, value_enum, default_value = "brawler")]
    script: ScriptKind,
}

#[derive(Debug, Default)]
struct Tally {
    kills: u32,
    hits_taken: u32,
    orbs: u32,
    levels_cleared: u32,
}

impl Tally {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::EloGained { .. } => self.kills += 1,
            GameEvent::Hit(HitKind::PlayerHit) => self.hits_taken += 1,
            GameEvent::OrbCollected { .. } => self.orbs += 1,
            GameEvent::LevelCleared { .. } => self.levels_cleared += 1,
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (for BRAWL_SEED and RUST_LOG)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(dir) => RuntimeConfig::load(dir)
            .with_context(|| format!("failed to load config from {}", dir.display()))?,
        None => RuntimeConfig::default(),
    }
    .with_env_overrides()
    .context("invalid environment override")?;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    info!(seed = config.seed, frames = cli.frames, script = ?cli.script, "starting simulation");
    let mut session = GameSession::new(config).context("failed to start session")?;
    let mut script = Script::new(cli.script);
    let mut tally = Tally::default();

    for _ in 0..cli.frames {
        let input = script.next_input(&session.frame_view());
        let report = session.tick(FRAME_DT, input);
        report.events.iter().for_each(|event| tally.record(event));
        if report.status == SessionStatus::GameOver {
            break;
        }
    }

    let player = &session.world().entities.player;
    info!(frame = session.frame(), status = %session.status(), "simulation finished");
    println!("frames:         {}", session.frame());
    println!("status:         {}", session.status());
    println!("level:          {}", session.level());
    println!("elo:            {}", session.elo());
    println!(
        "hp:             {:.1} / {:.1}",
        player.health().current(),
        player.health().max()
    );
    println!("kills:          {}", tally.kills);
    println!("hits taken:     {}", tally.hits_taken);
    println!("orbs collected: {}", tally.orbs);
    println!("levels cleared: {}", tally.levels_cleared);
    Ok(())
}

/// Logs go to stderr so the summary on stdout stays clean.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
