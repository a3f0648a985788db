//! Pixel Jumper entry point
//!
//! Headless runner: drives a session with the seeded autopilot, logs the HUD
//! and records the final score.
//!
//! Usage:
//!   pixel-jumper run --seed 42 --max-ticks 3600
//!   pixel-jumper scores
//!   RUST_LOG=debug pixel-jumper run --realtime

use std::path::PathBuf;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use pixel_jumper::audio::AudioManager;
use pixel_jumper::highscores::{HighScoreFile, MemoryScoreStore, ScoreStore, format_table};
use pixel_jumper::platform::{Autopilot, Clock, FixedStepClock, InputSource, SystemClock};
use pixel_jumper::renderer::{LogRenderer, Renderer};
use pixel_jumper::settings::DEFAULT_SETTINGS_PATH;
use pixel_jumper::sim::Snapshot;
use pixel_jumper::{Session, Settings};

#[derive(Parser)]
#[command(name = "pixel-jumper")]
#[command(about = "Run the Pixel Jumper simulation headless")]
struct Cli {
    /// Settings file
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play one session with the autopilot
    Run(RunArgs),
    /// Print the high score table
    Scores,
    /// Write the current settings (defaults if none) to the settings file
    InitConfig,
}

#[derive(Args)]
struct RunArgs {
    /// Spawner seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Quit after this many ticks
    #[arg(long, default_value_t = 3600)]
    max_ticks: u64,

    /// Pace ticks against the wall clock instead of simulating time
    #[arg(long)]
    realtime: bool,

    /// Keep the score in memory instead of writing the high score file
    #[arg(long)]
    no_save: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Printed at the end of `run`
#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    end_reason: &'static str,
    score: u64,
    lives: u32,
    ticks: u64,
    score_saved: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config);

    match cli.command {
        Command::Run(args) => run(&settings, &args),
        Command::Scores => {
            let scores = HighScoreFile::new(&settings.highscore_path).load();
            for line in format_table(&scores) {
                println!("{line}");
            }
            Ok(())
        }
        Command::InitConfig => settings
            .save(&cli.config)
            .with_context(|| format!("failed to write {}", cli.config.display())),
    }
}

fn run(settings: &Settings, args: &RunArgs) -> Result<()> {
    let seed = args.seed.or(settings.seed).unwrap_or_else(clock_seed);
    log::info!("Pixel Jumper starting (seed {})", seed);

    let summary = if args.no_save {
        play(settings, args, seed, MemoryScoreStore::new())?
    } else {
        play(settings, args, seed, HighScoreFile::new(&settings.highscore_path))?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Game over ({})", summary.end_reason);
        println!("  Seed:   {}", summary.seed);
        println!("  Score:  {}", summary.score);
        println!("  Lives:  {}", summary.lives);
        println!("  Ticks:  {}", summary.ticks);
        if summary.score_saved {
            println!("  Score recorded");
        }
    }
    Ok(())
}

fn play<S: ScoreStore>(settings: &Settings, args: &RunArgs, seed: u64, store: S) -> Result<RunSummary> {
    let audio = AudioManager::new("sounds", settings);
    let mut pilot = Autopilot::new(seed).with_max_ticks(args.max_ticks);
    let mut renderer = LogRenderer::new();

    let mut clock: Box<dyn Clock> = if args.realtime {
        Box::new(SystemClock::new())
    } else {
        Box::new(FixedStepClock::new(settings.tick_rate_hz))
    };

    let mut session = Session::start(seed, clock.now_ms(), store, Box::new(audio))
        .with_player_name(settings.player_name.clone());
    let mut frame = Snapshot::capture(session.state());

    loop {
        let input = pilot.poll(&frame);
        let report = session.tick(clock.sample(), &input)?;
        frame = report.snapshot;
        renderer.draw(&frame);

        if !report.still_running {
            break;
        }
        if args.realtime {
            thread::sleep(settings.tick_duration());
        }
    }

    let state = session.state();
    Ok(RunSummary {
        seed,
        end_reason: session.end_reason().map(|r| r.as_str()).unwrap_or("running"),
        score: session.score(),
        lives: state.player.lives,
        ticks: state.time_ticks,
        score_saved: session.score_persisted(),
    })
}

/// Seed from the wall clock when none was given
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
