use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use snake_env::game::GameConfig;
use snake_env::modes::{SimulateConfig, SimulateMode, parse_action_codes, replay_trace};
use snake_env::rl::EnvConfig;

#[derive(Parser)]
#[command(name = "snake_env")]
#[command(version, about = "Deterministic Snake simulation for agents")]
struct Cli {
    /// What to run
    #[arg(long, default_value = "simulate")]
    mode: Mode,

    /// JSON game config; command line values override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length
    #[arg(long)]
    board_size: Option<usize>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Episodes to play in simulate mode
    #[arg(long, default_value = "10")]
    episodes: usize,

    /// Seed for the random agent in simulate mode
    #[arg(long, default_value = "0")]
    agent_seed: u64,

    /// Hard cap on steps per episode in simulate mode
    #[arg(long)]
    max_steps: Option<usize>,

    /// Write simulate statistics to this JSON file
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Comma separated action codes for replay mode (0 up, 1 left, 2 right, 3 down, -1 none)
    #[arg(long, allow_hyphen_values = true, default_value = "")]
    actions: String,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play episodes with a random agent and report statistics
    Simulate,
    /// Run an action trace and print per-step telemetry as JSON lines
    Replay,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let game_config = build_game_config(&cli)?;

    match cli.mode {
        Mode::Simulate => {
            let config = SimulateConfig {
                env: EnvConfig::new(game_config),
                episodes: cli.episodes,
                agent_seed: cli.agent_seed,
                max_steps: cli.max_steps,
                ..Default::default()
            };
            let stats = SimulateMode::new(config)?.run()?;

            if let Some(path) = &cli.stats_out {
                stats.save(path)?;
                log::info!("statistics written to {:?}", path);
            }
        }
        Mode::Replay => {
            let actions = parse_action_codes(&cli.actions)?;
            for record in replay_trace(&game_config, &actions)? {
                let line =
                    serde_json::to_string(&record).context("Failed to serialize telemetry")?;
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn build_game_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::read(path)?,
        None => GameConfig::default(),
    };
    if let Some(board_size) = cli.board_size {
        config.board_size = board_size;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}
