//! Command Battle CLI
//!
//! Resolves one battle between two plans (or a plan and the CPU) and prints
//! the turn log, or runs a batch simulation with `--games`.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use command_battle::{
    simulate, BattleConfig, BattleResolver, CpuPlanner, FighterId, GameRng, Opponent, Plan, SimulationConfig,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Command Battle - resolve planned 12-turn battles
#[derive(Parser, Debug)]
#[command(name = "command-battle")]
#[command(about = "Resolve a planned command battle between two fighters")]
struct Args {
    /// Fighter A's plan as letter codes, e.g. "AAB CII AAIB IA"
    #[arg(long)]
    plan_a: String,

    /// Fighter B's plan. Omit to let the CPU plan against A.
    #[arg(long)]
    plan_b: Option<String>,

    /// Pad short plans with Idle instead of rejecting them
    #[arg(long)]
    pad: bool,

    /// Random seed for the CPU plan and sudden death
    #[arg(long)]
    seed: Option<u64>,

    /// TOML rules file (turns, hearts, limits, pressure_knockout)
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Run this many battles and print aggregate statistics
    #[arg(long)]
    games: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable per-turn debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// JSON output for a batch run.
#[derive(Serialize)]
struct SimulationOutput<'a> {
    seed: u64,
    plan_a: String,
    stats: &'a command_battle::SimulationStats,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "battle failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> command_battle::Result<()> {
    let config = match &args.config {
        Some(path) => BattleConfig::load(path)?,
        None => BattleConfig::default(),
    };
    let resolver = BattleResolver::new(config.clone())?;
    let seed = args.seed.unwrap_or_else(rand::random);

    let plan_a = parse_plan(FighterId::A, &args.plan_a, args.pad, &config)?;
    let plan_b = args
        .plan_b
        .as_deref()
        .map(|source| parse_plan(FighterId::B, source, args.pad, &config))
        .transpose()?;

    if let Some(games) = args.games {
        let opponent = match plan_b {
            Some(plan) => Opponent::Fixed(plan),
            None => Opponent::Cpu(CpuPlanner::new(config)),
        };
        let sim = SimulationConfig::new().with_games(games).with_seed(seed);
        let stats = simulate(&resolver, &plan_a, &opponent, &sim)?;

        match args.format {
            Format::Text => println!("{}", stats),
            Format::Json => {
                let output = SimulationOutput {
                    seed,
                    plan_a: plan_a.to_string(),
                    stats: &stats,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        return Ok(());
    }

    let rng = GameRng::new(seed);
    let plan_b = match plan_b {
        Some(plan) => plan,
        None => CpuPlanner::new(config).build(&plan_a, &mut rng.for_context("cpu_plan"))?,
    };
    let report = resolver.resolve(&plan_a, &plan_b, &mut rng.for_context("sudden_death"))?;

    match args.format {
        Format::Text => {
            println!("Seed: {}", seed);
            println!("A: {}", report.plans[FighterId::A]);
            println!("B: {}", report.plans[FighterId::B]);
            for line in report.log_lines() {
                println!("{}", line);
            }
        }
        Format::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn parse_plan(fighter: FighterId, source: &str, pad: bool, config: &BattleConfig) -> command_battle::Result<Plan> {
    if pad {
        Plan::parse_padded(fighter, source, config)
    } else {
        Plan::parse(fighter, source, config)
    }
}
