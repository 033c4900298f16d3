//! Batch simulation of many independent battles.

use tracing::info;

use crate::ai::CpuPlanner;
use crate::battle::BattleResolver;
use crate::core::{FighterId, GameRng, Result};
use crate::plan::Plan;

use super::stats::SimulationStats;

/// Who the plan under test fights.
#[derive(Clone, Debug)]
pub enum Opponent {
    /// The same plan every battle; only the sudden-death coin varies.
    Fixed(Plan),
    /// A fresh CPU counter-plan every battle.
    Cpu(CpuPlanner),
}

/// Configuration for a batch simulation.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Number of battles to resolve.
    pub games: u32,

    /// Root seed. Each battle forks its own stream from it.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 1_000,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of battles.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the root seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Resolve `config.games` battles of `plan` against `opponent`.
///
/// Every battle gets its own forked RNG, split into a planning stream and a
/// sudden-death stream, so results are reproducible for a given seed.
pub fn simulate(
    resolver: &BattleResolver,
    plan: &Plan,
    opponent: &Opponent,
    config: &SimulationConfig,
) -> Result<SimulationStats> {
    let mut root = GameRng::new(config.seed);
    let mut stats = SimulationStats::new();

    for _ in 0..config.games {
        let battle_rng = root.fork();
        let mut coin = battle_rng.for_context("sudden_death");

        let other = match opponent {
            Opponent::Fixed(other) => other.clone(),
            Opponent::Cpu(planner) => planner.build(plan, &mut battle_rng.for_context("cpu_plan"))?,
        };

        let report = match plan.fighter() {
            FighterId::A => resolver.resolve(plan, &other, &mut coin)?,
            FighterId::B => resolver.resolve(&other, plan, &mut coin)?,
        };
        stats.record(&report.result);
    }

    info!(%stats, "simulation finished");
    Ok(stats)
}
