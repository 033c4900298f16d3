//! Rule-based CPU plan builder.
//!
//! Reads the opponent's plan and answers it:
//! 1. Counters go on turns the opponent attacks.
//! 2. Blocks prefer the middle of the battle, then opponent attack turns.
//! 3. Attacks fill shuffled empty turns up to the limit.
//! 4. Everything else is Idle.

use tracing::debug;

use crate::core::{BattleConfig, Command, GameRng, Result};
use crate::plan::Plan;

/// Builds a counter-plan for the opponent of a given plan.
#[derive(Clone, Debug, Default)]
pub struct CpuPlanner {
    config: BattleConfig,
}

impl CpuPlanner {
    /// 0-indexed turns where blocks are placed first.
    pub const PREFERRED_BLOCK_TURNS: std::ops::RangeInclusive<usize> = 4..=8;

    #[must_use]
    pub fn new(config: BattleConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Build a plan for `opponent.fighter().opponent()`.
    ///
    /// The result always respects the configured limits.
    pub fn build(&self, opponent: &Plan, rng: &mut GameRng) -> Result<Plan> {
        let turns = usize::from(self.config.turns);
        let limits = self.config.limits;
        let mut plan = vec![Command::Idle; turns];

        let attack_turns: Vec<usize> = opponent.turns_with(Command::Attack).filter(|&t| t < turns).collect();

        // 1) Counters on opponent attack turns.
        let mut counter_turns = attack_turns.clone();
        rng.shuffle(&mut counter_turns);
        for &turn in counter_turns.iter().take(usize::from(limits.counter)) {
            plan[turn] = Command::Counter;
        }

        // 2) Blocks: mid-game first, then leftover opponent attack turns.
        let mut blocks_left = usize::from(limits.block);
        let mut mid_game: Vec<usize> = Self::PREFERRED_BLOCK_TURNS.filter(|&t| t < turns).collect();
        rng.shuffle(&mut mid_game);
        for turn in mid_game.into_iter().chain(attack_turns.iter().copied()) {
            if blocks_left == 0 {
                break;
            }
            if plan[turn] == Command::Idle {
                plan[turn] = Command::Block;
                blocks_left -= 1;
            }
        }

        // 3) Attacks on shuffled empty turns.
        let mut empty: Vec<usize> = (0..turns).filter(|&t| plan[t] == Command::Idle).collect();
        rng.shuffle(&mut empty);
        for &turn in empty.iter().take(usize::from(limits.attack)) {
            plan[turn] = Command::Attack;
        }

        let fighter = opponent.fighter().opponent();
        let plan = Plan::for_config(fighter, plan, &self.config)?;
        debug!(fighter = %fighter, plan = %plan, "cpu plan built");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FighterId;

    fn opponent(source: &str) -> Plan {
        Plan::parse(FighterId::A, source, &BattleConfig::default()).unwrap()
    }

    #[test]
    fn test_plan_is_for_the_other_fighter() {
        let planner = CpuPlanner::default();
        let plan = planner.build(&opponent("AAAAABBCIIII"), &mut GameRng::new(1)).unwrap();
        assert_eq!(plan.fighter(), FighterId::B);
        assert_eq!(plan.len(), 12);
    }

    #[test]
    fn test_counter_lands_on_attack_turn() {
        let planner = CpuPlanner::default();
        let opp = opponent("IIAIIIIIIAII");

        for seed in 0..20 {
            let plan = planner.build(&opp, &mut GameRng::new(seed)).unwrap();
            let counter_turns: Vec<_> = plan.turns_with(Command::Counter).collect();
            assert_eq!(counter_turns.len(), 1);
            assert!([2, 9].contains(&counter_turns[0]));
        }
    }

    #[test]
    fn test_no_counter_against_passive_plan() {
        let planner = CpuPlanner::default();
        let plan = planner.build(&opponent("IIIIIIIIIIII"), &mut GameRng::new(3)).unwrap();
        assert_eq!(plan.count(Command::Counter), 0);
    }

    #[test]
    fn test_blocks_prefer_mid_game() {
        let planner = CpuPlanner::default();
        let plan = planner.build(&opponent("IIIIIIIIIIII"), &mut GameRng::new(5)).unwrap();
        let blocks: Vec<_> = plan.turns_with(Command::Block).collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|t| CpuPlanner::PREFERRED_BLOCK_TURNS.contains(t)));
    }

    #[test]
    fn test_uses_full_limits() {
        let planner = CpuPlanner::default();
        let plan = planner.build(&opponent("AAAAAIIIIIII"), &mut GameRng::new(9)).unwrap();
        assert_eq!(plan.count(Command::Attack), 5);
        assert_eq!(plan.count(Command::Block), 2);
        assert_eq!(plan.count(Command::Counter), 1);
        assert_eq!(plan.count(Command::Idle), 4);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let planner = CpuPlanner::default();
        let opp = opponent("AABAACAIIIII");
        let first = planner.build(&opp, &mut GameRng::new(77)).unwrap();
        let second = planner.build(&opp, &mut GameRng::new(77)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_short_battle() {
        let config = BattleConfig::new().with_turns(3);
        let planner = CpuPlanner::new(config.clone());
        let opp = Plan::parse(FighterId::B, "AAA", &config).unwrap();
        let plan = planner.build(&opp, &mut GameRng::new(2)).unwrap();
        assert_eq!(plan.fighter(), FighterId::A);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.count(Command::Counter), 1);
    }
}
