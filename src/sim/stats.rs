//! Aggregated results over many battles.

use serde::{Deserialize, Serialize};

use crate::battle::{EndReason, MatchResult};
use crate::core::{FighterId, Pair};

/// Tallies collected by a batch simulation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Battles resolved.
    pub games: u32,

    /// Wins per fighter, by any means.
    pub wins: Pair<u32>,

    /// Battles without a winner.
    pub draws: u32,

    /// Battles decided by the coin flip.
    pub sudden_deaths: u32,

    /// Battles ended by hearts reaching zero (single or double).
    pub knockouts: u32,

    /// Battles ended by stage pressure.
    pub knock_offs: u32,

    /// Sum of turns played, for averaging.
    pub total_turns: u64,
}

impl SimulationStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one battle result into the tallies.
    pub fn record(&mut self, result: &MatchResult) {
        self.games += 1;
        self.total_turns += u64::from(result.turns_played);

        match result.winner {
            Some(winner) => self.wins[winner] += 1,
            None => self.draws += 1,
        }

        match result.reason {
            EndReason::Knockout | EndReason::DoubleKnockout => self.knockouts += 1,
            EndReason::StagePressure => self.knock_offs += 1,
            EndReason::SuddenDeath => self.sudden_deaths += 1,
        }
    }

    /// Fraction of battles won by `fighter`.
    #[must_use]
    pub fn win_rate(&self, fighter: FighterId) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins[fighter]) / f64::from(self.games)
        }
    }

    /// Average battle length in turns.
    #[must_use]
    pub fn avg_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / f64::from(self.games)
        }
    }
}

impl std::fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: A {:.1}% | B {:.1}% | draws {} | sudden deaths {} | knockouts {} | avg {:.2} turns",
            self.games,
            self.win_rate(FighterId::A) * 100.0,
            self.win_rate(FighterId::B) * 100.0,
            self.draws,
            self.sudden_deaths,
            self.knockouts,
            self.avg_turns()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(winner: Option<FighterId>, reason: EndReason, turns_played: u8) -> MatchResult {
        MatchResult {
            winner,
            defeated: Pair::from_fn(|f| winner != Some(f)),
            knockout_turn: None,
            sudden_death: reason == EndReason::SuddenDeath,
            reason,
            turns_played,
            final_hearts: Pair::default(),
        }
    }

    #[test]
    fn test_empty_stats() {
        let stats = SimulationStats::new();
        assert_eq!(stats.win_rate(FighterId::A), 0.0);
        assert_eq!(stats.avg_turns(), 0.0);
    }

    #[test]
    fn test_record() {
        let mut stats = SimulationStats::new();
        stats.record(&result(Some(FighterId::A), EndReason::Knockout, 4));
        stats.record(&result(Some(FighterId::B), EndReason::SuddenDeath, 12));
        stats.record(&result(None, EndReason::DoubleKnockout, 8));
        stats.record(&result(Some(FighterId::A), EndReason::StagePressure, 8));

        assert_eq!(stats.games, 4);
        assert_eq!(stats.wins, Pair::new(2, 1));
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.sudden_deaths, 1);
        assert_eq!(stats.knockouts, 2);
        assert_eq!(stats.knock_offs, 1);
        assert!((stats.win_rate(FighterId::A) - 0.5).abs() < 1e-9);
        assert!((stats.avg_turns() - 8.0).abs() < 1e-9);
    }
}
