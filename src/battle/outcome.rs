//! Records produced by a battle: per-turn outcomes, the final result, and
//! the full report used for replays.

use serde::{Deserialize, Serialize};

use crate::core::{Action, BattleConfig, FighterId, Pair, Result};
use crate::plan::Plan;
use crate::rules::TurnEvent;

/// What happened on a single turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// 1-based turn number.
    pub turn: u8,

    /// Effective action of each fighter.
    pub actions: Pair<Action>,

    /// Damage actually lost this turn, in half hearts. Never more than the
    /// fighter had left.
    pub damage: Pair<u16>,

    /// Whole hearts after the turn.
    pub hearts: Pair<u8>,

    /// Health after the turn, in half hearts.
    pub half_hearts: Pair<u16>,

    /// This turn was a forced skip (the flag was consumed).
    pub skipped: Pair<bool>,

    /// The skip flag was set for the next turn.
    pub skip_set: Pair<bool>,

    /// Stage pressure after the turn.
    pub pressure: Pair<u32>,

    pub events: Vec<TurnEvent>,
}

impl TurnOutcome {
    /// Damage taken this turn in hearts (0.5 steps).
    #[must_use]
    pub fn damage_hearts(&self, fighter: FighterId) -> f32 {
        f32::from(self.damage[fighter]) / 2.0
    }

    /// Narration for this turn using the given fighter names.
    pub fn narrate(&self, name: impl Fn(FighterId) -> String) -> String {
        if self.events.is_empty() {
            return "No damage this turn.".to_string();
        }
        self.events
            .iter()
            .map(|event| event.describe(&name))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Turn {}: A[{}] vs B[{}] -> {}",
            self.turn,
            self.actions[FighterId::A].symbol(),
            self.actions[FighterId::B].symbol(),
            self.narrate(|id| id.to_string())
        )
    }
}

/// Why the battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// One fighter's hearts reached zero.
    Knockout,
    /// Both fighters reached zero on the same turn.
    DoubleKnockout,
    /// A fighter was pushed off the stage by pressure.
    StagePressure,
    /// All turns played with both standing; decided by coin flip.
    SuddenDeath,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            EndReason::Knockout => "knockout",
            EndReason::DoubleKnockout => "double knockout",
            EndReason::StagePressure => "knocked off the stage",
            EndReason::SuddenDeath => "sudden death",
        };
        f.write_str(text)
    }
}

/// Terminal record of a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// `None` only for a draw (double knockout or double knock-off).
    pub winner: Option<FighterId>,

    /// Which fighters were defeated.
    pub defeated: Pair<bool>,

    /// Turn on which the battle was decided early, if any.
    pub knockout_turn: Option<u8>,

    /// The coin flip decided the battle.
    pub sudden_death: bool,

    pub reason: EndReason,

    /// Turns actually resolved.
    pub turns_played: u8,

    /// Whole hearts at the end, before any sudden-death strike.
    pub final_hearts: Pair<u8>,
}

impl MatchResult {
    /// Check if a fighter won.
    #[must_use]
    pub fn is_winner(&self, fighter: FighterId) -> bool {
        self.winner == Some(fighter)
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Build a result where `loser` is the only defeated fighter.
    pub(crate) fn single_loser(
        loser: FighterId,
        reason: EndReason,
        knockout_turn: Option<u8>,
        turns_played: u8,
        final_hearts: Pair<u8>,
    ) -> Self {
        Self {
            winner: Some(loser.opponent()),
            defeated: Pair::from_fn(|f| f == loser),
            knockout_turn,
            sudden_death: reason == EndReason::SuddenDeath,
            reason,
            turns_played,
            final_hearts,
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Some(winner) => write!(f, "{} wins by {}", winner, self.reason)?,
            None => write!(f, "Draw by {}", self.reason)?,
        }
        if let Some(turn) = self.knockout_turn {
            write!(f, " on turn {}", turn)?;
        }
        Ok(())
    }
}

/// Complete record of a battle: inputs, turn log and result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub config: BattleConfig,
    pub plans: Pair<Plan>,
    pub turns: Vec<TurnOutcome>,
    pub result: MatchResult,
}

impl BattleReport {
    /// Encode as a compact binary replay.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a binary replay.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total hearts lost by a fighter over the battle, in half hearts.
    #[must_use]
    pub fn damage_taken(&self, fighter: FighterId) -> u16 {
        self.turns.iter().map(|t| t.damage[fighter]).sum()
    }

    /// Human-readable battle log, one turn per line plus the result.
    #[must_use]
    pub fn log_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.turns.len() * 2 + 1);
        for turn in &self.turns {
            lines.push(turn.to_string());
            lines.push(format!(
                "    Hearts: A={} | B={}",
                f32::from(turn.half_hearts[FighterId::A]) / 2.0,
                f32::from(turn.half_hearts[FighterId::B]) / 2.0
            ));
            if self.config.pressure_knockout.is_some() {
                lines.push(format!(
                    "    Pressure: A={} | B={}",
                    turn.pressure[FighterId::A],
                    turn.pressure[FighterId::B]
                ));
            }
        }
        if self.result.sudden_death {
            lines.push("Sudden Death! A single coin flip decides the winner.".to_string());
        }
        lines.push(self.result.to_string());
        lines
    }
}
