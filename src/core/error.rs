//! Error types for plan validation and battle resolution.

use thiserror::Error;

use super::command::Command;
use super::fighter_id::FighterId;

/// Why a plan was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlanViolation {
    #[error("plan has {actual} commands, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("unknown command {symbol:?} at turn {}", position + 1)]
    UnknownCommand { position: usize, symbol: char },

    #[error("{planned} {command} commands planned, at most {limit} allowed")]
    OverLimit {
        command: Command,
        limit: u8,
        planned: usize,
    },

    #[error("plan belongs to {actual}, expected {expected}")]
    WrongFighter { expected: FighterId, actual: FighterId },
}

#[derive(Debug, Error)]
pub enum BattleError {
    /// The plan breaks a planning rule. Recoverable by replanning.
    #[error("invalid plan for {fighter}: {reason}")]
    InvalidPlan {
        fighter: FighterId,
        reason: PlanViolation,
    },

    /// A command was played with no uses left.
    ///
    /// Validated plans can never trigger this; seeing it means validation
    /// was bypassed.
    #[error("{fighter} has no {command} uses left on turn {turn}")]
    ResourceExhausted {
        fighter: FighterId,
        command: Command,
        turn: u8,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("replay codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BattleError {
    /// Shorthand for an `InvalidPlan` error.
    pub fn invalid_plan(fighter: FighterId, reason: PlanViolation) -> Self {
        Self::InvalidPlan { fighter, reason }
    }

    /// True for errors the caller can fix by submitting a different plan.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidPlan { .. })
    }
}

pub type Result<T> = std::result::Result<T, BattleError>;
