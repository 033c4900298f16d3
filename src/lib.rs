//! # command-battle
//!
//! A deterministic resolver for planned, turn-based "command battles".
//!
//! Two fighters each commit a plan of 12 commands (Attack, Block, Counter or
//! Idle) before the battle. The resolver plays both plans simultaneously,
//! turn by turn, stops on a knockout, and settles a battle both fighters
//! survive with a single fair coin flip.
//!
//! ## Design Principles
//!
//! 1. **Validate first**: plans are checked for length and per-command caps
//!    before any turn is resolved. No partial battles.
//!
//! 2. **Pure resolution**: a battle is a function of two plans and a coin.
//!    The coin is injected (`CoinFlip`) so tests and replays are exact.
//!
//! 3. **Exact half damage**: health is tracked in half hearts, so blocked
//!    hits accumulate without rounding.
//!
//! ## Modules
//!
//! - `core`: Fighter IDs, commands, configuration, errors, RNG
//! - `plan`: Validated plans and command resource pools
//! - `rules`: The interaction table and stage pressure
//! - `battle`: Battle state machine, resolver, turn and match records
//! - `ai`: Rule-based CPU plan builder
//! - `sim`: Batch simulation over many battles
//!
//! ## Example
//!
//! ```
//! use command_battle::{BattleResolver, FighterId, FixedCoin, Plan};
//!
//! let resolver = BattleResolver::standard();
//! let a = Plan::parse(FighterId::A, "AAAAA BB C IIII", resolver.config()).unwrap();
//! let b = Plan::parse(FighterId::B, "C AAAAA BB IIII", resolver.config()).unwrap();
//!
//! let report = resolver.resolve(&a, &b, &mut FixedCoin::HEADS).unwrap();
//! assert!(report.result.winner.is_some() || report.result.is_draw());
//! ```

pub mod core;
pub mod plan;
pub mod rules;
pub mod battle;
pub mod ai;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Action, Command, CommandLimits, BattleConfig,
    BattleError, PlanViolation, Result,
    FighterId, Pair,
    CoinFlip, FixedCoin, GameRng,
};

pub use crate::plan::{Plan, ResourcePool};

pub use crate::rules::{TurnEvent, Exchange};

pub use crate::battle::{Battle, BattleReport, BattleResolver, EndReason, Fighter, MatchResult, TurnOutcome};

pub use crate::ai::CpuPlanner;

pub use crate::sim::{simulate, Opponent, SimulationConfig, SimulationStats};
