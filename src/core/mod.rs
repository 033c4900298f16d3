//! Core types: fighters, commands, configuration, errors, RNG.
//!
//! Everything else in the crate builds on these.

pub mod command;
pub mod config;
pub mod error;
pub mod fighter_id;
pub mod rng;

pub use command::{Action, Command};
pub use config::{BattleConfig, CommandLimits};
pub use error::{BattleError, PlanViolation, Result};
pub use fighter_id::{FighterId, Pair};
pub use rng::{CoinFlip, FixedCoin, GameRng};
