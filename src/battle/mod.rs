//! Battle resolution.
//!
//! - `BattleResolver`: validates two plans and resolves a whole battle
//! - `Battle`: the underlying one-turn-at-a-time state machine
//! - `Fighter`: hearts, resources, skip flag and pressure for one side
//! - `TurnOutcome`, `MatchResult`, `BattleReport`: what comes out

mod fighter;
mod outcome;
mod resolver;
mod state;

pub use fighter::Fighter;
pub use outcome::{BattleReport, EndReason, MatchResult, TurnOutcome};
pub use resolver::BattleResolver;
pub use state::Battle;
