//! Turn rules.
//!
//! - `interaction`: the symmetric command interaction table
//! - `pressure`: the optional stage-pressure knock-off rule
//!
//! Both are pure functions; the battle state machine owns all mutation.

pub mod interaction;
pub mod pressure;

pub use interaction::{resolve_exchange, Exchange, TurnEvent, FULL_HEART, HALF_HEART};
pub use pressure::{is_knocked_off, next_pressure};
