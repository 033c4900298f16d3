//! Batch simulation for evaluating plans over many battles.

mod runner;
mod stats;

pub use runner::{simulate, Opponent, SimulationConfig};
pub use stats::SimulationStats;
