//! Plans and command resources.
//!
//! - `Plan`: a validated, fixed command sequence for one fighter
//! - `ResourcePool`: uses left per command while a battle runs

#[allow(clippy::module_inception)]
mod plan;
mod pool;

pub use plan::{Commands, Plan};
pub use pool::ResourcePool;
