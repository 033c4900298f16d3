//! Computer opponents.

mod planner;

pub use planner::CpuPlanner;
