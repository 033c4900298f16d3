//! Stage pressure: an optional knock-off rule.
//!
//! Taking damage without answering back pushes a fighter toward the edge
//! of the stage. Any other turn lets them recover one step.

/// Pressure after a turn.
#[must_use]
pub fn next_pressure(pressure: u32, took_damage: bool, dealt_damage: bool) -> u32 {
    if took_damage && !dealt_damage {
        pressure.saturating_add(1)
    } else {
        pressure.saturating_sub(1)
    }
}

/// Has a fighter been pushed off the stage?
#[must_use]
pub fn is_knocked_off(pressure: u32, threshold: Option<u32>) -> bool {
    threshold.is_some_and(|t| pressure >= t)
}
