//! Remaining command uses during a battle.

use serde::{Deserialize, Serialize};

use crate::core::{BattleError, Command, CommandLimits, FighterId, Result};

/// Finite uses left for each limited command.
///
/// Starts at the configured caps and counts down as commands are played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    attack: u8,
    block: u8,
    counter: u8,
}

impl ResourcePool {
    /// A full pool for the given limits.
    #[must_use]
    pub fn new(limits: &CommandLimits) -> Self {
        Self {
            attack: limits.attack,
            block: limits.block,
            counter: limits.counter,
        }
    }

    /// Uses left. `None` for unlimited commands.
    #[must_use]
    pub fn remaining(&self, command: Command) -> Option<u8> {
        match command {
            Command::Attack => Some(self.attack),
            Command::Block => Some(self.block),
            Command::Counter => Some(self.counter),
            Command::Idle => None,
        }
    }

    /// Spend one use of `command`.
    ///
    /// Idle always succeeds. An empty pool yields `ResourceExhausted`.
    pub fn consume(&mut self, fighter: FighterId, command: Command, turn: u8) -> Result<()> {
        let slot = match command {
            Command::Attack => &mut self.attack,
            Command::Block => &mut self.block,
            Command::Counter => &mut self.counter,
            Command::Idle => return Ok(()),
        };

        *slot = slot.checked_sub(1).ok_or(BattleError::ResourceExhausted {
            fighter,
            command,
            turn,
        })?;
        Ok(())
    }
}
