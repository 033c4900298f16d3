//! Validated battle plans.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BattleConfig, BattleError, Command, CommandLimits, FighterId, PlanViolation, Result};

/// Inline capacity covers the standard 12-turn battle without allocating.
pub type Commands = SmallVec<[Command; 12]>;

/// A fighter's committed command sequence.
///
/// Construction validates length and per-command caps, so a `Plan` that
/// exists is always playable under the config it was built for. Plans are
/// immutable after construction.
///
/// ## Example
///
/// ```
/// use command_battle::core::{BattleConfig, Command, FighterId};
/// use command_battle::plan::Plan;
///
/// let config = BattleConfig::default();
/// let plan = Plan::parse(FighterId::A, "AAABBCAAIIII", &config).unwrap();
///
/// assert_eq!(plan.len(), 12);
/// assert_eq!(plan.get(0), Some(Command::Attack));
/// assert_eq!(plan.count(Command::Attack), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plan {
    fighter: FighterId,
    commands: Commands,
}

impl Plan {
    /// Build a plan of exactly `turns` commands.
    pub fn new(
        fighter: FighterId,
        commands: impl IntoIterator<Item = Command>,
        turns: u8,
        limits: &CommandLimits,
    ) -> Result<Self> {
        let commands: Commands = commands.into_iter().collect();

        if commands.len() != usize::from(turns) {
            return Err(BattleError::invalid_plan(
                fighter,
                PlanViolation::WrongLength {
                    expected: usize::from(turns),
                    actual: commands.len(),
                },
            ));
        }

        let plan = Self { fighter, commands };
        plan.check_limits(limits)?;
        Ok(plan)
    }

    /// Build a plan using the turn count and limits of `config`.
    pub fn for_config(
        fighter: FighterId,
        commands: impl IntoIterator<Item = Command>,
        config: &BattleConfig,
    ) -> Result<Self> {
        Self::new(fighter, commands, config.turns, &config.limits)
    }

    /// Build a plan, filling unplanned trailing turns with `Idle`.
    ///
    /// Longer inputs are still rejected.
    pub fn padded(
        fighter: FighterId,
        commands: impl IntoIterator<Item = Command>,
        config: &BattleConfig,
    ) -> Result<Self> {
        let mut commands: Commands = commands.into_iter().collect();
        let turns = usize::from(config.turns);
        if commands.len() < turns {
            commands.resize(turns, Command::Idle);
        }
        Self::for_config(fighter, commands, config)
    }

    /// Parse a plan from letter codes (`A`, `B`, `C`, `I`).
    ///
    /// Whitespace, commas and `-` separators are ignored so plans can be
    /// written as `"AAB CII ..."` or `"A,A,B"`.
    pub fn parse(fighter: FighterId, source: &str, config: &BattleConfig) -> Result<Self> {
        let commands = parse_commands(fighter, source)?;
        Self::for_config(fighter, commands, config)
    }

    /// Parse letter codes, filling unplanned trailing turns with `Idle`.
    pub fn parse_padded(fighter: FighterId, source: &str, config: &BattleConfig) -> Result<Self> {
        let commands = parse_commands(fighter, source)?;
        Self::padded(fighter, commands, config)
    }

    fn check_limits(&self, limits: &CommandLimits) -> Result<()> {
        for command in Command::LIMITED {
            let Some(limit) = limits.limit(command) else {
                continue;
            };
            let planned = self.count(command);
            if planned > usize::from(limit) {
                return Err(BattleError::invalid_plan(
                    self.fighter,
                    PlanViolation::OverLimit {
                        command,
                        limit,
                        planned,
                    },
                ));
            }
        }
        Ok(())
    }

    /// Re-check this plan against a (possibly different) configuration.
    pub fn validate_for(&self, fighter: FighterId, config: &BattleConfig) -> Result<()> {
        if self.fighter != fighter {
            return Err(BattleError::invalid_plan(
                fighter,
                PlanViolation::WrongFighter {
                    expected: fighter,
                    actual: self.fighter,
                },
            ));
        }
        if self.len() != usize::from(config.turns) {
            return Err(BattleError::invalid_plan(
                fighter,
                PlanViolation::WrongLength {
                    expected: usize::from(config.turns),
                    actual: self.len(),
                },
            ));
        }
        self.check_limits(&config.limits)
    }

    /// The fighter this plan belongs to.
    #[must_use]
    pub fn fighter(&self) -> FighterId {
        self.fighter
    }

    /// Command planned for a 0-indexed turn.
    #[must_use]
    pub fn get(&self, turn_index: usize) -> Option<Command> {
        self.commands.get(turn_index).copied()
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// How many times a command appears in the plan.
    #[must_use]
    pub fn count(&self, command: Command) -> usize {
        self.commands.iter().filter(|&&c| c == command).count()
    }

    /// 0-indexed turns on which the plan uses `command`.
    pub fn turns_with(&self, command: Command) -> impl Iterator<Item = usize> + '_ {
        self.commands
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == command)
            .map(|(i, _)| i)
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for command in &self.commands {
            write!(f, "{}", command.symbol())?;
        }
        Ok(())
    }
}

fn parse_commands(fighter: FighterId, source: &str) -> Result<Commands> {
    source
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '-')
        .enumerate()
        .map(|(position, symbol)| {
            Command::from_symbol(symbol).ok_or_else(|| {
                BattleError::invalid_plan(fighter, PlanViolation::UnknownCommand { position, symbol })
            })
        })
        .collect()
}
