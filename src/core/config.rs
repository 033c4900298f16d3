//! Battle configuration.
//!
//! The defaults are the standard rules: 12 turns, 3 hearts, and
//! 5 Attacks / 2 Blocks / 1 Counter per fighter. Configs can be built in
//! code or loaded from TOML:
//!
//! ```toml
//! turns = 12
//! starting_hearts = 3
//! pressure_knockout = 4
//!
//! [limits]
//! attack = 5
//! block = 2
//! counter = 1
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::command::Command;
use super::error::{BattleError, Result};

/// Maximum uses of each limited command over a whole plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandLimits {
    pub attack: u8,
    pub block: u8,
    pub counter: u8,
}

impl Default for CommandLimits {
    fn default() -> Self {
        Self {
            attack: 5,
            block: 2,
            counter: 1,
        }
    }
}

impl CommandLimits {
    /// Create limits with explicit caps.
    #[must_use]
    pub const fn new(attack: u8, block: u8, counter: u8) -> Self {
        Self {
            attack,
            block,
            counter,
        }
    }

    /// Cap for a command. `None` means unlimited (Idle).
    #[must_use]
    pub const fn limit(&self, command: Command) -> Option<u8> {
        match command {
            Command::Attack => Some(self.attack),
            Command::Block => Some(self.block),
            Command::Counter => Some(self.counter),
            Command::Idle => None,
        }
    }
}

/// Complete battle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Turns per battle before sudden death.
    pub turns: u8,

    /// Hearts each fighter starts with.
    pub starting_hearts: u8,

    /// Per-command use caps.
    pub limits: CommandLimits,

    /// Stage-pressure threshold. `None` disables the rule.
    ///
    /// A fighter gains pressure when hit without dealing damage back and
    /// sheds it otherwise. Reaching the threshold knocks them off the stage.
    pub pressure_knockout: Option<u32>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            turns: 12,
            starting_hearts: 3,
            limits: CommandLimits::default(),
            pressure_knockout: None,
        }
    }
}

impl BattleConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of turns.
    #[must_use]
    pub fn with_turns(mut self, turns: u8) -> Self {
        self.turns = turns;
        self
    }

    /// Set starting hearts.
    #[must_use]
    pub fn with_starting_hearts(mut self, hearts: u8) -> Self {
        self.starting_hearts = hearts;
        self
    }

    /// Set command limits.
    #[must_use]
    pub fn with_limits(mut self, limits: CommandLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Enable the stage-pressure rule with the given threshold.
    #[must_use]
    pub fn with_pressure_knockout(mut self, threshold: u32) -> Self {
        self.pressure_knockout = Some(threshold);
        self
    }

    /// Starting health in half-heart units.
    #[must_use]
    pub fn starting_half_hearts(&self) -> u16 {
        u16::from(self.starting_hearts) * 2
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<()> {
        if self.turns == 0 {
            return Err(BattleError::Config("turns must be at least 1".into()));
        }
        if self.starting_hearts == 0 {
            return Err(BattleError::Config("starting_hearts must be at least 1".into()));
        }
        if self.pressure_knockout == Some(0) {
            return Err(BattleError::Config("pressure_knockout must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BattleConfig::default();
        assert_eq!(config.turns, 12);
        assert_eq!(config.starting_hearts, 3);
        assert_eq!(config.starting_half_hearts(), 6);
        assert_eq!(config.limits, CommandLimits::new(5, 2, 1));
        assert_eq!(config.pressure_knockout, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_limits_lookup() {
        let limits = CommandLimits::default();
        assert_eq!(limits.limit(Command::Attack), Some(5));
        assert_eq!(limits.limit(Command::Block), Some(2));
        assert_eq!(limits.limit(Command::Counter), Some(1));
        assert_eq!(limits.limit(Command::Idle), None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BattleConfig::new()
            .with_turns(8)
            .with_starting_hearts(5)
            .with_limits(CommandLimits::new(6, 2, 1))
            .with_pressure_knockout(4);

        assert_eq!(config.turns, 8);
        assert_eq!(config.starting_hearts, 5);
        assert_eq!(config.limits.attack, 6);
        assert_eq!(config.pressure_knockout, Some(4));
    }

    #[test]
    fn test_validate_rejects_degenerate_configs() {
        assert!(BattleConfig::new().with_turns(0).validate().is_err());
        assert!(BattleConfig::new().with_starting_hearts(0).validate().is_err());
        assert!(BattleConfig::new().with_pressure_knockout(0).validate().is_err());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = BattleConfig::from_toml_str(
            r#"
            pressure_knockout = 4

            [limits]
            attack = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.turns, 12);
        assert_eq!(config.pressure_knockout, Some(4));
        assert_eq!(config.limits, CommandLimits::new(6, 2, 1));
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = BattleConfig::from_toml_str("turns = 0").unwrap_err();
        assert!(matches!(err, BattleError::Config(_)));

        let err = BattleConfig::from_toml_str("turns = \"twelve\"").unwrap_err();
        assert!(matches!(err, BattleError::ConfigParse(_)));
    }

    #[test]
    fn test_serialization() {
        let config = BattleConfig::default().with_pressure_knockout(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BattleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
