//! Commands a fighter can plan, and the action actually taken on a turn.
//!
//! A plan holds `Command`s. During resolution each planned command becomes
//! an `Action`: either the command is played, or the fighter is recovering
//! from an early counter and the turn is `Skipped`.

use serde::{Deserialize, Serialize};

/// A plannable command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Strike the opponent. Limited uses.
    Attack,
    /// Reduce an incoming attack to half damage. Limited uses.
    Block,
    /// Reflect an incoming attack. Used against anything else, the fighter
    /// loses their next turn. Limited uses.
    Counter,
    /// Deliberately do nothing. Unlimited.
    Idle,
}

impl Command {
    /// Commands that draw from a finite pool.
    pub const LIMITED: [Command; 3] = [Command::Attack, Command::Block, Command::Counter];

    /// Single-letter plan code.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Command::Attack => 'A',
            Command::Block => 'B',
            Command::Counter => 'C',
            Command::Idle => 'I',
        }
    }

    /// Parse a plan code. Case-insensitive.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'A' => Some(Command::Attack),
            'B' => Some(Command::Block),
            'C' => Some(Command::Counter),
            'I' => Some(Command::Idle),
            _ => None,
        }
    }

    /// Does playing this command spend a resource?
    #[must_use]
    pub const fn is_limited(self) -> bool {
        !matches!(self, Command::Idle)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Command::Attack => "Attack",
            Command::Block => "Block",
            Command::Counter => "Counter",
            Command::Idle => "Idle",
        };
        f.write_str(name)
    }
}

/// What a fighter effectively does on a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The planned command is played.
    Play(Command),
    /// Forced recovery turn; the planned command is ignored.
    Skipped,
}

impl Action {
    /// The played command, if any.
    #[must_use]
    pub const fn command(self) -> Option<Command> {
        match self {
            Action::Play(cmd) => Some(cmd),
            Action::Skipped => None,
        }
    }

    #[must_use]
    pub fn is_attack(self) -> bool {
        self == Action::Play(Command::Attack)
    }

    /// Log code: the command letter, or `-` for a skipped turn.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Action::Play(cmd) => cmd.symbol(),
            Action::Skipped => '-',
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(cmd) => write!(f, "{}", cmd),
            Action::Skipped => f.write_str("Skip"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        for cmd in [Command::Attack, Command::Block, Command::Counter, Command::Idle] {
            assert_eq!(Command::from_symbol(cmd.symbol()), Some(cmd));
        }
        assert_eq!(Command::from_symbol('c'), Some(Command::Counter));
        assert_eq!(Command::from_symbol('-'), None);
        assert_eq!(Command::from_symbol('X'), None);
    }

    #[test]
    fn test_limited() {
        assert!(Command::LIMITED.iter().all(|c| c.is_limited()));
        assert!(!Command::Idle.is_limited());
    }

    #[test]
    fn test_action() {
        assert!(Action::Play(Command::Attack).is_attack());
        assert!(!Action::Skipped.is_attack());
        assert_eq!(Action::Skipped.command(), None);
        assert_eq!(Action::Skipped.symbol(), '-');
        assert_eq!(Action::Play(Command::Block).to_string(), "Block");
    }
}
