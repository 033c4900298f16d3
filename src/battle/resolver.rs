//! The battle resolver: two plans in, a report out.

use tracing::warn;

use crate::core::{BattleConfig, CoinFlip, Result};
use crate::plan::Plan;

use super::outcome::BattleReport;
use super::state::Battle;

/// Resolves battles under a fixed configuration.
///
/// Immutable and cheap to share: every call builds its own `Battle`, so
/// one resolver can serve any number of independent battles as long as
/// each gets its own coin.
///
/// ## Example
///
/// ```
/// use command_battle::battle::BattleResolver;
/// use command_battle::core::{FighterId, FixedCoin};
/// use command_battle::plan::Plan;
///
/// let resolver = BattleResolver::standard();
/// let a = Plan::parse(FighterId::A, "AAIIIIIIIIII", resolver.config()).unwrap();
/// let b = Plan::parse(FighterId::B, "BBIIIIIIIIII", resolver.config()).unwrap();
///
/// let report = resolver.resolve(&a, &b, &mut FixedCoin::HEADS).unwrap();
/// assert_eq!(report.turns[1].hearts[FighterId::B], 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BattleResolver {
    config: BattleConfig,
}

impl BattleResolver {
    /// Create a resolver, validating the configuration.
    pub fn new(config: BattleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Resolver for the standard rules.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Start a battle to drive turn by turn.
    pub fn start(&self, plan_a: &Plan, plan_b: &Plan) -> Result<Battle> {
        Battle::new(self.config.clone(), plan_a.clone(), plan_b.clone()).inspect_err(|err| {
            if err.is_recoverable() {
                warn!(%err, "plan rejected");
            }
        })
    }

    /// Resolve a whole battle.
    ///
    /// Plans are validated before any turn is played. The coin is flipped
    /// at most once, and only if both fighters survive every turn.
    pub fn resolve(&self, plan_a: &Plan, plan_b: &Plan, coin: &mut impl CoinFlip) -> Result<BattleReport> {
        self.start(plan_a, plan_b)?.into_report(coin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BattleError, FighterId, FixedCoin};

    #[test]
    fn test_new_rejects_bad_config() {
        let err = BattleResolver::new(BattleConfig::new().with_turns(0)).unwrap_err();
        assert!(matches!(err, BattleError::Config(_)));
    }

    #[test]
    fn test_resolve_rejects_before_resolving() {
        let resolver = BattleResolver::standard();
        let short = BattleConfig::new().with_turns(3);
        let a = Plan::parse(FighterId::A, "AAA", &short).unwrap();
        let b = Plan::parse(FighterId::B, "IIIIIIIIIIII", resolver.config()).unwrap();

        let err = resolver.resolve(&a, &b, &mut FixedCoin::HEADS).unwrap_err();
        assert!(matches!(err, BattleError::InvalidPlan { fighter: FighterId::A, .. }));
    }

    #[test]
    fn test_resolver_is_reusable() {
        let resolver = BattleResolver::standard();
        let a = Plan::parse(FighterId::A, "IIIIIIIIIIII", resolver.config()).unwrap();
        let b = Plan::parse(FighterId::B, "IIIIIIIIIIII", resolver.config()).unwrap();

        let first = resolver.resolve(&a, &b, &mut FixedCoin::HEADS).unwrap();
        let second = resolver.resolve(&a, &b, &mut FixedCoin::TAILS).unwrap();
        assert_eq!(first.result.winner, Some(FighterId::A));
        assert_eq!(second.result.winner, Some(FighterId::B));
    }

    #[test]
    fn test_resolver_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BattleResolver>();
    }
}
