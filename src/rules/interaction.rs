//! The per-turn interaction table.
//!
//! Both fighters' effective actions are resolved simultaneously and the
//! table is symmetric. Damage is measured in half-heart units.
//!
//! | self \ opp | Attack        | Block          | Counter            | Idle / Skip |
//! |------------|---------------|----------------|--------------------|-------------|
//! | Attack     | clash, 0 / 0  | opp takes 0.5  | self takes 1       | opp takes 1 |
//! | Block      | self takes 0.5| -              | opp loses next turn| -           |
//! | Counter    | opp takes 1   | self loses next| both lose next     | self loses next |
//! | Idle / Skip| self takes 1  | -              | opp loses next turn| -           |

use serde::{Deserialize, Serialize};

use crate::core::{Action, Command, FighterId, Pair};

/// Half a heart, the smallest unit of damage.
pub const HALF_HEART: u16 = 1;

/// A whole heart in half-heart units.
pub const FULL_HEART: u16 = 2;

/// Something notable that happened during a turn, for narration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// The fighter was recovering and could not act.
    Recovering { fighter: FighterId },
    /// Both fighters attacked; both attacks fail.
    Clash,
    /// `by` countered an attack and reflected it.
    Countered { by: FighterId },
    /// `by` countered when no attack came and will lose the next turn.
    EarlyCounter { by: FighterId },
    /// `attacker` landed a hit, halved if it struck a block.
    Hit { attacker: FighterId, blocked: bool },
}

impl TurnEvent {
    /// Render with fighter display names.
    pub fn describe(&self, name: impl Fn(FighterId) -> String) -> String {
        match *self {
            TurnEvent::Recovering { fighter } => format!("{} is recovering (SKIP).", name(fighter)),
            TurnEvent::Clash => "Both attacked - clash! No damage.".to_string(),
            TurnEvent::Countered { by } => {
                format!("{} COUNTERED! {} takes 1.", name(by), name(by.opponent()))
            }
            TurnEvent::EarlyCounter { by } => {
                format!("{} countered too early - recovery next turn.", name(by))
            }
            TurnEvent::Hit { attacker, blocked: true } => format!(
                "{} ATTACK hits a BLOCK: {} takes 0.5.",
                name(attacker),
                name(attacker.opponent())
            ),
            TurnEvent::Hit { attacker, blocked: false } => format!(
                "{} ATTACK lands: {} takes 1.",
                name(attacker),
                name(attacker.opponent())
            ),
        }
    }
}

/// Result of applying the table to one pair of actions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Exchange {
    /// Damage each fighter takes, in half hearts.
    pub damage: Pair<u16>,
    /// Whether each fighter dealt damage this turn.
    pub dealt: Pair<bool>,
    /// Fighters who must skip the next turn.
    pub skip_next: Pair<bool>,
    /// Both fighters attacked; nothing else about the turn counts.
    pub clash: bool,
    /// What happened, in resolution order.
    pub events: Vec<TurnEvent>,
}

impl Exchange {
    /// True if neither fighter took damage.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.damage.iter().all(|(_, &d)| d == 0)
    }
}

/// Resolve one turn's effective actions.
///
/// Pure: does not touch fighter state or resources.
#[must_use]
pub fn resolve_exchange(actions: Pair<Action>) -> Exchange {
    let mut exchange = Exchange::default();

    for (fighter, action) in actions.iter() {
        if *action == Action::Skipped {
            exchange.events.push(TurnEvent::Recovering { fighter });
        }
    }

    if actions[FighterId::A].is_attack() && actions[FighterId::B].is_attack() {
        exchange.clash = true;
        exchange.events.push(TurnEvent::Clash);
        return exchange;
    }

    for me in FighterId::all() {
        let opp = me.opponent();
        match (actions[me], actions[opp]) {
            (Action::Play(Command::Counter), theirs) if theirs.is_attack() => {
                exchange.damage[opp] += FULL_HEART;
                exchange.dealt[me] = true;
                exchange.events.push(TurnEvent::Countered { by: me });
            }
            (Action::Play(Command::Counter), _) => {
                exchange.skip_next[me] = true;
                exchange.events.push(TurnEvent::EarlyCounter { by: me });
            }
            // Reflected by the opponent's counter arm.
            (Action::Play(Command::Attack), Action::Play(Command::Counter)) => {}
            (Action::Play(Command::Attack), Action::Play(Command::Block)) => {
                exchange.damage[opp] += HALF_HEART;
                exchange.dealt[me] = true;
                exchange.events.push(TurnEvent::Hit { attacker: me, blocked: true });
            }
            (Action::Play(Command::Attack), _) => {
                exchange.damage[opp] += FULL_HEART;
                exchange.dealt[me] = true;
                exchange.events.push(TurnEvent::Hit { attacker: me, blocked: false });
            }
            _ => {}
        }
    }

    exchange
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATTACK: Action = Action::Play(Command::Attack);
    const BLOCK: Action = Action::Play(Command::Block);
    const COUNTER: Action = Action::Play(Command::Counter);
    const IDLE: Action = Action::Play(Command::Idle);
    const SKIP: Action = Action::Skipped;

    fn exchange(a: Action, b: Action) -> Exchange {
        resolve_exchange(Pair::new(a, b))
    }

    #[test]
    fn test_attack_vs_attack_clash() {
        let ex = exchange(ATTACK, ATTACK);
        assert_eq!(ex.damage, Pair::new(0, 0));
        assert_eq!(ex.dealt, Pair::new(false, false));
        assert_eq!(ex.events, vec![TurnEvent::Clash]);
        assert!(ex.clash);
        assert!(ex.is_quiet());
    }

    #[test]
    fn test_attack_vs_block_half_damage() {
        let ex = exchange(ATTACK, BLOCK);
        assert!(!ex.clash);
        assert_eq!(ex.damage, Pair::new(0, HALF_HEART));
        assert_eq!(ex.dealt, Pair::new(true, false));

        let ex = exchange(BLOCK, ATTACK);
        assert_eq!(ex.damage, Pair::new(HALF_HEART, 0));
    }

    #[test]
    fn test_attack_vs_counter_reflects() {
        let ex = exchange(ATTACK, COUNTER);
        assert_eq!(ex.damage, Pair::new(FULL_HEART, 0));
        assert_eq!(ex.dealt, Pair::new(false, true));
        assert_eq!(ex.skip_next, Pair::new(false, false));
        assert_eq!(ex.events, vec![TurnEvent::Countered { by: FighterId::B }]);
    }

    #[test]
    fn test_attack_vs_no_action_full_damage() {
        for defender in [IDLE, SKIP] {
            let ex = exchange(defender, ATTACK);
            assert_eq!(ex.damage, Pair::new(FULL_HEART, 0));
            assert_eq!(ex.dealt, Pair::new(false, true));
        }
    }

    #[test]
    fn test_counter_without_attack_sets_skip() {
        for other in [BLOCK, IDLE, SKIP] {
            let ex = exchange(COUNTER, other);
            assert_eq!(ex.damage, Pair::new(0, 0));
            assert_eq!(ex.skip_next, Pair::new(true, false));
        }
    }

    #[test]
    fn test_counter_vs_counter_both_skip() {
        let ex = exchange(COUNTER, COUNTER);
        assert!(ex.is_quiet());
        assert_eq!(ex.skip_next, Pair::new(true, true));
        assert_eq!(
            ex.events,
            vec![
                TurnEvent::EarlyCounter { by: FighterId::A },
                TurnEvent::EarlyCounter { by: FighterId::B },
            ]
        );
    }

    #[test]
    fn test_passive_pairs_are_quiet() {
        for a in [BLOCK, IDLE, SKIP] {
            for b in [BLOCK, IDLE, SKIP] {
                let ex = exchange(a, b);
                assert!(ex.is_quiet(), "{:?} vs {:?}", a, b);
                assert_eq!(ex.skip_next, Pair::new(false, false));
            }
        }
    }

    #[test]
    fn test_recovery_is_narrated() {
        let ex = exchange(SKIP, ATTACK);
        assert_eq!(
            ex.events,
            vec![
                TurnEvent::Recovering { fighter: FighterId::A },
                TurnEvent::Hit { attacker: FighterId::B, blocked: false },
            ]
        );
    }

    #[test]
    fn test_table_is_symmetric() {
        let all = [ATTACK, BLOCK, COUNTER, IDLE, SKIP];
        for a in all {
            for b in all {
                let forward = exchange(a, b);
                let mirrored = exchange(b, a);
                assert_eq!(forward.damage[FighterId::A], mirrored.damage[FighterId::B]);
                assert_eq!(forward.damage[FighterId::B], mirrored.damage[FighterId::A]);
                assert_eq!(forward.skip_next[FighterId::A], mirrored.skip_next[FighterId::B]);
                assert_eq!(forward.dealt[FighterId::A], mirrored.dealt[FighterId::B]);
            }
        }
    }

    #[test]
    fn test_describe() {
        let name = |f: FighterId| f.to_string();
        assert_eq!(
            TurnEvent::Hit { attacker: FighterId::A, blocked: true }.describe(name),
            "Fighter A ATTACK hits a BLOCK: Fighter B takes 0.5."
        );
        assert_eq!(
            TurnEvent::Countered { by: FighterId::B }.describe(name),
            "Fighter B COUNTERED! Fighter A takes 1."
        );
    }
}
