//! Turn-by-turn battle state machine.
//!
//! `Battle` advances one turn per `step()`. Presentation layers can drive
//! it turn by turn; `BattleResolver::resolve` simply runs it to the end.

use tracing::{debug, error, info};

use crate::core::{Action, BattleConfig, BattleError, CoinFlip, FighterId, Pair, PlanViolation, Result};
use crate::plan::Plan;
use crate::rules::{is_knocked_off, next_pressure, resolve_exchange};

use super::fighter::Fighter;
use super::outcome::{BattleReport, EndReason, MatchResult, TurnOutcome};

/// An in-progress battle between two validated plans.
#[derive(Clone, Debug)]
pub struct Battle {
    config: BattleConfig,
    plans: Pair<Plan>,
    fighters: Pair<Fighter>,
    turns_played: u8,
    history: Vec<TurnOutcome>,
    result: Option<MatchResult>,
}

impl Battle {
    /// Validate both plans and set up fresh fighters.
    ///
    /// Nothing is resolved if either plan is rejected.
    pub fn new(config: BattleConfig, plan_a: Plan, plan_b: Plan) -> Result<Self> {
        config.validate()?;
        plan_a.validate_for(FighterId::A, &config)?;
        plan_b.validate_for(FighterId::B, &config)?;

        let fighters = Pair::from_fn(|id| Fighter::new(id, &config));
        Ok(Self {
            history: Vec::with_capacity(usize::from(config.turns)),
            config,
            plans: Pair::new(plan_a, plan_b),
            fighters,
            turns_played: 0,
            result: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn fighter(&self, id: FighterId) -> &Fighter {
        &self.fighters[id]
    }

    #[must_use]
    pub fn turns_played(&self) -> u8 {
        self.turns_played
    }

    #[must_use]
    pub fn history(&self) -> &[TurnOutcome] {
        &self.history
    }

    /// The result, once decided.
    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Decided by knockout, knock-off or sudden death.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// All turns played with nobody down; only the coin flip remains.
    #[must_use]
    pub fn needs_sudden_death(&self) -> bool {
        self.result.is_none() && self.turns_played >= self.config.turns
    }

    /// Resolve the next turn.
    ///
    /// Returns `Ok(None)` once the battle is decided or all turns are
    /// played.
    pub fn step(&mut self) -> Result<Option<&TurnOutcome>> {
        if self.is_over() || self.turns_played >= self.config.turns {
            return Ok(None);
        }

        let turn = self.turns_played + 1;
        let actions = self.effective_actions(turn)?;
        let skipped = actions.map(|_, action| action == Action::Skipped);

        for id in FighterId::all() {
            if let Some(command) = actions[id].command() {
                if let Err(err) = self.fighters[id].resources_mut().consume(id, command, turn) {
                    error!(fighter = %id, %command, turn, "command played with no uses left");
                    return Err(err);
                }
            }
        }

        let exchange = resolve_exchange(actions);

        let mut applied = Pair::with_value(0u16);
        for id in FighterId::all() {
            let fighter = &mut self.fighters[id];
            applied[id] = fighter.take_damage(exchange.damage[id]);
            if exchange.skip_next[id] {
                fighter.set_skip_next();
                debug!(fighter = %id, turn, "skip flag set for next turn");
            }
            // A clash leaves pressure where it was.
            if !exchange.clash {
                let pressure = next_pressure(
                    fighter.pressure(),
                    exchange.damage[id] > 0,
                    exchange.dealt[id],
                );
                fighter.set_pressure(pressure);
            }
        }

        let outcome = TurnOutcome {
            turn,
            actions,
            damage: applied,
            hearts: Pair::from_fn(|id| self.fighters[id].hearts()),
            half_hearts: Pair::from_fn(|id| self.fighters[id].half_hearts()),
            skipped,
            skip_set: exchange.skip_next,
            pressure: Pair::from_fn(|id| self.fighters[id].pressure()),
            events: exchange.events,
        };
        debug!(
            turn,
            a = %outcome.actions[FighterId::A],
            b = %outcome.actions[FighterId::B],
            hearts_a = outcome.half_hearts[FighterId::A],
            hearts_b = outcome.half_hearts[FighterId::B],
            "turn resolved"
        );

        self.turns_played = turn;
        self.history.push(outcome);
        self.result = self.check_early_end(turn);
        if let Some(result) = &self.result {
            info!(%result, "battle decided");
        }

        Ok(self.history.last())
    }

    /// Run every remaining turn, then flip for sudden death if needed.
    pub fn run_to_end(&mut self, coin: &mut impl CoinFlip) -> Result<&MatchResult> {
        while self.step()?.is_some() {}

        let result = match self.result.take() {
            Some(result) => result,
            None => {
                let result = self.sudden_death(coin);
                info!(%result, "battle decided");
                result
            }
        };
        let result: &MatchResult = self.result.insert(result);
        Ok(result)
    }

    /// Consume the battle into its report. Runs it to the end first.
    pub fn into_report(mut self, coin: &mut impl CoinFlip) -> Result<BattleReport> {
        let result = self.run_to_end(coin)?.clone();
        let Battle {
            config,
            plans,
            history,
            ..
        } = self;

        Ok(BattleReport {
            config,
            plans,
            turns: history,
            result,
        })
    }

    fn effective_actions(&mut self, turn: u8) -> Result<Pair<Action>> {
        let index = usize::from(turn - 1);
        let mut actions = Pair::with_value(Action::Skipped);

        for id in FighterId::all() {
            if self.fighters[id].take_skip() {
                debug!(fighter = %id, turn, "planned command ignored while recovering");
                continue;
            }
            let plan = &self.plans[id];
            let command = plan.get(index).ok_or_else(|| {
                BattleError::invalid_plan(
                    id,
                    PlanViolation::WrongLength {
                        expected: usize::from(self.config.turns),
                        actual: plan.len(),
                    },
                )
            })?;
            actions[id] = Action::Play(command);
        }

        Ok(actions)
    }

    fn check_early_end(&self, turn: u8) -> Option<MatchResult> {
        let hearts = Pair::from_fn(|id| self.fighters[id].hearts());
        let down = Pair::from_fn(|id| self.fighters[id].is_down());
        if let Some(result) = self.ending(down, EndReason::Knockout, EndReason::DoubleKnockout, turn, hearts) {
            return Some(result);
        }

        let threshold = self.config.pressure_knockout;
        let off = Pair::from_fn(|id| is_knocked_off(self.fighters[id].pressure(), threshold));
        self.ending(off, EndReason::StagePressure, EndReason::StagePressure, turn, hearts)
    }

    fn ending(
        &self,
        defeated: Pair<bool>,
        single: EndReason,
        double: EndReason,
        turn: u8,
        hearts: Pair<u8>,
    ) -> Option<MatchResult> {
        match (defeated[FighterId::A], defeated[FighterId::B]) {
            (false, false) => None,
            (true, true) => Some(MatchResult {
                winner: None,
                defeated,
                knockout_turn: Some(turn),
                sudden_death: false,
                reason: double,
                turns_played: turn,
                final_hearts: hearts,
            }),
            (true, false) => Some(MatchResult::single_loser(FighterId::A, single, Some(turn), turn, hearts)),
            (false, true) => Some(MatchResult::single_loser(FighterId::B, single, Some(turn), turn, hearts)),
        }
    }

    /// One flip of `coin`; see [`CoinFlip`] for the heads/tails mapping.
    fn sudden_death(&self, coin: &mut impl CoinFlip) -> MatchResult {
        let loser = if coin.flip() { FighterId::B } else { FighterId::A };
        debug!(loser = %loser, "sudden death coin flipped");
        MatchResult::single_loser(
            loser,
            EndReason::SuddenDeath,
            None,
            self.turns_played,
            Pair::from_fn(|id| self.fighters[id].hearts()),
        )
    }
}
