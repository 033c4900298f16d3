//! Deterministic random number generation and the sudden-death coin.
//!
//! A batch simulation forks one stream per battle from a root seed, then
//! splits each battle stream by context so the CPU planner and the
//! sudden-death coin never draw from the same sequence.
//!
//! ```
//! use command_battle::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut battle_rng = rng.fork();
//!
//! // Forks are deterministic: the same parent seed yields the same forks.
//! let mut rng2 = GameRng::new(42);
//! let mut battle_rng2 = rng2.fork();
//! assert_eq!(battle_rng.gen_bool(0.5), battle_rng2.gen_bool(0.5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Source of the sudden-death coin flip.
///
/// Injected into the resolver so tests and replays can fix the outcome.
/// The flip happens at most once per battle, only when both fighters are
/// still standing after the last turn. The heart lead is ignored:
///
/// - heads (`true`): Fighter A lands the final strike, Fighter B is defeated
/// - tails (`false`): Fighter B lands the final strike, Fighter A is defeated
pub trait CoinFlip {
    /// Flip a fair coin. `true` is heads.
    fn flip(&mut self) -> bool;
}

/// A coin that always lands the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedCoin(pub bool);

impl FixedCoin {
    pub const HEADS: FixedCoin = FixedCoin(true);
    pub const TAILS: FixedCoin = FixedCoin(false);
}

impl CoinFlip for FixedCoin {
    fn flip(&mut self) -> bool {
        self.0
    }
}

impl<C: CoinFlip + ?Sized> CoinFlip for &mut C {
    fn flip(&mut self) -> bool {
        (**self).flip()
    }
}

/// Seeded ChaCha8 stream with forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off a child stream seeded from the next draw of this one.
    ///
    /// Successive forks differ; the same parent seed always yields the
    /// same sequence of forks.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.gen())
    }

    /// A stream keyed by `context`, independent of how much of this
    /// stream has been drawn.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        (self.seed, context).hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Draw `true` with the given probability.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

impl CoinFlip for GameRng {
    fn flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flips(rng: &mut GameRng, n: usize) -> Vec<bool> {
        (0..n).map(|_| rng.flip()).collect()
    }

    #[test]
    fn test_same_seed_same_flips() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        assert_eq!(flips(&mut rng1, 64), flips(&mut rng2, 64));
    }

    #[test]
    fn test_fork_diverges_from_parent() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();
        assert_ne!(flips(&mut rng, 64), flips(&mut forked, 64));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
        assert_ne!(rng1.fork().seed(), rng1.fork().seed());
    }

    #[test]
    fn test_context_streams() {
        let rng = GameRng::new(42);
        let planning = flips(&mut rng.for_context("cpu_plan"), 64);
        let coin = flips(&mut rng.for_context("sudden_death"), 64);
        assert_ne!(planning, coin);

        let again = flips(&mut GameRng::new(42).for_context("cpu_plan"), 64);
        assert_eq!(planning, again);
    }

    #[test]
    fn test_shuffle_keeps_turns() {
        let mut rng = GameRng::new(42);
        let mut turns: Vec<usize> = (0..12).collect();

        rng.shuffle(&mut turns);
        assert_ne!(turns, (0..12).collect::<Vec<_>>());

        turns.sort_unstable();
        assert_eq!(turns, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_coin_is_roughly_fair() {
        let mut rng = GameRng::new(7);
        let heads = (0..10_000).filter(|_| rng.flip()).count();
        assert!((4_500..5_500).contains(&heads), "heads = {}", heads);
    }

    #[test]
    fn test_fixed_coin() {
        fn flip_via<C: CoinFlip>(mut coin: C) -> bool {
            coin.flip()
        }

        let mut heads = FixedCoin::HEADS;
        let mut tails = FixedCoin::TAILS;
        assert!(heads.flip());
        assert!(!tails.flip());
        assert!(flip_via(&mut heads));
        assert!(!flip_via(&mut tails));
    }
}
