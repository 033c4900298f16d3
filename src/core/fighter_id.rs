//! Fighter identification and per-fighter data storage.
//!
//! ## FighterId
//!
//! A battle always has exactly two sides, `A` and `B`.
//!
//! ## Pair
//!
//! Per-fighter storage indexed by `FighterId`, in the same spirit as a
//! per-player map but fixed at two entries.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FighterId {
    A,
    B,
}

impl FighterId {
    /// Both fighters, in resolution order.
    pub const ALL: [FighterId; 2] = [FighterId::A, FighterId::B];

    /// Get the raw index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            FighterId::A => 0,
            FighterId::B => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            FighterId::A => FighterId::B,
            FighterId::B => FighterId::A,
        }
    }

    /// Iterate over both fighters.
    ///
    /// ```
    /// use command_battle::core::FighterId;
    ///
    /// let ids: Vec<_> = FighterId::all().collect();
    /// assert_eq!(ids, vec![FighterId::A, FighterId::B]);
    /// ```
    pub fn all() -> impl Iterator<Item = FighterId> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for FighterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FighterId::A => write!(f, "Fighter A"),
            FighterId::B => write!(f, "Fighter B"),
        }
    }
}

/// Per-fighter data with O(1) access.
///
/// ## Example
///
/// ```
/// use command_battle::core::{FighterId, Pair};
///
/// let mut hearts: Pair<u8> = Pair::with_value(3);
/// hearts[FighterId::B] -= 1;
///
/// assert_eq!(hearts[FighterId::A], 3);
/// assert_eq!(hearts[FighterId::B], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<T> {
    data: [T; 2],
}

impl<T> Pair<T> {
    /// Create from explicit values for A and B.
    pub const fn new(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Create with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(FighterId) -> T) -> Self {
        Self {
            data: [factory(FighterId::A), factory(FighterId::B)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to a fighter's data.
    #[must_use]
    pub fn get(&self, fighter: FighterId) -> &T {
        &self.data[fighter.index()]
    }

    /// Get a mutable reference to a fighter's data.
    pub fn get_mut(&mut self, fighter: FighterId) -> &mut T {
        &mut self.data[fighter.index()]
    }

    /// Mutable references to both entries at once.
    pub fn both_mut(&mut self) -> (&mut T, &mut T) {
        let [a, b] = &mut self.data;
        (a, b)
    }

    /// Iterate over (FighterId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (FighterId, &T)> {
        FighterId::all().zip(self.data.iter())
    }

    /// Iterate over (FighterId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (FighterId, &mut T)> {
        FighterId::all().zip(self.data.iter_mut())
    }

    /// Map both entries into a new pair.
    pub fn map<U>(self, mut f: impl FnMut(FighterId, T) -> U) -> Pair<U> {
        let [a, b] = self.data;
        Pair::new(f(FighterId::A, a), f(FighterId::B, b))
    }
}

impl<T> Index<FighterId> for Pair<T> {
    type Output = T;

    fn index(&self, fighter: FighterId) -> &Self::Output {
        self.get(fighter)
    }
}

impl<T> IndexMut<FighterId> for Pair<T> {
    fn index_mut(&mut self, fighter: FighterId) -> &mut Self::Output {
        self.get_mut(fighter)
    }
}
