//! Deck shuffling.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

/// Reorders a sequence of cards.
///
/// Implementations must return a permutation of the input: the same cards,
/// each exactly once.
pub trait Shuffler {
    /// Returns `cards` in a new order.
    fn shuffle(&mut self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> Shuffler for F
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    fn shuffle(&mut self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

/// A deterministic shuffler driven by a seeded `ChaCha8` generator.
///
/// Two shufflers built from the same seed produce the same sequence of
/// permutations.
#[derive(Debug, Clone)]
pub struct SeededShuffler {
    rng: ChaCha8Rng,
}

impl SeededShuffler {
    /// Creates a shuffler from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.shuffle(&mut self.rng);
        cards
    }
}
