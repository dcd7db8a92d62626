//! Seated players.

use alloc::string::String;
use core::fmt;

use crate::card::{Card, Rank, Suit};
use crate::collection::CardCollection;
use crate::error::{CardNotFound, CollectionError};

/// A player with a hand of cards and a count of turns still to sit out.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Display name, also used in error messages.
    name: String,
    /// Cards in the hand.
    hand: CardCollection,
    /// Turns the player must still sit out.
    rounds_to_skip: usize,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_hand(name, CardCollection::new())
    }

    /// Creates a player holding `hand`.
    #[must_use]
    pub fn with_hand(name: impl Into<String>, hand: CardCollection) -> Self {
        Self {
            name: name.into(),
            hand,
            rounds_to_skip: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub const fn hand(&self) -> &CardCollection {
        &self.hand
    }

    /// Adds a single card to the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand.add(card);
    }

    /// Moves `count` cards from the front of `source` into the hand.
    ///
    /// Cards already taken stay in the hand when `source` runs out.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if `source` runs out early.
    pub fn take_cards(
        &mut self,
        source: &mut CardCollection,
        count: usize,
    ) -> Result<&mut Self, CollectionError> {
        for _ in 0..count {
            self.hand.add(source.pick_first()?);
        }

        Ok(self)
    }

    /// Removes and returns the card at `index` in the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is empty or `index` is out of range.
    pub fn pick_at(&mut self, index: usize) -> Result<Card, CollectionError> {
        self.hand.pick_at(index)
    }

    /// Removes and returns the first card of `rank`, also matching `suit`
    /// when given.
    ///
    /// # Errors
    ///
    /// Returns [`CardNotFound`] if no card in the hand matches.
    pub fn pick_one_by_rank_and_suit(
        &mut self,
        rank: Rank,
        suit: Option<Suit>,
    ) -> Result<Card, CardNotFound> {
        self.hand
            .position(|card| card.rank == rank && suit.is_none_or(|suit| card.suit == suit))
            .and_then(|index| self.hand.pick_at(index).ok())
            .ok_or_else(|| CardNotFound {
                player: self.name.clone(),
                rank,
                suit,
            })
    }

    /// Removes every card of `rank`, in hand order.
    ///
    /// # Errors
    ///
    /// Returns [`CardNotFound`] if the hand holds no card of `rank`; an empty
    /// collection is never returned.
    pub fn pick_all_by_rank(&mut self, rank: Rank) -> Result<CardCollection, CardNotFound> {
        let mut picked = CardCollection::new();
        picked.add(self.pick_one_by_rank_and_suit(rank, None)?);

        while let Ok(card) = self.pick_one_by_rank_and_suit(rank, None) {
            picked.add(card);
        }

        Ok(picked)
    }

    /// Returns the number of turns the player must still sit out.
    #[must_use]
    pub const fn rounds_to_skip(&self) -> usize {
        self.rounds_to_skip
    }

    /// Returns whether the player acts on their next turn.
    #[must_use]
    pub const fn can_play(&self) -> bool {
        self.rounds_to_skip == 0
    }

    /// Adds `rounds` turns to sit out.
    pub const fn add_rounds_to_skip(&mut self, rounds: usize) {
        self.rounds_to_skip += rounds;
    }

    /// Uses up one skipped turn.
    pub const fn consume_skipped_round(&mut self) {
        debug_assert!(self.rounds_to_skip > 0, "no rounds left to skip");
        self.rounds_to_skip = self.rounds_to_skip.saturating_sub(1);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
