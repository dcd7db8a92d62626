//! Ordered card piles and hands.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::CollectionError;

/// An ordered sequence of cards.
///
/// The first card is the next one drawn. Cards are moved in and out, never
/// copied, so a card taken from one collection and added to another keeps its
/// place in the game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates an unshuffled pile holding `decks` full decks.
    ///
    /// Cards are ordered by rank, then by suit.
    #[must_use]
    pub fn standard_deck(decks: u8) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for rank in Rank::ALL {
                for suit in Suit::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        Self { cards }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Appends a card at the end.
    pub fn add(&mut self, card: Card) -> &mut Self {
        self.cards.push(card);
        self
    }

    /// Removes and returns the card at `index`, closing the gap.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection is empty, or
    /// [`CollectionError::OutOfBounds`] if `index` is past the end.
    pub fn pick_at(&mut self, index: usize) -> Result<Card, CollectionError> {
        if self.cards.is_empty() {
            return Err(CollectionError::Empty);
        }

        if index >= self.cards.len() {
            return Err(CollectionError::OutOfBounds {
                index,
                len: self.cards.len(),
            });
        }

        Ok(self.cards.remove(index))
    }

    /// Removes and returns the first card.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection is empty.
    pub fn pick_first(&mut self) -> Result<Card, CollectionError> {
        self.pick_at(0)
    }

    /// Removes and returns the first card matching `predicate`.
    ///
    /// Cards in front of the match are moved to the back, keeping their
    /// order. Returns `None` and leaves the collection untouched when no card
    /// matches.
    pub fn pick_first_where<P>(&mut self, predicate: P) -> Option<Card>
    where
        P: FnMut(&Card) -> bool,
    {
        let position = self.cards.iter().position(predicate)?;
        self.cards.rotate_left(position);
        Some(self.cards.remove(0))
    }

    /// Returns the last card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection is empty.
    pub fn peek_last(&self) -> Result<&Card, CollectionError> {
        self.cards.last().ok_or(CollectionError::Empty)
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Moves every card of `other` to the end of this collection.
    ///
    /// `other` is empty afterwards.
    pub fn concat(&mut self, other: &mut Self) -> &mut Self {
        self.cards.append(&mut other.cards);
        self
    }

    /// Returns the position of the first card matching `predicate`.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Card) -> bool,
    {
        self.cards.iter().position(predicate)
    }

    /// Iterates over the cards in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the cards as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the collection and returns its cards in order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }
}

impl From<Vec<Card>> for CardCollection {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for CardCollection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for CardCollection {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CardCollection {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for CardCollection {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
