//! Legal move checks.

use crate::card::{Card, Rank, Suit};
use crate::error::ValidationError;
use crate::options::GameOptions;

/// Decides whether a card may be played on top of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardValidator {
    queen_is_wildcard: bool,
}

impl CardValidator {
    /// Creates a validator.
    ///
    /// With `queen_is_wildcard`, a Queen may be played on anything and
    /// anything may be played on a Queen.
    #[must_use]
    pub const fn new(queen_is_wildcard: bool) -> Self {
        Self { queen_is_wildcard }
    }

    /// Creates a validator for the rules in `options`.
    #[must_use]
    pub const fn from_options(options: &GameOptions) -> Self {
        Self::new(options.queen_is_wildcard)
    }

    /// Returns whether `candidate` may be played on `top`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicatePlay`] if `candidate` is the same
    /// card as `top`.
    pub fn is_legal(&self, top: &Card, candidate: &Card) -> Result<bool, ValidationError> {
        self.accepts(top, top.suit, candidate)
    }

    /// Returns whether `candidate` may be played on `top` while
    /// `binding_suit` is in force.
    ///
    /// `binding_suit` differs from the suit of `top` after an Ace changed it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicatePlay`] if `candidate` is the same
    /// card as `top`.
    pub fn accepts(
        &self,
        top: &Card,
        binding_suit: Suit,
        candidate: &Card,
    ) -> Result<bool, ValidationError> {
        if top == candidate {
            return Err(ValidationError::DuplicatePlay(*candidate));
        }

        Ok(self.matches(top, binding_suit, candidate))
    }

    /// Returns whether `candidate` matches `top` while `binding_suit` is in
    /// force.
    ///
    /// Unlike [`accepts`](Self::accepts) this does not reject a candidate
    /// equal to `top`. Use it for cards known to come from a hand, where a
    /// twin from another deck is a legal play.
    #[must_use]
    pub fn matches(&self, top: &Card, binding_suit: Suit, candidate: &Card) -> bool {
        candidate.suit == binding_suit
            || candidate.rank == top.rank
            || (self.queen_is_wildcard && (candidate.rank == Rank::Queen || top.rank == Rank::Queen))
    }
}

impl Default for CardValidator {
    fn default() -> Self {
        Self::from_options(&GameOptions::default())
    }
}
