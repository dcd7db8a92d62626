//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

use crate::card::{Card, Rank, Suit};
use crate::selector::Request;

/// Errors raised by [`CardCollection`](crate::CardCollection) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The collection holds no cards.
    #[error("you can not pick a card from an empty collection")]
    Empty,
    /// The requested position is past the end of the collection.
    #[error("no card at position {index} in a collection of {len}")]
    OutOfBounds {
        /// Requested position.
        index: usize,
        /// Collection length at the time of the request.
        len: usize,
    },
}

/// A player does not hold a card matching a rank (and optionally a suit).
///
/// Inside the cascade resolver this is the signal that ends a chain, never a
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("player {player} does not have card with value {rank}{}", suit_suffix(.suit))]
pub struct CardNotFound {
    /// Name of the player that was searched.
    pub player: String,
    /// Rank that was searched for.
    pub rank: Rank,
    /// Suit that was searched for, if any.
    pub suit: Option<Suit>,
}

fn suit_suffix(suit: &Option<Suit>) -> String {
    suit.map_or_else(String::new, |suit| alloc::format!(" and color {suit}"))
}

/// Errors raised while seating players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// Every seat is taken.
    #[error("max capacity is {max} players")]
    Full {
        /// Configured capacity.
        max: usize,
    },
}

/// Errors raised by the [`CardValidator`](crate::CardValidator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The candidate is the very card already on top of the discard pile.
    #[error("got same cards: {0}")]
    DuplicatePlay(Card),
}

/// Fatal errors raised while resolving a card effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No players are seated at the table.
    #[error("no players at the table")]
    NoPlayers,
    /// A pile ran out mid-cascade.
    #[error(transparent)]
    Collection(#[from] CollectionError),
    /// The card needs a request but none was given.
    #[error("card {rank} needs a request")]
    MissingRequest {
        /// Rank of the played card.
        rank: Rank,
    },
    /// The request does not fit the played card.
    #[error("card {rank} can not request {request}")]
    InvalidRequest {
        /// Rank of the played card.
        rank: Rank,
        /// The rejected request.
        request: Request,
    },
}

/// Errors raised while playing a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    /// No players are seated at the table.
    #[error("no players at the table")]
    NoPlayers,
    /// Nothing has been played yet, so there is nothing to match.
    #[error("no played cards on the table yet")]
    NoCardOnTable,
    /// The selector chose a card the player does not hold.
    #[error("selected card is not in hand: {0}")]
    CardNotInHand(CardNotFound),
    /// The selector chose a card that does not match the table.
    #[error("card {card} can not be played here")]
    IllegalPlay {
        /// The rejected card.
        card: Card,
    },
    /// The validator rejected the play outright.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The draw pile ran out.
    #[error(transparent)]
    Collection(#[from] CollectionError),
    /// Resolving the played card failed.
    #[error(transparent)]
    Action(#[from] ActionError),
}

/// Errors raised while dealing the opening cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The draw pile ran out.
    #[error(transparent)]
    Collection(#[from] CollectionError),
    /// Every card left in the draw pile is an action card.
    #[error("no regular cards in collection")]
    NoRegularCard,
}

/// Errors raised by [`Game::start_game`](crate::Game::start_game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameSetupError {
    /// The game has already been started.
    #[error("the game is already started")]
    AlreadyStarted,
    /// The draw pile is empty.
    #[error("prepare card deck before game start")]
    DeckNotPrepared,
    /// Too few players are seated.
    #[error("you need minimum {min} players to start the game")]
    NotEnoughPlayers {
        /// Required number of players.
        min: usize,
    },
    /// Dealing failed part way through.
    #[error("the game needs help! issue: {0}")]
    Aborted(#[source] DealError),
}
