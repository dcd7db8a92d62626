//! The shared game surface: piles, seats and the turn cursor.

use alloc::vec::Vec;

use tracing::trace;

use crate::card::{Card, Suit};
use crate::collection::CardCollection;
use crate::error::{CollectionError, TableError};
use crate::player::Player;

/// The table a game is played on.
///
/// The table owns the draw pile, the discard pile and the seated players.
/// Seats are fixed once taken; the turn cursor walks them in seating order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Cards waiting to be drawn, first card on top.
    deck: CardCollection,
    /// Played cards, last card on top.
    played: CardCollection,
    /// Seated players in turn order.
    players: Vec<Player>,
    /// Index of the player whose turn it is.
    current: usize,
    /// Suit the next play has to match.
    binding_suit: Option<Suit>,
}

impl Table {
    /// Minimum number of seated players a game starts with.
    pub const MIN_PLAYERS: usize = 2;

    /// Maximum number of seated players.
    pub const MAX_PLAYERS: usize = 4;

    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deck: CardCollection::new(),
            played: CardCollection::new(),
            players: Vec::new(),
            current: 0,
            binding_suit: None,
        }
    }

    /// Creates a table with the given draw and discard piles.
    ///
    /// The binding suit is taken from the top of `played`.
    #[must_use]
    pub fn with_piles(deck: CardCollection, played: CardCollection) -> Self {
        let binding_suit = played.peek_last().ok().map(|card| card.suit);
        Self {
            deck,
            played,
            binding_suit,
            ..Self::new()
        }
    }

    /// Seats a player after the ones already seated.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Full`] when every seat is taken.
    pub fn seat_player(&mut self, player: Player) -> Result<(), TableError> {
        if self.players.len() == Self::MAX_PLAYERS {
            return Err(TableError::Full {
                max: Self::MAX_PLAYERS,
            });
        }

        self.players.push(player);
        Ok(())
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the seated players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in seat `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the player in seat `index` mutably.
    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Returns the seat index of the player whose turn it is.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// Returns the player whose turn it is, mutably.
    pub fn current_player_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.current)
    }

    /// Returns the player seated after the current one.
    #[must_use]
    pub fn next_player(&self) -> Option<&Player> {
        self.players.get(self.next_index()?)
    }

    /// Returns the player seated before the current one.
    #[must_use]
    pub fn previous_player(&self) -> Option<&Player> {
        self.players.get(self.previous_index()?)
    }

    /// Returns the player seated before the current one, mutably.
    pub fn previous_player_mut(&mut self) -> Option<&mut Player> {
        let index = self.previous_index()?;
        self.players.get_mut(index)
    }

    fn next_index(&self) -> Option<usize> {
        let count = self.players.len();
        (count > 0).then(|| (self.current + 1) % count)
    }

    fn previous_index(&self) -> Option<usize> {
        let count = self.players.len();
        (count > 0).then(|| (self.current + count - 1) % count)
    }

    /// Passes the turn to the next seat, wrapping around.
    pub fn advance_turn(&mut self) {
        if let Some(next) = self.next_index() {
            trace!(from = self.current, to = next, "turn advanced");
            self.current = next;
        }
    }

    /// Passes the turn back to the previous seat, wrapping around.
    pub fn retreat_turn(&mut self) {
        if let Some(previous) = self.previous_index() {
            trace!(from = self.current, to = previous, "turn retreated");
            self.current = previous;
        }
    }

    /// Returns the draw pile.
    #[must_use]
    pub const fn deck(&self) -> &CardCollection {
        &self.deck
    }

    /// Moves every card of `cards` to the bottom of the draw pile.
    pub fn add_to_deck(&mut self, mut cards: CardCollection) -> &mut Self {
        self.deck.concat(&mut cards);
        self
    }

    /// Returns the discard pile.
    #[must_use]
    pub const fn played(&self) -> &CardCollection {
        &self.played
    }

    /// Returns the card on top of the discard pile.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.played.peek_last().ok()
    }

    /// Returns the suit the next play has to match.
    ///
    /// `None` until the first card is played.
    #[must_use]
    pub const fn binding_suit(&self) -> Option<Suit> {
        self.binding_suit
    }

    /// Overrides the binding suit without touching the discard pile.
    pub fn set_binding_suit(&mut self, suit: Suit) -> &mut Self {
        self.binding_suit = Some(suit);
        self
    }

    /// Puts `card` on the discard pile and binds its suit.
    pub fn play_card(&mut self, card: Card) -> &mut Self {
        self.played.add(card);
        self.binding_suit = Some(card.suit);
        self
    }

    /// Puts every card of `cards` on the discard pile, in order.
    pub fn play_cards(&mut self, cards: CardCollection) -> &mut Self {
        for card in cards {
            self.play_card(card);
        }
        self
    }

    /// Moves `count` cards from the draw pile into the current player's hand.
    ///
    /// Returns `Ok(false)` when no player is seated.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the draw pile runs out.
    pub fn current_player_draws(&mut self, count: usize) -> Result<bool, CollectionError> {
        let Some(player) = self.players.get_mut(self.current) else {
            return Ok(false);
        };

        player.take_cards(&mut self.deck, count)?;
        Ok(true)
    }

    /// Deals `count` cards from the draw pile to every seated player in turn.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the draw pile runs out.
    pub fn deal(&mut self, count: usize) -> Result<(), CollectionError> {
        for player in &mut self.players {
            player.take_cards(&mut self.deck, count)?;
        }
        Ok(())
    }

    /// Draws the first regular card from the draw pile to open the discard
    /// pile.
    ///
    /// Action cards in front of it move to the bottom of the draw pile.
    /// Returns `None` if the draw pile holds only action cards.
    pub fn open_discard_pile(&mut self) -> Option<Card> {
        let card = self.deck.pick_first_where(|card| !card.is_action())?;
        self.play_card(card);
        Some(card)
    }
}
