//! The seam between the engine and whoever picks the cards.

use core::fmt;

use crate::card::{Card, Rank, Suit};
use crate::player::Player;

/// What a Jack or an Ace asks of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Request {
    /// Every player must give up cards of this rank (Jack).
    Rank(Rank),
    /// The next play must match this suit (Ace).
    Suit(Suit),
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rank(rank) => write!(f, "value {rank}"),
            Self::Suit(suit) => write!(f, "color {suit}"),
        }
    }
}

/// Chooses the card a player puts down.
///
/// Human input, scripted play and bots all plug in here without touching the
/// rule engine.
pub trait CardSelector {
    /// Picks a card from `player`'s hand that may go on `top` while
    /// `binding_suit` is in force.
    ///
    /// The returned card must be one the player holds. Returning `None` means
    /// the player has nothing to play and draws instead.
    fn choose_card(&mut self, player: &Player, top: &Card, binding_suit: Suit) -> Option<Card>;

    /// Picks the request that goes with `played`.
    ///
    /// Only called for Jacks and Aces, after `played` has left `player`'s
    /// hand. The default requests nothing: a Jack without a request has no
    /// effect and nobody draws, an Ace keeps its own suit.
    fn choose_request(&mut self, player: &Player, played: &Card) -> Option<Request> {
        let _ = (player, played);
        None
    }
}
