//! Outcome of a played round.

use crate::card::Card;
use crate::selector::Request;

/// What happened during one call to [`Game::play_round`](crate::Game::play_round).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player sat out a turn owed to an earlier 4.
    Skipped {
        /// Seat of the player.
        player: usize,
        /// Turns still to sit out afterwards.
        remaining: usize,
    },
    /// The player had nothing to play and drew a card.
    Drew {
        /// Seat of the player.
        player: usize,
    },
    /// The player put a card down and its effect was resolved.
    Played {
        /// Seat of the player.
        player: usize,
        /// The card played.
        card: Card,
        /// The request made with a Jack or an Ace.
        request: Option<Request>,
    },
}

impl RoundOutcome {
    /// Returns the seat of the player whose turn it was.
    #[must_use]
    pub const fn player(&self) -> usize {
        match self {
            Self::Skipped { player, .. } | Self::Drew { player } | Self::Played { player, .. } => {
                *player
            }
        }
    }
}
