use tracing::debug;

use crate::card::Rank;
use crate::error::PlayError;
use crate::result::RoundOutcome;
use crate::selector::{CardSelector, Request};

use super::Game;

impl<S: CardSelector> Game<S> {
    /// Plays the current player's turn.
    ///
    /// A player owing skipped turns sits this one out. Otherwise the selector
    /// picks a card, which is checked, moved from the hand to the discard
    /// pile and resolved. A player with nothing to play draws one card.
    ///
    /// The request for a Jack or an Ace is asked for once the card has left
    /// the player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No player is seated or nothing has been played yet
    /// - The selector picks a card the player does not hold
    /// - The picked card does not match the table
    /// - The draw pile runs out
    /// - The picked card's effect cannot be resolved
    pub fn play_round(&mut self) -> Result<RoundOutcome, PlayError> {
        let seat = self.table.current_index();
        let player = self.table.current_player_mut().ok_or(PlayError::NoPlayers)?;

        if !player.can_play() {
            player.consume_skipped_round();
            let remaining = player.rounds_to_skip();
            debug!(player = seat, remaining, "turn skipped");
            self.table.advance_turn();
            return Ok(RoundOutcome::Skipped {
                player: seat,
                remaining,
            });
        }

        let top = *self.table.top_card().ok_or(PlayError::NoCardOnTable)?;
        let binding_suit = self.table.binding_suit().ok_or(PlayError::NoCardOnTable)?;
        let player = self.table.current_player().ok_or(PlayError::NoPlayers)?;

        let Some(card) = self.selector.choose_card(player, &top, binding_suit) else {
            debug!(player = seat, "nothing to play, drawing");
            self.table.current_player_draws(1)?;
            self.table.advance_turn();
            return Ok(RoundOutcome::Drew { player: seat });
        };

        // A card still in hand is never the one on the table, even when a
        // second deck holds its twin.
        let in_hand = player.hand().position(|held| *held == card).is_some();
        let legal = if in_hand {
            self.validator.matches(&top, binding_suit, &card)
        } else {
            self.validator.accepts(&top, binding_suit, &card)?
        };
        if !legal {
            return Err(PlayError::IllegalPlay { card });
        }

        let player = self.table.current_player_mut().ok_or(PlayError::NoPlayers)?;
        let card = player
            .pick_one_by_rank_and_suit(card.rank, Some(card.suit))
            .map_err(PlayError::CardNotInHand)?;

        let request = match card.rank {
            Rank::Jack | Rank::Ace => self.selector.choose_request(player, &card),
            _ => None,
        };
        let request = match (card.rank, request) {
            (Rank::Ace, None) => Some(Request::Suit(card.suit)),
            (_, request) => request,
        };

        debug!(player = seat, %card, "card played");
        self.table.play_card(card);
        self.actions.after_card(&mut self.table, card, request)?;

        Ok(RoundOutcome::Played {
            player: seat,
            card,
            request,
        })
    }
}
