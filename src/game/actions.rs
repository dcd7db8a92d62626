use tracing::debug;

use crate::card::{Card, Rank, Suit};
use crate::error::ActionError;
use crate::selector::Request;
use crate::table::Table;

/// Penalty added by every King of the duel.
const KING_PENALTY: usize = 5;

/// Resolves the effect of a played card, including every chained reaction.
///
/// Penalties collected along a chain accumulate in a counter that is reset
/// at the start of each [`after_card`](Self::after_card) call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardActionService {
    action_count: usize,
}

impl CardActionService {
    /// Creates a resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self { action_count: 0 }
    }

    /// Returns the penalty accumulated by the last resolved chain.
    #[must_use]
    pub const fn action_count(&self) -> usize {
        self.action_count
    }

    /// Resolves `card`, which the current player has just put on the
    /// discard pile.
    ///
    /// The turn passes to the next player first, so every effect starts with
    /// the player after the one who played `card`.
    ///
    /// | Rank  | Effect                                                 |
    /// |-------|--------------------------------------------------------|
    /// | 2, 3  | next player defends with the same rank or draws        |
    /// | 4     | next player defends with a 4 or sits out turns         |
    /// | Jack  | every player gives up the requested rank or draws one; |
    /// |       | nothing happens without a request                      |
    /// | King  | hearts and spades start a duel, loser draws            |
    /// | Ace   | binding suit changes to the requested suit             |
    ///
    /// # Errors
    ///
    /// Returns an error if no player is seated, the draw pile runs out, or
    /// `request` is missing or does not fit `card`.
    pub fn after_card(
        &mut self,
        table: &mut Table,
        card: Card,
        request: Option<Request>,
    ) -> Result<(), ActionError> {
        if table.player_count() == 0 {
            return Err(ActionError::NoPlayers);
        }

        self.action_count = 0;
        table.advance_turn();

        match card.rank {
            Rank::Two => self.taking_cards(table, Rank::Two, 2),
            Rank::Three => self.taking_cards(table, Rank::Three, 3),
            Rank::Four => self.skip_chain(table),
            Rank::Jack => match request {
                None => Ok(()),
                Some(Request::Rank(rank)) => self.request_rank_chain(table, rank),
                Some(request) => Err(ActionError::InvalidRequest {
                    rank: card.rank,
                    request,
                }),
            },
            Rank::King => self.king_duel(table, card.suit),
            Rank::Ace => match request {
                Some(Request::Suit(suit)) => {
                    debug!(%suit, "binding suit changed");
                    table.set_binding_suit(suit);
                    Ok(())
                }
                Some(request) => Err(ActionError::InvalidRequest {
                    rank: card.rank,
                    request,
                }),
                None => Err(ActionError::MissingRequest { rank: card.rank }),
            },
            Rank::Five
            | Rank::Six
            | Rank::Seven
            | Rank::Eight
            | Rank::Nine
            | Rank::Ten
            | Rank::Queen => Ok(()),
        }
    }

    /// The current player defends with every card of `rank` they hold, or
    /// draws the whole accumulated penalty.
    fn taking_cards(
        &mut self,
        table: &mut Table,
        rank: Rank,
        penalty: usize,
    ) -> Result<(), ActionError> {
        self.action_count += penalty;

        let defence = table
            .current_player_mut()
            .ok_or(ActionError::NoPlayers)?
            .pick_all_by_rank(rank);

        match defence {
            Ok(cards) => {
                debug!(
                    player = table.current_index(),
                    %rank,
                    defended = cards.len(),
                    total = self.action_count,
                    "penalty passed on"
                );
                table.play_cards(cards);
                table.advance_turn();
                self.taking_cards(table, rank, penalty)
            }
            Err(_) => self.current_player_draws(table, self.action_count),
        }
    }

    /// The current player passes the skip on with a 4, or sits out every
    /// turn collected so far.
    fn skip_chain(&mut self, table: &mut Table) -> Result<(), ActionError> {
        self.action_count += 1;

        let player = table.current_player_mut().ok_or(ActionError::NoPlayers)?;
        match player.pick_one_by_rank_and_suit(Rank::Four, None) {
            Ok(card) => {
                table.play_card(card);
                table.advance_turn();
                self.skip_chain(table)
            }
            Err(_) => {
                // This turn is already lost by passing over the player.
                let rounds = self.action_count - 1;
                player.add_rounds_to_skip(rounds);
                debug!(player = table.current_index(), rounds, "turns to skip added");
                table.advance_turn();
                Ok(())
            }
        }
    }

    /// One pass around the table: each player gives up every card of `rank`
    /// or draws one.
    fn request_rank_chain(&mut self, table: &mut Table, rank: Rank) -> Result<(), ActionError> {
        for _ in 0..table.player_count() {
            let answer = table
                .current_player_mut()
                .ok_or(ActionError::NoPlayers)?
                .pick_all_by_rank(rank);

            match answer {
                Ok(cards) => {
                    debug!(player = table.current_index(), %rank, given = cards.len(), "request met");
                    table.play_cards(cards);
                }
                Err(_) => {
                    debug!(player = table.current_index(), %rank, "request missed");
                    self.draw(table, 1)?;
                }
            }

            table.advance_turn();
        }

        Ok(())
    }

    /// The King duel: a King of Hearts is answered by the next player with a
    /// King of Spades, a King of Spades by the previous player with a King of
    /// Hearts. Whoever cannot answer draws the accumulated penalty.
    fn king_duel(&mut self, table: &mut Table, suit: Suit) -> Result<(), ActionError> {
        self.action_count += KING_PENALTY;

        match suit {
            Suit::Hearts => {
                let answer = table
                    .current_player_mut()
                    .ok_or(ActionError::NoPlayers)?
                    .pick_one_by_rank_and_suit(Rank::King, Some(Suit::Spades));

                match answer {
                    Ok(card) => {
                        debug!(player = table.current_index(), "king of spades answers");
                        table.play_card(card);
                        table.advance_turn();
                        self.king_duel(table, Suit::Spades)
                    }
                    Err(_) => self.current_player_draws(table, self.action_count),
                }
            }
            Suit::Spades => {
                table.retreat_turn();

                let answer = table
                    .previous_player_mut()
                    .ok_or(ActionError::NoPlayers)?
                    .pick_one_by_rank_and_suit(Rank::King, Some(Suit::Hearts));

                match answer {
                    Ok(card) => {
                        debug!(player = table.current_index(), "king of hearts answers");
                        table.play_card(card);
                        self.king_duel(table, Suit::Hearts)
                    }
                    Err(_) => {
                        table.retreat_turn();
                        self.current_player_draws(table, self.action_count)
                    }
                }
            }
            Suit::Diamonds | Suit::Clubs => Ok(()),
        }
    }

    /// The current player draws `count` cards and the turn moves on.
    fn current_player_draws(&self, table: &mut Table, count: usize) -> Result<(), ActionError> {
        self.draw(table, count)?;
        table.advance_turn();
        Ok(())
    }

    fn draw(&self, table: &mut Table, count: usize) -> Result<(), ActionError> {
        debug!(player = table.current_index(), count, "forced draw");
        if table.current_player_draws(count)? {
            Ok(())
        } else {
            Err(ActionError::NoPlayers)
        }
    }
}
