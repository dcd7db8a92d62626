use tracing::{debug, info};

use crate::collection::CardCollection;
use crate::error::{DealError, GameSetupError};
use crate::selector::CardSelector;
use crate::shuffle::Shuffler;
use crate::table::Table;

use super::{Game, GameState};

impl<S: CardSelector> Game<S> {
    /// Builds the decks configured in the options, shuffles them and puts
    /// them under the draw pile.
    pub fn prepare_deck<R: Shuffler>(&mut self, shuffler: &mut R) -> &Table {
        let deck = CardCollection::standard_deck(self.options.decks);
        let shuffled = CardCollection::from(shuffler.shuffle(deck.into_vec()));
        debug!(cards = shuffled.len(), "deck prepared");
        self.table.add_to_deck(shuffled);
        &self.table
    }

    /// Checks that the game can start.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has started, the draw pile is empty, or
    /// too few players are seated. The configured minimum is held within
    /// [`Table::MIN_PLAYERS`] and [`Table::MAX_PLAYERS`].
    pub fn validate_before_start(&self) -> Result<(), GameSetupError> {
        if self.is_started() {
            return Err(GameSetupError::AlreadyStarted);
        }

        if self.table.deck().is_empty() {
            return Err(GameSetupError::DeckNotPrepared);
        }

        let min = self
            .options
            .min_players
            .clamp(Table::MIN_PLAYERS, Table::MAX_PLAYERS);
        if self.table.player_count() < min {
            return Err(GameSetupError::NotEnoughPlayers { min });
        }

        Ok(())
    }

    /// Starts the game.
    ///
    /// The first regular card of the draw pile opens the discard pile, then
    /// every player is dealt their starting cards.
    ///
    /// # Errors
    ///
    /// Returns an error if [`validate_before_start`](Self::validate_before_start)
    /// fails, or [`GameSetupError::Aborted`] wrapping the cause if dealing
    /// fails part way through.
    pub fn start_game(&mut self) -> Result<(), GameSetupError> {
        self.validate_before_start()?;
        self.deal_opening().map_err(GameSetupError::Aborted)?;

        self.state = GameState::InProgress;
        info!(players = self.table.player_count(), "game started");

        Ok(())
    }

    fn deal_opening(&mut self) -> Result<(), DealError> {
        let opening = self
            .table
            .open_discard_pile()
            .ok_or(DealError::NoRegularCard)?;
        debug!(%opening, "discard pile opened");

        self.table.deal(self.options.starting_cards)?;
        Ok(())
    }
}
