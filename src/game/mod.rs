//! Game engine and round orchestration.

use crate::error::TableError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::selector::CardSelector;
use crate::table::Table;
use crate::validator::CardValidator;

mod actions;
mod round;
mod setup;
pub mod state;

pub use actions::CardActionService;
pub use state::GameState;

/// A Makao game: a table, the rules in force and the strategy choosing cards.
///
/// The game owns the table. Each call to [`play_round`](Self::play_round)
/// runs one turn to completion, including every chained card effect.
#[derive(Debug)]
pub struct Game<S> {
    /// The table the game is played on.
    table: Table,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Strategy picking cards for every player.
    selector: S,
    /// Legal move checks.
    validator: CardValidator,
    /// Card effect resolver.
    actions: CardActionService,
}

impl<S: CardSelector> Game<S> {
    /// Creates a game around an empty table.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use makao::{Card, CardSelector, Game, GameOptions, Player, Suit};
    ///
    /// struct Pass;
    ///
    /// impl CardSelector for Pass {
    ///     fn choose_card(&mut self, _: &Player, _: &Card, _: Suit) -> Option<Card> {
    ///         None
    ///     }
    /// }
    ///
    /// let game = Game::new(GameOptions::default(), Pass);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, selector: S) -> Self {
        Self::resume(Table::new(), options, selector)
    }

    /// Creates a game around an existing table.
    ///
    /// A table with a card on the discard pile is treated as a game already
    /// in progress.
    #[must_use]
    pub fn resume(table: Table, options: GameOptions, selector: S) -> Self {
        let state = if table.top_card().is_some() {
            GameState::InProgress
        } else {
            GameState::WaitingForPlayers
        };

        Self {
            table,
            options,
            state,
            selector,
            validator: CardValidator::from_options(&options),
            actions: CardActionService::new(),
        }
    }

    /// Seats `players` in order.
    ///
    /// Players seated before the table filled up stay seated.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Full`] once every seat is taken.
    pub fn add_players<I>(&mut self, players: I) -> Result<&mut Self, TableError>
    where
        I: IntoIterator<Item = Player>,
    {
        for player in players {
            self.table.seat_player(player)?;
        }

        Ok(self)
    }

    /// Returns the table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the table mutably.
    pub const fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the opening cards have been dealt.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        matches!(self.state, GameState::InProgress)
    }

    /// Returns the card selector.
    #[must_use]
    pub const fn selector(&self) -> &S {
        &self.selector
    }

    /// Returns the card selector mutably.
    pub const fn selector_mut(&mut self) -> &mut S {
        &mut self.selector
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.table.current_player()
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.table.deck().len()
    }
}
