//! Game configuration options.

/// Configuration options for a Makao game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use makao::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_queen_is_wildcard(false)
///     .with_starting_cards(7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of decks combined into the draw pile.
    pub decks: u8,
    /// Whether a Queen matches every card.
    pub queen_is_wildcard: bool,
    /// Cards dealt to each player when the game starts.
    pub starting_cards: usize,
    /// Players needed to start the game, held within 2 and 4 at start.
    pub min_players: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            queen_is_wildcard: true,
            starting_cards: 5,
            min_players: 2,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use makao::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether a Queen matches every card.
    ///
    /// # Example
    ///
    /// ```
    /// use makao::GameOptions;
    ///
    /// let options = GameOptions::default().with_queen_is_wildcard(false);
    /// assert!(!options.queen_is_wildcard);
    /// ```
    #[must_use]
    pub const fn with_queen_is_wildcard(mut self, wildcard: bool) -> Self {
        self.queen_is_wildcard = wildcard;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use makao::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_cards(7);
    /// assert_eq!(options.starting_cards, 7);
    /// ```
    #[must_use]
    pub const fn with_starting_cards(mut self, cards: usize) -> Self {
        self.starting_cards = cards;
        self
    }

    /// Sets the number of players needed to start.
    ///
    /// # Example
    ///
    /// ```
    /// use makao::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_players(3);
    /// assert_eq!(options.min_players, 3);
    /// ```
    #[must_use]
    pub const fn with_min_players(mut self, players: usize) -> Self {
        self.min_players = players;
        self
    }
}
