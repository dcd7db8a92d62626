//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Seating players and preparing the deck.
    WaitingForPlayers,
    /// Cards have been dealt and rounds are being played.
    InProgress,
}
