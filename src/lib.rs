//! A Makao rule engine with optional `no_std` support.
//!
//! Makao is a shedding game of the Crazy Eights family for two to four
//! players. The crate provides a [`Game`] type that deals, checks moves and
//! resolves the chained effects of action cards: forced draws, skipped turns,
//! rank requests, suit changes and the King duel.
//!
//! Card choice is left to a [`CardSelector`] and shuffling to a
//! [`Shuffler`], so human input, bots and scripted tests plug in the same way.
//!
//! # Example
//!
//! ```no_run
//! use makao::{Card, CardSelector, Game, GameOptions, Player, SeededShuffler, Suit};
//!
//! struct Pass;
//!
//! impl CardSelector for Pass {
//!     fn choose_card(&mut self, _: &Player, _: &Card, _: Suit) -> Option<Card> {
//!         None
//!     }
//! }
//!
//! let mut game = Game::new(GameOptions::default(), Pass);
//! game.add_players([Player::new("Andy"), Player::new("Tom")]).unwrap();
//! game.prepare_deck(&mut SeededShuffler::new(42));
//! game.start_game().unwrap();
//! game.play_round().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod collection;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod selector;
pub mod shuffle;
pub mod table;
pub mod validator;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use collection::CardCollection;
pub use error::{
    ActionError, CardNotFound, CollectionError, DealError, GameSetupError, PlayError, TableError,
    ValidationError,
};
pub use game::{CardActionService, Game, GameState};
pub use options::GameOptions;
pub use player::Player;
pub use result::RoundOutcome;
pub use selector::{CardSelector, Request};
pub use shuffle::{SeededShuffler, Shuffler};
pub use table::Table;
pub use validator::CardValidator;
