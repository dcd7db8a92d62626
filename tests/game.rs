//! Game setup and round flow tests.

use std::collections::VecDeque;
use std::error::Error;

use makao::{
    Card, CardCollection, CardSelector, CollectionError, DECK_SIZE, DealError, Game, GameOptions,
    GameSetupError, GameState, PlayError, Player, Rank, Request, RoundOutcome, SeededShuffler,
    Suit, Table, TableError, ValidationError,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Plays back queued answers and records what it was asked.
#[derive(Debug, Default)]
struct Scripted {
    cards: VecDeque<Option<Card>>,
    requests: VecDeque<Option<Request>>,
    asked: Vec<(String, Card, Suit)>,
    hands_at_request: Vec<CardCollection>,
}

impl Scripted {
    fn playing(cards: impl IntoIterator<Item = Option<Card>>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            ..Self::default()
        }
    }

    fn requesting(mut self, request: Option<Request>) -> Self {
        self.requests.push_back(request);
        self
    }
}

impl CardSelector for Scripted {
    fn choose_card(&mut self, player: &Player, top: &Card, binding_suit: Suit) -> Option<Card> {
        self.asked
            .push((player.name().to_owned(), *top, binding_suit));
        self.cards.pop_front().flatten()
    }

    fn choose_request(&mut self, player: &Player, _played: &Card) -> Option<Request> {
        self.hands_at_request.push(player.hand().clone());
        self.requests.pop_front().flatten()
    }
}

/// A full deck with a 2 of hearts moved in front of the 5 of clubs.
fn opening_deck() -> CardCollection {
    let two = card(Rank::Two, Suit::Hearts);
    let five = card(Rank::Five, Suit::Clubs);
    let mut deck = CardCollection::from(vec![two, five]);
    deck.extend(
        CardCollection::standard_deck(1)
            .into_iter()
            .filter(|card| *card != two && *card != five),
    );
    deck
}

/// John holds an 8 of spades and a 5 of hearts, Andy holds nothing, a 6 of
/// hearts is on the table and four cards are left to draw.
fn round_table() -> Table {
    let deck = CardCollection::from(vec![
        card(Rank::Ace, Suit::Clubs),
        card(Rank::King, Suit::Clubs),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Jack, Suit::Clubs),
    ]);
    let played = CardCollection::from(vec![card(Rank::Six, Suit::Hearts)]);
    let mut table = Table::with_piles(deck, played);

    let hand = CardCollection::from(vec![
        card(Rank::Eight, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
    ]);
    table.seat_player(Player::with_hand("John", hand)).unwrap();
    table.seat_player(Player::new("Andy")).unwrap();
    table
}

fn round_game(selector: Scripted) -> Game<Scripted> {
    Game::resume(round_table(), GameOptions::default(), selector)
}

#[test]
fn new_game_starts_with_empty_table() {
    let game = Game::new(GameOptions::default(), Scripted::default());

    assert!(!game.is_started());
    assert_eq!(game.state(), GameState::WaitingForPlayers);
    assert_eq!(game.table().player_count(), 0);
    assert!(game.table().deck().is_empty());
    assert!(game.table().played().is_empty());
}

#[test]
fn add_players_seats_up_to_four() {
    let mut game = Game::new(GameOptions::default(), Scripted::default());

    game.add_players(["John", "Andy", "Tom", "Sam"].map(Player::new))
        .unwrap();
    assert_eq!(game.table().player_count(), 4);

    let err = game.add_players([Player::new("Max")]).unwrap_err();
    assert_eq!(err, TableError::Full { max: 4 });
    assert_eq!(game.table().player_count(), 4);
}

#[test]
fn prepare_deck_puts_shuffled_deck_on_table() {
    let mut game = Game::new(GameOptions::default(), Scripted::default());
    let mut reverse = |mut cards: Vec<Card>| {
        cards.reverse();
        cards
    };

    let table = game.prepare_deck(&mut reverse);

    assert_eq!(table.deck().len(), DECK_SIZE);
    assert!(table.played().is_empty());
    assert_eq!(table.deck().get(0), Some(&card(Rank::Ace, Suit::Hearts)));
    assert_eq!(table.deck().peek_last().unwrap(), &card(Rank::Two, Suit::Diamonds));
}

#[test]
fn prepare_deck_combines_configured_decks() {
    let options = GameOptions::default().with_decks(2);
    let mut game = Game::new(options, Scripted::default());

    game.prepare_deck(&mut SeededShuffler::new(3));

    assert_eq!(game.cards_remaining(), 2 * DECK_SIZE);
}

#[test]
fn seeded_deck_is_a_repeatable_permutation() {
    let mut first = Game::new(GameOptions::default(), Scripted::default());
    let mut second = Game::new(GameOptions::default(), Scripted::default());

    first.prepare_deck(&mut SeededShuffler::new(42));
    second.prepare_deck(&mut SeededShuffler::new(42));

    let deck = first.table().deck();
    assert_eq!(deck, second.table().deck());
    assert_ne!(deck, &CardCollection::standard_deck(1));
    for expected in &CardCollection::standard_deck(1) {
        assert_eq!(deck.iter().filter(|card| *card == expected).count(), 1);
    }
}

#[test]
fn start_requires_prepared_deck() {
    let mut game = Game::new(GameOptions::default(), Scripted::default());

    let err = game.start_game().unwrap_err();

    assert_eq!(err, GameSetupError::DeckNotPrepared);
    assert_eq!(err.to_string(), "prepare card deck before game start");
    assert!(!game.is_started());
}

#[test]
fn start_requires_minimum_players() {
    let mut game = Game::new(GameOptions::default(), Scripted::default());
    game.table_mut().add_to_deck(CardCollection::from(vec![
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Four, Suit::Spades),
    ]));

    let err = game.start_game().unwrap_err();

    assert_eq!(err, GameSetupError::NotEnoughPlayers { min: 2 });
    assert_eq!(err.to_string(), "you need minimum 2 players to start the game");
}

#[test]
fn start_holds_minimum_players_at_two() {
    let options = GameOptions::default().with_min_players(0);
    let mut game = Game::new(options, Scripted::default());
    game.prepare_deck(&mut SeededShuffler::new(5));

    assert_eq!(
        game.start_game().unwrap_err(),
        GameSetupError::NotEnoughPlayers { min: 2 }
    );

    game.add_players([Player::new("John")]).unwrap();
    assert_eq!(
        game.start_game().unwrap_err(),
        GameSetupError::NotEnoughPlayers { min: 2 }
    );
    assert!(!game.is_started());
    assert!(game.table().played().is_empty());
}

#[test]
fn start_holds_minimum_players_at_table_capacity() {
    let options = GameOptions::default().with_min_players(9);
    let mut game = Game::new(options, Scripted::default());
    game.add_players(["John", "Andy", "Tom", "Sam"].map(Player::new))
        .unwrap();
    game.prepare_deck(&mut SeededShuffler::new(5));

    game.start_game().unwrap();

    assert!(game.is_started());
}

#[test]
fn start_opens_with_first_regular_card_and_deals_five() {
    let mut game = Game::new(GameOptions::default(), Scripted::default());
    game.add_players(["John", "Andy", "Tom"].map(Player::new))
        .unwrap();
    game.table_mut().add_to_deck(opening_deck());

    game.start_game().unwrap();

    let table = game.table();
    assert!(game.is_started());
    assert_eq!(table.played().as_slice(), [card(Rank::Five, Suit::Clubs)]);
    assert_eq!(table.binding_suit(), Some(Suit::Clubs));
    for player in table.players() {
        assert_eq!(player.hand().len(), 5);
    }
    assert_eq!(table.deck().len(), DECK_SIZE - 1 - 15);
    assert_eq!(
        table.deck().peek_last().unwrap(),
        &card(Rank::Two, Suit::Hearts)
    );
    assert_eq!(
        table.player(0).unwrap().hand().get(0),
        Some(&card(Rank::Two, Suit::Diamonds))
    );
}

#[test]
fn start_honours_starting_cards_option() {
    let options = GameOptions::default().with_starting_cards(7);
    let mut game = Game::new(options, Scripted::default());
    game.add_players(["John", "Andy"].map(Player::new)).unwrap();
    game.prepare_deck(&mut SeededShuffler::new(9));

    game.start_game().unwrap();

    assert_eq!(game.table().player(1).unwrap().hand().len(), 7);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 1 - 14);
}

#[test]
fn start_wraps_missing_regular_card() {
    let mut game = Game::new(GameOptions::default(), Scripted::default());
    game.add_players(["John", "Andy"].map(Player::new)).unwrap();
    game.table_mut().add_to_deck(CardCollection::from(vec![
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Four, Suit::Spades),
    ]));

    let err = game.start_game().unwrap_err();

    assert_eq!(err, GameSetupError::Aborted(DealError::NoRegularCard));
    assert_eq!(
        err.to_string(),
        "the game needs help! issue: no regular cards in collection"
    );
    assert_eq!(
        err.source().map(ToString::to_string).as_deref(),
        Some("no regular cards in collection")
    );
    assert!(!game.is_started());
}

#[test]
fn start_wraps_running_out_of_cards_while_dealing() {
    let mut game = Game::new(GameOptions::default(), Scripted::default());
    game.add_players(["John", "Andy"].map(Player::new)).unwrap();
    game.table_mut().add_to_deck(CardCollection::from(vec![
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Spades),
        card(Rank::Seven, Suit::Spades),
    ]));

    let err = game.start_game().unwrap_err();

    assert_eq!(
        err,
        GameSetupError::Aborted(DealError::Collection(CollectionError::Empty))
    );
}

#[test]
fn start_only_once() {
    let mut game = Game::new(GameOptions::default(), Scripted::default());
    game.add_players(["John", "Andy"].map(Player::new)).unwrap();
    game.prepare_deck(&mut SeededShuffler::new(1));
    game.start_game().unwrap();

    assert_eq!(game.start_game().unwrap_err(), GameSetupError::AlreadyStarted);
}

#[test]
fn round_puts_chosen_card_on_the_table() {
    let chosen = card(Rank::Five, Suit::Hearts);
    let mut game = round_game(Scripted::playing([Some(chosen)]));

    let outcome = game.play_round().unwrap();

    assert_eq!(
        outcome,
        RoundOutcome::Played {
            player: 0,
            card: chosen,
            request: None,
        }
    );
    let table = game.table();
    assert_eq!(table.top_card(), Some(&chosen));
    assert_eq!(
        table.player(0).unwrap().hand().as_slice(),
        [card(Rank::Eight, Suit::Spades)]
    );
    assert_eq!(table.current_index(), 1);
    assert_eq!(
        game.selector().asked,
        [("John".to_owned(), card(Rank::Six, Suit::Hearts), Suit::Hearts)]
    );
}

#[test]
fn round_without_card_to_play_draws_one() {
    let mut game = round_game(Scripted::playing([None]));

    let outcome = game.play_round().unwrap();

    assert_eq!(outcome, RoundOutcome::Drew { player: 0 });
    let table = game.table();
    assert_eq!(table.top_card(), Some(&card(Rank::Six, Suit::Hearts)));
    assert_eq!(table.player(0).unwrap().hand().len(), 3);
    assert_eq!(table.deck().len(), 3);
    assert_eq!(game.current_player().unwrap().name(), "Andy");
}

#[test]
fn round_skips_player_owing_turns() {
    let mut game = round_game(Scripted::default());
    game.table_mut()
        .player_mut(0)
        .unwrap()
        .add_rounds_to_skip(2);

    let outcome = game.play_round().unwrap();

    assert_eq!(
        outcome,
        RoundOutcome::Skipped {
            player: 0,
            remaining: 1,
        }
    );
    assert!(game.selector().asked.is_empty());
    let table = game.table();
    assert_eq!(table.top_card(), Some(&card(Rank::Six, Suit::Hearts)));
    assert_eq!(table.player(0).unwrap().hand().len(), 2);
    assert_eq!(table.deck().len(), 4);
    assert_eq!(game.current_player().unwrap().name(), "Andy");
}

#[test]
fn round_rejects_illegal_card() {
    let wrong = card(Rank::Eight, Suit::Spades);
    let mut game = round_game(Scripted::playing([Some(wrong)]));

    assert_eq!(
        game.play_round().unwrap_err(),
        PlayError::IllegalPlay { card: wrong }
    );
    assert_eq!(game.table().player(0).unwrap().hand().len(), 2);
    assert_eq!(game.table().current_index(), 0);
}

#[test]
fn round_rejects_card_not_in_hand() {
    let foreign = card(Rank::Nine, Suit::Hearts);
    let mut game = round_game(Scripted::playing([Some(foreign)]));

    let err = game.play_round().unwrap_err();

    assert!(matches!(err, PlayError::CardNotInHand(ref missing) if missing.rank == Rank::Nine));
    assert_eq!(game.table().played().len(), 1);
}

#[test]
fn round_rejects_replaying_top_card() {
    let top = card(Rank::Six, Suit::Hearts);
    let mut game = round_game(Scripted::playing([Some(top)]));

    assert_eq!(
        game.play_round().unwrap_err(),
        PlayError::Validation(ValidationError::DuplicatePlay(top))
    );
}

#[test]
fn round_needs_a_card_on_the_table() {
    let mut game = Game::new(GameOptions::default(), Scripted::playing([None]));
    game.add_players(["John", "Andy"].map(Player::new)).unwrap();

    assert_eq!(game.play_round().unwrap_err(), PlayError::NoCardOnTable);
    assert_eq!(
        Game::new(GameOptions::default(), Scripted::default())
            .play_round()
            .unwrap_err(),
        PlayError::NoPlayers
    );
}

#[test]
fn round_resolves_action_card() {
    let two = card(Rank::Two, Suit::Hearts);
    let mut game = round_game(Scripted::playing([Some(two)]));
    game.table_mut().player_mut(0).unwrap().receive(two);

    game.play_round().unwrap();

    let table = game.table();
    assert_eq!(table.player(1).unwrap().hand().len(), 2);
    assert_eq!(table.current_index(), 0);
    assert_eq!(table.deck().len(), 2);
}

#[test]
fn ace_without_request_keeps_its_own_suit() {
    let ace = card(Rank::Ace, Suit::Hearts);
    let mut game = round_game(Scripted::playing([Some(ace)]));
    game.table_mut().player_mut(0).unwrap().receive(ace);

    let outcome = game.play_round().unwrap();

    assert_eq!(
        outcome,
        RoundOutcome::Played {
            player: 0,
            card: ace,
            request: Some(Request::Suit(Suit::Hearts)),
        }
    );
    assert_eq!(game.table().binding_suit(), Some(Suit::Hearts));
}

#[test]
fn ace_request_changes_binding_suit_for_next_player() {
    let ace = card(Rank::Ace, Suit::Hearts);
    let clubs = card(Rank::Nine, Suit::Clubs);
    let selector = Scripted::playing([Some(ace), Some(clubs)])
        .requesting(Some(Request::Suit(Suit::Clubs)));
    let mut game = round_game(selector);
    game.table_mut().player_mut(0).unwrap().receive(ace);
    game.table_mut().player_mut(1).unwrap().receive(clubs);

    game.play_round().unwrap();
    assert_eq!(game.table().binding_suit(), Some(Suit::Clubs));

    game.play_round().unwrap();

    assert_eq!(game.table().top_card(), Some(&clubs));
    assert_eq!(game.selector().asked[1], ("Andy".to_owned(), ace, Suit::Clubs));
}

#[test]
fn jack_request_goes_around_the_table() {
    let jack = card(Rank::Jack, Suit::Hearts);
    let selector = Scripted::playing([Some(jack)]).requesting(Some(Request::Rank(Rank::Eight)));
    let mut game = round_game(selector);
    game.table_mut().player_mut(0).unwrap().receive(jack);

    game.play_round().unwrap();

    let table = game.table();
    assert_eq!(table.top_card(), Some(&card(Rank::Eight, Suit::Spades)));
    assert_eq!(
        table.player(0).unwrap().hand().as_slice(),
        [card(Rank::Five, Suit::Hearts)]
    );
    assert_eq!(table.player(1).unwrap().hand().len(), 1);
    assert_eq!(table.current_index(), 1);
}

#[test]
fn queen_wildcard_follows_options() {
    let queen = card(Rank::Queen, Suit::Spades);

    let mut game = round_game(Scripted::playing([Some(queen)]));
    game.table_mut().player_mut(0).unwrap().receive(queen);
    assert!(game.play_round().is_ok());

    let options = GameOptions::default().with_queen_is_wildcard(false);
    let mut strict = Game::resume(round_table(), options, Scripted::playing([Some(queen)]));
    strict.table_mut().player_mut(0).unwrap().receive(queen);
    assert_eq!(
        strict.play_round().unwrap_err(),
        PlayError::IllegalPlay { card: queen }
    );
}

#[test]
fn twin_of_top_card_from_second_deck_is_playable() {
    let twin = card(Rank::Six, Suit::Hearts);
    let options = GameOptions::default().with_decks(2);
    let mut game = Game::resume(round_table(), options, Scripted::playing([Some(twin)]));
    game.table_mut().player_mut(0).unwrap().receive(twin);

    let outcome = game.play_round().unwrap();

    assert_eq!(
        outcome,
        RoundOutcome::Played {
            player: 0,
            card: twin,
            request: None,
        }
    );
    let table = game.table();
    assert_eq!(table.played().as_slice(), [twin, twin]);
    assert_eq!(table.player(0).unwrap().hand().len(), 2);
    assert_eq!(table.current_index(), 1);
}

#[test]
fn two_deck_game_plays_twins_without_error() {
    let options = GameOptions::default().with_decks(2);
    let mut game = Game::new(options, Scripted::default());
    game.add_players(["John", "Andy"].map(Player::new)).unwrap();
    let mut twins_first = |cards: Vec<Card>| {
        // Every card is followed by its twin from the second deck.
        let (first, second) = cards.split_at(DECK_SIZE);
        first
            .iter()
            .zip(second)
            .flat_map(|(a, b)| [*a, *b])
            .rev()
            .collect::<Vec<_>>()
    };
    game.prepare_deck(&mut twins_first);
    game.start_game().unwrap();

    let top = *game.table().top_card().unwrap();
    assert_eq!(game.table().player(0).unwrap().hand().get(0), Some(&top));

    game.selector_mut().cards.push_back(Some(top));
    let outcome = game.play_round().unwrap();

    assert_eq!(outcome.player(), 0);
    assert_eq!(game.table().played().len(), 2);
    let table = game.table();
    let in_hands: usize = table.players().iter().map(|player| player.hand().len()).sum();
    assert_eq!(
        in_hands + table.played().len() + table.deck().len(),
        2 * DECK_SIZE
    );
}

#[test]
fn jack_without_request_changes_nothing() {
    let jack = card(Rank::Jack, Suit::Hearts);
    let mut game = round_game(Scripted::playing([Some(jack)]).requesting(None));
    game.table_mut().player_mut(0).unwrap().receive(jack);

    game.play_round().unwrap();

    let table = game.table();
    assert_eq!(table.top_card(), Some(&jack));
    assert_eq!(table.player(0).unwrap().hand().len(), 2);
    assert!(table.player(1).unwrap().hand().is_empty());
    assert_eq!(table.deck().len(), 4);
    assert_eq!(table.current_index(), 1);
}

#[test]
fn request_is_asked_after_card_leaves_hand() {
    let ace = card(Rank::Ace, Suit::Hearts);
    let selector = Scripted::playing([Some(ace)]).requesting(Some(Request::Suit(Suit::Spades)));
    let mut game = round_game(selector);
    game.table_mut().player_mut(0).unwrap().receive(ace);

    game.play_round().unwrap();

    assert_eq!(
        game.selector().hands_at_request,
        [CardCollection::from(vec![
            card(Rank::Eight, Suit::Spades),
            card(Rank::Five, Suit::Hearts),
        ])]
    );
    assert_eq!(game.table().binding_suit(), Some(Suit::Spades));
}
