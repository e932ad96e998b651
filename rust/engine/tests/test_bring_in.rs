use sevenstud_engine::cards::{Card, Rank, Suit};
use sevenstud_engine::engine::{best_visible, determine_bring_in};
use sevenstud_engine::errors::GameError;
use sevenstud_engine::hand::StandardEvaluator;
use sevenstud_engine::player::{Facing, Player};

fn c(rank: Rank, suit: Suit) -> Card {
    Card { rank, suit }
}

fn seat_with_upcard(id: usize, up: Card) -> Player {
    let mut p = Player::new(id, &format!("p{}", id), 100);
    p.receive(c(Rank::Nine, Suit::Hearts), Facing::Down);
    p.receive(c(Rank::Ten, Suit::Hearts), Facing::Down);
    p.receive(up, Facing::Up);
    p
}

#[test]
fn lowest_rank_posts_the_bring_in() {
    let seats = vec![
        seat_with_upcard(0, c(Rank::Three, Suit::Clubs)),
        seat_with_upcard(1, c(Rank::Two, Suit::Spades)),
        seat_with_upcard(2, c(Rank::Four, Suit::Clubs)),
    ];
    assert_eq!(determine_bring_in(&seats).unwrap(), 1);
}

#[test]
fn rank_tie_breaks_by_suit_table() {
    // both hold a deuce; clubs ranks below hearts
    let seats = vec![
        seat_with_upcard(0, c(Rank::Two, Suit::Hearts)),
        seat_with_upcard(1, c(Rank::Two, Suit::Clubs)),
        seat_with_upcard(2, c(Rank::King, Suit::Diamonds)),
    ];
    assert_eq!(determine_bring_in(&seats).unwrap(), 1);
}

#[test]
fn resolution_is_deterministic() {
    let build = || {
        vec![
            seat_with_upcard(0, c(Rank::Seven, Suit::Diamonds)),
            seat_with_upcard(1, c(Rank::Seven, Suit::Spades)),
            seat_with_upcard(2, c(Rank::Queen, Suit::Clubs)),
        ]
    };
    let first = determine_bring_in(&build()).unwrap();
    for _ in 0..10 {
        assert_eq!(determine_bring_in(&build()).unwrap(), first);
    }
    assert_eq!(first, 0); // diamonds below spades
}

#[test]
fn folded_seats_are_ignored() {
    let mut seats = vec![
        seat_with_upcard(0, c(Rank::Two, Suit::Clubs)),
        seat_with_upcard(1, c(Rank::Ace, Suit::Spades)),
    ];
    seats[0].fold();
    assert_eq!(determine_bring_in(&seats).unwrap(), 1);
}

#[test]
fn single_active_seat_is_trivially_the_bring_in() {
    let seats = vec![seat_with_upcard(0, c(Rank::Ace, Suit::Spades))];
    assert_eq!(determine_bring_in(&seats).unwrap(), 0);
}

#[test]
fn no_active_seats_is_an_invalid_state() {
    let err = determine_bring_in(&[]).unwrap_err();
    assert_eq!(err, GameError::InvalidState("no active players"));
}

#[test]
fn seat_without_an_upcard_is_an_invalid_state() {
    let mut p = Player::new(0, "p0", 100);
    p.receive(c(Rank::Two, Suit::Clubs), Facing::Down);
    let err = determine_bring_in(&[p]).unwrap_err();
    assert_eq!(err, GameError::InvalidState("seat has no upcard"));
}

#[test]
fn best_visible_hand_acts_first_on_later_streets() {
    let eval = StandardEvaluator;
    let mut ace_high = Player::new(0, "p0", 100);
    ace_high.receive(c(Rank::Ace, Suit::Hearts), Facing::Up);
    ace_high.receive(c(Rank::Two, Suit::Clubs), Facing::Up);
    let mut kings = Player::new(1, "p1", 100);
    kings.receive(c(Rank::King, Suit::Diamonds), Facing::Up);
    kings.receive(c(Rank::King, Suit::Clubs), Facing::Up);

    let seats = vec![ace_high, kings];
    assert_eq!(best_visible(&seats, &eval).unwrap(), 1);
}

#[test]
fn best_visible_tie_goes_to_the_earliest_seat() {
    let eval = StandardEvaluator;
    // suits differ but evaluation ignores them below a flush
    let mut a = Player::new(0, "p0", 100);
    a.receive(c(Rank::Ace, Suit::Hearts), Facing::Up);
    let mut b = Player::new(1, "p1", 100);
    b.receive(c(Rank::Ace, Suit::Spades), Facing::Up);

    let seats = vec![a, b];
    assert_eq!(best_visible(&seats, &eval).unwrap(), 0);
}
