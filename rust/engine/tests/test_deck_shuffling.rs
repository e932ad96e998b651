use std::collections::HashSet;

use sevenstud_engine::cards::Card;
use sevenstud_engine::deck::Deck;
use sevenstud_engine::errors::GameError;

#[test]
fn deck_reset_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.reset();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal(1).expect("should have 52 cards")[0];
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    // Compare first 10 cards
    let a: Vec<Card> = d1.deal(10).unwrap();
    let b: Vec<Card> = d2.deal(10).unwrap();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = d1.deal(10).unwrap();
    let b: Vec<Card> = d2.deal(10).unwrap();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn three_deals_of_three_leave_43_unique_cards() {
    let mut deck = Deck::new_with_seed(7);
    deck.shuffle();
    let mut seen = HashSet::new();
    for _ in 0..3 {
        for c in deck.deal(3).unwrap() {
            assert!(seen.insert(c));
        }
    }
    assert_eq!(seen.len(), 9);
    assert_eq!(deck.remaining(), 43);
}

#[test]
fn over_deal_fails_without_partial_result() {
    let mut deck = Deck::new_with_seed(9);
    deck.shuffle();
    deck.deal(50).unwrap();
    let err = deck.deal(3).unwrap_err();
    assert_eq!(
        err,
        GameError::DeckExhausted {
            requested: 3,
            remaining: 2
        }
    );
    // the failed deal consumed nothing
    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.deal(2).unwrap().len(), 2);
}
