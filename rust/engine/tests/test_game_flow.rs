use sevenstud_engine::engine::{Engine, GameConfig};
use sevenstud_engine::errors::GameError;
use sevenstud_engine::game::LoggedAction;
use sevenstud_engine::player::PlayerAction;
use sevenstud_engine::provider::Scripted;

fn call_down_engine(players: usize, stack: u32, seed: u64) -> Engine {
    let mut engine = Engine::new(GameConfig::new(5, 10, 20).with_seed(seed));
    for i in 0..players {
        engine.seat_player(&format!("Player {}", i + 1), stack, Box::new(Scripted::default()));
    }
    engine
}

#[test]
fn a_called_down_hand_conserves_chips() {
    let mut engine = call_down_engine(3, 100, 42);
    let result = engine.play_hand().expect("hand completes");

    // three antes of 5 plus the bring-in and two calls of 5
    assert_eq!(result.pot, 30);
    assert!(result.showdown);
    assert_eq!(
        result.winners.iter().map(|w| w.amount).sum::<u32>(),
        result.pot
    );
    let total: u32 = engine.seats().iter().map(|p| p.stack()).sum();
    assert_eq!(total, 300);
}

#[test]
fn every_seat_pays_the_ante() {
    let mut engine = call_down_engine(3, 100, 11);
    engine.play_hand().unwrap();

    let antes: Vec<_> = engine
        .state()
        .actions()
        .iter()
        .filter(|a| a.action == LoggedAction::Ante)
        .collect();
    assert_eq!(antes.len(), 3);
    assert!(antes.iter().all(|a| a.amount == 5));
    // ante plus the third-street bring-in level of 5
    for seat in 0..3 {
        assert_eq!(engine.state().pot().staked(seat), 10);
    }
}

#[test]
fn stacks_equal_ninety_plus_rewards_after_a_called_down_hand() {
    let mut engine = call_down_engine(3, 100, 99);
    let result = engine.play_hand().unwrap();

    // every seat contributed 10; winners got their rewards back
    for p in engine.seats() {
        let reward = result
            .winners
            .iter()
            .find(|w| w.seat == p.id())
            .map(|w| w.amount)
            .unwrap_or(0);
        assert_eq!(p.stack(), 90 + reward);
    }
}

#[test]
fn a_called_down_hand_deals_seven_cards_per_seat() {
    let mut engine = call_down_engine(3, 100, 3);
    engine.play_hand().unwrap();

    for p in engine.seats() {
        assert_eq!(p.cards().len(), 7);
        assert_eq!(p.upcards().len(), 4);
    }
    assert_eq!(engine.deck_remaining(), 52 - 3 * 7);
}

#[test]
fn heads_up_fold_awards_the_pot_uncontested() {
    let mut engine = Engine::new(GameConfig::new(5, 10, 20).with_seed(8));
    engine.seat_player("a", 100, Box::new(Scripted::new([PlayerAction::Fold])));
    engine.seat_player("b", 100, Box::new(Scripted::new([PlayerAction::Fold])));

    let result = engine.play_hand().unwrap();

    assert!(!result.showdown);
    assert_eq!(result.winners.len(), 1);
    // two antes plus the bring-in
    assert_eq!(result.pot, 15);
    let folds = engine
        .state()
        .actions()
        .iter()
        .filter(|a| a.action == LoggedAction::Fold)
        .count();
    assert_eq!(folds, 1);
    let total: u32 = engine.seats().iter().map(|p| p.stack()).sum();
    assert_eq!(total, 200);
}

#[test]
fn an_illegal_raise_aborts_the_hand() {
    let mut engine = Engine::new(GameConfig::new(5, 10, 20).with_seed(5).with_raise_cap(0));
    engine.seat_player("a", 100, Box::new(Scripted::new([PlayerAction::Raise])));
    engine.seat_player("b", 100, Box::new(Scripted::new([PlayerAction::Raise])));

    let err = engine.play_hand().unwrap_err();
    match err {
        GameError::IllegalAction { .. } => {}
        other => panic!("expected IllegalAction, got {:?}", other),
    }
    // the aborted hand is void; antes and the bring-in went back
    assert!(engine.seats().iter().all(|p| p.stack() == 100));
}

#[test]
fn a_zero_stack_cannot_be_dealt_in() {
    let mut engine = Engine::new(GameConfig::new(5, 10, 20).with_seed(1));
    engine.seat_player("a", 100, Box::new(Scripted::default()));
    engine.seat_player("b", 0, Box::new(Scripted::default()));

    let err = engine.play_hand().unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientChips {
            seat: 1,
            required: 5,
            available: 0
        }
    );
}

#[test]
fn seat_counts_outside_two_to_seven_are_rejected() {
    let mut solo = Engine::new(GameConfig::new(5, 10, 20));
    solo.seat_player("a", 100, Box::new(Scripted::default()));
    assert!(matches!(
        solo.play_hand().unwrap_err(),
        GameError::InvalidState(_)
    ));

    let mut crowded = Engine::new(GameConfig::new(5, 10, 20));
    for i in 0..8 {
        crowded.seat_player(&format!("p{}", i), 100, Box::new(Scripted::default()));
    }
    assert!(matches!(
        crowded.play_hand().unwrap_err(),
        GameError::InvalidState(_)
    ));
}

#[test]
fn seven_seats_reach_showdown_within_one_deck() {
    let mut engine = call_down_engine(7, 200, 77);
    let result = engine.play_hand().expect("52 cards cover 7 seats");
    assert!(result.showdown);
    assert_eq!(engine.deck_remaining(), 52 - 7 * 7);
}

#[test]
fn equal_seeds_replay_identically_across_hands() {
    let mut a = call_down_engine(3, 500, 1234);
    let mut b = call_down_engine(3, 500, 1234);
    for _ in 0..3 {
        let ra = a.play_hand().unwrap();
        let rb = b.play_hand().unwrap();
        assert_eq!(ra.pot, rb.pot);
        assert_eq!(
            ra.winners.iter().map(|w| (w.seat, w.amount)).collect::<Vec<_>>(),
            rb.winners.iter().map(|w| (w.seat, w.amount)).collect::<Vec<_>>()
        );
    }
    let stacks_a: Vec<u32> = a.seats().iter().map(|p| p.stack()).collect();
    let stacks_b: Vec<u32> = b.seats().iter().map(|p| p.stack()).collect();
    assert_eq!(stacks_a, stacks_b);
}

#[test]
fn chips_are_conserved_across_many_hands() {
    let mut engine = call_down_engine(4, 250, 2024);
    for _ in 0..20 {
        if engine.seats().iter().any(|p| p.stack() == 0) {
            break;
        }
        engine.play_hand().unwrap();
        let total: u32 = engine.seats().iter().map(|p| p.stack()).sum();
        assert_eq!(total, 1_000);
    }
}

#[test]
fn raised_pots_still_conserve_chips() {
    let mut engine = Engine::new(GameConfig::new(5, 10, 20).with_seed(31));
    engine.seat_player(
        "raiser",
        100,
        Box::new(Scripted::new([PlayerAction::Raise, PlayerAction::Raise])),
    );
    engine.seat_player("caller", 100, Box::new(Scripted::default()));
    engine.seat_player("folder", 100, Box::new(Scripted::new([PlayerAction::Fold])));

    let result = engine.play_hand().unwrap();
    let total: u32 = engine.seats().iter().map(|p| p.stack()).sum();
    assert_eq!(total, 300);
    assert_eq!(
        result.winners.iter().map(|w| w.amount).sum::<u32>(),
        result.pot
    );
}
