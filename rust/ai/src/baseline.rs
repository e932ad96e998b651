//! Baseline rule-based provider for stud gameplay.
//!
//! A deterministic reference opponent: no randomness, no memory, decisions
//! from its own cards and the price of continuing only. Useful for
//! benchmarking learned policies against a stable floor.

use sevenstud_engine::hand::{evaluate_hand, Category};
use sevenstud_engine::player::PlayerAction;
use sevenstud_engine::provider::{ActionProvider, Observation};

/// Simple baseline provider.
///
/// Strategy:
/// - made hands of two pair or better raise while a raise is legal;
/// - one pair calls anything up to one raise unit;
/// - everything else checks when free, calls small bets with a big upcard
///   behind it, and otherwise folds to real pressure.
#[derive(Debug, Default, Clone)]
pub struct BaselineProvider;

impl BaselineProvider {
    pub fn new() -> Self {
        Self
    }

    fn wants_raise(obs: &Observation<'_>) -> bool {
        obs.legal.contains(&PlayerAction::Raise)
    }
}

impl ActionProvider for BaselineProvider {
    fn name(&self) -> &str {
        "baseline"
    }

    fn act(&mut self, obs: &Observation<'_>) -> PlayerAction {
        let cards: Vec<_> = obs.cards.iter().map(|(c, _)| *c).collect();
        let strength = evaluate_hand(&cards);

        if strength.category >= Category::TwoPair {
            return if Self::wants_raise(obs) {
                PlayerAction::Raise
            } else {
                PlayerAction::Call
            };
        }
        if strength.category == Category::OnePair {
            return if obs.to_call <= obs.raise_unit {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            };
        }
        // no made hand: free cards are always taken
        if obs.to_call == 0 {
            return PlayerAction::Call;
        }
        // ace or king high calls one small bet; getting 4:1 from the pot
        // keeps anything alive
        let high = strength.kickers[0];
        if (high >= 13 && obs.to_call <= obs.raise_unit) || obs.to_call * 4 <= obs.pot {
            return PlayerAction::Call;
        }
        PlayerAction::Fold
    }
}
