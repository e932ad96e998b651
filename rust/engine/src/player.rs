use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Represents a player action during a betting round.
/// Fixed-limit stud only knows three voluntary actions; a call with nothing
/// owed is a check, and the forced bring-in posting is not a choice at all.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Match the current bet level (a check when nothing is owed)
    Call,
    /// Raise the bet level by the street's fixed unit
    Raise,
}

/// Whether a dealt card is publicly visible.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Facing {
    /// Hole card, visible only to its owner
    Down,
    /// Upcard, visible to the whole table
    Up,
}

/// A seat's standing within the current hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum SeatStatus {
    /// Still able to act and bet
    Active,
    /// Stack fully committed; stays in the hand but no longer acts
    AllIn,
    /// Out of the hand
    Folded,
}

/// Represents a seated player: chip stack, dealt cards with their facing,
/// this-street contribution, and fold/all-in status. The chip stack persists
/// across hands; everything else is per-hand state.
#[derive(Debug, Clone)]
pub struct Player {
    /// Seat index at the table
    id: usize,
    /// Display name used in logs
    name: String,
    /// Current chip stack
    stack: u32,
    /// Cards dealt this hand, in deal order
    cards: Vec<(Card, Facing)>,
    /// Chips contributed during the current street
    street_bet: u32,
    /// Standing within the current hand
    status: SeatStatus,
}

impl Player {
    pub fn new(id: usize, name: &str, stack: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            stack,
            cards: Vec::with_capacity(7),
            street_bet: 0,
            status: SeatStatus::Active,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn status(&self) -> SeatStatus {
        self.status
    }
    pub fn street_bet(&self) -> u32 {
        self.street_bet
    }
    pub fn cards(&self) -> &[(Card, Facing)] {
        &self.cards
    }

    /// True while the seat can still win the pot.
    pub fn is_in_hand(&self) -> bool {
        self.status != SeatStatus::Folded
    }

    /// True while the seat can still act in a betting round.
    pub fn can_bet(&self) -> bool {
        self.status == SeatStatus::Active
    }

    /// Publicly visible cards, in deal order.
    pub fn upcards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|(_, f)| *f == Facing::Up)
            .map(|(c, _)| *c)
            .collect()
    }

    /// Every card the seat holds, visible or not.
    pub fn all_cards(&self) -> Vec<Card> {
        self.cards.iter().map(|(c, _)| *c).collect()
    }

    pub fn receive(&mut self, card: Card, facing: Facing) {
        self.cards.push((card, facing));
    }

    /// Debits up to `amount` from the stack and counts it toward the current
    /// street. Returns the chips actually paid; an emptied stack flips the
    /// seat to all-in instead of ever going negative.
    pub fn pay(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.street_bet += paid;
        if self.stack == 0 && self.status == SeatStatus::Active {
            self.status = SeatStatus::AllIn;
        }
        paid
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    pub fn fold(&mut self) {
        self.status = SeatStatus::Folded;
    }

    pub fn clear_street_bet(&mut self) {
        self.street_bet = 0;
    }

    pub fn reset_for_new_hand(&mut self) {
        self.cards.clear();
        self.street_bet = 0;
        self.status = SeatStatus::Active;
    }
}
