use serde::{Deserialize, Serialize};
use std::fmt;

use crate::player::Facing;
use crate::pot::Pot;

/// Represents a betting street in Seven-Card Stud.
/// Five streets, named for the number of cards each seat holds.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Two hole cards plus the first upcard
    Third,
    /// Second upcard
    Fourth,
    /// Third upcard; the big bet takes over from here
    Fifth,
    /// Fourth upcard
    Sixth,
    /// Final card, dealt face-down
    Seventh,
}

impl Street {
    pub const ALL: [Street; 5] = [
        Street::Third,
        Street::Fourth,
        Street::Fifth,
        Street::Sixth,
        Street::Seventh,
    ];

    /// The fixed raise unit for this street: small bet through fourth
    /// street, big bet after.
    pub fn raise_unit(self, small_bet: u32, big_bet: u32) -> u32 {
        match self {
            Street::Third | Street::Fourth => small_bet,
            _ => big_bet,
        }
    }

    /// How this street's card is dealt. Third street is special-cased by the
    /// sequencer (two down, one up) and never asks.
    pub fn deal_facing(self) -> Facing {
        match self {
            Street::Seventh => Facing::Down,
            _ => Facing::Up,
        }
    }

    pub fn next(self) -> Option<Street> {
        match self {
            Street::Third => Some(Street::Fourth),
            Street::Fourth => Some(Street::Fifth),
            Street::Fifth => Some(Street::Sixth),
            Street::Sixth => Some(Street::Seventh),
            Street::Seventh => None,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Third => "third street",
            Street::Fourth => "fourth street",
            Street::Fifth => "fifth street",
            Street::Sixth => "sixth street",
            Street::Seventh => "seventh street",
        };
        f.write_str(name)
    }
}

/// What an action-log entry describes. Forced payments and the final award
/// are logged alongside the voluntary actions so a record replays the whole
/// chip flow of a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum LoggedAction {
    Ante,
    BringIn,
    Fold,
    Call,
    Raise,
    AllIn,
    Win,
}

/// Records a single chip-moving event: who, on which street, doing what,
/// for how many chips.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    pub street: Street,
    pub action: LoggedAction,
    pub amount: u32,
}

/// Per-hand mutable state: the pot ledger, the current street, and the
/// ordered action log. Created at hand start, reset when the next begins.
#[derive(Debug)]
pub struct GameState {
    pot: Pot,
    street: Street,
    actions: Vec<ActionRecord>,
}

impl GameState {
    pub fn new(seats: usize) -> Self {
        Self {
            pot: Pot::new(seats),
            street: Street::Third,
            actions: Vec::new(),
        }
    }

    pub fn reset(&mut self, seats: usize) {
        self.pot.reset(seats);
        self.street = Street::Third;
        self.actions.clear();
    }

    pub fn pot(&self) -> &Pot {
        &self.pot
    }

    pub fn pot_mut(&mut self) -> &mut Pot {
        &mut self.pot
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn set_street(&mut self, street: Street) {
        self.street = street;
    }

    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    pub fn record(&mut self, seat: usize, action: LoggedAction, amount: u32) {
        self.actions.push(ActionRecord {
            seat,
            street: self.street,
            action,
            amount,
        });
    }
}
