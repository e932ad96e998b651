use std::collections::VecDeque;

use crate::cards::Card;
use crate::game::Street;
use crate::player::{Facing, PlayerAction, SeatStatus};

/// One seat's public face: everything any opponent is entitled to see.
#[derive(Debug, Clone)]
pub struct SeatView {
    pub seat: usize,
    pub upcards: Vec<Card>,
    pub stack: u32,
    pub street_bet: u32,
    pub status: SeatStatus,
}

/// The snapshot handed to a decision provider when it is the seat's turn.
///
/// `cards` is the acting seat's own full holding (hole cards included);
/// `table` covers every seat's public state; `legal` is the exact action
/// set the engine will accept.
#[derive(Debug)]
pub struct Observation<'a> {
    pub seat: usize,
    pub street: Street,
    pub pot: u32,
    pub current_bet: u32,
    pub to_call: u32,
    pub raise_unit: u32,
    pub cards: &'a [(Card, Facing)],
    pub table: &'a [SeatView],
    pub legal: &'a [PlayerAction],
}

/// The decision capability the engine blocks on: given the public context,
/// return one of the legal actions. Implementations range from scripted
/// test sequences to policy-backed players; the engine only sees this
/// interface and validates whatever comes back.
pub trait ActionProvider {
    fn name(&self) -> &str;
    fn act(&mut self, obs: &Observation<'_>) -> PlayerAction;
}

/// A provider that replays a predetermined action sequence, then calls.
///
/// The workhorse for engine tests and deterministic replays: script the
/// interesting decisions, let the tail of the hand check down.
#[derive(Debug, Default)]
pub struct Scripted {
    queue: VecDeque<PlayerAction>,
}

impl Scripted {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            queue: actions.into_iter().collect(),
        }
    }
}

impl ActionProvider for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn act(&mut self, _obs: &Observation<'_>) -> PlayerAction {
        self.queue.pop_front().unwrap_or(PlayerAction::Call)
    }
}
