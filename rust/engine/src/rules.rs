use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// The concrete effect of an accepted action, with the chips it moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Call(u32),
    Raise(u32),
    AllIn(u32),
}

/// Computes the action set a provider may legally return.
///
/// Fold and call are always open to an active seat. Raise is open only while
/// the street's raise cap has room, the stack covers more than the call, and
/// at least one opponent can still match (raising into nothing but all-ins
/// moves no contestable chips).
pub fn legal_actions(
    stack: u32,
    to_call: u32,
    raises_used: u32,
    raise_cap: u32,
    has_live_opponent: bool,
) -> Vec<A> {
    let mut actions = vec![A::Fold, A::Call];
    if raises_used < raise_cap && stack > to_call && has_live_opponent {
        actions.push(A::Raise);
    }
    actions
}

/// Converts a requested [`PlayerAction`](crate::player::PlayerAction) into a
/// [`ValidatedAction`] under fixed-limit rules.
///
/// A call the stack cannot cover becomes an all-in for the remainder; a raise
/// the stack cannot fully fund becomes an all-in that does not move the bet
/// level. A raise past the street's cap fails with
/// [`GameError::IllegalAction`] rather than being silently coerced.
pub fn validate_action(
    seat: usize,
    stack: u32,
    to_call: u32,
    raise_unit: u32,
    raises_used: u32,
    raise_cap: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Call => {
            if stack <= to_call {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Raise => {
            if raises_used >= raise_cap {
                return Err(GameError::IllegalAction {
                    seat,
                    action: format!("raise past the {}-raise cap", raise_cap),
                });
            }
            let full = to_call + raise_unit;
            if full >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Raise(full))
            }
        }
    }
}
