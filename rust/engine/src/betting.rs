use crate::engine::GameConfig;
use crate::errors::GameError;
use crate::game::{GameState, LoggedAction};
use crate::logger::GameLogger;
use crate::player::Player;
use crate::provider::{ActionProvider, Observation, SeatView};
use crate::rules::{self, ValidatedAction};

/// A forced posting that opens the round at a non-zero bet level
/// (the bring-in on third street).
#[derive(Debug, Clone, Copy)]
pub struct Opening {
    pub poster: usize,
    pub level: u32,
}

/// Resolves one complete betting round for the current street.
///
/// Turn order is seating order over the still-active seats, wrapping from
/// `first`. Each step re-derives the next pending actor from scratch, so a
/// fold never perturbs the iteration. A seat is pending until it has acted
/// since the bet level last changed; a raise bumps the level by exactly the
/// street's unit and reopens every other active seat. The round closes when
/// no pending seat remains or at most one seat is left in the hand.
///
/// Raises are bounded by `cfg.raise_cap`, so the round terminates in at
/// most `seats * (raise_cap + 2)` action steps.
pub fn run_betting_round(
    cfg: &GameConfig,
    seats: &mut [Player],
    providers: &mut [Box<dyn ActionProvider>],
    state: &mut GameState,
    logger: &mut dyn GameLogger,
    first: usize,
    opening: Option<Opening>,
) -> Result<(), GameError> {
    let n = seats.len();
    debug_assert_eq!(providers.len(), n);
    let street = state.street();
    let unit = street.raise_unit(cfg.small_bet, cfg.big_bet);
    let cap = cfg.raise_cap;

    // acted[i]: seat i has acted since the bet level last changed
    let mut acted = vec![false; n];
    let mut bet_level = 0u32;
    let mut raises_used = 0u32;
    if let Some(op) = opening {
        bet_level = op.level;
        acted[op.poster] = true;
    }

    let mut turn = first % n;
    loop {
        if seats.iter().filter(|p| p.is_in_hand()).count() <= 1 {
            break;
        }
        let next = (0..n)
            .map(|k| (turn + k) % n)
            .find(|&i| seats[i].can_bet() && !acted[i]);
        let Some(seat) = next else { break };

        let stack = seats[seat].stack();
        let to_call = bet_level.saturating_sub(seats[seat].street_bet());
        let has_live_opponent = (0..n).any(|j| j != seat && seats[j].can_bet());
        let legal = rules::legal_actions(stack, to_call, raises_used, cap, has_live_opponent);

        let views: Vec<SeatView> = seats
            .iter()
            .map(|p| SeatView {
                seat: p.id(),
                upcards: p.upcards(),
                stack: p.stack(),
                street_bet: p.street_bet(),
                status: p.status(),
            })
            .collect();
        let obs = Observation {
            seat,
            street,
            pot: state.pot().total(),
            current_bet: bet_level,
            to_call,
            raise_unit: unit,
            cards: seats[seat].cards(),
            table: &views,
            legal: &legal,
        };
        let action = providers[seat].act(&obs);
        if !legal.contains(&action) {
            let err = GameError::IllegalAction {
                seat,
                action: format!("{:?}", action),
            };
            logger.error(&err.to_string());
            return Err(err);
        }

        match rules::validate_action(seat, stack, to_call, unit, raises_used, cap, action)? {
            ValidatedAction::Fold => {
                seats[seat].fold();
                state.record(seat, LoggedAction::Fold, 0);
                logger.info(&format!("{} folds.", seats[seat].name()));
            }
            ValidatedAction::Call(amount) => {
                let paid = seats[seat].pay(amount);
                state.pot_mut().pay(seat, paid);
                state.record(seat, LoggedAction::Call, paid);
                if paid == 0 {
                    logger.info(&format!("{} checks.", seats[seat].name()));
                } else {
                    logger.info(&format!(
                        "{} calls {}. Chips left: {}",
                        seats[seat].name(),
                        paid,
                        seats[seat].stack()
                    ));
                }
            }
            ValidatedAction::Raise(amount) => {
                bet_level += unit;
                raises_used += 1;
                let paid = seats[seat].pay(amount);
                state.pot_mut().pay(seat, paid);
                state.record(seat, LoggedAction::Raise, paid);
                // the round reopens for everyone else
                for (j, flag) in acted.iter_mut().enumerate() {
                    if j != seat {
                        *flag = false;
                    }
                }
                logger.info(&format!(
                    "{} raises to {}. Chips left: {}",
                    seats[seat].name(),
                    bet_level,
                    seats[seat].stack()
                ));
            }
            ValidatedAction::AllIn(amount) => {
                // short call or short raise; the bet level does not move and
                // the round is not reopened
                let paid = seats[seat].pay(amount);
                state.pot_mut().pay(seat, paid);
                state.record(seat, LoggedAction::AllIn, paid);
                logger.info(&format!("{} is all in for {}.", seats[seat].name(), paid));
            }
        }
        acted[seat] = true;
        turn = (seat + 1) % n;
    }
    Ok(())
}
