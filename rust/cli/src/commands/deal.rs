//! Deal command: deal one full stud hand for inspection, no betting.

use std::io::Write;

use sevenstud_engine::deck::Deck;
use sevenstud_engine::engine::determine_bring_in;
use sevenstud_engine::player::{Facing, Player};

use crate::error::CliError;

/// Deals seven cards to each seat following the stud pattern (two down,
/// four up, one down) and prints every seat's holding with hole cards in
/// brackets, plus the bring-in seat.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !(2..=7).contains(&players) {
        return Err(CliError::InvalidInput(
            "players must be between 2 and 7".to_string(),
        ));
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let mut seats: Vec<Player> = (0..players)
        .map(|i| Player::new(i, &format!("Player {}", i + 1), 0))
        .collect();

    // third street: two down, one up; then fourth through seventh
    for round in 0..7 {
        let facing = match round {
            0 | 1 | 6 => Facing::Down,
            _ => Facing::Up,
        };
        for seat in seats.iter_mut() {
            let card = deck.deal(1)?[0];
            seat.receive(card, facing);
        }
    }

    writeln!(out, "Seed: {}", seed)?;
    for seat in &seats {
        let mut line = format!("{}:", seat.name());
        for (card, facing) in seat.cards() {
            match facing {
                Facing::Down => line.push_str(&format!(" [{}]", card)),
                Facing::Up => line.push_str(&format!(" {}", card)),
            }
        }
        writeln!(out, "{}", line)?;
    }

    let bring_in = determine_bring_in(&seats)?;
    writeln!(
        out,
        "Bring-in: {} ({})",
        seats[bring_in].name(),
        seats[bring_in].upcards()[0]
    )?;
    Ok(())
}
