//! Simulation command: self-play hand generation.

use std::io::Write;

use sevenstud_ai::create_provider;
use sevenstud_engine::engine::{Engine, GameConfig};
use sevenstud_engine::logger::{HandLogger, HandRecord};

use crate::error::CliError;

/// Default table stakes for simulations.
const ANTE: u32 = 5;
const SMALL_BET: u32 = 10;
const BIG_BET: u32 = 20;
const STARTING_STACK: u32 = 1_000;

/// Runs `hands` hands of self-play between baseline providers and calling
/// stations, optionally appending one JSONL [`HandRecord`] per hand to
/// `output`. Stops early once any stack is busted; prints a stack summary.
pub fn handle_sim_command(
    hands: u64,
    players: usize,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    if !(2..=7).contains(&players) {
        return Err(CliError::InvalidInput(
            "players must be between 2 and 7".to_string(),
        ));
    }

    let base_seed = seed.unwrap_or_else(rand::random);
    let mut engine = Engine::new(GameConfig::new(ANTE, SMALL_BET, BIG_BET).with_seed(base_seed));
    for i in 0..players {
        let kind = if i % 2 == 0 { "baseline" } else { "station" };
        engine.seat_player(
            &format!("Player {}", i + 1),
            STARTING_STACK,
            create_provider(kind, base_seed.wrapping_add(i as u64)),
        );
    }

    let mut logger = output.map(HandLogger::create).transpose()?;
    let mut played = 0u64;
    for _ in 0..hands {
        if engine.seats().iter().any(|p| p.stack() == 0) {
            writeln!(out, "Stopping early: a player is out of chips")?;
            break;
        }
        let result = engine.play_hand()?;
        played += 1;
        if let Some(lg) = logger.as_mut() {
            let record = HandRecord {
                hand_id: lg.next_id(),
                seed: Some(base_seed),
                actions: engine.state().actions().to_vec(),
                pot: result.pot,
                winners: result.winners.clone(),
                showdown: result.showdown,
                ts: None,
                meta: None,
            };
            lg.write(&record)?;
        }
    }

    writeln!(out, "Simulated {} hand(s) with seed {}", played, base_seed)?;
    for p in engine.seats() {
        writeln!(out, "  {}: {} chips", p.name(), p.stack())?;
    }
    Ok(())
}
