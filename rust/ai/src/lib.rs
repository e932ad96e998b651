//! Decision providers for the sevenstud engine.
//!
//! The engine only knows the [`ActionProvider`] interface; this crate
//! supplies concrete players for simulation and benchmarking: a rule-based
//! baseline, a calling station, and a uniform-random sampler. A trained
//! policy would implement the same trait.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use sevenstud_engine::player::PlayerAction;
use sevenstud_engine::provider::{ActionProvider, Observation};

pub mod baseline;

pub use baseline::BaselineProvider;

/// Calls whatever it can afford and never raises. Short stacks go all-in
/// through the engine's validation, so this player sees every showdown it
/// can pay for. Useful as a predictable sparring partner.
#[derive(Debug, Default, Clone)]
pub struct CallingStation;

impl CallingStation {
    pub fn new() -> Self {
        Self
    }
}

impl ActionProvider for CallingStation {
    fn name(&self) -> &str {
        "station"
    }

    fn act(&mut self, _obs: &Observation<'_>) -> PlayerAction {
        PlayerAction::Call
    }
}

/// Samples uniformly from the legal action set. The seeded RNG makes whole
/// simulations reproducible; mostly good for fuzzing the betting machine.
#[derive(Debug)]
pub struct RandomProvider {
    rng: StdRng,
}

impl RandomProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ActionProvider for RandomProvider {
    fn name(&self) -> &str {
        "random"
    }

    fn act(&mut self, obs: &Observation<'_>) -> PlayerAction {
        *obs.legal.choose(&mut self.rng).unwrap_or(&PlayerAction::Call)
    }
}

/// Factory function to create providers by type string.
///
/// Supported kinds: `"baseline"`, `"station"`, `"random"`.
///
/// # Panics
///
/// Panics if an unknown provider kind is requested.
pub fn create_provider(kind: &str, seed: u64) -> Box<dyn ActionProvider> {
    match kind {
        "baseline" => Box::new(BaselineProvider::new()),
        "station" => Box::new(CallingStation::new()),
        "random" => Box::new(RandomProvider::new(seed)),
        _ => panic!("Unknown provider kind: {}", kind),
    }
}
