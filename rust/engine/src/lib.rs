//! # sevenstud-engine: Seven-Card Stud Game Engine Core
//!
//! A deterministic fixed-limit Seven-Card Stud engine for policy-driven
//! self-play. Provides the deck lifecycle, the multi-street betting state
//! machine, pot and side-pot settlement, and hand-history logging with
//! reproducible RNG for scientific comparison and debugging.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`engine`] - Street sequencing, bring-in resolution, hand execution
//! - [`betting`] - The per-street betting round state machine
//! - [`game`] - Streets, the action log, and per-hand game state
//! - [`hand`] - Hand evaluation and strength comparison
//! - [`player`] - Seat state, actions, and stack management
//! - [`pot`] - Pot ledger and tiered side-pot settlement
//! - [`provider`] - The decision capability the engine blocks on
//! - [`rules`] - Fixed-limit action legality and validation
//! - [`logger`] - Event logging and HandRecord serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use sevenstud_engine::engine::{Engine, GameConfig};
//! use sevenstud_engine::provider::Scripted;
//!
//! let mut engine = Engine::new(GameConfig::new(5, 10, 20).with_seed(7));
//! engine.seat_player("Alice", 100, Box::new(Scripted::default()));
//! engine.seat_player("Bob", 100, Box::new(Scripted::default()));
//!
//! let result = engine.play_hand().expect("hand completes");
//! assert_eq!(result.winners.iter().map(|w| w.amount).sum::<u32>(), result.pot);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All deals are reproducible from a seed:
//!
//! ```rust
//! use sevenstud_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will have identical card order
//! ```
//!
//! ## Action Validation
//!
//! Provider decisions are validated before they move chips:
//!
//! ```rust
//! use sevenstud_engine::rules::{validate_action, ValidatedAction};
//! use sevenstud_engine::player::PlayerAction;
//!
//! // a call the stack cannot cover becomes an all-in
//! let va = validate_action(0, 60, 100, 10, 0, 4, PlayerAction::Call);
//! assert_eq!(va, Ok(ValidatedAction::AllIn(60)));
//! ```

pub mod betting;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod provider;
pub mod rules;
