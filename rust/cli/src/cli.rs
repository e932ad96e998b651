use clap::{Parser, Subcommand};

/// Command-line interface for the sevenstud engine.
#[derive(Parser)]
#[command(name = "sevenstud", about = "Fixed-limit Seven-Card Stud self-play tools")]
pub struct SevenstudCli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run self-play hands and optionally record JSONL hand histories
    Sim {
        /// Number of hands to simulate
        #[arg(long, default_value_t = 100)]
        hands: u64,
        /// Number of seated players (2-7)
        #[arg(long, default_value_t = 3)]
        players: usize,
        /// Base RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Path for JSONL hand histories
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal one full hand with no betting and print every seat's cards
    Deal {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// Number of seated players (2-7)
        #[arg(long, default_value_t = 3)]
        players: usize,
    },
}
