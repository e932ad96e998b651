use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck exhausted: requested {requested} cards, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Seat {seat} chose an illegal action: {action}")]
    IllegalAction { seat: usize, action: String },
    #[error("Seat {seat} cannot cover {required} chips (has {available})")]
    InsufficientChips {
        seat: usize,
        required: u32,
        available: u32,
    },
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),
}
