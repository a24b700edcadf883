//! Core Connect Four game logic: board representation, player identities,
//! and the turn/win state machine.

mod board;
mod engine;
mod player;

pub use board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use engine::{GameEngine, MoveOutcome, Placement, RoundOutcome};
pub use player::{Player, Side};
