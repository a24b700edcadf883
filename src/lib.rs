//! # Connect Four
//!
//! A two-player Connect Four game with a terminal UI built with Ratatui.
//! Players alternate dropping pieces down columns until one gets
//! four-in-a-row (horizontal, vertical, or diagonal) or the board fills
//! (tie).
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, turn/win state machine
//! - [`ui`] — Terminal UI: game view and input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
