//! Terminal UI: game view and input handling for playing Connect Four.
//! A thin adapter over the game engine; it renders the board and relays
//! column selections, with no game rules of its own.

mod app;
mod game_view;

pub use app::App;
