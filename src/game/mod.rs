//! Core Connect Four game logic: board representation, player types, win
//! and draw detection, and a headless game state for dealing positions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, GameOutcome, MoveError, COLS, ROWS};
pub use player::Player;
pub use state::GameState;
