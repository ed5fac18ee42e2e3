//! Core Connect Four game logic: bitboard representation, win patterns,
//! terminal classification, and an immutable game state.

mod board;
mod patterns;
mod player;
mod state;
mod terminal;

pub use board::{cell_mask, Board, Cell, COLS, ROWS};
pub use patterns::{FULL_BOARD, WIN_PATTERNS, WIN_PATTERN_COUNT};
pub use player::Player;
pub use state::GameState;
pub use terminal::{classify, Terminal};
