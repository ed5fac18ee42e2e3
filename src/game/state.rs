use super::{classify, Board, Player, Terminal};
use crate::error::MoveError;

/// A game in progress: the board, whose turn it is, and how it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    terminal: Terminal,
}

impl GameState {
    /// Create initial game state with `first` to move
    pub fn initial(first: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            terminal: Terminal::Ongoing,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn terminal(&self) -> Terminal {
        self.terminal
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.terminal.is_over()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns().collect()
    }

    /// Apply a move for the current player and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let board = self.board.apply_move(column, self.current_player)?;
        Ok(GameState {
            board,
            current_player: self.current_player.other(),
            terminal: classify(&board),
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial(Player::Red)
    }
}
