use super::patterns::{FULL_BOARD, WIN_PATTERNS};
use super::{Board, Player};

/// Whether a board is decided, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    Ongoing,
    RedWins,
    YellowWins,
    Draw,
}

impl Terminal {
    pub fn is_over(self) -> bool {
        self != Terminal::Ongoing
    }

    /// The side that completed four in a row, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Terminal::RedWins => Some(Player::Red),
            Terminal::YellowWins => Some(Player::Yellow),
            Terminal::Ongoing | Terminal::Draw => None,
        }
    }

    pub fn win_for(player: Player) -> Terminal {
        match player {
            Player::Red => Terminal::RedWins,
            Player::Yellow => Terminal::YellowWins,
        }
    }

    /// Same result with the sides relabelled.
    pub fn swapped(self) -> Terminal {
        match self {
            Terminal::RedWins => Terminal::YellowWins,
            Terminal::YellowWins => Terminal::RedWins,
            other => other,
        }
    }
}

fn has_four(mask: u64) -> bool {
    WIN_PATTERNS.iter().any(|&p| mask & p == p)
}

/// Classify a board without any caching.
///
/// Red's alignments are checked before Yellow's so that an unreachable board
/// holding both still gets a stable answer.
pub fn classify(board: &Board) -> Terminal {
    if has_four(board.red()) {
        Terminal::RedWins
    } else if has_four(board.yellow()) {
        Terminal::YellowWins
    } else if board.occupied() == FULL_BOARD {
        Terminal::Draw
    } else {
        Terminal::Ongoing
    }
}
