use crate::game::{cell_mask, Board, Player, Terminal, COLS, ROWS};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send + Sync {
    /// Score `board` for `player`. `terminal` is the board's classification,
    /// supplied by the caller so it can come from a cache.
    fn evaluate(&self, board: &Board, terminal: Terminal, player: Player) -> i32;
}

/// Strategic value of each cell. Centre cells take part in the most
/// alignments and weigh the most.
pub const POSITION_WEIGHTS: [[i32; COLS]; ROWS] = [
    [3, 4, 5, 7, 5, 4, 3],
    [4, 6, 8, 10, 8, 6, 4],
    [5, 8, 11, 13, 11, 8, 5],
    [5, 8, 11, 13, 11, 8, 5],
    [4, 6, 8, 10, 8, 6, 4],
    [3, 4, 5, 7, 5, 4, 3],
];

/// Largest accepted `win_bonus`. Keeps the weight sum plus the bonus well
/// inside `i32`.
pub const MAX_WIN_BONUS: i32 = 1_000_000;

/// Terminal bonuses for [`PositionalHeuristic`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Added for a win, subtracted for a loss.
    pub win_bonus: i32,
    /// Added for a draw. Positive values make the machine settle for a draw
    /// over an unclear continuation.
    pub draw_bonus: i32,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        HeuristicConfig {
            win_bonus: 100,
            draw_bonus: 25,
        }
    }
}

/// Owned cell weights minus the opponent's, plus
/// a bonus once the game is decided.
#[derive(Debug, Clone, Default)]
pub struct PositionalHeuristic {
    config: HeuristicConfig,
}

impl PositionalHeuristic {
    pub fn new(config: HeuristicConfig) -> Self {
        PositionalHeuristic { config }
    }

    fn weight_sum(mask: u64) -> i32 {
        let mut sum = 0;
        for (row, weights) in POSITION_WEIGHTS.iter().enumerate() {
            for (col, &w) in weights.iter().enumerate() {
                if mask & cell_mask(row, col) != 0 {
                    sum += w;
                }
            }
        }
        sum
    }
}

impl Heuristic for PositionalHeuristic {
    fn evaluate(&self, board: &Board, terminal: Terminal, player: Player) -> i32 {
        let positional =
            Self::weight_sum(board.mask(player)) - Self::weight_sum(board.mask(player.other()));

        let bonus = match terminal {
            Terminal::Ongoing => 0,
            Terminal::Draw => self.config.draw_bonus,
            t if t.winner() == Some(player) => self.config.win_bonus,
            _ => self.config.win_bonus.saturating_neg(),
        };

        positional.saturating_add(bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::classify;

    fn score(board: &Board, player: Player) -> i32 {
        PositionalHeuristic::default().evaluate(board, classify(board), player)
    }

    #[test]
    fn heuristic_empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(score(&board, Player::Red), 0);
        assert_eq!(score(&board, Player::Yellow), 0);
    }

    #[test]
    fn weights_are_mirrored() {
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(POSITION_WEIGHTS[row][col], POSITION_WEIGHTS[row][COLS - 1 - col]);
                assert_eq!(POSITION_WEIGHTS[row][col], POSITION_WEIGHTS[ROWS - 1 - row][col]);
            }
        }
    }

    #[test]
    fn heuristic_center_preference() {
        let center = Board::new().apply_move(3, Player::Red).unwrap();
        let edge = Board::new().apply_move(0, Player::Red).unwrap();
        assert_eq!(score(&center, Player::Red), 7);
        assert_eq!(score(&edge, Player::Red), 3);
        assert_eq!(score(&center, Player::Yellow), -7);
    }

    #[test]
    fn heuristic_opponent_cells_subtract() {
        let board = Board::new()
            .apply_move(3, Player::Red)
            .unwrap()
            .apply_move(3, Player::Yellow)
            .unwrap();
        // Red on (5,3) = 7, Yellow on (4,3) = 10.
        assert_eq!(score(&board, Player::Red), -3);
        assert_eq!(score(&board, Player::Yellow), 3);
    }

    #[test]
    fn heuristic_win_bonus() {
        let mut board = Board::new();
        for col in 0..4 {
            board = board.apply_move(col, Player::Yellow).unwrap();
        }
        // Bottom row cols 0..4: 3 + 4 + 5 + 7.
        assert_eq!(score(&board, Player::Yellow), 19 + 100);
        assert_eq!(score(&board, Player::Red), -19 - 100);
    }

    #[test]
    fn heuristic_draw_bonus_is_tunable() {
        let board = Board::new();
        let heuristic = PositionalHeuristic::new(HeuristicConfig {
            win_bonus: 100,
            draw_bonus: -5,
        });
        assert_eq!(heuristic.evaluate(&board, Terminal::Draw, Player::Red), -5);
        assert_eq!(
            PositionalHeuristic::default().evaluate(&board, Terminal::Draw, Player::Red),
            25
        );
    }

    #[test]
    fn heuristic_extreme_bonus_saturates() {
        let mut board = Board::new();
        for col in 0..4 {
            board = board.apply_move(col, Player::Red).unwrap();
        }
        let heuristic = PositionalHeuristic::new(HeuristicConfig {
            win_bonus: i32::MAX,
            draw_bonus: 0,
        });
        let terminal = classify(&board);
        assert_eq!(heuristic.evaluate(&board, terminal, Player::Red), i32::MAX);
        assert_eq!(heuristic.evaluate(&board, terminal, Player::Yellow), i32::MIN);
    }
}
