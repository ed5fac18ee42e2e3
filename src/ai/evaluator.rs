use crate::game::{classify, Board, Terminal};

use super::cache::{CacheStats, TerminalCache};

/// Terminal classification backed by a [`TerminalCache`].
///
/// Results are identical to [`classify`]; the cache only saves the pattern
/// scan on boards the search has already seen.
#[derive(Debug, Default)]
pub struct TerminalEvaluator {
    cache: TerminalCache,
}

impl TerminalEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(cache: TerminalCache) -> Self {
        TerminalEvaluator { cache }
    }

    pub fn classify(&self, board: &Board) -> Terminal {
        if let Some(terminal) = self.cache.get(board) {
            return terminal;
        }
        let terminal = classify(board);
        self.cache.insert(*board, terminal);
        terminal
    }

    pub fn is_terminal(&self, board: &Board) -> bool {
        self.classify(board).is_over()
    }

    pub fn cache(&self) -> &TerminalCache {
        &self.cache
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_classify_idempotent_cold_and_warm() {
        let mut board = Board::new();
        for _ in 0..4 {
            board = board.apply_move(2, Player::Yellow).unwrap();
        }

        let evaluator = TerminalEvaluator::new();
        let cold = evaluator.classify(&board);
        let warm = evaluator.classify(&board);
        assert_eq!(cold, Terminal::YellowWins);
        assert_eq!(cold, warm);

        let fresh = TerminalEvaluator::new();
        assert_eq!(fresh.classify(&board), cold);
        assert_eq!(classify(&board), cold);
    }

    #[test]
    fn test_second_lookup_hits_cache() {
        let evaluator = TerminalEvaluator::new();
        let board = Board::new();
        assert!(!evaluator.is_terminal(&board));
        assert!(!evaluator.is_terminal(&board));

        let stats = evaluator.cache_stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_bounded_cache_keeps_results_correct() {
        let evaluator = TerminalEvaluator::with_cache(TerminalCache::with_capacity(2));
        let mut board = Board::new();
        for col in [3, 3, 4, 4, 5, 5, 6] {
            let player = if board.occupied().count_ones() % 2 == 0 {
                Player::Red
            } else {
                Player::Yellow
            };
            board = board.apply_move(col, player).unwrap();
            assert_eq!(evaluator.classify(&board), classify(&board));
        }
        assert_eq!(evaluator.classify(&board), Terminal::RedWins);
        assert!(evaluator.cache().len() <= 2);
    }
}
