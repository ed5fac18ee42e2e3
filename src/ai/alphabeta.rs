use std::thread;

use log::{debug, trace};

use crate::game::{Board, GameState, Player};

use super::agent::Agent;
use super::cache::TerminalCache;
use super::evaluator::TerminalEvaluator;
use super::heuristic::{Heuristic, HeuristicConfig, PositionalHeuristic};

/// Plies searched below each root move. The root move itself is applied
/// first, so the machine looks six plies ahead.
pub const SEARCH_DEPTH: usize = 5;

/// Search settings that do not change what move is chosen.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Worker threads for the root moves. 1 searches on the calling thread.
    pub threads: usize,
    /// Maximum terminal-cache entries before it is cleared. 0 is unbounded.
    pub cache_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            threads: 1,
            cache_capacity: 0,
        }
    }
}

/// Counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

impl SearchStats {
    fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Outcome of [`AlphaBetaAgent::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub column: usize,
    pub score: i32,
    /// Value of every legal root move, in column order.
    pub root_scores: Vec<(usize, i32)>,
    pub stats: SearchStats,
}

/// Fixed-depth minimax with alpha-beta pruning.
///
/// Columns are always tried in ascending order and the first column with
/// the best value wins, so the search is fully deterministic. Terminal
/// classification goes through a [`TerminalEvaluator`] that lives as long
/// as the agent, so later moves of a game reuse earlier work.
pub struct AlphaBetaAgent {
    evaluator: TerminalEvaluator,
    heuristic: Box<dyn Heuristic>,
    threads: usize,
}

impl AlphaBetaAgent {
    pub fn new() -> Self {
        Self::from_config(&SearchConfig::default(), &HeuristicConfig::default())
    }

    pub fn from_config(search: &SearchConfig, heuristic: &HeuristicConfig) -> Self {
        AlphaBetaAgent {
            evaluator: TerminalEvaluator::with_cache(TerminalCache::with_capacity(
                search.cache_capacity,
            )),
            heuristic: Box::new(PositionalHeuristic::new(heuristic.clone())),
            threads: search.threads.max(1),
        }
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        AlphaBetaAgent {
            evaluator: TerminalEvaluator::new(),
            heuristic,
            threads: 1,
        }
    }

    pub fn evaluator(&self) -> &TerminalEvaluator {
        &self.evaluator
    }

    /// Best column for `machine` to play on `board`, or `None` if every
    /// column is full.
    pub fn best_move(&self, board: &Board, machine: Player) -> Option<usize> {
        self.search(board, machine).map(|result| result.column)
    }

    /// Like [`best_move`](Self::best_move), with the scores behind the choice.
    pub fn search(&self, board: &Board, machine: Player) -> Option<SearchResult> {
        let scored = if self.threads > 1 {
            self.score_root_parallel(board, machine)
        } else {
            self.score_root_moves(board, machine, board.legal_columns())
        };

        let mut stats = SearchStats::default();
        let mut best: Option<(usize, i32)> = None;
        for &(col, score, sub) in &scored {
            stats.merge(sub);
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((col, score));
            }
        }
        let (column, score) = best?;

        let root_scores: Vec<(usize, i32)> = scored.iter().map(|&(c, s, _)| (c, s)).collect();
        trace!("root scores for {}: {:?}", machine.name(), root_scores);
        let cache = self.evaluator.cache_stats();
        debug!(
            "{} plays {} (score {}), {} nodes, {} cutoffs, cache {} entries / {} hits / {} misses",
            machine.name(),
            column,
            score,
            stats.nodes,
            stats.cutoffs,
            cache.entries,
            cache.hits,
            cache.misses
        );

        Some(SearchResult {
            column,
            score,
            root_scores,
            stats,
        })
    }

    fn score_root_moves(
        &self,
        board: &Board,
        machine: Player,
        columns: impl IntoIterator<Item = usize>,
    ) -> Vec<(usize, i32, SearchStats)> {
        let mut scored = Vec::new();
        for col in columns {
            let Ok(child) = board.apply_move(col, machine) else {
                continue;
            };
            let mut stats = SearchStats::default();
            let score = self.alphabeta(
                &child,
                0,
                machine.other(),
                i32::MIN,
                i32::MAX,
                machine,
                &mut stats,
            );
            scored.push((col, score, stats));
        }
        scored
    }

    /// Root moves dealt round-robin to scoped workers; results are put back
    /// in column order so the choice matches the sequential search.
    fn score_root_parallel(&self, board: &Board, machine: Player) -> Vec<(usize, i32, SearchStats)> {
        let columns: Vec<usize> = board.legal_columns().collect();
        let workers = self.threads.min(columns.len()).max(1);

        let mut scored = thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|w| {
                    let mine: Vec<usize> = columns.iter().copied().skip(w).step_by(workers).collect();
                    scope.spawn(move || self.score_root_moves(board, machine, mine))
                })
                .collect();

            let mut all = Vec::with_capacity(columns.len());
            for handle in handles {
                match handle.join() {
                    Ok(part) => all.extend(part),
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            all
        });

        scored.sort_by_key(|&(col, _, _)| col);
        scored
    }

    #[allow(clippy::too_many_arguments)]
    fn alphabeta(
        &self,
        board: &Board,
        depth: usize,
        to_move: Player,
        mut alpha: i32,
        mut beta: i32,
        machine: Player,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;

        let terminal = self.evaluator.classify(board);
        if depth >= SEARCH_DEPTH || terminal.is_over() {
            return self.heuristic.evaluate(board, terminal, machine);
        }

        let maximizing = to_move == machine;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for col in board.legal_columns() {
            let Ok(child) = board.apply_move(col, to_move) else {
                continue;
            };
            let value = self.alphabeta(&child, depth + 1, to_move.other(), alpha, beta, machine, stats);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }

            if alpha >= beta {
                stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

impl Default for AlphaBetaAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for AlphaBetaAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        self.best_move(state.board(), state.current_player())
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }
}
