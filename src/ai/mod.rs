//! Machine players: the alpha-beta search with its terminal cache and
//! positional heuristic, plus a random baseline.

mod agent;
mod alphabeta;
mod cache;
mod evaluator;
mod heuristic;
mod random;

pub use agent::Agent;
pub use alphabeta::{AlphaBetaAgent, SearchConfig, SearchResult, SearchStats, SEARCH_DEPTH};
pub use cache::{CacheStats, TerminalCache};
pub use evaluator::TerminalEvaluator;
pub use heuristic::{
    Heuristic, HeuristicConfig, PositionalHeuristic, MAX_WIN_BONUS, POSITION_WEIGHTS,
};
pub use random::RandomAgent;
