use crate::game::GameState;

/// Universal interface for anything that picks columns.
pub trait Agent {
    /// Select a column for the side to move in `state`.
    /// Returns `None` when the game is over or no column is open.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
