//! Agent-versus-agent matches.

use log::{debug, info};

use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::{GameState, Player, Terminal};

/// Results from the point of view of one agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchRecord {
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
}

impl MatchRecord {
    pub fn total_games(&self) -> u64 {
        self.wins + self.losses + self.draws
    }

    pub fn win_rate(&self) -> f64 {
        match self.total_games() {
            0 => 0.0,
            n => self.wins as f64 / n as f64,
        }
    }

    fn record(&mut self, terminal: Terminal, side: Player) {
        match terminal.winner() {
            Some(winner) if winner == side => self.wins += 1,
            Some(_) => self.losses += 1,
            None => self.draws += 1,
        }
    }
}

/// Play one game to completion and return the final state.
pub fn play_game(
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
    first: Player,
) -> Result<GameState, ArenaError> {
    let mut state = GameState::initial(first);

    while !state.is_terminal() {
        let agent: &mut dyn Agent = match state.current_player() {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };
        let action = agent.select_action(&state).ok_or_else(|| ArenaError::NoAction {
            agent: agent.name().to_string(),
        })?;
        state = state
            .apply_move(action)
            .map_err(|_| ArenaError::IllegalAction {
                agent: agent.name().to_string(),
                action,
                legal: state.legal_actions(),
            })?;
    }

    debug!("game over: {:?}\n{}", state.terminal(), state.board());
    Ok(state)
}

/// Play `games` games of `subject` (Yellow) against `opponent` (Red),
/// alternating who opens.
pub fn run_match(
    subject: &mut dyn Agent,
    opponent: &mut dyn Agent,
    games: usize,
) -> Result<MatchRecord, ArenaError> {
    let mut record = MatchRecord::default();
    for game in 0..games {
        let first = if game % 2 == 0 { Player::Yellow } else { Player::Red };
        let state = play_game(opponent, subject, first)?;
        record.record(state.terminal(), Player::Yellow);
        info!(
            "game {}/{}: {:?} ({} opened)",
            game + 1,
            games,
            state.terminal(),
            first.name()
        );
    }
    Ok(record)
}
