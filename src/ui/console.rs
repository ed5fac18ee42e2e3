//! Line-oriented human-versus-machine game over any reader and writer.

use std::io::{self, BufRead, Write};

use log::info;

use crate::ai::AlphaBetaAgent;
use crate::config::GameConfig;
use crate::game::{GameState, Terminal};

/// Plays games until the input ends or the human types `q`.
///
/// A finished game is announced and immediately replaced by a fresh one.
pub struct Console<R, W> {
    input: R,
    output: W,
    agent: AlphaBetaAgent,
    config: GameConfig,
    games_finished: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, agent: AlphaBetaAgent, config: GameConfig) -> Self {
        Console {
            input,
            output,
            agent,
            config,
            games_finished: 0,
        }
    }

    pub fn games_finished(&self) -> usize {
        self.games_finished
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> io::Result<()> {
        let mut state = self.new_game()?;

        loop {
            if state.current_player() == GameConfig::MACHINE {
                writeln!(self.output, "Thinking...")?;
                let Some(col) = self.agent.best_move(state.board(), GameConfig::MACHINE) else {
                    state = self.new_game()?;
                    continue;
                };
                writeln!(self.output, "Playing {col}")?;
                state = match state.apply_move(col) {
                    Ok(next) => next,
                    Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e)),
                };
            } else {
                let Some(col) = self.read_move(&state)? else {
                    return Ok(());
                };
                state = match state.apply_move(col) {
                    Ok(next) => next,
                    Err(e) => {
                        writeln!(self.output, "{e}")?;
                        continue;
                    }
                };
            }

            write!(self.output, "{}", state.board())?;
            if state.is_terminal() {
                self.announce(state.terminal())?;
                state = self.new_game()?;
            }
        }
    }

    fn new_game(&mut self) -> io::Result<GameState> {
        let state = GameState::initial(self.config.first_player());
        writeln!(self.output, "NEW GAME")?;
        write!(self.output, "{}", state.board())?;
        Ok(state)
    }

    fn announce(&mut self, terminal: Terminal) -> io::Result<()> {
        let text = match terminal.winner() {
            Some(p) if p == GameConfig::HUMAN => "WIN",
            Some(_) => "LOSE",
            None => "DRAW",
        };
        self.games_finished += 1;
        info!("game {} finished: {}", self.games_finished, text);
        writeln!(self.output, "{text}")
    }

    /// Prompt until a legal column arrives. `None` means quit.
    fn read_move(&mut self, state: &GameState) -> io::Result<Option<usize>> {
        loop {
            write!(self.output, "Your move? ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match line.parse::<usize>() {
                Ok(col) if state.board().is_legal(col) => return Ok(Some(col)),
                _ => continue,
            }
        }
    }
}
