use crate::ai::AlphaBetaAgent;
use crate::config::GameConfig;
use crate::error::MoveError;
use crate::game::{GameState, Terminal};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{backend::Backend, Terminal as Screen};
use std::io;

pub struct App {
    game_state: GameState,
    agent: AlphaBetaAgent,
    config: GameConfig,
    selected_column: usize,
    last_machine_move: Option<usize>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(agent: AlphaBetaAgent, config: GameConfig) -> Self {
        let mut app = App {
            game_state: GameState::initial(config.first_player()),
            agent,
            config,
            selected_column: 3, // Start in middle
            last_machine_move: None,
            should_quit: false,
            message: None,
        };
        app.machine_turn();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Screen<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '0'..='6') => {
                self.selected_column = c as usize - '0' as usize;
                self.drop_piece();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.game_state = GameState::initial(self.config.first_player());
        self.selected_column = 3;
        self.last_machine_move = None;
        self.machine_turn();
    }

    /// Drop the human's piece in the selected column, then let the machine
    /// answer. A drop on a finished game starts the next one.
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.restart();
            self.message = Some("New game started!".to_string());
            return;
        }

        match self.game_state.apply_move(self.selected_column) {
            Ok(next) => {
                self.game_state = next;
                self.message = None;
                self.machine_turn();
            }
            Err(e @ (MoveError::ColumnFull(_) | MoveError::InvalidColumn(_))) => {
                self.message = Some(format!("{e}!"));
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Play the machine's reply if it is the machine's turn.
    fn machine_turn(&mut self) {
        if self.game_state.is_terminal() || self.game_state.current_player() != GameConfig::MACHINE {
            self.announce();
            return;
        }

        let Some(col) = self.agent.best_move(self.game_state.board(), GameConfig::MACHINE) else {
            return;
        };
        debug!("machine drops into column {col}");
        if let Ok(next) = self.game_state.apply_move(col) {
            self.game_state = next;
            self.last_machine_move = Some(col);
        }
        self.announce();
    }

    fn announce(&mut self) {
        let text = match self.game_state.terminal() {
            Terminal::Ongoing => return,
            Terminal::Draw => "It's a draw!",
            t if t.winner() == Some(GameConfig::HUMAN) => "You win!",
            _ => "The machine wins!",
        };
        self.message = Some(format!("{text} Press Enter for a new game."));
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            self.last_machine_move,
            &self.message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use crate::game::{Cell, Player};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn human_drop_gets_an_answer() {
        let mut app = App::new(AlphaBetaAgent::new(), GameConfig::default());
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game_state.board().get(5, 3), Cell::Red);
        assert_eq!(app.game_state.current_player(), Player::Red);
        assert_eq!(app.game_state.board().yellow().count_ones(), 1);
        assert!(app.last_machine_move.is_some());
    }

    #[test]
    fn machine_opens_when_configured() {
        let app = App::new(AlphaBetaAgent::new(), GameConfig { machine_starts: true });
        assert_eq!(app.game_state.board().yellow().count_ones(), 1);
        assert_eq!(app.game_state.current_player(), Player::Red);
    }

    #[test]
    fn arrows_clamp_selection() {
        let mut app = App::new(AlphaBetaAgent::new(), GameConfig::default());
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
    }

    #[test]
    fn restart_and_quit() {
        let mut app = App::new(AlphaBetaAgent::new(), GameConfig::default());
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.game_state.board().get(5, 2), Cell::Red);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state.board().occupied(), 0);
        assert_eq!(app.message.as_deref(), Some("New game started!"));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
