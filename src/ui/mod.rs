//! Front ends for playing against the machine: a ratatui terminal UI and a
//! plain line-based console.

mod app;
mod console;
mod game_view;

pub use app::App;
pub use console::Console;
