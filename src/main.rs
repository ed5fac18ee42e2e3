use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use ab_connect_four::ai::AlphaBetaAgent;
use ab_connect_four::config::AppConfig;
use ab_connect_four::ui::{App, Console};

/// Play Connect Four against an alpha-beta search.
#[derive(Parser)]
#[command(name = "ab-connect-four", about = "Play Connect Four against the machine")]
struct Cli {
    /// Plain text prompts on stdin/stdout instead of the terminal UI
    #[arg(long)]
    headless: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Let the machine open every game
    #[arg(long)]
    machine_starts: bool,

    /// Override the number of root search threads
    #[arg(long)]
    threads: Option<usize>,

    /// Print a config file with all defaults and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().filter_or("C4_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if cli.machine_starts {
        config.game.machine_starts = true;
    }
    if let Some(threads) = cli.threads {
        config.search.threads = threads;
    }
    config.validate().context("invalid configuration")?;
    info!("starting with {:?}", config);

    let agent = AlphaBetaAgent::from_config(&config.search, &config.heuristic);

    if cli.headless {
        let stdin = io::stdin();
        let mut console = Console::new(stdin.lock(), io::stdout(), agent, config.game);
        console.run().context("console game failed")?;
        return Ok(());
    }

    run_tui(App::new(agent, config.game)).context("terminal UI failed")
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
