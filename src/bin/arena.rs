use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use ab_connect_four::ai::{Agent, AlphaBetaAgent, RandomAgent};
use ab_connect_four::arena::run_match;
use ab_connect_four::config::AppConfig;

/// Pit the alpha-beta player against a baseline.
#[derive(Parser)]
#[command(name = "arena", about = "Play the alpha-beta agent against an opponent")]
struct Cli {
    /// Opponent: random or alphabeta
    #[arg(long, default_value = "random")]
    opponent: String,

    /// Number of games; openings alternate
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().filter_or("C4_LOG", "info");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    if cli.games == 0 {
        bail!("--games must be at least 1");
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let mut subject = AlphaBetaAgent::from_config(&config.search, &config.heuristic);
    let mut opponent: Box<dyn Agent> = match cli.opponent.as_str() {
        "random" => match cli.seed {
            Some(seed) => Box::new(RandomAgent::seeded(seed)),
            None => Box::new(RandomAgent::new()),
        },
        "alphabeta" => Box::new(AlphaBetaAgent::from_config(&config.search, &config.heuristic)),
        other => bail!("unknown opponent '{}' (expected 'random' or 'alphabeta')", other),
    };

    println!(
        "{} vs {} over {} games",
        subject.name(),
        opponent.name(),
        cli.games
    );
    println!("-------------------------------------------");

    let record = run_match(&mut subject, opponent.as_mut(), cli.games)?;

    println!("-------------------------------------------");
    println!(
        "Wins: {}  Losses: {}  Draws: {}  ({:.1}% win rate)",
        record.wins,
        record.losses,
        record.draws,
        record.win_rate() * 100.0
    );

    let cache = subject.evaluator().cache_stats();
    println!(
        "Terminal cache: {} entries, {} hits, {} misses, {} evictions",
        cache.entries, cache.hits, cache.misses, cache.evictions
    );

    Ok(())
}
