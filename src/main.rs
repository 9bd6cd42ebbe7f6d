use std::io;

use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use console_games::{Game, GameKind, GameRng, GamesConfig, GuessConfig, Session, SlotConfig};
use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[derive(Parser, Debug)]
#[command(name = "console-games", version, about = "Round-based console games")]
struct Cli {
    #[command(subcommand)]
    game: Command,

    /// Seed for a reproducible session (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set; logs go to stderr
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Guess the hidden word one letter at a time
    Hangman,
    /// Guess the secret number
    Guess {
        #[arg(long, default_value_t = 1)]
        lower: u32,
        #[arg(long, default_value_t = 10)]
        upper: u32,
    },
    /// Bet on three reels
    Slots {
        #[arg(
            long,
            default_value_t = 100,
            value_parser = clap::value_parser!(u64).range(1..=SlotConfig::MAX_BALANCE)
        )]
        balance: u64,
    },
    /// Rock, paper, scissors against the computer
    Rps,
    /// Deposit to and withdraw from a toy account
    Bank,
}

impl Command {
    /// Apply command line flags to the config and pick the game.
    fn configure(&self, config: &mut GamesConfig) -> Result<GameKind> {
        let kind = match *self {
            Command::Hangman => GameKind::Hangman,
            Command::Guess { lower, upper } => {
                ensure!(lower <= upper, "--lower ({lower}) must not exceed --upper ({upper})");
                config.guess = GuessConfig::default().with_range(lower, upper);
                GameKind::NumberGuess
            }
            Command::Slots { balance } => {
                config.slots = SlotConfig::default().with_balance(balance);
                GameKind::Slots
            }
            Command::Rps => GameKind::RockPaperScissors,
            Command::Bank => GameKind::Bank,
        };
        Ok(kind)
    }
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let mut config = GamesConfig::default();
    let kind = cli.game.configure(&mut config)?;
    let game = Game::from_config(kind, &config);

    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);

    Session::start(&game, rng).run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
