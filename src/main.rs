//! Bulls and Cows - CLI
//!
//! Code-guessing game with TUI and plain console modes.

use anyhow::Result;
use bulls_cows::{
    commands::{BenchmarkConfig, SimpleOutcome, run_benchmark, run_simple},
    config::{DEFAULT_CONFIG_FILE, GameConfig},
    core::SecretCode,
    output::print_benchmark_result,
    validation::GameSetup,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls and Cows: find the secret code of distinct symbols",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file with min_password_length / max_password_length
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (prompts on stdin, feedback on stdout)
    Simple {
        /// Play against this secret instead of a random one
        #[arg(long)]
        secret: Option<SecretCode>,
    },

    /// Benchmark secret code generation
    Benchmark {
        /// Code length
        #[arg(short, long, default_value = "4")]
        length: i64,

        /// Number of possible symbols
        #[arg(short, long, default_value = "10")]
        symbols: i64,

        /// Number of codes to generate
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = GameConfig::load_or_default(&cli.config);
    debug!(?config, "Configuration ready");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple { secret } => run_simple_command(&config, secret),
        Commands::Benchmark {
            length,
            symbols,
            count,
        } => run_benchmark_command(&config, length, symbols, count),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use bulls_cows::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}

fn run_simple_command(config: &GameConfig, secret: Option<SecretCode>) -> Result<()> {
    match run_simple(config, secret)? {
        SimpleOutcome::Solved { turns, .. } => info!(turns, "Game finished"),
        SimpleOutcome::InputClosed => info!("Game abandoned"),
    }
    Ok(())
}

fn run_benchmark_command(
    config: &GameConfig,
    length: i64,
    symbols: i64,
    count: usize,
) -> Result<()> {
    let setup = GameSetup::new(length, symbols, config)?;

    println!(
        "Generating {count} codes of length {} from {} symbols...",
        setup.length,
        setup.alphabet.len()
    );

    let mut benchmark = BenchmarkConfig::new(setup.length, setup.alphabet, count);
    benchmark.show_progress = true;

    let result = run_benchmark(benchmark)?;
    print_benchmark_result(&result);
    Ok(())
}
