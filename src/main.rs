//! go-board: a Go rule engine.
//!
//! ## Usage
//!
//! - `go-board` - Play a random demo game
//! - `go-board gtp` - Start GTP server for GUI integration
//! - `go-board demo --json` - Demo game, then print the final state as JSON

use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};

use go_board::config::GameConfig;
use go_board::constants::DEFAULT_SIZE;
use go_board::gtp::GtpEngine;
use go_board::player::{RandomPlayer, self_play};
use go_board::{Color, Move};
use go_board::vertex::move_string;

/// go-board: a Go rule engine
#[derive(Parser)]
#[command(name = "go-board")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN)
    #[arg(short, long, default_value_t = DEFAULT_SIZE, global = true)]
    size: usize,

    /// Seed for the random move source
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Play a random game against itself and print the result
    Demo {
        /// Maximum number of moves to play
        #[arg(long)]
        max_moves: Option<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut config = GameConfig {
        size: cli.size,
        seed: cli.seed,
        max_moves: None,
    };

    match cli.command {
        Some(Commands::Gtp) => {
            let mut engine = GtpEngine::new(&config).context("invalid game configuration")?;
            log::info!("GTP server on stdin/stdout, {}x{}", config.size, config.size);
            engine.run(io::stdin().lock(), io::stdout().lock())
        }
        Some(Commands::Demo { max_moves, json }) => {
            config.max_moves = max_moves;
            run_demo(&config, json)
        }
        None => run_demo(&config, false),
    }
}

/// Log to stderr; stdout is reserved for GTP responses and demo output.
fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .target(env_logger::Target::Stderr)
    .init();
}

fn run_demo(config: &GameConfig, json: bool) -> anyhow::Result<()> {
    let mut state = config.new_game().context("invalid game configuration")?;
    let mut player = config
        .seed
        .map_or_else(RandomPlayer::new, RandomPlayer::with_seed);

    let played = self_play(&mut state, &mut player, config.move_limit())?;

    println!("{}", state.current_board());
    println!("Moves played: {played}");
    if let Some(mv @ Move::Place { .. }) = state.last_move() {
        println!("Last move: {}", move_string(mv, state.size())?);
    }
    println!(
        "Captures: black {}, white {}",
        state.captures(Color::Black),
        state.captures(Color::White)
    );
    println!(
        "Game over: {}",
        if state.is_game_over() { "yes" } else { "no (move limit)" }
    );

    if json {
        println!("{}", state.to_json().context("failed to serialize game")?);
    }
    Ok(())
}
