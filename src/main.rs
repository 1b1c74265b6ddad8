//! Loa-Rust: A Lines of Action engine.
//!
//! ## Usage
//!
//! - `loa-rust` - Start the interactive command loop
//! - `loa-rust play --seed 7 --limit 40` - Command loop, seeded, custom limit
//! - `loa-rust demo` - Watch the engine play itself for a few moves

use anyhow::Result;
use clap::{Parser, Subcommand};

use loa_rust::board::Board;
use loa_rust::constants::DEFAULT_MOVE_LIMIT;
use loa_rust::game::Game;
use loa_rust::search::SearchEngine;

/// Loa-Rust: a Lines of Action engine
#[derive(Parser)]
#[command(name = "loa-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive command loop
    Play {
        /// Seed for the engine's opening moves
        #[arg(long)]
        seed: Option<u64>,
        /// Per-side move limit before the game is drawn
        #[arg(long, default_value_t = DEFAULT_MOVE_LIMIT)]
        limit: usize,
    },
    /// Let the engine play itself for a few moves
    Demo {
        /// Number of engine moves to play
        #[arg(long, default_value_t = 6)]
        plies: usize,
        /// RNG seed for the opening
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Demo { plies, seed }) => run_demo(plies, seed),
        Some(Commands::Play { seed, limit }) => run_play(seed, limit),
        None => run_play(None, DEFAULT_MOVE_LIMIT),
    }
}

fn run_play(seed: Option<u64>, limit: usize) -> Result<()> {
    let mut game = match seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    if limit != DEFAULT_MOVE_LIMIT {
        game.execute(&format!("limit {limit}"))?;
    }
    game.run()
}

fn run_demo(plies: usize, seed: u64) -> Result<()> {
    println!("Loa-Rust: Lines of Action self-play\n");
    let mut board = Board::new();
    let mut engine = SearchEngine::with_seed(seed);
    for _ in 0..plies {
        let Some(mv) = engine.search_for_move(&board) else {
            break;
        };
        let side = board.turn();
        board.make_move(mv);
        // Echo the capture-stamped form recorded on the board.
        let played = board.history().last().copied().unwrap_or(mv);
        println!("{side}: {played}");
        if let Some(outcome) = board.winner() {
            println!("{outcome}");
            break;
        }
    }
    println!("{board}");
    Ok(())
}
