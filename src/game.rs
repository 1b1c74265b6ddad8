//! Text command loop for playing a game.
//!
//! The interface is a simple line protocol on stdin/stdout, suitable for
//! driving the engine from a script or another process. Successful
//! commands answer with a `=`-prefixed line, failures with `?`.
//!
//! ## Supported Commands
//!
//! - `c3-c5` (a move designator) - Play the given move for the side to move
//! - `go` - Let the engine choose and play a move
//! - `new` - Start a new game
//! - `board` (or `dump`) - Print the current position
//! - `legal` - List the legal moves for the side to move
//! - `limit <n>` - Set the per-side move limit
//! - `undo` - Retract the last move
//! - `status` (or `winner`) - Report the winner, a draw, or the side to move
//! - `help` - List commands
//! - `quit` - Exit

use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow, bail};

use crate::board::Board;
use crate::moves::{Move, parse_move};
use crate::search::SearchEngine;

const HELP: &str =
    "commands: <move> go new board|dump legal limit <n> undo status|winner help quit";

/// A game session: one board plus the engine that plays `go` moves.
pub struct Game {
    board: Board,
    engine: SearchEngine,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    pub fn new() -> Game {
        Game {
            board: Board::new(),
            engine: SearchEngine::new(),
        }
    }

    /// A session whose engine picks seeded opening moves.
    pub fn with_seed(seed: u64) -> Game {
        Game {
            board: Board::new(),
            engine: SearchEngine::with_seed(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Execute one command line and return the response message.
    pub fn execute(&mut self, line: &str) -> Result<String> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            bail!("empty command");
        };
        match command.to_lowercase().as_str() {
            "new" => {
                self.board.clear();
                self.engine.reset();
                Ok("new game, black to move".to_string())
            }
            "board" | "dump" => Ok(format!("\n{}", self.board)),
            "legal" => {
                let moves: Vec<String> = self
                    .board
                    .legal_moves(self.board.turn())
                    .iter()
                    .map(Move::to_string)
                    .collect();
                Ok(moves.join(" "))
            }
            "limit" => {
                let limit: usize = parts
                    .get(1)
                    .ok_or_else(|| anyhow!("usage: limit <n>"))?
                    .parse()
                    .map_err(|_| anyhow!("usage: limit <n>"))?;
                self.board.set_move_limit(limit)?;
                Ok(format!("move limit {limit}"))
            }
            "go" => {
                if self.board.game_over() {
                    bail!("game is over");
                }
                let mv = self
                    .engine
                    .search_for_move(&self.board)
                    .ok_or_else(|| anyhow!("no move available"))?;
                self.board.make_move(mv);
                Ok(self.report_move(mv))
            }
            "undo" => {
                if self.board.moves_made() == 0 {
                    bail!("no moves to undo");
                }
                self.board.retract();
                Ok(format!("{} to move", self.board.turn()))
            }
            "status" | "winner" => match self.board.winner() {
                Some(outcome) => Ok(outcome.to_string()),
                None => Ok(format!("{} to move", self.board.turn())),
            },
            "help" => Ok(HELP.to_string()),
            "quit" => Ok("bye".to_string()),
            _ => {
                let Some(mv) = parse_move(command) else {
                    bail!("unknown command: {command}");
                };
                if self.board.game_over() {
                    bail!("game is over");
                }
                if !self.board.is_legal_move(mv) {
                    bail!("illegal move: {mv}");
                }
                self.board.make_move(mv);
                Ok(self.report_move(mv))
            }
        }
    }

    fn report_move(&mut self, mv: Move) -> String {
        // The board stamps the capture flag on applied moves.
        let played = *self.board.history().last().unwrap_or(&mv);
        match self.board.winner() {
            Some(outcome) => format!("{played} ({outcome})"),
            None => played.to_string(),
        }
    }

    /// Read commands from stdin until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        for line in stdin.lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match self.execute(line) {
                Ok(message) => writeln!(stdout, "= {message}")?,
                Err(err) => writeln!(stdout, "? {err}")?,
            }
            stdout.flush()?;
            if line.eq_ignore_ascii_case("quit") {
                break;
            }
        }
        Ok(())
    }
}
