//! Move selection: iterative-deepening alpha-beta over the game tree.
//!
//! The engine owns an [`Evaluator`] and a seedable RNG. Depth selection is
//! staged by game phase:
//! - opening (first two plies): a uniformly random legal move
//! - early game: a fixed shallow search
//! - near the draw limit: deep enough to settle the game in time
//! - late midgame: the base depth, bumped one ply when the position is
//!   cheap (few legal moves) or the opponent is shuffling in place
//!
//! Within a phase the search deepens iteratively and stops early once a
//! forced win appears. Values are always from White's perspective; the
//! `sense` parameter flips the maximization for Black.

use crate::board::{Board, Outcome, Piece};
use crate::constants::{
    BASE_DEPTH, EARLY_GAME_DEPTH, EARLY_GAME_MOVES, ENDGAME_MIN_DEPTH, ENDGAME_WINDOW, INFTY,
    LOW_BRANCHING, MAX_SEARCH_DEPTH, MIDGAME_MOVES, OPENING_MOVES, WINNING_VALUE,
};
use crate::eval::Evaluator;
use crate::moves::Move;

/// How deep to search from the current position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchDepth {
    /// Play a random legal move instead of searching.
    Opening,
    /// Search the given number of plies.
    Plies(u32),
}

/// Alpha-beta game tree search with phase-dependent depth.
#[derive(Debug)]
pub struct SearchEngine {
    /// Adaptive base depth for the midgame, raised over the course of a
    /// long game and never reset.
    depth: u32,
    rng: fastrand::Rng,
    evaluator: Evaluator,
    found_move: Option<Move>,
}

impl SearchEngine {
    pub fn new() -> SearchEngine {
        SearchEngine::from_rng(fastrand::Rng::new())
    }

    /// An engine with a deterministic opening-move RNG.
    pub fn with_seed(seed: u64) -> SearchEngine {
        SearchEngine::from_rng(fastrand::Rng::with_seed(seed))
    }

    fn from_rng(rng: fastrand::Rng) -> SearchEngine {
        SearchEngine {
            depth: BASE_DEPTH,
            rng,
            evaluator: Evaluator::new(),
            found_move: None,
        }
    }

    /// Restore the adaptive depth for a fresh game. The RNG keeps its
    /// sequence so a seeded session stays reproducible across games.
    pub fn reset(&mut self) {
        self.depth = BASE_DEPTH;
        self.found_move = None;
    }

    /// Pick the search depth for the current position. May bump the
    /// engine's adaptive base depth as a side effect.
    pub fn choose_depth(&mut self, board: &mut Board) -> SearchDepth {
        let made = board.moves_made();
        let total = 2 * board.move_limit();
        if self.depth as usize + made >= total {
            // Never search past the forced end of the game.
            return SearchDepth::Plies((total - made) as u32);
        }
        if made < OPENING_MOVES {
            return SearchDepth::Opening;
        }
        if made < EARLY_GAME_MOVES {
            return SearchDepth::Plies(EARLY_GAME_DEPTH);
        }
        if total - made < ENDGAME_WINDOW {
            return SearchDepth::Plies(self.depth.max(ENDGAME_MIN_DEPTH));
        }
        if made >= MIDGAME_MOVES
            && self.depth < MAX_SEARCH_DEPTH
            && (board.repeat_move() || board.legal_moves(board.turn()).len() <= LOW_BRANCHING)
        {
            self.depth += 1;
        }
        SearchDepth::Plies(self.depth)
    }

    /// The move the engine plays from this position, or `None` when the
    /// game is already over. Searches a scratch copy of the board.
    pub fn search_for_move(&mut self, board: &Board) -> Option<Move> {
        let mut work = board.clone();
        if work.winner().is_some() {
            return None;
        }
        let max_depth = match self.choose_depth(&mut work) {
            SearchDepth::Opening => {
                let legal = work.legal_moves(work.turn());
                if legal.is_empty() {
                    return None;
                }
                return Some(legal[self.rng.usize(0..legal.len())]);
            }
            SearchDepth::Plies(plies) => plies,
        };
        let sense = if work.turn() == Piece::White { 1 } else { -1 };
        self.found_move = None;
        for depth in 1..=max_depth {
            let value = self.find_move(&mut work, depth, true, sense, -INFTY, INFTY);
            if (if sense == 1 { value } else { -value }) > WINNING_VALUE {
                break;
            }
        }
        self.found_move
    }

    /// Alpha-beta search to DEPTH plies, returning the position's value
    /// from White's perspective. `sense` is 1 when the side to move
    /// maximizes that value and -1 when it minimizes; each level negates
    /// it and maximizes `sense * value`. Records the best move in
    /// `found_move` iff `save_move`.
    fn find_move(
        &mut self,
        board: &mut Board,
        depth: u32,
        save_move: bool,
        sense: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if let Some(outcome) = board.winner() {
            return match outcome {
                Outcome::Draw => 0,
                Outcome::Winner(Piece::White) => INFTY,
                Outcome::Winner(_) => -INFTY,
            };
        }
        if depth == 0 {
            return self.evaluator.heuristic_value(board);
        }
        let legal = board.legal_moves(board.turn());
        if legal.is_empty() {
            // Nothing to play; treat as drawish rather than decisive.
            return 0;
        }
        let mut best_value = -INFTY;
        let mut best_so_far = legal[0];
        for mv in legal {
            board.make_move(mv);
            let current = sense * self.find_move(board, depth - 1, false, -sense, alpha, beta);
            board.retract();
            if current >= best_value {
                best_so_far = mv;
                best_value = current;
                if sense == -1 {
                    beta = beta.min(sense * current);
                } else {
                    alpha = alpha.max(current);
                }
                if beta <= alpha {
                    break;
                }
            }
        }
        if save_move {
            self.found_move = Some(best_so_far);
        }
        sense * best_value
    }
}

impl Default for SearchEngine {
    fn default() -> SearchEngine {
        SearchEngine::new()
    }
}
