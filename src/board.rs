//! Board state, move legality, and connectivity analysis.
//!
//! This module provides the core game logic for Lines of Action:
//! - Piece grid with make/retract move application (command/undo log)
//! - Legality as a line-counting check (a piece moves exactly as many
//!   steps as there are pieces on the full line through its move)
//! - Flood-fill region analysis feeding both the win condition and the
//!   heuristic, cached until the next grid mutation
//! - Lazy winner computation with the move-limit draw rule
//!
//! The board is the sole mutable aggregate; everything else in the crate
//! is a value type or operates on a board it owns exclusively.

use std::fmt;

use crate::constants::{BOARD_SIZE, DEFAULT_MOVE_LIMIT, NUM_SQUARES};
use crate::moves::Move;
use crate::square::{Square, sq};

/// The contents of a square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    White,
    Black,
    Empty,
}

impl Piece {
    /// The opposing color. Defined for White and Black; the identity on
    /// Empty so line-blocking tests can compare against it directly.
    pub fn opposite(self) -> Piece {
        match self {
            Piece::White => Piece::Black,
            Piece::Black => Piece::White,
            Piece::Empty => Piece::Empty,
        }
    }

    /// One-character board abbreviation.
    pub fn abbrev(self) -> char {
        match self {
            Piece::White => 'w',
            Piece::Black => 'b',
            Piece::Empty => '-',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::White => "white",
            Piece::Black => "black",
            Piece::Empty => "empty",
        };
        write!(f, "{name}")
    }
}

/// The result of a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The given side connected all of its pieces.
    Winner(Piece),
    /// The move limit was reached.
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{side} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Cached winner state. `Unknown` forces recomputation; `InProgress` is
/// itself a cached answer, valid until the next mutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Status {
    Unknown,
    InProgress,
    Decided(Outcome),
}

/// Errors reported by fallible board configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// `set_move_limit` called with a limit the game has already used up.
    MoveLimitTooSmall { limit: usize, moves_made: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MoveLimitTooSmall { limit, moves_made } => write!(
                f,
                "move limit {limit} too small: {moves_made} moves already made"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

const B: Piece = Piece::Black;
const W: Piece = Piece::White;
const E: Piece = Piece::Empty;

/// The standard initial configuration. CAUTION: index 0 is the BOTTOM
/// rank (rank 1), so the natural written notation appears upside down.
pub const INITIAL_PIECES: [[Piece; 8]; 8] = [
    [E, B, B, B, B, B, B, E],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [E, B, B, B, B, B, B, E],
];

/// Cached per-side connectivity data, recomputed lazily after mutations.
#[derive(Clone, Debug, Default)]
struct SideData {
    /// Maximal 8-connected clusters, largest first (ties broken by the
    /// smallest square index); squares within a cluster sorted ascending.
    regions: Vec<Vec<Square>>,
    /// Cluster sizes, parallel to `regions`.
    sizes: Vec<usize>,
    /// Live piece count.
    count: usize,
    /// Integer center of mass, `None` when the side has no pieces.
    com: Option<Square>,
}

/// The state of a game of Lines of Action.
#[derive(Debug)]
pub struct Board {
    grid: [Piece; NUM_SQUARES],
    turn: Piece,
    history: Vec<Move>,
    move_limit: usize,
    regions_valid: bool,
    white: SideData,
    black: SideData,
    status: Status,
}

impl Board {
    /// A new board in the standard initial position, Black to move.
    pub fn new() -> Board {
        Board::from_layout(INITIAL_PIECES, Piece::Black)
    }

    /// A board with the given contents (bottom rank first) and side to
    /// move. `get(sq(col, row)) == contents[row][col]`.
    pub fn from_layout(contents: [[Piece; 8]; 8], turn: Piece) -> Board {
        let mut board = Board {
            grid: [Piece::Empty; NUM_SQUARES],
            turn,
            history: Vec::new(),
            move_limit: DEFAULT_MOVE_LIMIT,
            regions_valid: false,
            white: SideData::default(),
            black: SideData::default(),
            status: Status::Unknown,
        };
        board.initialize(contents, turn);
        board
    }

    /// Reset to the given contents with SIDE to move. Clears the history
    /// and restores the default move limit.
    pub fn initialize(&mut self, contents: [[Piece; 8]; 8], side: Piece) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                self.grid[sq(col as u8, row as u8).index()] = contents[row][col];
            }
        }
        self.turn = side;
        self.move_limit = DEFAULT_MOVE_LIMIT;
        self.history.clear();
        self.invalidate();
    }

    /// Reset to the standard initial position.
    pub fn clear(&mut self) {
        self.initialize(INITIAL_PIECES, Piece::Black);
    }

    /// The piece at the given square.
    pub fn get(&self, square: Square) -> Piece {
        self.grid[square.index()]
    }

    /// The side to move.
    pub fn turn(&self) -> Piece {
        self.turn
    }

    /// Number of moves made and not retracted.
    pub fn moves_made(&self) -> usize {
        self.history.len()
    }

    /// The applied, unretracted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The per-side move limit; the game is drawn once `2 * limit` moves
    /// have been made.
    pub fn move_limit(&self) -> usize {
        self.move_limit
    }

    /// Set the move limit. Rejects limits the game has already used up.
    pub fn set_move_limit(&mut self, limit: usize) -> Result<(), BoardError> {
        if 2 * limit <= self.moves_made() {
            return Err(BoardError::MoveLimitTooSmall {
                limit,
                moves_made: self.moves_made(),
            });
        }
        self.move_limit = limit;
        self.status = Status::Unknown;
        Ok(())
    }

    /// Overwrite one square, invalidating the derived caches.
    fn set(&mut self, square: Square, piece: Piece) {
        self.grid[square.index()] = piece;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.regions_valid = false;
        self.status = Status::Unknown;
    }

    /// True iff `from`-`to` is a legal move for the side on move.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.is_legal_for(self.turn, from, to)
    }

    /// True iff the move is legal for the side on move. The capture flag
    /// is ignored.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_legal(mv.from(), mv.to())
    }

    /// Legality from a chosen side's perspective: the origin must hold
    /// one of `side`'s pieces, the displacement must be a straight line
    /// whose length equals the number of pieces on the full line through
    /// both squares, and the path must not be blocked.
    fn is_legal_for(&self, side: Piece, from: Square, to: Square) -> bool {
        if self.get(from) != side || !from.is_valid_move(to) || self.blocked(from, to) {
            return false;
        }
        let dir = from.direction(to);
        let mut pieces = 1;
        for d in [dir, (dir + 4) % 8] {
            let mut step = 1;
            while let Some(square) = from.move_dest(d, step) {
                if self.get(square) != Piece::Empty {
                    pieces += 1;
                }
                step += 1;
            }
        }
        pieces == from.distance(to)
    }

    /// True if a move from `from` to `to` is blocked by a friendly piece
    /// on the target square or an opposing piece strictly in between.
    /// Requires that the two squares share a line.
    pub fn blocked(&self, from: Square, to: Square) -> bool {
        let mover = self.get(from);
        if mover != Piece::Empty && mover == self.get(to) {
            return true;
        }
        let dir = from.direction(to);
        for step in 1..from.distance(to) {
            let between = from
                .move_dest(dir, step)
                .expect("interior of an on-board line stays on board");
            if self.get(between) == mover.opposite() {
                return true;
            }
        }
        false
    }

    /// All legal moves for `side`, in square enumeration order.
    pub fn legal_moves(&self, side: Piece) -> Vec<Move> {
        let mut legal = Vec::new();
        for from in Square::all() {
            if self.get(from) != side {
                continue;
            }
            for to in Square::all() {
                if self.is_legal_for(side, from, to) {
                    legal.push(Move::new(from, to));
                }
            }
        }
        legal
    }

    /// Apply a legal move. If the destination holds an opponent, the
    /// history records the capturing variant so `retract` can restore
    /// the captured piece. Panics on an illegal move: the search only
    /// applies moves it generated itself, so this is a caller defect.
    pub fn make_move(&mut self, mut mv: Move) {
        assert!(self.is_legal_move(mv), "illegal move: {mv}");
        if self.get(mv.to()) != Piece::Empty {
            mv = mv.capture_move();
        }
        let mover = self.turn;
        self.set(mv.to(), mover);
        self.set(mv.from(), Piece::Empty);
        self.turn = mover.opposite();
        self.history.push(mv);
    }

    /// Retract the most recent move, restoring the grid contents at both
    /// squares and the prior turn. Panics if no move has been made.
    pub fn retract(&mut self) {
        assert!(!self.history.is_empty(), "retract with no moves made");
        let last = self.history.pop().expect("checked non-empty");
        let mover = self.turn.opposite();
        self.set(last.from(), mover);
        if last.is_capture() {
            self.set(last.to(), mover.opposite());
        } else {
            self.set(last.to(), Piece::Empty);
        }
        self.turn = mover;
    }

    /// True if the latest move returned to the origin of the move three
    /// plies earlier (the same piece shuffling back and forth).
    pub fn repeat_move(&self) -> bool {
        let n = self.history.len();
        n >= 3 && self.history[n - 1].to() == self.history[n - 3].from()
    }

    // =========================================================================
    // Region analysis
    // =========================================================================

    /// Recompute both sides' connectivity data if a mutation occurred
    /// since the last computation.
    fn compute_regions(&mut self) {
        if self.regions_valid {
            return;
        }
        self.white = self.regions_for(Piece::White);
        self.black = self.regions_for(Piece::Black);
        self.regions_valid = true;
    }

    /// Flood-fill connected components for one side: worklist over the
    /// 8x8 grid with a visited bitset.
    fn regions_for(&self, side: Piece) -> SideData {
        let mut visited = 0u64;
        let mut regions: Vec<Vec<Square>> = Vec::new();
        for start in Square::all() {
            if self.get(start) != side || visited & (1 << start.index()) != 0 {
                continue;
            }
            let mut region = Vec::new();
            let mut stack = vec![start];
            while let Some(square) = stack.pop() {
                let bit = 1u64 << square.index();
                if visited & bit != 0 {
                    continue;
                }
                visited |= bit;
                region.push(square);
                for adj in square.adjacent() {
                    if self.get(adj) == side && visited & (1 << adj.index()) == 0 {
                        stack.push(adj);
                    }
                }
            }
            region.sort();
            regions.push(region);
        }
        // Largest cluster first; equal sizes ordered by smallest square.
        regions.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a[0].cmp(&b[0])));

        let sizes: Vec<usize> = regions.iter().map(Vec::len).collect();
        let count: usize = sizes.iter().sum();
        let com = if count == 0 {
            None
        } else {
            let mut cols = 0usize;
            let mut rows = 0usize;
            for region in &regions {
                for square in region {
                    cols += square.col() as usize;
                    rows += square.row() as usize;
                }
            }
            Some(sq((cols / count) as u8, (rows / count) as u8))
        };
        SideData {
            regions,
            sizes,
            count,
            com,
        }
    }

    fn side_data(&mut self, side: Piece) -> &SideData {
        self.compute_regions();
        match side {
            Piece::White => &self.white,
            _ => &self.black,
        }
    }

    /// The side's connected clusters, largest first.
    pub fn regions(&mut self, side: Piece) -> &[Vec<Square>] {
        &self.side_data(side).regions
    }

    /// The sizes of the side's clusters, largest first.
    pub fn region_sizes(&mut self, side: Piece) -> &[usize] {
        &self.side_data(side).sizes
    }

    /// Number of live pieces for the side.
    pub fn piece_count(&mut self, side: Piece) -> usize {
        self.side_data(side).count
    }

    /// Integer center of mass of the side's pieces, if it has any.
    pub fn center_of_mass(&mut self, side: Piece) -> Option<Square> {
        self.side_data(side).com
    }

    /// True iff all of the side's pieces form a single cluster.
    pub fn pieces_contiguous(&mut self, side: Piece) -> bool {
        self.region_sizes(side).len() == 1
    }

    // =========================================================================
    // Winner
    // =========================================================================

    /// The game result, or `None` while play continues. When a move
    /// leaves both sides contiguous the mover wins (contiguity is
    /// evaluated the instant a move creates it, so the side not on move
    /// is the one that just moved). Contiguity takes precedence over the
    /// move-limit draw at exactly the 2L-th move.
    pub fn winner(&mut self) -> Option<Outcome> {
        match self.status {
            Status::Decided(outcome) => return Some(outcome),
            Status::InProgress => return None,
            Status::Unknown => {}
        }
        let white = self.pieces_contiguous(Piece::White);
        let black = self.pieces_contiguous(Piece::Black);
        let status = if white && black {
            Status::Decided(Outcome::Winner(self.turn.opposite()))
        } else if white {
            Status::Decided(Outcome::Winner(Piece::White))
        } else if black {
            Status::Decided(Outcome::Winner(Piece::Black))
        } else if 2 * self.move_limit <= self.moves_made() {
            Status::Decided(Outcome::Draw)
        } else {
            Status::InProgress
        };
        self.status = status;
        match status {
            Status::Decided(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// True iff the game has ended.
    pub fn game_over(&mut self) -> bool {
        self.winner().is_some()
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

// The copy duplicates grid, turn, history, and limit; the caches are
// recomputed lazily on the copy.
impl Clone for Board {
    fn clone(&self) -> Board {
        Board {
            grid: self.grid,
            turn: self.turn,
            history: self.history.clone(),
            move_limit: self.move_limit,
            regions_valid: false,
            white: SideData::default(),
            black: SideData::default(),
            status: Status::Unknown,
        }
    }
}

// Two boards are equal when their grids and sides to move agree.
impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.grid == other.grid && self.turn == other.turn
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===")?;
        for row in (0..BOARD_SIZE as u8).rev() {
            write!(f, "    ")?;
            for col in 0..BOARD_SIZE as u8 {
                write!(f, "{} ", self.get(sq(col, row)).abbrev())?;
            }
            writeln!(f)?;
        }
        write!(f, "Next move: {}\n===", self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::parse_move;

    fn layout(white: &[Square], black: &[Square]) -> [[Piece; 8]; 8] {
        let mut contents = [[Piece::Empty; 8]; 8];
        for s in white {
            contents[s.row() as usize][s.col() as usize] = Piece::White;
        }
        for s in black {
            contents[s.row() as usize][s.col() as usize] = Piece::Black;
        }
        contents
    }

    #[test]
    fn test_initial_position() {
        let board = Board::new();
        assert_eq!(board.turn(), Piece::Black);
        assert_eq!(board.moves_made(), 0);
        assert_eq!(board.move_limit(), DEFAULT_MOVE_LIMIT);
        assert_eq!(board.get(sq(1, 0)), Piece::Black); // b1
        assert_eq!(board.get(sq(0, 1)), Piece::White); // a2
        assert_eq!(board.get(sq(0, 0)), Piece::Empty); // a1
        assert_eq!(board.get(sq(6, 7)), Piece::Black); // g8
    }

    #[test]
    fn test_initial_legal_moves() {
        let board = Board::new();
        let legal = board.legal_moves(Piece::Black);
        assert_eq!(legal.len(), 36);
        for fixture in ["b1-b3", "d1-b3", "b1-h1", "g1-a1", "c1xa3", "f1xh3"] {
            let mv = parse_move(fixture).unwrap();
            assert!(legal.contains(&mv), "missing {fixture}");
        }
        // White has the mirror-image mobility.
        assert_eq!(board.legal_moves(Piece::White).len(), 36);
    }

    #[test]
    fn test_is_legal_rejects_bad_origins() {
        let board = Board::new();
        // Empty origin.
        assert!(!board.is_legal(sq(0, 0), sq(1, 1)));
        // Origin held by the side not on move.
        assert!(!board.is_legal(sq(0, 1), sq(2, 1)));
        // Wrong step count: the b-file holds two pieces.
        assert!(!board.is_legal(sq(1, 0), sq(1, 1)));
        // Not a straight line.
        assert!(!board.is_legal(sq(1, 0), sq(2, 2)));
    }

    #[test]
    fn test_friendly_pieces_do_not_block() {
        let board = Board::new();
        // b1-h1 jumps four friendly pieces; only opponents block.
        assert!(board.is_legal(sq(1, 0), sq(7, 0)));
    }

    #[test]
    fn test_opposing_piece_blocks_path() {
        let board = Board::from_layout(
            layout(&[sq(2, 3)], &[sq(1, 3), sq(5, 5)]),
            Piece::Black,
        );
        // Two pieces on row 4, so b4 moves two steps, but c4 is an
        // opposing piece strictly in between.
        assert!(!board.is_legal(sq(1, 3), sq(3, 3)));
        assert!(board.blocked(sq(1, 3), sq(3, 3)));
    }

    #[test]
    fn test_make_retract_roundtrip() {
        let initial = Board::new();
        let mut board = Board::new();
        board.make_move(parse_move("b1-b3").unwrap());
        assert_eq!(board.get(sq(1, 2)), Piece::Black);
        assert_eq!(board.get(sq(1, 0)), Piece::Empty);
        assert_eq!(board.turn(), Piece::White);
        assert_eq!(board.moves_made(), 1);
        board.retract();
        assert_eq!(board, initial);
        assert_eq!(board.moves_made(), 0);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_capture_and_retract() {
        let initial = Board::new();
        let mut board = Board::new();
        board.make_move(parse_move("c1-a3").unwrap());
        let recorded = board.history()[0];
        assert!(recorded.is_capture());
        assert_eq!(board.get(sq(0, 2)), Piece::Black);
        assert_eq!(board.get(sq(2, 0)), Piece::Empty);
        assert_eq!(board.piece_count(Piece::White), 11);
        board.retract();
        assert_eq!(board, initial);
        assert_eq!(board.piece_count(Piece::White), 12);
        assert_eq!(board.get(sq(0, 2)), Piece::White);
    }

    #[test]
    fn test_region_partition_initial() {
        let mut board = Board::new();
        for side in [Piece::White, Piece::Black] {
            let regions = board.regions(side).to_vec();
            assert_eq!(regions.len(), 2);
            assert_eq!(board.region_sizes(side), &[6, 6]);
            // Disjoint union equals the side's occupied squares.
            let mut all: Vec<Square> = regions.concat();
            all.sort();
            all.dedup();
            assert_eq!(all.len(), 12);
            for s in &all {
                assert_eq!(board.get(*s), side);
            }
            assert!(!board.pieces_contiguous(side));
            assert_eq!(board.piece_count(side), 12);
            assert_eq!(board.center_of_mass(side), Some(sq(3, 3)));
        }
    }

    #[test]
    fn test_region_tie_break_by_smallest_square() {
        let mut board = Board::from_layout(
            layout(&[], &[sq(6, 6), sq(7, 7), sq(0, 0), sq(1, 1)]),
            Piece::Black,
        );
        let regions = board.regions(Piece::Black);
        assert_eq!(regions.len(), 2);
        // Equal sizes: the cluster containing a1 sorts first.
        assert_eq!(regions[0][0], sq(0, 0));
        assert_eq!(regions[1][0], sq(6, 6));
    }

    #[test]
    fn test_single_piece_is_contiguous() {
        let mut board =
            Board::from_layout(layout(&[sq(4, 4)], &[sq(0, 0), sq(7, 7)]), Piece::Black);
        assert!(board.pieces_contiguous(Piece::White));
        assert_eq!(board.winner(), Some(Outcome::Winner(Piece::White)));
    }

    #[test]
    fn test_simultaneous_contiguity_mover_wins() {
        let mut board = Board::from_layout(
            layout(&[sq(1, 4), sq(1, 6)], &[sq(3, 4), sq(1, 5)]),
            Piece::Black,
        );
        assert_eq!(board.winner(), None);
        // d5 captures b5: White shrinks to the single piece b7 and the
        // captured square joins b6, so both sides end contiguous.
        board.make_move(parse_move("d5-b5").unwrap());
        assert!(board.pieces_contiguous(Piece::White));
        assert!(board.pieces_contiguous(Piece::Black));
        assert_eq!(board.winner(), Some(Outcome::Winner(Piece::Black)));
    }

    #[test]
    fn test_draw_at_move_limit() {
        let mut board = Board::from_layout(
            layout(&[sq(0, 0), sq(0, 2)], &[sq(7, 7), sq(7, 5)]),
            Piece::White,
        );
        board.set_move_limit(1).unwrap();
        board.make_move(parse_move("a1-b1").unwrap());
        assert_eq!(board.winner(), None);
        board.make_move(parse_move("h8-g8").unwrap());
        assert_eq!(board.winner(), Some(Outcome::Draw));
    }

    #[test]
    fn test_contiguity_beats_draw_at_limit() {
        let mut board = Board::from_layout(
            layout(&[sq(0, 0), sq(0, 2)], &[sq(7, 7), sq(7, 5)]),
            Piece::White,
        );
        board.set_move_limit(1).unwrap();
        board.make_move(parse_move("a1-b1").unwrap());
        // The 2L-th move connects Black; the win outranks the draw.
        board.make_move(parse_move("h8-g7").unwrap());
        assert_eq!(board.winner(), Some(Outcome::Winner(Piece::Black)));
    }

    #[test]
    fn test_retract_clears_winner() {
        let mut board = Board::from_layout(
            layout(&[sq(1, 0), sq(0, 2)], &[sq(7, 7), sq(7, 5)]),
            Piece::Black,
        );
        board.make_move(parse_move("h8-g7").unwrap());
        assert_eq!(board.winner(), Some(Outcome::Winner(Piece::Black)));
        board.retract();
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_set_move_limit_rejects_spent_limit() {
        let mut board = Board::new();
        board.make_move(parse_move("b1-b3").unwrap());
        board.make_move(parse_move("a2-c2").unwrap());
        let err = board.set_move_limit(1).unwrap_err();
        assert_eq!(
            err,
            BoardError::MoveLimitTooSmall {
                limit: 1,
                moves_made: 2
            }
        );
        assert!(board.set_move_limit(2).is_ok());
    }

    #[test]
    fn test_repeat_move() {
        let mut board = Board::new();
        board.make_move(parse_move("b1-b3").unwrap());
        board.make_move(parse_move("a2-c2").unwrap());
        board.make_move(parse_move("g1-g3").unwrap());
        assert!(!board.repeat_move());
        board.make_move(parse_move("c2-a2").unwrap());
        assert!(board.repeat_move());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new();
        board.set_move_limit(20).unwrap();
        board.make_move(parse_move("b1-b3").unwrap());
        let mut copy = board.clone();
        assert_eq!(copy, board);
        assert_eq!(copy.move_limit(), 20);
        assert_eq!(copy.history(), board.history());
        copy.make_move(parse_move("a2-c2").unwrap());
        assert_ne!(copy, board);
        assert_eq!(board.moves_made(), 1);
    }

    #[test]
    fn test_piece_count_conservation() {
        let mut board = Board::new();
        for notation in ["b1-b3", "a2-c2", "c1xa3"] {
            board.make_move(parse_move(notation).unwrap());
        }
        assert_eq!(board.piece_count(Piece::Black), 12);
        assert_eq!(board.piece_count(Piece::White), 11);
        board.retract();
        assert_eq!(board.piece_count(Piece::White), 12);
    }

    #[test]
    fn test_display_shows_turn() {
        let board = Board::new();
        let rendered = board.to_string();
        assert!(rendered.contains("Next move: black"));
        assert!(rendered.starts_with("===\n    - b b b b b b -"));
    }
}
