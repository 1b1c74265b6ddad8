//! Constants for board geometry, heuristic weights, and search parameters.
//!
//! The board is the fixed 8x8 Lines of Action grid; squares are addressed
//! by `(col, row)` pairs mapped to a flat index (`row * 8 + col`).

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length.
pub const BOARD_SIZE: usize = 8;

/// Total number of squares.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Default number of moves per side before the game is declared a draw.
pub const DEFAULT_MOVE_LIMIT: usize = 30;

/// Direction offsets as `(dcol, drow)`, ordered N, NE, E, SE, S, SW, W, NW.
/// The opposite of direction `d` is `(d + 4) % 8`; even indices are
/// orthogonal, odd indices diagonal.
pub const DIR: [(i8, i8); 8] = [
    (0, 1),   // N
    (1, 1),   // NE
    (1, 0),   // E
    (1, -1),  // SE
    (0, -1),  // S
    (-1, -1), // SW
    (-1, 0),  // W
    (-1, 1),  // NW
];

// =============================================================================
// Heuristic Weights
// =============================================================================

/// Fixed bonus for the side to move (sign-flipped for Black).
pub const TURN_WEIGHT: f64 = 1.0;

/// Weight of the mobility differential.
pub const MOBILITY_WEIGHT: f64 = 20.0;

/// Weight of the concentration term (inverse spread around the centroid).
pub const CONCENTRATION_WEIGHT: f64 = 50000.0;

/// Weight of the per-square board position score.
pub const BOARD_POSITION_WEIGHT: f64 = 5.0;

/// Weight of the center-of-mass proximity term.
pub const CENTER_MASS_WEIGHT: f64 = 1.0;

/// Weight of the walled term (opposing pieces pinned on edges/corners).
pub const WALLED_WEIGHT: f64 = 2.0;

/// Weight of the stronghold term (adjacent triplets near the centroid).
pub const STRONGHOLD_WEIGHT: f64 = 8.0;

/// Weight of the average-connections term.
pub const CONNECTIONS_WEIGHT: f64 = 2.5;

/// Weight of the bounding-box distribution term (currently disabled).
pub const DISTRIBUTION_WEIGHT: f64 = 0.0;

/// Weight of the reconnection-potential term (currently disabled).
pub const POTENTIAL_WEIGHT: f64 = 0.0;

/// Penalty added per blocked line in the potential term.
pub const BLOCKED_LINE_PENALTY: f64 = 5.0;

/// The four central squares, as `(col, row)`; interior scoring and the
/// center-of-mass term measure distance to the nearest of these.
pub const CENTER_SQUARES: [(u8, u8); 4] = [(3, 3), (4, 4), (4, 3), (3, 4)];

// =============================================================================
// Search Parameters
// =============================================================================

/// A magnitude greater than any normal position value.
pub const INFTY: i32 = i32::MAX;

/// A score magnitude indicating a forced win (for White if positive,
/// Black if negative). Kept below `INFTY` so decisive results remain
/// distinguishable from large heuristic scores.
pub const WINNING_VALUE: i32 = i32::MAX - 20;

/// Starting depth for the adaptive mid-game regime.
pub const BASE_DEPTH: u32 = 4;

/// Cap on the adaptive depth.
pub const MAX_SEARCH_DEPTH: u32 = 8;

/// Moves made below which a random opening move is played instead of
/// searching.
pub const OPENING_MOVES: usize = 2;

/// Moves made below which a fixed shallow search is used.
pub const EARLY_GAME_MOVES: usize = 15;

/// Search depth during the early game.
pub const EARLY_GAME_DEPTH: u32 = 3;

/// Plies remaining under which the search deepens to settle the game
/// before the forced draw.
pub const ENDGAME_WINDOW: usize = 10;

/// Minimum depth inside the endgame window.
pub const ENDGAME_MIN_DEPTH: u32 = 5;

/// Moves made from which the adaptive depth bump applies.
pub const MIDGAME_MOVES: usize = 30;

/// Branching factor at or below which a position is cheap enough to
/// search one ply deeper.
pub const LOW_BRANCHING: usize = 20;
