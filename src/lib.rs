//! Loa-Rust: A Lines of Action engine.
//!
//! Lines of Action is played on an 8x8 board; a piece moves along a row,
//! column, or diagonal exactly as many squares as there are pieces on
//! that whole line, and the first player to connect all of their pieces
//! into one group wins. The engine couples a region-based positional
//! heuristic with an iterative-deepening alpha-beta search.
//!
//! ## Modules
//!
//! - [`square`] - Square addressing and board geometry
//! - [`moves`] - The move value and its text notation
//! - [`board`] - Board state, legality, regions, and the win condition
//! - [`eval`] - The positional heuristic and its terms
//! - [`search`] - Alpha-beta search with phase-dependent depth
//! - [`game`] - Line-oriented command loop
//! - [`constants`] - Geometry, weights, and search parameters
//!
//! ## Example
//!
//! ```
//! use loa_rust::board::Board;
//! use loa_rust::search::SearchEngine;
//!
//! let mut board = Board::new();
//! let mut engine = SearchEngine::with_seed(42);
//! let mv = engine.search_for_move(&board).expect("opening position");
//! board.make_move(mv);
//! assert_eq!(board.moves_made(), 1);
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod moves;
pub mod search;
pub mod square;
