//! Square addressing and board geometry.
//!
//! Squares are immutable `(col, row)` values on the 8x8 grid, ordered by
//! their flat index (`row * 8 + col`). All geometry here is stateless:
//! directions, Chebyshev distance, straight-line tests, and adjacency.

use std::fmt;

use crate::constants::{BOARD_SIZE, DIR};

/// A board square. Column `a`..`h` maps to 0..8, rank `1`..`8` to 0..8.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

/// Shorthand constructor used throughout the crate and in tests.
///
/// # Panics
/// Panics if either coordinate is out of range.
pub fn sq(col: u8, row: u8) -> Square {
    assert!(
        (col as usize) < BOARD_SIZE && (row as usize) < BOARD_SIZE,
        "square ({col}, {row}) out of range"
    );
    Square { row, col }
}

impl Square {
    /// Checked constructor.
    pub fn new(col: u8, row: u8) -> Option<Square> {
        if (col as usize) < BOARD_SIZE && (row as usize) < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// The square with the given flat index.
    pub fn from_index(index: u8) -> Square {
        Square {
            row: index / BOARD_SIZE as u8,
            col: index % BOARD_SIZE as u8,
        }
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES_U8).map(Square::from_index)
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn row(self) -> u8 {
        self.row
    }

    /// Flat index into the board array.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// True iff the square lies on the outer ring.
    pub fn is_edge(self) -> bool {
        self.col == 0
            || self.row == 0
            || self.col as usize == BOARD_SIZE - 1
            || self.row as usize == BOARD_SIZE - 1
    }

    /// True iff the square is one of the four corners.
    pub fn is_corner(self) -> bool {
        (self.col == 0 || self.col as usize == BOARD_SIZE - 1)
            && (self.row == 0 || self.row as usize == BOARD_SIZE - 1)
    }

    /// True iff `to` is a distinct square on the same row, column, or
    /// diagonal as `self` (a straight-line displacement of length >= 1).
    pub fn is_valid_move(self, to: Square) -> bool {
        let dc = to.col as i32 - self.col as i32;
        let dr = to.row as i32 - self.row as i32;
        (dc != 0 || dr != 0) && (dc == 0 || dr == 0 || dc.abs() == dr.abs())
    }

    /// Chebyshev distance: the number of king steps between two squares.
    pub fn distance(self, to: Square) -> usize {
        let dc = (to.col as i32 - self.col as i32).unsigned_abs() as usize;
        let dr = (to.row as i32 - self.row as i32).unsigned_abs() as usize;
        dc.max(dr)
    }

    /// Direction index (into [`DIR`]) from `self` toward `to`.
    /// Requires that the two squares share a line.
    pub fn direction(self, to: Square) -> usize {
        let dc = (to.col as i32 - self.col as i32).signum() as i8;
        let dr = (to.row as i32 - self.row as i32).signum() as i8;
        DIR.iter()
            .position(|&d| d == (dc, dr))
            .expect("direction requires two distinct squares on a line")
    }

    /// The square `steps` king moves away in direction `dir` (0..8), or
    /// `None` if that leaves the board.
    pub fn move_dest(self, dir: usize, steps: usize) -> Option<Square> {
        let (dc, dr) = DIR[dir];
        let col = self.col as i32 + dc as i32 * steps as i32;
        let row = self.row as i32 + dr as i32 * steps as i32;
        if (0..BOARD_SIZE as i32).contains(&col) && (0..BOARD_SIZE as i32).contains(&row) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All in-bounds squares 8-directionally adjacent to `self`.
    pub fn adjacent(self) -> impl Iterator<Item = Square> {
        (0..DIR.len()).filter_map(move |d| self.move_dest(d, 1))
    }
}

const NUM_SQUARES_U8: u8 = (BOARD_SIZE * BOARD_SIZE) as u8;

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

/// Parse a square designator such as `c3`. Returns `None` on bad input.
pub fn parse_square(s: &str) -> Option<Square> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let col = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
    let row = bytes[1].wrapping_sub(b'1');
    Square::new(col, row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for s in Square::all() {
            assert_eq!(Square::from_index(s.index() as u8), s);
        }
        assert_eq!(sq(0, 0).index(), 0);
        assert_eq!(sq(7, 7).index(), 63);
        assert_eq!(sq(3, 2).index(), 19);
    }

    #[test]
    fn test_display_parse_roundtrip() {
        for s in Square::all() {
            assert_eq!(parse_square(&s.to_string()), Some(s));
        }
        assert_eq!(sq(2, 2).to_string(), "c3");
        assert_eq!(parse_square("a1"), Some(sq(0, 0)));
        assert_eq!(parse_square("h8"), Some(sq(7, 7)));
        assert_eq!(parse_square("i1"), None);
        assert_eq!(parse_square("a9"), None);
        assert_eq!(parse_square("a"), None);
    }

    #[test]
    fn test_distance_is_chebyshev() {
        assert_eq!(sq(0, 0).distance(sq(0, 0)), 0);
        assert_eq!(sq(0, 0).distance(sq(3, 1)), 3);
        assert_eq!(sq(2, 5).distance(sq(2, 1)), 4);
        assert_eq!(sq(1, 1).distance(sq(4, 4)), 3);
    }

    #[test]
    fn test_valid_move_lines_only() {
        let c3 = sq(2, 2);
        assert!(c3.is_valid_move(sq(2, 7))); // column
        assert!(c3.is_valid_move(sq(0, 2))); // row
        assert!(c3.is_valid_move(sq(5, 5))); // diagonal
        assert!(c3.is_valid_move(sq(0, 0))); // diagonal, other way
        assert!(!c3.is_valid_move(c3)); // same square
        assert!(!c3.is_valid_move(sq(4, 3))); // knight-ish
    }

    #[test]
    fn test_direction_and_move_dest_agree() {
        let from = sq(3, 3);
        for to in Square::all() {
            if from.is_valid_move(to) {
                let d = from.direction(to);
                assert_eq!(from.move_dest(d, from.distance(to)), Some(to));
            }
        }
    }

    #[test]
    fn test_opposite_direction() {
        let from = sq(3, 3);
        let to = sq(6, 6);
        let d = from.direction(to);
        assert_eq!(to.direction(from), (d + 4) % 8);
    }

    #[test]
    fn test_move_dest_off_board() {
        assert_eq!(sq(0, 0).move_dest(6, 1), None); // W from a1
        assert_eq!(sq(0, 0).move_dest(4, 1), None); // S from a1
        assert_eq!(sq(7, 7).move_dest(0, 1), None); // N from h8
        assert_eq!(sq(1, 0).move_dest(0, 2), Some(sq(1, 2)));
    }

    #[test]
    fn test_adjacency_counts() {
        assert_eq!(sq(3, 3).adjacent().count(), 8);
        assert_eq!(sq(0, 3).adjacent().count(), 5);
        assert_eq!(sq(0, 0).adjacent().count(), 3);
        assert_eq!(sq(7, 7).adjacent().count(), 3);
    }

    #[test]
    fn test_edges_and_corners() {
        assert!(sq(0, 0).is_corner() && sq(0, 0).is_edge());
        assert!(sq(7, 0).is_corner());
        assert!(sq(0, 4).is_edge() && !sq(0, 4).is_corner());
        assert!(!sq(3, 3).is_edge());
    }

    #[test]
    fn test_ordering_is_index_order() {
        assert!(sq(7, 0) < sq(0, 1));
        assert!(sq(2, 3) < sq(3, 3));
    }
}
