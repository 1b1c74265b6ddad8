//! The immutable move value and its text notation.
//!
//! A move is a `(from, to)` pair plus a derived capture annotation. Two
//! moves are equal when their endpoints are equal; the capture flag never
//! participates in identity, it is stamped on by the board when the move
//! is applied to an occupied destination.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::square::{Square, parse_square};

/// A move from one square to another.
#[derive(Copy, Clone, Debug)]
pub struct Move {
    from: Square,
    to: Square,
    capture: bool,
}

impl Move {
    /// A non-capturing move between two squares.
    pub fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            capture: false,
        }
    }

    pub fn from(self) -> Square {
        self.from
    }

    pub fn to(self) -> Square {
        self.to
    }

    /// True iff this is the capturing variant.
    pub fn is_capture(self) -> bool {
        self.capture
    }

    /// The capturing variant of this move.
    pub fn capture_move(self) -> Move {
        Move {
            capture: true,
            ..self
        }
    }
}

// Identity is (from, to); the capture flag is a derived annotation.
impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.capture { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// Parse a move designator such as `c3-c5` or `c1xa3`.
/// Returns `None` on bad input.
pub fn parse_move(s: &str) -> Option<Move> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 {
        return None;
    }
    let from = parse_square(&s[0..2])?;
    let to = parse_square(&s[3..5])?;
    let mv = Move::new(from, to);
    match bytes[2] {
        b'-' => Some(mv),
        b'x' => Some(mv.capture_move()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::sq;

    #[test]
    fn test_parse_and_display() {
        let mv = parse_move("c3-c5").unwrap();
        assert_eq!(mv.from(), sq(2, 2));
        assert_eq!(mv.to(), sq(2, 4));
        assert!(!mv.is_capture());
        assert_eq!(mv.to_string(), "c3-c5");

        let cap = parse_move("c1xa3").unwrap();
        assert!(cap.is_capture());
        assert_eq!(cap.to_string(), "c1xa3");

        assert_eq!(parse_move("c3c5"), None);
        assert_eq!(parse_move("c3-c9"), None);
        assert_eq!(parse_move("c3-"), None);
    }

    #[test]
    fn test_identity_ignores_capture_flag() {
        let mv = Move::new(sq(2, 0), sq(0, 2));
        assert_eq!(mv, mv.capture_move());
        assert!(mv.capture_move().is_capture());
        assert!(!mv.is_capture());
    }

    #[test]
    fn test_inequality() {
        assert_ne!(Move::new(sq(0, 0), sq(1, 1)), Move::new(sq(0, 0), sq(2, 2)));
        assert_ne!(Move::new(sq(0, 0), sq(1, 1)), Move::new(sq(1, 0), sq(1, 1)));
    }
}
