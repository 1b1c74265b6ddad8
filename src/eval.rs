//! Static position evaluation.
//!
//! The heuristic scores a position from White's perspective as a weighted
//! sum of terms computed over each side's connectivity regions:
//! - concentration: inverse surplus spread of the pieces around their
//!   center of mass
//! - board position: per-square placement score (center good, edge bad,
//!   corner worse)
//! - centroid position: how central the center of mass itself sits
//! - stronghold: adjacent triplets of pieces near the center of mass
//! - connections: average number of adjacent friendly pairs per piece
//! - distribution and potential: bounding-box spread and reconnection
//!   distance, carried at weight zero
//!
//! The region-derived portion of each side's score depends only on that
//! side's region list, so [`Evaluator`] memoizes it per side under a hash
//! of the regions. Mobility and walled terms read the whole grid and are
//! recomputed every call.

use std::collections::BTreeSet;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::board::{Board, Piece};
use crate::constants::{
    BLOCKED_LINE_PENALTY, BOARD_POSITION_WEIGHT, CENTER_MASS_WEIGHT, CENTER_SQUARES,
    CONCENTRATION_WEIGHT, CONNECTIONS_WEIGHT, DISTRIBUTION_WEIGHT, MOBILITY_WEIGHT, NUM_SQUARES,
    POTENTIAL_WEIGHT, STRONGHOLD_WEIGHT, TURN_WEIGHT, WALLED_WEIGHT,
};
use crate::square::{Square, sq};

/// Position evaluator with per-side memoization of the region-derived
/// partial score. One slot per side: a hit returns the cached value, a
/// miss recomputes and replaces the slot.
#[derive(Debug, Default)]
pub struct Evaluator {
    white_partial: Option<(u64, f64)>,
    black_partial: Option<(u64, f64)>,
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator::default()
    }

    /// Heuristic value of the position, positive when White is ahead.
    /// Adds the side-to-move bonus, both sides' memoized partial scores,
    /// and the mobility and walled differentials.
    pub fn heuristic_value(&mut self, board: &mut Board) -> i32 {
        let mut value = if board.turn() == Piece::White {
            TURN_WEIGHT
        } else {
            -TURN_WEIGHT
        };
        value += self.partial(board, Piece::White);
        value -= self.partial(board, Piece::Black);
        value += MOBILITY_WEIGHT * (mobility(board, Piece::White) - mobility(board, Piece::Black));
        // Opposing pieces pinned against the wall are a plus, so the
        // differential is reversed relative to the other terms.
        let white_regions = board.regions(Piece::White).to_vec();
        let black_regions = board.regions(Piece::Black).to_vec();
        value += WALLED_WEIGHT
            * (walled(board, &black_regions) - walled(board, &white_regions)) as f64;
        value as i32
    }

    /// The region-derived portion of one side's score.
    fn partial(&mut self, board: &mut Board, side: Piece) -> f64 {
        let regions = board.regions(side).to_vec();
        let key = region_key(&regions);
        let slot = match side {
            Piece::White => &mut self.white_partial,
            _ => &mut self.black_partial,
        };
        if let Some((cached_key, cached)) = *slot {
            if cached_key == key {
                return cached;
            }
        }
        let pieces = board.piece_count(side);
        let Some(com) = board.center_of_mass(side) else {
            return 0.0;
        };
        let mut score = CONCENTRATION_WEIGHT * concentration(&regions, com, pieces);
        score += BOARD_POSITION_WEIGHT * board_position(&regions, pieces);
        score += CENTER_MASS_WEIGHT * centroid_position(com) as f64;
        score += STRONGHOLD_WEIGHT * stronghold(&regions, com) as f64;
        score += CONNECTIONS_WEIGHT * connections(&regions, pieces);
        score += DISTRIBUTION_WEIGHT * distribution(&regions) as f64;
        if regions.len() > 1 {
            score += POTENTIAL_WEIGHT * potential(board, &regions);
        }
        let slot = match side {
            Piece::White => &mut self.white_partial,
            _ => &mut self.black_partial,
        };
        *slot = Some((key, score));
        score
    }
}

fn region_key(regions: &[Vec<Square>]) -> u64 {
    let mut hasher = DefaultHasher::new();
    regions.hash(&mut hasher);
    hasher.finish()
}

/// Inverse surplus spread around the center of mass: the total Chebyshev
/// distance of all pieces to `com`, minus the minimum achievable for this
/// many pieces (one at the centroid, eight in the first ring, the rest in
/// the second). Returns 0 for a perfectly packed side, else the
/// reciprocal of the surplus.
pub fn concentration(regions: &[Vec<Square>], com: Square, pieces: usize) -> f64 {
    let mut spread = 0.0;
    for region in regions {
        for square in region {
            spread += square.distance(com) as f64;
        }
    }
    let outer = pieces.saturating_sub(9);
    spread -= (pieces - 1 + outer) as f64;
    if spread == 0.0 { 0.0 } else { 1.0 / spread }
}

/// Bounding-box score: 64 minus the area of the smallest axis-aligned
/// rectangle covering every piece.
pub fn distribution(regions: &[Vec<Square>]) -> i32 {
    let mut max_col = 0;
    let mut max_row = 0;
    let mut min_col = 8;
    let mut min_row = 8;
    for region in regions {
        for square in region {
            max_col = max_col.max(square.col() as i32);
            max_row = max_row.max(square.row() as i32);
            min_col = min_col.min(square.col() as i32);
            min_row = min_row.min(square.row() as i32);
        }
    }
    64 - (max_row - min_row + 1) * (max_col - min_col + 1)
}

fn center_distance(square: Square) -> usize {
    CENTER_SQUARES
        .iter()
        .map(|&(col, row)| square.distance(sq(col, row)))
        .min()
        .expect("center square table is non-empty")
}

/// Average per-piece placement score, scaled by 10: interior pieces earn
/// 5/3/1 by distance from the four central squares, edge pieces -2, with
/// a further -6 for corners.
pub fn board_position(regions: &[Vec<Square>], pieces: usize) -> f64 {
    let mut score = 0.0;
    for region in regions {
        for square in region {
            if square.is_edge() {
                score += -2.0;
                if square.is_corner() {
                    score += -6.0;
                }
            } else {
                score += match center_distance(*square) {
                    0 => 5.0,
                    1 => 3.0,
                    _ => 1.0,
                };
            }
        }
    }
    score * 10.0 / pieces as f64
}

/// Placement score of the center of mass itself: 10 when pushed to the
/// edge, otherwise its distance from the central squares.
pub fn centroid_position(com: Square) -> i32 {
    if com.is_edge() {
        10
    } else {
        center_distance(com) as i32
    }
}

/// Weighted move count for one side. Captures count double; moves onto
/// the edge count half, and half again when they also start on the edge.
pub fn mobility(board: &Board, side: Piece) -> f64 {
    let mut total = 0.0;
    for mv in board.legal_moves(side) {
        let mut value = 1.0;
        if board.get(mv.to()) == side.opposite() {
            value *= 2.0;
        }
        if mv.to().is_edge() {
            value *= 0.5;
            if mv.from().is_edge() {
                value *= 0.5;
            }
        }
        total += value;
    }
    total
}

/// Average adjacency: ordered pairs of touching pieces within each
/// cluster of more than two, a flat 2 for each two-piece cluster, all
/// divided by the piece count.
pub fn connections(regions: &[Vec<Square>], pieces: usize) -> f64 {
    let mut score = 0.0;
    for region in regions {
        if region.len() > 2 {
            for from in region {
                for to in region {
                    if from.distance(*to) == 1 {
                        score += 1.0;
                    }
                }
            }
        } else if region.len() == 2 {
            score += 2.0;
        }
    }
    score / pieces as f64
}

/// Stronghold formations: for each piece of a cluster larger than two
/// sitting within distance 2 of the center of mass, examine the four
/// direction triplets (an orthogonal, the following diagonal, and the
/// next orthogonal around the compass). A fully occupied triplet scores
/// 5, any two of the three score 3. Each scored pair of squares is
/// marked so overlapping formations are not counted twice.
pub fn stronghold(regions: &[Vec<Square>], com: Square) -> i32 {
    let mut score = 0;
    let mut visited = vec![false; NUM_SQUARES * NUM_SQUARES];
    let seen = |v: &[bool], a: Square, b: Square| {
        v[a.index() * NUM_SQUARES + b.index()] || v[b.index() * NUM_SQUARES + a.index()]
    };
    let mark = |v: &mut Vec<bool>, a: Square, b: Square| {
        v[a.index() * NUM_SQUARES + b.index()] = true;
        v[b.index() * NUM_SQUARES + a.index()] = true;
    };
    for region in regions {
        if region.len() <= 2 {
            continue;
        }
        for &square in region {
            if square.distance(com) > 2 {
                continue;
            }
            for i in (0..8).step_by(2) {
                let (Some(s1), Some(s2), Some(s3)) = (
                    square.move_dest(i, 1),
                    square.move_dest(i + 1, 1),
                    square.move_dest((i + 2) % 8, 1),
                ) else {
                    continue;
                };
                if seen(&visited, square, s1)
                    || seen(&visited, square, s2)
                    || seen(&visited, square, s3)
                {
                    continue;
                }
                let held = |s: Square| region.binary_search(&s).is_ok();
                if held(s1) && held(s2) && held(s3) {
                    mark(&mut visited, square, s1);
                    mark(&mut visited, square, s2);
                    mark(&mut visited, square, s3);
                    score += 5;
                } else if held(s1) && held(s2) {
                    mark(&mut visited, square, s1);
                    mark(&mut visited, square, s2);
                    score += 3;
                } else if held(s1) && held(s3) {
                    mark(&mut visited, square, s1);
                    mark(&mut visited, square, s3);
                    score += 3;
                } else if held(s2) && held(s3) {
                    mark(&mut visited, square, s2);
                    mark(&mut visited, square, s3);
                    score += 3;
                }
            }
        }
    }
    score
}

/// Pieces pinned against the wall by opposing neighbors. A cornered
/// piece scores per opposing neighbor (4 diagonal, 1 orthogonal). An
/// edge piece scores only when hemmed in by more than one opposing
/// neighbor, weighting diagonal blockers, interior blockers in front,
/// and blockers along the edge, with a bonus of 6 for a full wall.
pub fn walled(board: &Board, regions: &[Vec<Square>]) -> i32 {
    let mut score = 0;
    for region in regions {
        for &square in region {
            let foe = board.get(square).opposite();
            if square.is_corner() {
                for adj in square.adjacent() {
                    if board.get(adj) == foe {
                        if adj.row() != square.row() && adj.col() != square.col() {
                            score += 4;
                        } else {
                            score += 1;
                        }
                    }
                }
            } else if square.is_edge() {
                let mut front = 0;
                let mut corner = 0;
                let mut along = 0;
                for adj in square.adjacent() {
                    if board.get(adj) == foe {
                        if adj.row() != square.row() && adj.col() != square.col() {
                            corner += 1;
                        } else if !adj.is_edge() {
                            front += 1;
                        } else {
                            along += 1;
                        }
                    }
                }
                if corner + front + along > 1 {
                    score += corner + front;
                    score += if corner + along == 4 { 6 } else { corner + along };
                }
            }
        }
    }
    score
}

/// Reconnection distance from the largest cluster to the others: over
/// every approach square (neighbor of the main cluster not held by its
/// side), the average distance to each smaller cluster, with a penalty
/// for approach lines the board currently blocks. Meaningful only when
/// more than one cluster exists.
pub fn potential(board: &Board, regions: &[Vec<Square>]) -> f64 {
    let mut approach = BTreeSet::new();
    for &from in &regions[0] {
        for adj in from.adjacent() {
            if board.get(adj) != board.get(from) {
                approach.insert(adj);
            }
        }
    }
    let mut total = 0.0;
    for &from in &approach {
        for region in &regions[1..] {
            let mut avg = 0.0;
            for &to in region {
                avg += from.distance(to) as f64;
                if from.is_valid_move(to) && board.blocked(from, to) {
                    avg += BLOCKED_LINE_PENALTY;
                }
            }
            total += avg / (approach.len() * region.len()) as f64;
        }
    }
    total
}
