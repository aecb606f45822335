//! Heuristic position evaluation
//!
//! Positive scores favor White (racing toward the top-left camp),
//! negative scores favor Black. Three weighted terms, each oriented so
//! that a larger value is better for White:
//!
//! - progress: total Manhattan distance each side still has to cover to
//!   its goal corner, normalized by the board diagonal;
//! - camp occupancy: pieces already standing inside the opposing camp;
//! - home penalty: pieces still sitting in their own camp.

use crate::board::{Board, Color};

/// Weight of the distance-to-goal term
const DISTANCE_WEIGHT: f64 = 4.0;

/// Normalizer for the distance term (board diagonal span, 2 * 8)
const DISTANCE_SCALE: f64 = 16.0;

/// Weight of the opposing-camp occupancy term
const CAMP_WEIGHT: f64 = 2.0;

/// Divisor for the own-camp laggard penalty
const HOME_PENALTY_SCALE: f64 = 4.0;

/// Static evaluation of a position.
pub fn evaluate(board: &Board) -> f64 {
    let dist_black = total_distance(board, Color::Black);
    let dist_white = total_distance(board, Color::White);
    let camp_black = camp_occupancy(board, Color::Black);
    let camp_white = camp_occupancy(board, Color::White);
    let home_black = home_count(board, Color::Black);
    let home_white = home_count(board, Color::White);

    DISTANCE_WEIGHT * (dist_black - dist_white) / DISTANCE_SCALE
        + CAMP_WEIGHT * (camp_white - camp_black)
        - (home_white - home_black) / HOME_PENALTY_SCALE
}

/// Sum of Manhattan distances from each of `color`'s pieces to its goal
/// corner (the corner cell of the opposing camp).
fn total_distance(board: &Board, color: Color) -> f64 {
    let goal = color.goal_corner();
    board
        .pieces(color)
        .iter()
        .map(|p| p.pos.manhattan(goal) as f64)
        .sum()
}

/// Number of `color`'s pieces already inside the opposing camp.
fn camp_occupancy(board: &Board, color: Color) -> f64 {
    board
        .pieces(color)
        .iter()
        .filter(|p| p.pos.in_zone(color.opponent()))
        .count() as f64
}

/// Number of `color`'s pieces still inside their own camp.
fn home_count(board: &Board, color: Color) -> f64 {
    board
        .pieces(color)
        .iter()
        .filter(|p| p.pos.in_zone(color))
        .count() as f64
}
