//! Move generation: single steps and multi-jump chains

use std::collections::HashSet;

use crate::board::{Board, Piece, Pos};

/// The 8 king-move directions
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

/// Bounds check for a candidate square. No square is reserved by color;
/// any empty in-bounds cell is a legal destination for either side.
#[inline]
pub fn is_valid_square(row: i32, col: i32) -> bool {
    Pos::is_valid(row, col)
}

/// All destinations reachable by `piece` in one turn.
///
/// A destination is either a single step into an adjacent empty cell, or
/// the landing cell of a jump chain: leap over an adjacent occupied cell
/// (either color) into the empty cell directly beyond, then keep jumping
/// from each landing cell. One visited set covers the whole chain, so a
/// chain never revisits a cell in any direction.
///
/// The result is not de-duplicated: a multi-jump may land on a cell that
/// is also a single-step destination. Callers treat the list as a set.
pub fn valid_moves(board: &Board, piece: Piece) -> Vec<Pos> {
    let mut moves = Vec::new();
    let mut visited = HashSet::new();
    visited.insert(piece.pos);

    for (dr, dc) in DIRECTIONS {
        if let Some(step) = piece.pos.offset(dr, dc) {
            if board.is_empty(step) {
                moves.push(step);
            }
        }
    }

    jump_moves(board, piece.pos, &mut visited, &mut moves);
    moves
}

/// Recursively collect jump landings from `from`, extending the chain in
/// all 8 directions. `visited` is threaded through the entire chain.
fn jump_moves(board: &Board, from: Pos, visited: &mut HashSet<Pos>, moves: &mut Vec<Pos>) {
    for (dr, dc) in DIRECTIONS {
        let over = match from.offset(dr, dc) {
            Some(pos) => pos,
            None => continue,
        };
        let landing = match from.offset(2 * dr, 2 * dc) {
            Some(pos) => pos,
            None => continue,
        };

        if board.get(over).is_some() && board.is_empty(landing) && !visited.contains(&landing) {
            visited.insert(landing);
            moves.push(landing);
            jump_moves(board, landing, visited, moves);
        }
    }
}
