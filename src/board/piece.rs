//! Game pieces

use super::{Color, Pos};

/// A single piece on the board.
///
/// Pieces are created once in the starting camps and are never removed:
/// jumps leap over other pieces without capturing them. A piece's stored
/// position always matches the grid slot holding it; [`Board::apply_move`]
/// keeps the two in sync.
///
/// [`Board::apply_move`]: super::Board::apply_move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub pos: Pos,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub fn new(pos: Pos, color: Color) -> Self {
        Self { pos, color }
    }

    /// Rewrite the stored coordinates. Only the board should call this,
    /// as part of relocating the piece's grid slot.
    #[inline]
    pub(crate) fn move_to(&mut self, pos: Pos) {
        self.pos = pos;
    }
}
