//! Board structure with the piece grid

use super::piece::Piece;
use super::{Color, Pos, BOARD_SIZE, BLACK_ZONE, WHITE_ZONE};
use crate::error::HalmaError;

/// Game board: an 8x8 grid where each cell is empty or holds one piece.
///
/// The board is a plain value: `Clone` makes a deep, independent copy,
/// which is what the search relies on to explore hypothetical positions
/// without touching the live game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Empty board, no pieces placed.
    pub fn empty() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Starting position: ten black pieces in the top-left camp, ten
    /// white pieces in the bottom-right camp.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for &(row, col) in &BLACK_ZONE {
            board.place(Piece::new(Pos::new(row, col), Color::Black));
        }
        for &(row, col) in &WHITE_ZONE {
            board.place(Piece::new(Pos::new(row, col), Color::White));
        }
        board
    }

    /// Put a piece on its own cell. Used for setup and tests.
    pub fn place(&mut self, piece: Piece) {
        self.grid[piece.pos.row as usize][piece.pos.col as usize] = Some(piece);
    }

    /// Get the occupant of a cell, `None` if empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Piece> {
        self.grid[pos.row as usize][pos.col as usize]
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Boundary accessor for untrusted coordinates. Rejects out-of-range
    /// indices instead of clamping them.
    pub fn get_checked(&self, row: i32, col: i32) -> Result<Option<Piece>, HalmaError> {
        if !Pos::is_valid(row, col) {
            return Err(HalmaError::OutOfRange { row, col });
        }
        Ok(self.get(Pos::new(row as u8, col as u8)))
    }

    /// All pieces of a color in row-major grid-scan order. Callers must
    /// not depend on any other order.
    pub fn pieces(&self, color: Color) -> Vec<Piece> {
        let mut pieces = Vec::with_capacity(super::PIECES_PER_SIDE);
        for row in &self.grid {
            for cell in row {
                if let Some(piece) = cell {
                    if piece.color == color {
                        pieces.push(*piece);
                    }
                }
            }
        }
        pieces
    }

    /// Total pieces on board
    pub fn piece_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Relocate the piece at `from` to `to`, rewriting its stored
    /// coordinates to match the new slot.
    ///
    /// Precondition: `from` is occupied and `to` is empty. Legality is
    /// owned by the caller (controller or search), which only ever passes
    /// destinations produced by [`crate::rules::valid_moves`]; the board
    /// does not re-check it.
    pub fn apply_move(&mut self, from: Pos, to: Pos) {
        debug_assert!(self.get(from).is_some(), "apply_move from empty cell");
        debug_assert!(self.is_empty(to), "apply_move onto occupied cell");

        let mut piece = self.grid[from.row as usize][from.col as usize].take();
        if let Some(piece) = &mut piece {
            piece.move_to(to);
        }
        self.grid[to.row as usize][to.col as usize] = piece;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
