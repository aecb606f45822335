//! Board representation for Halma

pub mod board;
pub mod piece;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use piece::Piece;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;

/// Pieces per side in the starting camps
pub const PIECES_PER_SIDE: usize = 10;

/// Black's starting camp: the triangular corner at the top-left,
/// all cells with `row + col <= 3`. Ten cells.
pub const BLACK_ZONE: [(u8, u8); PIECES_PER_SIDE] = [
    (0, 0), (0, 1), (0, 2), (0, 3),
    (1, 0), (1, 1), (1, 2),
    (2, 0), (2, 1),
    (3, 0),
];

/// White's starting camp: the mirrored triangle at the bottom-right,
/// all cells with `row + col >= 11`. Ten cells.
pub const WHITE_ZONE: [(u8, u8); PIECES_PER_SIDE] = [
    (4, 7),
    (5, 6), (5, 7),
    (6, 5), (6, 6), (6, 7),
    (7, 4), (7, 5), (7, 6), (7, 7),
];

/// Piece colors. Black moves first and races toward the bottom-right
/// corner; White races toward the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The camp this color starts in.
    #[inline]
    pub fn home_zone(self) -> &'static [(u8, u8); PIECES_PER_SIDE] {
        match self {
            Color::Black => &BLACK_ZONE,
            Color::White => &WHITE_ZONE,
        }
    }

    /// The opponent's camp, which all of this color's pieces must reach
    /// to win.
    #[inline]
    pub fn target_zone(self) -> &'static [(u8, u8); PIECES_PER_SIDE] {
        self.opponent().home_zone()
    }

    /// Corner cell of the target camp, used by the distance heuristic.
    #[inline]
    pub fn goal_corner(self) -> Pos {
        match self {
            Color::Black => Pos::new(7, 7),
            Color::White => Pos::new(0, 0),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Offset by a direction, `None` if the result leaves the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Manhattan distance to another position.
    #[inline]
    pub fn manhattan(self, other: Pos) -> u32 {
        self.row.abs_diff(other.row) as u32 + self.col.abs_diff(other.col) as u32
    }

    /// True if this cell belongs to `color`'s starting camp.
    pub fn in_zone(self, color: Color) -> bool {
        color
            .home_zone()
            .iter()
            .any(|&(r, c)| r == self.row && c == self.col)
    }
}
