//! Turn controller
//!
//! [`Game`] owns the live board and the selection state machine driving a
//! human turn: the first click selects a piece of the side to move, the
//! second click either moves it or restarts the selection with the new
//! cell. Every failure is a recoverable `false`; no input can corrupt the
//! board.

use crate::board::{Board, Color, Piece, Pos};
use crate::rules;

/// Game state machine over {no selection, piece selected}.
pub struct Game {
    board: Board,
    turn: Color,
    selected: Option<Pos>,
    valid_moves: Vec<Pos>,
}

impl Game {
    /// Fresh game: starting layout, Black to move, nothing selected.
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            turn: Color::Black,
            selected: None,
            valid_moves: Vec::new(),
        }
    }

    /// Reset to the starting position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Currently selected piece, if any.
    pub fn selected(&self) -> Option<Piece> {
        self.selected.and_then(|pos| self.board.get(pos))
    }

    /// Legal destinations cached for the current selection.
    #[inline]
    pub fn valid_moves(&self) -> &[Pos] {
        &self.valid_moves
    }

    /// Handle a click on `pos`.
    ///
    /// With no selection, a click on a piece of the side to move selects
    /// it and caches its legal moves. With a piece selected, a click on a
    /// cached destination moves it and flips the turn; any other click
    /// drops the selection and is retried once as a fresh selection (an
    /// explicit loop, so a pathological click can never recurse).
    pub fn select(&mut self, pos: Pos) -> bool {
        loop {
            match self.selected {
                Some(from) => {
                    if self.try_move(from, pos) {
                        return true;
                    }
                    // Failed move: drop the selection and re-run the same
                    // input as a selection attempt.
                    self.selected = None;
                    self.valid_moves.clear();
                }
                None => {
                    match self.board.get(pos) {
                        Some(piece) if piece.color == self.turn => {
                            self.selected = Some(pos);
                            self.valid_moves = rules::valid_moves(&self.board, piece);
                            return true;
                        }
                        _ => return false,
                    }
                }
            }
        }
    }

    /// Apply the move if `to` is an empty cell in the cached legal-move
    /// set; flips the turn on success.
    fn try_move(&mut self, from: Pos, to: Pos) -> bool {
        if self.board.is_empty(to) && self.valid_moves.contains(&to) {
            self.board.apply_move(from, to);
            self.change_turn();
            true
        } else {
            false
        }
    }

    /// Commit a board computed by the search as the AI's move, then flip
    /// the turn.
    pub fn commit_board(&mut self, board: Board) {
        self.board = board;
        self.change_turn();
    }

    /// Swap the side to move, dropping any selection and cached moves.
    pub fn change_turn(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
        self.turn = self.turn.opponent();
    }

    /// Winner, if the game is over.
    pub fn winner(&self) -> Option<Color> {
        rules::winner(&self.board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_own_piece() {
        let mut game = Game::new();
        assert!(game.select(Pos::new(3, 0)));
        assert_eq!(game.selected().unwrap().pos, Pos::new(3, 0));
        assert!(!game.valid_moves().is_empty());
    }

    #[test]
    fn test_select_opponent_piece_fails() {
        let mut game = Game::new();
        assert!(!game.select(Pos::new(7, 7)));
        assert!(game.selected().is_none());
    }

    #[test]
    fn test_select_empty_cell_fails() {
        let mut game = Game::new();
        assert!(!game.select(Pos::new(4, 4)));
        assert!(game.selected().is_none());
    }

    #[test]
    fn test_move_flips_turn() {
        let mut game = Game::new();
        assert!(game.select(Pos::new(3, 0)));
        assert!(game.select(Pos::new(4, 1)));

        assert_eq!(game.turn(), Color::White);
        assert!(game.selected().is_none());
        assert!(game.valid_moves().is_empty());
        assert_eq!(game.board().get(Pos::new(4, 1)).unwrap().color, Color::Black);
        assert!(game.board().is_empty(Pos::new(3, 0)));
    }

    #[test]
    fn test_failed_move_retries_as_selection() {
        let mut game = Game::new();
        assert!(game.select(Pos::new(3, 0)));
        // (2,1) holds another black piece: not a legal destination, so the
        // click reselects that piece instead.
        assert!(game.select(Pos::new(2, 1)));
        assert_eq!(game.selected().unwrap().pos, Pos::new(2, 1));
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn test_failed_move_onto_empty_cell_clears_selection() {
        let mut game = Game::new();
        assert!(game.select(Pos::new(3, 0)));
        // A far-away empty cell is neither a legal move nor a piece.
        assert!(!game.select(Pos::new(6, 2)));
        assert!(game.selected().is_none());
    }

    #[test]
    fn test_change_turn_clears_selection() {
        let mut game = Game::new();
        game.select(Pos::new(3, 0));
        game.change_turn();
        assert!(game.selected().is_none());
        assert!(game.valid_moves().is_empty());
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new();
        game.select(Pos::new(3, 0));
        game.select(Pos::new(4, 1));
        game.reset();
        assert_eq!(game.turn(), Color::Black);
        assert!(game.selected().is_none());
        assert_eq!(game.board(), &Board::initial());
    }

    #[test]
    fn test_no_winner_at_start() {
        assert_eq!(Game::new().winner(), None);
    }
}
