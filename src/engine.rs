//! AI engine facade
//!
//! Wraps the minimax searcher behind a small interface the GUI consumes
//! once per AI turn, attaching timing and node statistics to the result.

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Color};
use crate::search::Searcher;

/// Default search depth. Branching in Halma is wide (every piece times
/// every step and jump chain), so depth 3 already takes a noticeable
/// moment on a full board.
pub const DEFAULT_DEPTH: u8 = 3;

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Board after the chosen move, `None` when the side had no legal move
    pub board: Option<Board>,
    /// Evaluation score of the chosen line
    pub score: f64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of positions searched
    pub nodes: u64,
}

/// The computer opponent. Plays either side.
#[derive(Debug, Clone)]
pub struct AiEngine {
    depth: u8,
}

impl AiEngine {
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Search for `color`'s best move in `board`.
    ///
    /// Runs to completion synchronously; depth alone bounds the work. The
    /// GUI calls this from a worker thread to keep the frame loop
    /// responsive.
    pub fn get_move(&self, board: &Board, color: Color) -> MoveResult {
        let start = Instant::now();
        let result = Searcher::new().search(board, self.depth, color);
        let time_ms = start.elapsed().as_millis() as u64;

        // An unchanged board means the searcher found nothing to play.
        let chosen = if result.board == *board {
            None
        } else {
            Some(result.board)
        };

        debug!(
            depth = self.depth,
            ?color,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            found = chosen.is_some(),
            "ai move ready"
        );

        MoveResult {
            board: chosen,
            score: result.score,
            time_ms,
            nodes: result.nodes,
        }
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Pos};

    #[test]
    fn test_engine_finds_a_move() {
        let board = Board::initial();
        let result = AiEngine::new(2).get_move(&board, Color::White);

        let next = result.board.expect("engine found no move");
        assert_ne!(next, board);
        assert_eq!(next.piece_count(), board.piece_count());
    }

    #[test]
    fn test_engine_reports_no_move_without_pieces() {
        let mut board = Board::empty();
        board.place(Piece::new(Pos::new(4, 4), Color::Black));

        let result = AiEngine::new(3).get_move(&board, Color::White);
        assert!(result.board.is_none());
        assert!(result.nodes >= 1);
    }

    #[test]
    fn test_engine_plays_black() {
        let board = Board::initial();
        let result = AiEngine::new(2).get_move(&board, Color::Black);

        let next = result.board.expect("engine found no move");
        assert_ne!(next, board);
        // Only a black piece moved
        assert_eq!(next.pieces(Color::White), board.pieces(Color::White));
        assert_ne!(next.pieces(Color::Black), board.pieces(Color::Black));
    }

    #[test]
    fn test_engine_is_deterministic() {
        let board = Board::initial();
        let engine = AiEngine::new(2);
        let first = engine.get_move(&board, Color::White);
        let second = engine.get_move(&board, Color::White);
        assert_eq!(first.board, second.board);
        assert_eq!(first.score, second.score);
    }
}
