//! Minimax search with alpha-beta pruning
//!
//! The searcher explores hypothetical board states to pick a move for
//! one side, assuming the opponent answers optimally under the same
//! evaluation. White maximizes the score and Black minimizes it. Each
//! candidate move is applied to its own cloned board, so sibling
//! branches never share mutable state and the live game board is never
//! touched.
//!
//! Jump chains count as one move: only the final landing cell produces a
//! successor, never the intermediate hops.

use tracing::debug;

use crate::board::{Board, Color};
use crate::eval::evaluate;
use crate::rules;

/// Result of a search: the chosen successor board and its score.
///
/// When the side to move has no legal move at the root, `board` is the
/// unchanged input position and `score` its static evaluation.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Evaluation of the chosen line
    pub score: f64,
    /// Board after the chosen move
    pub board: Board,
    /// Positions visited during the search
    pub nodes: u64,
}

/// Depth-limited minimax searcher.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the best move for `color` from `board`, searching `depth`
    /// plies. White hunts the highest score, Black the lowest.
    pub fn search(&mut self, board: &Board, depth: u8, color: Color) -> SearchResult {
        self.nodes = 0;
        let maximizing = color == Color::White;
        let (score, best) =
            self.minimax(board, depth, f64::NEG_INFINITY, f64::INFINITY, maximizing);
        debug!(depth, score, nodes = self.nodes, ?color, "search complete");
        SearchResult {
            score,
            board: best,
            nodes: self.nodes,
        }
    }

    /// Recursive minimax. `maximizing` means White is to move. Callers
    /// normally go through [`Searcher::search`], which seeds the full
    /// `(-inf, inf)` window.
    ///
    /// Returns the best reachable score and the successor board that
    /// achieves it; at terminal nodes (depth exhausted, game decided, or
    /// no legal move) the input board itself comes back unchanged.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> (f64, Board) {
        self.nodes += 1;

        if depth == 0 || rules::winner(board).is_some() {
            return (evaluate(board), board.clone());
        }

        let color = if maximizing { Color::White } else { Color::Black };
        let successors = successors(board, color);
        if successors.is_empty() {
            // Side to move has no pieces or no legal move
            return (evaluate(board), board.clone());
        }

        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_board = None;

        for successor in successors {
            let (score, _) = self.minimax(&successor, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_board = Some(successor);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_board = Some(successor);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        // successors was non-empty, so a best board exists
        let best_board = best_board.unwrap_or_else(|| board.clone());
        (best_score, best_board)
    }
}

/// Every board reachable by one full move of `color`, in row-major piece
/// order. Each successor is an independent clone of the input board.
fn successors(board: &Board, color: Color) -> Vec<Board> {
    let mut boards = Vec::new();
    for piece in board.pieces(color) {
        for dest in rules::valid_moves(board, piece) {
            let mut next = board.clone();
            next.apply_move(piece.pos, dest);
            boards.push(next);
        }
    }
    boards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Pos};

    /// Reference minimax without pruning, for the equivalence test.
    fn plain_minimax(board: &Board, depth: u8, maximizing: bool) -> f64 {
        if depth == 0 || rules::winner(board).is_some() {
            return evaluate(board);
        }
        let color = if maximizing { Color::White } else { Color::Black };
        let successors = successors(board, color);
        if successors.is_empty() {
            return evaluate(board);
        }

        let scores = successors
            .iter()
            .map(|s| plain_minimax(s, depth - 1, !maximizing));
        if maximizing {
            scores.fold(f64::NEG_INFINITY, f64::max)
        } else {
            scores.fold(f64::INFINITY, f64::min)
        }
    }

    #[test]
    fn test_search_returns_a_successor() {
        let board = Board::initial();
        let result = Searcher::new().search(&board, 2, Color::White);
        assert_ne!(result.board, board);
        // Exactly one white piece moved
        assert_eq!(result.board.pieces(Color::White).len(), 10);
        assert_eq!(result.board.pieces(Color::Black), board.pieces(Color::Black));
    }

    #[test]
    fn test_search_does_not_mutate_input() {
        let board = Board::initial();
        let reference = board.clone();
        Searcher::new().search(&board, 2, Color::White);
        assert_eq!(board, reference);
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = Board::initial();
        let first = Searcher::new().search(&board, 2, Color::White);
        let second = Searcher::new().search(&board, 2, Color::White);
        assert_eq!(first.score, second.score);
        assert_eq!(first.board, second.board);
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn test_no_pieces_returns_unchanged_board() {
        // White has nothing to move: the searcher hands back the position
        // and its static evaluation.
        let mut board = Board::empty();
        board.place(Piece::new(Pos::new(4, 4), Color::Black));

        let result = Searcher::new().search(&board, 3, Color::White);
        assert_eq!(result.board, board);
        assert_eq!(result.score, evaluate(&board));
    }

    #[test]
    fn test_depth_one_picks_greedy_best() {
        let mut board = Board::empty();
        board.place(Piece::new(Pos::new(3, 3), Color::White));
        board.place(Piece::new(Pos::new(7, 0), Color::Black));

        let result = Searcher::new().search(&board, 1, Color::White);
        let best = successors(&board, Color::White)
            .into_iter()
            .map(|s| evaluate(&s))
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.score, best);
        // Greedy best step moves the white piece toward (0,0)
        assert_eq!(
            result.board.pieces(Color::White)[0].pos,
            Pos::new(2, 2)
        );
    }

    #[test]
    fn test_black_search_minimizes() {
        let mut board = Board::empty();
        board.place(Piece::new(Pos::new(4, 4), Color::Black));
        board.place(Piece::new(Pos::new(0, 7), Color::White));

        let result = Searcher::new().search(&board, 1, Color::Black);
        let best = successors(&board, Color::Black)
            .into_iter()
            .map(|s| evaluate(&s))
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.score, best);
        // Greedy best step moves the black piece toward (7,7)
        assert_eq!(result.board.pieces(Color::Black)[0].pos, Pos::new(5, 5));
    }

    #[test]
    fn test_black_no_pieces_returns_unchanged_board() {
        let mut board = Board::empty();
        board.place(Piece::new(Pos::new(4, 4), Color::White));

        let result = Searcher::new().search(&board, 3, Color::Black);
        assert_eq!(result.board, board);
        assert_eq!(result.score, evaluate(&board));
    }

    #[test]
    fn test_alpha_beta_matches_plain_minimax() {
        // Small position, full tree: pruning must not change the value.
        let mut board = Board::empty();
        board.place(Piece::new(Pos::new(2, 2), Color::White));
        board.place(Piece::new(Pos::new(2, 3), Color::White));
        board.place(Piece::new(Pos::new(5, 5), Color::Black));
        board.place(Piece::new(Pos::new(5, 4), Color::Black));

        for depth in 1..=3 {
            let pruned = Searcher::new().search(&board, depth, Color::White);
            let plain = plain_minimax(&board, depth, true);
            assert_eq!(pruned.score, plain, "depth {depth}");
        }
    }

    #[test]
    fn test_terminal_position_searches_one_node() {
        // White already won: search returns the static evaluation without
        // expanding anything.
        let mut board = Board::empty();
        for &(r, c) in Color::White.target_zone() {
            board.place(Piece::new(Pos::new(r, c), Color::White));
        }
        board.place(Piece::new(Pos::new(4, 4), Color::Black));
        assert_eq!(rules::winner(&board), Some(Color::White));

        let result = Searcher::new().search(&board, 4, Color::White);
        assert_eq!(result.nodes, 1);
        assert_eq!(result.board, board);
    }
}
