//! Win detection

use crate::board::{Board, Color};

/// Check if the game has a winner.
///
/// A side wins once every one of its pieces stands inside the opponent's
/// starting camp. If both sides somehow satisfy the condition at the same
/// time, neither wins (mutual exclusion).
pub fn winner(board: &Board) -> Option<Color> {
    let black_done = all_in_target(board, Color::Black);
    let white_done = all_in_target(board, Color::White);

    match (black_done, white_done) {
        (true, false) => Some(Color::Black),
        (false, true) => Some(Color::White),
        _ => None,
    }
}

/// True if every piece of `color` occupies a cell of the opposing camp.
fn all_in_target(board: &Board, color: Color) -> bool {
    let pieces = board.pieces(color);
    !pieces.is_empty() && pieces.iter().all(|p| p.pos.in_zone(color.opponent()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Pos, BLACK_ZONE, WHITE_ZONE};

    fn fill_zone(board: &mut Board, zone: &[(u8, u8)], color: Color) {
        for &(r, c) in zone {
            board.place(Piece::new(Pos::new(r, c), color));
        }
    }

    #[test]
    fn test_initial_position_no_winner() {
        assert_eq!(winner(&Board::initial()), None);
    }

    #[test]
    fn test_black_wins() {
        let mut board = Board::empty();
        fill_zone(&mut board, &WHITE_ZONE, Color::Black);
        fill_zone(&mut board, &BLACK_ZONE, Color::White);
        // Both camps are full but each side occupies the *opposing* camp,
        // so both win conditions hold; move one white piece out first.
        board.apply_move(Pos::new(0, 0), Pos::new(4, 4));
        assert_eq!(winner(&board), Some(Color::Black));
    }

    #[test]
    fn test_white_wins() {
        let mut board = Board::empty();
        fill_zone(&mut board, &BLACK_ZONE, Color::White);
        // Black straggler outside either camp
        board.place(Piece::new(Pos::new(4, 0), Color::Black));
        assert_eq!(winner(&board), Some(Color::White));
    }

    #[test]
    fn test_one_straggler_blocks_the_win() {
        let mut board = Board::empty();
        fill_zone(&mut board, &BLACK_ZONE, Color::White);
        // Pull one white piece out of the camp
        board.apply_move(Pos::new(1, 1), Pos::new(5, 5));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_simultaneous_completion_is_no_winner() {
        let mut board = Board::empty();
        fill_zone(&mut board, &WHITE_ZONE, Color::Black);
        fill_zone(&mut board, &BLACK_ZONE, Color::White);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_empty_board_no_winner() {
        assert_eq!(winner(&Board::empty()), None);
    }
}
