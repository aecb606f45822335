use super::*;

#[test]
fn test_color_opponent() {
    assert_eq!(Color::Black.opponent(), Color::White);
    assert_eq!(Color::White.opponent(), Color::Black);
}

#[test]
fn test_zone_tables() {
    assert_eq!(BLACK_ZONE.len(), PIECES_PER_SIDE);
    assert_eq!(WHITE_ZONE.len(), PIECES_PER_SIDE);
    for &(r, c) in &BLACK_ZONE {
        assert!(r + c <= 3);
    }
    for &(r, c) in &WHITE_ZONE {
        assert!(r + c >= 11);
    }
    assert_eq!(Color::Black.target_zone(), &WHITE_ZONE);
    assert_eq!(Color::White.target_zone(), &BLACK_ZONE);
}

#[test]
fn test_goal_corners() {
    assert_eq!(Color::Black.goal_corner(), Pos::new(7, 7));
    assert_eq!(Color::White.goal_corner(), Pos::new(0, 0));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(3, 3).offset(1, -1), Some(Pos::new(4, 2)));
    assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
    assert_eq!(Pos::new(7, 7).offset(0, 1), None);
}

#[test]
fn test_manhattan() {
    assert_eq!(Pos::new(0, 0).manhattan(Pos::new(7, 7)), 14);
    assert_eq!(Pos::new(3, 5).manhattan(Pos::new(5, 2)), 5);
    assert_eq!(Pos::new(4, 4).manhattan(Pos::new(4, 4)), 0);
}

#[test]
fn test_initial_layout() {
    let board = Board::initial();

    for &(r, c) in &BLACK_ZONE {
        let piece = board.get(Pos::new(r, c)).expect("black camp cell empty");
        assert_eq!(piece.color, Color::Black);
        assert_eq!(piece.pos, Pos::new(r, c));
    }
    for &(r, c) in &WHITE_ZONE {
        let piece = board.get(Pos::new(r, c)).expect("white camp cell empty");
        assert_eq!(piece.color, Color::White);
        assert_eq!(piece.pos, Pos::new(r, c));
    }

    // Everything outside the camps is empty
    assert_eq!(board.piece_count(), 2 * PIECES_PER_SIDE);
    assert!(board.is_empty(Pos::new(4, 4)));
    assert!(board.is_empty(Pos::new(0, 7)));
    assert!(board.is_empty(Pos::new(7, 0)));
}

#[test]
fn test_pieces_row_major_order() {
    let board = Board::initial();
    let black = board.pieces(Color::Black);
    assert_eq!(black.len(), PIECES_PER_SIDE);
    // Row-major scan order matches the zone table layout
    assert_eq!(black[0].pos, Pos::new(0, 0));
    assert_eq!(black[3].pos, Pos::new(0, 3));
    assert_eq!(black[9].pos, Pos::new(3, 0));
}

#[test]
fn test_apply_move_invariant() {
    let mut board = Board::initial();
    let from = Pos::new(3, 0);
    let to = Pos::new(4, 1);
    board.apply_move(from, to);

    let piece = board.get(to).expect("moved piece missing");
    assert_eq!(piece.pos, to);
    assert_eq!(piece.color, Color::Black);
    assert!(board.is_empty(from));
    assert_eq!(board.piece_count(), 2 * PIECES_PER_SIDE);
}

#[test]
fn test_get_checked() {
    let board = Board::initial();
    assert!(board.get_checked(0, 0).unwrap().is_some());
    assert!(board.get_checked(4, 4).unwrap().is_none());
    assert!(board.get_checked(-1, 0).is_err());
    assert!(board.get_checked(0, 8).is_err());
}

#[test]
fn test_clone_is_independent() {
    let board = Board::initial();
    let mut copy = board.clone();
    copy.apply_move(Pos::new(3, 0), Pos::new(4, 0));

    assert!(board.get(Pos::new(3, 0)).is_some());
    assert!(board.is_empty(Pos::new(4, 0)));
    assert!(copy.is_empty(Pos::new(3, 0)));
}
