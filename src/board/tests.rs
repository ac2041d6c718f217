use super::{Board, BoardSizeError, Mark, Pos, DEFAULT_SIZE, WIN_RUN};

#[test]
fn new_rejects_out_of_range_sizes() {
    assert_eq!(Board::new(3).unwrap_err(), BoardSizeError(3));
    assert_eq!(Board::new(33).unwrap_err(), BoardSizeError(33));
    assert!(Board::new(4).is_ok());
    assert!(Board::new(32).is_ok());
}

#[test]
fn default_board_is_empty_8x8() {
    let board = Board::default();
    assert_eq!(board.size(), DEFAULT_SIZE);
    assert!(board.is_empty());
    assert!(!board.is_full());
    assert_eq!(board.occupied(), 0);
}

#[test]
fn apply_succeeds_iff_valid() {
    let mut board = Board::default();
    let pos = Pos::new(3, 4);

    assert!(board.is_valid_move(pos));
    assert!(board.apply_move(pos, Mark::X));
    assert_eq!(board.get(pos), Mark::X);

    // Occupied cell: invalid, no mutation.
    assert!(!board.is_valid_move(pos));
    assert!(!board.apply_move(pos, Mark::O));
    assert_eq!(board.get(pos), Mark::X);
    assert_eq!(board.occupied(), 1);
}

#[test]
fn apply_out_of_range_fails() {
    let mut board = Board::default();
    assert!(!board.apply_move(Pos::new(8, 0), Mark::X));
    assert!(!board.apply_move(Pos::new(0, 8), Mark::X));
    assert!(board.is_empty());
}

#[test]
fn apply_empty_mark_fails() {
    let mut board = Board::default();
    assert!(!board.apply_move(Pos::new(0, 0), Mark::Empty));
    assert!(board.is_empty());
}

#[test]
fn undo_reverses_apply() {
    let mut board = Board::default();
    let pos = Pos::new(2, 2);

    assert!(board.apply_move(pos, Mark::O));
    board.undo_move(pos);

    assert_eq!(board.get(pos), Mark::Empty);
    assert_eq!(board.occupied(), 0);
    assert!(board.is_valid_move(pos));
}

#[test]
fn fingerprint_round_trips_through_apply_undo() {
    let mut board = Board::default();
    assert!(board.apply_move(Pos::new(1, 1), Mark::X));
    assert!(board.apply_move(Pos::new(6, 6), Mark::O));

    let before = board.fingerprint();
    assert!(board.apply_move(Pos::new(4, 4), Mark::X));
    assert_ne!(board.fingerprint(), before);

    board.undo_move(Pos::new(4, 4));
    assert_eq!(board.fingerprint(), before);
}

#[test]
fn fingerprint_depends_on_contents_not_history() {
    let mut a = Board::default();
    let mut b = Board::default();

    assert!(a.apply_move(Pos::new(0, 0), Mark::X));
    assert!(a.apply_move(Pos::new(5, 5), Mark::O));

    // Same final contents, different move order and some churn.
    assert!(b.apply_move(Pos::new(5, 5), Mark::O));
    assert!(b.apply_move(Pos::new(3, 3), Mark::X));
    b.undo_move(Pos::new(3, 3));
    assert!(b.apply_move(Pos::new(0, 0), Mark::X));

    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn fingerprint_distinguishes_marks() {
    let mut a = Board::default();
    let mut b = Board::default();
    assert!(a.apply_move(Pos::new(4, 4), Mark::X));
    assert!(b.apply_move(Pos::new(4, 4), Mark::O));
    assert_ne!(a.fingerprint(), b.fingerprint());
}

#[test]
fn occupied_tracks_applies_minus_undos() {
    let mut board = Board::default();
    for i in 0..5u8 {
        assert!(board.apply_move(Pos::new(i, i), Mark::X));
    }
    board.undo_move(Pos::new(0, 0));
    board.undo_move(Pos::new(1, 1));
    assert_eq!(board.occupied(), 3);
}

#[test]
fn full_board_detected() {
    let mut board = Board::new(4).unwrap();
    for r in 0..4u8 {
        for c in 0..4u8 {
            // Checkerboard-ish fill; contents don't matter for is_full.
            let mark = if (r + c) % 2 == 0 { Mark::X } else { Mark::O };
            assert!(board.apply_move(Pos::new(r, c), mark));
        }
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn win_detected_in_all_four_directions() {
    let runs: [fn(u8) -> Pos; 4] = [
        |i| Pos::new(2, 2 + i),     // horizontal
        |i| Pos::new(2 + i, 2),     // vertical
        |i| Pos::new(2 + i, 2 + i), // down-right
        |i| Pos::new(2 + i, 5 - i), // down-left
    ];
    for make in runs {
        let mut board = Board::default();
        for i in 0..WIN_RUN as u8 {
            assert!(board.apply_move(make(i), Mark::X));
        }
        assert!(board.has_four_in_a_row(Mark::X));
        assert!(!board.has_four_in_a_row(Mark::O));
    }
}

#[test]
fn win_detected_at_board_edges() {
    // Reflections of the runs above, hugging each border.
    let runs: [fn(u8) -> Pos; 4] = [
        |i| Pos::new(0, 4 + i),     // top edge, horizontal
        |i| Pos::new(4 + i, 7),     // right edge, vertical
        |i| Pos::new(4 + i, 4 + i), // into the bottom-right corner
        |i| Pos::new(4 + i, 3 - i), // down-left toward the bottom-left
    ];
    for make in runs {
        let mut board = Board::default();
        for i in 0..WIN_RUN as u8 {
            assert!(board.apply_move(make(i), Mark::O));
        }
        assert!(board.has_four_in_a_row(Mark::O));
    }
}

#[test]
fn three_in_a_row_is_not_a_win() {
    let mut board = Board::default();
    for i in 0..3u8 {
        assert!(board.apply_move(Pos::new(4, 2 + i), Mark::X));
    }
    assert!(!board.has_four_in_a_row(Mark::X));
}

#[test]
fn broken_run_is_not_a_win() {
    let mut board = Board::default();
    // X X _ X X: never four consecutive.
    for c in [1u8, 2, 4, 5] {
        assert!(board.apply_move(Pos::new(3, c), Mark::X));
    }
    assert!(!board.has_four_in_a_row(Mark::X));
}

#[test]
fn line_sweep_covers_expected_count() {
    let board = Board::default();
    let mut count = 0usize;
    let mut cells = 0usize;
    board.for_each_line(|line| {
        assert!(line.len() >= WIN_RUN);
        count += 1;
        cells += line.len();
    });
    // 8 rows + 8 columns + 2 * 9 diagonals of length >= 4.
    assert_eq!(count, 8 + 8 + 9 + 9);
    // Diagonal lengths 4,5,6,7,8,7,6,5,4 sum to 52 per diagonal family.
    assert_eq!(cells, 64 + 64 + 52 + 52);
}

#[test]
fn line_sweep_is_oriented_left_to_right() {
    let mut board = Board::default();
    assert!(board.apply_move(Pos::new(0, 0), Mark::X));
    assert!(board.apply_move(Pos::new(0, 7), Mark::O));

    let mut seen_row = false;
    board.for_each_line(|line| {
        if line.len() == 8 {
            if line[0] == Mark::X && line[7] == Mark::O {
                seen_row = true;
            }
            // The reverse orientation must never appear.
            assert!(!(line[0] == Mark::O && line[7] == Mark::X));
        }
    });
    assert!(seen_row);
}

#[test]
fn empty_cells_in_row_major_order() {
    let mut board = Board::new(4).unwrap();
    assert!(board.apply_move(Pos::new(0, 0), Mark::X));
    let first: Vec<Pos> = board.empty_cells().take(2).collect();
    assert_eq!(first, vec![Pos::new(0, 1), Pos::new(0, 2)]);
}
