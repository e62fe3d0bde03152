//! Board tests - move resolution, spawning and terminal detection

use tui_2048::core::{Board, GameSession, SimpleRng};
use tui_2048::types::{Direction, InvalidArgument, BOARD_SIZE, CELL_COUNT, MAX_TILE};

fn board(values: [u32; CELL_COUNT]) -> Board {
    Board::from_values(&values).unwrap()
}

fn row(b: &Board, r: usize) -> [u32; BOARD_SIZE] {
    [0, 1, 2, 3].map(|c| b.get(r, c).unwrap())
}

fn col(b: &Board, c: usize) -> [u32; BOARD_SIZE] {
    [0, 1, 2, 3].map(|r| b.get(r, c).unwrap())
}

#[test]
fn test_board_new_empty() {
    let b = Board::new();
    assert_eq!(b.empty_count(), CELL_COUNT);
    assert_eq!(b.max_tile(), 0);
    assert_eq!(b.get(BOARD_SIZE, 0), None);
    assert_eq!(b.get(0, BOARD_SIZE), None);
}

#[test]
fn test_adjacent_pair_merges_left() {
    let mut b = board([2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    let out = b.slide(Direction::Left);
    assert_eq!(row(&b, 0), [4, 0, 0, 0]);
    assert!(out.changed);
    assert_eq!(out.score_gained, 4);
}

#[test]
fn test_separated_pair_merges_after_compaction() {
    let mut b = board([2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    let out = b.slide(Direction::Left);
    assert_eq!(row(&b, 0), [4, 0, 0, 0]);
    assert!(out.changed);
    assert_eq!(out.score_gained, 4);
}

#[test]
fn test_alternating_row_does_not_move() {
    let mut b = board([2, 4, 2, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    let out = b.slide(Direction::Left);
    assert_eq!(row(&b, 0), [2, 4, 2, 4]);
    assert!(!out.changed);
    assert_eq!(out.score_gained, 0);
}

#[test]
fn test_all_directions_on_one_board() {
    let start = board([
        2, 0, 2, 4, //
        0, 4, 0, 4, //
        2, 0, 0, 0, //
        2, 8, 8, 8, //
    ]);

    let mut left = start.clone();
    let out = left.slide(Direction::Left);
    assert_eq!(row(&left, 0), [4, 4, 0, 0]);
    assert_eq!(row(&left, 1), [8, 0, 0, 0]);
    assert_eq!(row(&left, 2), [2, 0, 0, 0]);
    assert_eq!(row(&left, 3), [2, 16, 8, 0]);
    assert_eq!(out.score_gained, 4 + 8 + 16);

    let mut right = start.clone();
    let out = right.slide(Direction::Right);
    assert_eq!(row(&right, 0), [0, 0, 4, 4]);
    assert_eq!(row(&right, 1), [0, 0, 0, 8]);
    assert_eq!(row(&right, 2), [0, 0, 0, 2]);
    assert_eq!(row(&right, 3), [0, 2, 8, 16]);
    assert_eq!(out.score_gained, 4 + 8 + 16);

    let mut up = start.clone();
    let out = up.slide(Direction::Up);
    assert_eq!(col(&up, 0), [4, 2, 0, 0]);
    assert_eq!(col(&up, 1), [4, 8, 0, 0]);
    assert_eq!(col(&up, 2), [2, 8, 0, 0]);
    assert_eq!(col(&up, 3), [8, 8, 0, 0]);
    assert_eq!(out.score_gained, 4 + 8);

    let mut down = start;
    let out = down.slide(Direction::Down);
    assert_eq!(col(&down, 0), [0, 0, 2, 4]);
    assert_eq!(col(&down, 1), [0, 0, 4, 8]);
    assert_eq!(col(&down, 2), [0, 0, 2, 8]);
    assert_eq!(col(&down, 3), [0, 0, 8, 8]);
    assert_eq!(out.score_gained, 4 + 8);
}

#[test]
fn test_merged_tile_is_not_merged_again() {
    let mut b = board([4, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    let out = b.slide(Direction::Right);
    // From the right: 2+2 -> 4, and the 4 already there stays separate.
    assert_eq!(row(&b, 0), [0, 0, 4, 4]);
    assert_eq!(out.score_gained, 4);
    assert_eq!(out.merged.as_slice(), &[3]);
}

#[test]
fn test_slide_is_deterministic() {
    let start = board([2, 2, 4, 8, 0, 4, 4, 0, 16, 0, 16, 2, 2, 2, 2, 2]);
    for dir in Direction::ALL {
        let mut a = start.clone();
        let mut b = start.clone();
        assert_eq!(a.slide(dir), b.slide(dir));
        assert_eq!(a, b);
    }
}

#[test]
fn test_empty_board_never_changes() {
    for dir in Direction::ALL {
        let mut b = Board::new();
        let out = b.slide(dir);
        assert!(!out.changed);
        assert_eq!(out.score_gained, 0);
        assert!(out.merged.is_empty());
    }
}

#[test]
fn test_full_board_without_pairs_is_terminal() {
    let b = board([2, 4, 8, 16, 16, 8, 4, 2, 2, 4, 8, 16, 16, 8, 4, 2]);
    assert!(b.is_terminal());
    for dir in Direction::ALL {
        assert!(!b.can_slide(dir));
    }
}

#[test]
fn test_single_vertical_pair_keeps_game_alive() {
    let b = board([2, 4, 8, 16, 16, 8, 4, 2, 2, 4, 8, 16, 16, 8, 4, 16]);
    assert!(!b.is_terminal());
    assert!(b.can_slide(Direction::Up));
    assert!(!b.can_slide(Direction::Left));
}

#[test]
fn test_spawn_until_full() {
    let mut b = Board::new();
    let mut rng = SimpleRng::new(77);
    for n in 1..=CELL_COUNT {
        assert!(b.spawn_tile(&mut rng));
        assert_eq!(b.empty_count(), CELL_COUNT - n);
    }
    assert!(!b.spawn_tile(&mut rng));
    assert!(b.cells().iter().all(|&v| v == 2 || v == 4));
}

#[test]
fn test_from_values_rejects_malformed_input() {
    assert_eq!(
        Board::from_values(&[0; 15]).unwrap_err(),
        InvalidArgument::WrongLength {
            expected: 16,
            actual: 15
        }
    );
    let mut values = [0; CELL_COUNT];
    values[15] = 1;
    assert_eq!(
        Board::from_values(&values).unwrap_err(),
        InvalidArgument::InvalidTileValue { index: 15, value: 1 }
    );
}

#[test]
fn test_from_values_rejects_oversized_tiles() {
    for value in [1 << 31, 1 << 30, MAX_TILE << 1] {
        let mut values = [0; CELL_COUNT];
        values[0] = value;
        values[1] = value;
        assert_eq!(
            Board::from_values(&values).unwrap_err(),
            InvalidArgument::InvalidTileValue { index: 0, value }
        );
    }
}

#[test]
fn test_largest_tiles_merge_without_overflow() {
    // Eight pairs of the largest accepted tile: the biggest gain one slide can produce.
    let mut b = board([MAX_TILE; CELL_COUNT]);
    let out = b.slide(Direction::Left);
    for r in 0..BOARD_SIZE {
        assert_eq!(row(&b, r), [MAX_TILE * 2, MAX_TILE * 2, 0, 0]);
    }
    assert_eq!(out.score_gained, 8 * MAX_TILE * 2);
    assert_eq!(out.merged.len(), 8);

    let mut values = [0; CELL_COUNT];
    values[..4].copy_from_slice(&[MAX_TILE; 4]);
    values[4..8].copy_from_slice(&[MAX_TILE; 4]);
    let mut game = GameSession::with_board(Board::from_values(&values).unwrap(), SimpleRng::new(9));
    let report = game.apply_move(Direction::Left);
    assert!(report.changed);
    assert_eq!(report.score, 4 * MAX_TILE * 2);
    assert_eq!(game.cells()[0], MAX_TILE * 2);
}

#[test]
fn test_unknown_direction_text_is_rejected() {
    let err = "north".parse::<Direction>().unwrap_err();
    assert!(matches!(err, InvalidArgument::UnknownDirection(s) if s == "north"));
}
