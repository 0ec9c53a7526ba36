use galaxy_cross::{BoardEngine, BoardSize, LevelSource, Position, StaticLevels};

fn start(index: usize) -> BoardEngine {
    let pieces = StaticLevels::default().get_level(index).unwrap();
    BoardEngine::initialize(pieces, BoardSize::STANDARD)
}

fn play(engine: &mut BoardEngine, moves: &[(&str, (i32, i32))]) {
    for &(id, to) in moves {
        assert!(!engine.board().is_complete(), "solved before {id} -> {to:?}");
        engine
            .try_move(id, Position::from(to))
            .unwrap_or_else(|e| panic!("{id} -> {to:?} rejected: {e}"));
    }
}

#[test]
fn test_catalog_size() {
    assert_eq!(StaticLevels::default().level_count(), 3);
}

#[test]
fn test_level_1_solution() {
    let mut engine = start(0);
    play(&mut engine, &[("B", (4, 2)), ("A", (3, 1)), ("T", (2, 2)), ("T", (2, 0))]);
    assert!(!engine.board().is_complete());
    play(&mut engine, &[("T", (2, -1))]);
    assert!(engine.board().is_complete());
    assert_eq!(engine.move_count(), 5);
}

#[test]
fn test_level_2_solution() {
    let mut engine = start(1);
    play(
        &mut engine,
        &[("A", (3, 0)), ("D", (4, 3)), ("B", (3, 2)), ("T", (2, -1))],
    );
    assert!(engine.board().is_complete());
}

#[test]
fn test_level_3_solution() {
    let mut engine = start(2);
    play(
        &mut engine,
        &[("B", (4, 1)), ("C", (3, 0)), ("A", (3, 3)), ("T", (2, -1))],
    );
    assert!(engine.board().is_complete());
}

#[test]
fn test_level_1_blocked_target() {
    let mut engine = start(0);
    // A covers column 2 on row 1.
    assert!(!engine.is_valid_move("T", Position::new(2, 1)));
    engine.apply_move("T", Position::new(2, 0));
    assert_eq!(engine.board().piece("T").unwrap().position, Position::new(2, 3));
    assert_eq!(engine.move_count(), 0);
}

#[test]
fn test_level_1_slide_ranges() {
    let engine = start(0);
    assert_eq!(
        engine.slide_range("T"),
        Some((Position::new(2, 2), Position::new(2, 4)))
    );
    assert_eq!(
        engine.slide_range("A"),
        Some((Position::new(0, 1), Position::new(1, 1)))
    );
    assert_eq!(
        engine.slide_range("B"),
        Some((Position::new(4, 0), Position::new(4, 3)))
    );
    assert_eq!(
        engine.slide_range("C"),
        Some((Position::new(0, 5), Position::new(4, 5)))
    );
    assert_eq!(engine.slide_range("Z"), None);
}

#[test]
fn test_level_1_legal_moves() {
    let engine = start(0);
    let moves = engine.legal_moves();
    assert_eq!(moves.len(), 10);
    for m in &moves {
        assert!(engine.is_valid_move(m.piece.as_str(), m.to), "{m:?}");
        assert_ne!(engine.board().piece(m.piece.as_str()).unwrap().position, m.to);
    }
}

#[test]
fn test_slide_range_reaches_goal_when_clear() {
    let mut engine = start(0);
    play(&mut engine, &[("B", (4, 2)), ("A", (3, 1))]);
    assert_eq!(
        engine.slide_range("T"),
        Some((Position::new(2, -1), Position::new(2, 4)))
    );
}
