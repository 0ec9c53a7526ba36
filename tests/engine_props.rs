use galaxy_cross::{BoardEngine, BoardSize, LevelSource, Occupancy, Position, StaticLevels};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Start a catalog level and push it around with random (mostly illegal) requests.
fn random_engine(seed: u64) -> BoardEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let levels = StaticLevels::default();
    let index = rng.random_range(0..levels.level_count());
    let mut engine = BoardEngine::initialize(levels.get_level(index).unwrap(), BoardSize::STANDARD);

    let steps = rng.random_range(0..64);
    for _ in 0..steps {
        let ids: Vec<String> = engine
            .board()
            .pieces()
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        let id = &ids[rng.random_range(0..ids.len())];
        let to = Position::new(rng.random_range(-3..9), rng.random_range(-3..9));
        engine.apply_move(id, to);
    }
    engine
}

fn assert_consistent(engine: &BoardEngine) -> Result<(), TestCaseError> {
    let board = engine.board();
    let mut occ = Occupancy::new(board.size().get() as usize);
    let mut in_grid = 0;
    for piece in board.pieces() {
        for cell in piece.cells() {
            prop_assert!(board.cell_allowed(piece, cell), "{:?} at {:?}", piece.id, cell);
            if board.in_grid(cell) {
                occ.set(cell.x, cell.y).unwrap();
                in_grid += 1;
            }
        }
    }
    prop_assert_eq!(occ.count_ones(), in_grid, "pieces overlap");
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn random_play_keeps_board_consistent(seed in any::<u64>()) {
        let engine = random_engine(seed);
        assert_consistent(&engine)?;
    }

    #[test]
    fn own_position_always_valid(seed in any::<u64>()) {
        let engine = random_engine(seed);
        for piece in engine.board().pieces() {
            prop_assert!(engine.is_valid_move(piece.id.as_str(), piece.position));
        }
    }

    #[test]
    fn rejected_moves_change_nothing(
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>(),
        x in -8i32..14,
        y in -8i32..14,
    ) {
        let mut engine = random_engine(seed);
        let pieces = engine.board().pieces().to_vec();
        let id = pieces[pick.index(pieces.len())].id.to_string();
        let before = engine.state();
        let moves_before = engine.move_count();
        match engine.try_move(&id, Position::new(x, y)) {
            Err(_) => {
                prop_assert_eq!(engine.state(), before);
                prop_assert_eq!(engine.move_count(), moves_before);
            }
            Ok(outcome) => {
                let after = engine.state();
                for (old, new) in before.pieces.iter().zip(after.pieces.iter()) {
                    if old.id == new.id && old.id != id.as_str() {
                        prop_assert_eq!(old.position, new.position);
                    }
                }
                prop_assert_eq!(engine.board().piece(&id).unwrap().position, outcome.to);
                assert_consistent(&engine)?;
            }
        }
    }

    #[test]
    fn applied_position_is_clamp_of_request(
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>(),
        x in -8i32..14,
        y in -8i32..14,
    ) {
        let mut engine = random_engine(seed);
        let pieces = engine.board().pieces().to_vec();
        let piece = &pieces[pick.index(pieces.len())];
        let clamped = engine.board().clamp(piece, Position::new(x, y));
        let valid = engine.is_valid_move(piece.id.as_str(), clamped);
        engine.apply_move(piece.id.as_str(), Position::new(x, y));
        let now = engine.board().piece(piece.id.as_str()).unwrap().position;
        if valid {
            prop_assert_eq!(now, clamped);
        } else {
            prop_assert_eq!(now, piece.position);
        }
    }

    #[test]
    fn complete_matches_goal_history(seed in any::<u64>()) {
        let engine = random_engine(seed);
        if engine.board().target_at_goal() {
            prop_assert!(engine.board().is_complete());
        }
    }
}
