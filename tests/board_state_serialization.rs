use galaxy_cross::{BoardEngine, BoardSize, BoardState, LevelSource, Position, StaticLevels};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

proptest! {
    #[test]
    fn board_state_roundtrip(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let pieces = StaticLevels::default().get_level(0).unwrap();
        let mut engine = BoardEngine::initialize(pieces, BoardSize::STANDARD);
        for _ in 0..16 {
            let moves = engine.legal_moves();
            if moves.is_empty() {
                break;
            }
            let m = &moves[rng.random_range(0..moves.len())];
            engine.apply_move(m.piece.as_str(), m.to);
        }
        engine.select_piece(Some("T"));

        let state = engine.state();
        let bytes = bincode::serialize(&state).unwrap();
        let decoded: BoardState = bincode::deserialize(&bytes).unwrap();
        let restored = BoardEngine::from_state(decoded);
        prop_assert_eq!(engine.state(), restored.state());
    }
}

#[test]
fn test_restored_engine_keeps_playing() {
    let pieces = StaticLevels::default().get_level(0).unwrap();
    let mut engine = BoardEngine::initialize(pieces, BoardSize::STANDARD);
    engine.apply_move("B", Position::new(4, 2));
    engine.apply_move("A", Position::new(3, 1));

    let bytes = bincode::serialize(&engine.state()).unwrap();
    let mut restored = BoardEngine::from_state(bincode::deserialize(&bytes).unwrap());
    restored.apply_move("T", Position::new(2, -1));
    assert!(restored.board().is_complete());
}

#[test]
fn test_invalid_size_is_rejected_on_decode() {
    let pieces = StaticLevels::default().get_level(0).unwrap();
    let engine = BoardEngine::initialize(pieces, BoardSize::STANDARD);
    let mut bytes = bincode::serialize(&engine.state()).unwrap();
    // The size byte leads the encoding.
    bytes[0] = 40;
    assert!(bincode::deserialize::<BoardState>(&bytes).is_err());
}
