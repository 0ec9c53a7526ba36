#[cfg(feature = "std")]
mod cli_tests {
    use std::io::Cursor;

    use galaxy_cross::{
        render_board, BoardEngine, BoardSize, Command, Direction, LevelSource, Position,
        Session, StaticLevels,
    };

    fn run(script: &str) -> (Session<StaticLevels>, String) {
        let mut session = Session::new(StaticLevels::default(), 0).unwrap();
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("select T"), Ok(Command::Select("T".to_string())));
        assert_eq!(
            Command::parse("move A 3 1"),
            Ok(Command::Move {
                id: "A".to_string(),
                to: Position::new(3, 1)
            })
        );
        assert_eq!(
            Command::parse("nudge B down"),
            Ok(Command::Nudge {
                id: Some("B".to_string()),
                direction: Direction::Down
            })
        );
        assert_eq!(
            Command::parse("  UP "),
            Ok(Command::Nudge {
                id: None,
                direction: Direction::Up
            })
        );
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("move A x 1").is_err());
        assert!(Command::parse("nudge A sideways").is_err());
        assert!(Command::parse("select").is_err());
        assert!(Command::parse("fly").is_err());
    }

    #[test]
    fn test_render_level_1() {
        let pieces = StaticLevels::default().get_level(0).unwrap();
        let engine = BoardEngine::initialize(pieces, BoardSize::STANDARD);
        let expected = "\
# # #   # # # #
# . . . . B . #
# A A A . B . #
# . . . . . . #
# . . T . . . #
# . . T . . . #
# . . . C C . #
# # # # # # # #
";
        assert_eq!(render_board(engine.board()), expected);
    }

    #[test]
    fn test_render_selected_and_solved() {
        let pieces = StaticLevels::default().get_level(0).unwrap();
        let mut engine = BoardEngine::initialize(pieces, BoardSize::STANDARD);
        engine.select_piece(Some("T"));
        engine.apply_move("B", Position::new(4, 2));
        engine.apply_move("A", Position::new(3, 1));
        engine.apply_move("T", Position::new(2, -1));
        let rendered = render_board(engine.board());
        let first_two: Vec<&str> = rendered.lines().take(2).collect();
        assert_eq!(first_two, vec!["# # # t # # # #", "# . . t . . . #"]);
    }

    #[test]
    fn test_session_solves_level_1() {
        let (session, out) = run(
            "nudge B down\nnudge B down\nmove A 3 1\nselect T\nup\nup\nup\nup\nquit\n",
        );
        assert!(session.engine().board().is_complete());
        assert!(out.contains("Level 1 solved in 7 moves!"), "{out}");
    }

    #[test]
    fn test_session_reports_rejections() {
        let (session, out) = run("move T 2 0\nup\nnudge A left\nbogus\n");
        assert!(out.contains("Can't move: Cell (2, 1) is occupied by piece 'A'"), "{out}");
        assert!(out.contains("No piece selected"), "{out}");
        assert!(out.contains("Can't nudge 'A' Left"), "{out}");
        assert!(out.contains("Unknown command 'bogus'"), "{out}");
        assert_eq!(session.engine().move_count(), 0);
    }

    #[test]
    fn test_session_reset_and_next() {
        let (session, out) = run("nudge B down\nreset\nnext\n");
        assert_eq!(session.level(), 1);
        assert_eq!(session.engine().move_count(), 0);
        assert!(out.contains("Level 2  moves: 0"), "{out}");

        let (session, out) = run("next\nnext\nnext\n");
        assert_eq!(session.level(), 2);
        assert!(out.contains("That was the last level."), "{out}");
    }
}
