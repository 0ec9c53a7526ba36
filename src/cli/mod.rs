//! Terminal front-end: command parsing and an interactive play loop.
//!
//! Typed commands are translated into `select_piece`, `apply_move` and
//! `nudge` calls on the engine; the loop itself adds no rules.

#![cfg(feature = "std")]

pub mod interface;

pub use interface::render_board;

use std::io::{BufRead, Write};
use std::string::{String, ToString};

use crate::game::{BoardEngine, BoardError, BoardSize, Direction, Position};
use crate::levels::LevelSource;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(String),
    Deselect,
    Move { id: String, to: Position },
    Nudge {
        id: Option<String>,
        direction: Direction,
    },
    Moves,
    Show,
    Reset,
    Next,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  select <id>              select a piece
  deselect                 clear the selection
  move <id> <x> <y>        move a piece to a cell
  nudge <id> <direction>   move one cell up/down/left/right
  <direction>              nudge the selected piece
  moves                    list legal slides
  show                     redraw the board
  reset                    restart the level
  next                     go to the next level
  quit                     leave";

fn parse_direction(word: &str) -> Result<Direction, String> {
    match word.to_ascii_lowercase().as_str() {
        "up" | "u" => Ok(Direction::Up),
        "down" | "d" => Ok(Direction::Down),
        "left" | "l" => Ok(Direction::Left),
        "right" | "r" => Ok(Direction::Right),
        other => Err(format!("Unknown direction '{}' - use up/down/left/right", other)),
    }
}

fn parse_coord(word: &str) -> Result<i32, String> {
    word.parse()
        .map_err(|_| format!("Invalid coordinate '{}' - must be a whole number", word))
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = words.split_first() else {
            return Err("Empty input".to_string());
        };
        match (head.to_ascii_lowercase().as_str(), args) {
            ("select" | "s", [id]) => Ok(Command::Select(id.to_string())),
            ("deselect", []) => Ok(Command::Deselect),
            ("move" | "m", [id, x, y]) => Ok(Command::Move {
                id: id.to_string(),
                to: Position::new(parse_coord(x)?, parse_coord(y)?),
            }),
            ("nudge" | "n", [id, dir]) => Ok(Command::Nudge {
                id: Some(id.to_string()),
                direction: parse_direction(dir)?,
            }),
            ("moves", []) => Ok(Command::Moves),
            ("show", []) => Ok(Command::Show),
            ("reset", []) => Ok(Command::Reset),
            ("next", []) => Ok(Command::Next),
            ("help" | "?", []) => Ok(Command::Help),
            ("quit" | "q" | "exit", []) => Ok(Command::Quit),
            (word, []) => parse_direction(word)
                .map(|direction| Command::Nudge {
                    id: None,
                    direction,
                })
                .map_err(|_| format!("Unknown command '{}' - type 'help'", word)),
            (word, _) => Err(format!("Wrong arguments for '{}' - type 'help'", word)),
        }
    }
}

/// A play session over a level source.
pub struct Session<L: LevelSource> {
    levels: L,
    index: usize,
    engine: BoardEngine,
}

impl<L: LevelSource> Session<L> {
    pub fn new(levels: L, index: usize) -> Result<Self, BoardError> {
        let pieces = levels.get_level(index)?;
        let engine = BoardEngine::initialize(pieces, BoardSize::STANDARD);
        Ok(Self {
            levels,
            index,
            engine,
        })
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    pub fn level(&self) -> usize {
        self.index
    }

    fn write_board<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "Level {}  moves: {}",
            self.index + 1,
            self.engine.move_count()
        )?;
        write!(out, "{}", render_board(self.engine.board()))
    }

    /// Run one command. Returns `false` when the session should end.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> anyhow::Result<bool> {
        match command {
            Command::Select(id) => {
                self.engine.select_piece(Some(&id));
                self.write_board(out)?;
            }
            Command::Deselect => {
                self.engine.select_piece(None);
                self.write_board(out)?;
            }
            Command::Move { id, to } => {
                if let Err(reason) = self.engine.try_move(&id, to) {
                    writeln!(out, "Can't move: {}", reason)?;
                }
                self.after_move(out)?;
            }
            Command::Nudge { id, direction } => {
                let selected = self.engine.board().selected_piece();
                let Some(id) = id.or_else(|| selected.map(|s| s.as_str().to_string())) else {
                    writeln!(out, "No piece selected - use 'select <id>'")?;
                    return Ok(true);
                };
                let position = |engine: &BoardEngine| engine.board().piece(&id).map(|p| p.position);
                let before = position(&self.engine);
                self.engine.nudge(&id, direction);
                if before.is_none() || position(&self.engine) == before {
                    writeln!(out, "Can't nudge '{}' {:?}", id, direction)?;
                }
                self.after_move(out)?;
            }
            Command::Moves => {
                for m in self.engine.legal_moves() {
                    writeln!(out, "{} -> {}", m.piece, m.to)?;
                }
            }
            Command::Show => self.write_board(out)?,
            Command::Reset => {
                let pieces = self.levels.get_level(self.index)?;
                self.engine.reset(pieces);
                self.write_board(out)?;
            }
            Command::Next => {
                if self.index + 1 >= self.levels.level_count() {
                    writeln!(out, "That was the last level.")?;
                } else {
                    self.index += 1;
                    let pieces = self.levels.get_level(self.index)?;
                    self.engine = BoardEngine::initialize(pieces, BoardSize::STANDARD);
                    self.write_board(out)?;
                }
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn after_move<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        self.write_board(out)?;
        if self.engine.board().is_complete() {
            writeln!(
                out,
                "Level {} solved in {} moves! Type 'next' to continue.",
                self.index + 1,
                self.engine.move_count()
            )?;
        }
        Ok(())
    }

    /// Read commands from `input` until it ends or the user quits.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        self.write_board(out)?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Ok(command) => {
                    if !self.execute(command, out)? {
                        break;
                    }
                }
                Err(e) => writeln!(out, "{}", e)?,
            }
            out.flush()?;
        }
        Ok(())
    }
}
