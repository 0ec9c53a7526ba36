use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::game::{
    board::{Board, BoardState},
    common::MoveRejection,
    config::BoardSize,
    piece::{Direction, Orientation, Piece, PieceId, Position},
};

/// Current status of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Complete,
}

/// A committed move: which piece went where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub piece: PieceId,
    pub to: Position,
}

/// Result of a successful [`BoardEngine::try_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Position,
    pub to: Position,
    /// The move put the target on the goal.
    pub completed: bool,
}

/// Change notification delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    Moved {
        piece: PieceId,
        from: Position,
        to: Position,
    },
    Selected(Option<PieceId>),
    Completed,
    Reset,
}

/// Callback invoked after every state change.
pub type Listener = Box<dyn FnMut(&BoardEvent, &Board)>;

/// Sole mutation gateway for one board: validates moves, applies them and
/// tracks completion.
pub struct BoardEngine {
    board: Board,
    moves: usize,
    listeners: Vec<Listener>,
}

impl BoardEngine {
    /// Start a level on a board with the default goal cell.
    pub fn initialize(pieces: Vec<Piece>, size: BoardSize) -> Self {
        Self::from_board(Board::new(pieces, size))
    }

    /// Start a level exiting through a custom goal cell.
    pub fn with_goal(pieces: Vec<Piece>, size: BoardSize, goal: Position) -> Self {
        Self::from_board(Board::with_goal(pieces, size, goal))
    }

    fn from_board(board: Board) -> Self {
        Self {
            board,
            moves: 0,
            listeners: Vec::new(),
        }
    }

    /// Restore an engine from a previously taken snapshot.
    pub fn from_state(state: BoardState) -> Self {
        Self::from_board(Board::from(state))
    }

    /// Snapshot of the current board.
    pub fn state(&self) -> BoardState {
        BoardState::from(&self.board)
    }

    /// Replace the board with a fresh one for `pieces`, keeping size and goal.
    /// Subscribers are kept.
    pub fn reset(&mut self, pieces: Vec<Piece>) -> &Board {
        self.board = Board::with_goal(pieces, self.board.size(), self.board.goal());
        self.moves = 0;
        log::info!("board reset with {} pieces", self.board.pieces().len());
        self.emit(BoardEvent::Reset);
        &self.board
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Register a listener for state changes. Rejected moves notify nobody.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&BoardEvent, &Board) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: BoardEvent) {
        let board = &self.board;
        for listener in self.listeners.iter_mut() {
            listener(&event, board);
        }
    }

    /// Moves that changed a position since the board was created or reset.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        if self.board.is_complete() {
            GameStatus::Complete
        } else {
            GameStatus::InProgress
        }
    }

    /// Whether `id` may sit at `to` given every other piece where it is now.
    pub fn is_valid_move(&self, id: &str, to: Position) -> bool {
        self.check_move(id, to).is_ok()
    }

    /// Same predicate as [`is_valid_move`](Self::is_valid_move), with the reason on failure.
    pub fn check_move(&self, id: &str, to: Position) -> Result<(), MoveRejection> {
        let piece = self
            .board
            .piece(id)
            .ok_or_else(|| MoveRejection::UnknownPiece(PieceId::from(id)))?;
        self.board.check_placement(piece, to)
    }

    /// Clamp, validate and commit a move. Illegal requests leave the board untouched.
    pub fn apply_move(&mut self, id: &str, to: Position) -> &Board {
        if let Err(reason) = self.try_move(id, to) {
            log::debug!("move of '{}' to {} dropped: {}", id, to, reason);
        }
        &self.board
    }

    /// [`apply_move`](Self::apply_move) that reports why a move was refused.
    pub fn try_move(&mut self, id: &str, to: Position) -> Result<MoveOutcome, MoveRejection> {
        let piece = self
            .board
            .piece(id)
            .ok_or_else(|| MoveRejection::UnknownPiece(PieceId::from(id)))?;
        let clamped = self.board.clamp(piece, to);
        self.board.check_placement(piece, clamped)?;

        let from = piece.position;
        let piece_id = piece.id.clone();
        let was_complete = self.board.is_complete();
        let moved = clamped != from;
        if moved {
            if let Some(piece) = self.board.piece_mut(id) {
                piece.position = clamped;
            }
            self.moves += 1;
        }

        let completed = self.check_win();
        if moved {
            self.emit(BoardEvent::Moved {
                piece: piece_id,
                from,
                to: clamped,
            });
        }
        if completed && !was_complete {
            log::info!("level complete after {} moves", self.moves);
            self.emit(BoardEvent::Completed);
        }
        Ok(MoveOutcome {
            from,
            to: clamped,
            completed,
        })
    }

    /// Move one cell in `direction`; clamping and validation as in `apply_move`.
    pub fn nudge(&mut self, id: &str, direction: Direction) -> &Board {
        let Some(to) = self.board.piece(id).map(|p| p.position.step(direction)) else {
            log::debug!("nudge of unknown piece '{}' dropped", id);
            return &self.board;
        };
        self.apply_move(id, to)
    }

    /// Whether the target covers the goal. A win marks the board complete;
    /// completion is never cleared.
    pub fn check_win(&mut self) -> bool {
        let won = self.board.target_at_goal();
        if won {
            self.board.set_complete(true);
        }
        won
    }

    /// Set or clear the advisory selection. The id is not checked.
    pub fn select_piece(&mut self, id: Option<&str>) -> &Board {
        let id = id.map(PieceId::from);
        self.board.set_selected(id.clone());
        self.emit(BoardEvent::Selected(id));
        &self.board
    }

    /// Furthest positions reachable along the piece's own axis one cell at a
    /// time, as `(toward origin, away from origin)`.
    pub fn slide_range(&self, id: &str) -> Option<(Position, Position)> {
        let piece = self.board.piece(id)?;
        let (back, forward) = match piece.orientation {
            Orientation::Horizontal => (Direction::Left, Direction::Right),
            Orientation::Vertical => (Direction::Up, Direction::Down),
        };
        let walk = |direction: Direction| {
            let mut at = piece.position;
            loop {
                let next = at.step(direction);
                if self.board.check_placement(piece, next).is_err() {
                    return at;
                }
                at = next;
            }
        };
        Some((walk(back), walk(forward)))
    }

    /// Every along-axis destination each piece can slide to right now.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for piece in self.board.pieces() {
            let Some((lo, hi)) = self.slide_range(piece.id.as_str()) else {
                continue;
            };
            let mut at = lo;
            loop {
                if at != piece.position {
                    moves.push(Move {
                        piece: piece.id.clone(),
                        to: at,
                    });
                }
                if at == hi {
                    break;
                }
                at = Position::new(at.x + (hi.x - at.x).signum(), at.y + (hi.y - at.y).signum());
            }
        }
        moves
    }
}

impl fmt::Debug for BoardEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardEngine")
            .field("board", &self.board)
            .field("moves", &self.moves)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
