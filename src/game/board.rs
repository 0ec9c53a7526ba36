//! Board state: pieces, dimensions, goal cell, selection and completion.

use alloc::vec::Vec;
use core::fmt;

use crate::game::bitboard::{BitBoardError, Occupancy};
use crate::game::common::MoveRejection;
use crate::game::config::BoardSize;
use crate::game::piece::{Piece, PieceId, Position};

/// Plain snapshot of a board for hosts that checkpoint or inspect a level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub size: BoardSize,
    pub goal: Position,
    pub pieces: Vec<Piece>,
    pub selected: Option<PieceId>,
    pub complete: bool,
}

/// Full mutable state of one puzzle instance.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    goal: Position,
    pieces: Vec<Piece>,
    selected: Option<PieceId>,
    complete: bool,
}

impl Board {
    /// Fresh board with the default goal cell for `size`.
    pub fn new(pieces: Vec<Piece>, size: BoardSize) -> Self {
        Self::with_goal(pieces, size, size.default_goal())
    }

    /// Fresh board exiting through `goal`, which should sit one cell outside an edge.
    pub fn with_goal(pieces: Vec<Piece>, size: BoardSize, goal: Position) -> Self {
        Board {
            size,
            goal,
            pieces,
            selected: None,
            complete: false,
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: &str) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub(crate) fn piece_mut(&mut self, id: &str) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.id == id)
    }

    /// The piece that must reach the goal, if the level defines one.
    pub fn target(&self) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.is_target)
    }

    pub fn selected_piece(&self) -> Option<&PieceId> {
        self.selected.as_ref()
    }

    pub(crate) fn set_selected(&mut self, id: Option<PieceId>) {
        self.selected = id;
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub(crate) fn set_complete(&mut self, complete: bool) {
        self.complete = complete;
    }

    /// Whether `cell` lies inside the normal `size × size` grid.
    pub fn in_grid(&self, cell: Position) -> bool {
        let n = self.size.as_i32();
        (0..n).contains(&cell.x) && (0..n).contains(&cell.y)
    }

    /// Whether `piece` may cover `cell`: any grid cell, plus the goal cell for the target.
    pub fn cell_allowed(&self, piece: &Piece, cell: Position) -> bool {
        self.in_grid(cell) || (piece.is_target && cell == self.goal)
    }

    /// In-grid cells covered by every piece except `exclude`.
    ///
    /// Cells off the grid belong to the goal lane and are never shared.
    pub fn occupancy_excluding(&self, exclude: &str) -> Result<Occupancy, BitBoardError> {
        self.grid_mask(
            self.pieces
                .iter()
                .filter(|p| p.id != exclude)
                .flat_map(|p| p.cells()),
        )
    }

    /// In-grid cells covered by all pieces.
    pub fn occupancy(&self) -> Result<Occupancy, BitBoardError> {
        self.grid_mask(self.pieces.iter().flat_map(|p| p.cells()))
    }

    fn grid_mask<I>(&self, cells: I) -> Result<Occupancy, BitBoardError>
    where
        I: IntoIterator<Item = Position>,
    {
        // BoardSize guarantees the side fits the mask.
        let mut occ = Occupancy::new(self.size.get() as usize);
        for cell in cells.into_iter().filter(|c| self.in_grid(*c)) {
            occ.set(cell.x, cell.y)?;
        }
        Ok(occ)
    }

    /// Validate `piece` sitting at `origin`, ignoring its current cells.
    pub fn check_placement(&self, piece: &Piece, origin: Position) -> Result<(), MoveRejection> {
        if let Some(cell) = piece
            .cells_at(origin)
            .find(|c| !self.cell_allowed(piece, *c))
        {
            return Err(MoveRejection::OutOfBounds { cell });
        }
        let others = self.occupancy_excluding(piece.id.as_str())?;
        let mask = self.grid_mask(piece.cells_at(origin))?;
        let hit = others & mask;
        if hit.is_empty() {
            return Ok(());
        }
        for (x, y) in hit.iter_set_bits() {
            let cell = Position::new(x, y);
            if let Some(other) = self
                .pieces
                .iter()
                .find(|p| p.id != piece.id && p.contains(cell))
            {
                return Err(MoveRejection::Overlaps {
                    other: other.id.clone(),
                    cell,
                });
            }
        }
        Ok(())
    }

    /// Clamp each axis of `origin` into the piece's travel range.
    ///
    /// The range is `[0, size - span]` per axis; for the target it reaches one
    /// cell further on the side the goal sits on.
    pub fn clamp(&self, piece: &Piece, origin: Position) -> Position {
        let n = self.size.as_i32();
        let (span_x, span_y) = piece.span();
        let (mut min_x, mut max_x) = (0, n - span_x);
        let (mut min_y, mut max_y) = (0, n - span_y);
        if piece.is_target {
            if self.goal.x < 0 {
                min_x = -1;
            } else if self.goal.x >= n {
                max_x += 1;
            }
            if self.goal.y < 0 {
                min_y = -1;
            } else if self.goal.y >= n {
                max_y += 1;
            }
        }
        // max/min rather than clamp: an over-long piece gives max < min.
        Position::new(
            origin.x.min(max_x).max(min_x),
            origin.y.min(max_y).max(min_y),
        )
    }

    /// Whether the target currently covers the goal cell.
    pub fn target_at_goal(&self) -> bool {
        self.target()
            .map(|t| t.contains(self.goal))
            .unwrap_or(false)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  goal: {},\n  selected: {:?},\n  complete: {},\n  pieces: {:?},\n  occupancy: {:?}\n}}",
            self.size.get(),
            self.goal,
            self.selected,
            self.complete,
            self.pieces,
            self.occupancy(),
        )
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            size: b.size,
            goal: b.goal,
            pieces: b.pieces.clone(),
            selected: b.selected.clone(),
            complete: b.complete,
        }
    }
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        Board {
            size: state.size,
            goal: state.goal,
            pieces: state.pieces,
            selected: state.selected,
            complete: state.complete,
        }
    }
}
