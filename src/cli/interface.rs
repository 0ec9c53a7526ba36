#![cfg(feature = "std")]

//! Text rendering of a board for terminals.

use std::string::String;

use crate::game::{Board, Piece, Position};

const BORDER: char = '#';
const EMPTY: char = '.';
const OPEN_GOAL: char = ' ';

fn glyph(piece: &Piece, selected: bool) -> char {
    let ch = piece.id.as_str().chars().next().unwrap_or('?');
    if selected {
        ch.to_ascii_lowercase()
    } else {
        ch.to_ascii_uppercase()
    }
}

fn cell_char(board: &Board, cell: Position) -> char {
    let occupant = board.pieces().iter().find(|p| p.contains(cell));
    if let Some(piece) = occupant {
        let selected = board.selected_piece() == Some(&piece.id);
        return glyph(piece, selected);
    }
    if board.in_grid(cell) {
        EMPTY
    } else if cell == board.goal() {
        OPEN_GOAL
    } else {
        BORDER
    }
}

/// Render the grid inside a one-cell border, with the goal as a gap in it.
/// Pieces show the first letter of their id; the selected piece is lowercase.
pub fn render_board(board: &Board) -> String {
    let n = board.size().as_i32();
    let mut out = String::new();
    for y in -1..=n {
        let row: Vec<String> = (-1..=n)
            .map(|x| cell_char(board, Position::new(x, y)).to_string())
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}
