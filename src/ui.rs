//! Text rendering of board views.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::{
    board::Board,
    common::{CellView, ViewMode},
    config::{BOARD_SIZE, COLUMN_LABELS},
    coord::Coordinate,
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Character drawn for a cell.
pub fn glyph(cell: CellView) -> char {
    match cell {
        CellView::Empty => ' ',
        CellView::ShipOfLength(n) | CellView::HitAndRevealedLength(n) => {
            core::char::from_digit(n as u32, 10).unwrap_or('#')
        }
        CellView::Miss => '.',
        CellView::HitUnsunk => '*',
    }
}

/// Render `board` as a labelled grid, one line per row:
///
/// ```text
///  |ABCDEFGHIJ
/// -+----------
/// 0|55555
/// ```
pub fn render_board(board: &Board, mode: ViewMode) -> String {
    let mut out = String::new();
    out.push_str(" |");
    out.extend(COLUMN_LABELS.iter());
    out.push('\n');
    out.push_str("-+");
    out.extend(core::iter::repeat('-').take(GRID_SIZE));
    out.push('\n');
    for row in 0..GRID_SIZE {
        let _ = write!(out, "{}|", row);
        for col in 0..GRID_SIZE {
            let ch = Coordinate::new(row, col)
                .map(|at| glyph(board.cell_view(at, mode)))
                .unwrap_or(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Two rendered grids next to each other under their titles.
pub fn render_side_by_side(left_title: &str, left: &str, right_title: &str, right: &str) -> String {
    const GAP: &str = "     ";
    let width = GRID_SIZE + 2;
    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}{}{}", left_title, GAP, right_title, width = width);
    let left_lines: Vec<&str> = left.lines().collect();
    let right_lines: Vec<&str> = right.lines().collect();
    let rows = left_lines.len().max(right_lines.len());
    for i in 0..rows {
        let l = left_lines.get(i).copied().unwrap_or("");
        let r = right_lines.get(i).copied().unwrap_or("");
        let _ = writeln!(out, "{:<width$}{}{}", l, GAP, r, width = width);
    }
    out
}
