//! Terminal output for boards and solutions.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The board's `Display` dump.
    Plain,
    /// Coloured grid: tiles already home in green, the blank dimmed.
    #[default]
    Styled,
}

pub fn write_board<W: Write>(w: &mut W, board: &Board, mode: Mode) -> io::Result<()> {
    if mode == Mode::Plain {
        return write!(w, "{}", board);
    }

    let n = board.dimension();
    let width = (n * n - 1).to_string().len().max(2);
    for row in 0..n {
        for col in 0..n {
            let value = board.tile(row, col);
            if value == 0 {
                queue!(
                    w,
                    SetAttribute(Attribute::Dim),
                    Print(format!("{:>width$} ", ".")),
                    SetAttribute(Attribute::Reset)
                )?;
            } else if value as usize == row * n + col + 1 {
                queue!(
                    w,
                    SetForegroundColor(Color::Green),
                    Print(format!("{:>width$} ", value)),
                    ResetColor
                )?;
            } else {
                queue!(w, Print(format!("{:>width$} ", value)))?;
            }
        }
        queue!(w, Print("\n"))?;
    }
    w.flush()
}

/// Writes the move count and every board of the solution, each after the
/// slide that produced it, or a notice that the puzzle has none.
pub fn write_solution<W: Write>(w: &mut W, solver: &Solver, mode: Mode) -> io::Result<()> {
    match solver.outcome() {
        Outcome::Unsolvable => writeln!(w, "No solution possible"),
        Outcome::Solved { moves, path } => {
            writeln!(w, "Minimum number of moves = {}", moves)?;
            let mut previous: Option<&Board> = None;
            for board in path {
                writeln!(w)?;
                if let Some(dir) = previous.and_then(|prev| prev.slide_to(board)) {
                    writeln!(w, "slide {}", dir)?;
                }
                write_board(w, board, mode)?;
                previous = Some(board);
            }
            Ok(())
        }
    }
}
