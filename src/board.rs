use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The piece of the other player, `Empty` has no opponent
    pub fn opponent(&self) -> Cell {
        match self {
            Cell::PlayerOne => Cell::PlayerTwo,
            Cell::PlayerTwo => Cell::PlayerOne,
            Cell::Empty => Cell::Empty,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// Converts a cartesian coordinate to an index into the cell array
pub const fn coord_to_index(x: usize, y: usize) -> usize {
    x + y * WIDTH
}

/// Converts an index into the cell array to a cartesian coordinate
pub const fn index_to_coord(index: usize) -> (usize, usize) {
    (index % WIDTH, index / WIDTH)
}

/// A Connect 4 grid
///
/// Cells are stored left-to-right, top-to-bottom: row 0 is the top of the
/// board and pieces fall towards row `HEIGHT - 1`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
        }
    }

    /// Creates a board that is empty apart from the given `(index, piece)` pairs
    ///
    /// Placements are taken as-is, no gravity is applied. Indices outside the
    /// board are ignored.
    pub fn from_placements<I>(placements: I) -> Self
    where
        I: IntoIterator<Item = (usize, Cell)>,
    {
        let mut board = Self::new();
        for (index, piece) in placements {
            if let Some(cell) = board.cells.get_mut(index) {
                *cell = piece;
            }
        }
        board
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[coord_to_index(x, y)]
    }

    pub fn cells(&self) -> &[Cell; WIDTH * HEIGHT] {
        &self.cells
    }

    pub(crate) fn set(&mut self, index: usize, piece: Cell) {
        self.cells[index] = piece;
    }

    /// The number of pieces played so far
    pub fn num_pieces(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in self.cells.chunks(WIDTH) {
            for cell in row {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
