//! Move legality, piece placement and win detection

use crate::{board::*, error::MoveError, HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

// (dx, dy) steps of the windows starting at each cell: right, down,
// down-right and up-right
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Returns which columns can still take a piece
pub fn legal_moves(board: &Board) -> [bool; WIDTH] {
    let mut legal = [false; WIDTH];
    for (column, playable) in legal.iter_mut().enumerate() {
        *playable = board.cell(column, 0).is_empty();
    }
    legal
}

/// Iterates over the columns that can still take a piece, in ascending order
pub fn legal_columns(board: &Board) -> impl Iterator<Item = usize> {
    let legal = legal_moves(board);
    (0..WIDTH).filter(move |&column| legal[column])
}

/// Drops `piece` into `column`, returning the row it came to rest in
pub fn apply_move(board: &mut Board, column: usize, piece: Cell) -> Result<usize, MoveError> {
    debug_assert!(!piece.is_empty(), "an empty cell can't be played");

    if column >= WIDTH {
        return Err(MoveError::OutOfRange(column));
    }
    if !legal_moves(board)[column] {
        return Err(MoveError::ColumnFull(column));
    }

    // columns fill bottom-up, so the first empty cell from the bottom is the landing spot
    for row in (0..HEIGHT).rev() {
        let index = coord_to_index(column, row);
        if board.cells()[index].is_empty() {
            board.set(index, piece);
            return Ok(row);
        }
    }

    // the top cell was empty, so the scan always finds a slot
    Err(MoveError::ColumnFull(column))
}

/// Returns the piece owning a four-in-a-row, or `Cell::Empty` if there is none
pub fn check_win(board: &Board) -> Cell {
    for index in 0..WIDTH * HEIGHT {
        let first = board.cells()[index];
        if first.is_empty() {
            continue;
        }
        let (x, y) = index_to_coord(index);

        for &(dx, dy) in DIRECTIONS.iter() {
            let end_x = x as isize + 3 * dx;
            let end_y = y as isize + 3 * dy;
            if end_x >= WIDTH as isize || end_y < 0 || end_y >= HEIGHT as isize {
                continue;
            }

            let aligned = (1..4).all(|step| {
                let cell_x = (x as isize + step * dx) as usize;
                let cell_y = (y as isize + step * dy) as usize;
                board.cell(cell_x, cell_y) == first
            });
            if aligned {
                return first;
            }
        }
    }
    Cell::Empty
}

/// Derives the state of the game from the board alone
pub fn game_state(board: &Board) -> GameState {
    match check_win(board) {
        Cell::PlayerOne => GameState::PlayerOneWin,
        Cell::PlayerTwo => GameState::PlayerTwoWin,
        Cell::Empty => {
            if legal_columns(board).next().is_none() {
                GameState::Draw
            } else {
                GameState::Playing
            }
        }
    }
}
