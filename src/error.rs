use crate::WIDTH;

/// Reasons a piece can't be dropped into a column
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid move, column {} full", .0 + 1)]
    ColumnFull(usize),

    #[error(
        "Invalid move, column {} out of range. Columns must be between 1 and {}",
        .0 + 1,
        WIDTH
    )]
    OutOfRange(usize),
}
