/// Errors raised while building a [`Board`](crate::Board) or a
/// [`Solver`](crate::Solver).
///
/// Every variant is an invalid argument supplied by the caller. They are
/// reported at construction time; a board that exists is always consistent.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// The grid has no rows.
    #[display("board must have at least one row")]
    EmptyGrid,
    /// A row's length differs from the number of rows.
    #[display("board is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    /// `size * size` does not fit in `usize`.
    #[display("board dimension {size} is too large")]
    TooLarge { size: usize },
    /// A tile value lies outside `0..size * size`.
    #[display("tile {value} is out of range for a {size}x{size} board")]
    TileOutOfRange { value: u32, size: usize },
    /// A tile value appears more than once.
    #[display("tile {value} appears more than once")]
    DuplicateTile { value: u32 },
    /// The solver was asked to run without an initial board.
    #[display("no initial board supplied")]
    MissingBoard,
    /// The puzzle text did not start with a dimension.
    #[display("puzzle text is missing the board dimension")]
    MissingDimension,
    /// A token of the puzzle text is not a non-negative integer.
    #[display("invalid token {token:?} in puzzle text")]
    InvalidToken { token: String },
    /// The puzzle text holds the wrong number of tiles for its dimension.
    #[display("expected {expected} tiles, found {found}")]
    TileCount { expected: usize, found: usize },
}
