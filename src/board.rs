use rand::{seq::SliceRandom, Rng};
use std::fmt;

use crate::Error;

/// The direction a tile slides into the blank.
///
/// `Up` moves the tile below the blank upwards, so the blank itself moves
/// down one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in the order [`Board::neighbors`] yields them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row and column offset of the tile that slides, relative to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (1, 0),
            Direction::Left => (0, 1),
            Direction::Down => (-1, 0),
            Direction::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// One configuration of an N-by-N sliding puzzle.
///
/// Tiles are stored row-major; `0` is the blank. A `Board` never changes
/// after construction: sliding a tile or building the twin yields a new
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    blank: usize,
}

impl Board {
    /// Builds a board from its rows.
    ///
    /// Fails unless the grid is square and holds every value of
    /// `0..n * n` exactly once.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self, Error> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::EmptyGrid);
        }

        let mut tiles = Vec::with_capacity(size.saturating_mul(size));
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != size {
                return Err(Error::NotSquare {
                    row,
                    len: cells.len(),
                    size,
                });
            }
            tiles.extend(cells);
        }

        Self::from_tiles(size, tiles)
    }

    /// Builds a `size`-by-`size` board from row-major tiles.
    pub fn from_tiles(size: usize, tiles: Vec<u32>) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::EmptyGrid);
        }
        let cells = size.checked_mul(size).ok_or(Error::TooLarge { size })?;
        if tiles.len() != cells {
            return Err(Error::TileCount {
                expected: cells,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; cells];
        let mut blank = None;
        for (i, &value) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(Error::TileOutOfRange { value, size })?;
            if *slot {
                return Err(Error::DuplicateTile { value });
            }
            *slot = true;
            if value == 0 {
                blank = Some(i);
            }
        }

        // `cells` distinct in-range values always include the blank.
        let blank = blank.ok_or(Error::TileCount {
            expected: cells,
            found: tiles.len(),
        })?;
        Ok(Self { size, tiles, blank })
    }

    /// The solved board: tiles `1..n * n` in order, blank in the last cell.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or `size * size` tiles do not fit in `u32`.
    pub fn goal(size: usize) -> Self {
        assert!(size > 0, "board dimension must be at least 1");
        let cells = size
            .checked_mul(size)
            .filter(|&cells| u32::try_from(cells).is_ok())
            .unwrap_or_else(|| panic!("board dimension {size} is too large"));

        let tiles = (1..cells as u32).chain(std::iter::once(0)).collect();
        Self {
            size,
            tiles,
            blank: cells - 1,
        }
    }

    /// A uniformly random solvable board.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Board::goal`].
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut board = Self::goal(size);

        loop {
            board.tiles.shuffle(rng);
            // A permutation of the goal's tiles still holds the blank.
            board.blank = board.tiles.iter().position(|&t| t == 0).unwrap_or_default();

            if board.is_solvable() {
                return board;
            }
        }
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    /// Row-major tiles.
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Tile at `row`, `col`; `0` for the blank.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`Board::dimension`].
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is outside a {n}x{n} board",
            n = self.size
        );
        self.tiles[row * self.size + col]
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// Number of tiles that are not in their goal cell. The blank is not a
    /// tile and never counts.
    pub fn hamming(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(i, &value)| value != 0 && value as usize != i + 1)
            .count()
    }

    /// Sum of the grid distances between every tile and its goal cell.
    pub fn manhattan(&self) -> usize {
        let mut distance = 0;
        for (i, &value) in self.tiles.iter().enumerate() {
            if value != 0 {
                let target = value as usize - 1;
                distance += (i / self.size).abs_diff(target / self.size);
                distance += (i % self.size).abs_diff(target % self.size);
            }
        }
        distance
    }

    pub fn is_goal(&self) -> bool {
        self.manhattan() == 0
    }

    /// This board with the first horizontally adjacent pair of tiles swapped,
    /// scanning rows top to bottom and left to right.
    ///
    /// Exactly one of a board and its twin can reach the goal. A 1x1 board
    /// has no pair to swap and returns `None`.
    pub fn twin(&self) -> Option<Self> {
        for row in 0..self.size {
            for col in 0..self.size - 1 {
                let i = row * self.size + col;
                if self.tiles[i] != 0 && self.tiles[i + 1] != 0 {
                    let mut tiles = self.tiles.clone();
                    tiles.swap(i, i + 1);
                    return Some(Self {
                        size: self.size,
                        tiles,
                        blank: self.blank,
                    });
                }
            }
        }
        None
    }

    /// The board after sliding a tile into the blank, or `None` when no tile
    /// sits on that side of the blank.
    pub fn slide(&self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.as_offset();
        let (row, col) = self.blank();

        let new_row = row.checked_add_signed(dr).filter(|&r| r < self.size)?;
        let new_col = col.checked_add_signed(dc).filter(|&c| c < self.size)?;
        let target = new_row * self.size + new_col;

        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Self {
            size: self.size,
            tiles,
            blank: target,
        })
    }

    /// The slide that turns this board into `next`, if they are one slide
    /// apart.
    pub fn slide_to(&self, next: &Board) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.slide(dir).as_ref() == Some(next))
    }

    /// Boards one slide away, in [`Direction::ALL`] order.
    pub fn neighbors(&self) -> impl Iterator<Item = Board> + '_ {
        Direction::ALL.into_iter().filter_map(|dir| self.slide(dir))
    }

    /// Inversion-parity test for whether the goal is reachable.
    ///
    /// For odd sizes the number of inversions must be even; for even sizes
    /// the inversions plus the blank's row must be odd.
    pub fn is_solvable(&self) -> bool {
        let inversions = Self::count_inversions(&self.tiles);

        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank / self.size) % 2 == 1
        }
    }

    fn count_inversions(flattened: &[u32]) -> usize {
        flattened
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                flattened[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        for row in self.tiles.chunks(self.size) {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
