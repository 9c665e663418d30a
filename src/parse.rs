use std::str::FromStr;

use crate::prelude::*;

/// Reads the puzzle text format: the dimension `n` followed by the `n * n`
/// tiles in row-major order, all separated by whitespace.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Board, Error> {
        let mut numbers = s.split_whitespace().map(|token| {
            token.parse::<u32>().map_err(|_| Error::InvalidToken {
                token: token.to_owned(),
            })
        });

        let size = numbers.next().ok_or(Error::MissingDimension)?? as usize;
        let tiles = numbers.collect::<Result<Vec<_>, _>>()?;
        Board::from_tiles(size, tiles)
    }
}
