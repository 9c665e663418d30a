use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;

impl Arbitrary for Direction {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        Direction::ALL[usize::arbitrary(g) % Direction::ALL.len()]
    }
}

pub fn board(rows: &[&[u32]]) -> Board {
    Board::new(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
}

/// Goal board of size 1 to 4 after applying every slide that fits.
pub fn walk(size: u8, slides: &[Direction]) -> Board {
    walk_sized(usize::from(size % 4) + 1, slides)
}

pub fn walk_sized(size: usize, slides: &[Direction]) -> Board {
    slides
        .iter()
        .fold(Board::goal(size), |b, &dir| b.slide(dir).unwrap_or(b))
}

/// Checks that `path` starts at `initial`, ends at a goal and moves one
/// slide at a time.
pub fn is_valid_path(initial: &Board, path: &[Board]) -> bool {
    path.first() == Some(initial)
        && path.last().map_or(false, Board::is_goal)
        && path
            .windows(2)
            .all(|pair| pair[0].neighbors().any(|nb| nb == pair[1]))
}
