use crate::prelude::*;

mod frontier;
pub use frontier::*;

mod node;
pub use node::*;

mod search;
use search::{Search, Step};

/// Estimate of the slides left between a board and the goal.
///
/// Both choices never overestimate and change by at most one per slide,
/// which keeps the search optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Hamming,
}

impl Heuristic {
    pub fn estimate(self, board: &Board) -> usize {
        match self {
            Heuristic::Manhattan => board.manhattan(),
            Heuristic::Hamming => board.hamming(),
        }
    }
}

/// Which successors a search refuses to enqueue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Only the board the node was expanded from.
    #[default]
    Predecessor,
    /// Every board the same search has already expanded. Uses memory
    /// proportional to the explored states but avoids re-expanding cycles.
    Visited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverOptions {
    pub heuristic: Heuristic,
    pub pruning: Pruning,
}

/// Node counts for one of the two searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SideStats {
    pub expanded: usize,
    pub enqueued: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Lockstep iterations until termination.
    pub rounds: usize,
    pub original: SideStats,
    pub twin: SideStats,
}

/// How a solve ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The goal is reachable; `path` runs from the initial board to the goal
    /// and holds `moves + 1` boards.
    Solved { moves: usize, path: Vec<Board> },
    Unsolvable,
}

impl Outcome {
    fn solved(node: &SearchNode) -> Self {
        Outcome::Solved {
            moves: node.moves,
            path: node.path(),
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved { .. })
    }

    pub fn moves(&self) -> Option<usize> {
        match self {
            Outcome::Solved { moves, .. } => Some(*moves),
            Outcome::Unsolvable => None,
        }
    }

    pub fn path(&self) -> Option<&[Board]> {
        match self {
            Outcome::Solved { path, .. } => Some(path),
            Outcome::Unsolvable => None,
        }
    }
}

/// Minimal-move solver for a sliding puzzle.
///
/// Runs A* from the initial board and, in lockstep, from its twin. Exactly
/// one of the two can reach the goal, so whichever side surfaces a goal
/// board first decides solvability. The whole search happens in the
/// constructor; afterwards the solver only reports.
///
/// Visited boards are not tracked beyond each node's predecessor unless
/// [`Pruning::Visited`] is chosen, so large boards can exhaust memory.
#[derive(Debug, Clone)]
pub struct Solver {
    outcome: Outcome,
    stats: SearchStats,
}

impl Solver {
    pub fn new(initial: Board) -> Self {
        Self::with_options(initial, SolverOptions::default())
    }

    /// Like [`Solver::new`], failing when no board is supplied.
    pub fn try_new(initial: Option<Board>) -> Result<Self, Error> {
        initial.map(Self::new).ok_or(Error::MissingBoard)
    }

    pub fn with_options(initial: Board, options: SolverOptions) -> Self {
        let Some(twin) = initial.twin() else {
            // Only a 1x1 board has no twin, and it is always the goal.
            return Self {
                outcome: Outcome::Solved {
                    moves: 0,
                    path: vec![initial],
                },
                stats: SearchStats::default(),
            };
        };

        let mut original = Search::new(initial, options);
        let mut twin = Search::new(twin, options);
        let mut twin_exhausted = false;
        let mut rounds = 0;

        let outcome = loop {
            rounds += 1;
            log::trace!(
                "round {}: frontiers {} / {}",
                rounds,
                original.frontier_len(),
                twin.frontier_len()
            );

            match original.step() {
                Step::Goal(node) => break Outcome::solved(&node),
                Step::Exhausted => break Outcome::Unsolvable,
                Step::Expanded => {}
            }

            if twin_exhausted {
                continue;
            }
            match twin.step() {
                Step::Goal(_) => break Outcome::Unsolvable,
                Step::Exhausted => {
                    log::debug!("twin search exhausted after {} rounds", rounds);
                    twin_exhausted = true;
                }
                Step::Expanded => {}
            }
        };

        let stats = SearchStats {
            rounds,
            original: original.stats(),
            twin: twin.stats(),
        };
        log::debug!(
            "search finished: solvable={} moves={:?} {:?}",
            outcome.is_solved(),
            outcome.moves(),
            stats
        );

        Self { outcome, stats }
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }

    pub fn is_solvable(&self) -> bool {
        self.outcome.is_solved()
    }

    /// Minimal number of slides, or `None` when the goal is unreachable.
    pub fn moves(&self) -> Option<usize> {
        self.outcome.moves()
    }

    /// Boards of a shortest solution, initial and goal included.
    pub fn solution(&self) -> Option<&[Board]> {
        self.outcome.path()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    const ALL_OPTIONS: [SolverOptions; 4] = [
        SolverOptions {
            heuristic: Heuristic::Manhattan,
            pruning: Pruning::Predecessor,
        },
        SolverOptions {
            heuristic: Heuristic::Manhattan,
            pruning: Pruning::Visited,
        },
        SolverOptions {
            heuristic: Heuristic::Hamming,
            pruning: Pruning::Predecessor,
        },
        SolverOptions {
            heuristic: Heuristic::Hamming,
            pruning: Pruning::Visited,
        },
    ];

    /// All 24 arrangements of a 2x2 board.
    fn all_2x2_boards() -> Vec<Board> {
        (0..256u32)
            .map(|code| (0..4).map(|i| (code >> (2 * i)) & 3).collect::<Vec<_>>())
            .filter_map(|tiles| Board::from_tiles(2, tiles).ok())
            .collect()
    }

    #[test]
    fn one_slide_from_goal() {
        let initial = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]);
        let solver = Solver::new(initial.clone());

        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), Some(1));
        assert_eq!(solver.solution(), Some(&[initial, Board::goal(3)][..]));
    }

    #[test]
    fn swapped_last_row_is_unsolvable() {
        let solver = Solver::new(board(&[&[1, 2, 3], &[4, 5, 6], &[8, 7, 0]]));

        assert!(!solver.is_solvable());
        assert_eq!(solver.moves(), None);
        assert_eq!(solver.solution(), None);
        assert_eq!(solver.outcome(), &Outcome::Unsolvable);
    }

    #[test]
    fn small_board_one_slide() {
        let solver = Solver::new(board(&[&[1, 0], &[3, 2]]));

        assert_eq!(solver.moves(), Some(1));
        assert_eq!(solver.solution().map(<[Board]>::len), Some(2));
    }

    #[test]
    fn known_four_move_puzzle() {
        let initial = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        let solver = Solver::new(initial.clone());

        assert_eq!(solver.moves(), Some(4));
        let path = solver.solution().unwrap();
        assert!(is_valid_path(&initial, path));
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn goal_board_needs_no_moves() {
        for size in 1..=4 {
            let solver = Solver::new(Board::goal(size));
            assert_eq!(solver.moves(), Some(0));
            assert_eq!(solver.solution(), Some(&[Board::goal(size)][..]));
        }
    }

    #[test]
    fn missing_board_is_rejected() {
        assert_eq!(Solver::try_new(None).unwrap_err(), Error::MissingBoard);
        assert!(Solver::try_new(Some(Board::goal(2))).is_ok());
    }

    #[test]
    fn agrees_with_parity_on_every_small_board() {
        let boards = all_2x2_boards();
        assert_eq!(boards.len(), 24);

        for b in boards {
            for options in ALL_OPTIONS {
                let solver = Solver::with_options(b.clone(), options);
                assert_eq!(solver.is_solvable(), b.is_solvable(), "{b}");
                if let Some(path) = solver.solution() {
                    assert!(is_valid_path(&b, path));
                }
            }
        }
    }

    #[test]
    fn exactly_one_of_board_and_twin_solves() {
        for b in all_2x2_boards() {
            let twin = b.twin().unwrap();
            assert_ne!(
                Solver::new(b.clone()).is_solvable(),
                Solver::new(twin).is_solvable(),
                "{b}"
            );
        }
    }

    #[test]
    fn options_agree_on_move_count() {
        use Direction::*;
        let initial = walk_sized(3, &[Down, Down, Right, Up, Right, Down, Left, Up, Left]);
        let moves: Vec<_> = ALL_OPTIONS
            .iter()
            .map(|&options| Solver::with_options(initial.clone(), options).moves())
            .collect();

        assert!(moves[0].is_some());
        assert!(moves.iter().all(|&m| m == moves[0]));
    }

    #[test]
    fn stats_count_both_sides() {
        let solver = Solver::new(board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]));
        let stats = solver.stats();

        assert!(stats.rounds >= 5);
        assert_eq!(stats.original.expanded, stats.rounds - 1);
        assert_eq!(stats.twin.expanded, stats.rounds - 1);
        assert!(stats.original.enqueued > stats.original.expanded);
    }

    #[test]
    fn into_outcome_keeps_path() {
        let initial = board(&[&[1, 0], &[3, 2]]);
        match Solver::new(initial.clone()).into_outcome() {
            Outcome::Solved { moves, path } => {
                assert_eq!(moves, 1);
                assert_eq!(path.first(), Some(&initial));
            }
            Outcome::Unsolvable => panic!("expected a solution"),
        }
    }

    #[quickcheck]
    fn solution_is_a_shortest_valid_path(slides: Vec<Direction>) -> bool {
        let slides = &slides[..slides.len().min(10)];
        let initial = walk_sized(3, slides);
        let applied = slides
            .iter()
            .scan(Board::goal(3), |b, &dir| {
                let next = b.slide(dir);
                if let Some(next) = &next {
                    *b = next.clone();
                }
                Some(next.is_some())
            })
            .filter(|&moved| moved)
            .count();

        let solver = Solver::new(initial.clone());
        let Some(moves) = solver.moves() else {
            return false;
        };
        let path = solver.solution().unwrap_or_default();

        moves <= applied
            && moves % 2 == applied % 2
            && path.len() == moves + 1
            && is_valid_path(&initial, path)
    }

    #[quickcheck]
    fn twin_of_scrambled_board_is_unsolvable(slides: Vec<Direction>) -> bool {
        let slides = &slides[..slides.len().min(6)];
        let twin = walk_sized(2, slides).twin().unwrap();
        !Solver::new(twin).is_solvable()
    }
}
