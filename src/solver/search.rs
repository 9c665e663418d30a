use std::collections::HashSet;
use std::rc::Rc;

use super::{Frontier, SearchNode, SideStats};
use crate::prelude::*;

/// Result of advancing one search by a single expansion.
#[derive(Debug)]
pub enum Step {
    /// The frontier's minimum is a goal board.
    Goal(Rc<SearchNode>),
    /// A node was expanded into the frontier.
    Expanded,
    /// Nothing is left to expand; the start board cannot reach the goal.
    Exhausted,
}

/// A* search from one start board, advanced one expansion at a time.
#[derive(Debug)]
pub struct Search {
    frontier: Frontier,
    heuristic: Heuristic,
    /// Boards already expanded, kept only under [`Pruning::Visited`].
    closed: Option<HashSet<Board>>,
    expanded: usize,
}

impl Search {
    pub fn new(start: Board, options: SolverOptions) -> Self {
        let mut frontier = Frontier::default();
        frontier.push(Rc::new(SearchNode::root(start, options.heuristic)));

        Self {
            frontier,
            heuristic: options.heuristic,
            closed: match options.pruning {
                Pruning::Predecessor => None,
                Pruning::Visited => Some(HashSet::new()),
            },
            expanded: 0,
        }
    }

    pub fn step(&mut self) -> Step {
        loop {
            let Some(node) = self.frontier.pop() else {
                return Step::Exhausted;
            };
            if node.board.is_goal() {
                return Step::Goal(node);
            }
            if let Some(closed) = &mut self.closed {
                if !closed.insert(node.board.clone()) {
                    continue;
                }
            }

            self.expand(&node);
            return Step::Expanded;
        }
    }

    fn expand(&mut self, node: &Rc<SearchNode>) {
        self.expanded += 1;
        for board in node.board.neighbors() {
            if node.predecessor() == Some(&board) {
                continue;
            }
            if self.closed.as_ref().map_or(false, |closed| closed.contains(&board)) {
                continue;
            }
            self.frontier.push(Rc::new(SearchNode::child(node, board, self.heuristic)));
        }
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn stats(&self) -> SideStats {
        SideStats {
            expanded: self.expanded,
            enqueued: self.frontier.inserted(),
        }
    }
}
