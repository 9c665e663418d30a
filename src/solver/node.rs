use std::rc::Rc;

use crate::prelude::*;

/// A board reached during search, linked back to the node it was expanded
/// from. Ancestors are shared between siblings and never copied.
#[derive(Debug)]
pub struct SearchNode {
    pub board: Board,
    pub moves: usize,
    pub priority: usize,
    pub previous: Option<Rc<SearchNode>>,
}

impl SearchNode {
    pub fn root(board: Board, heuristic: Heuristic) -> Self {
        Self {
            priority: heuristic.estimate(&board),
            board,
            moves: 0,
            previous: None,
        }
    }

    pub fn child(parent: &Rc<SearchNode>, board: Board, heuristic: Heuristic) -> Self {
        let moves = parent.moves + 1;
        Self {
            priority: moves + heuristic.estimate(&board),
            board,
            moves,
            previous: Some(Rc::clone(parent)),
        }
    }

    pub fn predecessor(&self) -> Option<&Board> {
        self.previous.as_deref().map(|node| &node.board)
    }

    /// Boards from the root to this node, inclusive.
    pub fn path(&self) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.moves + 1);
        let mut current = Some(self);
        while let Some(node) = current {
            path.push(node.board.clone());
            current = node.previous.as_deref();
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_extends_moves_and_priority() {
        let root = Rc::new(SearchNode::root(board(&[&[1, 2], &[0, 3]]), Heuristic::Manhattan));
        assert_eq!(root.moves, 0);
        assert_eq!(root.priority, 1);
        assert_eq!(root.predecessor(), None);

        let next = root.board.slide(Direction::Left).unwrap();
        let child = SearchNode::child(&root, next, Heuristic::Manhattan);
        assert_eq!(child.moves, 1);
        assert_eq!(child.priority, 1);
        assert_eq!(child.predecessor(), Some(&root.board));
    }

    #[test]
    fn path_runs_from_root_to_node() {
        let start = board(&[&[1, 2, 3], &[4, 5, 6], &[0, 7, 8]]);
        let middle = start.slide(Direction::Left).unwrap();
        let end = middle.slide(Direction::Left).unwrap();

        let root = Rc::new(SearchNode::root(start.clone(), Heuristic::Hamming));
        let mid = Rc::new(SearchNode::child(&root, middle.clone(), Heuristic::Hamming));
        let last = SearchNode::child(&mid, end.clone(), Heuristic::Hamming);

        assert_eq!(last.path(), vec![start, middle, end]);
        assert!(last.board.is_goal());
        assert_eq!(Rc::strong_count(&root), 2);
    }
}
